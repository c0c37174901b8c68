use crate::{
    libs::{config::Config, messages::Message, store::TaskStore},
    msg_warning,
    server::{self, AppState},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind, overrides the configured host
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on, overrides the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = Config::read()?;
    let server_config = config.server_config();
    let host = args.host.unwrap_or(server_config.host);
    let port = args.port.unwrap_or(server_config.port);

    let tokens = config.tokens();
    if tokens.is_empty() {
        msg_warning!(Message::ServerNoTokens);
    }

    let store = TaskStore::open(&config)?;
    server::start_server(AppState::new(store, tokens), &host, port).await
}
