//! Command-line interface.
//!
//! Every subcommand lives in its own module exposing an `Args` type and a
//! `cmd` function; [`Cli::menu`] parses the arguments and dispatches.

pub mod guest;
pub mod history;
pub mod init;
pub mod migrations;
pub mod remote;
pub mod serve;
pub mod stats;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the HTTP API")]
    Serve(serve::ServeArgs),
    #[command(about = "Manage your tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Show completion history for a range of days")]
    History(history::HistoryArgs),
    #[command(about = "Show insights and achievements")]
    Stats,
    #[command(about = "Manage guest tasks stored on this machine", arg_required_else_help = true)]
    Guest(guest::GuestArgs),
    #[command(about = "Work with tasks on a remote streaks server", arg_required_else_help = true)]
    Remote(remote::RemoteArgs),
    #[command(about = "Inspect the database schema version")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether the command runs long enough to want `info` level logs by default.
    pub fn is_service(&self) -> bool {
        matches!(self.command, Commands::Serve(_))
    }

    pub async fn menu(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Task(args) => task::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Guest(args) => guest::cmd(args),
            Commands::Remote(args) => remote::cmd(args).await,
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
