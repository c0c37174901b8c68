use super::history::HistoryArgs;
use super::task::print_toggled;
use crate::{
    api::StreaksClient,
    libs::{cache::FileCache, clock::{Clock, SystemClock}, config::Config, messages::Message, task::TaskId, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct RemoteArgs {
    #[command(subcommand)]
    command: RemoteCommand,
}

#[derive(Debug, Subcommand)]
enum RemoteCommand {
    /// List tasks, falling back to the last synced copy when offline
    List,
    /// Add a task on the server
    Add {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Toggle today's completion of a task
    Done {
        /// Task ID
        id: TaskId,
    },
    /// Delete a task on the server
    Delete {
        /// Task ID
        id: TaskId,
    },
    /// Show completion history from the server
    History(HistoryArgs),
    /// Forget the locally cached data for the configured owner
    Logout,
}

pub async fn cmd(args: RemoteArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(remote) = config.remote.as_ref() else {
        msg_bail_anyhow!(Message::RemoteNotConfigured);
    };
    let client = StreaksClient::new(remote, FileCache::new()?);

    match args.command {
        RemoteCommand::List => {
            let (tasks, from_cache) = client.list().await?;
            if from_cache {
                msg_warning!(Message::UsingCachedTasks);
            }
            if tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
                return Ok(());
            }
            msg_print!(Message::TasksHeader, true);
            View::tasks(&tasks);
        }
        RemoteCommand::Add { text } => {
            let task = client.add(&text.join(" ")).await?;
            msg_success!(Message::TaskCreated(task.text));
        }
        RemoteCommand::Done { id } => {
            let task = client.toggle(id).await?;
            print_toggled(&task.text, task.completed, task.streak);
        }
        RemoteCommand::Delete { id } => {
            client.delete(id).await?;
            msg_success!(Message::TaskDeleted(id));
        }
        RemoteCommand::History(range) => {
            let today = SystemClock::from_config(config.clock.as_ref()).today();
            let (start, end) = range.range(today)?;
            let records = client.history(start, end).await?;
            if records.is_empty() {
                msg_info!(Message::NoHistoryFound(start.to_string(), end.to_string()));
                return Ok(());
            }
            let tasks = client.cached_tasks()?.unwrap_or_default();
            msg_print!(Message::HistoryHeader(start.to_string(), end.to_string()), true);
            View::history(&records, &tasks);
        }
        RemoteCommand::Logout => {
            client.logout()?;
            msg_success!(Message::LoggedOut(remote.owner.clone()));
        }
    }

    Ok(())
}
