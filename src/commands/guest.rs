use super::task::print_toggled;
use crate::{
    libs::{
        cache::FileCache,
        config::Config,
        clock::SystemClock,
        guest::GuestReplica,
        messages::Message,
        task::TaskId,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct GuestArgs {
    #[command(subcommand)]
    command: GuestCommand,
}

#[derive(Debug, Subcommand)]
enum GuestCommand {
    /// Add a guest task
    Add {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List guest tasks
    List,
    /// Toggle today's completion of a guest task
    Done {
        /// Task ID
        id: TaskId,
    },
    /// Delete a guest task
    Delete {
        /// Task ID
        id: TaskId,
    },
    /// Remove every guest task
    Clear,
}

pub fn cmd(args: GuestArgs) -> Result<()> {
    let config = Config::read()?;
    let clock = SystemClock::from_config(config.clock.as_ref());
    let guest = GuestReplica::new(FileCache::new()?, Arc::new(clock));

    match args.command {
        GuestCommand::Add { text } => {
            let task = guest.add(&text.join(" "))?;
            msg_success!(Message::TaskCreated(task.text));
        }
        GuestCommand::List => {
            let tasks = guest.list()?;
            if tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
                return Ok(());
            }
            msg_print!(Message::GuestModeHeader, true);
            View::tasks(&tasks);
        }
        GuestCommand::Done { id } => {
            let task = guest.toggle(id)?;
            print_toggled(&task.text, task.completed, task.streak);
        }
        GuestCommand::Delete { id } => {
            guest.delete(id)?;
            msg_success!(Message::TaskDeleted(id));
        }
        GuestCommand::Clear => {
            guest.clear()?;
            msg_success!(Message::LoggedOut("guest".to_string()));
        }
    }

    Ok(())
}
