use crate::{
    libs::{config::Config, messages::Message, store::TaskStore, task::TaskId, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a new daily task
    Add {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List tasks with their current streaks
    List,
    /// Toggle today's completion of a task
    Done {
        /// Task ID
        id: TaskId,
    },
    /// Delete a task together with its history
    Delete {
        /// Task ID
        id: TaskId,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let config = Config::read()?;
    let owner = config.local_owner();
    let mut store = TaskStore::open(&config)?;

    match args.command {
        TaskCommand::Add { text } => {
            let task = store.create(owner, &text.join(" "))?;
            msg_success!(Message::TaskCreated(task.text));
        }
        TaskCommand::List => {
            let tasks = store.list(owner)?;
            if tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
                return Ok(());
            }
            msg_print!(Message::TasksHeader, true);
            View::tasks(&tasks);
        }
        TaskCommand::Done { id } => {
            let task = store.toggle(owner, id)?;
            print_toggled(&task.text, task.completed, task.streak);
        }
        TaskCommand::Delete { id } => {
            store.delete(owner, id)?;
            msg_success!(Message::TaskDeleted(id));
        }
    }

    Ok(())
}

pub(crate) fn print_toggled(text: &str, completed: bool, streak: u32) {
    if completed {
        msg_success!(Message::TaskMarkedDone(text.to_string(), streak));
    } else {
        msg_info!(Message::TaskMarkedUndone(text.to_string(), streak));
    }
}
