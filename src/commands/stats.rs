use crate::{
    libs::{config::Config, insights, messages::Message, store::TaskStore, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let store = TaskStore::open(&config)?;
    let tasks = store.list(config.local_owner())?;
    let report = insights::report(&tasks, store.today());

    msg_print!(Message::InsightsHeader, true);
    View::report(&report);

    msg_print!(Message::BadgesHeader, true);
    View::badges(&report);

    let unlocked = report.badges.iter().filter(|badge| badge.unlocked).count();
    msg_info!(Message::BadgesUnlocked(unlocked, report.badges.len()));

    Ok(())
}
