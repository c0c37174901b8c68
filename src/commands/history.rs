use crate::{
    libs::{clock::parse_day, config::Config, messages::Message, store::TaskStore, view::View},
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use clap::Args;

/// Days shown when no range is given, today included.
pub const DEFAULT_RANGE_DAYS: i64 = 7;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// First day of the range (YYYY-MM-DD), defaults to six days ago
    #[arg(long)]
    pub from: Option<String>,
    /// Last day of the range (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub to: Option<String>,
}

impl HistoryArgs {
    /// Resolves the requested range against `today`.
    pub fn range(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        let end = match &self.to {
            Some(value) => resolve_day(value)?,
            None => today,
        };
        let start = match &self.from {
            Some(value) => resolve_day(value)?,
            None => end - Duration::days(DEFAULT_RANGE_DAYS - 1),
        };
        Ok((start, end))
    }
}

fn resolve_day(value: &str) -> Result<NaiveDate> {
    match parse_day(value) {
        Some(day) => Ok(day),
        None => msg_bail_anyhow!(Message::InvalidDate(value.to_string())),
    }
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let config = Config::read()?;
    let owner = config.local_owner();
    let store = TaskStore::open(&config)?;
    let (start, end) = args.range(store.today())?;

    let records = store.history(owner, start, end)?;
    if records.is_empty() {
        msg_info!(Message::NoHistoryFound(start.to_string(), end.to_string()));
        return Ok(());
    }

    let tasks = store.list(owner)?;
    msg_print!(Message::HistoryHeader(start.to_string(), end.to_string()), true);
    View::history(&records, &tasks);

    Ok(())
}
