//! Task store: owner-scoped task operations on top of the database.
//!
//! The store is the only writer of task state. It looks tasks up, enforces
//! ownership, runs the streak engine and persists both the task row and the
//! history effect the engine asks for.
//!
//! History writes during a toggle are best-effort: the task row is committed
//! first, and a failing history write is logged without undoing it.

use super::clock::{Clock, SystemClock};
use super::config::Config;
use super::error::{StoreError, StoreResult};
use super::streak::{self, HistoryEffect, Toggle};
use super::task::{normalize_text, Task, TaskId};
use crate::db::db::Db;
use crate::db::history::{HistoryLog, HistoryRecord};
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct TaskStore {
    db: Db,
    clock: Arc<dyn Clock>,
}

impl TaskStore {
    pub fn new(db: Db, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    /// Store backed by the default database file and the configured clock.
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        let clock = SystemClock::from_config(config.clock.as_ref());
        Ok(Self::new(Db::new()?, Arc::new(clock)))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn create(&self, owner: &str, text: &str) -> StoreResult<Task> {
        let text = normalize_text(text).ok_or_else(|| StoreError::Validation(Message::TaskTextRequired.to_string()))?;
        let task = Tasks::new(&self.db.conn).insert(owner, &text, self.today())?;
        debug!(owner, task_id = task.id, "task created");
        Ok(task)
    }

    /// Fetches a task, failing when it is missing or owned by someone else.
    pub fn get(&self, owner: &str, id: TaskId) -> StoreResult<Task> {
        let task = Tasks::new(&self.db.conn).get_by_id(id)?.ok_or(StoreError::NotFound(id))?;
        if !task.is_owned_by(owner) {
            return Err(StoreError::Forbidden(id));
        }
        Ok(task)
    }

    /// Removes a task and all of its history in one transaction.
    pub fn delete(&mut self, owner: &str, id: TaskId) -> StoreResult<()> {
        self.get(owner, id)?;

        let tx = self.db.conn.transaction()?;
        Tasks::new(&tx).delete(id)?;
        let removed = HistoryLog::new(&tx).delete_all_for_task(id)?;
        tx.commit()?;

        debug!(owner, task_id = id, removed, "task deleted");
        Ok(())
    }

    /// Lists the owner's tasks, newest first, with broken streaks zeroed and saved.
    pub fn list(&self, owner: &str) -> StoreResult<Vec<Task>> {
        let today = self.today();
        let tasks = Tasks::new(&self.db.conn);

        let mut decayed = Vec::new();
        for task in tasks.fetch_by_owner(owner)? {
            let next = streak::decay(&task, today);
            if next.streak != task.streak {
                tasks.update_streak(next.id, next.streak)?;
                debug!(owner, task_id = next.id, previous = task.streak, "streak decayed");
            }
            decayed.push(next);
        }
        Ok(decayed)
    }

    /// Flips today's completion of a task and returns its new state.
    pub fn toggle(&self, owner: &str, id: TaskId) -> StoreResult<Task> {
        let task = self.get(owner, id)?;
        let today = self.today();
        let history = HistoryLog::new(&self.db.conn);

        // Only an undo that leaves no streak needs the log to find its last day.
        let previous_completion = if task.completed && task.last_completed_day == Some(today) && task.streak <= 1 {
            history.last_completion_before(owner, id, today).unwrap_or_else(|err| {
                warn!(task_id = id, %err, "previous completion lookup failed");
                None
            })
        } else {
            None
        };

        let Toggle { task: next, effect } = streak::apply_toggle(&task, today, previous_completion);
        Tasks::new(&self.db.conn).update_state(&next)?;

        let written = match effect {
            HistoryEffect::Record(day) => history.record_completion(owner, id, day),
            HistoryEffect::Remove(day) => history.remove_completion(owner, id, day),
        };
        if let Err(err) = written {
            warn!("{}", Message::HistoryWriteFailed(id, err.to_string()));
        }

        Ok(next)
    }

    /// Completion records of the owner with `start <= day <= end`.
    pub fn history(&self, owner: &str, start: NaiveDate, end: NaiveDate) -> StoreResult<Vec<HistoryRecord>> {
        Ok(HistoryLog::new(&self.db.conn).query(owner, start, end)?)
    }
}
