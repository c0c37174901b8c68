//! Guest mode: a task list kept entirely in the local cache.
//!
//! Guests have no server account and no history log, so toggles run the same
//! streak engine with no previous-completion hint and reads apply the same
//! decay pass as the server store.

use super::cache::{get_as, put_as, Scope, ScopedCache};
use super::clock::Clock;
use super::error::StoreError;
use super::messages::Message;
use super::streak::{apply_toggle, decay};
use super::task::{normalize_text, Task, TaskId};
use anyhow::Result;
use std::sync::Arc;

pub const GUEST_OWNER: &str = "guest";
pub const TASKS_KEY: &str = "tasks";

pub struct GuestReplica<C: ScopedCache> {
    cache: C,
    clock: Arc<dyn Clock>,
}

impl<C: ScopedCache> GuestReplica<C> {
    pub fn new(cache: C, clock: Arc<dyn Clock>) -> Self {
        Self { cache, clock }
    }

    fn load(&self) -> Result<Vec<Task>> {
        Ok(get_as::<Vec<Task>>(&self.cache, &Scope::Guest, TASKS_KEY)?.unwrap_or_default())
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        put_as(&self.cache, &Scope::Guest, TASKS_KEY, tasks)
    }

    pub fn add(&self, text: &str) -> Result<Task> {
        let text = normalize_text(text).ok_or_else(|| StoreError::Validation(Message::TaskTextRequired.to_string()))?;
        let mut tasks = self.load()?;

        let id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        let task = Task::new(id, GUEST_OWNER, &text, self.clock.today());
        tasks.insert(0, task.clone());
        self.save(&tasks)?;

        Ok(task)
    }

    /// Guest tasks, newest first, with broken streaks zeroed and saved back.
    pub fn list(&self) -> Result<Vec<Task>> {
        let today = self.clock.today();
        let tasks: Vec<Task> = self.load()?.iter().map(|task| decay(task, today)).collect();
        self.save(&tasks)?;
        Ok(tasks)
    }

    pub fn toggle(&self, id: TaskId) -> Result<Task> {
        let mut tasks = self.load()?;
        let task = tasks.iter_mut().find(|task| task.id == id).ok_or(StoreError::NotFound(id))?;

        *task = apply_toggle(task, self.clock.today(), None).task;
        let toggled = task.clone();
        self.save(&tasks)?;

        Ok(toggled)
    }

    pub fn delete(&self, id: TaskId) -> Result<()> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(StoreError::NotFound(id).into());
        }
        self.save(&tasks)
    }

    /// Drops every guest task.
    pub fn clear(&self) -> Result<()> {
        self.cache.invalidate(&Scope::Guest)
    }
}
