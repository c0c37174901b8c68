use crate::libs::task::{Task, TaskId};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (owner, text, completed, streak, last_completed_day, created_at) VALUES (?1, ?2, FALSE, 0, NULL, ?3)";
const SELECT_TASK_BY_ID: &str = "SELECT id, owner, text, completed, streak, last_completed_day, created_at FROM tasks WHERE id = ?1";
const SELECT_TASKS_BY_OWNER: &str = "SELECT id, owner, text, completed, streak, last_completed_day, created_at FROM tasks WHERE owner = ?1 ORDER BY created_at DESC, id DESC";
const UPDATE_TASK_STATE: &str = "UPDATE tasks SET completed = ?2, streak = ?3, last_completed_day = ?4 WHERE id = ?1";
const UPDATE_STREAK: &str = "UPDATE tasks SET streak = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Row-level access to the `tasks` table.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn insert(&self, owner: &str, text: &str, created_at: NaiveDate) -> Result<Task> {
        self.conn.execute(INSERT_TASK, params![owner, text, created_at])?;
        let id = self.conn.last_insert_rowid();

        Ok(Task::new(id, owner, text, created_at))
    }

    pub fn get_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        self.conn.query_row(SELECT_TASK_BY_ID, params![id], Self::from_row).optional()
    }

    /// Tasks of one owner, newest first.
    pub fn fetch_by_owner(&self, owner: &str) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS_BY_OWNER)?;
        let task_iter = stmt.query_map(params![owner], Self::from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Persists the streak fields of `task`; text and owner are immutable here.
    pub fn update_state(&self, task: &Task) -> Result<usize> {
        self.conn.execute(
            UPDATE_TASK_STATE,
            params![task.id, task.completed, task.streak, task.last_completed_day],
        )
    }

    pub fn update_streak(&self, id: TaskId, streak: u32) -> Result<usize> {
        self.conn.execute(UPDATE_STREAK, params![id, streak])
    }

    pub fn delete(&self, id: TaskId) -> Result<usize> {
        self.conn.execute(DELETE_TASK, params![id])
    }

    fn from_row(row: &Row<'_>) -> Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            owner: row.get(1)?,
            text: row.get(2)?,
            completed: row.get(3)?,
            streak: row.get(4)?,
            last_completed_day: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}
