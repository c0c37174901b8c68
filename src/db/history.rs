use crate::libs::task::TaskId;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, Result};
use serde::{Deserialize, Serialize};

const INSERT_COMPLETION: &str = "INSERT OR IGNORE INTO history (owner, task_id, day, status) VALUES (?1, ?2, ?3, ?4)";
const DELETE_COMPLETION: &str = "DELETE FROM history WHERE owner = ?1 AND task_id = ?2 AND day = ?3";
const DELETE_FOR_TASK: &str = "DELETE FROM history WHERE task_id = ?1";
const SELECT_RANGE: &str = "
    SELECT owner, task_id, day, status FROM history
    WHERE owner = ?1 AND day >= ?2 AND day <= ?3
    ORDER BY day ASC, task_id ASC
";
const SELECT_LAST_BEFORE: &str = "
    SELECT MAX(day) FROM history
    WHERE owner = ?1 AND task_id = ?2 AND day < ?3 AND status = ?4
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    Completed,
    /// Reserved; a missing record already means the day was not completed.
    Missed,
}

impl HistoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryStatus::Completed => "completed",
            HistoryStatus::Missed => "missed",
        }
    }
}

impl ToSql for HistoryStatus {
    fn to_sql(&self) -> Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for HistoryStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "completed" => Ok(HistoryStatus::Completed),
            "missed" => Ok(HistoryStatus::Missed),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub owner: String,
    pub task_id: TaskId,
    pub day: NaiveDate,
    pub status: HistoryStatus,
}

/// Completion log keyed by (owner, task, day).
///
/// Writes are idempotent: recording an existing day and removing a missing
/// one both succeed without changes.
pub struct HistoryLog<'a> {
    conn: &'a Connection,
}

impl<'a> HistoryLog<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn record_completion(&self, owner: &str, task_id: TaskId, day: NaiveDate) -> Result<()> {
        self.conn
            .execute(INSERT_COMPLETION, params![owner, task_id, day, HistoryStatus::Completed])?;
        Ok(())
    }

    pub fn remove_completion(&self, owner: &str, task_id: TaskId, day: NaiveDate) -> Result<()> {
        self.conn.execute(DELETE_COMPLETION, params![owner, task_id, day])?;
        Ok(())
    }

    /// Records of `owner` with `start <= day <= end`, oldest day first.
    pub fn query(&self, owner: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<HistoryRecord>> {
        let mut stmt = self.conn.prepare(SELECT_RANGE)?;
        let record_iter = stmt.query_map(params![owner, start, end], |row| {
            Ok(HistoryRecord {
                owner: row.get(0)?,
                task_id: row.get(1)?,
                day: row.get(2)?,
                status: row.get(3)?,
            })
        })?;

        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    pub fn delete_all_for_task(&self, task_id: TaskId) -> Result<usize> {
        self.conn.execute(DELETE_FOR_TASK, params![task_id])
    }

    /// Latest completed day strictly before `day` for the task.
    pub fn last_completion_before(&self, owner: &str, task_id: TaskId, day: NaiveDate) -> Result<Option<NaiveDate>> {
        self.conn.query_row(
            SELECT_LAST_BEFORE,
            params![owner, task_id, day, HistoryStatus::Completed],
            |row| row.get(0),
        )
    }
}
