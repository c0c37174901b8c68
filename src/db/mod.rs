//! Database layer for the streaks application.
//!
//! SQLite persistence for tasks and their completion history. The schema is
//! owned by the versioned [`migrations`] module; [`tasks`] and [`history`]
//! provide typed row access borrowing a single connection, so callers can run
//! both inside one transaction.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use streaks::db::{db::Db, history::HistoryLog, tasks::Tasks};
//!
//! let db = Db::in_memory().unwrap();
//! let day = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
//! let task = Tasks::new(&db.conn).insert("alice", "Meditate", day).unwrap();
//! HistoryLog::new(&db.conn).record_completion("alice", task.id, day).unwrap();
//! ```

/// Connection management and initialization.
pub mod db;

/// Completion history records.
pub mod history;

/// Versioned schema migrations.
pub mod migrations;

/// Task rows and their streak state.
pub mod tasks;
