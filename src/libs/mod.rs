//! Core library modules for the streaks application.
//!
//! ## Features
//!
//! - **Streak Engine**: pure toggle and decay rules ([`streak`])
//! - **Task Store**: owner-scoped operations over the database ([`store`])
//! - **Insights**: aggregates and streak badges ([`insights`])
//! - **Client Side**: scoped cache and guest replica ([`cache`], [`guest`])
//! - **Infrastructure**: clock, configuration, data storage, messaging
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use streaks::db::db::Db;
//! use streaks::libs::clock::FixedClock;
//! use streaks::libs::store::TaskStore;
//!
//! let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()));
//! let store = TaskStore::new(Db::in_memory().unwrap(), clock);
//! let task = store.create("alice", "Drink water").unwrap();
//! assert_eq!(store.toggle("alice", task.id).unwrap().streak, 1);
//! ```

pub mod cache;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod guest;
pub mod insights;
pub mod messages;
pub mod store;
pub mod streak;
pub mod task;
pub mod view;
