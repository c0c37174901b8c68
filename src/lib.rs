//! # Streaks - daily habit tracking with streaks and history
//!
//! Tracks recurring daily tasks, counts consecutive days of completion and
//! keeps a per-day log of completions.
//!
//! ## Features
//!
//! - **Streak Engine**: toggle today's completion, continue or restart chains
//! - **Decay**: streaks whose chain was broken read as zero on the next list
//! - **History Log**: one record per (owner, task, day), queryable by range
//! - **Insights**: totals, best streak, missed days and streak badges
//! - **HTTP API**: bearer-token authenticated JSON server
//! - **Guest Mode**: tasks kept on this machine with no account
//! - **Remote Mode**: CLI client for a running server with offline cache
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use streaks::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::parse().menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
