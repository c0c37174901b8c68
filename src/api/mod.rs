//! Clients for talking to a running streaks server.
//!
//! ```rust,no_run
//! use streaks::api::StreaksClient;
//! use streaks::libs::cache::MemoryCache;
//! use streaks::libs::config::RemoteConfig;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = RemoteConfig {
//!     api_url: "http://127.0.0.1:5000".to_string(),
//!     token: "secret".to_string(),
//!     owner: "alice".to_string(),
//! };
//! let client = StreaksClient::new(&config, MemoryCache::new());
//! let (tasks, from_cache) = client.list().await?;
//! # Ok(())
//! # }
//! ```

pub mod streaks;

pub use streaks::StreaksClient;
