//! Display implementation for streaks application messages.
//!
//! All user-facing text lives here so that commands, the server and the
//! migration system print consistent wording. Messages carrying data use
//! typed parameters and are formatted in one place.
//!
//! ```rust
//! use streaks::libs::messages::Message;
//!
//! let message = Message::TaskCreated("Read 20 pages".to_string());
//! assert_eq!(message.to_string(), "Task 'Read 20 pages' created");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(text) => format!("Task '{}' created", text),
            Message::TaskDeleted(id) => format!("Task {} removed together with its history", id),
            Message::TaskMarkedDone(text, streak) => format!("'{}' done for today. Streak: {} day(s)", text, streak),
            Message::TaskMarkedUndone(text, streak) => format!("'{}' unmarked for today. Streak: {} day(s)", text, streak),
            Message::TaskTextRequired => "Task text must not be empty".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks yet. Add one with `streaks task add <text>`".to_string(),

            // === HISTORY MESSAGES ===
            Message::HistoryHeader(from, to) => format!("Completion history {} .. {}:", from, to),
            Message::NoHistoryFound(from, to) => format!("No completions recorded between {} and {}", from, to),
            Message::HistoryRangeRequired => "Please provide startDate and endDate".to_string(),
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),
            Message::HistoryWriteFailed(id, error) => format!("History update for task {} failed: {}", id, error),

            // === INSIGHTS MESSAGES ===
            Message::InsightsHeader => "Your insights:".to_string(),
            Message::BadgesHeader => "Achievements:".to_string(),
            Message::BadgesUnlocked(unlocked, total) => format!("{} of {} badges unlocked", unlocked, total),

            // === GUEST / REMOTE MESSAGES ===
            Message::GuestModeHeader => "Guest tasks (stored on this machine only):".to_string(),
            Message::RemoteNotConfigured => "Remote server is not configured. Run `streaks init` and select Remote".to_string(),
            Message::RemoteFetchFailed(error) => format!("Failed to reach the streaks server: {}", error),
            Message::UsingCachedTasks => "Showing cached tasks from the last successful sync".to_string(),
            Message::LoggedOut(owner) => format!("Cached data for '{}' cleared", owner),

            // === SERVER MESSAGES ===
            Message::ServerListening(addr) => format!("Streaks API listening on http://{}", addr),
            Message::ServerNoTokens => "No auth tokens configured; every request will be rejected with 401".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleAuth => "Auth tokens".to_string(),
            Message::ConfigModuleOwner => "Local owner".to_string(),
            Message::ConfigModuleClock => "Clock".to_string(),
            Message::ConfigModuleRemote => "Remote server".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServerHost => "Bind address".to_string(),
            Message::PromptServerPort => "Port".to_string(),
            Message::PromptAuthToken => "Bearer token".to_string(),
            Message::PromptAuthOwner => "Owner id for this token".to_string(),
            Message::PromptLocalOwner => "Owner id used by local commands".to_string(),
            Message::PromptUtcOffset => "UTC offset in minutes (empty for system local time)".to_string(),
            Message::PromptRemoteApiUrl => "Server URL".to_string(),
            Message::PromptRemoteToken => "Bearer token".to_string(),
            Message::PromptRemoteOwner => "Owner id the token belongs to".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseVersion(current, latest) => format!("Database schema version: v{} (latest v{})", current, latest),
            Message::DatabaseNeedsUpdate => "Database schema is outdated; it is upgraded the next time the store opens".to_string(),
            Message::MigrationHistory => "Applied migrations:".to_string(),
        };

        write!(f, "{}", text)
    }
}
