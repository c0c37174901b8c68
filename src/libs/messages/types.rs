use crate::libs::task::TaskId;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskDeleted(TaskId),
    TaskMarkedDone(String, u32),
    TaskMarkedUndone(String, u32),
    TaskTextRequired,
    TasksHeader,
    NoTasksFound,

    // === HISTORY MESSAGES ===
    HistoryHeader(String, String),
    NoHistoryFound(String, String),
    HistoryRangeRequired,
    InvalidDate(String),
    HistoryWriteFailed(TaskId, String),

    // === INSIGHTS MESSAGES ===
    InsightsHeader,
    BadgesHeader,
    BadgesUnlocked(usize, usize),

    // === GUEST / REMOTE MESSAGES ===
    GuestModeHeader,
    RemoteNotConfigured,
    RemoteFetchFailed(String),
    UsingCachedTasks,
    LoggedOut(String),

    // === SERVER MESSAGES ===
    ServerListening(String),
    ServerNoTokens,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigModuleAuth,
    ConfigModuleOwner,
    ConfigModuleClock,
    ConfigModuleRemote,
    PromptSelectModules,
    PromptServerHost,
    PromptServerPort,
    PromptAuthToken,
    PromptAuthOwner,
    PromptLocalOwner,
    PromptUtcOffset,
    PromptRemoteApiUrl,
    PromptRemoteToken,
    PromptRemoteOwner,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseVersion(u32, u32),
    DatabaseNeedsUpdate,
    MigrationHistory,
}
