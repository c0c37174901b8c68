use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row id assigned by the store when a task is created.
pub type TaskId = i64;

/// A habit owned by a single user, together with its streak state.
///
/// `streak` counts consecutive completed days ending at `last_completed_day`
/// and is always zero while `last_completed_day` is `None`. `completed`
/// describes today's instance; it may be stale when read on a later day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub owner: String,
    pub text: String,
    pub completed: bool,
    pub streak: u32,
    pub last_completed_day: Option<NaiveDate>,
    pub created_at: NaiveDate,
}

impl Task {
    pub fn new(id: TaskId, owner: &str, text: &str, created_at: NaiveDate) -> Self {
        Task {
            id,
            owner: owner.to_string(),
            text: text.to_string(),
            completed: false,
            streak: 0,
            last_completed_day: None,
            created_at,
        }
    }

    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner == owner
    }
}

/// Trims task text and rejects labels that are empty afterwards.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
