use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::question::Category;

/// One finished game as it appears on the high-score list.
/// Created once when a session ends and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    pub category: Category,
    pub recorded_at: DateTime<Utc>,
    /// Wall-clock duration of the session, in milliseconds
    pub time_spent_ms: i64,
    /// Questions answered correctly
    pub questions_answered: u32,
    pub total_questions: u32,
}
