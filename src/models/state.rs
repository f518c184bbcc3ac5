use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::question::{Category, HintLevel, Question};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Finished,
    // TODO: wire up once the pause/resume UI flow lands; nothing produces it yet
    Paused,
}

/// Which hint tiers have been bought for the current question.
/// Reset on every question change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintFlags {
    pub easy: bool,
    pub medium: bool,
    pub hard: bool,
}

impl HintFlags {
    pub fn is_used(&self, level: HintLevel) -> bool {
        match level {
            HintLevel::Easy => self.easy,
            HintLevel::Medium => self.medium,
            HintLevel::Hard => self.hard,
        }
    }

    pub fn mark_used(&mut self, level: HintLevel) {
        match level {
            HintLevel::Easy => self.easy = true,
            HintLevel::Medium => self.medium = true,
            HintLevel::Hard => self.hard = true,
        }
    }

    pub fn clear(&mut self) {
        *self = HintFlags::default();
    }
}

/// Complete snapshot of one game session.
///
/// Transitions never patch a snapshot in place; every operation builds a full
/// replacement and publishes it, so a snapshot handed to an observer stays
/// valid forever.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub session_id: Uuid,
    pub current_question: Option<Question>,
    pub current_index: usize,
    pub score: u32,
    pub coins: u32,
    pub correct_answers: u32,
    pub hints_used: HintFlags,
    pub time_started: DateTime<Utc>,
    pub category: Category,
    pub questions: Vec<Question>,
    pub status: GameStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
}

impl GameState {
    /// Fresh pre-game state: no questions yet, full starting balance
    pub fn initial(category: Category, starting_coins: u32) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            current_question: None,
            current_index: 0,
            score: 0,
            coins: starting_coins,
            correct_answers: 0,
            hints_used: HintFlags::default(),
            time_started: Utc::now(),
            category,
            questions: Vec::new(),
            status: GameStatus::Playing,
            player_name: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn total_questions(&self) -> u32 {
        self.questions.len() as u32
    }
}
