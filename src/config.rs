use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::models::{Difficulty, HintLevel};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one `<category>.json` question file per category
    pub data_dir: String,
    /// File the serialized high-score list is rewritten to
    pub scores_path: String,
}

/// Tunables for the in-game economy
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub starting_coins: u32,
    pub score_per_question: ScoreTable,
    pub hint_costs: HintCosts,
    pub reveal_cost: u32,
    pub correct_answer_reward: u32,
    /// Retained high scores per category; older revisions of the game shipped
    /// anywhere from 10 to 100
    pub high_score_cap: usize,
}

/// Base score awarded for a correct answer, by question difficulty
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreTable {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

/// Coin price of each hint tier
#[derive(Debug, Clone, Deserialize)]
pub struct HintCosts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl GameConfig {
    pub fn score_for(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.score_per_question.easy,
            Difficulty::Medium => self.score_per_question.medium,
            Difficulty::Hard => self.score_per_question.hard,
        }
    }

    pub fn hint_cost(&self, level: HintLevel) -> u32 {
        match level {
            HintLevel::Easy => self.hint_costs.easy,
            HintLevel::Medium => self.hint_costs.medium,
            HintLevel::Hard => self.hint_costs.hard,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_coins: 100,
            score_per_question: ScoreTable {
                easy: 10,
                medium: 20,
                hard: 30,
            },
            hint_costs: HintCosts {
                easy: 10,
                medium: 20,
                hard: 30,
            },
            reveal_cost: 50,
            correct_answer_reward: 30,
            high_score_cap: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let storage = StorageConfig {
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            scores_path: env::var("SCORES_PATH").unwrap_or_else(|_| "./scores.json".to_string()),
        };

        let game = GameConfig {
            starting_coins: parse_var("STARTING_COINS", 100)?,
            score_per_question: ScoreTable {
                easy: parse_var("SCORE_EASY", 10)?,
                medium: parse_var("SCORE_MEDIUM", 20)?,
                hard: parse_var("SCORE_HARD", 30)?,
            },
            hint_costs: HintCosts {
                easy: parse_var("HINT_COST_EASY", 10)?,
                medium: parse_var("HINT_COST_MEDIUM", 20)?,
                hard: parse_var("HINT_COST_HARD", 30)?,
            },
            reveal_cost: parse_var("REVEAL_COST", 50)?,
            correct_answer_reward: parse_var("CORRECT_ANSWER_REWARD", 30)?,
            high_score_cap: parse_var("HIGH_SCORE_CAP", 10)?,
        };

        Ok(Config { storage, game })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .ok()
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}
