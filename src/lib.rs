//! Core engine for an emoji guessing game: a player is shown an emoji
//! sequence and types the movie, series, or song title it stands for.
//!
//! The crate covers question loading and shuffling, the session state
//! machine with its coin and hint economy, and the persisted high-score
//! list. It deliberately stops there — rendering, input handling, and
//! packaging belong to whatever front end embeds it.
//!
//! Entry points: build a [`QuestionStore`] over your data directory, open a
//! [`ScoreStore`] over a [`ScoreBackend`], and drive a [`GameSession`].
//! Every transition publishes a fresh [`GameState`](models::GameState)
//! snapshot, observable through [`GameSession::subscribe`].

pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod scores;
pub mod store;

pub use config::{Config, GameConfig};
pub use error::{DataError, ScoreError};
pub use game::GameSession;
pub use models::{
    Category, Difficulty, GameState, GameStatus, HintLevel, HintSet, Question, ScoreRecord,
};
pub use scores::{FileBackend, MemoryBackend, ScoreBackend, ScoreStore};
pub use store::QuestionStore;
