pub mod question;
pub mod score;
pub mod state;

pub use question::{Category, Difficulty, HintLevel, HintSet, Question};
pub use score::ScoreRecord;
pub use state::{GameState, GameStatus, HintFlags};
