use serde::{Deserialize, Serialize};
use std::fmt;

/// Question category. Each category has its own static data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movies,
    Series,
    Songs,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Movies, Category::Series, Category::Songs];

    /// Key used both in data files and as the file name stem
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Movies => "movies",
            Category::Series => "series",
            Category::Songs => "songs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question difficulty, which also keys the base score awarded for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Hint tier. Tiers are priced independently and can be bought in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintLevel {
    Easy,
    Medium,
    Hard,
}

impl HintLevel {
    pub const ALL: [HintLevel; 3] = [HintLevel::Easy, HintLevel::Medium, HintLevel::Hard];
}

/// The three purchasable hints for a question, one per tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintSet {
    pub easy: String,
    pub medium: String,
    pub hard: String,
}

impl HintSet {
    pub fn get(&self, level: HintLevel) -> &str {
        match level {
            HintLevel::Easy => &self.easy,
            HintLevel::Medium => &self.medium,
            HintLevel::Hard => &self.hard,
        }
    }
}

/// One puzzle: an emoji sequence and the title it stands for.
/// Immutable once loaded from the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub emojis: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub hints: HintSet,
    /// Attribution for songs (performer); absent for movies and series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}
