use std::collections::HashMap;
use std::path::PathBuf;

use rand::seq::SliceRandom;
use tokio::fs;

use crate::error::DataError;
use crate::models::{Category, Question};

/// Loads per-category question sets from static JSON data.
///
/// Each category lives in its own `<category>.json` file shaped as a mapping
/// from category name to a question list. `load` hands back a freshly
/// shuffled copy on every call, so two sessions over the same category see
/// independent orders.
pub struct QuestionStore {
    source: Source,
}

enum Source {
    Dir(PathBuf),
    Fixed(HashMap<Category, Vec<Question>>),
}

impl QuestionStore {
    /// Store backed by a directory of question files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Dir(data_dir.into()),
        }
    }

    /// Store over in-memory question sets (for testing and embedders that
    /// bundle their data)
    pub fn fixed(sets: HashMap<Category, Vec<Question>>) -> Self {
        Self {
            source: Source::Fixed(sets),
        }
    }

    /// Load a category's questions in a fresh random order
    pub async fn load(&self, category: Category) -> Result<Vec<Question>, DataError> {
        let mut questions = match &self.source {
            Source::Dir(dir) => {
                let path = dir.join(format!("{}.json", category.as_str()));
                let content = fs::read_to_string(&path).await?;
                let mut sets: HashMap<String, Vec<Question>> = serde_json::from_str(&content)?;
                // A file that lacks its own category key just has no questions
                sets.remove(category.as_str()).unwrap_or_default()
            }
            Source::Fixed(sets) => sets.get(&category).cloned().unwrap_or_default(),
        };

        questions.shuffle(&mut rand::rng());

        tracing::info!(
            "Loaded {} questions for category {}",
            questions.len(),
            category
        );

        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, HintSet};
    use std::collections::HashSet;

    fn question(id: u32, answer: &str) -> Question {
        Question {
            id,
            emojis: "🦈🌊".to_string(),
            answer: answer.to_string(),
            difficulty: Difficulty::Easy,
            hints: HintSet {
                easy: "a".to_string(),
                medium: "b".to_string(),
                hard: "c".to_string(),
            },
            artist: None,
        }
    }

    fn fixed_store(count: u32) -> QuestionStore {
        let questions: Vec<Question> = (0..count).map(|i| question(i, "Jaws")).collect();
        let mut sets = HashMap::new();
        sets.insert(Category::Movies, questions);
        QuestionStore::fixed(sets)
    }

    #[tokio::test]
    async fn test_load_returns_a_permutation_of_the_source_set() {
        let store = fixed_store(20);
        let questions = store.load(Category::Movies).await.unwrap();

        assert_eq!(questions.len(), 20);
        let ids: HashSet<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, (0..20).collect::<HashSet<u32>>());
    }

    #[tokio::test]
    async fn test_load_of_unlisted_category_is_empty_not_an_error() {
        let store = fixed_store(5);
        let questions = store.load(Category::Songs).await.unwrap();
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn test_missing_data_file_reports_unavailable() {
        let store = QuestionStore::new("/nonexistent/question-data");
        let result = store.load(Category::Movies).await;
        assert!(matches!(result, Err(DataError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_load_reads_category_keyed_json_files() {
        let dir = std::env::temp_dir().join(format!("emoji-guess-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let payload = r#"{
            "movies": [
                {
                    "id": 1,
                    "emojis": "🦈🌊",
                    "answer": "Jaws",
                    "difficulty": "medium",
                    "hints": {"easy": "a", "medium": "b", "hard": "c"}
                }
            ]
        }"#;
        std::fs::write(dir.join("movies.json"), payload).unwrap();

        let store = QuestionStore::new(&dir);
        let questions = store.load(Category::Movies).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "Jaws");
        assert_eq!(questions[0].difficulty, Difficulty::Medium);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_garbage_data_file_reports_malformed() {
        let dir = std::env::temp_dir().join(format!("emoji-guess-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("series.json"), "not json at all").unwrap();

        let store = QuestionStore::new(&dir);
        let result = store.load(Category::Series).await;
        assert!(matches!(result, Err(DataError::Malformed(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
