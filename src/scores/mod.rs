use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::fs;

use crate::error::ScoreError;
use crate::models::{Category, ScoreRecord};

/// Persistence for the high-score list.
///
/// The whole list travels as one serialized blob, rewritten wholesale on
/// every finished game. Missing or corrupt stored data loads as an empty
/// list; a read never fails.
#[async_trait]
pub trait ScoreBackend: Send + Sync {
    async fn load(&self) -> Vec<ScoreRecord>;
    async fn save(&self, records: &[ScoreRecord]) -> Result<(), ScoreError>;
}

/// Blob storage in a local file
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScoreBackend for FileBackend {
    async fn load(&self) -> Vec<ScoreRecord> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt score data in {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn save(&self, records: &[ScoreRecord]) -> Result<(), ScoreError> {
        let json = serde_json::to_string(records).map_err(ScoreError::Encode)?;
        fs::write(&self.path, json).await.map_err(ScoreError::Write)
    }
}

/// Blob storage in memory, shared across clones.
///
/// Serializes exactly like the file backend so tests exercise the same
/// encode/decode path.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with an arbitrary blob, valid or not
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }
}

#[async_trait]
impl ScoreBackend for MemoryBackend {
    async fn load(&self) -> Vec<ScoreRecord> {
        let blob = self.blob.lock().expect("score blob lock poisoned");
        match blob.as_deref() {
            Some(content) => match serde_json::from_str(content) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Ignoring corrupt in-memory score data: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        }
    }

    async fn save(&self, records: &[ScoreRecord]) -> Result<(), ScoreError> {
        let json = serde_json::to_string(records).map_err(ScoreError::Encode)?;
        *self.blob.lock().expect("score blob lock poisoned") = Some(json);
        Ok(())
    }
}

/// Bounded, score-descending high-score list with per-category buckets
pub struct ScoreStore {
    backend: Box<dyn ScoreBackend>,
    cap: usize,
    records: Vec<ScoreRecord>,
}

impl ScoreStore {
    /// Read whatever the backend currently holds and serve from that
    pub async fn open(backend: Box<dyn ScoreBackend>, cap: usize) -> Self {
        let records = backend.load().await;
        tracing::info!("Loaded {} stored score records", records.len());
        Self {
            backend,
            cap,
            records,
        }
    }

    /// Insert a finished game.
    ///
    /// The record's category bucket is re-sorted descending by score and
    /// trimmed to the cap; other categories' buckets keep their order and
    /// size. The full set is then persisted in one write.
    pub async fn record(&mut self, entry: ScoreRecord) -> Result<(), ScoreError> {
        let category = entry.category;
        self.records.push(entry);

        let (mut bucket, rest): (Vec<ScoreRecord>, Vec<ScoreRecord>) = self
            .records
            .drain(..)
            .partition(|record| record.category == category);
        bucket.sort_by(|a, b| b.score.cmp(&a.score));
        bucket.truncate(self.cap);

        // Rewrite order mirrors the blob layout: touched bucket first
        self.records = bucket;
        self.records.extend(rest);

        self.backend.save(&self.records).await
    }

    /// All records, or one category's, in stored order
    pub fn query(&self, category: Option<Category>) -> Vec<ScoreRecord> {
        match category {
            Some(category) => self
                .records
                .iter()
                .filter(|record| record.category == category)
                .cloned()
                .collect(),
            None => self.records.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(category: Category, score: u32) -> ScoreRecord {
        ScoreRecord {
            score,
            player_name: Some("tester".to_string()),
            category,
            recorded_at: Utc::now(),
            time_spent_ms: 42_000,
            questions_answered: 3,
            total_questions: 5,
        }
    }

    async fn empty_store(cap: usize) -> ScoreStore {
        ScoreStore::open(Box::new(MemoryBackend::new()), cap).await
    }

    #[tokio::test]
    async fn test_bucket_stays_sorted_and_capped() {
        let mut store = empty_store(3).await;
        for score in [10, 50, 30, 20, 40] {
            store.record(entry(Category::Movies, score)).await.unwrap();
        }

        let movies = store.query(Some(Category::Movies));
        let scores: Vec<u32> = movies.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![50, 40, 30], "top scores, descending, capped");
    }

    #[tokio::test]
    async fn test_recording_leaves_other_categories_untouched() {
        let mut store = empty_store(2).await;
        store.record(entry(Category::Songs, 15)).await.unwrap();
        store.record(entry(Category::Songs, 25)).await.unwrap();

        // Overflow the movies bucket; songs must survive intact
        for score in [1, 2, 3, 4] {
            store.record(entry(Category::Movies, score)).await.unwrap();
        }

        let songs = store.query(Some(Category::Songs));
        let scores: Vec<u32> = songs.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![25, 15]);
        assert_eq!(store.query(Some(Category::Movies)).len(), 2);
    }

    #[tokio::test]
    async fn test_records_survive_a_reopen_through_the_same_backend() {
        let backend = MemoryBackend::new();

        let mut store = ScoreStore::open(Box::new(backend.clone()), 10).await;
        store.record(entry(Category::Series, 70)).await.unwrap();
        store.record(entry(Category::Series, 90)).await.unwrap();

        let reopened = ScoreStore::open(Box::new(backend), 10).await;
        let series = reopened.query(Some(Category::Series));
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].score, 90);
    }

    #[test]
    fn test_corrupt_blob_loads_as_empty_list() {
        let backend = MemoryBackend::with_blob("{definitely not score data");
        let records = tokio_test::block_on(backend.load());
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_file_loads_as_empty_list() {
        let backend = FileBackend::new("/nonexistent/scores.json");
        let records = tokio_test::block_on(backend.load());
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_query_without_category_returns_everything_in_stored_order() {
        let mut store = empty_store(10).await;
        store.record(entry(Category::Movies, 5)).await.unwrap();
        store.record(entry(Category::Songs, 8)).await.unwrap();

        let all = store.query(None);
        assert_eq!(all.len(), 2);
        // Songs was recorded last, so its bucket leads the stored order
        assert_eq!(all[0].category, Category::Songs);
    }
}
