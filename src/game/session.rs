use chrono::Utc;
use tokio::sync::watch;

use crate::config::GameConfig;
use crate::game::answer;
use crate::models::{Category, GameState, GameStatus, HintLevel, ScoreRecord};
use crate::scores::ScoreStore;
use crate::store::QuestionStore;

/// Drives one game session from `start` to `finished`.
///
/// The latest [`GameState`] snapshot sits behind a watch channel; every
/// transition publishes a complete replacement, never an in-place patch.
/// Observers either poll [`state`](Self::state) or await changes on
/// [`subscribe`](Self::subscribe).
///
/// Player mistakes (wrong answer, re-buying a hint, spending coins that are
/// not there) are expected outcomes, reported through sentinel return values.
/// Nothing here panics or raises on user input.
pub struct GameSession {
    config: GameConfig,
    store: QuestionStore,
    scores: ScoreStore,
    state_tx: watch::Sender<GameState>,
}

impl GameSession {
    pub fn new(config: GameConfig, store: QuestionStore, scores: ScoreStore) -> Self {
        let initial = GameState::initial(Category::Movies, config.starting_coins);
        let (state_tx, _) = watch::channel(initial);
        Self {
            config,
            store,
            scores,
            state_tx,
        }
    }

    /// Latest snapshot
    pub fn state(&self) -> GameState {
        self.state_tx.borrow().clone()
    }

    /// Receiver that resolves whenever a transition publishes a new snapshot
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.state_tx.subscribe()
    }

    /// High scores recorded so far, optionally narrowed to one category
    pub fn high_scores(&self, category: Option<Category>) -> Vec<ScoreRecord> {
        self.scores.query(category)
    }

    /// Begin a fresh session over `category`.
    ///
    /// An unavailable or empty question source is not an error: the session
    /// simply starts with nothing to ask and is finished on the spot.
    pub async fn start(&mut self, category: Category, player_name: Option<String>) {
        let questions = match self.store.load(category).await {
            Ok(questions) => questions,
            Err(e) => {
                tracing::warn!("Question data unavailable for {}: {}", category, e);
                Vec::new()
            }
        };

        let mut state = GameState::initial(category, self.config.starting_coins);
        state.player_name = player_name;
        state.current_question = questions.first().cloned();
        state.questions = questions;
        if state.questions.is_empty() {
            state.status = GameStatus::Finished;
        }

        tracing::info!(
            "Session {} started: category={}, questions={}",
            state.session_id,
            category,
            state.questions.len()
        );

        self.publish(state);
    }

    /// Check a guess against the current question.
    ///
    /// A correct guess awards the difficulty's base score plus the coin
    /// reward and moves on (finishing the session after the last question).
    /// A wrong guess stays on the question with the hint tiers reopened for
    /// the retry.
    pub async fn submit_answer(&mut self, submitted: &str) -> bool {
        let state = self.state();
        if !state.is_playing() {
            return false;
        }
        let Some(question) = state.current_question.clone() else {
            return false;
        };

        if !answer::matches(submitted, &question.answer) {
            let mut next = state;
            next.hints_used.clear();
            self.publish(next);
            return false;
        }

        let awarded = self.config.score_for(question.difficulty).max(1);
        let score = state.score + awarded;
        let coins = state.coins + self.config.correct_answer_reward;
        let correct_answers = state.correct_answers + 1;

        tracing::debug!(
            "Session {}: question {} solved for {} points",
            state.session_id,
            question.id,
            awarded
        );

        self.move_to_next(state, score, coins, correct_answers).await;
        true
    }

    /// Buy the hint at `level` for the current question.
    ///
    /// Returns the hint text, or `None` when there is no current question,
    /// the session is over, that tier was already bought for this question,
    /// or the balance cannot cover it. Tiers do not unlock in order; buying
    /// `hard` first is allowed.
    pub fn use_hint(&mut self, level: HintLevel) -> Option<String> {
        let state = self.state();
        if !state.is_playing() {
            return None;
        }
        let question = state.current_question.as_ref()?;
        if state.hints_used.is_used(level) {
            return None;
        }
        let cost = self.config.hint_cost(level);
        if state.coins < cost {
            return None;
        }

        let hint = question.hints.get(level).to_string();
        let mut next = state;
        next.coins -= cost;
        next.hints_used.mark_used(level);
        self.publish(next);

        Some(hint)
    }

    /// Buy the answer to the current question.
    ///
    /// Deliberately does not advance: the player looks at the answer first
    /// and calls [`advance`](Self::advance) when ready.
    pub fn reveal_answer(&mut self) -> Option<String> {
        let state = self.state();
        if !state.is_playing() {
            return None;
        }
        let question = state.current_question.as_ref()?;
        if state.coins < self.config.reveal_cost {
            return None;
        }

        let revealed = question.answer.clone();
        let mut next = state;
        next.coins -= self.config.reveal_cost;
        self.publish(next);

        Some(revealed)
    }

    /// Move to the next question without requiring a correct answer,
    /// finishing the session when none remain. Score and coins carry over
    /// unchanged.
    pub async fn advance(&mut self) {
        let state = self.state();
        if !state.is_playing() || state.current_question.is_none() {
            return;
        }
        let (score, coins, correct_answers) = (state.score, state.coins, state.correct_answers);
        self.move_to_next(state, score, coins, correct_answers).await;
    }

    /// Finish the session and record its result.
    ///
    /// The frozen score and correct-answer count default to the session's own
    /// tallies; callers may override either. Calling `end` on a finished
    /// session does nothing, so at most one record is ever emitted.
    pub async fn end(&mut self, final_score: Option<u32>, final_correct: Option<u32>) {
        let state = self.state();
        if state.status == GameStatus::Finished {
            return;
        }

        let mut finished = state;
        if let Some(score) = final_score {
            finished.score = score;
        }
        if let Some(correct_answers) = final_correct {
            finished.correct_answers = correct_answers;
        }
        self.finish(finished).await;
    }

    /// Throw the session away and return to the pre-game state, keeping the
    /// category. No record is emitted for the abandoned game.
    pub fn reset(&mut self) {
        let state = self.state();
        let fresh = GameState::initial(state.category, self.config.starting_coins);
        tracing::info!("Session {} reset", state.session_id);
        self.publish(fresh);
    }

    async fn move_to_next(
        &mut self,
        state: GameState,
        score: u32,
        coins: u32,
        correct_answers: u32,
    ) {
        let next_index = state.current_index + 1;

        let mut next = state;
        next.score = score;
        next.coins = coins;
        next.correct_answers = correct_answers;
        next.hints_used.clear();
        next.current_index = next_index;

        if next_index >= next.questions.len() {
            next.current_question = None;
            self.finish(next).await;
        } else {
            next.current_question = Some(next.questions[next_index].clone());
            self.publish(next);
        }
    }

    async fn finish(&mut self, mut state: GameState) {
        state.status = GameStatus::Finished;

        tracing::info!(
            "Session {} finished: score={}, correct={}/{}",
            state.session_id,
            state.score,
            state.correct_answers,
            state.total_questions()
        );

        self.publish(state.clone());
        self.record_result(&state).await;
    }

    async fn record_result(&mut self, state: &GameState) {
        let now = Utc::now();
        let record = ScoreRecord {
            score: state.score,
            player_name: state.player_name.clone(),
            category: state.category,
            recorded_at: now,
            time_spent_ms: (now - state.time_started).num_milliseconds(),
            questions_answered: state.correct_answers,
            total_questions: state.total_questions(),
        };

        // Best effort: a full disk must not take the finished game down with it
        if let Err(e) = self.scores.record(record).await {
            tracing::warn!("Failed to persist score record: {}", e);
        }
    }

    fn publish(&self, state: GameState) {
        self.state_tx.send_replace(state);
    }
}
