//! Session state and its derived queries.

use crate::models::{Category, Question, QuizSettings, UserAnswer};

/// Where a session is in its lifecycle, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Bootstrap has not completed yet.
    Uninitialized,
    /// Waiting for the player to start a run.
    Ready,
    /// A question fetch is outstanding.
    Loading,
    /// The last fetch failed; `error` holds the reason.
    Failed,
    /// Questions are loaded and some are still unanswered.
    InProgress,
    /// Every question has been answered.
    Complete,
}

/// Score summary for the recorded answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    /// Rounded percentage of correct answers, 0-100.
    pub percent: u8,
}

/// The full in-memory quiz state for one play-through.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    pub(super) settings: QuizSettings,
    pub(super) questions: Vec<Question>,
    pub(super) user_answers: Vec<UserAnswer>,
    pub(super) is_loading: bool,
    pub(super) error: Option<String>,
    pub(super) categories: Vec<Category>,
    pub(super) is_initialized: bool,
    /// Bumped whenever a fetch result would become obsolete.
    pub(super) generation: u64,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn user_answers(&self) -> &[UserAnswer] {
        &self.user_answers
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Generation of the most recent run (or reset).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.is_initialized {
            SessionPhase::Uninitialized
        } else if self.is_loading {
            SessionPhase::Loading
        } else if self.error.is_some() {
            SessionPhase::Failed
        } else if self.questions.is_empty() {
            SessionPhase::Ready
        } else if self.is_complete() {
            SessionPhase::Complete
        } else {
            SessionPhase::InProgress
        }
    }

    /// Question for a 1-based question number.
    pub fn question(&self, number: usize) -> Option<&Question> {
        number.checked_sub(1).and_then(|index| self.questions.get(index))
    }

    /// Recorded answer for a 0-based question index.
    pub fn answer_for(&self, question_index: usize) -> Option<&UserAnswer> {
        self.user_answers
            .iter()
            .find(|answer| answer.question_index() == question_index)
    }

    pub fn is_valid_question_number(&self, number: usize) -> bool {
        (1..=self.questions.len()).contains(&number)
    }

    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty() && self.user_answers.len() == self.questions.len()
    }

    pub fn has_results(&self) -> bool {
        !self.user_answers.is_empty()
    }

    /// Rounded percentage of the run reached at `number`.
    pub fn progress_percent(&self, number: usize) -> Option<u8> {
        if !self.is_valid_question_number(number) {
            return None;
        }
        Some(rounded_percent(number, self.questions.len()))
    }

    /// Score for the recorded answers, `None` when nothing has been answered.
    pub fn score(&self) -> Option<Score> {
        let total = self.user_answers.len();
        if total == 0 {
            return None;
        }

        let correct = self
            .user_answers
            .iter()
            .filter(|answer| answer.is_correct())
            .count();

        Some(Score {
            correct,
            incorrect: total - correct,
            total,
            percent: rounded_percent(correct, total),
        })
    }
}

/// `round(100 * part / whole)` with halves rounded up. `whole` must be non-zero
/// and `part <= whole`.
fn rounded_percent(part: usize, whole: usize) -> u8 {
    let percent = (200 * part + whole) / (2 * whole);
    percent.min(100) as u8
}
