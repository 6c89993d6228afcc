//! Question provider contract.
//!
//! The session only talks to a provider through [`QuestionProvider`]. The
//! shipped implementation is [`OpenTdb`], an HTTP client for Open Trivia DB.

mod opentdb;
mod wire;

use std::future::Future;

use thiserror::Error;

use crate::models::{Category, Question, QuizSettings};

pub use opentdb::{OpenTdb, question_query};
pub use wire::{CategoriesResponse, QuestionsResponse, RawQuestion};

/// Ways a question request can fail.
///
/// The `Display` text is shown to the player as-is.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Could not reach the trivia service: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("The trivia service sent a response that could not be read: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Not enough questions for the selected settings. Try fewer questions or broader filters.")]
    NoQuestionsAvailable,

    #[error("The trivia service rejected the quiz settings")]
    InvalidParameter,

    #[error("Too many requests. Wait a few seconds and try again.")]
    RateLimited,

    #[error("The trivia service failed to provide questions (response code {code})")]
    Rejected { code: i64 },

    #[error("Invalid trivia service address: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ProviderError {
    /// Map a non-zero provider response code.
    pub fn from_response_code(code: i64) -> Self {
        match code {
            1 => Self::NoQuestionsAvailable,
            2 => Self::InvalidParameter,
            5 => Self::RateLimited,
            code => Self::Rejected { code },
        }
    }
}

/// Source of categories and questions.
pub trait QuestionProvider: Send + Sync + 'static {
    /// List the available categories. Returns an empty list when the
    /// provider cannot be reached.
    fn list_categories(&self) -> impl Future<Output = Vec<Category>> + Send;

    /// Fetch a question set for `settings`, with answers already shuffled.
    ///
    /// Fails rather than returning an empty list when nothing matches.
    fn fetch_questions(
        &self,
        settings: &QuizSettings,
    ) -> impl Future<Output = Result<Vec<Question>, ProviderError>> + Send;
}
