//! # trivia-time
//!
//! A terminal trivia quiz backed by Open Trivia DB.
//!
//! The quiz state lives in a [`QuizSession`] that only changes through
//! [`Command`]s. A [`SessionStore`] serializes those commands, runs the
//! question fetches in the background, and drops fetch results that a newer
//! run or a reset has made obsolete.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_time::{Config, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     trivia_time::run(Config::default()).await
//! }
//! ```

pub mod client;
pub mod config;
pub mod models;
pub mod provider;
pub mod session;
pub mod terminal;
pub mod text;

use std::io;

use thiserror::Error;

pub use client::run;
pub use config::Config;
pub use models::{Category, Question, QuizSettings, UserAnswer};
pub use provider::{OpenTdb, ProviderError, QuestionProvider};
pub use session::{Command, Outcome, QuizSession, SessionStore, TransitionError};

/// Error type for running the quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// A command was rejected by the session.
    #[error("Session error: {0}")]
    Transition(#[from] TransitionError),
}
