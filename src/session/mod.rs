//! Quiz session state machine.
//!
//! [`QuizSession`] is the state, [`Command`] the transitions applied to it,
//! [`navigation`] the screen rules derived from it, and [`SessionStore`] the
//! async owner that serializes commands and runs provider fetches.

mod command;
pub mod navigation;
mod state;
mod store;

pub use command::{Command, Outcome, TransitionError};
pub use navigation::Destination;
pub use state::{QuizSession, Score, SessionPhase};
pub use store::{PendingRun, PendingTask, SessionStore};
