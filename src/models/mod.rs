//! Quiz domain types.

mod answer;
mod category;
mod question;
mod settings;

pub use answer::UserAnswer;
pub use category::Category;
pub use question::Question;
pub(crate) use settings::clamp_amount;
pub use settings::{Difficulty, QuestionType, QuizSettings, AMOUNT_RANGE, DEFAULT_AMOUNT};
