//! Quiz settings and the provider filters they map to.

use std::fmt;
use std::ops::RangeInclusive;

/// Number of questions a run may ask for.
pub const AMOUNT_RANGE: RangeInclusive<u8> = 5..=50;

/// Number of questions asked for when nothing else is chosen.
pub const DEFAULT_AMOUNT: u8 = 10;

/// Difficulty filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Any,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Self::Any, Self::Easy, Self::Medium, Self::Hard];

    /// Query value for the provider, `None` for no filter.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Easy => Some("easy"),
            Self::Medium => Some("medium"),
            Self::Hard => Some("hard"),
        }
    }

    pub fn label(self) -> &'static str {
        self.as_param().unwrap_or("Any")
    }
}

/// Question type filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuestionType {
    #[default]
    Any,
    Multiple,
    Boolean,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [Self::Any, Self::Multiple, Self::Boolean];

    /// Query value for the provider, `None` for no filter.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Multiple => Some("multiple"),
            Self::Boolean => Some("boolean"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Any Type",
            Self::Multiple => "Multiple Choice",
            Self::Boolean => "True/False",
        }
    }
}

/// Snapshot of the parameters for one provider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub amount: u8,
    /// Provider category id, `None` for any category.
    pub category: Option<u32>,
    pub difficulty: Difficulty,
    pub kind: QuestionType,
}

impl QuizSettings {
    /// Settings for `amount` questions with no filters, clamped to [`AMOUNT_RANGE`].
    pub fn with_amount(amount: u8) -> Self {
        Self {
            amount: clamp_amount(amount),
            ..Self::default()
        }
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            category: None,
            difficulty: Difficulty::Any,
            kind: QuestionType::Any,
        }
    }
}

impl fmt::Display for QuizSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} questions", self.amount)?;
        if let Some(category) = self.category {
            write!(f, ", category {}", category)?;
        }
        write!(f, ", difficulty {}, {}", self.difficulty.label(), self.kind.label())
    }
}

pub(crate) fn clamp_amount(amount: u8) -> u8 {
    amount.clamp(*AMOUNT_RANGE.start(), *AMOUNT_RANGE.end())
}
