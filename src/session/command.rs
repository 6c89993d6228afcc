//! Session transitions.
//!
//! Every change to a [`QuizSession`] goes through [`QuizSession::apply`] with
//! one [`Command`]. The reducer never performs I/O: starting a run yields
//! [`Outcome::FetchRequested`] and the result comes back later as
//! [`Command::ResolveQuestions`] tagged with the generation it was started
//! under.

use thiserror::Error;

use crate::models::{Category, Question, QuizSettings, UserAnswer};
use crate::provider::ProviderError;

use super::state::QuizSession;

/// A named session transition.
#[derive(Debug)]
pub enum Command {
    Initialize,
    UpdateSettings(QuizSettings),
    LoadCategories(Vec<Category>),
    StartQuizRun,
    ResolveQuestions {
        generation: u64,
        result: Result<Vec<Question>, ProviderError>,
    },
    RecordAnswer {
        question_index: usize,
        selected_answer: String,
    },
    ResetSession,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::UpdateSettings(_) => "update_settings",
            Self::LoadCategories(_) => "load_categories",
            Self::StartQuizRun => "start_quiz_run",
            Self::ResolveQuestions { .. } => "resolve_questions",
            Self::RecordAnswer { .. } => "record_answer",
            Self::ResetSession => "reset_session",
        }
    }
}

/// What a successfully applied command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A fetch must be run for `settings` and resolved under `generation`.
    FetchRequested {
        generation: u64,
        settings: QuizSettings,
    },
    AnswerRecorded {
        correct: bool,
    },
    /// The command resolved a superseded fetch and was ignored.
    Stale,
    /// The session was torn down and the command was ignored.
    Closed,
}

/// A command rejected by a transition guard. The session is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("question {number} does not exist (the quiz has {total} questions)")]
    InvalidNavigationTarget { number: usize, total: usize },

    #[error("question index {question_index} has already been answered")]
    DuplicateAnswer { question_index: usize },

    #[error("no questions are loaded")]
    NoQuestions,

    #[error("{command} was issued before the session finished initializing")]
    UninitializedAccess { command: &'static str },
}

impl QuizSession {
    /// Apply one transition.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, TransitionError> {
        if !self.is_initialized && !matches!(command, Command::Initialize) {
            return Err(TransitionError::UninitializedAccess {
                command: command.name(),
            });
        }

        match command {
            Command::Initialize => {
                self.is_initialized = true;
                Ok(Outcome::Applied)
            }
            Command::UpdateSettings(settings) => {
                self.settings = settings;
                Ok(Outcome::Applied)
            }
            Command::LoadCategories(categories) => {
                self.categories = categories;
                Ok(Outcome::Applied)
            }
            Command::StartQuizRun => Ok(self.start_run()),
            Command::ResolveQuestions { generation, result } => {
                Ok(self.resolve_questions(generation, result))
            }
            Command::RecordAnswer {
                question_index,
                selected_answer,
            } => self.record_answer(question_index, selected_answer),
            Command::ResetSession => {
                self.reset();
                Ok(Outcome::Applied)
            }
        }
    }

    fn start_run(&mut self) -> Outcome {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        self.questions.clear();
        self.user_answers.clear();

        Outcome::FetchRequested {
            generation: self.generation,
            settings: self.settings.clone(),
        }
    }

    fn resolve_questions(
        &mut self,
        generation: u64,
        result: Result<Vec<Question>, ProviderError>,
    ) -> Outcome {
        if generation != self.generation || !self.is_loading {
            return Outcome::Stale;
        }

        self.is_loading = false;
        match result {
            Ok(questions) if !questions.is_empty() => {
                self.questions = questions;
            }
            Ok(_) => {
                self.error = Some(ProviderError::NoQuestionsAvailable.to_string());
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }

        Outcome::Applied
    }

    fn record_answer(
        &mut self,
        question_index: usize,
        selected_answer: String,
    ) -> Result<Outcome, TransitionError> {
        if self.questions.is_empty() {
            return Err(TransitionError::NoQuestions);
        }
        let Some(question) = self.questions.get(question_index) else {
            return Err(TransitionError::InvalidNavigationTarget {
                number: question_index + 1,
                total: self.questions.len(),
            });
        };
        if self.answer_for(question_index).is_some() {
            return Err(TransitionError::DuplicateAnswer { question_index });
        }

        let answer = UserAnswer::new(question_index, selected_answer, question.correct_answer());
        let correct = answer.is_correct();
        self.user_answers.push(answer);

        Ok(Outcome::AnswerRecorded { correct })
    }

    fn reset(&mut self) {
        let fresh = QuizSession {
            categories: std::mem::take(&mut self.categories),
            is_initialized: self.is_initialized,
            // A fetch still in flight must not land in the next run.
            generation: self.generation + 1,
            ..QuizSession::default()
        };
        *self = fresh;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::session::SessionPhase;

    use super::*;

    fn question(prompt: &str, correct: &str, rng: &mut StdRng) -> Question {
        Question::new(
            "General Knowledge".into(),
            "multiple".into(),
            "easy".into(),
            prompt.into(),
            correct.into(),
            vec!["Wrong A".into(), "Wrong B".into(), "Wrong C".into()],
            rng,
        )
    }

    fn questions(count: usize) -> Vec<Question> {
        let mut rng = StdRng::seed_from_u64(11);
        (0..count)
            .map(|i| question(&format!("Question {}", i), &format!("Right {}", i), &mut rng))
            .collect()
    }

    fn ready_session() -> QuizSession {
        let mut session = QuizSession::new();
        session.apply(Command::Initialize).unwrap();
        session
    }

    fn loaded_session(count: usize) -> QuizSession {
        let mut session = ready_session();
        let Outcome::FetchRequested { generation, .. } =
            session.apply(Command::StartQuizRun).unwrap()
        else {
            panic!("expected a fetch request");
        };
        session
            .apply(Command::ResolveQuestions {
                generation,
                result: Ok(questions(count)),
            })
            .unwrap();
        session
    }

    fn answer(session: &mut QuizSession, index: usize, text: &str) -> Result<Outcome, TransitionError> {
        session.apply(Command::RecordAnswer {
            question_index: index,
            selected_answer: text.to_string(),
        })
    }

    #[test]
    fn test_commands_before_initialize_fail_fast() {
        let mut session = QuizSession::new();
        let err = session.apply(Command::StartQuizRun).unwrap_err();
        assert_eq!(
            err,
            TransitionError::UninitializedAccess {
                command: "start_quiz_run"
            }
        );
        assert!(!session.is_loading());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut session = ready_session();
        assert_eq!(session.apply(Command::Initialize), Ok(Outcome::Applied));
        assert!(session.is_initialized());
        assert_eq!(session.phase(), SessionPhase::Ready);
    }

    #[test]
    fn test_update_settings_does_not_fetch() {
        let mut session = ready_session();
        let settings = QuizSettings::with_amount(5);
        assert_eq!(
            session.apply(Command::UpdateSettings(settings.clone())),
            Ok(Outcome::Applied)
        );
        assert_eq!(session.settings(), &settings);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_load_categories_last_write_wins() {
        let mut session = ready_session();
        let books = Category {
            id: 10,
            name: "Entertainment: Books".into(),
        };
        session
            .apply(Command::LoadCategories(vec![books.clone()]))
            .unwrap();
        session.apply(Command::LoadCategories(Vec::new())).unwrap();
        assert!(session.categories().is_empty());
        session.apply(Command::LoadCategories(vec![books])).unwrap();
        assert_eq!(session.categories().len(), 1);
    }

    #[test]
    fn test_start_run_sets_loading_and_requests_fetch() {
        let mut session = ready_session();
        session
            .apply(Command::UpdateSettings(QuizSettings::with_amount(7)))
            .unwrap();
        let outcome = session.apply(Command::StartQuizRun).unwrap();
        assert_eq!(
            outcome,
            Outcome::FetchRequested {
                generation: 1,
                settings: QuizSettings::with_amount(7),
            }
        );
        assert!(session.is_loading());
        assert_eq!(session.error(), None);
        assert_eq!(session.phase(), SessionPhase::Loading);
    }

    #[test]
    fn test_successful_fetch_populates_questions() {
        let session = loaded_session(5);
        assert_eq!(session.questions().len(), 5);
        assert!(!session.is_loading());
        assert_eq!(session.error(), None);
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[test]
    fn test_failed_fetch_sets_error() {
        let mut session = ready_session();
        session.apply(Command::StartQuizRun).unwrap();
        session
            .apply(Command::ResolveQuestions {
                generation: 1,
                result: Err(ProviderError::from_response_code(1)),
            })
            .unwrap();

        assert!(!session.is_loading());
        assert!(session.questions().is_empty());
        assert!(!session.error().unwrap_or_default().is_empty());
        assert_eq!(session.phase(), SessionPhase::Failed);
    }

    #[test]
    fn test_empty_fetch_is_an_error() {
        let mut session = ready_session();
        session.apply(Command::StartQuizRun).unwrap();
        session
            .apply(Command::ResolveQuestions {
                generation: 1,
                result: Ok(Vec::new()),
            })
            .unwrap();
        assert!(session.error().is_some());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_retry_clears_error() {
        let mut session = ready_session();
        session.apply(Command::StartQuizRun).unwrap();
        session
            .apply(Command::ResolveQuestions {
                generation: 1,
                result: Err(ProviderError::RateLimited),
            })
            .unwrap();
        session.apply(Command::StartQuizRun).unwrap();
        assert!(session.is_loading());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut session = ready_session();
        session.apply(Command::StartQuizRun).unwrap(); // generation 1
        session.apply(Command::StartQuizRun).unwrap(); // generation 2

        let newer = questions(3);
        session
            .apply(Command::ResolveQuestions {
                generation: 2,
                result: Ok(newer.clone()),
            })
            .unwrap();
        let late = session
            .apply(Command::ResolveQuestions {
                generation: 1,
                result: Ok(questions(8)),
            })
            .unwrap();

        assert_eq!(late, Outcome::Stale);
        assert_eq!(session.questions(), newer.as_slice());
    }

    #[test]
    fn test_stale_failure_does_not_set_error() {
        let mut session = ready_session();
        session.apply(Command::StartQuizRun).unwrap();
        session.apply(Command::StartQuizRun).unwrap();
        let outcome = session
            .apply(Command::ResolveQuestions {
                generation: 1,
                result: Err(ProviderError::NoQuestionsAvailable),
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Stale);
        assert_eq!(session.error(), None);
        assert!(session.is_loading());
    }

    #[test]
    fn test_record_answer_reports_correctness() {
        let mut session = loaded_session(2);
        assert_eq!(
            answer(&mut session, 0, "Right 0"),
            Ok(Outcome::AnswerRecorded { correct: true })
        );
        assert_eq!(
            answer(&mut session, 1, "Wrong A"),
            Ok(Outcome::AnswerRecorded { correct: false })
        );
        assert_eq!(session.user_answers()[1].correct_answer(), "Right 1");
        assert_eq!(session.phase(), SessionPhase::Complete);
    }

    #[test]
    fn test_record_answer_twice_keeps_one_entry() {
        let mut session = loaded_session(3);
        answer(&mut session, 0, "Paris").unwrap();
        assert_eq!(
            answer(&mut session, 0, "Paris"),
            Err(TransitionError::DuplicateAnswer { question_index: 0 })
        );
        assert_eq!(session.user_answers().len(), 1);
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_record_answer_guards() {
        let mut session = ready_session();
        assert_eq!(
            answer(&mut session, 0, "Paris"),
            Err(TransitionError::NoQuestions)
        );

        let mut session = loaded_session(3);
        assert_eq!(
            answer(&mut session, 3, "Paris"),
            Err(TransitionError::InvalidNavigationTarget {
                number: 4,
                total: 3
            })
        );
        assert!(session.user_answers().is_empty());
    }

    #[test]
    fn test_score_three_of_five() {
        let mut session = loaded_session(5);
        answer(&mut session, 0, "Right 0").unwrap();
        answer(&mut session, 1, "Wrong B").unwrap();
        answer(&mut session, 2, "Right 2").unwrap();
        answer(&mut session, 3, "Right 3").unwrap();
        answer(&mut session, 4, "Wrong C").unwrap();

        let score = session.score().unwrap();
        assert_eq!(score.correct, 3);
        assert_eq!(score.incorrect, 2);
        assert_eq!(score.total, 5);
        assert_eq!(score.percent, 60);
        assert_eq!(score.correct + score.incorrect, score.total);
    }

    #[test]
    fn test_score_bounds_for_every_prefix() {
        let mut session = loaded_session(9);
        for i in 0..9 {
            let text = if i % 3 == 0 { format!("Right {}", i) } else { "Wrong A".to_string() };
            answer(&mut session, i, &text).unwrap();
            let score = session.score().unwrap();
            assert_eq!(score.correct + score.incorrect, score.total);
            assert_eq!(score.total, i + 1);
            assert!(score.percent <= 100);
        }
    }

    #[test]
    fn test_progress_percent() {
        let session = loaded_session(3);
        assert_eq!(session.progress_percent(0), None);
        assert_eq!(session.progress_percent(1), Some(33));
        assert_eq!(session.progress_percent(2), Some(67));
        assert_eq!(session.progress_percent(3), Some(100));
        assert_eq!(session.progress_percent(4), None);
    }

    #[test]
    fn test_reset_keeps_categories_and_initialization() {
        let mut session = loaded_session(4);
        session
            .apply(Command::LoadCategories(vec![Category {
                id: 9,
                name: "General Knowledge".into(),
            }]))
            .unwrap();
        session
            .apply(Command::UpdateSettings(QuizSettings::with_amount(30)))
            .unwrap();
        answer(&mut session, 0, "Right 0").unwrap();

        session.apply(Command::ResetSession).unwrap();

        assert!(session.is_initialized());
        assert_eq!(session.categories().len(), 1);
        assert_eq!(session.settings(), &QuizSettings::default());
        assert!(session.questions().is_empty());
        assert!(session.user_answers().is_empty());
        assert!(!session.is_loading());
        assert_eq!(session.error(), None);
        assert_eq!(session.phase(), SessionPhase::Ready);
    }

    #[test]
    fn test_reset_discards_in_flight_fetch() {
        let mut session = ready_session();
        let Outcome::FetchRequested { generation, .. } =
            session.apply(Command::StartQuizRun).unwrap()
        else {
            panic!("expected a fetch request");
        };
        session.apply(Command::ResetSession).unwrap();

        let outcome = session
            .apply(Command::ResolveQuestions {
                generation,
                result: Ok(questions(5)),
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Stale);
        assert!(session.questions().is_empty());
    }

    #[test]
    fn test_reset_then_start_matches_fresh_run() {
        let mut session = loaded_session(5);
        answer(&mut session, 0, "Right 0").unwrap();
        session.apply(Command::ResetSession).unwrap();

        let Outcome::FetchRequested { generation, .. } =
            session.apply(Command::StartQuizRun).unwrap()
        else {
            panic!("expected a fetch request");
        };
        session
            .apply(Command::ResolveQuestions {
                generation,
                result: Ok(questions(5)),
            })
            .unwrap();

        let fresh = loaded_session(5);
        assert_eq!(session.questions().len(), fresh.questions().len());
        assert!(session.user_answers().is_empty());
        assert_eq!(session.phase(), fresh.phase());
    }
}
