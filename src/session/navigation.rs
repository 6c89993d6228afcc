//! Screen validity rules.
//!
//! The presentation layer asks where it is allowed to go; these functions
//! answer from the session alone.

use super::state::QuizSession;

/// A screen of the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Settings entry.
    Home,
    /// Fetching questions, then counting down.
    Start,
    /// A 1-based question number.
    Question(usize),
    Results,
}

/// Screen to show when `requested` is asked for.
pub fn resolve(session: &QuizSession, requested: Destination) -> Destination {
    match requested {
        Destination::Question(number) => guard_question(session, number),
        Destination::Results => guard_results(session),
        other => other,
    }
}

/// A question screen needs loaded questions and an in-range number.
pub fn guard_question(session: &QuizSession, number: usize) -> Destination {
    if session.questions().is_empty() {
        Destination::Home
    } else if session.is_valid_question_number(number) {
        Destination::Question(number)
    } else {
        Destination::Question(1)
    }
}

/// Results need at least one recorded answer.
pub fn guard_results(session: &QuizSession) -> Destination {
    if session.has_results() {
        Destination::Results
    } else {
        Destination::Home
    }
}

/// Where "next" leads from question `number`.
pub fn after_question(session: &QuizSession, number: usize) -> Destination {
    if number < session.questions().len() {
        Destination::Question(number + 1)
    } else {
        guard_results(session)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::models::Question;
    use crate::session::{Command, Outcome};

    use super::*;

    fn session_with(count: usize) -> QuizSession {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::new();
        session.apply(Command::Initialize).unwrap();
        let Outcome::FetchRequested { generation, .. } =
            session.apply(Command::StartQuizRun).unwrap()
        else {
            panic!("expected a fetch request");
        };
        let questions = (0..count)
            .map(|i| {
                Question::new(
                    "Art".into(),
                    "boolean".into(),
                    "hard".into(),
                    format!("Statement {}", i),
                    "True".into(),
                    vec!["False".into()],
                    &mut rng,
                )
            })
            .collect();
        session
            .apply(Command::ResolveQuestions {
                generation,
                result: Ok(questions),
            })
            .unwrap();
        session
    }

    #[test]
    fn test_question_without_questions_goes_home() {
        let session = QuizSession::new();
        assert_eq!(guard_question(&session, 1), Destination::Home);
    }

    #[test]
    fn test_invalid_question_number_goes_to_first() {
        let session = session_with(3);
        assert_eq!(guard_question(&session, 0), Destination::Question(1));
        assert_eq!(guard_question(&session, 4), Destination::Question(1));
        assert_eq!(guard_question(&session, 3), Destination::Question(3));
    }

    #[test]
    fn test_results_need_answers() {
        let mut session = session_with(2);
        assert_eq!(resolve(&session, Destination::Results), Destination::Home);

        session
            .apply(Command::RecordAnswer {
                question_index: 0,
                selected_answer: "True".into(),
            })
            .unwrap();
        assert_eq!(resolve(&session, Destination::Results), Destination::Results);
    }

    #[test]
    fn test_after_question() {
        let mut session = session_with(2);
        assert_eq!(after_question(&session, 1), Destination::Question(2));

        session
            .apply(Command::RecordAnswer {
                question_index: 1,
                selected_answer: "False".into(),
            })
            .unwrap();
        assert_eq!(after_question(&session, 2), Destination::Results);
    }

    #[test]
    fn test_other_screens_pass_through() {
        let session = QuizSession::new();
        assert_eq!(resolve(&session, Destination::Home), Destination::Home);
        assert_eq!(resolve(&session, Destination::Start), Destination::Start);
    }
}
