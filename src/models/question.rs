use rand::Rng;
use rand::seq::SliceRandom;

/// A question of the active run, with its answer order fixed on arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub category: String,
    pub kind: String,
    pub difficulty: String,
    pub prompt: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    all_answers: Vec<String>,
}

impl Question {
    /// Build a question, shuffling the correct answer in among the incorrect ones.
    pub fn new<R: Rng + ?Sized>(
        category: String,
        kind: String,
        difficulty: String,
        prompt: String,
        correct_answer: String,
        incorrect_answers: Vec<String>,
        rng: &mut R,
    ) -> Self {
        let mut all_answers = Vec::with_capacity(incorrect_answers.len() + 1);
        all_answers.extend(incorrect_answers.iter().cloned());
        all_answers.push(correct_answer.clone());
        all_answers.shuffle(rng);

        Self {
            category,
            kind,
            difficulty,
            prompt,
            correct_answer,
            incorrect_answers,
            all_answers,
        }
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    /// Every answer option in display order.
    pub fn all_answers(&self) -> &[String] {
        &self.all_answers
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}
