/// A recorded answer to one question of the active run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAnswer {
    question_index: usize,
    selected_answer: String,
    correct_answer: String,
    is_correct: bool,
}

impl UserAnswer {
    /// Record `selected` against a snapshot of the question's correct answer.
    pub fn new(question_index: usize, selected: String, correct: &str) -> Self {
        let is_correct = selected == correct;
        Self {
            question_index,
            selected_answer: selected,
            correct_answer: correct.to_string(),
            is_correct,
        }
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn selected_answer(&self) -> &str {
        &self.selected_answer
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}
