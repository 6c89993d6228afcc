//! Open Trivia DB response bodies.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Category, Question};

/// `GET /api_category.php`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub trivia_categories: Vec<Category>,
}

/// `GET /api.php`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

/// A question as sent by the provider, before answer shuffling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestion {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

impl RawQuestion {
    pub fn into_question<R: Rng + ?Sized>(self, rng: &mut R) -> Question {
        Question::new(
            self.category,
            self.kind,
            self.difficulty,
            self.question,
            self.correct_answer,
            self.incorrect_answers,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_questions_response() {
        let body = r#"{
            "response_code": 0,
            "results": [{
                "type": "boolean",
                "difficulty": "easy",
                "category": "Science &amp; Nature",
                "question": "The chemical symbol for gold is &quot;Au&quot;.",
                "correct_answer": "True",
                "incorrect_answers": ["False"]
            }]
        }"#;
        let response: QuestionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.response_code, 0);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].kind, "boolean");

        let question = response.results[0]
            .clone()
            .into_question(&mut StdRng::seed_from_u64(3));
        assert_eq!(question.correct_answer(), "True");
        assert_eq!(question.all_answers().len(), 2);
    }

    #[test]
    fn test_error_response_without_results() {
        let response: QuestionsResponse = serde_json::from_str(r#"{"response_code": 1}"#).unwrap();
        assert_eq!(response.response_code, 1);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_categories_response() {
        let body = r#"{"trivia_categories":[{"id":9,"name":"General Knowledge"},{"id":10,"name":"Entertainment: Books"}]}"#;
        let response: CategoriesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.trivia_categories.len(), 2);
        assert_eq!(response.trivia_categories[0].id, 9);

        let empty: CategoriesResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.trivia_categories.is_empty());
    }
}
