//! HTTP client for Open Trivia DB.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::models::{Category, Question, QuizSettings};

use super::wire::{CategoriesResponse, QuestionsResponse};
use super::{ProviderError, QuestionProvider};

const CATEGORIES_ENDPOINT: &str = "api_category.php";
const QUESTIONS_ENDPOINT: &str = "api.php";

/// Open Trivia DB provider.
#[derive(Debug, Clone)]
pub struct OpenTdb {
    client: Client,
    base_url: Url,
}

impl OpenTdb {
    /// Create a provider for the service at `base_url`, giving up on
    /// requests that take longer than `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, mut base_url: Url) -> Self {
        // Url::join replaces the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> Result<Url, ProviderError> {
        Ok(self.base_url.join(name)?)
    }

    async fn try_list_categories(&self) -> Result<Vec<Category>, ProviderError> {
        let url = self.endpoint(CATEGORIES_ENDPOINT)?;
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let response: CategoriesResponse = serde_json::from_str(&body)?;
        Ok(response.trivia_categories)
    }
}

impl QuestionProvider for OpenTdb {
    async fn list_categories(&self) -> Vec<Category> {
        match self.try_list_categories().await {
            Ok(categories) => {
                log::debug!("Loaded {} categories", categories.len());
                categories
            }
            Err(e) => {
                log::warn!("Category list unavailable: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_questions(&self, settings: &QuizSettings) -> Result<Vec<Question>, ProviderError> {
        let url = self.endpoint(QUESTIONS_ENDPOINT)?;
        log::debug!("Requesting {} from {}", settings, url);

        let response = self
            .client
            .get(url)
            .query(&question_query(settings))
            .send()
            .await?;
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        let body = response.error_for_status()?.text().await?;
        let response: QuestionsResponse = serde_json::from_str(&body)?;
        shape_questions(response)
    }
}

/// Query parameters for a question request. Unfiltered settings are omitted.
pub fn question_query(settings: &QuizSettings) -> Vec<(&'static str, String)> {
    let mut query = vec![("amount", settings.amount.to_string())];

    if let Some(category) = settings.category {
        query.push(("category", category.to_string()));
    }
    if let Some(difficulty) = settings.difficulty.as_param() {
        query.push(("difficulty", difficulty.to_string()));
    }
    if let Some(kind) = settings.kind.as_param() {
        query.push(("type", kind.to_string()));
    }

    query
}

fn shape_questions(response: QuestionsResponse) -> Result<Vec<Question>, ProviderError> {
    if response.response_code != 0 {
        return Err(ProviderError::from_response_code(response.response_code));
    }
    if response.results.is_empty() {
        return Err(ProviderError::NoQuestionsAvailable);
    }

    let mut rng = rand::thread_rng();
    Ok(response
        .results
        .into_iter()
        .map(|raw| raw.into_question(&mut rng))
        .collect())
}
