//! Runtime configuration.

use std::time::Duration;

use url::Url;

use crate::models::{QuizSettings, clamp_amount};

/// Open Trivia DB's public endpoint.
pub const DEFAULT_API_URL: &str = "https://opentdb.com/";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the trivia service.
    pub api_url: Url,
    /// Per-request timeout for the trivia service.
    pub request_timeout: Duration,
    /// Countdown shown between loading questions and the first question.
    pub countdown: Duration,
    /// Delay before the session reports itself initialized.
    pub bootstrap_delay: Duration,
    /// Question count preselected on the settings screen.
    pub default_amount: u8,
}

impl Config {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            request_timeout: Duration::from_secs(10),
            countdown: Duration::from_secs(3),
            bootstrap_delay: Duration::from_millis(100),
            default_amount: QuizSettings::default().amount,
        }
    }

    pub fn with_default_amount(mut self, amount: u8) -> Self {
        self.default_amount = clamp_amount(amount);
        self
    }

    /// Settings the settings screen starts from.
    pub fn initial_settings(&self) -> QuizSettings {
        QuizSettings::with_amount(self.default_amount)
    }
}

impl Default for Config {
    fn default() -> Self {
        let api_url = Url::parse(DEFAULT_API_URL).expect("default API URL is valid");
        Self::new(api_url)
    }
}
