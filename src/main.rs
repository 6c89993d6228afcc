use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use trivia_time::Config;
use trivia_time::config::DEFAULT_API_URL;
use url::Url;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the Open Trivia DB compatible service
    #[arg(long, env = "TRIVIA_API_URL", default_value = DEFAULT_API_URL)]
    api_url: Url,

    /// Request timeout in seconds
    #[arg(long, env = "TRIVIA_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Countdown before the first question, in seconds
    #[arg(long, default_value_t = 3)]
    countdown_secs: u64,

    /// Delay before the session is ready, in milliseconds
    #[arg(long, default_value_t = 100)]
    bootstrap_ms: u64,

    /// Number of questions preselected on the settings screen (5-50)
    #[arg(short, long, default_value_t = 10)]
    amount: u8,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::new(self.api_url).with_default_amount(self.amount);
        config.request_timeout = Duration::from_secs(self.timeout_secs);
        config.countdown = Duration::from_secs(self.countdown_secs);
        config.bootstrap_delay = Duration::from_millis(self.bootstrap_ms);
        config
    }
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; raise the level with RUST_LOG and redirect it while the TUI runs.
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let config = Args::parse().into_config();

    if let Err(e) = trivia_time::run(config).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
