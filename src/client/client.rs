//! Terminal client event loop.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

use crate::QuizError;
use crate::config::Config;
use crate::provider::{OpenTdb, QuestionProvider};
use crate::session::SessionStore;
use crate::terminal::TerminalSession;

use super::state::{Action, ClientApp};
use super::ui;

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Run the trivia client against the configured provider.
pub async fn run(config: Config) -> Result<(), QuizError> {
    let provider = OpenTdb::new(config.api_url.clone(), config.request_timeout)?;
    log::info!("Using trivia service at {}", provider.base_url());

    let store = SessionStore::new(provider);
    store.bootstrap(config.bootstrap_delay);

    let loader = store.clone();
    tokio::spawn(async move {
        if loader.initialized().await {
            loader.refresh_categories();
        }
    });

    let mut app = ClientApp::new(&config);
    let result = run_tui(&store, &mut app).await;

    store.close();
    result
}

/// Draw and handle input until the player quits.
pub async fn run_tui<P: QuestionProvider>(
    store: &SessionStore<P>,
    app: &mut ClientApp,
) -> Result<(), QuizError> {
    let mut terminal = TerminalSession::enter()?;

    loop {
        let session = store.snapshot().await;
        let now = Instant::now();
        app.sync(&session, now);
        terminal.draw(|frame| ui::render(frame, app, &session, now))?;

        // Handle input with timeout
        if !event::poll(INPUT_POLL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let action = app.handle_key(key.code, &session);
        if action == Action::Quit {
            break;
        }
        perform(store, action).await?;
    }

    terminal.restore()?;
    Ok(())
}

/// Carry out the session side of a key press.
async fn perform<P: QuestionProvider>(store: &SessionStore<P>, action: Action) -> Result<(), QuizError> {
    match action {
        Action::None | Action::Quit => {}
        Action::StartQuiz(settings) => {
            store.update_settings(settings).await?;
            store.start_quiz_run().await?;
        }
        Action::Retry => {
            store.start_quiz_run().await?;
        }
        Action::RecordAnswer {
            question_index,
            answer,
        } => {
            // A rejected answer means the screen was stale; the next frame
            // redraws from the session.
            if let Err(e) = store.record_answer(question_index, answer).await {
                log::debug!("Answer ignored: {}", e);
            }
        }
        Action::PlayAgain(settings) => {
            store.reset_session().await?;
            store.update_settings(settings).await?;
            store.start_quiz_run().await?;
        }
        Action::GoHome => {
            store.reset_session().await?;
        }
    }
    Ok(())
}
