//! The single dispatch point for a session.
//!
//! [`SessionStore`] owns the [`QuizSession`] behind an async mutex and runs
//! provider requests on tokio tasks. Clones share the same session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError};
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::task::{AbortHandle, JoinHandle};

use crate::models::{Category, QuizSettings};
use crate::provider::QuestionProvider;

use super::command::{Command, Outcome, TransitionError};
use super::state::QuizSession;

/// Bootstrap progress, published through a watch channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Booting,
    Ready,
    Closed,
}

struct Shared<P> {
    session: Mutex<QuizSession>,
    provider: P,
    closed: AtomicBool,
    tasks: std::sync::Mutex<Vec<AbortHandle>>,
    lifecycle: watch::Sender<Lifecycle>,
}

/// Shared handle to the session and the provider feeding it.
pub struct SessionStore<P> {
    shared: Arc<Shared<P>>,
}

impl<P> Clone for SessionStore<P> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// An outstanding background task started by the store.
#[derive(Debug)]
pub struct PendingTask {
    handle: JoinHandle<()>,
}

impl PendingTask {
    /// Wait for the task to finish. Returns immediately once it was aborted.
    pub async fn finished(self) {
        let _ = self.handle.await;
    }
}

/// A question fetch started by [`SessionStore::start_quiz_run`].
#[derive(Debug)]
pub struct PendingRun {
    generation: u64,
    task: PendingTask,
}

impl PendingRun {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait until the fetch has resolved into the session (or been dropped).
    pub async fn finished(self) {
        self.task.finished().await;
    }
}

impl<P: QuestionProvider> SessionStore<P> {
    pub fn new(provider: P) -> Self {
        let (lifecycle, _) = watch::channel(Lifecycle::Booting);
        Self {
            shared: Arc::new(Shared {
                session: Mutex::new(QuizSession::new()),
                provider,
                closed: AtomicBool::new(false),
                tasks: std::sync::Mutex::new(Vec::new()),
                lifecycle,
            }),
        }
    }

    pub fn provider(&self) -> &P {
        &self.shared.provider
    }

    /// Apply `command` to the session.
    ///
    /// After [`close`](Self::close) every command is ignored with
    /// [`Outcome::Closed`].
    pub async fn dispatch(&self, command: Command) -> Result<Outcome, TransitionError> {
        let mut session = self.shared.session.lock().await;
        if self.is_closed() {
            log::debug!("Ignoring {} after teardown", command.name());
            return Ok(Outcome::Closed);
        }

        let initializing = matches!(command, Command::Initialize);
        let result = session.apply(command);
        match &result {
            Ok(Outcome::Stale) => log::debug!("Discarded a superseded question fetch"),
            Ok(_) if initializing => {
                self.shared.lifecycle.send_replace(Lifecycle::Ready);
            }
            Ok(_) => {}
            Err(e @ TransitionError::UninitializedAccess { .. }) => {
                log::error!("Rejected transition: {}", e)
            }
            Err(e) => log::debug!("Rejected transition: {}", e),
        }
        result
    }

    /// A copy of the current session state.
    pub async fn snapshot(&self) -> QuizSession {
        self.shared.session.lock().await.clone()
    }

    /// Run `f` against the current state without copying it.
    pub async fn read<R>(&self, f: impl FnOnce(&QuizSession) -> R) -> R {
        let session = self.shared.session.lock().await;
        f(&session)
    }

    /// Initialize the session after `delay`, off the caller's task.
    pub fn bootstrap(&self, delay: Duration) {
        let store = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match store.initialize().await {
                Ok(Outcome::Applied) => log::info!("Session initialized"),
                Ok(_) => {}
                Err(e) => log::error!("Bootstrap failed: {}", e),
            }
        });
        self.track(&handle);
    }

    /// Wait for bootstrap. Returns `false` when the store was closed first.
    pub async fn initialized(&self) -> bool {
        let mut lifecycle = self.shared.lifecycle.subscribe();
        let ready = lifecycle
            .wait_for(|state| *state != Lifecycle::Booting)
            .await
            .map(|state| *state == Lifecycle::Ready);
        ready.unwrap_or(false)
    }

    pub async fn initialize(&self) -> Result<Outcome, TransitionError> {
        self.dispatch(Command::Initialize).await
    }

    pub async fn update_settings(&self, settings: QuizSettings) -> Result<Outcome, TransitionError> {
        self.dispatch(Command::UpdateSettings(settings)).await
    }

    pub async fn load_categories(&self, categories: Vec<Category>) -> Result<Outcome, TransitionError> {
        self.dispatch(Command::LoadCategories(categories)).await
    }

    /// Fetch the category list from the provider and load it.
    pub fn refresh_categories(&self) -> PendingTask {
        let store = self.clone();
        let handle = tokio::spawn(async move {
            let categories = store.shared.provider.list_categories().await;
            if let Err(e) = store.load_categories(categories).await {
                log::warn!("Could not load categories: {}", e);
            }
        });
        self.track(&handle);
        PendingTask { handle }
    }

    /// Start a run with the current settings.
    ///
    /// Returns `None` when the store is closed. A run started while another
    /// is in flight supersedes it.
    pub async fn start_quiz_run(&self) -> Result<Option<PendingRun>, TransitionError> {
        let Outcome::FetchRequested {
            generation,
            settings,
        } = self.dispatch(Command::StartQuizRun).await?
        else {
            return Ok(None);
        };

        log::info!("Starting run {} ({})", generation, settings);
        let store = self.clone();
        let handle = tokio::spawn(async move {
            let result = store.shared.provider.fetch_questions(&settings).await;
            if let Err(e) = &result {
                log::warn!("Run {} failed: {}", generation, e);
            }
            let _ = store
                .dispatch(Command::ResolveQuestions { generation, result })
                .await;
        });
        self.track(&handle);

        Ok(Some(PendingRun {
            generation,
            task: PendingTask { handle },
        }))
    }

    /// Record an answer and report whether it was correct.
    ///
    /// Returns `None` when the store is closed.
    pub async fn record_answer(
        &self,
        question_index: usize,
        selected_answer: impl Into<String>,
    ) -> Result<Option<bool>, TransitionError> {
        let outcome = self
            .dispatch(Command::RecordAnswer {
                question_index,
                selected_answer: selected_answer.into(),
            })
            .await?;
        match outcome {
            Outcome::AnswerRecorded { correct } => Ok(Some(correct)),
            _ => Ok(None),
        }
    }

    pub async fn reset_session(&self) -> Result<Outcome, TransitionError> {
        self.dispatch(Command::ResetSession).await
    }

    /// Tear the session down. Outstanding tasks are aborted and later
    /// commands become no-ops.
    pub fn close(&self) {
        if self.shared.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.shared.lifecycle.send_if_modified(|state| {
            if *state == Lifecycle::Booting {
                *state = Lifecycle::Closed;
                true
            } else {
                false
            }
        });

        let mut tasks = self
            .shared
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for task in tasks.drain(..) {
            task.abort();
        }
        log::info!("Session closed");
    }

    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }

    fn track(&self, handle: &JoinHandle<()>) {
        let mut tasks = self
            .shared
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        tasks.retain(|task| !task.is_finished());
        if self.is_closed() {
            handle.abort();
        } else {
            tasks.push(handle.abort_handle());
        }
    }
}
