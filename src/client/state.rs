//! Client application state.
//!
//! Everything here is presentation state: which screen is showing, the
//! settings being edited and the highlighted option. Quiz data lives in the
//! session; the client only reads it and asks for transitions through
//! [`Action`].

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::config::Config;
use crate::models::{AMOUNT_RANGE, Category, Difficulty, QuestionType, QuizSettings};
use crate::session::navigation::{self, Destination};
use crate::session::{QuizSession, SessionPhase};

/// Session work requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Apply the settings and fetch questions.
    StartQuiz(QuizSettings),
    /// Fetch again with the current settings.
    Retry,
    RecordAnswer {
        question_index: usize,
        answer: String,
    },
    /// Reset, then start a new run with these settings.
    PlayAgain(QuizSettings),
    /// Reset and return to the settings screen.
    GoHome,
}

/// Settings screen rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Amount,
    Category,
    Difficulty,
    Type,
}

impl SettingsField {
    const ORDER: [SettingsField; 4] = [Self::Amount, Self::Category, Self::Difficulty, Self::Type];

    fn offset(self, delta: isize) -> Self {
        let len = Self::ORDER.len() as isize;
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ORDER[(index + delta).rem_euclid(len) as usize]
    }
}

/// The settings form.
#[derive(Debug, Clone)]
pub struct SettingsEditor {
    pub draft: QuizSettings,
    pub field: SettingsField,
}

impl SettingsEditor {
    pub fn new(draft: QuizSettings) -> Self {
        Self {
            draft,
            field: SettingsField::Amount,
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.offset(1);
    }

    pub fn previous_field(&mut self) {
        self.field = self.field.offset(-1);
    }

    /// Change the focused field one step forward or back.
    pub fn adjust(&mut self, forward: bool, categories: &[Category]) {
        match self.field {
            SettingsField::Amount => {
                let amount = if forward {
                    self.draft.amount.saturating_add(1)
                } else {
                    self.draft.amount.saturating_sub(1)
                };
                self.draft.amount = amount.clamp(*AMOUNT_RANGE.start(), *AMOUNT_RANGE.end());
            }
            SettingsField::Category => {
                // Index 0 is "any category".
                let options: Vec<Option<u32>> = std::iter::once(None)
                    .chain(categories.iter().map(|c| Some(c.id)))
                    .collect();
                let current = options
                    .iter()
                    .position(|id| *id == self.draft.category)
                    .unwrap_or(0);
                self.draft.category = options[step(current, options.len(), forward)];
            }
            SettingsField::Difficulty => {
                let all = Difficulty::ALL;
                let current = all.iter().position(|d| *d == self.draft.difficulty).unwrap_or(0);
                self.draft.difficulty = all[step(current, all.len(), forward)];
            }
            SettingsField::Type => {
                let all = QuestionType::ALL;
                let current = all.iter().position(|t| *t == self.draft.kind).unwrap_or(0);
                self.draft.kind = all[step(current, all.len(), forward)];
            }
        }
    }

    /// Display name of the chosen category.
    pub fn category_name<'a>(&self, categories: &'a [Category]) -> &'a str {
        self.draft
            .category
            .and_then(|id| categories.iter().find(|c| c.id == id))
            .map(|c| c.name.as_str())
            .unwrap_or("Any Category")
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// Client application state.
pub struct ClientApp {
    /// Screen currently showing.
    pub screen: Destination,
    pub editor: SettingsEditor,
    /// Highlighted answer on the question screen.
    pub selected_option: usize,
    /// Scroll offset of the results breakdown.
    pub results_scroll: usize,
    countdown: Duration,
    countdown_deadline: Option<Instant>,
}

impl ClientApp {
    pub fn new(config: &Config) -> Self {
        Self {
            screen: Destination::Home,
            editor: SettingsEditor::new(config.initial_settings()),
            selected_option: 0,
            results_scroll: 0,
            countdown: config.countdown,
            countdown_deadline: None,
        }
    }

    /// Move to `destination`, clearing per-screen state.
    pub fn navigate(&mut self, destination: Destination) {
        if self.screen != destination {
            self.selected_option = 0;
            self.results_scroll = 0;
            self.countdown_deadline = None;
        }
        self.screen = destination;
    }

    /// Seconds left before the first question, while counting down.
    pub fn countdown_remaining(&self, now: Instant) -> Option<u64> {
        let deadline = self.countdown_deadline?;
        let left = deadline.saturating_duration_since(now);
        Some(left.as_millis().div_ceil(1000) as u64)
    }

    /// Bring the screen in line with the session. Called once per frame.
    pub fn sync(&mut self, session: &QuizSession, now: Instant) {
        if !session.is_initialized() {
            return;
        }

        if self.screen == Destination::Start {
            if session.phase() == SessionPhase::InProgress {
                let deadline = *self.countdown_deadline.get_or_insert(now + self.countdown);
                if now >= deadline {
                    self.navigate(Destination::Question(1));
                }
            } else {
                self.countdown_deadline = None;
            }
            return;
        }

        let resolved = navigation::resolve(session, self.screen);
        if resolved != self.screen {
            log::debug!("Redirecting {:?} to {:?}", self.screen, resolved);
            self.navigate(resolved);
        }
    }

    /// Translate a key press into presentation changes and a session action.
    pub fn handle_key(&mut self, key: KeyCode, session: &QuizSession) -> Action {
        if is_quit(key) {
            return Action::Quit;
        }
        if !session.is_initialized() {
            return Action::None;
        }

        match self.screen {
            Destination::Home => self.handle_settings_key(key, session),
            Destination::Start => self.handle_start_key(key, session),
            Destination::Question(number) => self.handle_question_key(key, session, number),
            Destination::Results => self.handle_results_key(key, session),
        }
    }

    fn handle_settings_key(&mut self, key: KeyCode, session: &QuizSession) -> Action {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.editor.previous_field(),
            KeyCode::Down | KeyCode::Char('j') => self.editor.next_field(),
            KeyCode::Left | KeyCode::Char('h') => self.editor.adjust(false, session.categories()),
            KeyCode::Right | KeyCode::Char('l') => self.editor.adjust(true, session.categories()),
            KeyCode::Enter => {
                self.navigate(Destination::Start);
                return Action::StartQuiz(self.editor.draft.clone());
            }
            _ => {}
        }
        Action::None
    }

    fn handle_start_key(&mut self, key: KeyCode, session: &QuizSession) -> Action {
        if session.error().is_none() {
            return Action::None;
        }
        match key {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Action::Retry,
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => {
                self.navigate(Destination::Home);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_question_key(&mut self, key: KeyCode, session: &QuizSession, number: usize) -> Action {
        let Some(question) = session.question(number) else {
            return Action::None;
        };
        let option_count = question.all_answers().len().max(1);
        let answered = session.answer_for(number - 1).is_some();

        match key {
            KeyCode::Up | KeyCode::Char('k') if !answered => {
                self.selected_option = (self.selected_option + option_count - 1) % option_count;
            }
            KeyCode::Down | KeyCode::Char('j') if !answered => {
                self.selected_option = (self.selected_option + 1) % option_count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if answered {
                    self.navigate(navigation::after_question(session, number));
                } else if let Some(answer) = question.all_answers().get(self.selected_option) {
                    return Action::RecordAnswer {
                        question_index: number - 1,
                        answer: answer.clone(),
                    };
                }
            }
            _ => {}
        }
        Action::None
    }

    fn handle_results_key(&mut self, key: KeyCode, session: &QuizSession) -> Action {
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                let max_scroll = session.user_answers().len().saturating_sub(1);
                self.results_scroll = (self.results_scroll + 1).min(max_scroll);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.results_scroll = self.results_scroll.saturating_sub(1);
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.navigate(Destination::Start);
                return Action::PlayAgain(self.editor.draft.clone());
            }
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Esc => {
                self.navigate(Destination::Home);
                return Action::GoHome;
            }
            _ => {}
        }
        Action::None
    }
}

fn is_quit(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q'))
}
