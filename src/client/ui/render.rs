//! Main client UI renderer.

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use crate::client::state::ClientApp;
use crate::session::{Destination, QuizSession};

use super::{question, results, settings, start};

pub(super) const TITLE: &str = "TRIVIA TIME";

/// Render the client UI for the current screen.
pub fn render(frame: &mut Frame, app: &ClientApp, session: &QuizSession, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    if !session.is_initialized() {
        render_booting(frame, area);
        return;
    }

    match app.screen {
        Destination::Home => settings::render(frame, area, app, session),
        Destination::Start => start::render(frame, area, app, session, now),
        Destination::Question(number) => question::render(frame, area, app, session, number),
        Destination::Results => results::render(frame, area, app, session),
    }
}

fn render_booting(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(5),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(Span::styled("Loading...", Style::default().fg(Color::Yellow))),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}

/// Controls hint along the bottom of a screen.
pub(super) fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
