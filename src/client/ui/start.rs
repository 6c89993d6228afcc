//! Start screen: fetching, failure, then the countdown.

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::client::state::ClientApp;
use crate::session::{QuizSession, SessionPhase};

use super::render::TITLE;

/// Render the start screen.
pub fn render(frame: &mut Frame, area: Rect, app: &ClientApp, session: &QuizSession, now: Instant) {
    let chunks = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Length(11),
        Constraint::Percentage(30),
    ])
    .horizontal_margin(4)
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
    ];

    match session.phase() {
        SessionPhase::Failed => {
            let message = session.error().unwrap_or("Failed to load quiz questions");
            content.push(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).bold(),
            )));
            content.push(Line::from(""));
            content.push(Line::from(""));
            content.push(Line::from(Span::styled(
                "[R] Try Again  ·  [B] Back to Settings",
                Style::default().fg(Color::DarkGray),
            )));
        }
        SessionPhase::Loading => {
            content.push(Line::from(Span::styled(
                "Fetching questions...",
                Style::default().fg(Color::Yellow),
            )));
        }
        SessionPhase::InProgress => {
            let remaining = app
                .countdown_remaining(now)
                .map(|secs| secs.to_string())
                .unwrap_or_default();
            content.push(Line::from(Span::styled(
                remaining,
                Style::default().fg(Color::Yellow).bold(),
            )));
            content.push(Line::from(""));
            content.push(Line::from(Span::styled(
                "Get Ready!",
                Style::default().fg(Color::Green).bold(),
            )));
            content.push(Line::from(
                "Your quiz is about to begin...".fg(Color::DarkGray),
            ));
        }
        _ => {
            content.push(Line::from(Span::styled(
                "Preparing your quiz...",
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, chunks[1]);
}
