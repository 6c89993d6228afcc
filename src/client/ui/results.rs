//! Results screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::client::state::ClientApp;
use crate::session::{QuizSession, Score};
use crate::text::decode_entities;

use super::render::render_controls;

const QUESTION_PREVIEW_LENGTH: usize = 60;

/// Headline and colour for a score percentage.
pub fn score_message(percent: u8) -> (&'static str, Color) {
    match percent {
        90.. => ("Outstanding!", Color::Green),
        80..=89 => ("Excellent!", Color::Green),
        70..=79 => ("Great Job!", Color::Cyan),
        60..=69 => ("Good Work!", Color::Yellow),
        _ => ("Keep Trying!", Color::Red),
    }
}

/// Render the results screen.
pub fn render(frame: &mut Frame, area: Rect, app: &ClientApp, session: &QuizSession) {
    let Some(score) = session.score() else {
        let empty = Paragraph::new("No results yet")
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(5), // Headline
        Constraint::Length(5), // Tiles
        Constraint::Min(6),    // Breakdown
        Constraint::Length(2), // Controls
    ])
    .margin(1)
    .split(area);

    render_headline(frame, chunks[0], &score);
    render_tiles(frame, chunks[1], &score);
    render_breakdown(frame, chunks[2], session, app.results_scroll);
    render_controls(
        frame,
        chunks[3],
        "p play again  ·  h home  ·  j/k scroll  ·  q quit",
    );
}

fn render_headline(frame: &mut Frame, area: Rect, score: &Score) {
    let (message, color) = score_message(score.percent);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled("RESULTS", Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(color).bold())),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_tiles(frame: &mut Frame, area: Rect, score: &Score) {
    let tiles = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
    let (_, color) = score_message(score.percent);

    render_tile(frame, tiles[0], "Correct", score.correct.to_string(), Color::Green);
    render_tile(
        frame,
        tiles[1],
        "Incorrect",
        score.incorrect.to_string(),
        Color::Red,
    );
    render_tile(
        frame,
        tiles[2],
        "Score",
        format!("{}%  ({}/{})", score.percent, score.correct, score.total),
        color,
    );
}

fn render_tile(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(value, Style::default().fg(color).bold())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}

fn render_breakdown(frame: &mut Frame, area: Rect, session: &QuizSession, scroll: usize) {
    let mut lines = Vec::new();
    // Scrolling moves whole entries.
    for answer in session.user_answers().iter().skip(scroll) {
        let index = answer.question_index();
        let Some(question) = session.questions().get(index) else {
            continue;
        };

        let (symbol, color) = if answer.is_correct() {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate_question(&decode_entities(&question.prompt)),
                Style::default().fg(Color::White),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("       Correct: "),
            Span::styled(
                decode_entities(answer.correct_answer()),
                Style::default().fg(Color::Green),
            ),
        ]));
        if !answer.is_correct() {
            lines.push(Line::from(vec![
                Span::raw("       Your answer: "),
                Span::styled(
                    decode_entities(answer.selected_answer()),
                    Style::default().fg(Color::Red),
                ),
            ]));
        }
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Your Answers ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
