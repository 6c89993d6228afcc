//! Question screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap};

use crate::client::state::ClientApp;
use crate::models::{Question, UserAnswer};
use crate::session::QuizSession;
use crate::text::decode_entities;

use super::render::render_controls;

/// Render question `number` (1-based).
pub fn render(frame: &mut Frame, area: Rect, app: &ClientApp, session: &QuizSession, number: usize) {
    let Some(question) = session.question(number) else {
        let missing = Paragraph::new("Question not found")
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(missing, area);
        return;
    };
    let total = session.questions().len();
    let answer = session.answer_for(number - 1);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Progress text
        Constraint::Length(1), // Progress bar
        Constraint::Length(1),
        Constraint::Length(6), // Question text
        Constraint::Min(6),    // Options
        Constraint::Length(2), // Feedback
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], chunks[1], session, number, total);
    render_question_text(frame, chunks[3], question);
    render_options(frame, chunks[4], question, app.selected_option, answer);
    render_feedback(frame, chunks[5], answer);

    let controls = match answer {
        None => "j/k or arrows to select  ·  Enter/Space to answer  ·  q quit",
        Some(_) if number == total => "Enter  View Results  ·  q quit",
        Some(_) => "Enter  Next Question  ·  q quit",
    };
    render_controls(frame, chunks[6], controls);
}

fn render_progress(
    frame: &mut Frame,
    text_area: Rect,
    bar_area: Rect,
    session: &QuizSession,
    number: usize,
    total: usize,
) {
    let percent = session.progress_percent(number).unwrap_or(0);

    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(6)]).areas(text_area);
    frame.render_widget(
        Paragraph::new(format!("Question {} of {}", number, total))
            .style(Style::default().fg(Color::Cyan).bold()),
        left,
    );
    frame.render_widget(
        Paragraph::new(format!("{}%", percent))
            .alignment(Alignment::Right)
            .fg(Color::Yellow),
        right,
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Yellow).bg(Color::DarkGray))
        .percent(u16::from(percent))
        .label("");
    frame.render_widget(gauge, bar_area);
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &Question) {
    let content = vec![
        Line::from(Span::styled(
            decode_entities(&question.prompt),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", question.difficulty),
                Style::default().fg(Color::Black).bg(Color::Blue),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", decode_entities(&question.category)),
                Style::default().fg(Color::Black).bg(Color::Green),
            ),
        ]),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selected: usize,
    answer: Option<&UserAnswer>,
) {
    let lines: Vec<Line> = question
        .all_answers()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let label = option_label(i);
            let (prefix, style) = match answer {
                Some(_) if question.is_correct(option) => {
                    ("+ ", Style::default().fg(Color::Green).bold())
                }
                Some(answer) if answer.selected_answer() == option => {
                    ("x ", Style::default().fg(Color::Red).bold())
                }
                Some(_) => ("  ", Style::default().fg(Color::DarkGray)),
                None if i == selected => ("> ", Style::default().fg(Color::Yellow).bold()),
                None => ("  ", Style::default().fg(Color::White)),
            };

            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{}) ", label), style),
                Span::styled(decode_entities(option), style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, answer: Option<&UserAnswer>) {
    let Some(answer) = answer else {
        return;
    };

    let line = if answer.is_correct() {
        Line::from(Span::styled("Correct!", Style::default().fg(Color::Green).bold()))
    } else {
        Line::from(vec![
            Span::styled("Incorrect!", Style::default().fg(Color::Red).bold()),
            Span::styled(
                format!("  The answer was {}", decode_entities(answer.correct_answer())),
                Style::default().fg(Color::Gray),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}
