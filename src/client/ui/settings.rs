//! Settings screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::client::state::{ClientApp, SettingsField};
use crate::models::{AMOUNT_RANGE, Difficulty, QuestionType};
use crate::session::QuizSession;

use super::render::{TITLE, render_controls};

/// Render the settings screen.
pub fn render(frame: &mut Frame, area: Rect, app: &ClientApp, session: &QuizSession) {
    let chunks = Layout::vertical([
        Constraint::Length(5),  // Title
        Constraint::Length(14), // Form
        Constraint::Fill(1),
        Constraint::Length(2), // Controls
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0]);
    render_form(frame, chunks[1], app, session);
    render_controls(
        frame,
        chunks[3],
        "j/k choose setting  ·  h/l change  ·  Enter start quiz  ·  q quit",
    );
}

fn render_title(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Customize Your Quiz",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from("Choose your settings and test your knowledge!".fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &ClientApp, session: &QuizSession) {
    let editor = &app.editor;
    let draft = &editor.draft;

    let difficulty_choices: Vec<(&str, bool)> = Difficulty::ALL
        .iter()
        .map(|d| (d.label(), *d == draft.difficulty))
        .collect();
    let type_choices: Vec<(&str, bool)> = QuestionType::ALL
        .iter()
        .map(|t| (t.label(), *t == draft.kind))
        .collect();

    let amount = format!(
        "< {} >   ({}-{})",
        draft.amount,
        AMOUNT_RANGE.start(),
        AMOUNT_RANGE.end()
    );
    let category = format!("< {} >", editor.category_name(session.categories()));

    let mut lines = Vec::new();
    lines.extend(field_lines(
        "Number of Questions",
        editor.field == SettingsField::Amount,
        vec![Span::styled(amount, Style::default().fg(Color::Yellow))],
    ));
    lines.extend(field_lines(
        "Category",
        editor.field == SettingsField::Category,
        vec![Span::styled(category, Style::default().fg(Color::Yellow))],
    ));
    lines.extend(field_lines(
        "Difficulty",
        editor.field == SettingsField::Difficulty,
        choice_spans(&difficulty_choices),
    ));
    lines.extend(field_lines(
        "Question Type",
        editor.field == SettingsField::Type,
        choice_spans(&type_choices),
    ));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Settings ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn field_lines<'a>(label: &'a str, focused: bool, value: Vec<Span<'a>>) -> [Line<'a>; 3] {
    let (marker, style) = if focused {
        ("> ", Style::default().fg(Color::Yellow).bold())
    } else {
        ("  ", Style::default().fg(Color::White))
    };

    let mut value_line = vec![Span::raw("    ")];
    value_line.extend(value);

    [
        Line::from(vec![Span::styled(marker, style), Span::styled(label, style)]),
        Line::from(value_line),
        Line::from(""),
    ]
}

fn choice_spans<'a>(choices: &[(&'a str, bool)]) -> Vec<Span<'a>> {
    choices
        .iter()
        .map(|(label, chosen)| {
            if *chosen {
                Span::styled(
                    format!("[{}] ", label),
                    Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
                )
            } else {
                Span::styled(format!(" {}  ", label), Style::default().fg(Color::Gray))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::client::ui::render::test_support::draw;
    use crate::config::Config;
    use crate::models::Category;
    use crate::session::Command;

    use super::*;

    #[test]
    fn test_shows_current_choices() {
        let mut app = ClientApp::new(&Config::default());
        app.editor.draft.category = Some(22);
        app.editor.draft.difficulty = Difficulty::Medium;

        let mut session = QuizSession::new();
        session.apply(Command::Initialize).unwrap();
        session
            .apply(Command::LoadCategories(vec![Category {
                id: 22,
                name: "Geography".into(),
            }]))
            .unwrap();

        let screen = draw(&app, &session);
        assert!(screen.contains("< 10 >"));
        assert!(screen.contains("< Geography >"));
        assert!(screen.contains("[medium]"));
        assert!(screen.contains("[Any Type]"));
    }
}
