//! UI rendering for TUI.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use reelscript_core::RequestState;

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App, state: &RequestState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    draw_form(f, app, body[0]);
    draw_result(f, app, state, body[1]);
    draw_status_bar(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Reelscript - Real Estate Reel Scripts")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style)
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let choice = |label: &str| format!("< {} >", label);

    f.render_widget(
        Paragraph::new(choice(app.client_type.label()))
            .block(field_block("Client Type", app.focus == Focus::ClientType)),
        rows[0],
    );

    let area_text = if app.focus == Focus::Area {
        format!("{}_", app.area)
    } else {
        app.area.clone()
    };
    f.render_widget(
        Paragraph::new(area_text).block(field_block("Area / Project", app.focus == Focus::Area)),
        rows[1],
    );

    f.render_widget(
        Paragraph::new(choice(app.angle.label()))
            .block(field_block("Video Angle", app.focus == Focus::Angle)),
        rows[2],
    );

    f.render_widget(
        Paragraph::new(choice(&format!("{} s", app.duration.as_str())))
            .block(field_block("Duration", app.focus == Focus::Duration)),
        rows[3],
    );
}

fn draw_result(f: &mut Frame, app: &App, state: &RequestState, area: Rect) {
    let focused = app.focus == Focus::Results;
    match state {
        RequestState::Idle => {
            let hint = Paragraph::new("Fill in the form and press Enter to generate a script.")
                .block(field_block("Script", focused))
                .wrap(Wrap { trim: true });
            f.render_widget(hint, area);
        }
        RequestState::Loading => {
            let loading = Paragraph::new("Generating script...")
                .block(field_block("Script", focused))
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center);
            f.render_widget(loading, area);
        }
        RequestState::Failed(message) => {
            let failed = Paragraph::new(message.as_str())
                .block(field_block("Script", focused))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(failed, area);
        }
        RequestState::Success { sections, .. } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(area);

            let items: Vec<ListItem> = sections
                .iter()
                .map(|s| ListItem::new(s.title.as_str()))
                .collect();
            let list = List::new(items)
                .block(field_block("Sections", focused))
                .highlight_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                );
            let mut list_state = ListState::default().with_selected(Some(app.selected_section));
            f.render_stateful_widget(list, chunks[0], &mut list_state);

            if let Some(section) = sections.get(app.selected_section) {
                let card = Paragraph::new(section.content.as_str())
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(section.title.as_str()),
                    )
                    .wrap(Wrap { trim: false });
                f.render_widget(card, chunks[1]);
            }
        }
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Area => "Type to edit | Tab: Next | Enter: Generate | Esc: Cancel/Quit",
        Focus::Results => "↑↓: Select | C: Copy | Tab: Next | Esc: Cancel/Quit",
        _ => "←→: Change | Tab: Next | Enter: Generate | Q: Quit",
    };

    let status_text = format!("{} | {}", app.status_message, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use reelscript_core::{GeneratedScript, Section};

    fn render(app: &App, state: &RequestState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_section_titles_and_selected_content() {
        let state = RequestState::Success {
            script: GeneratedScript::from("1) HOOK\nopening line\n2) CTA\nfollow".to_string()),
            sections: vec![
                Section::new("1) HOOK", "opening line"),
                Section::new("2) CTA", "follow"),
            ],
        };
        let screen = render(&App::new(), &state);

        assert!(screen.contains("1) HOOK"));
        assert!(screen.contains("2) CTA"));
        assert!(screen.contains("opening line"));
    }

    #[test]
    fn renders_loading_indicator() {
        let screen = render(&App::new(), &RequestState::Loading);
        assert!(screen.contains("Generating script..."));
    }

    #[test]
    fn renders_failure_message() {
        let state = RequestState::Failed("upstream unavailable".to_string());
        let screen = render(&App::new(), &state);
        assert!(screen.contains("upstream unavailable"));
    }
}
