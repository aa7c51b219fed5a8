//! Shared UI components: header with filter controls, indicators, status bar.
//!
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::keymap::KeyAction;
use crate::app::{AppState, Focus, VisibleState};

pub const LOADING_MESSAGE: &str = "Loading users...";
pub const ERROR_MESSAGE: &str = "Failed to load users.";

/// Rows taken by the loading indicator, borders included.
pub const LOADING_HEIGHT: u16 = 3;
/// Rows taken by the error banner, borders included.
pub const ERROR_HEIGHT: u16 = 4;

/// Title, filter input and Filter button. Records their areas for mouse hits.
pub fn render_header(f: &mut Frame, area: Rect, app: &mut AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(13), Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    let title = Paragraph::new("usercards")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(
            Style::default()
                .fg(app.theme.header_fg)
                .bg(app.theme.header_bg)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, cols[0]);

    let input_focused = app.focus == Focus::FilterInput;
    let mut text = vec![Span::styled(
        app.filter_input.clone(),
        Style::default().fg(app.theme.text),
    )];
    if input_focused {
        text.push(Span::styled("_", Style::default().fg(app.theme.focus)));
    }
    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title("Filter by name, email or city")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(focus_color(app, input_focused))),
    );
    f.render_widget(input, cols[1]);

    let button_focused = app.focus == Focus::FilterButton;
    let mut button_style = Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD);
    if button_focused {
        button_style = button_style.add_modifier(Modifier::REVERSED);
    }
    let button = Paragraph::new("Filter")
        .alignment(Alignment::Center)
        .style(button_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(focus_color(app, button_focused))),
        );
    f.render_widget(button, cols[2]);

    app.hit.filter_input = cols[1];
    app.hit.filter_button = cols[2];
}

fn focus_color(app: &AppState, focused: bool) -> ratatui::style::Color {
    if focused { app.theme.focus } else { app.theme.border }
}

pub fn render_loading(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Clear, area);
    let p = Paragraph::new(LOADING_MESSAGE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title("Loading")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}

/// Error banner. Never shows failure details; those are in the log.
pub fn render_error(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Clear, area);
    let reload = app.keymap.keys_for(KeyAction::Reload).join("/");
    let lines = vec![
        Line::from(Span::styled(
            ERROR_MESSAGE,
            Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Press {reload} to try again."),
            Style::default().fg(app.theme.muted),
        )),
    ];
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Error")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.error)),
        );
    f.render_widget(p, area);
}

/// Bottom status bar with state, counts and key hints.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let state = match app.visible {
        VisibleState::Idle => "IDLE",
        VisibleState::Loading => "LOADING",
        VisibleState::Loaded => "LOADED",
        VisibleState::Failed => "FAILED",
    };
    let focus = match app.focus {
        Focus::FilterInput => "input",
        Focus::FilterButton => "button",
        Focus::Results => "results",
    };
    let reload = app.keymap.keys_for(KeyAction::Reload).join("/");
    let quit = app.keymap.keys_for(KeyAction::Quit).join("/");
    let msg = format!(
        "{state}  shown:{}/{}  focus:{focus}  | Tab: focus; Enter: filter; Esc: leave input; {reload}: reload; {quit}: quit",
        app.shown_count(),
        app.store.len(),
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}
