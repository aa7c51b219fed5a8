use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Position;
use tracing::{info, warn};

use crate::api::{LoadOutcome, Loader};
use crate::app::keymap::KeyAction;
use crate::app::{AppState, Focus, VisibleState};
use crate::search::apply_filter;
use crate::ui;
use crate::view;

/// Work the event loop must do after an input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Reload,
}

/// Enter the loading state and start a fetch.
///
/// Shows the loading indicator, hides the error banner and clears the
/// results area. Calling this again while a fetch is in flight is allowed;
/// only the newest fetch can land.
pub fn load(app: &mut AppState, loader: &Loader) {
    app.visible = VisibleState::Loading;
    app.clear_results();
    let ticket = app.store.begin_load();
    info!(ticket = ticket.0, endpoint = loader.endpoint(), "loading users");
    loader.spawn(ticket);
}

/// Apply a finished fetch.
///
/// Outcomes from superseded fetches are dropped. On success the store is
/// replaced and every record rendered; on failure the store is left as it was.
pub fn complete_load(app: &mut AppState, outcome: LoadOutcome) {
    if !app.store.is_current(outcome.ticket) {
        info!(ticket = outcome.ticket.0, "ignoring superseded load");
        return;
    }
    match outcome.result {
        Ok(users) => {
            info!(ticket = outcome.ticket.0, count = users.len(), "users loaded");
            app.store.commit(outcome.ticket, users);
            app.visible = VisibleState::Loaded;
            app.show_results(view::render(app.store.records()));
        }
        Err(e) => {
            warn!(ticket = outcome.ticket.0, error = %e, transport = e.is_transport(), "failed to load users");
            app.visible = VisibleState::Failed;
            app.clear_results();
        }
    }
}

/// Kick off the first load. Called once the terminal is ready.
pub fn init(app: &mut AppState, loader: &Loader) {
    load(app, loader);
}

/// Apply every fetch that finished since the last tick.
pub fn drain_loads(app: &mut AppState, loader: &mut Loader) {
    while let Some(outcome) = loader.try_next() {
        complete_load(app, outcome);
    }
}

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    loader: &mut Loader,
) -> Result<()> {
    init(app, loader);

    while !app.should_quit {
        drain_loads(app, loader);

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let request = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => None,
        };
        if let Some(Request::Reload) = request {
            load(app, loader);
        }
    }

    Ok(())
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Option<Request> {
    // Control chords are commands even while the filter has focus.
    if app.focus != Focus::Results && key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_results_key(app, key);
    }
    match app.focus {
        Focus::FilterInput => {
            match key.code {
                KeyCode::Enter => apply_filter(app),
                KeyCode::Tab => app.focus = app.focus.next(),
                KeyCode::Esc => app.focus = Focus::Results,
                KeyCode::Backspace => {
                    app.filter_input.pop();
                }
                KeyCode::Char(c) => app.filter_input.push(c),
                _ => {}
            }
            None
        }
        Focus::FilterButton => {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => apply_filter(app),
                KeyCode::Tab => app.focus = app.focus.next(),
                KeyCode::Esc => app.focus = Focus::Results,
                _ => {}
            }
            None
        }
        Focus::Results => handle_results_key(app, key),
    }
}

fn handle_results_key(app: &mut AppState, key: KeyEvent) -> Option<Request> {
    let rpp = app.rows_per_page.max(1);
    match app.keymap.resolve(&key)? {
        KeyAction::Quit => app.should_quit = true,
        KeyAction::Reload => return Some(Request::Reload),
        KeyAction::FocusFilter => app.focus = Focus::FilterInput,
        KeyAction::ClearFilter => {
            app.filter_input.clear();
            if app.visible == VisibleState::Loaded {
                apply_filter(app);
            }
        }
        KeyAction::FocusNext => app.focus = app.focus.next(),
        KeyAction::ScrollUp => app.scroll = app.scroll.saturating_sub(1),
        KeyAction::ScrollDown => app.scroll = app.scroll.saturating_add(1),
        KeyAction::PageUp => app.scroll = app.scroll.saturating_sub(rpp),
        KeyAction::PageDown => app.scroll = app.scroll.saturating_add(rpp),
        KeyAction::Ignore => {}
    }
    None
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Option<Request> {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.hit.filter_button.contains(pos) {
                app.focus = Focus::FilterButton;
                apply_filter(app);
            } else if app.hit.filter_input.contains(pos) {
                app.focus = Focus::FilterInput;
            } else if app.hit.results.contains(pos) {
                app.focus = Focus::Results;
            }
        }
        MouseEventKind::ScrollDown if app.hit.results.contains(pos) => {
            app.scroll = app.scroll.saturating_add(1);
        }
        MouseEventKind::ScrollUp if app.hit.results.contains(pos) => {
            app.scroll = app.scroll.saturating_sub(1);
        }
        _ => {}
    }
    None
}
