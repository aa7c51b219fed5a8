pub mod cards;
pub mod components;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{AppState, VisibleState};

/// Draw the whole screen: header with filter controls, body, status bar.
pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(f.area());

    components::render_header(f, root[0], app);

    let results = match app.visible {
        VisibleState::Loading => {
            let [indicator, rest] = split_body(root[1], components::LOADING_HEIGHT);
            components::render_loading(f, indicator, app);
            rest
        }
        VisibleState::Failed => {
            let [banner, rest] = split_body(root[1], components::ERROR_HEIGHT);
            components::render_error(f, banner, app);
            rest
        }
        VisibleState::Idle | VisibleState::Loaded => root[1],
    };
    app.hit.results = results;
    cards::render_results(f, results, app);

    components::render_status_bar(f, root[2], app);
}

/// Indicator strip on top, results area below it.
fn split_body(body: Rect, indicator_height: u16) -> [Rect; 2] {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(indicator_height), Constraint::Min(0)])
        .split(body);
    [parts[0], parts[1]]
}
