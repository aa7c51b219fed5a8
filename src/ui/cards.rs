//! Results grid: draws a [`ResultsView`](crate::view::ResultsView) as user cards.
//!
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{AppState, Focus, Theme};
use crate::view::{ResultsView, UserCard};

/// Height of one card including its border.
pub const CARD_HEIGHT: u16 = 8;

/// Cards per row for a given inner width: three on wide screens, two on medium, one otherwise.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        w if w >= 120 => 3,
        w if w >= 80 => 2,
        _ => 1,
    }
}

pub fn render_results(f: &mut Frame, area: Rect, app: &mut AppState) {
    let border = if app.focus == Focus::Results { app.theme.focus } else { app.theme.border };
    let block = Block::default()
        .title("Users")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let Some(results) = app.results.as_ref() else {
        return;
    };
    let cards = match results {
        ResultsView::NoResults => {
            render_no_results(f, inner, &app.theme, results.message().unwrap_or_default());
            return;
        }
        ResultsView::Cards(cards) => cards,
    };

    let columns = columns_for_width(inner.width);
    let rows_visible = (inner.height / CARD_HEIGHT).max(1) as usize;
    let total_rows = cards.len().div_ceil(columns);
    let max_scroll = total_rows.saturating_sub(rows_visible);
    let scroll = app.scroll.min(max_scroll);

    for (slot, row) in (scroll..total_rows.min(scroll + rows_visible)).enumerate() {
        let y = inner.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
        let row_area = Rect::new(inner.x, y, inner.width, height);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);
        for (col, cell) in cells.iter().enumerate() {
            if let Some(card) = cards.get(row * columns + col) {
                render_card(f, *cell, card, &app.theme);
            }
        }
    }

    app.scroll = scroll;
    app.rows_per_page = rows_visible;
}

fn render_no_results(f: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
        .split(area);
    let p = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted));
    f.render_widget(p, middle[1]);
}

fn render_card(f: &mut Frame, area: Rect, card: &UserCard, theme: &Theme) {
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.text);
    let field = |name: &'static str, text: &str| {
        Line::from(vec![Span::styled(name, label), Span::styled(text.to_string(), value)])
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", card.monogram),
                Style::default().fg(theme.header_bg).bg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                card.name.clone(),
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            ),
        ]),
        field("User:  ", &card.username),
        field("Email: ", &card.email),
        field("Phone: ", &card.phone),
        field("City:  ", &card.city),
        Line::from(vec![
            Span::styled("Web:   ", label),
            Span::styled(
                card.website_url.clone(),
                Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];

    let block = Block::default()
        .title(format!("#{}", card.id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_breakpoints() {
        assert_eq!(columns_for_width(40), 1);
        assert_eq!(columns_for_width(79), 1);
        assert_eq!(columns_for_width(80), 2);
        assert_eq!(columns_for_width(119), 2);
        assert_eq!(columns_for_width(200), 3);
    }
}
