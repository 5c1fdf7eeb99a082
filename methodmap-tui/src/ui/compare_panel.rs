//! Panel 3 — Compare: the static quick-comparison grid.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use methodmap_core::content::compare_cards;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let cards = compare_cards();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (i, card) in cards.iter().enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(format!(" {} {} ", card.icon.glyph(), card.title))
            .title_style(theme::accent_bold());

        let inner = block.inner(cols[i]);
        f.render_widget(block, cols[i]);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(card.body.as_str(), theme::text())),
        ];
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}
