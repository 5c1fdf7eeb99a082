//! Panel 2 — Examples: one worked example card per process.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use methodmap_core::{Process, ProcessId};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (i, id) in ProcessId::ALL.iter().enumerate() {
        let process = app.navigator.library().process(*id);
        let focused = *id == app.navigator.active_process();
        render_card(f, cols[i], process, *id, focused);
    }
}

fn render_card(f: &mut Frame, area: Rect, process: &Process, id: ProcessId, focused: bool) {
    let example = &process.example;

    let border = if focused {
        theme::process_style(id)
    } else {
        theme::muted()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} {} ", example.icon.glyph(), example.title))
        .title_style(if focused {
            theme::process_style_bold(id)
        } else {
            theme::muted()
        });

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        example.intro.as_str(),
        theme::muted(),
    )));
    lines.push(Line::from(""));
    for (i, point) in example.points.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), theme::process_style(id)),
            Span::styled(point.as_str(), theme::text()),
        ]));
    }
    if focused {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "(follows the active process — e/s to switch)",
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
