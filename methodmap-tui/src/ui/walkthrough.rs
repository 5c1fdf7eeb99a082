//! Panel 1 — Walkthrough: process picker, step diagram, detail panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use methodmap_core::ProcessId;

use crate::app::AppState;
use crate::theme;
use crate::ui::{detail, diagram};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_picker(f, rows[0], app);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    diagram::render(f, cols[0], app, false);
    detail::render(f, cols[1], app);
}

/// Picker strip: one row per process, active one highlighted.
fn render_picker(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    let total = app.navigator.library().total_step_count();

    for id in ProcessId::ALL {
        let process = app.navigator.library().process(id);
        let is_active = id == app.navigator.active_process();
        let (marker, style) = if is_active {
            ("▶", theme::process_style_bold(id))
        } else {
            (" ", theme::muted())
        };
        let hotkey = match id {
            ProcessId::Engineering => "e",
            ProcessId::Scientific => "s",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} [{hotkey}] "), style),
            Span::styled(format!("{} {}", process.icon.glyph(), process.label), style),
            Span::styled(format!("  ⟨{}⟩  ", process.badge), theme::warning()),
            Span::styled(process.intro.as_str(), theme::muted()),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!("   {total} total steps — {} in each method", total / 2),
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
