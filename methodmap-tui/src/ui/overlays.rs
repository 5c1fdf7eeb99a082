//! Overlay widgets — welcome splash and the immersive full-screen map.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;
use crate::ui::{centered_rect, diagram};

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 45, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to MethodMap ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Scientific Method + Engineering Design Process",
            theme::accent_bold(),
        )),
        Line::from(Span::styled("A quick guide.", theme::muted())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Press e or s to pick a process",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Step through with h and l, or jump with 1-8",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press f for the immersive full-screen map",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Tab through Examples, Compare, and Help",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss...",
            theme::text(),
        )),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Immersive full-screen map: the diagram takes the whole frame, with the
/// step list underneath. Input is captured by the overlay while open.
pub fn render_map(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Clear, area);

    let step_rows = app.navigator.step_count() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(step_rows + 1)])
        .split(area);

    diagram::render(f, rows[0], app, true);
    render_step_list(f, rows[1], app);
}

fn render_step_list(f: &mut Frame, area: Rect, app: &AppState) {
    let nav = &app.navigator;
    let id = nav.active_process();

    let mut lines: Vec<Line> = Vec::new();
    for (index, step) in nav.current_process().steps.iter().enumerate() {
        let style = theme::marker_style(nav.marker(index), id);
        let marker = match nav.marker(index) {
            methodmap_core::StepMarker::Done => "●",
            methodmap_core::StepMarker::Active => "◉",
            methodmap_core::StepMarker::Upcoming => "○",
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} {}. ", index + 1), style),
            Span::styled(step.title.as_str(), style),
            Span::raw("  "),
            Span::styled(step.detail.as_str(), theme::muted()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!(
            " Progress {}%  —  path {:.0}% walked",
            nav.progress_percent(),
            nav.line_progress()
        ),
        theme::process_style(id),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
