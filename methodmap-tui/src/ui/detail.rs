//! Detail panel — current step copy, progress gauge, movement hints.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // step copy
            Constraint::Length(1), // progress label
            Constraint::Length(1), // gauge
            Constraint::Length(2), // movement hints
            Constraint::Length(3), // note block
        ])
        .split(area);

    render_copy(f, rows[0], app);
    render_progress(f, rows[1], rows[2], app);
    render_hints(f, rows[3], app);
    render_note(f, rows[4], app);
}

fn render_copy(f: &mut Frame, area: Rect, app: &AppState) {
    let nav = &app.navigator;
    let id = nav.active_process();
    let step = nav.current_step();

    let lines = vec![
        Line::from(Span::styled("Current Step", theme::muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{}. {} ", nav.active_step() + 1, step.title),
                theme::process_style_bold(id),
            ),
            Span::styled(step.icon.glyph(), theme::process_style(id)),
        ]),
        Line::from(""),
        Line::from(Span::styled(step.detail.as_str(), theme::text())),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_progress(f: &mut Frame, label_area: Rect, gauge_area: Rect, app: &AppState) {
    let nav = &app.navigator;
    let pct = nav.progress_percent();

    let label = Line::from(vec![
        Span::styled("Progress  ", theme::muted()),
        Span::styled(
            format!("step {}/{}", nav.active_step() + 1, nav.step_count()),
            theme::muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(label), label_area);

    let gauge = Gauge::default()
        .gauge_style(theme::process_style(nav.active_process()))
        .ratio(f64::from(pct) / 100.0)
        .label(format!("{pct}%"));
    f.render_widget(gauge, gauge_area);
}

/// Prev/next hints; greyed at the boundaries (the navigator clamps anyway).
fn render_hints(f: &mut Frame, area: Rect, app: &AppState) {
    let nav = &app.navigator;
    let prev_style = if nav.at_first_step() {
        theme::muted()
    } else {
        theme::accent()
    };
    let next_style = if nav.at_last_step() {
        theme::muted()
    } else {
        theme::accent()
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("[h] Previous", prev_style),
            Span::raw("   "),
            Span::styled("[l] Next", next_style),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_note(f: &mut Frame, area: Rect, app: &AppState) {
    let note = &app.navigator.current_process().note;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("Note: {note}"), theme::warning())),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
