//! Step diagram — the point constellation rendered on a canvas.
//!
//! Coordinates are the normalized 100x60 layout from the core crate, with y
//! flipped (content y grows down, canvas y grows up). The base path connects
//! all points; the progress stroke covers the segments behind the active
//! step, which matches `line_progress` exactly for evenly weighted segments.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};

use methodmap_core::{DiagramPoint, MAP_HEIGHT};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, fullscreen: bool) {
    let id = app.navigator.active_process();
    let label = &app.navigator.current_process().label;
    let title = if fullscreen {
        format!(" Diagram for {label} — [1-8]jump [h/l]move [Esc]exit ")
    } else {
        format!(" Diagram for {label} ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::process_style(id))
        .title(title)
        .title_style(theme::process_style_bold(id));

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, MAP_HEIGHT])
        .paint(|ctx| paint(ctx, app, fullscreen));

    f.render_widget(canvas, area);
}

fn flip(p: DiagramPoint) -> (f64, f64) {
    (p.x, MAP_HEIGHT - p.y)
}

fn paint(ctx: &mut Context, app: &AppState, fullscreen: bool) {
    let nav = &app.navigator;
    let id = nav.active_process();
    let layout = nav.diagrams().layout(id);
    let active = nav.active_step();

    // Base path through all points.
    for (from, to) in layout.segments() {
        let (x1, y1) = flip(from);
        let (x2, y2) = flip(to);
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color: theme::MUTED,
        });
    }

    // Progress stroke: the segments already walked.
    for (i, (from, to)) in layout.segments().enumerate() {
        if i >= active {
            break;
        }
        let (x1, y1) = flip(from);
        let (x2, y2) = flip(to);
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color: theme::process_color(id),
        });
    }

    // Tracker ring around the active point.
    let tracker = flip(nav.tracker_point());
    ctx.draw(&Circle {
        x: tracker.0,
        y: tracker.1,
        radius: 2.0,
        color: theme::process_color(id),
    });

    // Step nodes on top.
    ctx.layer();
    for (index, step) in nav.current_process().steps.iter().enumerate() {
        let (x, y) = flip(layout.point(index));
        let style = theme::marker_style(nav.marker(index), id);
        let text = if fullscreen {
            format!("{} {} {}", index + 1, step.icon.glyph(), step.title)
        } else {
            format!("{}●", index + 1)
        };
        ctx.print(x, y, Line::from(Span::styled(text, style)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_inverts_y_only() {
        let (x, y) = flip(DiagramPoint::new(14.0, 36.0));
        assert_eq!(x, 14.0);
        assert_eq!(y, MAP_HEIGHT - 36.0);
    }
}
