//! Theme tokens for the MethodMap TUI.
//!
//! Accent colors come from the infographic's two process gradients:
//! emerald/cyan for engineering, sky/amber for scientific, on a dark
//! terminal background.

use ratatui::style::{Color, Modifier, Style};

use methodmap_core::{ProcessId, StepMarker};

/// Electric cyan — shared accent for focus and highlights.
pub const ACCENT: Color = Color::Rgb(34, 211, 238);
/// Emerald — engineering accent.
pub const ENGINEERING: Color = Color::Rgb(52, 211, 153);
/// Sky blue — scientific accent.
pub const SCIENTIFIC: Color = Color::Rgb(56, 189, 248);
/// Amber — warnings and the scientific gradient tail.
pub const WARNING: Color = Color::Rgb(245, 158, 11);
/// Steel blue — muted and secondary text.
pub const MUTED: Color = Color::Rgb(100, 149, 237);
/// Light gray — body copy.
pub const TEXT: Color = Color::Rgb(210, 210, 214);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

/// Accent color for a process.
pub fn process_color(id: ProcessId) -> Color {
    match id {
        ProcessId::Engineering => ENGINEERING,
        ProcessId::Scientific => SCIENTIFIC,
    }
}

pub fn process_style(id: ProcessId) -> Style {
    Style::default().fg(process_color(id))
}

pub fn process_style_bold(id: ProcessId) -> Style {
    process_style(id).add_modifier(Modifier::BOLD)
}

/// Style for a diagram node / step row given its marker state.
pub fn marker_style(marker: StepMarker, id: ProcessId) -> Style {
    match marker {
        StepMarker::Active => Style::default()
            .fg(process_color(id))
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        StepMarker::Done => process_style(id),
        StepMarker::Upcoming => muted(),
    }
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_colors_differ() {
        assert_ne!(
            process_color(ProcessId::Engineering),
            process_color(ProcessId::Scientific)
        );
    }

    #[test]
    fn marker_styles_are_distinct() {
        let id = ProcessId::Engineering;
        let active = marker_style(StepMarker::Active, id);
        let done = marker_style(StepMarker::Done, id);
        let upcoming = marker_style(StepMarker::Upcoming, id);
        assert_ne!(active, done);
        assert_ne!(done, upcoming);
    }
}
