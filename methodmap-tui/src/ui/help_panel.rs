//! Panel 4 — Help: keyboard shortcuts and panel documentation.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::input::key_bindings_help;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Keys");
    for (keys, desc) in key_bindings_help() {
        key(&mut lines, keys, desc);
    }
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — Walkthrough");
    key(&mut lines, "e / s", "Pick a process (always restarts at step 1)");
    key(&mut lines, "h / l", "Step back / forward (stops at the ends)");
    key(&mut lines, "1-8", "Jump straight to a step on the diagram");
    key(&mut lines, "f / Enter", "Open the immersive full-screen map");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — Examples");
    key(&mut lines, "e / s", "Switch which example card is focused");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 3 — Compare");
    key(&mut lines, "", "Static comparison of the two methods");
    lines.push(Line::from(""));

    section(&mut lines, "Immersive Map");
    key(&mut lines, "Esc / f / Enter", "Exit; step keys stay live while open");

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
