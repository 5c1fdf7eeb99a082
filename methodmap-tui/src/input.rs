//! Keyboard input dispatch — overlays first, then global keys, then
//! panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use methodmap_core::{ProcessId, StepDirection};

use crate::app::{AppState, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::MapExpanded => {
            handle_map_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            app.active_panel = app.active_panel.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('?') => {
            app.active_panel = Panel::Help;
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Walkthrough => handle_walkthrough_key(app, key),
        Panel::Examples => handle_examples_key(app, key),
        Panel::Compare => {} // display only
        Panel::Help => {}    // display only
    }
}

/// The immersive map captures all input while open. Every exit key releases
/// it; step navigation stays live so the tracker can move full screen.
fn handle_map_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('f') | KeyCode::Enter => {
            app.close_map();
        }
        KeyCode::Char('q') => {
            // Quit from inside the overlay; terminal restore runs in main.
            app.close_map();
            app.running = false;
        }
        _ => handle_step_keys(app, key),
    }
}

fn handle_walkthrough_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('f') | KeyCode::Enter => {
            app.open_map();
        }
        _ => handle_step_keys(app, key),
    }
}

/// Examples shares the picker keys so the focused card can be switched.
fn handle_examples_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('e') => app.select_process(ProcessId::Engineering),
        KeyCode::Char('s') => app.select_process(ProcessId::Scientific),
        _ => {}
    }
}

/// Picker, step movement, and direct step jump. The navigator clamps, so
/// boundary presses are safe no-ops; the UI just greys the hint.
fn handle_step_keys(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('e') => app.select_process(ProcessId::Engineering),
        KeyCode::Char('s') => app.select_process(ProcessId::Scientific),
        KeyCode::Char('h') | KeyCode::Left => {
            app.navigator.move_step(StepDirection::Back);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.navigator.move_step(StepDirection::Forward);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index >= app.navigator.step_count() {
                app.set_warning(format!("Only {} steps", app.navigator.step_count()));
            }
            app.navigator.jump_to(index);
        }
        _ => {}
    }
}

/// Key bindings listed in the help panel.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q", "Quit"),
        ("Tab / Shift+Tab", "Cycle panels"),
        ("?", "Jump to Help"),
        ("e / s", "Pick engineering / scientific"),
        ("h/←, l/→", "Previous / next step"),
        ("1-8", "Jump to step"),
        ("f / Enter", "Toggle immersive map"),
        ("Esc", "Close immersive map"),
    ]
}
