//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here: the navigator from the core crate plus the
//! panel/overlay fields the presentation needs. Every transition is a
//! synchronous read-modify-write; there is no worker thread.

use methodmap_core::{ProcessId, StepNavigator};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Walkthrough,
    Examples,
    Compare,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Walkthrough => 0,
            Panel::Examples => 1,
            Panel::Compare => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Walkthrough),
            1 => Some(Panel::Examples),
            2 => Some(Panel::Compare),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Walkthrough => "Walkthrough",
            Panel::Examples => "Examples",
            Panel::Compare => "Compare",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 4).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 3) % 4).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
///
/// While `MapExpanded` is open the overlay captures all input; it is
/// released on every exit key, and terminal teardown in `main` runs
/// regardless of overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    MapExpanded,
}

/// Top-level application state.
pub struct AppState {
    pub navigator: StepNavigator,
    pub active_panel: Panel,
    pub overlay: Overlay,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            navigator: StepNavigator::with_defaults(),
            active_panel: Panel::Walkthrough,
            overlay: Overlay::Welcome,
            running: true,
            status_message: None,
        }
    }

    /// Select a process and report it in the status bar.
    pub fn select_process(&mut self, id: ProcessId) {
        self.navigator.select_process(id);
        let label = self.navigator.current_process().label.clone();
        self.set_status(format!("{label} selected"));
    }

    pub fn open_map(&mut self) {
        self.overlay = Overlay::MapExpanded;
        self.set_status("Immersive map open");
    }

    pub fn close_map(&mut self) {
        self.overlay = Overlay::None;
        self.status_message = None;
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Walkthrough.next(), Panel::Examples);
        assert_eq!(Panel::Help.next(), Panel::Walkthrough);
        assert_eq!(Panel::Walkthrough.prev(), Panel::Help);
        assert_eq!(Panel::Examples.prev(), Panel::Walkthrough);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..4 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(4).is_none());
    }

    #[test]
    fn starts_on_walkthrough_with_welcome() {
        let app = AppState::new();
        assert_eq!(app.active_panel, Panel::Walkthrough);
        assert_eq!(app.overlay, Overlay::Welcome);
        assert!(app.running);
    }

    #[test]
    fn select_process_sets_status() {
        let mut app = AppState::new();
        app.select_process(ProcessId::Scientific);
        assert_eq!(app.navigator.active_process(), ProcessId::Scientific);
        let (msg, level) = app.status_message.clone().unwrap();
        assert!(msg.contains("Scientific Method"));
        assert_eq!(level, StatusLevel::Info);
    }

    #[test]
    fn map_open_close_clears_status() {
        let mut app = AppState::new();
        app.open_map();
        assert_eq!(app.overlay, Overlay::MapExpanded);
        app.close_map();
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.status_message.is_none());
    }
}
