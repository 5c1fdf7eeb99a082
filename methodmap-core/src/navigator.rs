//! The step navigator — the one piece of state behind the infographic.
//!
//! Two fields: which process is active and which step within it. Both
//! mutators keep the index invariant (`active_step < step_count`) without a
//! failure path: process selection resets to step 0, step movement clamps.
//! Everything else is a derived read-only view.

use crate::content::{ContentLibrary, Process, ProcessId, Step};
use crate::diagram::{DiagramPoint, DiagramSet};
use crate::error::ContentError;

/// Step movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Back,
    Forward,
}

impl StepDirection {
    fn delta(self) -> isize {
        match self {
            StepDirection::Back => -1,
            StepDirection::Forward => 1,
        }
    }
}

/// Presentation state of a step relative to the active one. Exactly one
/// variant applies to each index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    Done,
    Active,
    Upcoming,
}

/// Owns the navigator state plus the immutable content it navigates.
#[derive(Debug, Clone)]
pub struct StepNavigator {
    library: ContentLibrary,
    diagrams: DiagramSet,
    active_process: ProcessId,
    active_step: usize,
}

impl StepNavigator {
    /// Build a navigator over validated content. Starts at engineering,
    /// step 0.
    pub fn new(library: ContentLibrary, diagrams: DiagramSet) -> Result<Self, ContentError> {
        library.validate()?;
        Ok(Self {
            library,
            diagrams,
            active_process: ProcessId::Engineering,
            active_step: 0,
        })
    }

    /// Navigator over the built-in content. The defaults always validate.
    pub fn with_defaults() -> Self {
        Self {
            library: ContentLibrary::default(),
            diagrams: DiagramSet::default(),
            active_process: ProcessId::Engineering,
            active_step: 0,
        }
    }

    // ── Mutators ─────────────────────────────────────────────────────

    /// Switch the active process. Always resets to step 0, so the index
    /// invariant holds even when the new process has fewer steps.
    pub fn select_process(&mut self, id: ProcessId) {
        self.active_process = id;
        self.active_step = 0;
    }

    /// Move one step back or forward, clamped to `[0, step_count - 1]`.
    /// A no-op at the boundaries.
    pub fn move_step(&mut self, direction: StepDirection) {
        let max_step = self.step_count() - 1;
        let next = self.active_step as isize + direction.delta();
        self.active_step = next.clamp(0, max_step as isize) as usize;
    }

    /// Jump directly to a step, clamped to the last valid index.
    pub fn jump_to(&mut self, index: usize) {
        self.active_step = index.min(self.step_count() - 1);
    }

    // ── State accessors ──────────────────────────────────────────────

    pub fn active_process(&self) -> ProcessId {
        self.active_process
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    pub fn step_count(&self) -> usize {
        self.current_process().step_count()
    }

    pub fn current_process(&self) -> &Process {
        self.library.process(self.active_process)
    }

    pub fn current_step(&self) -> &Step {
        // In bounds by the navigator invariant.
        &self.current_process().steps[self.active_step]
    }

    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    pub fn diagrams(&self) -> &DiagramSet {
        &self.diagrams
    }

    pub fn at_first_step(&self) -> bool {
        self.active_step == 0
    }

    pub fn at_last_step(&self) -> bool {
        self.active_step == self.step_count() - 1
    }

    // ── Derived views ────────────────────────────────────────────────

    /// Completion percentage of the active step, 1-based.
    ///
    /// Rounding is pinned to half-away-from-zero (`f64::round`): with 8
    /// steps, step 0 gives 12.5 → 13.
    pub fn progress_percent(&self) -> u8 {
        let count = self.step_count() as f64;
        (((self.active_step as f64 + 1.0) / count) * 100.0).round() as u8
    }

    /// Fraction of the diagram path behind the active step, in `[0, 100]`.
    /// Zero for a single-step process (no path to stroke).
    pub fn line_progress(&self) -> f64 {
        let count = self.step_count();
        if count > 1 {
            (self.active_step as f64 / (count - 1) as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Diagram coordinate of the active step, degrading through the layout
    /// fallbacks when the point table is short.
    pub fn tracker_point(&self) -> DiagramPoint {
        self.diagrams
            .layout(self.active_process)
            .tracker_point(self.active_step)
    }

    /// Classify a step index relative to the active step.
    pub fn marker(&self, index: usize) -> StepMarker {
        use std::cmp::Ordering;
        match index.cmp(&self.active_step) {
            Ordering::Less => StepMarker::Done,
            Ordering::Equal => StepMarker::Active,
            Ordering::Greater => StepMarker::Upcoming,
        }
    }
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{IconName, Step};

    fn nav() -> StepNavigator {
        StepNavigator::with_defaults()
    }

    /// Navigator whose active process has a single step.
    fn single_step_nav() -> StepNavigator {
        let mut library = ContentLibrary::default();
        library.engineering.steps =
            vec![Step::new("Only", "The only step.", IconName::Target)];
        StepNavigator::new(library, DiagramSet::default()).unwrap()
    }

    #[test]
    fn starts_at_engineering_step_zero() {
        let nav = nav();
        assert_eq!(nav.active_process(), ProcessId::Engineering);
        assert_eq!(nav.active_step(), 0);
    }

    #[test]
    fn select_process_resets_step() {
        let mut nav = nav();
        nav.jump_to(5);
        nav.select_process(ProcessId::Scientific);
        assert_eq!(nav.active_process(), ProcessId::Scientific);
        assert_eq!(nav.active_step(), 0);
    }

    #[test]
    fn move_back_at_zero_is_noop() {
        let mut nav = nav();
        nav.move_step(StepDirection::Back);
        assert_eq!(nav.active_step(), 0);
    }

    #[test]
    fn move_forward_at_last_is_noop() {
        let mut nav = nav();
        nav.jump_to(usize::MAX);
        assert_eq!(nav.active_step(), 7);
        nav.move_step(StepDirection::Forward);
        assert_eq!(nav.active_step(), 7);
    }

    #[test]
    fn interior_round_trip_restores_index() {
        let mut nav = nav();
        for start in 1..7 {
            nav.jump_to(start);
            nav.move_step(StepDirection::Forward);
            nav.move_step(StepDirection::Back);
            assert_eq!(nav.active_step(), start);
        }
    }

    #[test]
    fn progress_pins_half_up_rounding() {
        let nav = nav();
        // 1/8 = 12.5% rounds away from zero.
        assert_eq!(nav.progress_percent(), 13);
    }

    #[test]
    fn last_step_is_full_progress() {
        let mut nav = nav();
        nav.jump_to(7);
        assert_eq!(nav.progress_percent(), 100);
        assert_eq!(nav.line_progress(), 100.0);
    }

    #[test]
    fn switch_mid_walk_lands_on_scientific_step_zero() {
        let mut nav = nav();
        nav.jump_to(3);
        nav.select_process(ProcessId::Scientific);
        assert_eq!(nav.active_process(), ProcessId::Scientific);
        assert_eq!(nav.active_step(), 0);
        assert_eq!(nav.progress_percent(), 13);
    }

    #[test]
    fn progress_is_monotone_under_forward() {
        let mut nav = nav();
        let mut last = nav.progress_percent();
        for _ in 0..nav.step_count() {
            nav.move_step(StepDirection::Forward);
            let now = nav.progress_percent();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn single_step_process_has_zero_line_progress() {
        let nav = single_step_nav();
        assert_eq!(nav.step_count(), 1);
        assert_eq!(nav.line_progress(), 0.0);
        assert_eq!(nav.progress_percent(), 100);
        assert!(nav.at_first_step() && nav.at_last_step());
    }

    #[test]
    fn single_step_moves_are_noops() {
        let mut nav = single_step_nav();
        nav.move_step(StepDirection::Back);
        nav.move_step(StepDirection::Forward);
        assert_eq!(nav.active_step(), 0);
    }

    #[test]
    fn markers_partition_the_range() {
        let mut nav = nav();
        nav.jump_to(4);
        for i in 0..nav.step_count() {
            let expected = if i < 4 {
                StepMarker::Done
            } else if i == 4 {
                StepMarker::Active
            } else {
                StepMarker::Upcoming
            };
            assert_eq!(nav.marker(i), expected);
        }
    }

    #[test]
    fn tracker_point_tracks_the_active_step() {
        let mut nav = nav();
        assert_eq!(nav.tracker_point(), DiagramPoint::new(14.0, 36.0));
        nav.jump_to(4);
        assert_eq!(nav.tracker_point(), DiagramPoint::new(84.0, 30.0));
        nav.select_process(ProcessId::Scientific);
        assert_eq!(nav.tracker_point(), DiagramPoint::new(21.0, 22.0));
    }

    #[test]
    fn tracker_degrades_when_layout_is_short() {
        let mut diagrams = DiagramSet::default();
        diagrams.engineering.points.truncate(2);
        let mut nav = StepNavigator::new(ContentLibrary::default(), diagrams).unwrap();
        nav.jump_to(6);
        assert_eq!(nav.tracker_point(), DiagramPoint::new(14.0, 36.0));
    }

    #[test]
    fn new_rejects_empty_process() {
        let mut library = ContentLibrary::default();
        library.engineering.steps.clear();
        assert!(StepNavigator::new(library, DiagramSet::default()).is_err());
    }

    #[test]
    fn current_step_follows_navigation() {
        let mut nav = nav();
        assert_eq!(nav.current_step().title, "Define the Problem");
        nav.move_step(StepDirection::Forward);
        assert_eq!(nav.current_step().title, "Background Research");
        nav.select_process(ProcessId::Scientific);
        assert_eq!(nav.current_step().title, "Observe");
    }
}
