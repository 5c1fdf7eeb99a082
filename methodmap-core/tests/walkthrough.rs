//! End-to-end walkthrough of both processes with pinned progress values.

use methodmap_core::{ProcessId, StepDirection, StepNavigator};

#[test]
fn full_engineering_walk_pins_progress_values() {
    let mut nav = StepNavigator::with_defaults();
    let expected = [13, 25, 38, 50, 63, 75, 88, 100];

    for (i, pct) in expected.iter().enumerate() {
        assert_eq!(nav.active_step(), i);
        assert_eq!(nav.progress_percent(), *pct);
        nav.move_step(StepDirection::Forward);
    }
    // Past the end: clamped.
    assert_eq!(nav.active_step(), 7);
    assert_eq!(nav.progress_percent(), 100);
}

#[test]
fn walking_back_returns_to_the_start() {
    let mut nav = StepNavigator::with_defaults();
    for _ in 0..10 {
        nav.move_step(StepDirection::Forward);
    }
    for _ in 0..10 {
        nav.move_step(StepDirection::Back);
    }
    assert_eq!(nav.active_step(), 0);
    assert_eq!(nav.progress_percent(), 13);
}

#[test]
fn switching_processes_walks_the_other_step_list() {
    let mut nav = StepNavigator::with_defaults();
    assert_eq!(nav.current_step().title, "Define the Problem");

    nav.select_process(ProcessId::Scientific);
    let titles: Vec<String> = (0..nav.step_count())
        .map(|_| {
            let t = nav.current_step().title.clone();
            nav.move_step(StepDirection::Forward);
            t
        })
        .collect();

    assert_eq!(
        titles,
        [
            "Observe",
            "Ask a Question",
            "Research",
            "Create a Hypothesis",
            "Run an Experiment",
            "Test the Hypothesis",
            "Draw a Conclusion",
            "Report Results",
        ]
    );
}

#[test]
fn line_progress_spans_the_path() {
    let mut nav = StepNavigator::with_defaults();
    assert_eq!(nav.line_progress(), 0.0);
    nav.jump_to(7);
    assert_eq!(nav.line_progress(), 100.0);
    nav.jump_to(3);
    let expected = 3.0 / 7.0 * 100.0;
    assert!((nav.line_progress() - expected).abs() < 1e-9);
}
