//! Property tests for navigator invariants.
//!
//! Uses proptest to verify:
//! 1. The index invariant — `active_step < step_count` after any call
//!    sequence
//! 2. Marker partition — exactly one Active, everything before it Done,
//!    everything after Upcoming
//! 3. Clamp idempotence at the boundaries

use proptest::prelude::*;
use methodmap_core::{ProcessId, StepDirection, StepMarker, StepNavigator};

/// One navigator call, as generated input.
#[derive(Debug, Clone)]
enum Call {
    Select(ProcessId),
    Move(StepDirection),
    Jump(usize),
}

fn arb_call() -> impl Strategy<Value = Call> {
    prop_oneof![
        prop_oneof![
            Just(Call::Select(ProcessId::Engineering)),
            Just(Call::Select(ProcessId::Scientific)),
        ],
        prop_oneof![
            Just(Call::Move(StepDirection::Back)),
            Just(Call::Move(StepDirection::Forward)),
        ],
        (0usize..32).prop_map(Call::Jump),
    ]
}

fn apply(nav: &mut StepNavigator, call: &Call) {
    match call {
        Call::Select(id) => nav.select_process(*id),
        Call::Move(dir) => nav.move_step(*dir),
        Call::Jump(index) => nav.jump_to(*index),
    }
}

proptest! {
    /// The index invariant holds after any sequence of calls.
    #[test]
    fn active_step_always_in_bounds(calls in prop::collection::vec(arb_call(), 0..200)) {
        let mut nav = StepNavigator::with_defaults();
        for call in &calls {
            apply(&mut nav, call);
            prop_assert!(nav.active_step() < nav.step_count());
        }
    }

    /// Progress stays in its documented ranges after any sequence of calls.
    #[test]
    fn derived_views_stay_in_range(calls in prop::collection::vec(arb_call(), 0..200)) {
        let mut nav = StepNavigator::with_defaults();
        for call in &calls {
            apply(&mut nav, call);
            let pct = nav.progress_percent();
            prop_assert!(pct >= 1 && pct <= 100);
            let line = nav.line_progress();
            prop_assert!((0.0..=100.0).contains(&line));
        }
    }

    /// Selecting a process lands on step 0 regardless of prior state.
    #[test]
    fn select_resets_to_zero(
        calls in prop::collection::vec(arb_call(), 0..50),
        target in prop_oneof![Just(ProcessId::Engineering), Just(ProcessId::Scientific)],
    ) {
        let mut nav = StepNavigator::with_defaults();
        for call in &calls {
            apply(&mut nav, call);
        }
        nav.select_process(target);
        prop_assert_eq!(nav.active_process(), target);
        prop_assert_eq!(nav.active_step(), 0);
    }

    /// Exactly one index is Active; Done/Upcoming split around it.
    #[test]
    fn markers_partition(calls in prop::collection::vec(arb_call(), 0..50)) {
        let mut nav = StepNavigator::with_defaults();
        for call in &calls {
            apply(&mut nav, call);
        }
        let active = nav.active_step();
        let mut active_count = 0;
        for i in 0..nav.step_count() {
            match nav.marker(i) {
                StepMarker::Active => {
                    active_count += 1;
                    prop_assert_eq!(i, active);
                }
                StepMarker::Done => prop_assert!(i < active),
                StepMarker::Upcoming => prop_assert!(i > active),
            }
        }
        prop_assert_eq!(active_count, 1);
    }

    /// Forward-then-back from any interior index is the identity.
    #[test]
    fn interior_round_trip(start in 1usize..7) {
        let mut nav = StepNavigator::with_defaults();
        nav.jump_to(start);
        nav.move_step(StepDirection::Forward);
        nav.move_step(StepDirection::Back);
        prop_assert_eq!(nav.active_step(), start);
    }
}
