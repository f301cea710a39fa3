//! Property-based invariant tests for the number stepper.
//!
//! Verifies the clamping and notification contract:
//!
//! 1. After any operation sequence, `min <= value <= max`
//! 2. Increment then decrement restores the value away from bounds
//! 3. NaN and unparseable commits always land on `min`
//! 4. The notification count equals the number of commits
//! 5. Step is always finite and strictly positive

use proptest::prelude::*;
use rinkplan_widgets::NumberStepper;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone)]
enum Op {
    Increment,
    Decrement,
    Set(f64),
    Commit(String),
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Increment),
        Just(Op::Decrement),
        any::<f64>().prop_map(Op::Set),
        Just(Op::Set(f64::NAN)),
        "[a-z0-9.]{0,8}".prop_map(Op::Commit),
    ]
}

fn apply(stepper: &mut NumberStepper, op: &Op) {
    match op {
        Op::Increment => stepper.increment(),
        Op::Decrement => stepper.decrement(),
        Op::Set(raw) => stepper.set_value(*raw),
        Op::Commit(text) => stepper.commit_input(text),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Bounds hold under arbitrary operation sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bounds_hold_under_any_op_sequence(
        min in -1.0e4f64..1.0e4,
        span in 0.0f64..1.0e4,
        step in 0.001f64..100.0,
        ops in prop::collection::vec(any_op(), 0..40),
    ) {
        let max = min + span;
        let mut stepper = NumberStepper::new()
            .with_min(min)
            .with_max(max)
            .with_step(step);

        for op in &ops {
            apply(&mut stepper, op);
            prop_assert!(
                stepper.value() >= min && stepper.value() <= max,
                "value {} escaped [{min}, {max}] after {:?}",
                stepper.value(),
                op
            );
            prop_assert!(!stepper.value().is_nan());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Increment/decrement invert away from bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn increment_then_decrement_restores_value(
        start_quarters in 400u32..3600,
        step_quarters in 2u32..40,
    ) {
        // Dyadic values (multiples of 0.25) add and subtract exactly, so
        // the round trip is bit-identical. Bounds sit far away so no
        // clamp is touched.
        let start = f64::from(start_quarters) / 4.0;
        let step = f64::from(step_quarters) / 4.0;
        let mut stepper = NumberStepper::new()
            .with_min(0.0)
            .with_max(1000.0)
            .with_step(step)
            .with_value(start);

        stepper.increment();
        stepper.decrement();
        prop_assert_eq!(stepper.value(), start);

        stepper.decrement();
        stepper.increment();
        prop_assert_eq!(stepper.value(), start);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. NaN-producing input lands on min
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unparseable_commit_lands_on_min(
        min in -100.0f64..100.0,
        text in "[a-zA-Z ]{1,12}",
    ) {
        let mut stepper = NumberStepper::new()
            .with_min(min)
            .with_max(min + 50.0)
            .with_value(min + 25.0);

        stepper.commit_input(&text);
        prop_assert_eq!(stepper.value(), min);

        stepper.set_value(min + 10.0);
        stepper.set_value(f64::NAN);
        prop_assert_eq!(stepper.value(), min);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Every commit notifies
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn notification_count_equals_commit_count(
        ops in prop::collection::vec(any_op(), 0..40),
    ) {
        let mut stepper = NumberStepper::new().with_max(100.0);
        let seen = Rc::new(Cell::new(0u64));
        let seen_clone = Rc::clone(&seen);
        let _sub = stepper.on_change(move |_| seen_clone.set(seen_clone.get() + 1));

        for op in &ops {
            apply(&mut stepper, op);
        }

        prop_assert_eq!(seen.get(), ops.len() as u64);
        prop_assert_eq!(stepper.commit_count(), ops.len() as u64);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Step sanitization
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn step_is_always_positive_and_finite(raw in any::<f64>()) {
        let stepper = NumberStepper::new().with_step(raw);
        prop_assert!(stepper.step().is_finite());
        prop_assert!(stepper.step() > 0.0);
    }
}
