//! Property-based tests for the app core: constructor behavior, monad laws,
//! and the failure-selection rules of the aggregates.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use rover_app::app::prelude::*;
use tokio_test::block_on;

fn halve(x: i32) -> BoxedApp<i32, String, ()> {
    if x % 2 == 0 {
        succeed(x / 2).boxed()
    } else {
        fail(format!("odd {x}")).boxed()
    }
}

fn add_ten(x: i32) -> BoxedApp<i32, String, ()> {
    succeed(x.wrapping_add(10)).boxed()
}

fn outcome_app(outcome: Result<i32, String>) -> BoxedApp<i32, String, ()> {
    from_result(outcome).boxed()
}

fn arb_outcome() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        3 => any::<i32>().prop_map(Ok),
        1 => "[a-z]{1,8}".prop_map(Err),
    ]
}

/// An app that counts its runs before settling with `outcome`.
fn counted(runs: &Arc<AtomicUsize>, outcome: Result<i32, String>) -> BoxedApp<i32, String, ()> {
    let runs = Arc::clone(runs);
    sync(move || runs.fetch_add(1, Ordering::SeqCst))
        .chain(move |_| from_result(outcome.clone()))
        .boxed()
}

proptest! {
    #[test]
    fn prop_succeed_yields_value(a in any::<i64>()) {
        prop_assert_eq!(block_on(succeed::<_, String, ()>(a).unsafe_run()), Ok(a));
    }

    #[test]
    fn prop_fail_yields_error(e in ".*") {
        prop_assert_eq!(block_on(fail::<i64, _, ()>(e.clone()).unsafe_run()), Err(e));
    }

    #[test]
    fn prop_left_identity(a in any::<i32>()) {
        let chained = block_on(succeed(a).chain(halve).unsafe_run());
        let direct = block_on(halve(a).unsafe_run());
        prop_assert_eq!(chained, direct);
    }

    #[test]
    fn prop_right_identity(outcome in arb_outcome()) {
        let app = outcome_app(outcome.clone()).chain(succeed::<_, String, ()>);
        prop_assert_eq!(block_on(app.unsafe_run()), outcome);
    }

    #[test]
    fn prop_associativity(outcome in arb_outcome()) {
        let left = outcome_app(outcome.clone()).chain(halve).chain(add_ten);
        let right = outcome_app(outcome).chain(|x| halve(x).chain(add_ten));
        prop_assert_eq!(block_on(left.unsafe_run()), block_on(right.unsafe_run()));
    }

    #[test]
    fn prop_chain_on_failure_keeps_error(e in "[a-z]{1,8}") {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let app = fail::<i32, _, ()>(e.clone()).chain(move |x| {
            counter.fetch_add(1, Ordering::SeqCst);
            succeed(x)
        });

        prop_assert_eq!(block_on(app.unsafe_run()), Err(e));
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn prop_map_composes(outcome in arb_outcome()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);

        let stepwise = outcome_app(outcome.clone()).map(f).map(g);
        let composed = outcome_app(outcome).map(move |x| g(f(x)));
        prop_assert_eq!(block_on(stepwise.unsafe_run()), block_on(composed.unsafe_run()));
    }

    #[test]
    fn prop_tap_preserves_value(outcome in arb_outcome(), other in any::<u8>()) {
        let app = outcome_app(outcome.clone()).tap(move |_| succeed(other));
        prop_assert_eq!(block_on(app.unsafe_run()), outcome);
    }

    #[test]
    fn prop_catch_all_only_sees_failures(outcome in arb_outcome()) {
        let app = outcome_app(outcome.clone())
            .catch_all(|e| succeed::<_, Infallible, ()>(-(e.len() as i32)));
        let expected = match outcome {
            Ok(x) => x,
            Err(e) => -(e.len() as i32),
        };
        prop_assert_eq!(block_on(app.unsafe_run()), Ok(expected));
    }

    #[test]
    fn prop_sequence_stops_at_first_failure(
        outcomes in prop::collection::vec(arb_outcome(), 0..12)
    ) {
        let runs = Arc::new(AtomicUsize::new(0));
        let apps = outcomes.iter().cloned().map(|o| counted(&runs, o)).collect();

        let result = block_on(sequence(apps).unsafe_run());
        let expected: Result<Vec<i32>, String> = outcomes.iter().cloned().collect();
        prop_assert_eq!(&result, &expected);

        let expected_runs = match outcomes.iter().position(Result::is_err) {
            Some(index) => index + 1,
            None => outcomes.len(),
        };
        prop_assert_eq!(runs.load(Ordering::SeqCst), expected_runs);
    }

    #[test]
    fn prop_sequence_par_runs_everything(
        outcomes in prop::collection::vec(arb_outcome(), 0..12)
    ) {
        let runs = Arc::new(AtomicUsize::new(0));
        let apps = outcomes.iter().cloned().map(|o| counted(&runs, o)).collect();

        let result = block_on(sequence_par(apps).unsafe_run());
        let expected: Result<Vec<i32>, String> = outcomes.iter().cloned().collect();
        prop_assert_eq!(&result, &expected);
        prop_assert_eq!(runs.load(Ordering::SeqCst), outcomes.len());
    }
}
