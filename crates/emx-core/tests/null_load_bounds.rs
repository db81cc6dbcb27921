//! Property test: the NULL-load never leaves [0, 1]
//!
//! Random operator sequences over random initial triples; the clamp in
//! the feedback rule is a closed invariant, so the bound must hold after
//! every single step.

use emx_core::{EmxKernel, Polarity, StepParams, Triple};
use proptest::prelude::*;

fn polarity_strategy() -> impl Strategy<Value = Polarity> {
    prop_oneof![
        Just(Polarity::Minus),
        Just(Polarity::Zero),
        Just(Polarity::Plus),
    ]
}

fn triple_strategy() -> impl Strategy<Value = Triple> {
    (polarity_strategy(), polarity_strategy(), polarity_strategy())
        .prop_map(|(x, y, z)| Triple::new(x, y, z))
}

/// An operator draw: a steppable wire name (weighted) with an occasional
/// unknown name mixed in, plus an arbitrary exchange axis.
fn op_strategy() -> impl Strategy<Value = (String, usize)> {
    let name = prop_oneof![
        9 => prop::sample::select(vec!["O1", "O2", "O3", "O6", "O7", "O10"]),
        1 => prop::sample::select(vec!["O4", "O5", "O8", "O9", "O99"]),
    ];
    (name.prop_map(str::to_string), 0usize..10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn null_load_bounded_after_every_step(
        initial in triple_strategy(),
        ops in prop::collection::vec(op_strategy(), 200),
    ) {
        let mut kernel = EmxKernel::new(Some(initial));

        for (name, axis) in ops {
            let params = StepParams { axis, previous: None };
            let _ = kernel.step_named_with(&name, params);

            let null_load = kernel.null_load();
            prop_assert!((0.0..=1.0).contains(&null_load),
                "null_load {} out of bounds after {}", null_load, name);
        }
    }

    #[test]
    fn tick_advances_only_on_known_operators(
        ops in prop::collection::vec(op_strategy(), 50),
    ) {
        let mut kernel = EmxKernel::new(None);
        let mut expected_tick = 0u64;

        for (name, axis) in ops {
            let params = StepParams { axis, previous: None };
            let outcome = kernel.step_named_with(&name, params);
            if !outcome.reason.starts_with("Unknown operator") {
                expected_tick += 1;
            }
            prop_assert_eq!(kernel.state().properties().tick, expected_tick);
        }
    }
}
