//! Property-based tests for the iron state machine.
//!
//! These tests use proptest to drive irons through random operation
//! sequences and check the invariants that must always hold.

use ironsim::policy::USES_BEFORE_CLEANING;
use ironsim::program::{MAX_TEMPERATURE, MIN_STEAM_TEMPERATURE, MIN_TEMPERATURE};
use ironsim::{Iron, IronModel, Notice};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug)]
enum Op {
    TurnOn,
    TurnOff,
    UseSteam,
    Descale,
    AtTemperature(i32),
    ByProgram(&'static str),
}

fn apply(iron: &mut Iron, op: &Op, rng: &mut StdRng) {
    match op {
        Op::TurnOn => {
            iron.turn_on();
        }
        Op::TurnOff => {
            iron.turn_off();
        }
        Op::UseSteam => {
            iron.use_steam();
        }
        Op::Descale => {
            iron.descale();
        }
        Op::AtTemperature(t) => {
            iron.iron_at_temperature(*t);
        }
        Op::ByProgram(name) => {
            iron.iron_by_program_with(name, rng);
        }
    }
}

prop_compose! {
    fn arbitrary_model()(variant in 0..3u8) -> IronModel {
        match variant {
            0 => IronModel::Regular,
            1 => IronModel::Premium,
            _ => IronModel::Linen,
        }
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::TurnOn),
        Just(Op::TurnOff),
        Just(Op::UseSteam),
        Just(Op::Descale),
        (60..260i32).prop_map(Op::AtTemperature),
        prop::sample::select(vec!["Linen", "Cotton", "Silk", "Synthetics", "Wool"])
            .prop_map(Op::ByProgram),
    ]
}

fn driven_iron(model: IronModel, ops: &[Op], seed: u64) -> (Iron, StdRng) {
    let mut iron = Iron::model(model);
    let mut rng = StdRng::seed_from_u64(seed);
    for op in ops {
        apply(&mut iron, op, &mut rng);
    }
    (iron, rng)
}

proptest! {
    #[test]
    fn descale_resets_counters_and_keeps_flags(
        model in arbitrary_model(),
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        seed in any::<u64>(),
    ) {
        let (mut iron, _) = driven_iron(model, &ops, seed);
        let powered = iron.is_powered();
        let steaming = iron.is_steaming();
        let needs_water = iron.needs_water();

        iron.descale();

        prop_assert_eq!(iron.ironing_count(), 0);
        prop_assert_eq!(iron.steam_count(), 0);
        prop_assert_eq!(iron.is_powered(), powered);
        prop_assert_eq!(iron.is_steaming(), steaming);
        prop_assert_eq!(iron.needs_water(), needs_water);
    }

    #[test]
    fn unsupported_temperature_changes_nothing(
        model in arbitrary_model(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        seed in any::<u64>(),
        temperature in prop_oneof![-50..MIN_TEMPERATURE, (MAX_TEMPERATURE + 1)..400],
    ) {
        let (mut iron, _) = driven_iron(model, &ops, seed);
        let before = iron.status();

        let report = iron.iron_at_temperature(temperature);

        prop_assert_eq!(
            report.notices(),
            &[Notice::TemperatureOutOfRange { requested: temperature }]
        );
        prop_assert_eq!(iron.status(), before);
    }

    #[test]
    fn ironing_count_never_passes_cleaning_threshold(
        model in arbitrary_model(),
        ops in prop::collection::vec(arbitrary_op(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut iron = Iron::model(model);
        let mut rng = StdRng::seed_from_u64(seed);
        for op in &ops {
            apply(&mut iron, op, &mut rng);
            prop_assert!(iron.ironing_count() <= USES_BEFORE_CLEANING);
        }
    }

    #[test]
    fn fourth_ironing_is_blocked_or_auto_descaled(
        model in arbitrary_model(),
        temperature in 150..=199i32,
    ) {
        let mut iron = Iron::model(model);
        for _ in 0..USES_BEFORE_CLEANING {
            prop_assert!(iron.iron_at_temperature(temperature).ironed());
        }

        let report = iron.iron_at_temperature(temperature);

        prop_assert!(!report.ironed());
        let needs_cleaning = report.contains(|n| matches!(n, Notice::NeedsCleaning { .. }));
        prop_assert!(needs_cleaning);
        let descaled = report.contains(|n| matches!(n, Notice::Descaled { .. }));
        prop_assert_eq!(descaled, model == IronModel::Premium);
    }

    #[test]
    fn linen_program_never_runs_on_cotton_irons(
        seed in any::<u64>(),
        premium in any::<bool>(),
    ) {
        let mut iron = if premium { Iron::premium() } else { Iron::regular() };
        let mut rng = StdRng::seed_from_u64(seed);

        let report = iron.iron_by_program_with("Linen", &mut rng);

        prop_assert!(!report.ironed());
        let not_supported = report
            .contains(|n| matches!(n, Notice::ProgramNotSupported { program, .. } if program == "Linen"));
        prop_assert!(not_supported);
    }

    #[test]
    fn steam_below_threshold_never_irons(
        model in arbitrary_model(),
        temperature in MIN_TEMPERATURE..MIN_STEAM_TEMPERATURE,
    ) {
        let mut iron = Iron::model(model);
        iron.use_steam();
        let steam_count = iron.steam_count();

        let report = iron.iron_at_temperature(temperature);

        prop_assert!(!report.ironed());
        prop_assert!(!iron.is_steaming());
        prop_assert_eq!(iron.steam_count(), steam_count);
    }

    #[test]
    fn completed_ironing_always_clears_steam(
        model in arbitrary_model(),
        ops in prop::collection::vec(arbitrary_op(), 1..30),
        seed in any::<u64>(),
    ) {
        let mut iron = Iron::model(model);
        let mut rng = StdRng::seed_from_u64(seed);
        for op in &ops {
            let ironed = match op {
                Op::AtTemperature(t) => iron.iron_at_temperature(*t).ironed(),
                Op::ByProgram(name) => iron.iron_by_program_with(name, &mut rng).ironed(),
                other => {
                    apply(&mut iron, other, &mut rng);
                    false
                }
            };
            if ironed {
                prop_assert!(!iron.is_steaming());
            }
        }
    }

    #[test]
    fn only_premium_ever_needs_water(
        model in arbitrary_model(),
        ops in prop::collection::vec(arbitrary_op(), 0..40),
        seed in any::<u64>(),
    ) {
        let (iron, _) = driven_iron(model, &ops, seed);
        if model != IronModel::Premium {
            prop_assert!(!iron.needs_water());
        }
    }

    #[test]
    fn history_path_matches_current_phase(
        model in arbitrary_model(),
        ops in prop::collection::vec(arbitrary_op(), 1..30),
        seed in any::<u64>(),
    ) {
        let (iron, _) = driven_iron(model, &ops, seed);
        let path = iron.history().get_path();
        if let Some(last) = path.last() {
            prop_assert_eq!(**last, iron.phase());
        }
        for transition in iron.history().transitions() {
            prop_assert_ne!(transition.from, transition.to);
        }
    }
}
