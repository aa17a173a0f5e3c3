//! Property-based tests for the phase table, dwell validation and time
//! formatting.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use crossway::config::{DwellConfig, DwellViolation, MAX_DWELL_MS};
use crossway::core::{Colour, Phase, State};
use crossway::presenter::format_time;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_phase()(variant in 0..4usize) -> Phase {
        Phase::ALL[variant]
    }
}

proptest! {
    #[test]
    fn exactly_one_axis_is_open(phase in arbitrary_phase()) {
        let colours = phase.colours();
        let open = [colours.axis_a, colours.axis_b]
            .iter()
            .filter(|c| c.is_open())
            .count();
        prop_assert_eq!(open, 1);
        prop_assert!(colours.axis_a == Colour::Stop || colours.axis_b == Colour::Stop);
    }

    #[test]
    fn n_steps_land_on_cycle_position(start in 0..4usize, steps in 0..64usize) {
        let mut phase = Phase::ALL[start];
        for _ in 0..steps {
            phase = phase.next();
        }
        prop_assert_eq!(phase, Phase::ALL[(start + steps) % 4]);
    }

    #[test]
    fn dwell_kind_alternates(phase in arbitrary_phase()) {
        prop_assert_ne!(phase.dwell_kind(), phase.next().dwell_kind());
    }

    #[test]
    fn open_axis_changes_only_through_caution(phase in arbitrary_phase()) {
        // Go never jumps straight to Stop on the same axis.
        let now = phase.colours();
        let then = phase.next().colours();
        prop_assert!(!(now.axis_a == Colour::Go && then.axis_a == Colour::Stop));
        prop_assert!(!(now.axis_b == Colour::Go && then.axis_b == Colour::Stop));
    }

    #[test]
    fn positive_dwells_are_accepted(
        standard in 0.001f64..(MAX_DWELL_MS as f64),
        caution in 0.001f64..(MAX_DWELL_MS as f64),
    ) {
        let config = DwellConfig::new(Some(standard), Some(caution));
        prop_assert!(config.is_ok());
    }

    #[test]
    fn non_positive_dwells_are_rejected(value in -1.0e9f64..=0.0) {
        let err = DwellConfig::new(Some(value), None).unwrap_err();
        let is_not_positive = matches!(
            err.violations(),
            [DwellViolation::NotPositive { .. }]
        );
        prop_assert!(is_not_positive);
    }

    #[test]
    fn alphabetic_text_is_rejected(text in "[a-zA-Z]{1,12}") {
        // "inf", "nan" and friends parse as floats but are not finite
        let result = DwellConfig::parse(Some(&text), None);
        prop_assert!(result.is_err());
    }

    #[test]
    fn format_time_round_trips_whole_seconds(secs in 0u64..360_000, fraction in 0.0f64..0.999) {
        let text = format_time(secs as f64 + fraction);
        let parsed = text
            .split(':')
            .map(|part| part.parse::<u64>().unwrap())
            .fold(0, |acc, part| acc * 60 + part);
        prop_assert_eq!(parsed, secs);
    }
}
