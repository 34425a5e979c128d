//! Property-based tests for the built-in rules.
//!
//! Each property restates a rule's condition directly in terms of the raw
//! readings and checks the predicate agrees for arbitrary inputs.

use homerules_domain::registry::RuleSet;
use homerules_domain::rule::{Rule, SET_POINT_F};
use homerules_domain::state::{HourOfDay, Month, State};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_state()(
        temperature in 40i32..100,
        time in 0i64..=23,
        month in 0i64..=12,
        occupied in any::<bool>(),
    ) -> State {
        State::new(
            temperature,
            HourOfDay::try_from(time).unwrap(),
            Month::try_from(month).unwrap(),
            occupied,
        )
    }
}

proptest! {
    #[test]
    fn blinds_follow_daytime_and_temperature(current in arbitrary_state(), previous in arbitrary_state()) {
        let expected = matches!(current.time(), 10..=17) && current.temperature() < SET_POINT_F;
        prop_assert_eq!(Rule::Blinds.is_active(&current, &previous), expected);
    }

    #[test]
    fn heater_needs_two_cold_readings_in_cold_months(current in arbitrary_state(), previous in arbitrary_state()) {
        let expected = current.temperature() < SET_POINT_F
            && previous.temperature() < SET_POINT_F
            && matches!(current.month(), 0..=4 | 10..=12)
            && current.is_occupied();
        prop_assert_eq!(Rule::Heater.is_active(&current, &previous), expected);
    }

    #[test]
    fn ac_needs_two_warm_readings_in_warm_months(current in arbitrary_state(), previous in arbitrary_state()) {
        let expected = current.temperature() > SET_POINT_F
            && previous.temperature() > SET_POINT_F
            && matches!(current.month(), 5..=9)
            && current.is_occupied();
        prop_assert_eq!(Rule::Ac.is_active(&current, &previous), expected);
    }

    #[test]
    fn lights_stay_off_when_nobody_was_home(current in arbitrary_state(), previous in arbitrary_state()) {
        prop_assume!(!current.is_occupied() && !previous.is_occupied());
        prop_assert!(!Rule::Lights.is_active(&current, &previous));
    }

    #[test]
    fn lights_follow_evening_when_someone_was_home(current in arbitrary_state(), previous in arbitrary_state()) {
        prop_assume!(current.is_occupied() || previous.is_occupied());
        let expected = matches!(current.time(), 19..=21);
        prop_assert_eq!(Rule::Lights.is_active(&current, &previous), expected);
    }

    #[test]
    fn heater_and_ac_never_run_together(current in arbitrary_state(), previous in arbitrary_state()) {
        let heater = Rule::Heater.is_active(&current, &previous);
        let ac = Rule::Ac.is_active(&current, &previous);
        prop_assert!(!(heater && ac));
    }

    #[test]
    fn set_point_never_triggers_climate(state in arbitrary_state()) {
        let at_set_point = State::new(
            SET_POINT_F,
            HourOfDay::try_from(i64::from(state.time())).unwrap(),
            Month::try_from(i64::from(state.month())).unwrap(),
            state.is_occupied(),
        );
        prop_assert!(!Rule::Heater.is_active(&at_set_point, &at_set_point));
        prop_assert!(!Rule::Ac.is_active(&at_set_point, &at_set_point));
        prop_assert!(!Rule::Blinds.is_active(&at_set_point, &at_set_point));
    }

    #[test]
    fn evaluation_is_deterministic_and_leaves_inputs_untouched(current in arbitrary_state(), previous in arbitrary_state()) {
        let (before_current, before_previous) = (current, previous);
        let rules = RuleSet::builtin();
        let first = rules.evaluate(&current, &previous);
        let second = rules.evaluate(&current, &previous);
        prop_assert_eq!(first, second);
        prop_assert_eq!(current, before_current);
        prop_assert_eq!(previous, before_previous);
    }

    #[test]
    fn out_of_range_hours_are_rejected(time in prop_oneof![i64::MIN..0, 24i64..i64::MAX]) {
        prop_assert!(HourOfDay::try_from(time).is_err());
    }

    #[test]
    fn out_of_range_months_are_rejected(month in prop_oneof![i64::MIN..0, 13i64..i64::MAX]) {
        prop_assert!(Month::try_from(month).is_err());
    }
}
