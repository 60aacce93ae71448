//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that round resolution maintains its
//! invariants across random stakes, thresholds, and crash multipliers.

use proptest::prelude::*;

use crash_rgs_client::domain::outcome::{resolve, win_amount};
use crash_rgs_client::domain::round::{BetMode, BetRequest, RoundEvent};

// ── Event log structure ─────────────────────────────────────

proptest! {
    /// The event log always opens with the bet and crashes second.
    #[test]
    fn bet_first_crash_second(
        amount in 0.01f64..10_000.0,
        crash in 1.0f64..100.0,
    ) {
        let request = BetRequest::new(amount, BetMode::Base);
        let outcome = resolve(&request, crash).unwrap();
        prop_assert_eq!(outcome.events[0].kind(), "bet");
        prop_assert_eq!(outcome.events[1].kind(), "crash");
    }

    /// Without an auto cash-out the round never pays and logs exactly
    /// two events.
    #[test]
    fn no_auto_cashout_never_pays(
        amount in 0.01f64..10_000.0,
        crash in 1.0f64..100.0,
    ) {
        let request = BetRequest::new(amount, BetMode::Real);
        let outcome = resolve(&request, crash).unwrap();
        prop_assert_eq!(outcome.win, 0.0);
        prop_assert_eq!(outcome.events.len(), 2);
    }

    /// A cashout event appears exactly when the round produced a win.
    #[test]
    fn cashout_event_iff_positive_win(
        amount in 0.01f64..10_000.0,
        crash in 1.0f64..100.0,
        threshold in 1.0f64..100.0,
    ) {
        let request = BetRequest::with_auto_cashout(amount, BetMode::Real, threshold);
        let outcome = resolve(&request, crash).unwrap();
        let has_cashout = outcome.events.iter().any(|e| e.kind() == "cashout");
        prop_assert_eq!(has_cashout, outcome.win > 0.0);
    }

    /// A threshold above the crash multiplier can never pay.
    #[test]
    fn threshold_above_crash_never_pays(
        amount in 0.01f64..10_000.0,
        crash in 1.0f64..99.0,
        excess in 0.001f64..10.0,
    ) {
        let threshold = crash + excess;
        let request = BetRequest::with_auto_cashout(amount, BetMode::Real, threshold);
        let outcome = resolve(&request, crash).unwrap();
        prop_assert_eq!(outcome.win, 0.0);
        prop_assert_eq!(outcome.events.len(), 2);
    }
}

// ── Win computation ─────────────────────────────────────────

proptest! {
    /// The win never exceeds stake times threshold beyond cent rounding.
    #[test]
    fn win_bounded_by_stake_times_threshold(
        amount in 0.01f64..10_000.0,
        crash in 1.0f64..100.0,
        threshold in 1.0f64..100.0,
    ) {
        let request = BetRequest::with_auto_cashout(amount, BetMode::Real, threshold);
        let outcome = resolve(&request, crash).unwrap();
        prop_assert!(
            outcome.win <= amount * threshold + 0.005 + 1e-9,
            "win {} exceeds stake {} x threshold {}",
            outcome.win,
            amount,
            threshold
        );
    }

    /// Wins settle at cent precision.
    #[test]
    fn win_has_cent_precision(
        amount in 0.01f64..10_000.0,
        threshold in 1.0f64..100.0,
    ) {
        let win = win_amount(amount, threshold);
        let cents = win * 100.0;
        prop_assert!(
            (cents - cents.round()).abs() < 1e-6,
            "win {win} is not cent-aligned"
        );
    }

    /// The crash event always carries the multiplier the win was
    /// computed against.
    #[test]
    fn crash_event_multiplier_consistent(
        amount in 0.01f64..10_000.0,
        crash in 1.0f64..100.0,
        threshold in 1.0f64..100.0,
    ) {
        let request = BetRequest::with_auto_cashout(amount, BetMode::Real, threshold);
        let outcome = resolve(&request, crash).unwrap();
        prop_assert_eq!(
            &outcome.events[1],
            &RoundEvent::Crash { multiplier: outcome.crash_multiplier }
        );
        prop_assert_eq!(outcome.crash_multiplier, crash);
    }
}
