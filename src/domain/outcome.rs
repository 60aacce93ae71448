//! Deterministic round outcome resolution.
//!
//! Given a validated bet and a crash multiplier, computes the win amount and
//! assembles the ordered replay-safe event log. This is the payout side of a
//! resolved result only: the crash multiplier itself is opaque input owned by
//! the authoritative math engine behind [`crate::ports::outcome_source`].
//!
//! Exposes a Decimal-backed win computation internally and an f64 API at the
//! boundary, mirroring the stake amounts the RGS works in.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::round::{BetRequest, RoundError, RoundEvent, RoundOutcome};

/// Resolve a round outcome from a bet and the crash multiplier.
///
/// The win is `amount * auto_cashout` (rounded to cents) when an auto
/// cash-out threshold is set and does not exceed the crash multiplier,
/// otherwise zero. Event order is fixed: bet first, crash second, and a
/// cashout entry appended only when the round produced a nonzero win.
///
/// # Errors
/// Returns `RoundError` if the request fails validation or the multiplier
/// is non-finite or below 1.
pub fn resolve(request: &BetRequest, crash_multiplier: f64) -> Result<RoundOutcome, RoundError> {
    request.validate()?;
    if !crash_multiplier.is_finite() || crash_multiplier < 1.0 {
        return Err(RoundError::InvalidCrashMultiplier(crash_multiplier));
    }

    let win = match request.auto_cashout {
        Some(threshold) if threshold <= crash_multiplier => {
            win_amount(request.amount, threshold)
        }
        _ => 0.0,
    };

    let mut events = vec![
        RoundEvent::Bet {
            amount: request.amount,
            auto_cashout: request.auto_cashout,
        },
        RoundEvent::Crash {
            multiplier: crash_multiplier,
        },
    ];

    if win > 0.0 {
        // Validation guarantees auto_cashout is set whenever win is nonzero.
        if let Some(threshold) = request.auto_cashout {
            events.push(RoundEvent::Cashout {
                multiplier: threshold,
                win,
            });
        }
    }

    Ok(RoundOutcome {
        crash_multiplier,
        win,
        events,
    })
}

/// Compute the cash-out win for a stake and threshold, rounded to cents.
///
/// Internally uses `Decimal` so stake arithmetic stays exact; the settlement
/// engine rounds wins to two decimal places and this layer must agree with it.
pub fn win_amount(amount: f64, auto_cashout: f64) -> f64 {
    let stake = Decimal::from_f64(amount).unwrap_or(Decimal::ZERO);
    let threshold = Decimal::from_f64(auto_cashout).unwrap_or(Decimal::ZERO);
    (stake * threshold).round_dp(2).to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::round::BetMode;

    #[test]
    fn test_no_auto_cashout_yields_zero_win_and_two_events() {
        let request = BetRequest::new(10.0, BetMode::Base);
        let outcome = resolve(&request, 2.37).unwrap();
        assert_eq!(outcome.win, 0.0);
        assert_eq!(outcome.events.len(), 2);
        assert_eq!(outcome.events[0].kind(), "bet");
        assert_eq!(outcome.events[1].kind(), "crash");
    }

    #[test]
    fn test_auto_cashout_at_or_below_crash_wins() {
        let request = BetRequest::with_auto_cashout(10.0, BetMode::Real, 2.0);
        let outcome = resolve(&request, 2.37).unwrap();
        assert_eq!(outcome.win, 20.0);
        assert_eq!(outcome.events.len(), 3);
        assert_eq!(
            outcome.events[2],
            RoundEvent::Cashout {
                multiplier: 2.0,
                win: 20.0,
            }
        );
    }

    #[test]
    fn test_auto_cashout_above_crash_loses() {
        let request = BetRequest::with_auto_cashout(10.0, BetMode::Real, 3.0);
        let outcome = resolve(&request, 2.37).unwrap();
        assert_eq!(outcome.win, 0.0);
        assert_eq!(outcome.events.len(), 2);
    }

    #[test]
    fn test_auto_cashout_exactly_at_crash_wins() {
        let request = BetRequest::with_auto_cashout(10.0, BetMode::Real, 2.37);
        let outcome = resolve(&request, 2.37).unwrap();
        assert_eq!(outcome.win, 23.7);
        assert_eq!(outcome.events.len(), 3);
    }

    #[test]
    fn test_crash_event_multiplier_matches_resolution_input() {
        let request = BetRequest::with_auto_cashout(10.0, BetMode::Base, 1.5);
        let outcome = resolve(&request, 4.2).unwrap();
        assert_eq!(
            outcome.events[1],
            RoundEvent::Crash { multiplier: 4.2 }
        );
        assert_eq!(outcome.crash_multiplier, 4.2);
    }

    #[test]
    fn test_win_rounds_to_cents() {
        // 0.10 * 1.15 = 0.115, which settles to 0.12 under bankers rounding.
        assert_eq!(win_amount(0.10, 1.15), 0.12);
        assert_eq!(win_amount(3.33, 1.5), 5.0);
        assert_eq!(win_amount(10.0, 2.0), 20.0);
    }

    #[test]
    fn test_resolve_rejects_invalid_multiplier() {
        let request = BetRequest::new(10.0, BetMode::Base);
        assert_eq!(
            resolve(&request, 0.5),
            Err(RoundError::InvalidCrashMultiplier(0.5))
        );
        assert!(matches!(
            resolve(&request, f64::NAN),
            Err(RoundError::InvalidCrashMultiplier(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_invalid_request() {
        let request = BetRequest::new(-1.0, BetMode::Base);
        assert_eq!(
            resolve(&request, 2.37),
            Err(RoundError::InvalidStake(-1.0))
        );
    }
}
