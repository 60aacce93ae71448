//! Core round domain types.
//!
//! Defines the business entities for a single crash-game round: the bet
//! request, the replayable event variants, and the immutable round result.
//! These types are the foundation of the hexagonal architecture's inner ring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ────────────────────────────────────────────
// Enums shared across domain and ports
// ────────────────────────────────────────────

/// Bet mode forwarded to the RGS — canonical enum used by both domain and ports.
///
/// The RGS distinguishes demo-wallet (`base`) from real-money (`real`) play.
/// This layer forwards the caller's choice verbatim and never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetMode {
    Base,
    Real,
}

impl std::fmt::Display for BetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Real => write!(f, "real"),
        }
    }
}

/// Validation failures for round inputs.
///
/// Remote-call and I/O failures travel as `anyhow` chains through the ports;
/// these typed variants cover only what this layer can judge locally.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RoundError {
    /// Stake must be a positive, finite amount.
    #[error("stake must be positive and finite, got {0}")]
    InvalidStake(f64),
    /// Auto cash-out is a multiplier, so it can never sit below 1.
    #[error("auto cash-out must be a finite multiplier >= 1, got {0}")]
    InvalidAutoCashout(f64),
    /// The crash multiplier is opaque input, but a value below 1 or a
    /// non-finite value can only be corruption upstream.
    #[error("crash multiplier must be a finite value >= 1, got {0}")]
    InvalidCrashMultiplier(f64),
}

// ────────────────────────────────────────────
// Bet request
// ────────────────────────────────────────────

/// A single bet placement request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetRequest {
    /// Stake amount in the session currency.
    pub amount: f64,
    /// Demo (`base`) or real-money (`real`) play.
    pub mode: BetMode,
    /// Optional auto cash-out threshold multiplier (>= 1).
    pub auto_cashout: Option<f64>,
}

impl BetRequest {
    /// Create a request with no auto cash-out.
    pub fn new(amount: f64, mode: BetMode) -> Self {
        Self {
            amount,
            mode,
            auto_cashout: None,
        }
    }

    /// Create a request with an auto cash-out threshold.
    pub fn with_auto_cashout(amount: f64, mode: BetMode, auto_cashout: f64) -> Self {
        Self {
            amount,
            mode,
            auto_cashout: Some(auto_cashout),
        }
    }

    /// Validate stake and threshold ranges.
    ///
    /// # Errors
    /// Returns `RoundError` if the stake is not positive and finite, or if a
    /// set auto cash-out is not a finite multiplier >= 1.
    pub fn validate(&self) -> Result<(), RoundError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(RoundError::InvalidStake(self.amount));
        }
        if let Some(threshold) = self.auto_cashout {
            if !threshold.is_finite() || threshold < 1.0 {
                return Err(RoundError::InvalidAutoCashout(threshold));
            }
        }
        Ok(())
    }
}

// ────────────────────────────────────────────
// Replayable round events
// ────────────────────────────────────────────

/// A single entry in a round's replay-safe event log.
///
/// Serializes to the wire shape consumed by replay tooling:
/// `{"event": "bet", "amount": 10.0, "autoCashout": 2.0}` and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum RoundEvent {
    /// The bet that opened the round. Always the first entry.
    Bet {
        amount: f64,
        #[serde(
            rename = "autoCashout",
            skip_serializing_if = "Option::is_none",
            default
        )]
        auto_cashout: Option<f64>,
    },
    /// The multiplier at which the round crashed. Always the second entry.
    Crash { multiplier: f64 },
    /// An automatic cash-out realized before the crash. Present only when
    /// the round produced a nonzero win.
    Cashout { multiplier: f64, win: f64 },
}

impl RoundEvent {
    /// Wire name of this event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bet { .. } => "bet",
            Self::Crash { .. } => "crash",
            Self::Cashout { .. } => "cashout",
        }
    }
}

// ────────────────────────────────────────────
// Round outcome and result
// ────────────────────────────────────────────

/// Resolved payout for a round, before an identifier is attached.
///
/// Produced by the pure resolution logic in [`crate::domain::outcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Multiplier at which the round crashed.
    pub crash_multiplier: f64,
    /// Win amount (0 unless an auto cash-out landed at or below the crash).
    pub win: f64,
    /// Ordered replay-safe event log.
    pub events: Vec<RoundEvent>,
}

/// Immutable result of a played round.
///
/// Created once per bet-placement call and never mutated afterward. The
/// identifier correlates the in-memory result with the persisted event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Freshly generated identifier used for replay correlation.
    pub round_id: Uuid,
    /// Multiplier at which the round crashed.
    pub crash_multiplier: f64,
    /// Win amount realized by the round.
    pub win: f64,
    /// Ordered replay-safe event log.
    pub events: Vec<RoundEvent>,
    /// When this result was assembled.
    pub created_at: DateTime<Utc>,
}

impl RoundResult {
    /// Attach a fresh identifier and timestamp to a resolved outcome.
    pub fn from_outcome(outcome: RoundOutcome) -> Self {
        Self {
            round_id: Uuid::new_v4(),
            crash_multiplier: outcome.crash_multiplier,
            win: outcome.win,
            events: outcome.events,
            created_at: Utc::now(),
        }
    }
}
