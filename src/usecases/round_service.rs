//! Round Service - Single-Round Play Orchestration
//!
//! Composes the ports into the linear round flow:
//! 1. Validate the bet request
//! 2. Register the bet with the RGS (production only)
//! 3. Obtain the crash multiplier from the outcome source
//! 4. Resolve the payout and assemble the event log
//! 5. Persist the event log under a fresh round identifier
//! 6. Return the immutable round result
//!
//! There is no shared mutable state across rounds and no retry logic at
//! this level; transport concerns live in the adapters.

use anyhow::{Context, Result};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Environment;
use crate::domain::outcome::resolve;
use crate::domain::round::{BetRequest, RoundEvent, RoundResult};
use crate::ports::bet_placement::BetPlacement;
use crate::ports::outcome_source::OutcomeSource;
use crate::ports::replay_store::ReplayStore;

/// Orchestrates a single bet-to-result round against the wired ports.
pub struct RoundService<B: BetPlacement, O: OutcomeSource, R: ReplayStore> {
  bets: B,
  outcome: O,
  replay: R,
  environment: Environment,
}

impl<B: BetPlacement, O: OutcomeSource, R: ReplayStore> RoundService<B, O, R> {
  /// Create a new round service.
  pub fn new(bets: B, outcome: O, replay: R, environment: Environment) -> Self {
    Self {
      bets,
      outcome,
      replay,
      environment,
    }
  }

  /// Play one round for the given bet request.
  ///
  /// In production the remote bet registration must succeed before the
  /// round resolves; any remote failure aborts the round and propagates
  /// unmodified. In dev the registration is skipped entirely.
  ///
  /// # Errors
  /// Returns validation errors, remote bet-placement failures, outcome
  /// source failures, or replay persistence failures.
  pub async fn play(&self, request: &BetRequest) -> Result<RoundResult> {
    request.validate()?;

    match self.environment {
      Environment::Production => {
        self
          .bets
          .place_bet(request.amount, request.mode)
          .await
          .context("Bet registration with the RGS failed")?;
      }
      Environment::Dev => {
        warn!("Dev environment - playing round without RGS bet registration");
      }
    }

    let crash_multiplier = self
      .outcome
      .crash_multiplier()
      .await
      .context("Outcome source failed to produce a crash multiplier")?;

    let outcome = resolve(request, crash_multiplier)?;
    let result = RoundResult::from_outcome(outcome);

    self
      .replay
      .save_events(result.round_id, &result.events)
      .await
      .context("Failed to record replay events")?;

    info!(
      round_id = %result.round_id,
      crash_multiplier = result.crash_multiplier,
      win = result.win,
      events = result.events.len(),
      "Round resolved"
    );

    Ok(result)
  }

  /// Load the recorded event log for a previously played round.
  pub async fn replay_events(&self, round_id: Uuid) -> Result<Option<Vec<RoundEvent>>> {
    self.replay.load_events(round_id).await
  }

  /// Check the wired ports. The bet endpoint is only consulted when the
  /// environment actually uses it.
  pub async fn is_healthy(&self) -> bool {
    let bets_ok = match self.environment {
      Environment::Dev => true,
      Environment::Production => self.bets.is_healthy().await,
    };
    bets_ok && self.replay.is_healthy().await
  }
}
