//! Bet Placement Port - RGS Bet Registration Interface
//!
//! Defines the trait for registering a bet with the remote game server
//! before a round resolves.
//!
//! Key design decisions:
//! - The bet is a side-effecting financial transaction on the RGS; no
//!   response payload fields are consumed beyond success/failure
//! - Remote failures (network, insufficient balance) propagate to the
//!   caller uninterpreted inside the error chain

use async_trait::async_trait;

use crate::domain::round::BetMode;

/// Trait for bet placement providers.
///
/// Implementors connect to the RGS bet-placement endpoint and handle the
/// wire-level call. Session handling, balance settlement, and round
/// bookkeeping are owned by the server side.
#[async_trait]
pub trait BetPlacement: Send + Sync + 'static {
  /// Register a bet with the remote game server.
  ///
  /// # Errors
  /// Returns whatever the remote surfaces (network failure, insufficient
  /// balance, rejected stake), unmodified.
  async fn place_bet(&self, amount: f64, mode: BetMode) -> anyhow::Result<()>;

  /// Check if the RGS endpoint is reachable.
  async fn is_healthy(&self) -> bool;
}
