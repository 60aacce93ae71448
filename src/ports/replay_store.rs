//! Replay Store Port - Round Event Log Persistence Interface
//!
//! Defines the trait for storing a round's ordered event sequence keyed by
//! its identifier, so outcomes can be reconstructed exactly after the fact.
//! Durable storage is delegated to an external system; the in-process
//! implementation is an explicit stub.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::round::RoundEvent;

/// Trait for replay log persistence providers.
#[async_trait]
pub trait ReplayStore: Send + Sync + 'static {
  /// Record the ordered event log for a round.
  ///
  /// A round's log is written exactly once; implementations reject a
  /// second write for the same identifier.
  ///
  /// # Errors
  /// Returns an error if the log was already recorded or the write fails.
  async fn save_events(&self, round_id: Uuid, events: &[RoundEvent]) -> anyhow::Result<()>;

  /// Load the recorded event log for a round, if present.
  async fn load_events(&self, round_id: Uuid) -> anyhow::Result<Option<Vec<RoundEvent>>>;

  /// Check if the store is able to accept writes.
  async fn is_healthy(&self) -> bool;
}
