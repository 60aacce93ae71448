//! Outcome Source Port - Crash Multiplier Provider Interface
//!
//! Defines the seam to the authoritative math engine. The crash multiplier
//! is opaque input to this layer: it must be determined by a verifiable,
//! deterministic process living outside this crate, and nothing here may
//! inspect, re-derive, or second-guess it.

use async_trait::async_trait;

/// Trait for crash multiplier providers.
///
/// Production implementations consume an artifact published by the math
/// engine; the development implementation returns a fixed placeholder.
/// No implementation performs randomness of its own.
#[async_trait]
pub trait OutcomeSource: Send + Sync + 'static {
  /// Produce the crash multiplier for the round being resolved.
  ///
  /// # Errors
  /// Returns an error when the backing artifact is missing or malformed.
  async fn crash_multiplier(&self) -> anyhow::Result<f64>;
}
