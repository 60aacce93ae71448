//! Fixed Outcome Source - Development Placeholder Multiplier
//!
//! Returns a constant crash multiplier so rounds resolve deterministically
//! without the hosted math service. The authoritative multiplier MUST come
//! from the math engine in production; this source exists only so the round
//! flow can be exercised end to end in development.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::round::RoundError;
use crate::ports::outcome_source::OutcomeSource;

/// Placeholder resolved multiplier used in development.
pub const PLACEHOLDER_CRASH_MULTIPLIER: f64 = 2.37;

/// Outcome source returning a constant multiplier.
///
/// No randomness, no time-based suspension: every round crashes at the
/// configured value.
#[derive(Debug, Clone)]
pub struct FixedMultiplierSource {
    multiplier: f64,
}

impl FixedMultiplierSource {
    /// Create a source for a specific multiplier.
    ///
    /// # Errors
    /// Returns `RoundError` if the multiplier is non-finite or below 1.
    pub fn new(multiplier: f64) -> Result<Self, RoundError> {
        if !multiplier.is_finite() || multiplier < 1.0 {
            return Err(RoundError::InvalidCrashMultiplier(multiplier));
        }
        Ok(Self { multiplier })
    }

    /// The configured multiplier.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for FixedMultiplierSource {
    fn default() -> Self {
        Self {
            multiplier: PLACEHOLDER_CRASH_MULTIPLIER,
        }
    }
}

#[async_trait]
impl OutcomeSource for FixedMultiplierSource {
    async fn crash_multiplier(&self) -> Result<f64> {
        Ok(self.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_returns_placeholder() {
        let source = FixedMultiplierSource::default();
        let multiplier = source.crash_multiplier().await.unwrap();
        assert_eq!(multiplier, PLACEHOLDER_CRASH_MULTIPLIER);
    }

    #[test]
    fn test_rejects_sub_unit_multiplier() {
        assert!(FixedMultiplierSource::new(0.99).is_err());
        assert!(FixedMultiplierSource::new(f64::INFINITY).is_err());
        assert!(FixedMultiplierSource::new(1.0).is_ok());
    }
}
