//! RGS Bet Adapter - Bet Placement Port Implementation
//!
//! Implements the `BetPlacement` port using the shared `RgsClient`. The bet
//! debit is the only side effect this layer triggers on the server; outcome
//! determination stays fully delegated to the RGS.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::client::RgsClient;
use super::types::PlayRequest;
use crate::domain::round::BetMode;
use crate::ports::bet_placement::BetPlacement;

/// Bet placement adapter backed by the shared RGS client.
pub struct RgsBetAdapter {
  /// Shared RGS client with timeout + retry.
  client: Arc<RgsClient>,
}

impl RgsBetAdapter {
  /// Create a new bet adapter.
  pub fn new(client: Arc<RgsClient>) -> Self {
    Self { client }
  }
}

#[async_trait]
impl BetPlacement for RgsBetAdapter {
  #[instrument(skip(self))]
  async fn place_bet(&self, amount: f64, mode: BetMode) -> Result<()> {
    let request = PlayRequest { amount, mode };

    self
      .client
      .post("/play", &request)
      .await
      .context("RGS bet placement failed")?;

    debug!("Bet registered with RGS");
    Ok(())
  }

  async fn is_healthy(&self) -> bool {
    self.client.health_check().await
  }
}
