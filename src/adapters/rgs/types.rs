//! RGS API Request Types
//!
//! Defines the serialization types for the RGS bet-placement call. The
//! response carries round bookkeeping fields owned by the server; nothing
//! beyond HTTP success is consumed on this side, so no response types are
//! modeled here.

use serde::Serialize;

use crate::domain::round::BetMode;

/// Bet-placement payload for the RGS `play` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PlayRequest {
  /// Stake amount in the session currency.
  pub amount: f64,
  /// `base` (demo wallet) or `real` (real money).
  pub mode: BetMode,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_play_request_wire_shape() {
    let request = PlayRequest {
      amount: 10.0,
      mode: BetMode::Base,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["amount"], 10.0);
    assert_eq!(json["mode"], "base");
  }
}
