//! RGS API Adapter
//!
//! Implements the HTTP client for interacting with the hosted remote game
//! server's bet-placement endpoint. Handles session forwarding, timeouts,
//! and bounded retries.
//!
//! Sub-modules:
//! - `client`: HTTP client with retries and session forwarding
//! - `play`: Bet placement port implementation
//! - `types`: API request type definitions

pub mod client;
pub mod play;
pub mod types;

pub use client::{RgsClient, RgsClientConfig};
pub use play::RgsBetAdapter;
