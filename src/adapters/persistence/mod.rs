//! Persistence Adapters - Replay Event Log Storage
//!
//! Implements the ReplayStore port. Only an in-memory stub lives here;
//! durable storage belongs to an external system.

pub mod replay;

pub use replay::InMemoryReplayStore;
