//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires from
//! the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `BetPlacement`: Bet registration with the remote game server
//! - `OutcomeSource`: Authoritative crash multiplier provider
//! - `ReplayStore`: Round event log persistence

pub mod bet_placement;
pub mod outcome_source;
pub mod replay_store;
