//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement the
//! client's core workflow.
//!
//! Use cases:
//! - `RoundService`: bet placement -> outcome -> event log -> result

pub mod round_service;

pub use round_service::RoundService;
