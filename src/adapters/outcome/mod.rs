//! Outcome Source Adapters
//!
//! Implementations of the `OutcomeSource` port. The fixed source is the
//! development placeholder; the lookup source consumes the table the math
//! engine publishes and is the shape a production wiring takes.

pub mod fixed;
pub mod lookup;

pub use fixed::{FixedMultiplierSource, PLACEHOLDER_CRASH_MULTIPLIER};
pub use lookup::{LookupOutcomeSource, LookupTable};
