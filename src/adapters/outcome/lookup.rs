//! Lookup Outcome Source - Math Engine Table Consumer
//!
//! Resolves the crash multiplier from the lookup table the math engine
//! exports (a JSON array of `{index, crash_multiplier, weight}` entries).
//! Index selection is handled by the RGS; this layer only dereferences an
//! externally chosen index against the published artifact. No RNG and no
//! weighting happen on this side.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::ports::outcome_source::OutcomeSource;

/// One entry of the exported lookup table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LookupEntry {
    /// Position in the table; the RGS selects rounds by this index.
    pub index: usize,
    /// Crash point for this entry.
    pub crash_multiplier: f64,
    /// Relative frequency (higher = more common). Informational here.
    pub weight: u64,
}

/// Parsed and validated lookup table.
#[derive(Debug, Clone)]
pub struct LookupTable {
    entries: Vec<LookupEntry>,
}

impl LookupTable {
    /// Parse a table from its exported JSON form.
    ///
    /// # Errors
    /// Returns an error on malformed JSON or an invalid table shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<LookupEntry> =
            serde_json::from_str(json).context("Failed to parse lookup table JSON")?;
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// Load a table from the exported JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lookup table: {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Validate the table shape the export guarantees.
    ///
    /// Entries are index-contiguous from 0, multipliers are finite values
    /// >= 1, and every weight is positive.
    fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.entries.is_empty(), "Lookup table must not be empty");

        for (position, entry) in self.entries.iter().enumerate() {
            anyhow::ensure!(
                entry.index == position,
                "Lookup table index mismatch at position {position}: got {}",
                entry.index
            );
            anyhow::ensure!(
                entry.crash_multiplier.is_finite() && entry.crash_multiplier >= 1.0,
                "Lookup entry {position} has invalid multiplier {}",
                entry.crash_multiplier
            );
            anyhow::ensure!(
                entry.weight > 0,
                "Lookup entry {position} has zero weight"
            );
        }

        Ok(())
    }

    /// Crash multiplier for an externally selected index.
    ///
    /// # Errors
    /// Returns an error when the index falls outside the table.
    pub fn multiplier_for(&self, index: usize) -> Result<f64> {
        self.entries
            .get(index)
            .map(|entry| entry.crash_multiplier)
            .with_context(|| {
                format!(
                    "Lookup index {index} out of range (table has {} entries)",
                    self.entries.len()
                )
            })
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries. Never true after validation.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry weights.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|entry| entry.weight).sum()
    }
}

/// Outcome source resolving a preselected index against a lookup table.
#[derive(Debug, Clone)]
pub struct LookupOutcomeSource {
    table: LookupTable,
    index: usize,
}

impl LookupOutcomeSource {
    /// Create a source for a table and an externally selected index.
    ///
    /// # Errors
    /// Returns an error if the index falls outside the table.
    pub fn new(table: LookupTable, index: usize) -> Result<Self> {
        // Fail at construction rather than on the first round.
        table.multiplier_for(index)?;
        Ok(Self { table, index })
    }
}

#[async_trait]
impl OutcomeSource for LookupOutcomeSource {
    async fn crash_multiplier(&self) -> Result<f64> {
        self.table.multiplier_for(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"[
        {"index": 0, "crash_multiplier": 1.05, "weight": 3000},
        {"index": 1, "crash_multiplier": 1.50, "weight": 1200},
        {"index": 2, "crash_multiplier": 10.0, "weight": 100}
    ]"#;

    #[test]
    fn test_parses_exported_table() {
        let table = LookupTable::from_json_str(TABLE).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.total_weight(), 4300);
        assert_eq!(table.multiplier_for(1).unwrap(), 1.50);
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(LookupTable::from_json_str("[]").is_err());
    }

    #[test]
    fn test_rejects_index_gap() {
        let json = r#"[
            {"index": 0, "crash_multiplier": 1.05, "weight": 10},
            {"index": 2, "crash_multiplier": 1.50, "weight": 10}
        ]"#;
        assert!(LookupTable::from_json_str(json).is_err());
    }

    #[test]
    fn test_rejects_sub_unit_multiplier() {
        let json = r#"[{"index": 0, "crash_multiplier": 0.5, "weight": 10}]"#;
        assert!(LookupTable::from_json_str(json).is_err());
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let table = LookupTable::from_json_str(TABLE).unwrap();
        assert!(table.multiplier_for(3).is_err());
        assert!(LookupOutcomeSource::new(table, 99).is_err());
    }

    #[tokio::test]
    async fn test_source_resolves_selected_index() {
        let table = LookupTable::from_json_str(TABLE).unwrap();
        let source = LookupOutcomeSource::new(table, 2).unwrap();
        assert_eq!(source.crash_multiplier().await.unwrap(), 10.0);
    }
}
