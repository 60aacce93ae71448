//! In-memory Replay Store - Event Log Stub
//!
//! Implements the `ReplayStore` port with a process-local map. No
//! durability and no eviction: event logs live for the lifetime of the
//! process. Durable replay storage is delegated to an external store;
//! this stub exists so the round flow and its tests have a working sink.

use std::collections::HashMap;

use anyhow::{Result, bail};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::round::RoundEvent;
use crate::ports::replay_store::ReplayStore;

/// Process-local replay store keyed by round identifier.
#[derive(Debug, Default)]
pub struct InMemoryReplayStore {
    rounds: RwLock<HashMap<Uuid, Vec<RoundEvent>>>,
}

impl InMemoryReplayStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rounds currently recorded.
    pub async fn round_count(&self) -> usize {
        self.rounds.read().await.len()
    }
}

#[async_trait]
impl ReplayStore for InMemoryReplayStore {
    async fn save_events(&self, round_id: Uuid, events: &[RoundEvent]) -> Result<()> {
        let mut rounds = self.rounds.write().await;
        if rounds.contains_key(&round_id) {
            // Round results are immutable once created.
            bail!("Events already recorded for round {round_id}");
        }
        rounds.insert(round_id, events.to_vec());
        debug!(%round_id, events = events.len(), "Replay events recorded");
        Ok(())
    }

    async fn load_events(&self, round_id: Uuid) -> Result<Option<Vec<RoundEvent>>> {
        let rounds = self.rounds.read().await;
        Ok(rounds.get(&round_id).cloned())
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}
