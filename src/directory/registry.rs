//! Agent card registry

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::protocol::agent::AgentCard;

/// Registry of agent cards keyed by agent id
///
/// Entries are whole-record replace-or-insert: registration overwrites any
/// previous card for the same id without moving it in iteration order, so
/// `list_all` always reflects first-registration order. All access goes
/// through a single map-wide lock and readers receive point-in-time
/// snapshots; no caller ever observes a half-written card.
#[derive(Debug, Default)]
pub struct AgentRegistry {
    entries: RwLock<IndexMap<String, AgentCard>>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the card for an agent id
    ///
    /// Card contents are taken as supplied; an empty skill list is valid.
    pub fn register(&self, agent_id: impl Into<String>, card: AgentCard) {
        self.entries.write().insert(agent_id.into(), card);
    }

    /// Remove an agent's entry; silently does nothing for unknown ids
    pub fn unregister(&self, agent_id: &str) {
        self.entries.write().shift_remove(agent_id);
    }

    /// Look up one agent's card
    pub fn get(&self, agent_id: &str) -> Option<AgentCard> {
        self.entries.read().get(agent_id).cloned()
    }

    /// Check whether an agent id is registered
    pub fn contains(&self, agent_id: &str) -> bool {
        self.entries.read().contains_key(agent_id)
    }

    /// Snapshot of all cards, first-registered first
    pub fn list_all(&self) -> Vec<AgentCard> {
        self.entries.read().values().cloned().collect()
    }

    /// Number of registered agents
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
