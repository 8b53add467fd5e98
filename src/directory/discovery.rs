//! Skill-based agent discovery

use crate::protocol::agent::AgentCard;

use super::registry::AgentRegistry;

impl AgentRegistry {
    /// Discover agents, optionally filtered by skill name
    ///
    /// Matching is exact and case-sensitive on each skill's `name` field.
    /// A card with no matching skill is excluded regardless of its other
    /// fields; no filter returns the full registry snapshot. Either way
    /// the result preserves registration order and is unpaginated.
    pub fn discover(&self, skill_name: Option<&str>) -> Vec<AgentCard> {
        match skill_name {
            None => self.list_all(),
            Some(name) => self
                .list_all()
                .into_iter()
                .filter(|card| card.has_skill(name))
                .collect(),
        }
    }
}
