//! Agent identity and capability types

use serde::{Deserialize, Serialize};

/// A named capability an agent claims to offer
///
/// Skills declare the content types they accept and produce as plain mode
/// tags (e.g. `"text"`, `"application/json"`). Discovery matches on the
/// `name` field, exactly and case-sensitively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    /// Skill identifier, unique within a card
    pub id: String,

    /// Skill name, used for discovery matching
    pub name: String,

    /// What the skill does
    pub description: String,

    /// Accepted input content-type tags
    #[serde(default = "default_modes")]
    pub input_modes: Vec<String>,

    /// Produced output content-type tags
    #[serde(default = "default_modes")]
    pub output_modes: Vec<String>,
}

fn default_modes() -> Vec<String> {
    vec!["text".to_string()]
}

impl Skill {
    /// Create a new skill with text input and output modes
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            input_modes: default_modes(),
            output_modes: default_modes(),
        }
    }

    /// Set the accepted input modes
    pub fn with_input_modes(mut self, modes: Vec<String>) -> Self {
        self.input_modes = modes;
        self
    }

    /// Set the produced output modes
    pub fn with_output_modes(mut self, modes: Vec<String>) -> Self {
        self.output_modes = modes;
        self
    }
}

/// Agent Card for agent discovery
///
/// The card is the public identity of an agent in the directory, the
/// `/.well-known/agent.json` equivalent a discovery client fetches per
/// agent. Cards are supplied wholesale at registration time and replaced
/// wholesale on re-registration; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentCard {
    /// Name of the agent
    pub name: String,

    /// Human-readable description of the agent
    pub description: String,

    /// The agent's endpoint identifier
    pub url: String,

    /// Skills the agent exposes, in declaration order
    #[serde(default)]
    pub skills: Vec<Skill>,

    /// Agent version
    #[serde(default = "default_version")]
    pub version: String,

    /// A2A protocol version the agent speaks
    #[serde(default = "default_protocol_version")]
    pub protocol_version: String,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_protocol_version() -> String {
    super::PROTOCOL_VERSION.to_string()
}

impl AgentCard {
    /// Create a new agent card with no skills and default versions
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            skills: Vec::new(),
            version: default_version(),
            protocol_version: default_protocol_version(),
        }
    }

    /// Add a skill to the card
    ///
    /// A skill with the same id as an existing one replaces it in place,
    /// so a card never carries two skills with the same id.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        if let Some(existing) = self.skills.iter_mut().find(|s| s.id == skill.id) {
            *existing = skill;
        } else {
            self.skills.push(skill);
        }
        self
    }

    /// Set the agent version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Check whether the card exposes a skill with the given name
    pub fn has_skill(&self, skill_name: &str) -> bool {
        self.skills.iter().any(|s| s.name == skill_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_card_creation() {
        let card = AgentCard::new("Researcher", "Finds sources", "https://example.com/researcher")
            .with_skill(Skill::new("search", "web_search", "Search the web"))
            .with_version("2.1.0");

        assert_eq!(card.name, "Researcher");
        assert_eq!(card.url, "https://example.com/researcher");
        assert_eq!(card.skills.len(), 1);
        assert_eq!(card.version, "2.1.0");
        assert_eq!(card.protocol_version, "0.2");
    }

    #[test]
    fn test_skill_defaults_to_text_modes() {
        let skill = Skill::new("sum", "summarize", "Summarize text");
        assert_eq!(skill.input_modes, vec!["text".to_string()]);
        assert_eq!(skill.output_modes, vec!["text".to_string()]);
    }

    #[test]
    fn test_with_skill_replaces_same_id() {
        let card = AgentCard::new("Agent", "An agent", "https://example.com")
            .with_skill(Skill::new("s1", "first", "First version"))
            .with_skill(Skill::new("s2", "other", "Unrelated"))
            .with_skill(Skill::new("s1", "second", "Second version"));

        assert_eq!(card.skills.len(), 2);
        assert_eq!(card.skills[0].name, "second");
        assert_eq!(card.skills[1].name, "other");
    }

    #[test]
    fn test_has_skill_exact_match() {
        let card = AgentCard::new("Agent", "An agent", "https://example.com")
            .with_skill(Skill::new("s1", "web_search", "Search"));

        assert!(card.has_skill("web_search"));
        assert!(!card.has_skill("Web_Search"));
        assert!(!card.has_skill("web"));
    }

    #[test]
    fn test_agent_card_serialization() {
        let card = AgentCard::new("Agent", "An agent", "https://example.com")
            .with_skill(Skill::new("s1", "translate", "Translate text"));

        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"name\":\"Agent\""));
        assert!(json.contains("\"protocol_version\":\"0.2\""));

        let deserialized: AgentCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_agent_card_deserialization_defaults() {
        let json = r#"{"name":"Agent","description":"An agent","url":"https://example.com"}"#;
        let card: AgentCard = serde_json::from_str(json).unwrap();

        assert!(card.skills.is_empty());
        assert_eq!(card.version, "1.0.0");
        assert_eq!(card.protocol_version, "0.2");
    }
}
