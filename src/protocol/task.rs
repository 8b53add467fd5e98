//! Task types and lifecycle management

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A unit of delegated work between two agents
///
/// Tasks are asynchronous handoffs: creation returns immediately in the
/// `pending` state, and whichever process actually runs the target agent
/// reports the result back later through completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier, generated at submission when the caller supplies none
    #[serde(default)]
    pub id: String,

    /// Agent id of the sender
    pub from_agent: String,

    /// Agent id of the recipient
    pub to_agent: String,

    /// Id of the skill on the recipient's card this task targets
    pub skill_id: String,

    /// Task input
    pub input_text: String,

    /// Current lifecycle state
    #[serde(default)]
    pub status: TaskStatus,

    /// Task output, present once the task reaches a terminal state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_text: Option<String>,

    /// When the task was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// When the task reached a terminal state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Free-form task metadata
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, Value>,
}

impl Task {
    /// Create a new pending task with a generated id
    pub fn new(
        from_agent: impl Into<String>,
        to_agent: impl Into<String>,
        skill_id: impl Into<String>,
        input_text: impl Into<String>,
    ) -> Self {
        Self {
            id: fresh_id(),
            from_agent: from_agent.into(),
            to_agent: to_agent.into(),
            skill_id: skill_id.into(),
            input_text: input_text.into(),
            status: TaskStatus::Pending,
            output_text: None,
            created_at: Utc::now(),
            completed_at: None,
            metadata: HashMap::new(),
        }
    }

    /// Override the generated id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add a metadata field to the task
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Check if the task is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Generate a fresh task id
pub(crate) fn fresh_id() -> String {
    format!("task-{}", Uuid::now_v7().simple())
}

/// Task status in the directory lifecycle
///
/// Lifecycle: `pending → in_progress → completed/failed`. Completion may
/// also be reported directly against a pending task.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been submitted and awaits pickup
    #[default]
    Pending,

    /// Task execution has started
    InProgress,

    /// Task completed successfully
    Completed,

    /// Task execution hit an error
    Failed,
}

impl TaskStatus {
    /// Check if this is a terminal status
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }
}
