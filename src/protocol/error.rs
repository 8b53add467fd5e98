//! Error types for directory operations

use thiserror::Error;

/// Main error type for directory operations
///
/// Absence of an agent or task is signalled through these variants at the
/// service boundary, never as an exception-like control flow inside the
/// stores (those return `Option`). No variant is retryable: every
/// operation is an in-memory, deterministic lookup.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Agent id unknown to the registry
    #[error("Agent not found: {agent_id}")]
    AgentNotFound { agent_id: String },

    /// Task id unknown to the task store
    #[error("Task not found: {task_id}")]
    TaskNotFound { task_id: String },

    /// A submitted task names a recipient that is not registered
    #[error("Task targets unregistered agent: {agent_id}")]
    InvalidReference { agent_id: String },

    /// Validation error (malformed request or response)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DirectoryError {
    /// HTTP-equivalent status code for the route boundary
    pub fn status_code(&self) -> u16 {
        match self {
            DirectoryError::AgentNotFound { .. }
            | DirectoryError::TaskNotFound { .. }
            | DirectoryError::InvalidReference { .. } => 404,
            DirectoryError::Validation(_) => 400,
            DirectoryError::Serialization(_) => 500,
        }
    }

    /// Check whether this error maps to a not-found condition
    pub fn is_not_found(&self) -> bool {
        self.status_code() == 404
    }
}

/// Result type alias for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
