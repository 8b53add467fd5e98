//! Core directory protocol types and definitions

pub mod agent;
pub mod error;
pub mod operation;
pub mod task;

pub use agent::{AgentCard, Skill};
pub use error::{DirectoryError, DirectoryResult};
pub use operation::DirectoryOperation;
pub use task::{Task, TaskStatus};

/// A2A protocol version advertised on newly built cards
pub const PROTOCOL_VERSION: &str = "0.2";
