//! Directory protocol operations

use super::task::Task;

/// Abstract operations of the directory's request surface
///
/// Each operation is binding-independent; the accessors below give the
/// HTTP+JSON binding used by the route layer. Registration and completion
/// are deliberately absent: they belong to the in-process collaborator
/// interfaces (deployment and execution), not the public request surface.
#[derive(Debug, Clone)]
pub enum DirectoryOperation {
    /// Discover agents, optionally filtered by skill name
    ListAgents {
        /// Skill name to filter on, exact match
        skill: Option<String>,
    },

    /// Fetch one agent's card
    GetAgentCard {
        /// The agent id to look up
        agent_id: String,
    },

    /// Submit a task to the recipient named in the record
    SendTask {
        /// The task to store; a missing id is filled in
        task: Task,
    },

    /// List tasks, optionally restricted to one agent's traffic
    ListTasks {
        /// Agent id to filter on (sender or recipient)
        agent_id: Option<String>,
    },

    /// Fetch a task by id
    GetTask {
        /// The task id to retrieve
        task_id: String,
    },
}

impl DirectoryOperation {
    /// Get the HTTP endpoint path for this operation
    pub fn endpoint(&self) -> String {
        match self {
            DirectoryOperation::ListAgents { skill } => match skill {
                Some(name) => format!("/a2a/directory?skill={}", name),
                None => "/a2a/directory".to_string(),
            },
            DirectoryOperation::GetAgentCard { agent_id } => {
                format!("/a2a/{}/agent.json", agent_id)
            }
            DirectoryOperation::SendTask { task } => format!("/a2a/{}/tasks", task.to_agent),
            DirectoryOperation::ListTasks { agent_id } => match agent_id {
                Some(id) => format!("/a2a/{}/tasks", id),
                None => "/a2a/tasks".to_string(),
            },
            DirectoryOperation::GetTask { task_id } => format!("/a2a/tasks/{}", task_id),
        }
    }

    /// Get the HTTP method for this operation
    pub fn method(&self) -> &'static str {
        match self {
            DirectoryOperation::SendTask { .. } => "POST",
            _ => "GET",
        }
    }

    /// Check whether this operation leaves directory state untouched
    pub fn is_read_only(&self) -> bool {
        !matches!(self, DirectoryOperation::SendTask { .. })
    }
}
