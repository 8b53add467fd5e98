//! Task exchange façade over the registry and task store

use chrono::Utc;
use tracing::{debug, info};

use crate::protocol::{
    agent::AgentCard,
    error::{DirectoryError, DirectoryResult},
    task::{self, Task, TaskStatus},
};

use super::{registry::AgentRegistry, tasks::TaskStore};

/// Configuration for a task exchange
#[derive(Debug, Clone, Default)]
pub struct ExchangeConfig {
    /// Upper bound on retained terminal tasks
    ///
    /// `None` keeps every task forever. With a bound, each terminal
    /// transition evicts the oldest terminal records beyond it; pending
    /// and in-progress tasks are never evicted.
    pub completed_task_retention: Option<usize>,
}

impl ExchangeConfig {
    /// Create the default configuration (unbounded retention)
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the number of retained terminal tasks
    pub fn with_completed_task_retention(mut self, keep: usize) -> Self {
        self.completed_task_retention = Some(keep);
        self
    }
}

/// The directory façade: agent registration and discovery plus task handoff
///
/// One exchange is constructed at process start and handed to the
/// request-handling layer by reference (typically behind an `Arc`);
/// dropping it tears down all directory state. Submitting a task is a
/// fire-and-forget handoff: execution happens in whatever process runs
/// the target agent, which reports back through [`TaskExchange::complete_task`]
/// or [`TaskExchange::fail_task`].
#[derive(Debug, Default)]
pub struct TaskExchange {
    registry: AgentRegistry,
    tasks: TaskStore,
    config: ExchangeConfig,
}

impl TaskExchange {
    /// Create an exchange with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exchange with the given configuration
    pub fn with_config(config: ExchangeConfig) -> Self {
        Self {
            registry: AgentRegistry::new(),
            tasks: TaskStore::new(),
            config,
        }
    }

    /// The card registry backing this exchange
    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Register an agent's card, replacing any previous card for the id
    pub fn register_agent(&self, agent_id: impl Into<String>, card: AgentCard) {
        let agent_id = agent_id.into();
        info!(agent_id = %agent_id, skills = card.skills.len(), "agent registered");
        self.registry.register(agent_id, card);
    }

    /// Remove an agent from the directory; unknown ids are a no-op
    pub fn unregister_agent(&self, agent_id: &str) {
        debug!(agent_id = %agent_id, "agent unregistered");
        self.registry.unregister(agent_id);
    }

    /// Get an agent's card (the `/.well-known/agent.json` equivalent)
    pub fn get_agent_card(&self, agent_id: &str) -> Option<AgentCard> {
        self.registry.get(agent_id)
    }

    /// Serialized card document for one agent, as served to discovery clients
    pub fn card_document(&self, agent_id: &str) -> DirectoryResult<String> {
        let card = self
            .registry
            .get(agent_id)
            .ok_or_else(|| DirectoryError::AgentNotFound {
                agent_id: agent_id.to_string(),
            })?;
        Ok(serde_json::to_string_pretty(&card)?)
    }

    /// Discover agents, optionally filtered by skill name
    pub fn discover_agents(&self, skill_name: Option<&str>) -> Vec<AgentCard> {
        self.registry.discover(skill_name)
    }

    /// Submit a task for asynchronous execution by the recipient
    ///
    /// The recipient must be registered; unknown targets fail with
    /// [`DirectoryError::InvalidReference`] instead of creating an
    /// orphaned record. A missing id is filled with a fresh one. The
    /// stored record is returned immediately in the `pending` state;
    /// this call never waits on execution.
    pub fn send_task(&self, mut task: Task) -> DirectoryResult<Task> {
        if !self.registry.contains(&task.to_agent) {
            return Err(DirectoryError::InvalidReference {
                agent_id: task.to_agent,
            });
        }

        let generated = task.id.is_empty();
        if generated {
            task.id = task::fresh_id();
        }

        info!(
            task_id = %task.id,
            from = %task.from_agent,
            to = %task.to_agent,
            skill = %task.skill_id,
            "task sent"
        );

        let displaced = self.tasks.put(task.clone());
        if generated {
            // A collision on a freshly generated id means the generator
            // repeated itself, which no caller input can cause or fix.
            assert!(
                displaced.is_none(),
                "generated task id collided: {}",
                task.id
            );
        }
        Ok(task)
    }

    /// Look up one task by id
    pub fn get_task(&self, task_id: &str) -> Option<Task> {
        self.tasks.get(task_id)
    }

    /// List tasks, optionally restricted to one agent's sent or received traffic
    pub fn list_tasks(&self, agent_id: Option<&str>) -> Vec<Task> {
        self.tasks.list(agent_id)
    }

    /// Record that execution of a task has started
    ///
    /// Only a pending task moves to `in_progress`; any other status is
    /// returned unchanged. Returns `None` for unknown ids.
    pub fn mark_in_progress(&self, task_id: &str) -> Option<Task> {
        let updated = self.tasks.update(task_id, |task| {
            if task.status == TaskStatus::Pending {
                task.status = TaskStatus::InProgress;
            }
        });
        if let Some(task) = &updated {
            debug!(task_id = %task.id, status = ?task.status, "task picked up");
        }
        updated
    }

    /// Mark a task completed with its output
    ///
    /// Sets the output text and completion time along with the status.
    /// Completing a task that is already terminal overwrites the previous
    /// result. Returns `None` for unknown ids.
    pub fn complete_task(&self, task_id: &str, output: impl Into<String>) -> Option<Task> {
        let output = output.into();
        let updated = self.tasks.update(task_id, |task| {
            task.status = TaskStatus::Completed;
            task.output_text = Some(output);
            task.completed_at = Some(Utc::now());
        });
        if updated.is_some() {
            info!(task_id = %task_id, "task completed");
            self.enforce_retention();
        }
        updated
    }

    /// Mark a task failed, recording the error text as its output
    pub fn fail_task(&self, task_id: &str, output: impl Into<String>) -> Option<Task> {
        let output = output.into();
        let updated = self.tasks.update(task_id, |task| {
            task.status = TaskStatus::Failed;
            task.output_text = Some(output);
            task.completed_at = Some(Utc::now());
        });
        if updated.is_some() {
            info!(task_id = %task_id, "task failed");
            self.enforce_retention();
        }
        updated
    }

    /// Number of stored tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of registered agents
    pub fn agent_count(&self) -> usize {
        self.registry.len()
    }

    fn enforce_retention(&self) {
        if let Some(keep) = self.config.completed_task_retention {
            let evicted = self.tasks.prune_terminal(keep);
            if evicted > 0 {
                debug!(evicted, keep, "terminal tasks evicted");
            }
        }
    }
}
