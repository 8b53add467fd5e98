//! Task store and lifecycle bookkeeping

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::protocol::task::Task;

/// Store of task records keyed by task id, in creation order
///
/// The store owns its records exclusively: callers hand records in and get
/// clones back, and every state transition runs under the map-wide write
/// lock through [`TaskStore::update`]. Records are never removed except by
/// the explicit retention policy in [`TaskStore::prune_terminal`].
#[derive(Debug, Default)]
pub struct TaskStore {
    entries: RwLock<IndexMap<String, Task>>,
}

impl TaskStore {
    /// Create an empty task store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task keyed by its id, returning any displaced record
    pub fn put(&self, task: Task) -> Option<Task> {
        self.entries.write().insert(task.id.clone(), task)
    }

    /// Look up one task by id
    pub fn get(&self, task_id: &str) -> Option<Task> {
        self.entries.read().get(task_id).cloned()
    }

    /// List tasks in store order
    ///
    /// With an agent id, only tasks where that agent is sender or
    /// recipient are returned.
    pub fn list(&self, agent_id: Option<&str>) -> Vec<Task> {
        let entries = self.entries.read();
        match agent_id {
            None => entries.values().cloned().collect(),
            Some(id) => entries
                .values()
                .filter(|t| t.from_agent == id || t.to_agent == id)
                .cloned()
                .collect(),
        }
    }

    /// Apply a state transition in place, returning the updated record
    ///
    /// Returns `None` when the id is unknown; the mutator never runs in
    /// that case.
    pub fn update<F>(&self, task_id: &str, mutator: F) -> Option<Task>
    where
        F: FnOnce(&mut Task),
    {
        let mut entries = self.entries.write();
        let task = entries.get_mut(task_id)?;
        mutator(task);
        Some(task.clone())
    }

    /// Evict the oldest terminal tasks beyond `keep`
    ///
    /// Pending and in-progress tasks are never evicted. Returns how many
    /// records were removed.
    pub fn prune_terminal(&self, keep: usize) -> usize {
        let mut entries = self.entries.write();
        let terminal: Vec<String> = entries
            .values()
            .filter(|t| t.status.is_terminal())
            .map(|t| t.id.clone())
            .collect();
        if terminal.len() <= keep {
            return 0;
        }
        let excess = terminal.len() - keep;
        for id in terminal.iter().take(excess) {
            entries.shift_remove(id);
        }
        excess
    }

    /// Number of stored tasks
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::task::TaskStatus;

    use super::*;

    fn task(id: &str, from: &str, to: &str) -> Task {
        Task::new(from, to, "skill", "input").with_id(id)
    }

    #[test]
    fn test_put_and_get() {
        let store = TaskStore::new();
        assert!(store.put(task("t1", "a", "b")).is_none());

        let fetched = store.get("t1").unwrap();
        assert_eq!(fetched.from_agent, "a");
        assert!(store.get("t2").is_none());
    }

    #[test]
    fn test_put_overwrites_and_returns_displaced() {
        let store = TaskStore::new();
        store.put(task("t1", "a", "b"));

        let displaced = store.put(task("t1", "c", "d")).unwrap();
        assert_eq!(displaced.from_agent, "a");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("t1").unwrap().from_agent, "c");
    }

    #[test]
    fn test_list_filters_sender_or_recipient() {
        let store = TaskStore::new();
        store.put(task("t1", "a", "b"));
        store.put(task("t2", "b", "c"));
        store.put(task("t3", "c", "d"));

        let for_b: Vec<String> = store
            .list(Some("b"))
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(for_b, vec!["t1".to_string(), "t2".to_string()]);

        assert_eq!(store.list(None).len(), 3);
        assert!(store.list(Some("ghost")).is_empty());
    }

    #[test]
    fn test_update_unknown_id() {
        let store = TaskStore::new();
        let result = store.update("ghost", |t| t.status = TaskStatus::Completed);
        assert!(result.is_none());
    }

    #[test]
    fn test_update_mutates_in_place() {
        let store = TaskStore::new();
        store.put(task("t1", "a", "b"));

        let updated = store
            .update("t1", |t| t.status = TaskStatus::InProgress)
            .unwrap();
        assert_eq!(updated.status, TaskStatus::InProgress);
        assert_eq!(store.get("t1").unwrap().status, TaskStatus::InProgress);
    }

    #[test]
    fn test_prune_terminal_keeps_newest_and_live_tasks() {
        let store = TaskStore::new();
        for i in 0..5 {
            store.put(task(&format!("t{}", i), "a", "b"));
        }
        for i in 0..4 {
            store.update(&format!("t{}", i), |t| t.status = TaskStatus::Completed);
        }

        let evicted = store.prune_terminal(2);
        assert_eq!(evicted, 2);
        assert_eq!(store.len(), 3);

        // Oldest terminal records went first; the pending one survives
        assert!(store.get("t0").is_none());
        assert!(store.get("t1").is_none());
        assert!(store.get("t2").is_some());
        assert_eq!(store.get("t4").unwrap().status, TaskStatus::Pending);
    }

    #[test]
    fn test_prune_terminal_under_limit_is_noop() {
        let store = TaskStore::new();
        store.put(task("t1", "a", "b"));
        store.update("t1", |t| t.status = TaskStatus::Failed);

        assert_eq!(store.prune_terminal(5), 0);
        assert_eq!(store.len(), 1);
    }
}
