//! Directory service response types

use crate::protocol::{agent::AgentCard, task::Task};

/// Response from a directory service operation
#[derive(Debug, Clone)]
pub enum DirectoryResponse {
    /// Single card (from GetAgentCard)
    Card(Box<AgentCard>),

    /// Card snapshot (from ListAgents)
    Cards(Vec<AgentCard>),

    /// Single task (from SendTask, GetTask)
    Task(Box<Task>),

    /// Task snapshot (from ListTasks)
    Tasks(Vec<Task>),
}

impl DirectoryResponse {
    /// Extract a card from the response, if present
    pub fn into_card(self) -> Option<AgentCard> {
        match self {
            DirectoryResponse::Card(card) => Some(*card),
            _ => None,
        }
    }

    /// Extract a card list from the response, if present
    pub fn into_cards(self) -> Option<Vec<AgentCard>> {
        match self {
            DirectoryResponse::Cards(cards) => Some(cards),
            _ => None,
        }
    }

    /// Extract a task from the response, if present
    pub fn into_task(self) -> Option<Task> {
        match self {
            DirectoryResponse::Task(task) => Some(*task),
            _ => None,
        }
    }

    /// Extract a task list from the response, if present
    pub fn into_tasks(self) -> Option<Vec<Task>> {
        match self {
            DirectoryResponse::Tasks(tasks) => Some(tasks),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_card() {
        let card = AgentCard::new("Agent", "An agent", "https://example.com");
        let response = DirectoryResponse::Card(Box::new(card));

        let extracted = response.into_card();
        assert!(extracted.is_some());
        assert_eq!(extracted.unwrap().name, "Agent");
    }

    #[test]
    fn test_response_tasks() {
        let t1 = Task::new("a", "b", "s", "1");
        let t2 = Task::new("b", "c", "s", "2");
        let response = DirectoryResponse::Tasks(vec![t1, t2]);

        let extracted = response.into_tasks();
        assert!(extracted.is_some());
        assert_eq!(extracted.unwrap().len(), 2);
    }

    #[test]
    fn test_mismatched_extraction_returns_none() {
        let response = DirectoryResponse::Cards(vec![]);
        assert!(response.into_task().is_none());
    }
}
