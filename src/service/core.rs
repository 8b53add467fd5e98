//! Core directory service implementation

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use tower_service::Service;

use crate::{
    directory::exchange::TaskExchange,
    protocol::{error::DirectoryError, operation::DirectoryOperation},
    service::{DirectoryRequest, DirectoryResponse},
};

/// Directory service exposing the exchange as a Tower `Service`
///
/// Route handlers for any binding (HTTP, in-process, test harnesses) call
/// this service with typed operations; absence inside the stores surfaces
/// here as the not-found error variants so the boundary can map them to
/// status codes.
#[derive(Debug)]
pub struct DirectoryService {
    exchange: Arc<TaskExchange>,
}

impl DirectoryService {
    /// Create a service over a shared exchange handle
    pub fn new(exchange: Arc<TaskExchange>) -> Self {
        Self { exchange }
    }

    /// The exchange this service dispatches to
    pub fn exchange(&self) -> &Arc<TaskExchange> {
        &self.exchange
    }

    fn execute(
        exchange: &TaskExchange,
        operation: DirectoryOperation,
    ) -> Result<DirectoryResponse, DirectoryError> {
        match operation {
            DirectoryOperation::ListAgents { skill } => Ok(DirectoryResponse::Cards(
                exchange.discover_agents(skill.as_deref()),
            )),
            DirectoryOperation::GetAgentCard { agent_id } => exchange
                .get_agent_card(&agent_id)
                .map(|card| DirectoryResponse::Card(Box::new(card)))
                .ok_or(DirectoryError::AgentNotFound { agent_id }),
            DirectoryOperation::SendTask { task } => Ok(DirectoryResponse::Task(Box::new(
                exchange.send_task(task)?,
            ))),
            DirectoryOperation::ListTasks { agent_id } => Ok(DirectoryResponse::Tasks(
                exchange.list_tasks(agent_id.as_deref()),
            )),
            DirectoryOperation::GetTask { task_id } => exchange
                .get_task(&task_id)
                .map(|task| DirectoryResponse::Task(Box::new(task)))
                .ok_or(DirectoryError::TaskNotFound { task_id }),
        }
    }
}

impl Service<DirectoryRequest> for DirectoryService {
    type Response = DirectoryResponse;
    type Error = DirectoryError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // In-memory lookups have no backpressure to report
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: DirectoryRequest) -> Self::Future {
        let exchange = self.exchange.clone();
        Box::pin(async move { Self::execute(&exchange, req.operation) })
    }
}

impl Clone for DirectoryService {
    fn clone(&self) -> Self {
        Self {
            exchange: self.exchange.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::{
        agent::{AgentCard, Skill},
        task::{Task, TaskStatus},
    };

    use super::*;

    fn service_with_worker() -> DirectoryService {
        let exchange = Arc::new(TaskExchange::new());
        let card = AgentCard::new("Worker", "Does work", "https://example.com/worker")
            .with_skill(Skill::new("run", "run", "Run things"));
        exchange.register_agent("worker", card);
        DirectoryService::new(exchange)
    }

    #[tokio::test]
    async fn test_service_list_agents() {
        let mut service = service_with_worker();

        let response = service
            .call(DirectoryRequest::new(DirectoryOperation::ListAgents {
                skill: None,
            }))
            .await
            .unwrap();

        let cards = response.into_cards().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Worker");
    }

    #[tokio::test]
    async fn test_service_list_agents_with_filter() {
        let mut service = service_with_worker();

        let response = service
            .call(DirectoryRequest::new(DirectoryOperation::ListAgents {
                skill: Some("missing_skill".to_string()),
            }))
            .await
            .unwrap();

        assert!(response.into_cards().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_service_get_agent_card_not_found() {
        let mut service = service_with_worker();

        let result = service
            .call(DirectoryRequest::new(DirectoryOperation::GetAgentCard {
                agent_id: "ghost".to_string(),
            }))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, DirectoryError::AgentNotFound { .. }));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_service_send_and_get_task() {
        let mut service = service_with_worker();

        let response = service
            .call(DirectoryRequest::new(DirectoryOperation::SendTask {
                task: Task::new("planner", "worker", "run", "do it"),
            }))
            .await
            .unwrap();
        let stored = response.into_task().unwrap();
        assert_eq!(stored.status, TaskStatus::Pending);

        let response = service
            .call(DirectoryRequest::new(DirectoryOperation::GetTask {
                task_id: stored.id.clone(),
            }))
            .await
            .unwrap();
        assert_eq!(response.into_task().unwrap().id, stored.id);
    }

    #[tokio::test]
    async fn test_service_send_task_unknown_target() {
        let mut service = service_with_worker();

        let result = service
            .call(DirectoryRequest::new(DirectoryOperation::SendTask {
                task: Task::new("planner", "ghost", "run", "do it"),
            }))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            DirectoryError::InvalidReference { .. }
        ));
    }

    #[tokio::test]
    async fn test_service_list_tasks_for_agent() {
        let mut service = service_with_worker();
        let exchange = service.exchange().clone();

        exchange
            .send_task(Task::new("planner", "worker", "run", "1"))
            .unwrap();
        exchange
            .send_task(Task::new("other", "worker", "run", "2"))
            .unwrap();

        let response = service
            .call(DirectoryRequest::new(DirectoryOperation::ListTasks {
                agent_id: Some("planner".to_string()),
            }))
            .await
            .unwrap();
        assert_eq!(response.into_tasks().unwrap().len(), 1);
    }
}
