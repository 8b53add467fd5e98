//! Validation layer for directory requests and responses

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tower_layer::Layer;
use tower_service::Service;

use crate::{
    protocol::{agent::AgentCard, error::DirectoryError, operation::DirectoryOperation},
    service::{DirectoryRequest, DirectoryResponse},
};

/// Layer that validates directory requests and responses
#[derive(Clone, Debug, Default)]
pub struct DirectoryValidationLayer;

impl DirectoryValidationLayer {
    /// Create a new validation layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for DirectoryValidationLayer {
    type Service = DirectoryValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        DirectoryValidationService { inner }
    }
}

/// Validation service that wraps an inner service
#[derive(Clone)]
pub struct DirectoryValidationService<S> {
    inner: S,
}

impl<S> DirectoryValidationService<S> {
    /// Validate a directory request before dispatch
    fn validate_request(req: &DirectoryRequest) -> Result<(), DirectoryError> {
        match &req.operation {
            DirectoryOperation::ListAgents { skill } => {
                if let Some(name) = skill {
                    if name.is_empty() {
                        return Err(DirectoryError::Validation(
                            "Skill filter cannot be empty".into(),
                        ));
                    }
                }
            }
            DirectoryOperation::GetAgentCard { agent_id } => {
                if agent_id.is_empty() {
                    return Err(DirectoryError::Validation("Agent ID cannot be empty".into()));
                }
            }
            DirectoryOperation::SendTask { task } => {
                if task.from_agent.is_empty() || task.to_agent.is_empty() {
                    return Err(DirectoryError::Validation(
                        "Task must name both sender and recipient".into(),
                    ));
                }
                if task.skill_id.is_empty() {
                    return Err(DirectoryError::Validation(
                        "Task skill ID cannot be empty".into(),
                    ));
                }
                if task.input_text.is_empty() {
                    return Err(DirectoryError::Validation(
                        "Task input cannot be empty".into(),
                    ));
                }
            }
            DirectoryOperation::ListTasks { agent_id } => {
                if let Some(id) = agent_id {
                    if id.is_empty() {
                        return Err(DirectoryError::Validation(
                            "Agent filter cannot be empty".into(),
                        ));
                    }
                }
            }
            DirectoryOperation::GetTask { task_id } => {
                if task_id.is_empty() {
                    return Err(DirectoryError::Validation("Task ID cannot be empty".into()));
                }
            }
        }

        Ok(())
    }

    fn validate_card(card: &AgentCard) -> Result<(), DirectoryError> {
        if card.name.is_empty() {
            return Err(DirectoryError::Validation("Agent name cannot be empty".into()));
        }
        for (i, skill) in card.skills.iter().enumerate() {
            if card.skills[..i].iter().any(|s| s.id == skill.id) {
                return Err(DirectoryError::Validation(format!(
                    "Card '{}' carries duplicate skill id '{}'",
                    card.name, skill.id
                )));
            }
        }
        Ok(())
    }

    /// Validate a directory response before it reaches the caller
    fn validate_response(resp: &DirectoryResponse) -> Result<(), DirectoryError> {
        match resp {
            DirectoryResponse::Task(task) => {
                if task.id.is_empty() {
                    return Err(DirectoryError::Validation("Task ID cannot be empty".into()));
                }

                // Output and completion time travel together with terminal status
                if task.is_terminal() {
                    if task.output_text.is_none() || task.completed_at.is_none() {
                        return Err(DirectoryError::Validation(
                            "Terminal task must carry output and completion time".into(),
                        ));
                    }
                } else if task.output_text.is_some() || task.completed_at.is_some() {
                    return Err(DirectoryError::Validation(
                        "Non-terminal task cannot carry output or completion time".into(),
                    ));
                }
            }
            DirectoryResponse::Card(card) => Self::validate_card(card)?,
            DirectoryResponse::Cards(cards) => {
                for card in cards {
                    Self::validate_card(card)?;
                }
            }
            DirectoryResponse::Tasks(_) => {}
        }

        Ok(())
    }
}

impl<S> Service<DirectoryRequest> for DirectoryValidationService<S>
where
    S: Service<DirectoryRequest, Response = DirectoryResponse, Error = DirectoryError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = DirectoryResponse;
    type Error = DirectoryError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: DirectoryRequest) -> Self::Future {
        if let Err(e) = Self::validate_request(&req) {
            return Box::pin(async move { Err(e) });
        }

        let mut inner = self.inner.clone();
        Box::pin(async move {
            let response = inner.call(req).await?;

            Self::validate_response(&response)?;

            Ok(response)
        })
    }
}
