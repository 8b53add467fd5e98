use std::sync::Arc;

use tower::ServiceBuilder;
use tower_service::Service;

use a2a_directory::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    println!("🚀 A2A Directory Demo\n");

    // One exchange per process, shared by handle with the service layer
    let exchange = Arc::new(TaskExchange::new());
    let mut service = ServiceBuilder::new()
        .layer(DirectoryValidationLayer::new())
        .service(DirectoryService::new(exchange.clone()));

    // Step 1: the deployment process registers two agents
    println!("📇 Registering agents...");
    exchange.register_agent(
        "translator",
        AgentCard::new(
            "Translator",
            "Translates text between languages",
            "https://agents.example.com/translator",
        )
        .with_skill(Skill::new("translate", "translate_text", "Translate text")),
    );
    exchange.register_agent(
        "summarizer",
        AgentCard::new(
            "Summarizer",
            "Summarizes long documents",
            "https://agents.example.com/summarizer",
        )
        .with_skill(Skill::new("summarize", "summarize_text", "Summarize text"))
        .with_version("1.2.0"),
    );
    println!("✓ {} agents registered\n", exchange.agent_count());

    // Step 2: discover who can summarize
    println!("🔍 Discovering agents with skill 'summarize_text'...");
    let response = service
        .call(DirectoryRequest::new(DirectoryOperation::ListAgents {
            skill: Some("summarize_text".to_string()),
        }))
        .await?;
    let cards = response.into_cards().unwrap_or_default();
    for AgentCard { name, url, version, .. } in &cards {
        println!("✓ Found: {name} v{version} at {url}");
    }
    println!();

    // Step 3: hand a task to the summarizer
    println!("📬 Sending task...");
    let response = service
        .call(DirectoryRequest::new(DirectoryOperation::SendTask {
            task: Task::new(
                "translator",
                "summarizer",
                "summarize",
                "Summarize the last translated chapter",
            ),
        }))
        .await?;
    let task = response.into_task().expect("send returns the stored task");
    println!("✓ Task created: {}", task.id);
    println!("  Status: {:?}\n", task.status);

    // Step 4: the execution runtime reports back
    println!("⚙️  Completing task...");
    exchange.mark_in_progress(&task.id);
    let done = exchange
        .complete_task(&task.id, "The chapter covers directory internals.")
        .expect("task was just created");
    println!("✓ Task {} is {:?}", done.id, done.status);
    if let Some(output) = &done.output_text {
        println!("  Output: {output}\n");
    }

    // Step 5: list the summarizer's traffic
    println!("📚 Tasks involving 'summarizer':");
    let response = service
        .call(DirectoryRequest::new(DirectoryOperation::ListTasks {
            agent_id: Some("summarizer".to_string()),
        }))
        .await?;
    for (i, Task { id, status, .. }) in response.into_tasks().unwrap_or_default().iter().enumerate()
    {
        println!("  {}. {id} - {status:?}", i + 1);
    }

    println!("\n✅ Demo completed successfully!");

    Ok(())
}
