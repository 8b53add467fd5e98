//! # A2A Directory
//!
//! An in-process agent directory and task exchange for the Agent2Agent
//! (A2A) protocol.
//!
//! The directory tracks which agents exist and what they can do (agent
//! cards with skills), answers discovery queries over them, and mediates
//! asynchronous task handoffs between agents: submitting a task returns
//! immediately in the `pending` state, and whichever process actually runs
//! the target agent reports the result back through completion. The crate
//! holds no network transport of its own; route layers for any binding
//! sit on top of the Tower service surface.
//!
//! ## Features
//!
//! - **Card registry**: whole-record register/replace/unregister with
//!   first-registration iteration order
//! - **Skill discovery**: exact-match skill queries over the registry
//! - **Task lifecycle**: `pending → in_progress → completed/failed` through
//!   explicit transitions, never external mutation of stored records
//! - **Thread safe**: coarse store-wide locks; every read is a consistent
//!   point-in-time snapshot
//! - **Tower surface**: the request table as a typed `Service` with
//!   composable validation
//!
//! ## Example
//!
//! ```rust
//! use a2a_directory::prelude::*;
//!
//! let exchange = TaskExchange::new();
//!
//! let card = AgentCard::new(
//!     "Researcher",
//!     "Finds and summarizes sources",
//!     "https://agents.example.com/researcher",
//! )
//! .with_skill(Skill::new("search", "web_search", "Search the web"));
//! exchange.register_agent("researcher", card);
//!
//! let found = exchange.discover_agents(Some("web_search"));
//! assert_eq!(found.len(), 1);
//!
//! let task = exchange
//!     .send_task(Task::new("planner", "researcher", "search", "rust lock-free maps"))
//!     .unwrap();
//! assert_eq!(task.status, TaskStatus::Pending);
//!
//! let done = exchange.complete_task(&task.id, "found 3 candidate crates").unwrap();
//! assert!(done.is_terminal());
//! ```

pub mod directory;
pub mod layer;
pub mod protocol;
pub mod service;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        directory::{AgentRegistry, ExchangeConfig, TaskExchange, TaskStore},
        layer::DirectoryValidationLayer,
        protocol::error::{DirectoryError, DirectoryResult},
        protocol::{AgentCard, DirectoryOperation, Skill, Task, TaskStatus},
        service::{DirectoryRequest, DirectoryResponse, DirectoryService, RequestContext},
    };
}
