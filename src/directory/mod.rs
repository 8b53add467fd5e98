//! In-memory directory state: card registry, task store, and the exchange façade

pub mod discovery;
pub mod exchange;
pub mod registry;
pub mod tasks;

pub use exchange::{ExchangeConfig, TaskExchange};
pub use registry::AgentRegistry;
pub use tasks::TaskStore;
