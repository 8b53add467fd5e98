//! Directory service request types

use std::collections::HashMap;

use crate::protocol::operation::DirectoryOperation;

/// A request to the directory service
///
/// This wraps a directory operation with the context the route layer
/// attaches before dispatch.
#[derive(Debug, Clone)]
pub struct DirectoryRequest {
    /// The operation to execute
    pub operation: DirectoryOperation,

    /// Request context (peer identity, metadata)
    pub context: RequestContext,
}

impl DirectoryRequest {
    /// Create a request with an empty context
    pub fn new(operation: DirectoryOperation) -> Self {
        Self {
            operation,
            context: RequestContext::default(),
        }
    }

    /// Attach a request context
    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }
}

/// Request context carried alongside an operation
///
/// The directory does not authenticate callers; the route layer may still
/// stamp a peer identity and metadata headers here for logging and
/// policies of its own.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Identity of the calling agent or client, when known
    pub peer: Option<String>,

    /// Additional metadata headers
    pub metadata: HashMap<String, String>,
}

impl RequestContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the calling peer's identity
    pub fn with_peer(mut self, peer: impl Into<String>) -> Self {
        self.peer = Some(peer.into());
        self
    }

    /// Add a metadata header
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
