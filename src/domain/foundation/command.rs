//! Command infrastructure for application handlers.
//!
//! `CommandMetadata` carries request context through command processing so
//! every emitted event can be correlated with the request that caused it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata context for command handlers.
///
/// # Example
///
/// ```ignore
/// let metadata = CommandMetadata::new().with_correlation_id(request_id);
/// let envelope = EventEnvelope::from_event(&event)?
///     .with_correlation_id(metadata.correlation_id());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links related operations across a single request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Where the command came from (e.g. "api").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if none was provided.
    ///
    /// A generated ID is stored, so repeated calls return the same value.
    pub fn correlation_id(&mut self) -> String {
        self.correlation_id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
