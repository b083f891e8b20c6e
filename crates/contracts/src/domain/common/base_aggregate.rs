use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Fields shared by every aggregate: identity, business code, display name,
/// free-text notes and audit metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record identifier
    pub id: Id,
    /// Business code (e.g. "GAS-2026-001", "ORD-00042")
    pub code: String,
    /// Display name / short description
    pub description: String,
    /// Free-text notes
    pub notes: Option<String>,
    /// Lifecycle metadata
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            notes: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
