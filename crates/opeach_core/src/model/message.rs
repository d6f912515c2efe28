//! Inbox message domain model.
//!
//! # Invariants
//! - Messages are read-only demo data; the workspace exposes no mutation
//!   path for them beyond seeding.

use crate::model::EntityId;
use crate::store::{Entity, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One inbox message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: EntityId,
    pub sender: String,
    pub body: String,
}

impl Message {
    /// Creates a new message with a generated stable ID.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: sender.into(),
            body: body.into(),
        }
    }
}

impl Entity for Message {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind() -> &'static str {
        "message"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_non_empty(Self::kind(), "sender", &self.sender)?;
        ValidationError::require_non_empty(Self::kind(), "body", &self.body)
    }
}
