//! Reminder domain model.

use crate::model::EntityId;
use crate::store::{Entity, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated to-do item. No recurrence and no notification wiring in core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: EntityId,
    pub title: String,
    /// Due time in Unix epoch milliseconds.
    pub due_at_epoch_ms: i64,
}

impl Reminder {
    /// Creates a new reminder with a generated stable ID.
    pub fn new(title: impl Into<String>, due_at_epoch_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            due_at_epoch_ms,
        }
    }
}

impl Entity for Reminder {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind() -> &'static str {
        "reminder"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_non_empty(Self::kind(), "title", &self.title)
    }
}
