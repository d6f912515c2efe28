//! Contact domain model.
//!
//! # Invariants
//! - `opportunity_id`, once set by conversion, is never cleared by core
//!   (there is no "unconvert" operation).

use crate::model::EntityId;
use crate::store::{Entity, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: EntityId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    /// Free-form grouping label ("customer", "lead", ...).
    pub category: String,
    /// Back-reference set by `CrmWorkspace::convert_to_opportunity`.
    pub opportunity_id: Option<EntityId>,
}

impl Contact {
    /// Creates a new unlinked contact with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            category: category.into(),
            opportunity_id: None,
        }
    }

    /// Returns whether this contact has already been converted.
    pub fn is_converted(&self) -> bool {
        self.opportunity_id.is_some()
    }
}

impl Entity for Contact {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind() -> &'static str {
        "contact"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_non_empty(Self::kind(), "name", &self.name)?;
        ValidationError::require_non_empty(Self::kind(), "phone_number", &self.phone_number)?;
        ValidationError::require_non_empty(Self::kind(), "email", &self.email)
    }
}
