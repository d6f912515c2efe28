//! Group domain model.
//!
//! # Invariants
//! - `member_ids` keeps insertion order and never holds duplicates.
//! - Members reference contacts by ID; the group does not own contact data.

use crate::model::EntityId;
use crate::store::{Entity, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named collection of contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: EntityId,
    pub name: String,
    /// Free-form grouping label ("sales", "friends", ...).
    pub category: String,
    /// Contact membership in insertion order.
    pub member_ids: Vec<EntityId>,
}

impl Group {
    /// Creates a new group with a generated stable ID.
    ///
    /// Duplicate member IDs are dropped, keeping the first occurrence.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        member_ids: Vec<EntityId>,
    ) -> Self {
        let mut group = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            member_ids: Vec::with_capacity(member_ids.len()),
        };
        for member in member_ids {
            group.add_member(member);
        }
        group
    }

    /// Adds one member at the end, ignoring IDs already present.
    ///
    /// Returns whether membership changed.
    pub fn add_member(&mut self, contact_id: EntityId) -> bool {
        if self.member_ids.contains(&contact_id) {
            return false;
        }
        self.member_ids.push(contact_id);
        true
    }

    /// Removes one member, shifting later members up.
    ///
    /// Returns whether membership changed.
    pub fn remove_member(&mut self, contact_id: EntityId) -> bool {
        let before = self.member_ids.len();
        self.member_ids.retain(|id| *id != contact_id);
        self.member_ids.len() != before
    }

    pub fn has_member(&self, contact_id: EntityId) -> bool {
        self.member_ids.contains(&contact_id)
    }

    pub fn member_count(&self) -> usize {
        self.member_ids.len()
    }
}

impl Entity for Group {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind() -> &'static str {
        "group"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_non_empty(Self::kind(), "name", &self.name)
    }
}
