//! CRM domain model.
//!
//! # Responsibility
//! - Define the canonical record types held by the entity stores.
//! - Keep one definition per entity kind (the prototype this core replaces
//!   carried three drifting copies of the same screens).
//!
//! # Invariants
//! - Every record is identified by a stable `EntityId` assigned at creation.
//! - Records are plain data; all lifecycle goes through `EntityStore`.

pub mod contact;
pub mod group;
pub mod message;
pub mod opportunity;
pub mod reminder;

use uuid::Uuid;

/// Stable identifier shared by every CRM entity kind.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;
