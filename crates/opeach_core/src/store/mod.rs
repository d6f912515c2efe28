//! Entity store layer: ordered in-memory collections with change
//! notification.
//!
//! # Responsibility
//! - Define the store contract shared by every entity kind.
//! - Keep mutation, validation and observer notification in one place.
//!
//! # Invariants
//! - Write paths must call `Entity::validate()` before mutating.
//! - Failed operations leave the collection unchanged.
//! - Stores return semantic errors (`NotFound`, `IndexOutOfRange`) rather
//!   than panicking.

pub mod entity_store;
pub mod observer;

pub use entity_store::EntityStore;
pub use observer::{StoreObserver, SubscriptionHandle};

use crate::model::EntityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Record type that can live in an `EntityStore`.
///
/// `kind()` is a stable lowercase label used in error messages and log
/// events, never shown verbatim in the UI.
pub trait Entity: Clone {
    fn id(&self) -> EntityId;
    fn kind() -> &'static str;
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A required string field was empty at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub entity: &'static str,
    pub field: &'static str,
}

impl ValidationError {
    /// Checks one required field, treating whitespace-only values as empty.
    pub fn require_non_empty(
        entity: &'static str,
        field: &'static str,
        value: &str,
    ) -> Result<(), Self> {
        if value.trim().is_empty() {
            return Err(Self { entity, field });
        }
        Ok(())
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} field `{}` must not be empty", self.entity, self.field)
    }
}

impl Error for ValidationError {}

/// Store operation error. All variants are recoverable at the call site;
/// the caller surfaces a message and prior state stays visible unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(ValidationError),
    NotFound {
        entity: &'static str,
        id: EntityId,
    },
    IndexOutOfRange {
        entity: &'static str,
        index: usize,
        len: usize,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::IndexOutOfRange { entity, index, len } => {
                write!(f, "{entity} index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
