//! Opportunity domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another opportunity.
//! - `stage` carries display semantics only; it never gates mutations.

use crate::model::EntityId;
use crate::store::{Entity, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sales pipeline stage for an opportunity.
///
/// Purely presentational: the stage selects a badge color in the UI and has
/// no effect on core behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    ClosedWon,
}

impl Stage {
    /// Returns the display color name the UI renders for this stage.
    pub fn color_name(self) -> &'static str {
        match self {
            Self::Prospecting => "blue",
            Self::Qualification => "purple",
            Self::Proposal => "green",
            Self::Negotiation => "orange",
            Self::ClosedWon => "red",
        }
    }

    /// Returns the stable label used in logs and FFI payloads.
    pub fn label(self) -> &'static str {
        match self {
            Self::Prospecting => "prospecting",
            Self::Qualification => "qualification",
            Self::Proposal => "proposal",
            Self::Negotiation => "negotiation",
            Self::ClosedWon => "closed_won",
        }
    }
}

/// A sales opportunity in the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Stable global ID used for linking from contacts.
    pub id: EntityId,
    pub name: String,
    pub stage: Stage,
    /// Deal value in account currency.
    pub value: f64,
}

impl Opportunity {
    /// Creates a new opportunity with a generated stable ID.
    pub fn new(name: impl Into<String>, stage: Stage, value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            stage,
            value,
        }
    }
}

impl Entity for Opportunity {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind() -> &'static str {
        "opportunity"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_non_empty(Self::kind(), "name", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::Stage;

    #[test]
    fn stage_color_mapping_matches_display_contract() {
        assert_eq!(Stage::Prospecting.color_name(), "blue");
        assert_eq!(Stage::Qualification.color_name(), "purple");
        assert_eq!(Stage::Proposal.color_name(), "green");
        assert_eq!(Stage::Negotiation.color_name(), "orange");
        assert_eq!(Stage::ClosedWon.color_name(), "red");
    }
}
