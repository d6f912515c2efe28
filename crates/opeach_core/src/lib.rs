//! Core domain logic for the OPeach CRM demo.
//! This crate is the single source of truth for business invariants.
//!
//! All state is in-memory and process-lifetime only: the demo has no
//! persistence, no network layer and no background work.

pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::Contact;
pub use model::group::Group;
pub use model::message::Message;
pub use model::opportunity::{Opportunity, Stage};
pub use model::reminder::Reminder;
pub use model::EntityId;
pub use seed::sample_workspace;
pub use service::form::{EntityForm, FormState};
pub use service::selection::SelectionSet;
pub use service::workspace::{CrmWorkspace, CONVERTED_OPPORTUNITY_VALUE};
pub use store::{
    Entity, EntityStore, StoreError, StoreObserver, StoreResult, SubscriptionHandle,
    ValidationError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
