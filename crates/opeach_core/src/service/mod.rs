//! Use-case services on top of the entity stores.
//!
//! # Responsibility
//! - Orchestrate the flows that span more than one store or hold transient
//!   editing state.
//!
//! # Invariants
//! - Services never bypass store validation or notification contracts.
//! - The only cross-store write in the core is contact conversion.

pub mod form;
pub mod selection;
pub mod workspace;

pub use form::{EntityForm, FormState};
pub use selection::SelectionSet;
pub use workspace::CrmWorkspace;
