//! Demo seed records.
//!
//! # Responsibility
//! - Provide the sample data the demo screens show on first launch.
//! - Keep seed content out of the stores: callers pass these records to
//!   `CrmWorkspace::with_seed` explicitly instead of relying on
//!   compiled-in globals.

use crate::model::contact::Contact;
use crate::model::message::Message;
use crate::model::opportunity::{Opportunity, Stage};
use crate::service::workspace::CrmWorkspace;
use crate::store::StoreResult;

/// Returns the five demo pipeline opportunities.
pub fn sample_opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity::new("Acme Inc.", Stage::Proposal, 100_000.0),
        Opportunity::new("Globex Corp.", Stage::Qualification, 50_000.0),
        Opportunity::new("Initech LLC", Stage::Prospecting, 25_000.0),
        Opportunity::new("Umbrella Corp.", Stage::Negotiation, 75_000.0),
        Opportunity::new("Stark Industries", Stage::ClosedWon, 150_000.0),
    ]
}

/// Returns the demo address book, unlinked to any opportunity.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("John", "555-0101", "john@example.com", "customer"),
        Contact::new("Mary", "555-0102", "mary@example.com", "lead"),
        Contact::new("Tom", "555-0103", "tom@example.com", "customer"),
    ]
}

/// Returns the demo inbox.
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message::new("John", "Hey, how are you?"),
        Message::new("Mary", "Want to grab lunch today?"),
        Message::new("Tom", "Can you send me the report by EOD?"),
    ]
}

/// Builds a workspace seeded with all demo data.
///
/// Groups and reminders start empty, as on the original screens.
pub fn sample_workspace() -> StoreResult<CrmWorkspace> {
    CrmWorkspace::with_seed(sample_opportunities(), sample_contacts(), sample_messages())
}
