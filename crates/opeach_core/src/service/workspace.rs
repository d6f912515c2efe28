//! CRM workspace: one store per entity kind plus cross-store flows.
//!
//! # Responsibility
//! - Own the five entity stores for the lifetime of the process.
//! - Implement contact conversion, the only write spanning two stores.
//!
//! # Invariants
//! - A contact's opportunity link, once set, is never cleared.
//! - Conversion is idempotent: repeat calls return the existing link
//!   instead of minting duplicate opportunities.
//! - No partial mutation stays visible when a flow fails midway.

use crate::model::contact::Contact;
use crate::model::group::Group;
use crate::model::message::Message;
use crate::model::opportunity::{Opportunity, Stage};
use crate::model::reminder::Reminder;
use crate::model::EntityId;
use crate::service::selection::SelectionSet;
use crate::store::{EntityStore, StoreResult};
use log::info;

/// Deal value a freshly converted opportunity starts with; the user fills
/// in the real figure afterwards.
pub const CONVERTED_OPPORTUNITY_VALUE: f64 = 0.0;

/// Top-level holder of all CRM collections.
///
/// Single-owner and synchronous like the stores it wraps; all state lives
/// for the process lifetime only.
#[derive(Default)]
pub struct CrmWorkspace {
    opportunities: EntityStore<Opportunity>,
    contacts: EntityStore<Contact>,
    groups: EntityStore<Group>,
    reminders: EntityStore<Reminder>,
    messages: EntityStore<Message>,
}

impl CrmWorkspace {
    /// Creates a workspace with all collections empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a workspace from explicit seed records.
    ///
    /// Groups and reminders always start empty, matching the original demo
    /// screens. Seed records are validated like any other add.
    pub fn with_seed(
        opportunities: Vec<Opportunity>,
        contacts: Vec<Contact>,
        messages: Vec<Message>,
    ) -> StoreResult<Self> {
        Ok(Self {
            opportunities: EntityStore::seeded(opportunities)?,
            contacts: EntityStore::seeded(contacts)?,
            groups: EntityStore::new(),
            reminders: EntityStore::new(),
            messages: EntityStore::seeded(messages)?,
        })
    }

    pub fn opportunities(&self) -> &EntityStore<Opportunity> {
        &self.opportunities
    }

    pub fn opportunities_mut(&mut self) -> &mut EntityStore<Opportunity> {
        &mut self.opportunities
    }

    pub fn contacts(&self) -> &EntityStore<Contact> {
        &self.contacts
    }

    pub fn contacts_mut(&mut self) -> &mut EntityStore<Contact> {
        &mut self.contacts
    }

    pub fn groups(&self) -> &EntityStore<Group> {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut EntityStore<Group> {
        &mut self.groups
    }

    pub fn reminders(&self) -> &EntityStore<Reminder> {
        &self.reminders
    }

    pub fn reminders_mut(&mut self) -> &mut EntityStore<Reminder> {
        &mut self.reminders
    }

    /// Inbox messages are read-only demo data, so only a shared accessor
    /// exists.
    pub fn messages(&self) -> &EntityStore<Message> {
        &self.messages
    }

    /// Converts a contact into a pipeline opportunity.
    ///
    /// # Contract
    /// - Fails with `NotFound` when no contact has `contact_id`.
    /// - Already-converted contacts return their existing link unchanged;
    ///   the opportunity store is not touched. The prototype minted a
    ///   duplicate opportunity on every call, which produced multiple
    ///   linked deals for one contact; the at-most-once behavior here is
    ///   the intended one.
    /// - Otherwise inserts one opportunity (stage `Prospecting`, value
    ///   `CONVERTED_OPPORTUNITY_VALUE`, named after the contact) and sets
    ///   the contact's back-reference. If setting the link fails the
    ///   inserted opportunity is removed again.
    pub fn convert_to_opportunity(&mut self, contact_id: EntityId) -> StoreResult<EntityId> {
        let contact = self
            .contacts
            .find_by_id(contact_id)
            .ok_or(crate::store::StoreError::NotFound {
                entity: "contact",
                id: contact_id,
            })?;

        if let Some(existing) = contact.opportunity_id {
            info!(
                "event=convert_contact status=noop contact_id={contact_id} opportunity_id={existing}"
            );
            return Ok(existing);
        }

        let opportunity = Opportunity::new(
            contact.name.clone(),
            Stage::Prospecting,
            CONVERTED_OPPORTUNITY_VALUE,
        );
        let opportunity_id = self.opportunities.add(opportunity)?;

        if let Err(err) = self
            .contacts
            .update(contact_id, |contact| contact.opportunity_id = Some(opportunity_id))
        {
            // Undo the insert so the failure leaves nothing half-applied.
            let _ = self.opportunities.remove_by_id(opportunity_id);
            return Err(err);
        }

        info!(
            "event=convert_contact status=ok contact_id={contact_id} opportunity_id={opportunity_id}"
        );
        Ok(opportunity_id)
    }

    /// Commits a picked selection as a new group.
    ///
    /// Membership keeps the selection's pick order. On success the
    /// selection is cleared, ending the transient picking session; on
    /// failure it stays intact for the user to retry.
    pub fn create_group(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        selection: &mut SelectionSet,
    ) -> StoreResult<EntityId> {
        let group = Group::new(name, category, selection.ids().to_vec());
        let id = self.groups.add(group)?;
        selection.clear();
        Ok(id)
    }

    /// Returns groups sorted by name for display.
    ///
    /// The underlying store keeps insertion order; sorting happens on a
    /// snapshot copy only.
    pub fn groups_sorted_by_name(&self) -> Vec<Group> {
        let mut sorted = self.groups.items().to_vec();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }
}
