//! FFI use-case API for the mobile UI.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the process-wide workspace the screens read and mutate.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All mutations run synchronously; the UI re-reads list state after
//!   every action response.

use opeach_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    sample_workspace, Contact, CrmWorkspace, EntityId, Opportunity, Reminder, Stage,
};
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static WORKSPACE: OnceLock<Mutex<CrmWorkspace>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for screen actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Created or affected entity ID in string form.
    pub entity_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, entity_id: EntityId) -> Self {
        Self {
            ok: true,
            entity_id: Some(entity_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entity_id: None,
            message: message.into(),
        }
    }
}

/// Opportunity row payload for the pipeline screen.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityItem {
    pub id: String,
    pub name: String,
    /// Stable stage label (`prospecting|...|closed_won`).
    pub stage: String,
    /// Badge color name the stage maps to.
    pub stage_color: String,
    pub value: f64,
}

/// Contact row payload for the contacts screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub category: String,
    /// Set once the contact has been converted.
    pub opportunity_id: Option<String>,
}

/// Group row payload for the groups screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub member_ids: Vec<String>,
}

/// Reminder row payload for the reminders screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderItem {
    pub id: String,
    pub title: String,
    pub due_at_epoch_ms: i64,
}

/// Message row payload for the inbox screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageItem {
    pub id: String,
    pub sender: String,
    pub body: String,
}

/// Lists pipeline opportunities in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_opportunities() -> Vec<OpportunityItem> {
    read_workspace(|workspace| {
        workspace
            .opportunities()
            .items()
            .iter()
            .map(|opp| OpportunityItem {
                id: opp.id.to_string(),
                name: opp.name.clone(),
                stage: opp.stage.label().to_string(),
                stage_color: opp.stage.color_name().to_string(),
                value: opp.value,
            })
            .collect()
    })
}

/// Lists contacts in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_contacts() -> Vec<ContactItem> {
    read_workspace(|workspace| {
        workspace
            .contacts()
            .items()
            .iter()
            .map(|contact| ContactItem {
                id: contact.id.to_string(),
                name: contact.name.clone(),
                phone_number: contact.phone_number.clone(),
                email: contact.email.clone(),
                category: contact.category.clone(),
                opportunity_id: contact.opportunity_id.map(|id| id.to_string()),
            })
            .collect()
    })
}

/// Lists groups name-sorted for display; stored order is untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn list_groups() -> Vec<GroupItem> {
    read_workspace(|workspace| {
        workspace
            .groups_sorted_by_name()
            .into_iter()
            .map(|group| GroupItem {
                id: group.id.to_string(),
                name: group.name,
                category: group.category,
                member_ids: group.member_ids.iter().map(|id| id.to_string()).collect(),
            })
            .collect()
    })
}

/// Lists reminders in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_reminders() -> Vec<ReminderItem> {
    read_workspace(|workspace| {
        workspace
            .reminders()
            .items()
            .iter()
            .map(|reminder| ReminderItem {
                id: reminder.id.to_string(),
                title: reminder.title.clone(),
                due_at_epoch_ms: reminder.due_at_epoch_ms,
            })
            .collect()
    })
}

/// Lists inbox messages. Read-only demo data; no mutation API exists.
#[flutter_rust_bridge::frb(sync)]
pub fn list_messages() -> Vec<MessageItem> {
    read_workspace(|workspace| {
        workspace
            .messages()
            .items()
            .iter()
            .map(|message| MessageItem {
                id: message.id.to_string(),
                sender: message.sender.clone(),
                body: message.body.clone(),
            })
            .collect()
    })
}

/// Adds one opportunity from the add form.
#[flutter_rust_bridge::frb(sync)]
pub fn add_opportunity(name: String, stage: String, value: f64) -> ActionResponse {
    let Some(stage) = parse_stage(&stage) else {
        return ActionResponse::failure(format!("unknown stage `{stage}`"));
    };
    mutate_workspace(|workspace| {
        workspace
            .opportunities_mut()
            .add(Opportunity::new(name.trim(), stage, value))
            .map(|id| ActionResponse::success("Opportunity added.", id))
            .unwrap_or_else(|err| ActionResponse::failure(err.to_string()))
    })
}

/// Adds one contact from the add form.
#[flutter_rust_bridge::frb(sync)]
pub fn add_contact(
    name: String,
    phone_number: String,
    email: String,
    category: String,
) -> ActionResponse {
    mutate_workspace(|workspace| {
        workspace
            .contacts_mut()
            .add(Contact::new(
                name.trim(),
                phone_number.trim(),
                email.trim(),
                category.trim(),
            ))
            .map(|id| ActionResponse::success("Contact added.", id))
            .unwrap_or_else(|err| ActionResponse::failure(err.to_string()))
    })
}

/// Adds one reminder from the add form.
#[flutter_rust_bridge::frb(sync)]
pub fn add_reminder(title: String, due_at_epoch_ms: i64) -> ActionResponse {
    mutate_workspace(|workspace| {
        workspace
            .reminders_mut()
            .add(Reminder::new(title.trim(), due_at_epoch_ms))
            .map(|id| ActionResponse::success("Reminder added.", id))
            .unwrap_or_else(|err| ActionResponse::failure(err.to_string()))
    })
}

/// Removes the opportunity at `position` in display order
/// (swipe-to-delete).
#[flutter_rust_bridge::frb(sync)]
pub fn remove_opportunity_at(position: usize) -> ActionResponse {
    mutate_workspace(|workspace| {
        workspace
            .opportunities_mut()
            .remove_at(position)
            .map(|removed| ActionResponse::success("Opportunity removed.", removed.id))
            .unwrap_or_else(|err| ActionResponse::failure(err.to_string()))
    })
}

/// Removes the reminder at `position` in display order (swipe-to-delete).
#[flutter_rust_bridge::frb(sync)]
pub fn remove_reminder_at(position: usize) -> ActionResponse {
    mutate_workspace(|workspace| {
        workspace
            .reminders_mut()
            .remove_at(position)
            .map(|removed| ActionResponse::success("Reminder removed.", removed.id))
            .unwrap_or_else(|err| ActionResponse::failure(err.to_string()))
    })
}

/// Removes one contact by ID.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_contact(contact_id: String) -> ActionResponse {
    let Some(id) = parse_entity_id(&contact_id) else {
        return ActionResponse::failure(format!("invalid contact id `{contact_id}`"));
    };
    mutate_workspace(|workspace| {
        workspace
            .contacts_mut()
            .remove_by_id(id)
            .map(|removed| ActionResponse::success("Contact removed.", removed.id))
            .unwrap_or_else(|err| ActionResponse::failure(err.to_string()))
    })
}

/// Removes one group by ID.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_group(group_id: String) -> ActionResponse {
    let Some(id) = parse_entity_id(&group_id) else {
        return ActionResponse::failure(format!("invalid group id `{group_id}`"));
    };
    mutate_workspace(|workspace| {
        workspace
            .groups_mut()
            .remove_by_id(id)
            .map(|removed| ActionResponse::success("Group removed.", removed.id))
            .unwrap_or_else(|err| ActionResponse::failure(err.to_string()))
    })
}

/// Converts one contact into a pipeline opportunity.
///
/// Repeat calls for the same contact return the existing linked
/// opportunity without creating another one.
#[flutter_rust_bridge::frb(sync)]
pub fn convert_contact(contact_id: String) -> ActionResponse {
    let Some(id) = parse_entity_id(&contact_id) else {
        return ActionResponse::failure(format!("invalid contact id `{contact_id}`"));
    };
    mutate_workspace(|workspace| {
        workspace
            .convert_to_opportunity(id)
            .map(|opportunity_id| ActionResponse::success("Contact converted.", opportunity_id))
            .unwrap_or_else(|err| ActionResponse::failure(err.to_string()))
    })
}

/// Commits a group from the member IDs picked on the group form.
#[flutter_rust_bridge::frb(sync)]
pub fn create_group(name: String, category: String, member_ids: Vec<String>) -> ActionResponse {
    let mut selection = opeach_core::SelectionSet::new();
    for raw in &member_ids {
        let Some(id) = parse_entity_id(raw) else {
            return ActionResponse::failure(format!("invalid contact id `{raw}`"));
        };
        selection.toggle(id);
    }
    mutate_workspace(|workspace| {
        workspace
            .create_group(name.trim(), category.trim(), &mut selection)
            .map(|id| ActionResponse::success("Group created.", id))
            .unwrap_or_else(|err| ActionResponse::failure(err.to_string()))
    })
}

fn workspace() -> &'static Mutex<CrmWorkspace> {
    WORKSPACE.get_or_init(|| {
        // Seed records are static and known-valid; fall back to an empty
        // workspace rather than panic across the FFI boundary.
        let seeded = sample_workspace().unwrap_or_else(|_| CrmWorkspace::new());
        Mutex::new(seeded)
    })
}

fn read_workspace<T: Default>(f: impl FnOnce(&CrmWorkspace) -> T) -> T {
    match workspace().lock() {
        Ok(guard) => f(&guard),
        Err(_) => T::default(),
    }
}

fn mutate_workspace(f: impl FnOnce(&mut CrmWorkspace) -> ActionResponse) -> ActionResponse {
    match workspace().lock() {
        Ok(mut guard) => f(&mut guard),
        Err(_) => ActionResponse::failure("workspace lock poisoned"),
    }
}

fn parse_entity_id(raw: &str) -> Option<EntityId> {
    Uuid::parse_str(raw.trim()).ok()
}

fn parse_stage(raw: &str) -> Option<Stage> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "prospecting" => Some(Stage::Prospecting),
        "qualification" => Some(Stage::Qualification),
        "proposal" => Some(Stage::Proposal),
        "negotiation" => Some(Stage::Negotiation),
        "closed_won" | "closedwon" => Some(Stage::ClosedWon),
        _ => None,
    }
}
