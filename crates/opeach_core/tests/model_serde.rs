use opeach_core::{Contact, Opportunity, Reminder, Stage};
use uuid::Uuid;

#[test]
fn opportunity_serializes_stage_as_snake_case() {
    let mut opportunity = Opportunity::new("Acme Inc.", Stage::ClosedWon, 100_000.0);
    opportunity.id = Uuid::nil();

    let json = serde_json::to_value(&opportunity).expect("opportunity should serialize");
    assert_eq!(json["stage"], "closed_won");
    assert_eq!(json["name"], "Acme Inc.");
    assert_eq!(json["value"], 100_000.0);
}

#[test]
fn contact_roundtrips_with_optional_link() {
    let mut contact = Contact::new("Mary", "555-0102", "mary@example.com", "lead");
    contact.opportunity_id = Some(Uuid::new_v4());

    let json = serde_json::to_string(&contact).expect("contact should serialize");
    let restored: Contact = serde_json::from_str(&json).expect("contact should deserialize");
    assert_eq!(restored, contact);
}

#[test]
fn unlinked_contact_serializes_null_link() {
    let contact = Contact::new("Tom", "555-0103", "tom@example.com", "customer");

    let json = serde_json::to_value(&contact).expect("contact should serialize");
    assert!(json["opportunity_id"].is_null());
}

#[test]
fn reminder_keeps_epoch_millisecond_precision() {
    let reminder = Reminder::new("Call Acme", 1_700_000_000_123);

    let json = serde_json::to_string(&reminder).expect("reminder should serialize");
    let restored: Reminder = serde_json::from_str(&json).expect("reminder should deserialize");
    assert_eq!(restored.due_at_epoch_ms, 1_700_000_000_123);
}
