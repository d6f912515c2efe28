use opeach_core::{Contact, EntityStore, Opportunity, Stage, StoreError};
use uuid::Uuid;

fn seeded_pipeline() -> EntityStore<Opportunity> {
    EntityStore::seeded(vec![
        Opportunity::new("Acme Inc.", Stage::Proposal, 100_000.0),
        Opportunity::new("Globex Corp.", Stage::Qualification, 50_000.0),
        Opportunity::new("Initech LLC", Stage::Prospecting, 25_000.0),
        Opportunity::new("Umbrella Corp.", Stage::Negotiation, 75_000.0),
        Opportunity::new("Stark Industries", Stage::ClosedWon, 150_000.0),
    ])
    .expect("demo records should seed")
}

fn names(store: &EntityStore<Opportunity>) -> Vec<&str> {
    store.items().iter().map(|opp| opp.name.as_str()).collect()
}

#[test]
fn add_then_find_returns_identical_record() {
    let mut store = EntityStore::new();
    let opportunity = Opportunity::new("Acme Inc.", Stage::Proposal, 100_000.0);
    let expected = opportunity.clone();

    let id = store.add(opportunity).expect("add should succeed");

    assert_eq!(id, expected.id);
    assert_eq!(store.find_by_id(id), Some(&expected));
}

#[test]
fn add_with_empty_required_field_fails_and_leaves_store_unchanged() {
    let mut store = seeded_pipeline();
    let before = store.items().to_vec();

    let err = store
        .add(Opportunity::new("   ", Stage::Prospecting, 1_000.0))
        .expect_err("blank name should fail");

    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn size_tracks_successful_operations_only() {
    let mut store = EntityStore::new();

    let kept = store
        .add(Contact::new("John", "555-0101", "john@example.com", "customer"))
        .expect("valid contact should add");
    store
        .add(Contact::new("Mary", "555-0102", "mary@example.com", "lead"))
        .expect("valid contact should add");
    store
        .add(Contact::new("", "555-0103", "tom@example.com", "customer"))
        .expect_err("empty name should fail");
    store
        .remove_by_id(Uuid::new_v4())
        .expect_err("unknown id should fail");

    // 2 successful adds, 0 successful removes.
    assert_eq!(store.len(), 2);

    store.remove_by_id(kept).expect("known id should remove");
    assert_eq!(store.len(), 1);
}

#[test]
fn update_preserves_position_and_untouched_fields() {
    let mut store = seeded_pipeline();
    let id = store.items()[1].id;

    store
        .update(id, |opp| opp.stage = Stage::Proposal)
        .expect("update should succeed");

    let updated = store.find_by_id(id).expect("updated record should exist");
    assert_eq!(updated.name, "Globex Corp.");
    assert_eq!(updated.stage, Stage::Proposal);
    assert_eq!(updated.value, 50_000.0);
    assert_eq!(store.items()[1].id, id);
}

#[test]
fn update_unknown_id_returns_not_found() {
    let mut store = seeded_pipeline();
    let before = store.items().to_vec();
    let unknown = Uuid::new_v4();

    let err = store
        .update(unknown, |opp| opp.value = 0.0)
        .expect_err("unknown id should fail");

    assert!(matches!(err, StoreError::NotFound { id, .. } if id == unknown));
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn update_failing_validation_is_not_partially_visible() {
    let mut store = seeded_pipeline();
    let id = store.items()[0].id;

    let err = store
        .update(id, |opp| {
            opp.name.clear();
            opp.value = 0.0;
        })
        .expect_err("clearing the name should fail validation");

    assert!(matches!(err, StoreError::Validation(_)));
    let untouched = store.find_by_id(id).expect("record should survive");
    assert_eq!(untouched.name, "Acme Inc.");
    assert_eq!(untouched.value, 100_000.0);
}

#[test]
fn remove_by_id_then_find_is_empty_and_second_remove_fails() {
    let mut store = seeded_pipeline();
    let id = store.items()[3].id;

    let removed = store.remove_by_id(id).expect("first remove should succeed");
    assert_eq!(removed.name, "Umbrella Corp.");
    assert!(store.find_by_id(id).is_none());

    let err = store
        .remove_by_id(id)
        .expect_err("second remove should fail");
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn remove_at_drops_display_position_and_shifts_order() {
    let mut store = seeded_pipeline();

    let removed = store.remove_at(2).expect("position 2 should remove");

    assert_eq!(removed.name, "Initech LLC");
    assert_eq!(
        names(&store),
        vec![
            "Acme Inc.",
            "Globex Corp.",
            "Umbrella Corp.",
            "Stark Industries"
        ]
    );
}

#[test]
fn remove_at_past_end_returns_index_out_of_range() {
    let mut store = seeded_pipeline();

    let err = store.remove_at(5).expect_err("length 5 has no index 5");

    assert!(matches!(
        err,
        StoreError::IndexOutOfRange { index: 5, len: 5, .. }
    ));
    assert_eq!(store.len(), 5);
}

#[test]
fn seeding_rejects_invalid_records() {
    let result = EntityStore::seeded(vec![
        Opportunity::new("Acme Inc.", Stage::Proposal, 100_000.0),
        Opportunity::new("", Stage::Prospecting, 1.0),
    ]);

    assert!(matches!(result, Err(StoreError::Validation(_))));
}
