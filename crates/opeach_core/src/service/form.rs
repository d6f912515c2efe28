//! Add-entity form lifecycle.
//!
//! # Responsibility
//! - Hold the transient draft an add form edits until Save or Cancel.
//!
//! # Invariants
//! - The store sees nothing until Save; Cancel discards all draft state.
//! - A failed Save keeps the form editing and the store unchanged.

use crate::store::{Entity, EntityStore, StoreResult};

/// Lifecycle state of one add-entity form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Editing,
}

/// Transient draft holder for the add flow. One shape serves all entity
/// kinds: Opportunity, Contact, Group and Reminder forms behave identically.
#[derive(Debug)]
pub struct EntityForm<T: Entity> {
    state: FormState,
    draft: Option<T>,
}

impl<T: Entity> Default for EntityForm<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityForm<T> {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            draft: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Opens the form with an initial draft. Reopening replaces any
    /// previous draft.
    pub fn open(&mut self, draft: T) {
        self.state = FormState::Editing;
        self.draft = Some(draft);
    }

    /// Edits the draft in place. Ignored while the form is closed.
    pub fn edit(&mut self, mutator: impl FnOnce(&mut T)) {
        if let Some(draft) = self.draft.as_mut() {
            mutator(draft);
        }
    }

    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    /// Commits the draft into `store` and closes the form.
    ///
    /// On validation failure the draft stays editable and the store is
    /// unchanged; the caller surfaces the error message.
    pub fn save(&mut self, store: &mut EntityStore<T>) -> StoreResult<crate::model::EntityId> {
        let draft = self.draft.clone().ok_or(crate::store::StoreError::Validation(
            crate::store::ValidationError {
                entity: T::kind(),
                field: "draft",
            },
        ))?;
        let id = store.add(draft)?;
        self.state = FormState::Closed;
        self.draft = None;
        Ok(id)
    }

    /// Discards the draft and closes the form.
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
        self.draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityForm, FormState};
    use crate::model::reminder::Reminder;
    use crate::store::{EntityStore, StoreError};

    #[test]
    fn save_commits_draft_and_closes_form() {
        let mut store = EntityStore::new();
        let mut form = EntityForm::new();

        form.open(Reminder::new("", 0));
        form.edit(|draft| {
            draft.title = "Call Acme".to_string();
            draft.due_at_epoch_ms = 1_700_000_000_000;
        });
        let id = form.save(&mut store).expect("save should commit");

        assert_eq!(form.state(), FormState::Closed);
        assert!(form.draft().is_none());
        assert_eq!(store.find_by_id(id).expect("saved reminder").title, "Call Acme");
    }

    #[test]
    fn cancel_discards_draft_without_touching_store() {
        let mut store: EntityStore<Reminder> = EntityStore::new();
        let mut form = EntityForm::new();

        form.open(Reminder::new("Call Acme", 1_700_000_000_000));
        form.cancel();

        assert_eq!(form.state(), FormState::Closed);
        assert!(form.draft().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn failed_save_keeps_form_editing_and_store_unchanged() {
        let mut store = EntityStore::new();
        let mut form = EntityForm::new();

        form.open(Reminder::new("", 1_700_000_000_000));
        let err = form.save(&mut store).expect_err("empty title should fail");

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(form.state(), FormState::Editing);
        assert!(form.draft().is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn save_without_open_draft_fails_closed() {
        let mut store: EntityStore<Reminder> = EntityStore::new();
        let mut form: EntityForm<Reminder> = EntityForm::new();

        form.save(&mut store)
            .expect_err("save with no draft should fail");
        assert_eq!(form.state(), FormState::Closed);
        assert!(store.is_empty());
    }
}
