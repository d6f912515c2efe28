//! Transient contact selection for group composition.
//!
//! # Invariants
//! - Selection keeps insertion order for stable picker display.
//! - A selection never holds the same ID twice.

use crate::model::EntityId;

/// Insertion-ordered set of picked contact IDs.
///
/// Lives only while a group form is open; discarded on commit or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<EntityId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`.
    ///
    /// Returns whether `id` is selected after the call. A re-selected ID
    /// moves to the end, matching pick-order display.
    pub fn toggle(&mut self, id: EntityId) -> bool {
        if let Some(position) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(position);
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns selected IDs in pick order.
    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Discards the whole selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionSet;
    use uuid::Uuid;

    #[test]
    fn toggle_flips_membership_and_keeps_pick_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let mut selection = SelectionSet::new();

        assert!(selection.toggle(a));
        assert!(selection.toggle(b));
        assert!(selection.toggle(c));
        assert_eq!(selection.ids(), &[a, b, c]);

        assert!(!selection.toggle(b));
        assert_eq!(selection.ids(), &[a, c]);

        assert!(selection.toggle(b));
        assert_eq!(selection.ids(), &[a, c, b]);
    }

    #[test]
    fn clear_discards_everything() {
        let mut selection = SelectionSet::new();
        selection.toggle(Uuid::new_v4());
        selection.toggle(Uuid::new_v4());

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }
}
