//! Generic in-memory entity store.
//!
//! # Responsibility
//! - Hold the ordered collection for one entity kind and apply all CRUD
//!   mutations to it.
//! - Notify subscribed observers after every successful mutation.
//!
//! # Invariants
//! - Insertion order is preserved; removal shifts later elements up.
//! - Lookup is a linear scan. Collections are demo-sized (tens of items);
//!   an index would change nothing observable except ordering bugs.
//! - Failed operations leave the collection unchanged.

use crate::model::EntityId;
use crate::store::observer::{StoreObserver, SubscriptionHandle};
use crate::store::{Entity, StoreError, StoreResult};
use log::debug;
use std::sync::Arc;

/// Ordered in-memory collection of one entity kind.
///
/// Single-owner and synchronous: every mutation completes, including
/// observer notification, before control returns to the caller.
pub struct EntityStore<T: Entity> {
    items: Vec<T>,
    observers: Vec<(SubscriptionHandle, Arc<dyn StoreObserver<T>>)>,
    next_handle: u64,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            observers: Vec::new(),
            next_handle: 0,
        }
    }

    /// Creates a store pre-populated with `records`, validating each one.
    ///
    /// Seeding replaces the prototype's compiled-in sample globals: callers
    /// pass initial records as configuration. No notification fires because
    /// no observer can be subscribed yet.
    pub fn seeded(records: Vec<T>) -> StoreResult<Self> {
        for record in &records {
            record.validate()?;
        }
        debug!(
            "event=store_seed entity={} status=ok len={}",
            T::kind(),
            records.len()
        );
        Ok(Self {
            items: records,
            observers: Vec::new(),
            next_handle: 0,
        })
    }

    /// Appends one record at the end of the collection.
    ///
    /// # Contract
    /// - Fails with `Validation` when a required string field is empty,
    ///   leaving the collection unchanged.
    /// - The record's ID must be freshly generated; IDs are never reused.
    /// - Observers are notified synchronously after the append.
    pub fn add(&mut self, item: T) -> StoreResult<EntityId> {
        item.validate()?;
        let id = item.id();
        self.items.push(item);
        debug!(
            "event=store_add entity={} status=ok id={} len={}",
            T::kind(),
            id,
            self.items.len()
        );
        self.notify();
        Ok(id)
    }

    /// Replaces the record with `id` by the mutated copy `mutator` produces.
    ///
    /// # Contract
    /// - Fails with `NotFound` when `id` is absent.
    /// - The mutation is applied to a clone and re-validated before the
    ///   swap, so a failing update is never partially visible.
    /// - Position in the ordered collection is preserved.
    /// - `mutator` must not change the record's ID.
    pub fn update(&mut self, id: EntityId, mutator: impl FnOnce(&mut T)) -> StoreResult<()> {
        let position = self.position_of(id).ok_or(StoreError::NotFound {
            entity: T::kind(),
            id,
        })?;

        let mut draft = self.items[position].clone();
        mutator(&mut draft);
        draft.validate()?;

        self.items[position] = draft;
        debug!(
            "event=store_update entity={} status=ok id={}",
            T::kind(),
            id
        );
        self.notify();
        Ok(())
    }

    /// Removes the record with `id`, shifting later records up.
    ///
    /// Returns the removed record. Fails with `NotFound` when absent.
    pub fn remove_by_id(&mut self, id: EntityId) -> StoreResult<T> {
        let position = self.position_of(id).ok_or(StoreError::NotFound {
            entity: T::kind(),
            id,
        })?;
        self.remove_at(position)
    }

    /// Removes the record at `position` in display order.
    ///
    /// Display order equals storage order, so swipe-to-delete maps straight
    /// to a positional remove. Fails with `IndexOutOfRange` when
    /// `position >= len`.
    pub fn remove_at(&mut self, position: usize) -> StoreResult<T> {
        if position >= self.items.len() {
            return Err(StoreError::IndexOutOfRange {
                entity: T::kind(),
                index: position,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(position);
        debug!(
            "event=store_remove entity={} status=ok id={} len={}",
            T::kind(),
            removed.id(),
            self.items.len()
        );
        self.notify();
        Ok(removed)
    }

    /// Returns the record with `id`, or `None` when absent.
    ///
    /// Linear scan; the sole lookup strategy in this core.
    pub fn find_by_id(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns the current collection snapshot in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registers one observer, notified after every successful mutation.
    ///
    /// Observers are called in registration order with the post-mutation
    /// snapshot.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver<T>>) -> SubscriptionHandle {
        let handle = SubscriptionHandle::new(self.next_handle);
        self.next_handle += 1;
        self.observers.push((handle, observer));
        handle
    }

    /// Removes one observer registration.
    ///
    /// Returns whether a registration was removed; unknown or already
    /// removed handles return `false`.
    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != handle);
        self.observers.len() != before
    }

    fn position_of(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer.collection_changed(&self.items);
        }
    }
}
