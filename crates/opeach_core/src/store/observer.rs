//! Store change notification contract.
//!
//! # Responsibility
//! - Give the presentation layer an explicit subscribe/unsubscribe API in
//!   place of the prototype's implicit observable-object binding.
//!
//! # Invariants
//! - Observers are notified synchronously, in registration order, after
//!   every successful mutation.
//! - Handles are store-scoped and never reused after unsubscribe.

/// Receiver for collection change events of one store.
///
/// The slice passed to `collection_changed` is the post-mutation snapshot;
/// observers must not assume it outlives the call.
pub trait StoreObserver<T>: Send + Sync {
    fn collection_changed(&self, items: &[T]);
}

/// Opaque token returned by `EntityStore::subscribe`, consumed by
/// `EntityStore::unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

impl SubscriptionHandle {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}
