//! The durable-store seam.
//!
//! Every state-changing operation runs inside a single transaction: read,
//! validate, write, commit. The [`PropertyStore`] trait hands the caller an
//! explicit [`UnitOfWork`] scoped to one request; the implementation
//! guarantees the unit either commits whole or leaves no trace, and that
//! two writers never interleave, so a guard's "current state" read is never
//! stale at commit time.

mod memory;

pub use memory::MemoryStore;

use crate::core::Property;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the storage collaborator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The folio uniqueness constraint was violated.
    #[error("folio '{0}' is already registered")]
    DuplicateFolio(String),

    /// No property with this id.
    #[error("property {0} not found")]
    NotFound(Uuid),

    /// Backend failure (lock poisoning, timeouts); transient to callers.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// One request's view of the store: reads see committed state plus this
/// unit's own writes, and nothing escapes until the transaction commits.
pub trait UnitOfWork {
    /// Look up a property by id.
    fn property(&self, id: Uuid) -> Option<&Property>;

    /// Look up a property for mutation.
    fn property_mut(&mut self, id: Uuid) -> Option<&mut Property>;

    /// Check the folio uniqueness index.
    fn folio_taken(&self, folio: &str) -> bool;

    /// Insert a new property, enforcing folio uniqueness.
    fn insert(&mut self, property: Property) -> Result<(), StoreError>;

    /// Remove a property. Its documents and history go with it; this is
    /// the only path that deletes audit-trail entries.
    fn remove(&mut self, id: Uuid) -> Option<Property>;

    /// All properties, in no particular order.
    fn properties(&self) -> Vec<&Property>;

    /// Drop everything. Used by snapshot restore inside a transaction.
    fn clear(&mut self);
}

/// A store that executes units of work with commit-or-rollback semantics.
///
/// Implementations must serialize transactions against each other so that
/// concurrent writers re-validate against post-commit state instead of
/// overwriting each other.
pub trait PropertyStore: Send + Sync {
    /// Run `f` inside a transaction. The unit commits only when `f`
    /// returns `Ok`; any error discards every write made through the unit.
    fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut dyn UnitOfWork) -> Result<T, E>;

    /// Run `f` against a read-only view of committed state.
    fn read<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&dyn UnitOfWork) -> Result<T, E>;
}
