//! In-memory reference implementation of the store seam.

use super::{PropertyStore, StoreError, UnitOfWork};
use crate::core::Property;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Committed store state: the property table plus the folio uniqueness
/// index. Cloned wholesale to form a transaction draft.
#[derive(Clone, Default)]
struct Ledger {
    properties: HashMap<Uuid, Property>,
    folios: HashMap<String, Uuid>,
}

impl UnitOfWork for Ledger {
    fn property(&self, id: Uuid) -> Option<&Property> {
        self.properties.get(&id)
    }

    fn property_mut(&mut self, id: Uuid) -> Option<&mut Property> {
        self.properties.get_mut(&id)
    }

    fn folio_taken(&self, folio: &str) -> bool {
        self.folios.contains_key(folio)
    }

    fn insert(&mut self, property: Property) -> Result<(), StoreError> {
        if self.folios.contains_key(&property.folio) {
            return Err(StoreError::DuplicateFolio(property.folio));
        }
        if self.properties.contains_key(&property.id) {
            return Err(StoreError::Backend(format!(
                "duplicate property id {}",
                property.id
            )));
        }
        self.folios.insert(property.folio.clone(), property.id);
        self.properties.insert(property.id, property);
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Option<Property> {
        let property = self.properties.remove(&id)?;
        self.folios.remove(&property.folio);
        Some(property)
    }

    fn properties(&self) -> Vec<&Property> {
        self.properties.values().collect()
    }

    fn clear(&mut self) {
        self.properties.clear();
        self.folios.clear();
    }
}

/// In-memory store with serializable transactions.
///
/// A transaction clones committed state into a draft, runs the unit of work
/// against the draft, and swaps it in only on success, all while holding
/// the exclusive lock. Writers are fully serialized and a failed unit
/// leaves no partial writes. A relational backend would provide the same
/// contract with foreign-key cascades and row locking.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Ledger>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PropertyStore for MemoryStore {
    fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut dyn UnitOfWork) -> Result<T, E>,
    {
        let mut committed = self
            .inner
            .write()
            .map_err(|_| E::from(StoreError::Backend("storage lock poisoned".into())))?;

        let mut draft = committed.clone();
        let value = f(&mut draft)?;
        *committed = draft;
        Ok(value)
    }

    fn read<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&dyn UnitOfWork) -> Result<T, E>,
    {
        let committed = self
            .inner
            .read()
            .map_err(|_| E::from(StoreError::Backend("storage lock poisoned".into())))?;
        f(&*committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn property(folio: &str) -> Property {
        Property::new("Calle Murillo 44", folio, "owner-1", "Ana Flores", None, Utc::now())
    }

    #[test]
    fn committed_transaction_is_visible_to_reads() {
        let store = MemoryStore::new();
        let created = property("FR-1");
        let id = created.id;

        store
            .transaction::<_, StoreError, _>(|uow| {
                uow.insert(created.clone())?;
                Ok(())
            })
            .unwrap();

        let found: Option<Property> = store
            .read::<_, StoreError, _>(|uow| Ok(uow.property(id).cloned()))
            .unwrap();
        assert_eq!(found.map(|p| p.folio), Some("FR-1".to_string()));
    }

    #[test]
    fn failed_transaction_rolls_back_every_write() {
        let store = MemoryStore::new();
        let first = property("FR-1");

        let result: Result<(), StoreError> = store.transaction(|uow| {
            uow.insert(first.clone())?;
            // second insert violates folio uniqueness; the first must not survive
            uow.insert(property("FR-1"))?;
            Ok(())
        });

        assert_eq!(result, Err(StoreError::DuplicateFolio("FR-1".into())));
        let count: usize = store
            .read::<_, StoreError, _>(|uow| Ok(uow.properties().len()))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn folio_index_enforces_uniqueness_across_transactions() {
        let store = MemoryStore::new();
        store
            .transaction::<_, StoreError, _>(|uow| uow.insert(property("FR-1")))
            .unwrap();

        let result: Result<(), StoreError> =
            store.transaction(|uow| uow.insert(property("FR-1")));
        assert_eq!(result, Err(StoreError::DuplicateFolio("FR-1".into())));
    }

    #[test]
    fn remove_frees_the_folio() {
        let store = MemoryStore::new();
        let created = property("FR-1");
        let id = created.id;

        store
            .transaction::<_, StoreError, _>(|uow| uow.insert(created))
            .unwrap();
        store
            .transaction::<_, StoreError, _>(|uow| {
                uow.remove(id);
                Ok(())
            })
            .unwrap();

        // folio can be reused once its property is gone
        store
            .transaction::<_, StoreError, _>(|uow| uow.insert(property("FR-1")))
            .unwrap();
    }

    #[test]
    fn draft_writes_are_invisible_until_commit() {
        let store = MemoryStore::new();
        let created = property("FR-1");

        store
            .transaction::<_, StoreError, _>(|uow| {
                uow.insert(created.clone())?;
                // the draft sees its own write
                assert!(uow.folio_taken("FR-1"));
                Ok(())
            })
            .unwrap();

        let taken: bool = store
            .read::<_, StoreError, _>(|uow| Ok(uow.folio_taken("FR-1")))
            .unwrap();
        assert!(taken);
    }
}
