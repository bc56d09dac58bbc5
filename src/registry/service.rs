//! The registry service: every state-changing operation as one unit of work.

use crate::consultation::Consultation;
use crate::core::{guard, Document, DocumentKind, HistoryEntry, Property, PropertyState};
use crate::error::RegistryError;
use crate::intake::{self, NewDocument, NewProperty};
use crate::registry::filter::Worklist;
use crate::snapshot::Snapshot;
use crate::store::{PropertyStore, StoreError};
use chrono::Utc;
use stillwater::validation::Validation;
use tracing::{info, warn};
use uuid::Uuid;

/// Notes recorded on the creation history entry.
const CREATION_NOTES: &str = "registered by owner";

/// The imperative shell around the workflow core.
///
/// Each operation reads current state, validates, and writes the new state
/// together with its audit entry inside a single store transaction; on any
/// failure the whole unit rolls back. The store serializes writers, so a
/// losing concurrent transition re-validates against post-commit state and
/// fails instead of overwriting.
///
/// # Example
///
/// ```rust
/// use landledger::intake::NewProperty;
/// use landledger::registry::Registry;
/// use landledger::store::MemoryStore;
/// use landledger::core::PropertyState;
///
/// let registry = Registry::new(MemoryStore::new());
/// let property = registry
///     .register_property(NewProperty {
///         address: "Av. Arce 2299".into(),
///         folio: "FR-1001".into(),
///         owner_id: "owner-1".into(),
///         owner_name: "Ana Flores".into(),
///         description: None,
///         documents: vec![],
///     })
///     .unwrap();
///
/// let property = registry
///     .attempt_transition(property.id, PropertyState::Validated, "notary-1", "in order")
///     .unwrap();
/// assert_eq!(property.state, PropertyState::Validated);
/// ```
pub struct Registry<S: PropertyStore> {
    store: S,
}

impl<S: PropertyStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a property submitted by its owner.
    ///
    /// Creates the property in `IN_NOTARY` with its documents and the
    /// creation history entry, all in one atomic unit. Fails with
    /// `Validation` if any required field or document is malformed (all
    /// violations reported together) and with `DuplicateFolio` if the
    /// folio is taken by any property in any state.
    pub fn register_property(&self, request: NewProperty) -> Result<Property, RegistryError> {
        if let Validation::Failure(violations) = intake::validate_property(&request) {
            return Err(RegistryError::Validation(intake::describe(&violations)));
        }

        self.store.transaction(|uow| {
            if uow.folio_taken(&request.folio) {
                return Err(RegistryError::DuplicateFolio {
                    folio: request.folio.clone(),
                });
            }

            let now = Utc::now();
            let mut property = Property::new(
                request.address.as_str(),
                request.folio.as_str(),
                request.owner_id.as_str(),
                request.owner_name.as_str(),
                request.description.clone(),
                now,
            );
            for document in &request.documents {
                property
                    .documents
                    .push(build_document(document, now)?);
            }
            property
                .history
                .push(HistoryEntry::creation(request.owner_id.as_str(), CREATION_NOTES, now));

            let created = property.clone();
            uow.insert(property)?;
            info!(id = %created.id, folio = %created.folio, "property registered");
            Ok(created)
        })
    }

    /// Validate and apply a state transition.
    ///
    /// The guard's check, the property mutation, and the audit append
    /// commit together or not at all. Nothing is retried here; the caller
    /// decides what to do with a refusal.
    pub fn attempt_transition(
        &self,
        id: Uuid,
        to: PropertyState,
        actor: &str,
        notes: &str,
    ) -> Result<Property, RegistryError> {
        self.store.transaction(|uow| {
            let property = uow.property_mut(id).ok_or(StoreError::NotFound(id))?;
            let from = property.state;

            let entry = guard::apply(property, to, actor, notes, Utc::now()).map_err(|err| {
                warn!(%id, %from, %to, "transition refused");
                RegistryError::from(err)
            })?;
            property.history.push(entry);

            let updated = property.clone();
            info!(%id, %from, %to, actor, "property transitioned");
            Ok(updated)
        })
    }

    /// Attach a document to an existing property.
    pub fn add_document(&self, id: Uuid, document: NewDocument) -> Result<Property, RegistryError> {
        if let Validation::Failure(violations) = intake::validate_document(&document) {
            return Err(RegistryError::Validation(intake::describe(&violations)));
        }

        self.store.transaction(|uow| {
            let property = uow.property_mut(id).ok_or(StoreError::NotFound(id))?;
            property.documents.push(build_document(&document, Utc::now())?);
            Ok(property.clone())
        })
    }

    /// Fetch a property with its documents and history.
    pub fn property(&self, id: Uuid) -> Result<Property, RegistryError> {
        self.store.read(|uow| {
            uow.property(id)
                .cloned()
                .ok_or(RegistryError::NotFound { id })
        })
    }

    /// The audit trail of a property, oldest first.
    ///
    /// An unknown id yields an empty sequence, not an error.
    pub fn history_for(&self, id: Uuid) -> Result<Vec<HistoryEntry>, RegistryError> {
        self.store.read(|uow| {
            Ok(uow
                .property(id)
                .map(|property| property.history.clone())
                .unwrap_or_default())
        })
    }

    /// Delete a property together with its documents and history.
    ///
    /// This cascade is the only path that removes audit-trail entries.
    pub fn delete_property(&self, id: Uuid) -> Result<(), RegistryError> {
        self.store.transaction(|uow| {
            uow.remove(id).ok_or(StoreError::NotFound(id))?;
            info!(%id, "property deleted");
            Ok(())
        })
    }

    /// List properties on a worklist, ordered by creation time.
    pub fn list(&self, worklist: &Worklist) -> Result<Vec<Property>, RegistryError> {
        self.store.read(|uow| {
            let mut matches: Vec<Property> = uow
                .properties()
                .into_iter()
                .filter(|property| worklist.matches(property))
                .cloned()
                .collect();
            matches.sort_by_key(|property| (property.created_at, property.id));
            Ok(matches)
        })
    }

    /// The public read-only consultation surface over this registry.
    pub fn consultation(&self) -> Consultation<'_, S> {
        Consultation::new(&self.store)
    }

    /// Export the committed registry as a snapshot.
    pub fn snapshot(&self) -> Result<Snapshot, RegistryError> {
        let mut properties: Vec<Property> = self
            .store
            .read(|uow| Ok::<_, RegistryError>(uow.properties().into_iter().cloned().collect()))?;
        properties.sort_by_key(|property| (property.created_at, property.id));
        Ok(Snapshot::capture(properties))
    }

    /// Replace the registry contents with a snapshot, atomically.
    ///
    /// Every restored property must carry a valid audit trail ending in
    /// its current state, and folio uniqueness is re-checked; one bad
    /// record rejects the whole restore.
    pub fn restore(&self, snapshot: Snapshot) -> Result<(), RegistryError> {
        self.store.transaction(|uow| {
            uow.clear();
            for property in snapshot.properties {
                let trail_ok = crate::core::is_valid_trail(&property.history)
                    && property.history.last().map(|entry| entry.to) == Some(property.state);
                if !trail_ok {
                    return Err(RegistryError::Validation(format!(
                        "property {} has a corrupt audit trail",
                        property.id
                    )));
                }
                uow.insert(property)?;
            }
            Ok(())
        })
    }
}

fn build_document(
    document: &NewDocument,
    now: chrono::DateTime<Utc>,
) -> Result<Document, RegistryError> {
    let kind = DocumentKind::from_tag(&document.kind).ok_or_else(|| {
        RegistryError::Validation(format!(
            "document '{}' has unknown kind '{}'",
            document.name, document.kind
        ))
    })?;
    Ok(Document::new(
        document.name.as_str(),
        kind,
        document.url.clone(),
        now,
    ))
}
