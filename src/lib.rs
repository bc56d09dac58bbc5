//! Landledger: a property-registration workflow core.
//!
//! Owners submit a property with supporting documents, a notarial reviewer
//! and a land-registry office move it through a fixed set of states, and a
//! public consultation surface exposes the approved records. The crate is
//! the state machine and its immutable audit trail; HTTP routing and
//! authentication are collaborators that live elsewhere.
//!
//! # Core Concepts
//!
//! - **Guard**: every state change is validated against one fixed
//!   transition table and applied together with its audit entry
//! - **Audit trail**: each property carries an append-only history of every
//!   state it has held, starting at creation
//! - **Unit of work**: each operation commits whole or not at all; writers
//!   are serialized by the store
//!
//! # Example
//!
//! ```rust
//! use landledger::core::PropertyState;
//! use landledger::intake::{NewDocument, NewProperty};
//! use landledger::registry::Registry;
//! use landledger::store::MemoryStore;
//!
//! let registry = Registry::new(MemoryStore::new());
//!
//! let property = registry
//!     .register_property(NewProperty {
//!         address: "Av. Arce 2299".into(),
//!         folio: "FR-1001".into(),
//!         owner_id: "owner-1".into(),
//!         owner_name: "Ana Flores".into(),
//!         description: None,
//!         documents: vec![NewDocument {
//!             name: "owner id card".into(),
//!             kind: "IDENTITY_CARD".into(),
//!             url: None,
//!         }],
//!     })
//!     .unwrap();
//! assert_eq!(property.state, PropertyState::InNotary);
//!
//! let property = registry
//!     .attempt_transition(property.id, PropertyState::Validated, "notary-1", "in order")
//!     .unwrap();
//! let property = registry
//!     .attempt_transition(property.id, PropertyState::Registered, "registry-1", "")
//!     .unwrap();
//!
//! assert!(property.registered_at.is_some());
//! assert_eq!(registry.consultation().search_by_folio("FR-1001").unwrap().len(), 1);
//! ```

pub mod consultation;
pub mod core;
pub mod error;
pub mod intake;
pub mod registry;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use consultation::{Consultation, Statistics};
pub use core::{Document, DocumentKind, HistoryEntry, Property, PropertyState};
pub use error::RegistryError;
pub use intake::{NewDocument, NewProperty};
pub use registry::{Registry, Worklist};
pub use snapshot::Snapshot;
pub use store::MemoryStore;
