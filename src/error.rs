//! Crate-level error taxonomy returned at the operation boundary.

use crate::core::{PropertyState, TransitionError};
use crate::store::StoreError;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by registry and consultation operations.
///
/// Each variant maps to a distinct caller-visible category; the HTTP glue
/// picks status codes from the variant, never from message text. None of
/// these is fatal to the process, and the core never retries on its own.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A required field was missing or empty, or a document kind was
    /// outside the fixed tag set. Carries every violation found, joined.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The folio is already taken by another property, in any state.
    #[error("folio '{folio}' is already registered")]
    DuplicateFolio { folio: String },

    /// The transition table has no edge between the two states.
    #[error("transition from '{from}' to '{to}' is not allowed")]
    InvalidTransition {
        from: PropertyState,
        to: PropertyState,
    },

    /// No property with the given id.
    #[error("property {id} not found")]
    NotFound { id: Uuid },

    /// The storage collaborator failed; treated as transient by callers.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateFolio(folio) => Self::DuplicateFolio { folio },
            StoreError::NotFound(id) => Self::NotFound { id },
            StoreError::Backend(message) => Self::Storage(message),
        }
    }
}

impl From<TransitionError> for RegistryError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::NotAllowed { from, to } => Self::InvalidTransition { from, to },
            TransitionError::MissingActor => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_boundary_categories() {
        let id = Uuid::new_v4();
        assert!(matches!(
            RegistryError::from(StoreError::NotFound(id)),
            RegistryError::NotFound { id: found } if found == id
        ));
        assert!(matches!(
            RegistryError::from(StoreError::DuplicateFolio("FR-1".into())),
            RegistryError::DuplicateFolio { folio } if folio == "FR-1"
        ));
        assert!(matches!(
            RegistryError::from(StoreError::Backend("timeout".into())),
            RegistryError::Storage(_)
        ));
    }

    #[test]
    fn guard_errors_map_to_boundary_categories() {
        let err = TransitionError::NotAllowed {
            from: PropertyState::Registered,
            to: PropertyState::InNotary,
        };
        assert!(matches!(
            RegistryError::from(err),
            RegistryError::InvalidTransition {
                from: PropertyState::Registered,
                to: PropertyState::InNotary,
            }
        ));
        assert!(matches!(
            RegistryError::from(TransitionError::MissingActor),
            RegistryError::Validation(_)
        ));
    }
}
