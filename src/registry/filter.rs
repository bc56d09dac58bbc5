//! Worklist filters for the registry's listing operation.

use crate::core::{Property, PropertyState};

/// Which slice of the registry a caller wants to see.
///
/// `Notary` and `LandRegistry` are the two reviewer queues: everything
/// waiting on notarial review and everything waiting on the land-registry
/// office, respectively.
#[derive(Clone, Debug, PartialEq)]
pub enum Worklist {
    /// Every property, regardless of state.
    All,
    /// Properties submitted by one owner.
    Owner(String),
    /// The notarial review queue (`IN_NOTARY`).
    Notary,
    /// The land-registry office queue (`VALIDATED`).
    LandRegistry,
    /// Properties currently in one specific state.
    InState(PropertyState),
}

impl Worklist {
    /// Check whether `property` belongs on this worklist (pure).
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            Self::All => true,
            Self::Owner(owner_id) => property.owner_id == *owner_id,
            Self::Notary => property.state == PropertyState::InNotary,
            Self::LandRegistry => property.state == PropertyState::Validated,
            Self::InState(state) => property.state == *state,
        }
    }
}
