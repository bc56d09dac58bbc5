//! Property lifecycle states and the fixed transition table.
//!
//! The state set and its legal transitions are domain constants, not
//! configuration. The table is a data literal so the walk invariant can be
//! checked by iterating it rather than by reading branching code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a property registration.
///
/// Serialized with the registry's wire tags (`IN_NOTARY`, `VALIDATED`,
/// `REGISTERED`, `REJECTED`).
///
/// # Example
///
/// ```rust
/// use landledger::core::PropertyState;
///
/// assert!(PropertyState::InNotary.allows(PropertyState::Validated));
/// assert!(!PropertyState::Registered.allows(PropertyState::InNotary));
/// assert!(PropertyState::Registered.is_terminal());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyState {
    /// Submitted by the owner, awaiting notarial review.
    InNotary,
    /// Approved by the notary, awaiting the land-registry office.
    Validated,
    /// Officially registered. Terminal in the current table.
    Registered,
    /// Rejected by either reviewer; may be resubmitted.
    Rejected,
}

/// All states, in workflow order.
pub const ALL_STATES: [PropertyState; 4] = [
    PropertyState::InNotary,
    PropertyState::Validated,
    PropertyState::Registered,
    PropertyState::Rejected,
];

/// The legal transition table: current state to allowed next states.
///
/// `Registered` has no outgoing edges. Changing the workflow means editing
/// this literal and nothing else.
pub const TRANSITION_TABLE: &[(PropertyState, &[PropertyState])] = &[
    (
        PropertyState::InNotary,
        &[PropertyState::Validated, PropertyState::Rejected],
    ),
    (
        PropertyState::Validated,
        &[PropertyState::Registered, PropertyState::Rejected],
    ),
    (
        PropertyState::Rejected,
        &[PropertyState::InNotary, PropertyState::Validated],
    ),
    (PropertyState::Registered, &[]),
];

impl PropertyState {
    /// Get the state's wire tag for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InNotary => "IN_NOTARY",
            Self::Validated => "VALIDATED",
            Self::Registered => "REGISTERED",
            Self::Rejected => "REJECTED",
        }
    }

    /// States reachable from this one in a single transition.
    pub fn targets(&self) -> &'static [PropertyState] {
        TRANSITION_TABLE
            .iter()
            .find(|(from, _)| from == self)
            .map(|(_, targets)| *targets)
            .unwrap_or(&[])
    }

    /// Check if the table permits a transition from this state to `to`.
    ///
    /// Pure lookup, no side effects.
    pub fn allows(&self, to: PropertyState) -> bool {
        self.targets().contains(&to)
    }

    /// Check if this state has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        self.targets().is_empty()
    }
}

impl fmt::Display for PropertyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_returns_wire_tag() {
        assert_eq!(PropertyState::InNotary.name(), "IN_NOTARY");
        assert_eq!(PropertyState::Validated.name(), "VALIDATED");
        assert_eq!(PropertyState::Registered.name(), "REGISTERED");
        assert_eq!(PropertyState::Rejected.name(), "REJECTED");
    }

    #[test]
    fn table_covers_every_state_exactly_once() {
        for state in ALL_STATES {
            let rows = TRANSITION_TABLE
                .iter()
                .filter(|(from, _)| *from == state)
                .count();
            assert_eq!(rows, 1, "state {state} must have exactly one table row");
        }
    }

    #[test]
    fn in_notary_moves_to_review_outcomes() {
        assert!(PropertyState::InNotary.allows(PropertyState::Validated));
        assert!(PropertyState::InNotary.allows(PropertyState::Rejected));
        assert!(!PropertyState::InNotary.allows(PropertyState::Registered));
        assert!(!PropertyState::InNotary.allows(PropertyState::InNotary));
    }

    #[test]
    fn validated_moves_to_registration_outcomes() {
        assert!(PropertyState::Validated.allows(PropertyState::Registered));
        assert!(PropertyState::Validated.allows(PropertyState::Rejected));
        assert!(!PropertyState::Validated.allows(PropertyState::InNotary));
    }

    #[test]
    fn rejected_allows_resubmission() {
        assert!(PropertyState::Rejected.allows(PropertyState::InNotary));
        assert!(PropertyState::Rejected.allows(PropertyState::Validated));
        assert!(!PropertyState::Rejected.allows(PropertyState::Registered));
    }

    #[test]
    fn registered_is_terminal() {
        assert!(PropertyState::Registered.is_terminal());
        assert!(PropertyState::Registered.targets().is_empty());
        for state in ALL_STATES {
            assert!(!PropertyState::Registered.allows(state));
        }
    }

    #[test]
    fn non_registered_states_are_not_terminal() {
        assert!(!PropertyState::InNotary.is_terminal());
        assert!(!PropertyState::Validated.is_terminal());
        assert!(!PropertyState::Rejected.is_terminal());
    }

    #[test]
    fn serializes_with_wire_tags() {
        let json = serde_json::to_string(&PropertyState::InNotary).unwrap();
        assert_eq!(json, "\"IN_NOTARY\"");

        let state: PropertyState = serde_json::from_str("\"REGISTERED\"").unwrap();
        assert_eq!(state, PropertyState::Registered);
    }

    #[test]
    fn all_table_targets_are_known_states() {
        for (_, targets) in TRANSITION_TABLE {
            for target in *targets {
                assert!(ALL_STATES.contains(target));
            }
        }
    }
}
