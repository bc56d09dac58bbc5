//! Immutable audit trail entries.
//!
//! Every accepted state change, including creation, produces exactly one
//! `HistoryEntry`. Entries are append-only: nothing in the crate edits or
//! removes one, and the only deletion path is the cascade when the owning
//! property is deleted.

use super::state::PropertyState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a single state change.
///
/// `from` is `None` only for the creation entry; every later entry carries
/// the state the property held before the change.
///
/// # Example
///
/// ```rust
/// use landledger::core::{HistoryEntry, PropertyState};
/// use chrono::Utc;
///
/// let entry = HistoryEntry::creation("owner-7", "registered by owner", Utc::now());
/// assert_eq!(entry.from, None);
/// assert_eq!(entry.to, PropertyState::InNotary);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    /// State before the change; `None` only on the creation entry.
    pub from: Option<PropertyState>,
    /// State after the change.
    pub to: PropertyState,
    pub at: DateTime<Utc>,
    /// Opaque identifier of the acting user.
    pub actor: String,
    pub notes: String,
}

impl HistoryEntry {
    /// Build the creation entry: no previous state, lands in the intake
    /// state.
    pub fn creation(actor: impl Into<String>, notes: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            from: None,
            to: PropertyState::InNotary,
            at,
            actor: actor.into(),
            notes: notes.into(),
        }
    }

    /// Build the entry for an accepted transition.
    pub fn transition(
        from: PropertyState,
        to: PropertyState,
        actor: impl Into<String>,
        notes: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            from: Some(from),
            to,
            at,
            actor: actor.into(),
            notes: notes.into(),
        }
    }
}

/// The sequence of states a trail walked through, oldest first.
///
/// The first element is the state of the creation entry.
pub fn trail_path(entries: &[HistoryEntry]) -> Vec<PropertyState> {
    entries.iter().map(|entry| entry.to).collect()
}

/// Check that a trail is a legal walk over the transition table.
///
/// A valid trail is non-empty, starts with the creation entry
/// (`from = None`, `to = IN_NOTARY`), and every later entry both continues
/// from its predecessor and takes an edge the table allows.
pub fn is_valid_trail(entries: &[HistoryEntry]) -> bool {
    let Some(first) = entries.first() else {
        return false;
    };
    if first.from.is_some() || first.to != PropertyState::InNotary {
        return false;
    }

    entries.windows(2).all(|pair| {
        let (prev, next) = (&pair[0], &pair[1]);
        next.from == Some(prev.to) && prev.to.allows(next.to)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(states: &[PropertyState]) -> Vec<HistoryEntry> {
        let now = Utc::now();
        let mut entries = vec![HistoryEntry::creation("owner", "registered by owner", now)];
        let mut current = PropertyState::InNotary;
        for state in states {
            entries.push(HistoryEntry::transition(current, *state, "reviewer", "", now));
            current = *state;
        }
        entries
    }

    #[test]
    fn creation_entry_has_no_previous_state() {
        let entry = HistoryEntry::creation("owner-1", "registered by owner", Utc::now());
        assert_eq!(entry.from, None);
        assert_eq!(entry.to, PropertyState::InNotary);
        assert_eq!(entry.actor, "owner-1");
    }

    #[test]
    fn trail_path_lists_states_in_order() {
        let entries = walk(&[PropertyState::Validated, PropertyState::Registered]);
        assert_eq!(
            trail_path(&entries),
            vec![
                PropertyState::InNotary,
                PropertyState::Validated,
                PropertyState::Registered,
            ]
        );
    }

    #[test]
    fn full_approval_walk_is_valid() {
        let entries = walk(&[PropertyState::Validated, PropertyState::Registered]);
        assert!(is_valid_trail(&entries));
    }

    #[test]
    fn rejection_and_resubmission_walk_is_valid() {
        let entries = walk(&[
            PropertyState::Rejected,
            PropertyState::InNotary,
            PropertyState::Validated,
        ]);
        assert!(is_valid_trail(&entries));
    }

    #[test]
    fn empty_trail_is_invalid() {
        assert!(!is_valid_trail(&[]));
    }

    #[test]
    fn trail_must_start_with_creation_entry() {
        let now = Utc::now();
        let entries = vec![HistoryEntry::transition(
            PropertyState::InNotary,
            PropertyState::Validated,
            "reviewer",
            "",
            now,
        )];
        assert!(!is_valid_trail(&entries));
    }

    #[test]
    fn trail_with_illegal_edge_is_invalid() {
        let now = Utc::now();
        let entries = vec![
            HistoryEntry::creation("owner", "registered by owner", now),
            // IN_NOTARY -> REGISTERED skips validation
            HistoryEntry::transition(
                PropertyState::InNotary,
                PropertyState::Registered,
                "reviewer",
                "",
                now,
            ),
        ];
        assert!(!is_valid_trail(&entries));
    }

    #[test]
    fn trail_with_broken_chain_is_invalid() {
        let now = Utc::now();
        let entries = vec![
            HistoryEntry::creation("owner", "registered by owner", now),
            // claims to come from VALIDATED while the trail is in IN_NOTARY
            HistoryEntry::transition(
                PropertyState::Validated,
                PropertyState::Registered,
                "reviewer",
                "",
                now,
            ),
        ];
        assert!(!is_valid_trail(&entries));
    }
}
