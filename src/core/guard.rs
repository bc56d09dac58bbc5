//! The state machine guard: validates and applies transitions.
//!
//! The guard is the only code that moves a property between states. It
//! checks the transition table, mutates the property in place, and hands
//! back the history entry the caller must record in the same unit of work.

use super::history::HistoryEntry;
use super::property::Property;
use super::state::PropertyState;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors produced when a transition is refused.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    /// The transition table has no edge from `from` to `to`.
    #[error("transition from '{from}' to '{to}' is not allowed")]
    NotAllowed {
        from: PropertyState,
        to: PropertyState,
    },

    /// The acting user identifier was empty.
    #[error("an acting user is required for a state transition")]
    MissingActor,
}

/// Check the transition table without touching anything.
///
/// Pure lookup; `apply` calls this before mutating.
pub fn check(from: PropertyState, to: PropertyState) -> Result<(), TransitionError> {
    if from.allows(to) {
        Ok(())
    } else {
        Err(TransitionError::NotAllowed { from, to })
    }
}

/// Validate and apply a transition to `property`.
///
/// On success the property's state and `updated_at` are set, and
/// `registered_at` is stamped whenever the property enters
/// [`PropertyState::Registered`]. Returns the [`HistoryEntry`] describing
/// the change; the caller must append it to the property's trail inside the
/// same transaction that commits the mutation.
///
/// On error the property is untouched.
///
/// # Example
///
/// ```rust
/// use landledger::core::{guard, Property, PropertyState};
/// use chrono::Utc;
///
/// let mut property = Property::new("Calle 1", "FR-9", "owner-1", "Ana", None, Utc::now());
/// let entry = guard::apply(
///     &mut property,
///     PropertyState::Validated,
///     "notary-1",
///     "documents in order",
///     Utc::now(),
/// )
/// .unwrap();
///
/// assert_eq!(property.state, PropertyState::Validated);
/// assert_eq!(entry.from, Some(PropertyState::InNotary));
/// ```
pub fn apply(
    property: &mut Property,
    to: PropertyState,
    actor: &str,
    notes: &str,
    now: DateTime<Utc>,
) -> Result<HistoryEntry, TransitionError> {
    if actor.trim().is_empty() {
        return Err(TransitionError::MissingActor);
    }
    check(property.state, to)?;

    let from = property.state;
    property.state = to;
    property.updated_at = now;
    if to == PropertyState::Registered {
        property.registered_at = Some(now);
    }

    Ok(HistoryEntry::transition(from, to, actor, notes, now))
}
