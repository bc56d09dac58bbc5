//! Core domain types and the transition guard.
//!
//! This module contains the pure heart of the workflow:
//! - The fixed state set and transition table
//! - The property aggregate and its documents
//! - Immutable audit-trail entries
//! - The guard that validates and applies transitions
//!
//! Nothing here performs I/O; durability and serialization of operations
//! live behind the store seam.

pub mod guard;
mod history;
mod property;
pub mod state;

pub use guard::TransitionError;
pub use history::{is_valid_trail, trail_path, HistoryEntry};
pub use property::{Document, DocumentKind, Property, ALL_KINDS};
pub use state::{PropertyState, ALL_STATES, TRANSITION_TABLE};
