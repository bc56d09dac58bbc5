//! Validation of registration requests.
//!
//! Intake checks accumulate ALL violations instead of stopping at the
//! first: an owner fixing a rejected submission sees every problem in one
//! pass. The accumulated list is collapsed into a single validation error
//! at the operation boundary.

pub mod request;
pub mod rules;
pub mod violations;

pub use request::{NewDocument, NewProperty};
pub use rules::{describe, validate_document, validate_property, IntakeResult};
pub use violations::IntakeViolation;
