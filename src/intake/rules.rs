//! Validation rules for registration requests, accumulating ALL violations.

use super::request::{NewDocument, NewProperty};
use super::violations::IntakeViolation;
use crate::core::DocumentKind;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of an intake check: success, or every violation found.
pub type IntakeResult = Validation<(), NonEmptyVec<IntakeViolation>>;

fn require_non_empty(field: &'static str, value: &str) -> IntakeResult {
    if value.trim().is_empty() {
        Validation::fail(IntakeViolation::MissingField { field })
    } else {
        Validation::success(())
    }
}

/// Validate a single submitted document: a name and a known kind tag.
pub fn validate_document(document: &NewDocument) -> IntakeResult {
    let mut checks: Vec<IntakeResult> = Vec::new();

    if document.name.trim().is_empty() {
        checks.push(Validation::fail(IntakeViolation::UnnamedDocument));
    } else {
        checks.push(Validation::success(()));
    }

    if DocumentKind::from_tag(&document.kind).is_none() {
        checks.push(Validation::fail(IntakeViolation::UnknownDocumentKind {
            name: document.name.clone(),
            kind: document.kind.clone(),
        }));
    } else {
        checks.push(Validation::success(()));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Validate a full registration request.
///
/// One invalid document fails the whole intake; every violation across the
/// request and all of its documents is reported in a single pass.
pub fn validate_property(request: &NewProperty) -> IntakeResult {
    let mut checks: Vec<IntakeResult> = vec![
        require_non_empty("address", &request.address),
        require_non_empty("folio", &request.folio),
        require_non_empty("owner_id", &request.owner_id),
        require_non_empty("owner_name", &request.owner_name),
    ];

    for document in &request.documents {
        checks.push(validate_document(document));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Join violations into the single message carried by the boundary error.
pub fn describe(violations: &NonEmptyVec<IntakeViolation>) -> String {
    violations
        .iter()
        .map(|violation| violation.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
