//! Incoming registration requests, as handed over by the HTTP glue.

use serde::{Deserialize, Serialize};

/// A document submitted alongside a registration, kind still unparsed.
///
/// The kind stays a raw wire tag here; intake validation is the single
/// place it is checked against the fixed set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewDocument {
    pub name: String,
    pub kind: String,
    pub url: Option<String>,
}

/// An owner's request to register a property.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewProperty {
    pub address: String,
    pub folio: String,
    pub owner_id: String,
    pub owner_name: String,
    pub description: Option<String>,
    pub documents: Vec<NewDocument>,
}
