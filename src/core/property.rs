//! Property aggregate and its supporting documents.
//!
//! A `Property` owns its documents and its audit trail outright: they are
//! created with it, travel with it, and are destroyed with it. There is no
//! path that removes a document or a history entry on its own.

use super::history::HistoryEntry;
use super::state::PropertyState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed tag set for supporting documents.
///
/// Serialized with the registry's wire tags (`IDENTITY_CARD`, `SITE_PLAN`,
/// `FOLIO_CERTIFICATE`, `OTHER`). Anything outside this set is rejected at
/// intake, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    IdentityCard,
    SitePlan,
    FolioCertificate,
    Other,
}

/// All document kinds the intake accepts.
pub const ALL_KINDS: [DocumentKind; 4] = [
    DocumentKind::IdentityCard,
    DocumentKind::SitePlan,
    DocumentKind::FolioCertificate,
    DocumentKind::Other,
];

impl DocumentKind {
    /// Get the kind's wire tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::IdentityCard => "IDENTITY_CARD",
            Self::SitePlan => "SITE_PLAN",
            Self::FolioCertificate => "FOLIO_CERTIFICATE",
            Self::Other => "OTHER",
        }
    }

    /// Parse a wire tag back into a kind.
    ///
    /// Returns `None` for anything outside the fixed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        ALL_KINDS.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// A supporting document attached to exactly one property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub kind: DocumentKind,
    /// Where the document bytes live; storage of the bytes themselves is a
    /// collaborator concern.
    pub url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Create a document uploaded at `now`.
    pub fn new(name: impl Into<String>, kind: DocumentKind, url: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            url,
            uploaded_at: now,
        }
    }
}

/// A property moving through the registration workflow.
///
/// Owns its documents and its ordered audit trail. `registered_at` is set
/// the first time the property enters [`PropertyState::Registered`] and is
/// never cleared afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub address: String,
    /// External land-registry identifier; globally unique.
    pub folio: String,
    pub owner_id: String,
    pub owner_name: String,
    pub description: Option<String>,
    pub state: PropertyState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub registered_at: Option<DateTime<Utc>>,
    pub documents: Vec<Document>,
    pub history: Vec<HistoryEntry>,
}

impl Property {
    /// Create a property in the intake state with no documents or history.
    ///
    /// Intake attaches documents and records the creation history entry
    /// before anything is committed.
    pub fn new(
        address: impl Into<String>,
        folio: impl Into<String>,
        owner_id: impl Into<String>,
        owner_name: impl Into<String>,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            address: address.into(),
            folio: folio.into(),
            owner_id: owner_id.into(),
            owner_name: owner_name.into(),
            description,
            state: PropertyState::InNotary,
            created_at: now,
            updated_at: now,
            registered_at: None,
            documents: Vec::new(),
            history: Vec::new(),
        }
    }
}
