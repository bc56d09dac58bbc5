//! Public read-only consultation over registered properties.
//!
//! Everything leaving this module is restricted to properties in the
//! `REGISTERED` state; the filter lives here, once, not in the routing
//! layer. Storage failure detail never crosses this boundary verbatim.

use crate::core::{Property, PropertyState};
use crate::error::RegistryError;
use crate::store::{PropertyStore, UnitOfWork};
use serde::{Deserialize, Serialize};

/// Aggregate counts for the public dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub registered: usize,
    pub in_process: usize,
    pub in_notary: usize,
    pub validated: usize,
    pub rejected: usize,
}

/// The public consultation surface, borrowed from a registry.
pub struct Consultation<'a, S: PropertyStore> {
    store: &'a S,
}

impl<'a, S: PropertyStore> Consultation<'a, S> {
    pub(crate) fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Registered properties whose address contains `query`
    /// (case-insensitive), ordered by creation time.
    pub fn search_by_address(&self, query: &str) -> Result<Vec<Property>, RegistryError> {
        self.search(|property| contains_ci(&property.address, query))
    }

    /// Registered properties whose folio contains `query`
    /// (case-insensitive), ordered by creation time.
    pub fn search_by_folio(&self, query: &str) -> Result<Vec<Property>, RegistryError> {
        self.search(|property| contains_ci(&property.folio, query))
    }

    /// Aggregate counts by state. Counts are public; property contents are
    /// not, so nothing beyond numbers leaves here for unregistered states.
    pub fn statistics(&self) -> Result<Statistics, RegistryError> {
        self.store
            .read(|uow| {
                let mut stats = Statistics {
                    total: 0,
                    registered: 0,
                    in_process: 0,
                    in_notary: 0,
                    validated: 0,
                    rejected: 0,
                };
                for property in uow.properties() {
                    stats.total += 1;
                    match property.state {
                        PropertyState::InNotary => stats.in_notary += 1,
                        PropertyState::Validated => stats.validated += 1,
                        PropertyState::Registered => stats.registered += 1,
                        PropertyState::Rejected => stats.rejected += 1,
                    }
                }
                stats.in_process = stats.total - stats.registered;
                Ok(stats)
            })
            .map_err(sanitize)
    }

    fn search<F>(&self, matches: F) -> Result<Vec<Property>, RegistryError>
    where
        F: Fn(&Property) -> bool,
    {
        self.store
            .read(|uow| {
                let mut found: Vec<Property> = uow
                    .properties()
                    .into_iter()
                    .filter(|property| property.state == PropertyState::Registered)
                    .filter(|property| matches(property))
                    .cloned()
                    .collect();
                found.sort_by_key(|property| (property.created_at, property.id));
                Ok(found)
            })
            .map_err(sanitize)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Replace backend detail with a generic message on the public path.
fn sanitize(err: RegistryError) -> RegistryError {
    match err {
        RegistryError::Storage(_) => {
            RegistryError::Storage("consultation temporarily unavailable".into())
        }
        other => other,
    }
}
