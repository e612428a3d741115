//! Government-service records and the validated catalog that holds them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A government or firm-provided procedure: what it needs, what it costs,
/// how long it takes.
///
/// Immutable reference data; all text is already locale-resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// The responsible government agency (or the firm itself).
    pub agency: String,
    pub short_description: String,
    /// Required-document labels, in presentation order.
    pub documents: Vec<String>,
    /// Condition/restriction labels, in presentation order.
    pub conditions: Vec<String>,
    /// Fee label, free text ("2,000 SAR annually").
    pub fees: String,
    /// Turnaround-time label, free text ("3-5 working days").
    pub time: String,
}

/// Immutable table of services keyed by id.
///
/// Construction rejects duplicate ids; lookups after that are infallible
/// by `Option`.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<Service>,
    by_id: HashMap<String, usize>,
}

impl ServiceCatalog {
    /// Build a catalog from a list of services.
    pub fn new(services: Vec<Service>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(services.len());
        for (index, service) in services.iter().enumerate() {
            if by_id.insert(service.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateService(service.id.clone()));
            }
        }
        Ok(Self { services, by_id })
    }

    /// Look up a service by id.
    pub fn get(&self, id: &str) -> Option<&Service> {
        self.by_id.get(id).map(|&index| &self.services[index])
    }

    /// Whether `id` names a known service.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All services in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
