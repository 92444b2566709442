//! In-process provider implementations backed by plain collections.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::PlannerError;
use crate::models::destination::Destination;
use crate::models::preferences::VehicleType;
use crate::providers::{
    CatalogQuery, DestinationCatalog, PopularityProvider, TransportRate, TransportRateProvider,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    destinations: Vec<Destination>,
}

impl InMemoryCatalog {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }
}

impl DestinationCatalog for InMemoryCatalog {
    fn find(&self, query: &CatalogQuery) -> Result<Vec<Destination>, PlannerError> {
        Ok(self
            .destinations
            .iter()
            .filter(|d| query.matches(d))
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticPopularity {
    counts: HashMap<Uuid, u64>,
}

impl StaticPopularity {
    pub fn new(counts: HashMap<Uuid, u64>) -> Self {
        Self { counts }
    }
}

impl PopularityProvider for StaticPopularity {
    fn usage_counts(&self, ids: &[Uuid]) -> HashMap<Uuid, u64> {
        ids.iter()
            .filter_map(|id| self.counts.get(id).map(|count| (*id, *count)))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticRates {
    rates: HashMap<VehicleType, TransportRate>,
}

impl StaticRates {
    pub fn new(rates: HashMap<VehicleType, TransportRate>) -> Self {
        Self { rates }
    }
}

impl TransportRateProvider for StaticRates {
    fn rate(&self, vehicle: VehicleType) -> Option<TransportRate> {
        self.rates.get(&vehicle).copied()
    }
}

/// Rate provider with no entries at all; every lookup falls back to the
/// cost model's built-in defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRates;

impl TransportRateProvider for NoRates {
    fn rate(&self, _vehicle: VehicleType) -> Option<TransportRate> {
        None
    }
}
