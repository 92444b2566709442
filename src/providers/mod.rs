//! Boundary traits for the external collaborators the planning core
//! consumes: the destination catalog, the popularity aggregate, and the
//! transport rate table. Real deployments back these with a database or a
//! remote service; `memory` holds simple in-process implementations used by
//! tests and small tools.

pub mod memory;

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::PlannerError;
use crate::models::destination::Destination;
use crate::models::preferences::VehicleType;

/// Filter for a catalog lookup. Empty vectors mean "no constraint".
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub city_id: Option<Uuid>,
    pub ids: Vec<Uuid>,
    pub category_ids: Vec<Uuid>,
    pub exclude_ids: Vec<Uuid>,
    pub exclude_category_ids: Vec<Uuid>,
}

impl CatalogQuery {
    pub fn city(city_id: Uuid) -> Self {
        Self {
            city_id: Some(city_id),
            ..Self::default()
        }
    }

    pub fn by_ids(ids: Vec<Uuid>) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    pub fn matches(&self, destination: &Destination) -> bool {
        if let Some(city_id) = self.city_id {
            if destination.city_id != city_id {
                return false;
            }
        }
        if !self.ids.is_empty() && !self.ids.contains(&destination.id) {
            return false;
        }
        if !self.category_ids.is_empty() && !self.category_ids.contains(&destination.category_id) {
            return false;
        }
        if self.exclude_ids.contains(&destination.id) {
            return false;
        }
        if self.exclude_category_ids.contains(&destination.category_id) {
            return false;
        }
        true
    }
}

pub trait DestinationCatalog: Send + Sync {
    fn find(&self, query: &CatalogQuery) -> Result<Vec<Destination>, PlannerError>;
}

/// Usage counts per destination. The backing aggregate is cache-refreshed on
/// a staleness window, so values may lag; scoring tolerates that and treats
/// missing entries as zero usage.
pub trait PopularityProvider: Send + Sync {
    fn usage_counts(&self, ids: &[Uuid]) -> HashMap<Uuid, u64>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportRate {
    pub base_fare: f64,
    pub rate_per_km: f64,
}

/// Rate table lookup. `None` means no entry; the cost model falls back to
/// hard-coded defaults so a budget is always computable.
pub trait TransportRateProvider: Send + Sync {
    fn rate(&self, vehicle: VehicleType) -> Option<TransportRate>;
}
