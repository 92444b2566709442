//! Itinerary mutation
//!
//! Entry points for editing a persisted itinerary: materializing day items
//! from a destination list, recalculating a day after the caller reorders
//! it, and ranking replacement suggestions for a single stop. Each
//! operation recomputes the whole day's ordered chain and hands it back in
//! one piece; callers persist it atomically so distance/cost chains never
//! end up half-updated.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PlannerError;
use crate::models::budget::ItineraryBudget;
use crate::models::destination::Coordinates;
use crate::models::itinerary::ItineraryItem;
use crate::models::preferences::{Priority, VehicleType};
use crate::providers::{CatalogQuery, DestinationCatalog, PopularityProvider};
use crate::services::budget_service::BudgetCalculator;
use crate::services::geo::haversine_km;
use crate::services::route_optimization_service::RouteOptimizer;
use crate::services::scoring_service::{
    Badge, PriceStats, ScoredDestination, ScoringEngine, WeightProfile,
};
use crate::services::transport_cost_service::TransportCostModel;

/// Lightweight ranked candidate for replacing one stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementSuggestion {
    pub destination_id: Uuid,
    pub name: String,
    pub total_score: f64,
    pub badges: Vec<Badge>,
    pub min_ticket_price: f64,
}

pub struct ItineraryMutator {
    catalog: Arc<dyn DestinationCatalog>,
    popularity: Arc<dyn PopularityProvider>,
    transport: TransportCostModel,
    scoring: ScoringEngine,
}

impl ItineraryMutator {
    pub fn new(
        catalog: Arc<dyn DestinationCatalog>,
        popularity: Arc<dyn PopularityProvider>,
        transport: TransportCostModel,
        scoring: ScoringEngine,
    ) -> Self {
        Self {
            catalog,
            popularity,
            transport,
            scoring,
        }
    }

    /// Materialize a day's items from its destination list. The list is
    /// first put through zone-grouped nearest-neighbor ordering, then
    /// flattened into items with contiguous `sequence_order` from 1. The
    /// rolling previous location starts at `start` (typically lodging) when
    /// given; the first item then carries a distance and cost from it.
    pub fn create_day_items(
        &self,
        day_number: u32,
        destinations: Vec<ScoredDestination>,
        start: Option<Coordinates>,
        party_size: u32,
        vehicle_override: Option<VehicleType>,
    ) -> Vec<ItineraryItem> {
        let ordered = RouteOptimizer::optimize_zone_grouped(destinations);

        let vehicle = vehicle_override
            .unwrap_or_else(|| TransportCostModel::vehicle_for_party(party_size));
        let mut prev = start;
        let mut items = Vec::with_capacity(ordered.len());

        for (idx, scored) in ordered.into_iter().enumerate() {
            let coordinates = scored.destination.coordinates;
            let (distance, cost) = match prev {
                Some(from) => {
                    let km = haversine_km(from, coordinates);
                    let leg = self.transport.cost(km, party_size, Some(vehicle));
                    (Some(km), leg.cost)
                }
                None => (None, 0.0),
            };

            items.push(ItineraryItem {
                id: Uuid::new_v4(),
                destination_id: scored.destination.id,
                day_number,
                sequence_order: idx as u32 + 1,
                distance_from_prev_km: distance,
                transport_cost: cost,
                transport_mode: vehicle,
                ticket_cost: scored.min_ticket_price * party_size as f64,
            });
            prev = Some(coordinates);
        }

        items
    }

    /// Rebuild a day's chain along an explicit caller-supplied item order.
    /// The order is trusted exactly; nearest-neighbor is NOT re-run here.
    /// Sequence numbers, distances and costs are recomputed along the fixed
    /// order. Any id in `ordered_ids` that does not name one of `items`
    /// fails with `ItemNotFound` and nothing is changed.
    pub fn recalculate_after_reorder(
        &self,
        items: &[ItineraryItem],
        ordered_ids: &[Uuid],
        start: Option<Coordinates>,
        party_size: u32,
        vehicle_override: Option<VehicleType>,
    ) -> Result<Vec<ItineraryItem>, PlannerError> {
        let by_id: HashMap<Uuid, &ItineraryItem> = items.iter().map(|i| (i.id, i)).collect();

        let mut chain = Vec::with_capacity(ordered_ids.len());
        for id in ordered_ids {
            let item = by_id.get(id).ok_or(PlannerError::ItemNotFound(*id))?;
            chain.push(*item);
        }

        let coordinates = self.destination_coordinates(&chain)?;
        let vehicle = vehicle_override
            .unwrap_or_else(|| TransportCostModel::vehicle_for_party(party_size));

        let mut prev = start;
        let mut recalculated = Vec::with_capacity(chain.len());
        for (idx, item) in chain.into_iter().enumerate() {
            let location = *coordinates.get(&item.destination_id).ok_or_else(|| {
                PlannerError::Catalog(format!(
                    "destination {} missing from catalog",
                    item.destination_id
                ))
            })?;

            let (distance, cost) = match prev {
                Some(from) => {
                    let km = haversine_km(from, location);
                    let leg = self.transport.cost(km, party_size, Some(vehicle));
                    (Some(km), leg.cost)
                }
                None => (None, 0.0),
            };

            recalculated.push(ItineraryItem {
                sequence_order: idx as u32 + 1,
                distance_from_prev_km: distance,
                transport_cost: cost,
                transport_mode: vehicle,
                ..item.clone()
            });
            prev = Some(location);
        }

        debug!("recalculated {} item(s) after reorder", recalculated.len());
        Ok(recalculated)
    }

    /// Rank candidates that could replace one stop: same city, the replaced
    /// destination excluded, optionally narrowed to a category. Scored with
    /// the priority's weight profile and truncated to `limit`.
    pub fn suggest_replacement(
        &self,
        city_id: Uuid,
        exclude_id: Uuid,
        category_id: Option<Uuid>,
        priority: Priority,
        solo_mode: bool,
        limit: usize,
    ) -> Result<Vec<ReplacementSuggestion>, PlannerError> {
        let query = CatalogQuery {
            city_id: Some(city_id),
            category_ids: category_id.into_iter().collect(),
            exclude_ids: vec![exclude_id],
            ..CatalogQuery::default()
        };
        let pool = self.catalog.find(&query)?;

        let ids: Vec<Uuid> = pool.iter().map(|d| d.id).collect();
        let popularity = self.popularity.usage_counts(&ids);
        let stats = PriceStats::from_destinations(&pool);
        let weights = WeightProfile::for_priority(priority, solo_mode);

        let mut scored = self
            .scoring
            .score_destinations(pool, &weights, &popularity, &stats, solo_mode);
        scored.truncate(limit);

        Ok(scored
            .into_iter()
            .map(|s| ReplacementSuggestion {
                destination_id: s.destination.id,
                name: s.destination.name.clone(),
                total_score: s.total_score,
                badges: s.badges,
                min_ticket_price: s.min_ticket_price,
            })
            .collect())
    }

    /// Zone-grouped route ordering for a persisted day, exposed for the
    /// "get optimized route" entry point.
    pub fn optimized_route(&self, stops: Vec<ScoredDestination>) -> Vec<ScoredDestination> {
        RouteOptimizer::optimize_zone_grouped(stops)
    }

    /// Budget summary over already-persisted items.
    pub fn calculate_budget_breakdown(
        &self,
        items: &[ItineraryItem],
        lodging_cost: f64,
        party_size: u32,
        total_days: u32,
    ) -> ItineraryBudget {
        BudgetCalculator::calculate_itinerary_budget(items, lodging_cost, party_size, total_days)
    }

    fn destination_coordinates(
        &self,
        items: &[&ItineraryItem],
    ) -> Result<HashMap<Uuid, Coordinates>, PlannerError> {
        let ids: Vec<Uuid> = items.iter().map(|i| i.destination_id).collect();
        let destinations = self.catalog.find(&CatalogQuery::by_ids(ids))?;
        Ok(destinations
            .into_iter()
            .map(|d| (d.id, d.coordinates))
            .collect())
    }
}
