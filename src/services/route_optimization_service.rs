//! Route optimization
//!
//! Orders a day's destinations to cut down travel using a greedy
//! nearest-neighbor heuristic over great-circle distances. This is
//! intentionally not an exact solver; per-day stop counts stay small
//! (six at most) so the O(n^2) walk is plenty.
//!
//! Two distinct modes exist and must stay separate:
//! - whole-day ordering used while generating a fresh itinerary, and
//! - zone-grouped ordering used when materializing or recalculating a
//!   persisted itinerary's items (nearest-neighbor inside each zone group,
//!   groups concatenated in first-seen order).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::geo::haversine_km;
use crate::services::scoring_service::ScoredDestination;

/// A destination placed on a day's route. Every stop after the first knows
/// how far it is from the previous one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutedStop {
    pub destination: ScoredDestination,
    pub distance_from_prev_km: Option<f64>,
}

pub struct RouteOptimizer;

impl RouteOptimizer {
    /// Whole-day mode: start from the first destination in packing order,
    /// then repeatedly append the closest remaining one. Ties go to the
    /// earliest remaining element (first minimum wins), which keeps the
    /// result deterministic.
    pub fn optimize_route(stops: Vec<ScoredDestination>) -> Vec<RoutedStop> {
        let ordered = Self::nearest_neighbor(stops);

        let mut routed: Vec<RoutedStop> = Vec::with_capacity(ordered.len());
        for destination in ordered {
            let distance = routed.last().map(|prev| {
                haversine_km(
                    prev.destination.destination.coordinates,
                    destination.destination.coordinates,
                )
            });
            routed.push(RoutedStop {
                destination,
                distance_from_prev_km: distance,
            });
        }
        routed
    }

    /// Zone-grouped mode: nearest-neighbor runs independently within each
    /// zone group, and the groups are concatenated in the order their zones
    /// first appear. Distances are not attached here; the itinerary item
    /// builder computes them along its rolling previous location.
    pub fn optimize_zone_grouped(stops: Vec<ScoredDestination>) -> Vec<ScoredDestination> {
        let mut zone_order: Vec<Uuid> = Vec::new();
        let mut groups: Vec<Vec<ScoredDestination>> = Vec::new();
        for stop in stops {
            let zone_id = stop.destination.zone_id;
            match zone_order.iter().position(|z| *z == zone_id) {
                Some(idx) => groups[idx].push(stop),
                None => {
                    zone_order.push(zone_id);
                    groups.push(vec![stop]);
                }
            }
        }

        groups
            .into_iter()
            .flat_map(Self::nearest_neighbor)
            .collect()
    }

    fn nearest_neighbor(stops: Vec<ScoredDestination>) -> Vec<ScoredDestination> {
        if stops.len() <= 1 {
            return stops;
        }

        let mut unvisited = stops;
        let mut route: Vec<ScoredDestination> = Vec::with_capacity(unvisited.len());
        route.push(unvisited.remove(0));

        while !unvisited.is_empty() {
            let current = route[route.len() - 1].destination.coordinates;

            let mut nearest_idx = 0;
            let mut nearest_km = f64::MAX;
            for (idx, candidate) in unvisited.iter().enumerate() {
                let km = haversine_km(current, candidate.destination.coordinates);
                if km < nearest_km {
                    nearest_km = km;
                    nearest_idx = idx;
                }
            }

            route.push(unvisited.remove(nearest_idx));
        }

        route
    }
}
