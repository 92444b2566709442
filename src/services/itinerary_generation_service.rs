//! Itinerary generation
//!
//! Orchestrates the full planning pipeline: preferences are turned into a
//! filtered, scored, trip-sized selection, packed into zone-coherent days,
//! routed with nearest-neighbor, and priced into a budget breakdown.

use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PlannerError;
use crate::models::budget::BudgetBreakdown;
use crate::models::preferences::TripPreferences;
use crate::providers::{DestinationCatalog, PopularityProvider, TransportRateProvider};
use crate::services::budget_service::BudgetCalculator;
use crate::services::day_packing_service::DayPacker;
use crate::services::route_optimization_service::{RouteOptimizer, RoutedStop};
use crate::services::scoring_service::{ScoringConfig, ScoringEngine};
use crate::services::selection_service::{FallbackInfo, SelectionEngine};
use crate::services::transport_cost_service::TransportCostModel;

/// One planned day: stops in visiting order, each stop after the first
/// carrying its distance from the previous one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedDay {
    pub day_number: u32,
    pub stops: Vec<RoutedStop>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedItinerary {
    pub days: Vec<PlannedDay>,
    pub total_destinations: usize,
    pub fallback: FallbackInfo,
    pub budget: BudgetBreakdown,
}

pub struct ItineraryGenerator {
    selection: SelectionEngine,
    budget: BudgetCalculator,
}

impl ItineraryGenerator {
    pub fn new(
        catalog: Arc<dyn DestinationCatalog>,
        popularity: Arc<dyn PopularityProvider>,
        rates: Arc<dyn TransportRateProvider>,
    ) -> Self {
        Self::with_config(catalog, popularity, rates, ScoringConfig::default())
    }

    pub fn with_config(
        catalog: Arc<dyn DestinationCatalog>,
        popularity: Arc<dyn PopularityProvider>,
        rates: Arc<dyn TransportRateProvider>,
        scoring_config: ScoringConfig,
    ) -> Self {
        let scoring = ScoringEngine::with_config(scoring_config);
        Self {
            selection: SelectionEngine::new(catalog, popularity, scoring),
            budget: BudgetCalculator::new(TransportCostModel::new(rates)),
        }
    }

    /// Generate a complete itinerary for the given preferences. Zero
    /// catalog candidates is not a failure; the result just has empty days
    /// and a zero budget.
    pub fn generate(&self, prefs: &TripPreferences) -> Result<GeneratedItinerary, PlannerError> {
        let selection = self.selection.select(prefs)?;

        let buckets = DayPacker::pack(
            selection.selected,
            prefs.total_days,
            prefs.pace.destinations_per_day(),
        );

        let days: Vec<PlannedDay> = buckets
            .into_iter()
            .enumerate()
            .map(|(idx, bucket)| PlannedDay {
                day_number: idx as u32 + 1,
                stops: RouteOptimizer::optimize_route(bucket),
            })
            .collect();

        let total_destinations = days.iter().map(|d| d.stops.len()).sum();
        let budget = self.budget.calculate(&days, prefs);

        info!(
            "generated itinerary: {total_destinations} destination(s) over {} day(s), fallback used: {}",
            prefs.total_days, selection.fallback.used
        );

        Ok(GeneratedItinerary {
            days,
            total_destinations,
            fallback: selection.fallback,
            budget,
        })
    }

    /// Regenerate a single day by re-running the whole pipeline and pulling
    /// out the requested day. `exclude_ids` is accepted on this entry point
    /// but is not applied to the re-run; the pipeline sees the full catalog
    /// pool again.
    pub fn regenerate_day(
        &self,
        prefs: &TripPreferences,
        day_number: u32,
        exclude_ids: &[Uuid],
    ) -> Result<PlannedDay, PlannerError> {
        let _ = exclude_ids;
        let itinerary = self.generate(prefs)?;
        itinerary
            .days
            .into_iter()
            .find(|d| d.day_number == day_number)
            .ok_or(PlannerError::DayOutOfRange {
                requested: day_number,
                total_days: prefs.total_days,
            })
    }
}
