//! Candidate selection with fallback expansion
//!
//! Filters the catalog to the trip's city and category interests, scores the
//! candidates, and truncates to the number of destinations the trip needs
//! (pace capacity x days). When the primary pool comes up short, a fallback
//! query widens the net to other categories in the same city.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PlannerError;
use crate::models::preferences::TripPreferences;
use crate::providers::{CatalogQuery, DestinationCatalog, PopularityProvider};
use crate::services::scoring_service::{
    PriceStats, ScoredDestination, ScoringEngine, WeightProfile,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackInfo {
    pub used: bool,
    pub added_count: usize,
    pub added_categories: Vec<String>,
    pub message: Option<String>,
}

impl FallbackInfo {
    fn unused() -> Self {
        Self {
            used: false,
            added_count: 0,
            added_categories: Vec::new(),
            message: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionResult {
    pub selected: Vec<ScoredDestination>,
    pub fallback: FallbackInfo,
    pub weights: WeightProfile,
}

pub struct SelectionEngine {
    catalog: Arc<dyn DestinationCatalog>,
    popularity: Arc<dyn PopularityProvider>,
    scoring: ScoringEngine,
}

impl SelectionEngine {
    pub fn new(
        catalog: Arc<dyn DestinationCatalog>,
        popularity: Arc<dyn PopularityProvider>,
        scoring: ScoringEngine,
    ) -> Self {
        Self {
            catalog,
            popularity,
            scoring,
        }
    }

    /// Pick the top `capacity x days` destinations for the trip. An empty
    /// candidate pool is not an error; the result is simply shorter than
    /// requested and day packing produces empty days.
    pub fn select(&self, prefs: &TripPreferences) -> Result<SelectionResult, PlannerError> {
        let needed = prefs.pace.destinations_per_day() * prefs.total_days as usize;
        let weights = WeightProfile::for_priority(prefs.priority, prefs.solo_mode);

        let query = CatalogQuery {
            city_id: Some(prefs.city_id),
            category_ids: prefs.category_ids.clone(),
            ..CatalogQuery::default()
        };
        let candidates = self.catalog.find(&query)?;
        debug!(
            "primary pool: {} candidates for city {} (need {})",
            candidates.len(),
            prefs.city_id,
            needed
        );

        let mut selected = self.score(candidates, &weights, prefs.solo_mode);
        selected.truncate(needed);

        if selected.len() >= needed {
            return Ok(SelectionResult {
                selected,
                fallback: FallbackInfo::unused(),
                weights,
            });
        }

        let fallback = self.expand(&mut selected, needed, &weights, prefs)?;
        Ok(SelectionResult {
            selected,
            fallback,
            weights,
        })
    }

    /// Fallback expansion: same city, excluding what we already picked and
    /// (when the caller filtered by category) excluding those categories.
    /// Scored with the identical weight profile and appended up to `needed`.
    fn expand(
        &self,
        selected: &mut Vec<ScoredDestination>,
        needed: usize,
        weights: &WeightProfile,
        prefs: &TripPreferences,
    ) -> Result<FallbackInfo, PlannerError> {
        let shortfall = needed - selected.len();
        let query = CatalogQuery {
            city_id: Some(prefs.city_id),
            exclude_ids: selected.iter().map(|s| s.destination.id).collect(),
            exclude_category_ids: prefs.category_ids.clone(),
            ..CatalogQuery::default()
        };
        let pool = self.catalog.find(&query)?;

        if pool.is_empty() {
            debug!("fallback pool empty; proceeding with {} destinations", selected.len());
            return Ok(FallbackInfo::unused());
        }

        let mut extras = self.score(pool, weights, prefs.solo_mode);
        extras.truncate(shortfall);

        let mut added_categories: Vec<String> = Vec::new();
        for extra in &extras {
            let name = &extra.destination.category_name;
            if !added_categories.contains(name) {
                added_categories.push(name.clone());
            }
        }
        let added_count = extras.len();
        let message = format!(
            "Added {} destination(s) from other categories ({}) to fill your itinerary",
            added_count,
            added_categories.join(", ")
        );
        info!("fallback used: {message}");

        selected.extend(extras);
        Ok(FallbackInfo {
            used: true,
            added_count,
            added_categories,
            message: Some(message),
        })
    }

    fn score(
        &self,
        candidates: Vec<crate::models::destination::Destination>,
        weights: &WeightProfile,
        solo_mode: bool,
    ) -> Vec<ScoredDestination> {
        let ids: Vec<Uuid> = candidates.iter().map(|d| d.id).collect();
        let popularity: HashMap<Uuid, u64> = self.popularity.usage_counts(&ids);
        let stats = PriceStats::from_destinations(&candidates);
        self.scoring
            .score_destinations(candidates, weights, &popularity, &stats, solo_mode)
    }
}
