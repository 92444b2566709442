//! Destination scoring
//!
//! Ranks catalog destinations with a multi-factor score in [0, 100] driven
//! by a named weight profile, and annotates each destination with badge
//! labels. Scoring never mutates the underlying catalog record; results are
//! immutable [`ScoredDestination`] values composed from it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::destination::Destination;
use crate::models::preferences::Priority;

/// Portion of the total weight given to solo-friendliness when solo mode is
/// on; the base profile is rescaled so active weights still sum to 1.0.
const SOLO_WEIGHT: f64 = 0.2;

/// Score given to destinations whose best visit hour falls in the morning
/// window (08:00-11:00), and to everything else.
const MORNING_WINDOW: std::ops::RangeInclusive<u32> = 8..=11;
const TIME_MATCH_IN_WINDOW: f64 = 80.0;
const TIME_MATCH_OUTSIDE: f64 = 50.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightProfile {
    pub rating: f64,
    pub price: f64,
    pub popularity: f64,
    pub time_match: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solo_friendly: Option<f64>,
}

impl WeightProfile {
    /// Static per-priority weight table, keyed by the enum.
    pub fn for_priority(priority: Priority, solo_mode: bool) -> Self {
        let base = match priority {
            Priority::Balanced => Self {
                rating: 0.25,
                price: 0.25,
                popularity: 0.25,
                time_match: 0.25,
                solo_friendly: None,
            },
            Priority::Budget => Self {
                rating: 0.2,
                price: 0.5,
                popularity: 0.2,
                time_match: 0.1,
                solo_friendly: None,
            },
            Priority::Popular => Self {
                rating: 0.2,
                price: 0.2,
                popularity: 0.5,
                time_match: 0.1,
                solo_friendly: None,
            },
            Priority::Rating => Self {
                rating: 0.5,
                price: 0.2,
                popularity: 0.2,
                time_match: 0.1,
                solo_friendly: None,
            },
        };

        if solo_mode {
            base.with_solo_dimension(SOLO_WEIGHT)
        } else {
            base
        }
    }

    /// Adds the solo-friendliness dimension at weight `solo`, rescaling the
    /// other dimensions so the active weights keep summing to 1.0.
    fn with_solo_dimension(self, solo: f64) -> Self {
        let scale = 1.0 - solo;
        Self {
            rating: self.rating * scale,
            price: self.price * scale,
            popularity: self.popularity * scale,
            time_match: self.time_match * scale,
            solo_friendly: Some(solo),
        }
    }

    pub fn total(&self) -> f64 {
        self.rating + self.price + self.popularity + self.time_match
            + self.solo_friendly.unwrap_or(0.0)
    }
}

/// Min/max/range of the cheapest ticket price across a candidate set.
#[derive(Debug, Clone, Copy)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl PriceStats {
    pub fn from_destinations(destinations: &[Destination]) -> Self {
        let prices: Vec<f64> = destinations.iter().map(|d| d.min_ticket_price()).collect();
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if prices.is_empty() || max <= min {
            // All prices equal (or no candidates): range defaults to 1 so
            // price scoring never divides by zero.
            let flat = if prices.is_empty() { 0.0 } else { min };
            return Self {
                min: flat,
                max: flat,
                range: 1.0,
            };
        }
        Self {
            min,
            max,
            range: max - min,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "high rating")]
    HighRating,
    #[serde(rename = "budget")]
    Budget,
    #[serde(rename = "popular")]
    Popular,
    #[serde(rename = "solo-friendly")]
    SoloFriendly,
    #[serde(rename = "family-friendly")]
    FamilyFriendly,
    #[serde(rename = "instagrammable")]
    Instagrammable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub rating: f64,
    pub price: f64,
    pub popularity: f64,
    pub time_match: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solo_friendly: Option<f64>,
}

/// A catalog destination plus everything the scoring pass derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDestination {
    pub destination: Destination,
    /// Weighted total in [0, 100], rounded to one decimal.
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub badges: Vec<Badge>,
    pub min_ticket_price: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    /// Category whose destinations get the family-friendly badge.
    pub family_category_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a candidate set and return it sorted by descending total score.
    ///
    /// The sort is stable, so destinations with equal scores keep their
    /// input (catalog) order; that is the documented tie-break rule.
    pub fn score_destinations(
        &self,
        destinations: Vec<Destination>,
        weights: &WeightProfile,
        popularity: &HashMap<Uuid, u64>,
        stats: &PriceStats,
        solo_mode: bool,
    ) -> Vec<ScoredDestination> {
        let max_usage = popularity.values().copied().max().unwrap_or(1).max(1);

        let mut scored: Vec<ScoredDestination> = destinations
            .into_iter()
            .map(|d| self.score_one(d, weights, popularity, stats, max_usage, solo_mode))
            .collect();

        scored.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored
    }

    fn score_one(
        &self,
        destination: Destination,
        weights: &WeightProfile,
        popularity: &HashMap<Uuid, u64>,
        stats: &PriceStats,
        max_usage: u64,
        solo_mode: bool,
    ) -> ScoredDestination {
        let price = destination.min_ticket_price();
        let usage = popularity.get(&destination.id).copied().unwrap_or(0);

        let rating_score = (destination.rating / 5.0 * 100.0).clamp(0.0, 100.0);

        let price_score = if price <= 0.0 || stats.range <= 0.0 {
            100.0
        } else {
            (100.0 - (price - stats.min) / stats.range * 100.0).clamp(0.0, 100.0)
        };

        let popularity_score = (usage as f64 / max_usage as f64 * 100.0).clamp(0.0, 100.0);

        let time_match_score = match destination.best_visit_hour {
            Some(hour) if MORNING_WINDOW.contains(&hour) => TIME_MATCH_IN_WINDOW,
            _ => TIME_MATCH_OUTSIDE,
        };

        let solo_friendly_score = if solo_mode {
            Some((destination.solo_score / 5.0 * 100.0).clamp(0.0, 100.0))
        } else {
            None
        };

        let mut total = weights.rating * rating_score
            + weights.price * price_score
            + weights.popularity * popularity_score
            + weights.time_match * time_match_score;
        if let (Some(weight), Some(score)) = (weights.solo_friendly, solo_friendly_score) {
            total += weight * score;
        }
        let total_score = (total * 10.0).round() / 10.0;

        let badges = self.badges_for(&destination, price, usage, max_usage, stats, solo_mode);

        ScoredDestination {
            total_score,
            breakdown: ScoreBreakdown {
                rating: rating_score,
                price: price_score,
                popularity: popularity_score,
                time_match: time_match_score,
                solo_friendly: solo_friendly_score,
            },
            badges,
            min_ticket_price: price,
            destination,
        }
    }

    /// Independent threshold rules; any subset of badges may apply.
    fn badges_for(
        &self,
        destination: &Destination,
        price: f64,
        usage: u64,
        max_usage: u64,
        stats: &PriceStats,
        solo_mode: bool,
    ) -> Vec<Badge> {
        let mut badges = Vec::new();

        if destination.rating >= 4.5 {
            badges.push(Badge::HighRating);
        }
        if price <= 0.0 || price <= stats.min + 0.25 * stats.range {
            badges.push(Badge::Budget);
        }
        if usage as f64 >= 0.75 * max_usage as f64 && usage > 0 {
            badges.push(Badge::Popular);
        }
        if solo_mode && destination.solo_score >= 4.0 {
            badges.push(Badge::SoloFriendly);
        }
        if self.config.family_category_id == Some(destination.category_id) {
            badges.push(Badge::FamilyFriendly);
        }
        if destination.has_photo_spot() {
            badges.push(Badge::Instagrammable);
        }

        badges
    }
}
