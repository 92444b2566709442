use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketVariant {
    pub name: String,
    pub price: f64,
    pub mandatory: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub name: String,
    #[serde(default)]
    pub photo_spot: bool,
}

/// Inclusive monetary range, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn zero() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

/// A point of interest as returned by the destination catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: Uuid,
    pub name: String,
    pub city_id: Uuid,
    pub zone_id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub coordinates: Coordinates,
    /// 0.0 to 5.0
    pub rating: f64,
    /// At least one variant; the cheapest one drives price scoring.
    pub tickets: Vec<TicketVariant>,
    pub best_visit_hour: Option<u32>,
    /// Solo-friendliness, 0.0 to 5.0
    pub solo_score: f64,
    pub activities: Vec<ActivityEntry>,
    pub food_price: PriceRange,
    pub parking_fee: f64,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
}

impl Destination {
    /// Cheapest ticket variant price, 0.0 when no variants are recorded.
    pub fn min_ticket_price(&self) -> f64 {
        self.tickets
            .iter()
            .map(|t| t.price)
            .fold(None, |min: Option<f64>, p| {
                Some(match min {
                    Some(m) => m.min(p),
                    None => p,
                })
            })
            .unwrap_or(0.0)
    }

    pub fn has_photo_spot(&self) -> bool {
        self.activities.iter().any(|a| a.photo_spot)
    }
}
