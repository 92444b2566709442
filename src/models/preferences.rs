use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Balanced,
    Budget,
    Popular,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    Normal,
    Packed,
}

impl Pace {
    /// Maximum number of destinations scheduled into a single day.
    pub fn destinations_per_day(&self) -> usize {
        match self {
            Pace::Relaxed => 3,
            Pace::Normal => 4,
            Pace::Packed => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportPreference {
    Motor,
    Car,
}

impl TransportPreference {
    pub fn vehicle(&self) -> VehicleType {
        match self {
            TransportPreference::Motor => VehicleType::Motor,
            TransportPreference::Car => VehicleType::Car,
        }
    }
}

/// Vehicle used for transport-cost estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleType {
    Motor,
    Car,
}

/// Everything the caller tells us about the trip. Callers are expected to
/// supply well-formed values (positive days, positive party size, valid
/// city); the core does not re-validate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPreferences {
    pub city_id: Uuid,
    /// Empty means no category filter.
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
    pub priority: Priority,
    pub pace: Pace,
    pub total_days: u32,
    pub party_size: u32,
    pub transport: TransportPreference,
    #[serde(default)]
    pub budget_per_day: Option<f64>,
    #[serde(default)]
    pub solo_mode: bool,
}
