use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::preferences::VehicleType;

/// One persisted stop of an itinerary day. The persistence layer itself is
/// external; this is the shape that must round-trip losslessly through it.
///
/// `sequence_order` is unique and contiguous starting at 1 within a day.
/// `distance_from_prev_km` is `None` only when there was no previous
/// location to measure from (first stop of a day without a start location).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: Uuid,
    pub destination_id: Uuid,
    pub day_number: u32,
    pub sequence_order: u32,
    pub distance_from_prev_km: Option<f64>,
    pub transport_cost: f64,
    pub transport_mode: VehicleType,
    /// Ticket spend recorded for this stop (selected variants x party size).
    pub ticket_cost: f64,
}
