use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the planning core. Transport-rate lookups and empty
/// candidate pools never produce one of these; both degrade to defaults.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("itinerary item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("day {requested} is outside an itinerary of {total_days} days")]
    DayOutOfRange { requested: u32, total_days: u32 },

    #[error("destination catalog error: {0}")]
    Catalog(String),
}
