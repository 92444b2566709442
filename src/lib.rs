//! Multi-day trip planning core.
//!
//! Given a destination catalog, popularity data and a transport rate table,
//! the planner filters and ranks candidate destinations, selects a
//! trip-sized subset, distributes it across days by geographic zone, orders
//! each day's stops with a nearest-neighbor heuristic, and prices the
//! result against an optional daily budget. Editing operations on persisted
//! itineraries (reorder, replace suggestions, single-day regeneration)
//! build on the same engines.
//!
//! Persistence, HTTP routing and authentication live outside this crate;
//! they interact with it through the traits in [`providers`].

pub mod error;
pub mod models;
pub mod providers;
pub mod services;

pub use error::PlannerError;
pub use models::budget::{BudgetBreakdown, BudgetStatus, ItineraryBudget};
pub use models::destination::{Coordinates, Destination, PriceRange, TicketVariant};
pub use models::itinerary::ItineraryItem;
pub use models::preferences::{
    Pace, Priority, TransportPreference, TripPreferences, VehicleType,
};
pub use services::itinerary_generation_service::{GeneratedItinerary, ItineraryGenerator, PlannedDay};
pub use services::itinerary_mutation_service::{ItineraryMutator, ReplacementSuggestion};
pub use services::scoring_service::{Badge, ScoredDestination, WeightProfile};
