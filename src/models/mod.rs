pub mod budget;
pub mod destination;
pub mod itinerary;
pub mod preferences;
