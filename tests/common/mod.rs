//! Shared fixtures for the integration tests: a small two-zone city
//! catalog and builders for destinations and preferences.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use tripforge::models::destination::{
    ActivityEntry, Coordinates, Destination, PriceRange, TicketVariant,
};
use tripforge::models::preferences::{Pace, Priority, TransportPreference, TripPreferences};
use tripforge::providers::memory::{InMemoryCatalog, NoRates, StaticPopularity};
use tripforge::services::itinerary_generation_service::ItineraryGenerator;
use tripforge::services::itinerary_mutation_service::ItineraryMutator;
use tripforge::services::scoring_service::ScoringEngine;
use tripforge::services::transport_cost_service::TransportCostModel;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct DestinationBuilder {
    destination: Destination,
}

impl DestinationBuilder {
    pub fn new(name: &str, city_id: Uuid, zone_id: Uuid) -> Self {
        Self {
            destination: Destination {
                id: Uuid::new_v4(),
                name: name.to_string(),
                city_id,
                zone_id,
                category_id: Uuid::new_v4(),
                category_name: "Nature".to_string(),
                coordinates: Coordinates { lat: 0.0, lng: 0.0 },
                rating: 4.0,
                tickets: vec![TicketVariant {
                    name: "Entry".to_string(),
                    price: 10_000.0,
                    mandatory: true,
                }],
                best_visit_hour: Some(9),
                solo_score: 3.0,
                activities: vec![],
                food_price: PriceRange {
                    min: 20_000.0,
                    max: 40_000.0,
                },
                parking_fee: 2_000.0,
                open_time: None,
                close_time: None,
            },
        }
    }

    pub fn category(mut self, category_id: Uuid, name: &str) -> Self {
        self.destination.category_id = category_id;
        self.destination.category_name = name.to_string();
        self
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.destination.coordinates = Coordinates { lat, lng };
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.destination.rating = rating;
        self
    }

    pub fn ticket(mut self, price: f64) -> Self {
        self.destination.tickets = vec![TicketVariant {
            name: "Entry".to_string(),
            price,
            mandatory: true,
        }];
        self
    }

    pub fn photo_spot(mut self) -> Self {
        self.destination.activities.push(ActivityEntry {
            name: "viewpoint".to_string(),
            photo_spot: true,
        });
        self
    }

    pub fn build(self) -> Destination {
        self.destination
    }
}

pub fn preferences(city_id: Uuid, total_days: u32, party_size: u32) -> TripPreferences {
    TripPreferences {
        city_id,
        category_ids: vec![],
        priority: Priority::Balanced,
        pace: Pace::Normal,
        total_days,
        party_size,
        transport: TransportPreference::Car,
        budget_per_day: None,
        solo_mode: false,
    }
}

pub fn generator(
    destinations: Vec<Destination>,
    popularity: HashMap<Uuid, u64>,
) -> ItineraryGenerator {
    ItineraryGenerator::new(
        Arc::new(InMemoryCatalog::new(destinations)),
        Arc::new(StaticPopularity::new(popularity)),
        Arc::new(NoRates),
    )
}

pub fn mutator(destinations: Vec<Destination>, popularity: HashMap<Uuid, u64>) -> ItineraryMutator {
    ItineraryMutator::new(
        Arc::new(InMemoryCatalog::new(destinations)),
        Arc::new(StaticPopularity::new(popularity)),
        TransportCostModel::new(Arc::new(NoRates)),
        ScoringEngine::new(),
    )
}
