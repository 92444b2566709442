pub mod budget_service;
pub mod day_packing_service;
pub mod geo;
pub mod itinerary_generation_service;
pub mod itinerary_mutation_service;
pub mod route_optimization_service;
pub mod scoring_service;
pub mod selection_service;
pub mod transport_cost_service;
