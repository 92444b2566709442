use serde::{Deserialize, Serialize};

use crate::models::destination::PriceRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    UnderBudget,
    WithinBudget,
    OverBudget,
}

/// Cost estimate for a single planned day. Food carries a range because
/// catalog food prices are ranges; everything else is a point estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayBudget {
    pub day_number: u32,
    pub tickets: f64,
    pub transport: f64,
    pub food: PriceRange,
    pub parking: f64,
    pub subtotal: PriceRange,
}

/// Full generation-time cost estimate, with a verdict against the user's
/// target when one was supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub days: Vec<DayBudget>,
    pub grand_total: PriceRange,
    /// Target for the whole trip (budget per day x party size x days).
    pub user_budget: Option<f64>,
    pub status: Option<BudgetStatus>,
    pub tip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSplit {
    /// Tickets + lodging.
    pub fixed_costs: f64,
    /// Transport + estimated food.
    pub variable_costs: f64,
}

/// Budget summary recomputed from an already-persisted itinerary's items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryBudget {
    pub transport_cost: f64,
    pub ticket_cost: f64,
    pub lodging_cost: f64,
    pub estimated_food_cost: f64,
    pub total_budget: f64,
    pub breakdown: CostSplit,
}
