//! Budget calculation
//!
//! Two related operations live here. The generation-time calculator walks a
//! freshly planned itinerary and builds the full per-day cost estimate with
//! a verdict against the user's target. The persisted-itinerary calculator
//! re-aggregates costs already recorded on itinerary items.

use log::info;

use crate::models::budget::{
    BudgetBreakdown, BudgetStatus, CostSplit, DayBudget, ItineraryBudget,
};
use crate::models::destination::PriceRange;
use crate::models::itinerary::ItineraryItem;
use crate::models::preferences::TripPreferences;
use crate::services::itinerary_generation_service::PlannedDay;
use crate::services::transport_cost_service::TransportCostModel;

/// Fixed leg added to each non-empty day's transport cost, standing in for
/// the ride out from lodging.
pub const LODGING_BUFFER_KM: f64 = 10.0;

/// Flat food estimate used for persisted itineraries, per person per day.
pub const FOOD_ESTIMATE_PER_PERSON_PER_DAY: f64 = 50_000.0;

/// Spend up to this fraction of the target still counts as under budget.
const UNDER_BUDGET_RATIO: f64 = 0.8;

#[derive(Clone)]
pub struct BudgetCalculator {
    transport: TransportCostModel,
}

impl BudgetCalculator {
    pub fn new(transport: TransportCostModel) -> Self {
        Self { transport }
    }

    /// Generation-time complete budget over freshly planned days.
    pub fn calculate(&self, days: &[PlannedDay], prefs: &TripPreferences) -> BudgetBreakdown {
        let party = prefs.party_size as f64;
        let vehicle = prefs.transport.vehicle();

        let day_budgets: Vec<DayBudget> = days
            .iter()
            .map(|day| {
                let tickets: f64 = day
                    .stops
                    .iter()
                    .map(|s| s.destination.min_ticket_price * party)
                    .sum();

                let mut transport = 0.0;
                if !day.stops.is_empty() {
                    transport += self
                        .transport
                        .cost(LODGING_BUFFER_KM, prefs.party_size, Some(vehicle))
                        .cost;
                }
                for stop in &day.stops {
                    if let Some(km) = stop.distance_from_prev_km {
                        transport += self
                            .transport
                            .cost(km, prefs.party_size, Some(vehicle))
                            .cost;
                    }
                }

                let food = PriceRange {
                    min: day
                        .stops
                        .iter()
                        .map(|s| s.destination.destination.food_price.min * party)
                        .sum(),
                    max: day
                        .stops
                        .iter()
                        .map(|s| s.destination.destination.food_price.max * party)
                        .sum(),
                };

                let parking: f64 = day
                    .stops
                    .iter()
                    .map(|s| s.destination.destination.parking_fee)
                    .sum();

                let subtotal = PriceRange {
                    min: tickets + transport + food.min + parking,
                    max: tickets + transport + food.max + parking,
                };

                DayBudget {
                    day_number: day.day_number,
                    tickets,
                    transport,
                    food,
                    parking,
                    subtotal,
                }
            })
            .collect();

        let grand_total = PriceRange {
            min: day_budgets.iter().map(|d| d.subtotal.min).sum(),
            max: day_budgets.iter().map(|d| d.subtotal.max).sum(),
        };

        let (user_budget, status, tip) = match prefs.budget_per_day {
            Some(per_day) => {
                let target = per_day * party * prefs.total_days as f64;
                let average = (grand_total.min + grand_total.max) / 2.0;
                let status = classify(average, target);
                info!(
                    "budget verdict: average {average:.0} vs target {target:.0} => {status:?}"
                );
                (Some(target), Some(status), Some(tip_for(status, average, target)))
            }
            None => (None, None, None),
        };

        BudgetBreakdown {
            days: day_budgets,
            grand_total,
            user_budget,
            status,
            tip,
        }
    }

    /// Budget summary for an already-persisted itinerary: recorded transport
    /// and ticket spend, caller-supplied lodging, and a flat food estimate.
    pub fn calculate_itinerary_budget(
        items: &[ItineraryItem],
        lodging_cost: f64,
        party_size: u32,
        total_days: u32,
    ) -> ItineraryBudget {
        let transport_cost: f64 = items.iter().map(|i| i.transport_cost).sum();
        let ticket_cost: f64 = items.iter().map(|i| i.ticket_cost).sum();
        let estimated_food_cost =
            FOOD_ESTIMATE_PER_PERSON_PER_DAY * party_size as f64 * total_days as f64;
        let total_budget = transport_cost + ticket_cost + lodging_cost + estimated_food_cost;

        ItineraryBudget {
            transport_cost,
            ticket_cost,
            lodging_cost,
            estimated_food_cost,
            total_budget,
            breakdown: CostSplit {
                fixed_costs: ticket_cost + lodging_cost,
                variable_costs: transport_cost + estimated_food_cost,
            },
        }
    }
}

/// Both boundaries are inclusive: exactly 80% of target is still under
/// budget, exactly on target is still within budget.
fn classify(average: f64, target: f64) -> BudgetStatus {
    if average <= UNDER_BUDGET_RATIO * target {
        BudgetStatus::UnderBudget
    } else if average <= target {
        BudgetStatus::WithinBudget
    } else {
        BudgetStatus::OverBudget
    }
}

fn tip_for(status: BudgetStatus, average: f64, target: f64) -> String {
    match status {
        BudgetStatus::UnderBudget => format!(
            "Estimated spend of {average:.0} leaves about {:.0} of your {target:.0} budget for extras.",
            target - average
        ),
        BudgetStatus::WithinBudget => format!(
            "Estimated spend of {average:.0} fits within your {target:.0} budget.",
        ),
        BudgetStatus::OverBudget => format!(
            "Estimated spend of {average:.0} exceeds your {target:.0} budget by about {:.0}; consider swapping paid stops for free ones.",
            average - target
        ),
    }
}
