//! Transport cost model
//!
//! Turns a leg distance and a party size into a vehicle choice and a
//! monetary cost. Fares come from the external rate table; when an entry is
//! missing or the lookup fails the hard-coded defaults below apply, so a
//! budget is always computable.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::preferences::VehicleType;
use crate::providers::{TransportRate, TransportRateProvider};

const MOTOR_DEFAULT: TransportRate = TransportRate {
    base_fare: 5000.0,
    rate_per_km: 2500.0,
};
const CAR_DEFAULT: TransportRate = TransportRate {
    base_fare: 10000.0,
    rate_per_km: 4000.0,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransportCost {
    pub vehicle: VehicleType,
    /// Rounded to the nearest currency unit.
    pub cost: f64,
    pub distance_km: f64,
    pub base_fare: f64,
    pub rate_per_km: f64,
}

#[derive(Clone)]
pub struct TransportCostModel {
    rates: Arc<dyn TransportRateProvider>,
}

impl TransportCostModel {
    pub fn new(rates: Arc<dyn TransportRateProvider>) -> Self {
        Self { rates }
    }

    /// Solo travellers ride a motorbike, everyone else takes a car.
    pub fn vehicle_for_party(party_size: u32) -> VehicleType {
        if party_size <= 1 {
            VehicleType::Motor
        } else {
            VehicleType::Car
        }
    }

    /// Cost of one leg. `vehicle_override` replaces the party-size rule,
    /// which aggregate budget calculations use to honor the caller's
    /// transport preference.
    pub fn cost(
        &self,
        distance_km: f64,
        party_size: u32,
        vehicle_override: Option<VehicleType>,
    ) -> TransportCost {
        let vehicle = vehicle_override.unwrap_or_else(|| Self::vehicle_for_party(party_size));
        let rate = self.rates.rate(vehicle).unwrap_or_else(|| {
            debug!("no rate entry for {vehicle:?}; using default fare table");
            Self::default_rate(vehicle)
        });

        let cost = (rate.base_fare + distance_km * rate.rate_per_km).round();
        TransportCost {
            vehicle,
            cost,
            distance_km,
            base_fare: rate.base_fare,
            rate_per_km: rate.rate_per_km,
        }
    }

    fn default_rate(vehicle: VehicleType) -> TransportRate {
        match vehicle {
            VehicleType::Motor => MOTOR_DEFAULT,
            VehicleType::Car => CAR_DEFAULT,
        }
    }
}
