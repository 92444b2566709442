//! Day packing
//!
//! Buckets selected destinations into trip days, keeping destinations from
//! the same zone together so each day stays geographically coherent. Zones
//! are walked in first-seen order; score order is preserved within a zone.

use std::collections::HashMap;

use log::warn;
use uuid::Uuid;

use crate::services::scoring_service::ScoredDestination;

pub struct DayPacker;

impl DayPacker {
    /// Distribute `selected` into exactly `total_days` buckets of at most
    /// `per_day` destinations each. Once every day is full the remaining
    /// destinations are dropped; overflow is not redistributed. Days that
    /// receive nothing come back as empty buckets.
    pub fn pack(
        selected: Vec<ScoredDestination>,
        total_days: u32,
        per_day: usize,
    ) -> Vec<Vec<ScoredDestination>> {
        let mut days: Vec<Vec<ScoredDestination>> = vec![Vec::new(); total_days as usize];
        if days.is_empty() || per_day == 0 {
            return days;
        }

        let mut zone_order: Vec<Uuid> = Vec::new();
        let mut zones: HashMap<Uuid, Vec<ScoredDestination>> = HashMap::new();
        for destination in selected {
            let zone_id = destination.destination.zone_id;
            if !zones.contains_key(&zone_id) {
                zone_order.push(zone_id);
            }
            zones.entry(zone_id).or_default().push(destination);
        }

        let mut ordered = Vec::new();
        for zone_id in zone_order {
            ordered.extend(zones.remove(&zone_id).unwrap_or_default());
        }

        let mut day_idx = 0;
        let mut dropped = 0usize;
        for destination in ordered {
            while day_idx < days.len() && days[day_idx].len() >= per_day {
                day_idx += 1;
            }
            if day_idx >= days.len() {
                dropped += 1;
                continue;
            }
            days[day_idx].push(destination);
        }

        if dropped > 0 {
            warn!("day packing dropped {dropped} destination(s) beyond the last day");
        }

        days
    }
}
