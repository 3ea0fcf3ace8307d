//! Queries over the dataset
//!
//! - `list_all`: the rows as-is
//! - `summarize`: per-fleet aggregates
//! - `find_by_id`: rows of a single fleet

use std::collections::BTreeMap;

use crate::error::FleetError;
use crate::record::{Record, Summary};

/// Return every record in original order
pub fn list_all(dataset: Vec<Record>) -> Vec<Record> {
    dataset
}

/// Running totals for one fleet
#[derive(Default)]
struct Accumulator {
    rows: u64,
    availability: u64,
    missions: u64,
    maintenance_hours: u64,
}

/// Aggregate the dataset per fleet
///
/// Single pass into an ordered map, so the output is sorted by `fleet_id`
/// ascending and does not depend on row order. Mean availability is
/// rounded to one decimal with ties going to the even digit.
pub fn summarize(dataset: &[Record]) -> Vec<Summary> {
    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();

    for record in dataset {
        let acc = groups.entry(record.fleet_id.as_str()).or_default();
        acc.rows += 1;
        acc.availability += u64::from(record.availability);
        acc.missions += u64::from(record.missions_completed);
        acc.maintenance_hours += u64::from(record.maintenance_hours);
    }

    groups
        .into_iter()
        .map(|(fleet_id, acc)| Summary {
            fleet_id: fleet_id.to_string(),
            avg_availability: round_half_even(acc.availability as f64 / acc.rows as f64, 1),
            total_missions: acc.missions,
            total_maintenance_hours: acc.maintenance_hours,
        })
        .collect()
}

/// Return all records of `fleet_id` (exact, case-sensitive match)
pub fn find_by_id(dataset: Vec<Record>, fleet_id: &str) -> Result<Vec<Record>, FleetError> {
    let matches: Vec<Record> = dataset
        .into_iter()
        .filter(|r| r.fleet_id == fleet_id)
        .collect();

    if matches.is_empty() {
        return Err(FleetError::NotFound {
            fleet_id: fleet_id.to_string(),
        });
    }

    Ok(matches)
}

/// Round to `decimals` places, ties to even (`76.25 -> 76.2`, `76.35 -> 76.4`)
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}
