//! Record and summary types
//!
//! Field names are the JSON keys served by the API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month, serialized by its three-letter short name
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All twelve months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Three-letter short name
    pub fn short_name(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// One month of performance data for one fleet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub fleet_id: String,
    pub month: Month,
    /// Percentage, 0..=100
    pub availability: u8,
    pub missions_completed: u32,
    pub maintenance_hours: u32,
}

impl Record {
    pub fn new(
        fleet_id: &str,
        month: Month,
        availability: u8,
        missions_completed: u32,
        maintenance_hours: u32,
    ) -> Self {
        debug_assert!(availability <= 100);
        Self {
            fleet_id: fleet_id.to_string(),
            month,
            availability,
            missions_completed,
            maintenance_hours,
        }
    }
}

/// Aggregate over all records of one fleet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub fleet_id: String,
    /// Mean availability, rounded to one decimal (half to even)
    pub avg_availability: f64,
    pub total_missions: u64,
    pub total_maintenance_hours: u64,
}
