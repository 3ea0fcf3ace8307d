//! Static fleet dataset
//!
//! Three fleets over the first four months of the year. The table is built
//! fresh on every call; nothing is cached or shared between callers.

use crate::record::{Month, Record};

/// Ordered sequence of records
pub type Dataset = Vec<Record>;

/// (fleet, month, availability %, missions, maintenance hours)
const ROWS: [(&str, Month, u8, u32, u32); 12] = [
    ("F-18", Month::Jan, 85, 45, 320),
    ("F-18", Month::Feb, 87, 52, 280),
    ("F-18", Month::Mar, 82, 38, 360),
    ("F-18", Month::Apr, 88, 55, 250),
    ("CH-147", Month::Jan, 72, 28, 450),
    ("CH-147", Month::Feb, 75, 32, 420),
    ("CH-147", Month::Mar, 78, 35, 380),
    ("CH-147", Month::Apr, 80, 40, 350),
    ("CP-140", Month::Jan, 90, 62, 180),
    ("CP-140", Month::Feb, 88, 58, 210),
    ("CP-140", Month::Mar, 92, 65, 160),
    ("CP-140", Month::Apr, 91, 63, 175),
];

/// Build the dataset
pub fn get_dataset() -> Dataset {
    ROWS.iter()
        .map(|&(fleet_id, month, availability, missions, hours)| {
            Record::new(fleet_id, month, availability, missions, hours)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_dataset_shape() {
        let dataset = get_dataset();
        assert_eq!(dataset.len(), 12);

        let mut per_fleet: HashMap<&str, usize> = HashMap::new();
        for record in &dataset {
            *per_fleet.entry(record.fleet_id.as_str()).or_default() += 1;
        }
        assert_eq!(per_fleet.len(), 3);
        assert_eq!(per_fleet["F-18"], 4);
        assert_eq!(per_fleet["CH-147"], 4);
        assert_eq!(per_fleet["CP-140"], 4);
    }

    #[test]
    fn test_dataset_is_deterministic() {
        assert_eq!(get_dataset(), get_dataset());
    }

    #[test]
    fn test_availability_in_range() {
        assert!(get_dataset().iter().all(|r| r.availability <= 100));
    }

    #[test]
    fn test_first_row() {
        let dataset = get_dataset();
        assert_eq!(dataset[0], Record::new("F-18", Month::Jan, 85, 45, 320));
    }
}
