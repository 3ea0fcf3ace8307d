//! Fleet Core - Dataset and queries
//!
//! This crate provides the data side of the fleet dashboard:
//! - Record and summary types
//! - The static monthly dataset
//! - Listing, per-fleet summary and lookup queries

pub mod dataset;
pub mod error;
pub mod query;
pub mod record;

// Re-exports for convenient access
pub use dataset::{get_dataset, Dataset};
pub use error::FleetError;
pub use query::{find_by_id, list_all, round_half_even, summarize};
pub use record::{Month, Record, Summary};
