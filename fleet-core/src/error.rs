//! Query errors

/// Error types for fleet queries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FleetError {
    #[error("Fleet not found: {fleet_id}")]
    NotFound { fleet_id: String },
}
