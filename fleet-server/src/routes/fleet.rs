//! Fleet data endpoints
//!
//! Each handler builds its own copy of the dataset.

use axum::{extract::Path, Json};
use fleet_core::{find_by_id, get_dataset, list_all, summarize, Record, Summary};

use crate::error::ApiError;

/// All records, original order
pub async fn get_fleet_data() -> Json<Vec<Record>> {
    let records = list_all(get_dataset());
    tracing::debug!(rows = records.len(), "serving fleet data");
    Json(records)
}

/// Per-fleet summary, sorted by fleet id
pub async fn get_fleet_summary() -> Json<Vec<Summary>> {
    let summaries = summarize(&get_dataset());
    tracing::debug!(fleets = summaries.len(), "serving fleet summary");
    Json(summaries)
}

/// Records of a single fleet
pub async fn get_single_fleet(Path(fleet_id): Path<String>) -> Result<Json<Vec<Record>>, ApiError> {
    let records = find_by_id(get_dataset(), &fleet_id).inspect_err(|e| {
        tracing::debug!("{}", e);
    })?;
    Ok(Json(records))
}
