use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use paxlist_core::FlightManifest;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/passengers", get(get_passengers))
}

/// First `flightId` in the query string. Repeats and unknown keys are ignored.
fn flight_id_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "flightId")
        .map(|(_, value)| value.as_str())
}

async fn get_passengers(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<FlightManifest>, AppError> {
    let manifest = state.manifest.get_manifest(flight_id_param(&params)).await?;

    info!(
        "Manifest served for {}: {} passengers",
        manifest.flight_id, manifest.passenger_count
    );

    Ok(Json(manifest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_flight_id_param_takes_first_value() {
        let params = pairs(&[("lang", "tr"), ("flightId", "TK1938"), ("flightId", "LH400")]);
        assert_eq!(flight_id_param(&params), Some("TK1938"));
    }

    #[test]
    fn test_flight_id_param_absent() {
        assert_eq!(flight_id_param(&pairs(&[("flight", "TK1938")])), None);
        assert_eq!(flight_id_param(&pairs(&[("flightId", "")])), Some(""));
    }
}
