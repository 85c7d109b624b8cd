use super::error::{decode_json, ensure_success, GuideError, Service};
use super::provider::types::DirectionsResponse;
use super::types::Coord;
use reqwest::StatusCode;
use serde_json::{json, Value};

/// ORS request body; coordinates go in `[lon, lat]` order.
pub fn request_body(start: Coord, end: Coord) -> Value {
    json!({
        "coordinates": [start.lon_lat(), end.lon_lat()],
        "format": "json"
    })
}

/// Reads the instructions of the first segment of the first route.
/// A response without routes is `Ok(None)`.
pub fn decode_response(status: StatusCode, body: &str) -> Result<Option<Vec<String>>, GuideError> {
    ensure_success(Service::Directions, status, body)?;

    let response: DirectionsResponse = decode_json(Service::Directions, body)?;
    let Some(route) = response.routes.into_iter().next() else {
        return Ok(None);
    };

    let steps = route
        .segments
        .into_iter()
        .next()
        .map(|segment| segment.steps.into_iter().map(|s| s.instruction).collect())
        .unwrap_or_default();
    Ok(Some(steps))
}
