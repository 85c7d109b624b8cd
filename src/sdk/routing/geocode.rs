use super::error::{decode_json, ensure_success, GuideError, Service};
use super::provider::types::{Degrees, NominatimPlace};
use super::types::Coord;
use reqwest::StatusCode;

/// Query parameters for a single-result Nominatim search.
pub fn search_params(place: &str) -> [(&'static str, &str); 4] {
    [
        ("q", place),
        ("format", "json"),
        ("addressdetails", "1"),
        ("limit", "1"),
    ]
}

/// Reads a Nominatim search response. An empty candidate list is `Ok(None)`.
pub fn decode_response(status: StatusCode, body: &str) -> Result<Option<Coord>, GuideError> {
    ensure_success(Service::Geocoding, status, body)?;

    let places: Vec<NominatimPlace> = decode_json(Service::Geocoding, body)?;
    let Some(first) = places.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(Coord::new(degrees(first.lat)?, degrees(first.lon)?)))
}

fn degrees(value: Degrees) -> Result<f64, GuideError> {
    match value {
        Degrees::Number(n) => Ok(n),
        Degrees::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| GuideError::InvalidCoordinate {
                service: Service::Geocoding,
                value: text,
            }),
    }
}
