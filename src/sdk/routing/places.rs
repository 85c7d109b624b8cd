use super::error::{decode_json, ensure_success, GuideError, Service};
use super::provider::types::OverpassResponse;
use super::types::{Category, Coord, UNNAMED};
use reqwest::StatusCode;

/// Builds the Overpass QL query for one category around a point.
pub fn build_query(category: Category, center: Coord, radius_m: u32) -> String {
    format!(
        "[out:json];\n(\n  {}(around:{},{},{});\n);\nout body;\n",
        category.tag_filter(),
        radius_m,
        center.lat,
        center.lon
    )
}

/// Reads an Overpass response into place names, substituting `Unnamed`
/// where an element carries no name.
pub fn decode_response(status: StatusCode, body: &str) -> Result<Vec<String>, GuideError> {
    ensure_success(Service::Places, status, body)?;

    let response: OverpassResponse = decode_json(Service::Places, body)?;
    Ok(response
        .elements
        .into_iter()
        .map(|mut element| {
            element
                .tags
                .remove("name")
                .unwrap_or_else(|| UNNAMED.to_string())
        })
        .collect())
}
