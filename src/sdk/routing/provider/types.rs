use serde::Deserialize;
use std::collections::HashMap;

// --- Data Structures for parsing Nominatim, Overpass and ORS responses ---

/// Nominatim sends coordinates as strings, but numbers show up too.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Degrees {
    Number(f64),
    Text(String),
}

#[derive(Deserialize, Debug)]
pub struct NominatimPlace {
    pub lat: Degrees,
    pub lon: Degrees,
}

#[derive(Deserialize, Debug)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}
#[derive(Deserialize, Debug)]
pub struct OverpassElement {
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Deserialize, Debug)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}
#[derive(Deserialize, Debug)]
pub struct Route {
    #[serde(default)]
    pub segments: Vec<Segment>,
}
#[derive(Deserialize, Debug)]
pub struct Segment {
    #[serde(default)]
    pub steps: Vec<Step>,
}
#[derive(Deserialize, Debug)]
pub struct Step {
    pub instruction: String,
}
