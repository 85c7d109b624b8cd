#![allow(dead_code)]

use reqwest::StatusCode;
use std::sync::Mutex;
use std::collections::HashMap;
use travel_guide::sdk::routing::{directions, geocode, places};
use travel_guide::{Category, Coord, GuideError, GuideProvider};

/// Canned HTTP exchanges, decoded by the same functions the remote provider uses.
#[derive(Default)]
pub struct StubProvider {
    geocodes: HashMap<String, (StatusCode, String)>,
    places: HashMap<Category, (StatusCode, String)>,
    route: Option<(StatusCode, String)>,
    pub place_calls: Mutex<Vec<(Coord, Category)>>,
    pub route_calls: Mutex<Vec<(Coord, Coord)>>,
}

impl StubProvider {
    pub fn with_geocode(mut self, place: &str, status: u16, body: &str) -> Self {
        self.geocodes
            .insert(place.to_string(), (status_code(status), body.to_string()));
        self
    }

    pub fn with_places(mut self, category: Category, status: u16, body: &str) -> Self {
        self.places
            .insert(category, (status_code(status), body.to_string()));
        self
    }

    pub fn with_route(mut self, status: u16, body: &str) -> Self {
        self.route = Some((status_code(status), body.to_string()));
        self
    }
}

fn status_code(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap()
}

impl GuideProvider for StubProvider {
    fn geocode(&self, place: &str) -> Result<Option<Coord>, GuideError> {
        let (status, body) = self
            .geocodes
            .get(place)
            .cloned()
            .unwrap_or((StatusCode::OK, "[]".to_string()));
        geocode::decode_response(status, &body)
    }

    fn nearby_places(&self, center: Coord, category: Category) -> Result<Vec<String>, GuideError> {
        self.place_calls.lock().unwrap().push((center, category));
        let (status, body) = self
            .places
            .get(&category)
            .cloned()
            .unwrap_or((StatusCode::OK, r#"{"elements":[]}"#.to_string()));
        places::decode_response(status, &body)
    }

    fn get_directions(&self, start: Coord, end: Coord) -> Result<Option<Vec<String>>, GuideError> {
        self.route_calls.lock().unwrap().push((start, end));
        let (status, body) = self
            .route
            .clone()
            .unwrap_or((StatusCode::OK, r#"{"routes":[]}"#.to_string()));
        directions::decode_response(status, &body)
    }
}

pub const PARIS: &str = r#"[{"lat":"48.85","lon":"2.35"}]"#;
pub const LYON: &str = r#"[{"lat":"45.76","lon":"4.84"}]"#;
pub const TWO_STEP_ROUTE: &str = r#"{"routes":[{"segments":[{"steps":[
    {"instruction":"Head north"},
    {"instruction":"Arrive at destination"}
]}]}]}"#;
