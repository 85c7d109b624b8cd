//! The two lookups a user can run: place info and directions.
//!
//! Each lookup talks to a [`GuideProvider`], turns every adapter failure
//! into a reported message plus an absent result, and returns a structured
//! outcome that can be rendered as text or serialized.

use crate::sdk::routing::error::GuideError;
use crate::sdk::routing::service::GuideProvider;
use crate::sdk::routing::types::{Category, Coord};
use serde::Serialize;

pub const MISSING_CITY: &str = "Please enter a city name.";
pub const CITY_NOT_FOUND: &str = "City not found or API request failed.";
pub const MISSING_PLACES: &str = "Please enter both start and end places.";
pub const PLACE_NOT_FOUND: &str = "Start or end place not found or API request failed.";
pub const NO_ROUTE: &str = "Directions not found or API request failed.";

/// Outcome of a lookup together with the errors reported while running it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<T> {
    pub outcome: T,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyPlaces {
    pub category: Category,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlaceLookup {
    MissingInput,
    NotFound {
        city: String,
    },
    Found {
        city: String,
        coord: Coord,
        nearby: Vec<NearbyPlaces>,
    },
}

impl PlaceLookup {
    pub fn render(&self) -> Vec<String> {
        match self {
            PlaceLookup::MissingInput => vec![MISSING_CITY.to_string()],
            PlaceLookup::NotFound { .. } => vec![CITY_NOT_FOUND.to_string()],
            PlaceLookup::Found { city, nearby, .. } => {
                let mut lines = vec![format!("City: {city}")];
                for places in nearby {
                    lines.push(places.category.heading().to_string());
                    lines.push(places.names.join(", "));
                }
                lines
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DirectionsLookup {
    MissingInput,
    PlaceNotFound {
        start: Option<Coord>,
        end: Option<Coord>,
    },
    NoRoute {
        start: Coord,
        end: Coord,
    },
    Found {
        start: Coord,
        end: Coord,
        steps: Vec<String>,
    },
}

impl DirectionsLookup {
    pub fn render(&self) -> Vec<String> {
        match self {
            DirectionsLookup::MissingInput => vec![MISSING_PLACES.to_string()],
            DirectionsLookup::PlaceNotFound { .. } => vec![PLACE_NOT_FOUND.to_string()],
            DirectionsLookup::NoRoute { .. } => vec![NO_ROUTE.to_string()],
            DirectionsLookup::Found { steps, .. } => std::iter::once("Directions:".to_string())
                .chain(steps.iter().cloned())
                .collect(),
        }
    }
}

pub struct Guide<P> {
    provider: P,
}

impl<P: GuideProvider> Guide<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolves `city` and lists restaurants, hotels and stations around it.
    pub fn place_info(&self, city: &str) -> Report<PlaceLookup> {
        self.place_info_in(city, &Category::ALL)
    }

    /// Like [`Guide::place_info`], restricted to `categories` (queried in the given order).
    pub fn place_info_in(&self, city: &str, categories: &[Category]) -> Report<PlaceLookup> {
        let mut errors = Vec::new();
        let city = city.trim();
        if city.is_empty() {
            return Report {
                outcome: PlaceLookup::MissingInput,
                errors,
            };
        }

        let outcome = match settle(&mut errors, self.provider.geocode(city)) {
            None => PlaceLookup::NotFound {
                city: city.to_string(),
            },
            Some(coord) => {
                log::debug!("Resolved {} to {}", city, coord);
                let nearby = categories
                    .iter()
                    .map(|&category| NearbyPlaces {
                        category,
                        names: settle(&mut errors, self.provider.nearby_places(coord, category)),
                    })
                    .collect();
                PlaceLookup::Found {
                    city: city.to_string(),
                    coord,
                    nearby,
                }
            }
        };

        Report { outcome, errors }
    }

    /// Resolves both places and fetches driving directions between them.
    pub fn directions(&self, start: &str, end: &str) -> Report<DirectionsLookup> {
        let mut errors = Vec::new();
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Report {
                outcome: DirectionsLookup::MissingInput,
                errors,
            };
        }

        let start_coord = settle(&mut errors, self.provider.geocode(start));
        let end_coord = settle(&mut errors, self.provider.geocode(end));

        let outcome = match (start_coord, end_coord) {
            (Some(start), Some(end)) => {
                match settle(&mut errors, self.provider.get_directions(start, end)) {
                    Some(steps) => DirectionsLookup::Found { start, end, steps },
                    None => DirectionsLookup::NoRoute { start, end },
                }
            }
            (start, end) => DirectionsLookup::PlaceNotFound { start, end },
        };

        Report { outcome, errors }
    }
}

/// Collapses an adapter failure into its empty result, keeping the message.
fn settle<T: Default>(errors: &mut Vec<String>, result: Result<T, GuideError>) -> T {
    result.unwrap_or_else(|err| {
        errors.push(err.to_string());
        T::default()
    })
}
