use super::error::GuideError;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Name used for places whose data carries no `name` tag.
pub const UNNAMED: &str = "Unnamed";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `[lon, lat]`, the order routing services expect.
    pub fn lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Kinds of amenity the places lookup knows how to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurant,
    Hotel,
    Station,
}

impl Category {
    /// Every category, in the order a place lookup renders them.
    pub const ALL: [Category; 3] = [Category::Restaurant, Category::Hotel, Category::Station];

    /// Overpass tag filter selecting this category.
    pub fn tag_filter(self) -> &'static str {
        match self {
            Category::Restaurant => r#"node["amenity"="restaurant"]"#,
            Category::Hotel => r#"node["tourism"="hotel"]"#,
            Category::Station => r#"node["railway"="station"]"#,
        }
    }

    /// Heading shown above the names found for this category.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Restaurant => "Nearby Restaurants:",
            Category::Hotel => "Nearby Hotels:",
            Category::Station => "Nearby Stations:",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Hotel => "hotel",
            Category::Station => "station",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GuideError::UnknownCategory(s.to_string()))
    }
}
