use super::error::GuideError;
use super::types::{Category, Coord};

pub trait GuideProvider: Send + Sync {
    /// Resolves a place name to its coordinate. `Ok(None)` when nothing matched.
    fn geocode(&self, place: &str) -> Result<Option<Coord>, GuideError>;

    /// Lists the names of places of one category around a coordinate.
    fn nearby_places(&self, center: Coord, category: Category) -> Result<Vec<String>, GuideError>;

    /// Gets turn-by-turn instructions between two points. `Ok(None)` when no route exists.
    fn get_directions(&self, start: Coord, end: Coord) -> Result<Option<Vec<String>>, GuideError>;
}

