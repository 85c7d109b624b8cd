pub mod sdk;

pub use sdk::config::GuideConfig;
pub use sdk::guide::{DirectionsLookup, Guide, PlaceLookup, Report};
pub use sdk::routing::{Category, Coord, GuideError, GuideProvider, RemoteProvider};
