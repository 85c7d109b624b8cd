pub mod directions;
pub mod error;
pub mod geocode;
pub mod places;
pub mod provider;
pub mod service;
pub mod types;

pub use error::{GuideError, Service};
pub use provider::RemoteProvider;
pub use service::GuideProvider;
pub use types::{Category, Coord, UNNAMED};
