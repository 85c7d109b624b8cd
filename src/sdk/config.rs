use crate::sdk::routing::error::GuideError;
use std::env;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_ORS_URL: &str = "https://api.openrouteservice.org";
pub const DEFAULT_USER_AGENT: &str = "TravelGuideApp/1.0";
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 5000;

/// Endpoints and credentials for the three services.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideConfig {
    pub ors_api_key: String,
    pub nominatim_url: String,
    pub overpass_url: String,
    pub ors_url: String,
    /// Sent as `User-Agent`; Nominatim refuses anonymous clients.
    pub user_agent: String,
    pub search_radius_m: u32,
}

impl GuideConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, GuideError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, falling back to the public
    /// endpoints for anything but the API key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GuideError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let ors_api_key =
            get("ORS_API_KEY").ok_or_else(|| GuideError::Config("ORS_API_KEY is not set".into()))?;

        let search_radius_m = match get("GUIDE_SEARCH_RADIUS_M") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                GuideError::Config(format!("GUIDE_SEARCH_RADIUS_M is not a whole number: {raw}"))
            })?,
            None => DEFAULT_SEARCH_RADIUS_M,
        };

        Ok(Self {
            ors_api_key,
            nominatim_url: get("NOMINATIM_URL").unwrap_or_else(|| DEFAULT_NOMINATIM_URL.into()),
            overpass_url: get("OVERPASS_URL").unwrap_or_else(|| DEFAULT_OVERPASS_URL.into()),
            ors_url: get("ORS_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_ORS_URL.into()),
            user_agent: get("GUIDE_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
            search_radius_m,
        })
    }
}
