use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

// Helper structs to parse the JSON error response from ORS
#[derive(Deserialize, Debug)]
pub struct OrsErrorDetail {
    pub code: u32,
    pub message: String,
}
#[derive(Deserialize, Debug)]
pub struct OrsErrorPayload {
    pub error: OrsErrorDetail,
}

/// The external service a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Geocoding,
    Places,
    Directions,
}

impl Service {
    /// What the service was asked for, as shown in transport errors.
    pub fn subject(self) -> &'static str {
        match self {
            Service::Geocoding => "coordinates",
            Service::Places => "nearby places",
            Service::Directions => "directions",
        }
    }

    /// Name of the upstream API, used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Service::Geocoding => "Nominatim",
            Service::Places => "Overpass",
            Service::Directions => "OpenRouteService",
        }
    }

    /// How the service is named in decode errors.
    pub fn api_name(self) -> &'static str {
        match self {
            Service::Geocoding => "coordinates API",
            Service::Places => "Overpass API",
            Service::Directions => "OpenRouteService API",
        }
    }
}

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Error fetching {}: {}", .service.subject(), .status.as_u16())]
    Transport {
        service: Service,
        status: StatusCode,
        // Structured ORS error, when the body carried one
        detail: Option<OrsErrorDetail>,
    },

    #[error("Error fetching {}: {source}", .service.subject())]
    Request {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error decoding JSON from {} response.", .service.api_name())]
    Decode {
        service: Service,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid coordinate value in {} response: {value}", .service.api_name())]
    InvalidCoordinate { service: Service, value: String },

    #[error("Unknown place category: {0}")]
    UnknownCategory(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Turns a non-success status into a transport error, keeping the ORS error
/// payload when the body carries one.
pub fn ensure_success(service: Service, status: StatusCode, body: &str) -> Result<(), GuideError> {
    if status.is_success() {
        return Ok(());
    }

    // Try to parse the structured error first
    let detail = match serde_json::from_str::<OrsErrorPayload>(body) {
        Ok(payload) => {
            log::debug!(
                "{} returned {} (code {}): {}",
                service.label(),
                status,
                payload.error.code,
                payload.error.message
            );
            Some(payload.error)
        }
        Err(_) => {
            log::debug!(
                "{} returned non-success status: {}. Unparseable Body: {}",
                service.label(),
                status,
                body
            );
            None
        }
    };

    Err(GuideError::Transport {
        service,
        status,
        detail,
    })
}

/// Parses a response body, logging the body when it is not what we expect.
pub fn decode_json<T: DeserializeOwned>(service: Service, body: &str) -> Result<T, GuideError> {
    serde_json::from_str(body).map_err(|source| {
        log::debug!(
            "Failed to parse {} response.\nError: {}. Body: {}",
            service.label(),
            source,
            body
        );
        GuideError::Decode { service, source }
    })
}
