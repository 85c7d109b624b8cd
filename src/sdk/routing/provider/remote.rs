use crate::sdk::config::GuideConfig;
use crate::sdk::routing::error::{GuideError, Service};
use crate::sdk::routing::service::GuideProvider;
use crate::sdk::routing::types::{Category, Coord};
use crate::sdk::routing::{directions, geocode, places};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;

/// Talks to the public Nominatim, Overpass and ORS endpoints.
pub struct RemoteProvider {
    client: Client,
    config: GuideConfig,
}

impl RemoteProvider {
    pub fn new(config: GuideConfig) -> Result<Self, GuideError> {
        let client = Client::builder()
            .build()
            .map_err(|e| GuideError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    fn directions_url(&self) -> String {
        format!("{}/v2/directions/driving-car", self.config.ors_url)
    }
}

/// Sends a request and hands back the status with the raw body, so the
/// decoders see exactly what came over the wire.
fn execute(service: Service, request: RequestBuilder) -> Result<(StatusCode, String), GuideError> {
    let response = request.send().map_err(|source| {
        log::debug!("Failed to send {} request: {}", service.label(), source);
        GuideError::Request { service, source }
    })?;
    let status = response.status();
    let text = response
        .text()
        .map_err(|source| GuideError::Request { service, source })?;
    Ok((status, text))
}

impl GuideProvider for RemoteProvider {
    fn geocode(&self, place: &str) -> Result<Option<Coord>, GuideError> {
        log::debug!("[PROVIDER] Calling geocode for place: \"{}\"", place);
        let request = self
            .client
            .get(&self.config.nominatim_url)
            .query(&geocode::search_params(place))
            .header(USER_AGENT, &self.config.user_agent);

        let (status, text) = execute(Service::Geocoding, request)?;
        geocode::decode_response(status, &text)
    }

    fn nearby_places(&self, center: Coord, category: Category) -> Result<Vec<String>, GuideError> {
        log::debug!(
            "[PROVIDER] Calling nearby_places for {} around {}",
            category,
            center
        );
        let query = places::build_query(category, center, self.config.search_radius_m);
        let request = self
            .client
            .get(&self.config.overpass_url)
            .query(&[("data", query.as_str())])
            .header(USER_AGENT, &self.config.user_agent);

        let (status, text) = execute(Service::Places, request)?;
        places::decode_response(status, &text)
    }

    fn get_directions(&self, start: Coord, end: Coord) -> Result<Option<Vec<String>>, GuideError> {
        log::debug!(
            "[PROVIDER] Calling get_directions for {} -> {}",
            start,
            end
        );
        let body = directions::request_body(start, end);
        let request = self
            .client
            .post(self.directions_url())
            .header(AUTHORIZATION, &self.config.ors_api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, &self.config.user_agent)
            .json(&body);

        let (status, text) = execute(Service::Directions, request)?;
        directions::decode_response(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    /// Answers a single request with `status_line` and `body`, handing back
    /// the raw request it received.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        (url, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..n]);
            if let Some(end) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&raw[..end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .map(|v| v.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);
                if raw.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8(raw).unwrap()
    }

    fn provider_for(vars: &[(&str, &str)]) -> RemoteProvider {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = GuideConfig::from_lookup(|name| {
            if name == "ORS_API_KEY" {
                return Some("KEY123".to_string());
            }
            vars.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
        })
        .unwrap();
        // Loopback servers must not be routed through a proxy from the environment
        RemoteProvider {
            client: Client::builder().no_proxy().build().unwrap(),
            config,
        }
    }

    #[test]
    fn geocode_sends_search_params_and_user_agent() {
        let (url, server) = serve_once("200 OK", r#"[{"lat":"48.85","lon":"2.35"}]"#);
        let provider = provider_for(&[("NOMINATIM_URL", url.as_str())]);

        let coord = provider.geocode("Paris").unwrap();
        let request = server.join().unwrap();

        assert_eq!(coord, Some(Coord::new(48.85, 2.35)));
        assert!(request.starts_with("GET /?q=Paris&format=json&addressdetails=1&limit=1 HTTP/1.1\r\n"));
        assert!(request
            .to_lowercase()
            .contains("user-agent: travelguideapp/1.0\r\n"));
    }

    #[test]
    fn nearby_places_sends_the_query_as_data() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"elements":[{"tags":{"name":"Hotel du Nord"}},{"tags":{}}]}"#,
        );
        let provider = provider_for(&[("OVERPASS_URL", url.as_str())]);

        let names = provider
            .nearby_places(Coord::new(48.85, 2.35), Category::Hotel)
            .unwrap();
        let request = server.join().unwrap();

        assert_eq!(names, vec!["Hotel du Nord", "Unnamed"]);
        assert!(request.starts_with("GET /?data=%5Bout%3Ajson%5D%3B"));
        assert!(request.contains("around%3A5000%2C48.85%2C2.35"));
    }

    #[test]
    fn nearby_places_reports_server_errors() {
        let (url, server) = serve_once("500 Internal Server Error", "");
        let provider = provider_for(&[("OVERPASS_URL", url.as_str())]);

        let err = provider
            .nearby_places(Coord::new(48.85, 2.35), Category::Station)
            .unwrap_err();
        server.join().unwrap();

        assert_eq!(err.to_string(), "Error fetching nearby places: 500");
    }

    #[test]
    fn directions_post_carries_key_and_lon_lat_body() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"routes":[{"segments":[{"steps":[{"instruction":"Head north"}]}]}]}"#,
        );
        let provider = provider_for(&[("ORS_URL", url.as_str())]);

        let steps = provider
            .get_directions(Coord::new(48.85, 2.35), Coord::new(45.76, 4.84))
            .unwrap();
        let request = server.join().unwrap();
        let lowered = request.to_lowercase();

        assert_eq!(steps, Some(vec!["Head north".to_string()]));
        assert!(request.starts_with("POST /v2/directions/driving-car HTTP/1.1\r\n"));
        assert!(lowered.contains("authorization: key123\r\n"));
        assert!(lowered.contains("content-type: application/json\r\n"));
        assert!(request.ends_with(
            r#"{"coordinates":[[2.35,48.85],[4.84,45.76]],"format":"json"}"#
        ));
    }

    #[test]
    fn unreachable_endpoint_is_a_request_error() {
        let url = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };
        let provider = provider_for(&[("NOMINATIM_URL", url.as_str())]);

        let err = provider.geocode("Paris").unwrap_err();
        assert!(matches!(
            err,
            GuideError::Request {
                service: Service::Geocoding,
                ..
            }
        ));
        assert!(err.to_string().starts_with("Error fetching coordinates: "));
    }

    #[test]
    fn directions_url_targets_driving_profile() {
        let provider = provider_for(&[("ORS_URL", "http://localhost:8080/ors")]);
        assert_eq!(
            provider.directions_url(),
            "http://localhost:8080/ors/v2/directions/driving-car"
        );
    }

    #[test]
    fn provider_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RemoteProvider>();
    }
}
