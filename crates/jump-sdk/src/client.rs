//! HTTP client for the capital route endpoint.

use jump_core::Waypoint;
use serde::Deserialize;
use thiserror::Error;

/// Why a route fetch failed.
///
/// Every variant collapses to the same user-visible "no route found"
/// outcome; the variants exist for diagnostic logging only.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("waypoint {name:?} has a non-finite position")]
    NonFiniteCoordinate { name: String },
}

/// Wire shape of a successful response.
#[derive(Debug, Deserialize)]
pub struct CapitalRouteResponse {
    pub route: Vec<Waypoint>,
}

/// Client for fetching capital routes.
pub struct RouteClient {
    base_url: String,
    client: reqwest::Client,
}

impl RouteClient {
    /// Create a new route client against the given server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the ordered waypoint list from start to end.
    ///
    /// Returns the route exactly as the service ordered it. Responses
    /// with non-finite coordinates are rejected rather than repaired.
    pub async fn capital_route(&self, start: &str, end: &str) -> Result<Vec<Waypoint>, FetchError> {
        let url = format!("{}/api/capital", self.base_url);
        tracing::debug!(%start, %end, "requesting capital route");

        let response = self
            .client
            .get(&url)
            .query(&[("start", start), ("end", end)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: CapitalRouteResponse = response.json().await?;
        validate_route(&body.route)?;

        tracing::info!(waypoints = body.route.len(), "received capital route");
        Ok(body.route)
    }
}

fn validate_route(route: &[Waypoint]) -> Result<(), FetchError> {
    for wp in route {
        if !wp.has_finite_position() {
            return Err(FetchError::NonFiniteCoordinate {
                name: wp.name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_decodes_the_documented_wire_shape() {
        let json = r#"{
            "route": [
                { "id": 1, "name": "Start", "x": 0, "y": 0, "z": 0 },
                { "id": 2, "name": "End", "x": 1e16, "y": 0, "z": 0 }
            ]
        }"#;
        let response: CapitalRouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.route.len(), 2);
        assert_eq!(response.route[0].name, "Start");
        assert_eq!(response.route[1].x, 1e16);
    }

    #[test]
    fn empty_route_decodes() {
        let response: CapitalRouteResponse = serde_json::from_str(r#"{"route":[]}"#).unwrap();
        assert!(response.route.is_empty());
    }

    #[test]
    fn missing_route_field_is_malformed() {
        assert!(serde_json::from_str::<CapitalRouteResponse>("{}").is_err());
    }

    #[test]
    fn non_finite_positions_are_rejected() {
        let route = vec![Waypoint {
            id: 1,
            name: "Broken".to_string(),
            x: f64::NAN,
            y: 0.0,
            z: 0.0,
        }];
        let err = validate_route(&route).unwrap_err();
        assert!(matches!(err, FetchError::NonFiniteCoordinate { ref name } if name == "Broken"));
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\n\r\n")
                .await
                .unwrap();
        });

        let client = RouteClient::new(format!("http://{addr}"));
        let err = client.capital_route("Start", "End").await.unwrap_err();
        assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 404));
    }

    #[test]
    fn finite_positions_pass_validation() {
        let route = vec![Waypoint {
            id: 1,
            name: "Fine".to_string(),
            x: 1.0,
            y: 2.0,
            z: 3.0,
        }];
        assert!(validate_route(&route).is_ok());
    }
}
