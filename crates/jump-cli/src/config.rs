//! CLI configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_url(env::var("ROUTE_SERVER_URL").ok())
    }

    fn from_url(url: Option<String>) -> Self {
        Self {
            server_url: url.unwrap_or_else(|| "http://localhost:8080".to_string()),
        }
    }
}
