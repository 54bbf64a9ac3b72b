//! Client configuration
//!
//! Endpoint selection and the API version pin sent with every request.

use serde::{Deserialize, Serialize};

/// API version date sent as the `version` query parameter
pub const DEFAULT_API_VERSION: &str = "2025-11-18";

/// Generation of the VPC API
pub const DEFAULT_GENERATION: u8 = 2;

/// Client configuration for one regional endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Region the client talks to (e.g., "us-south")
    pub region: String,
    /// Endpoint override; when unset the regional public endpoint is used
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API version date pin
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// API generation
    #[serde(default = "default_generation")]
    pub generation: u8,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_generation() -> u8 {
    DEFAULT_GENERATION
}

impl Config {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint: None,
            api_version: default_api_version(),
            generation: DEFAULT_GENERATION,
        }
    }

    /// Point the client at a specific endpoint (used for test servers)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Base URL for API paths, without a trailing slash
    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}.iaas.velacloud.net/v1", self.region),
        }
    }
}
