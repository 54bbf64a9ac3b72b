//! HTTP plumbing for VPC API calls
//!
//! Thin wrapper over reqwest: every method sends one request with bearer
//! auth and the `version`/`generation` query pins, maps non-2xx statuses
//! to [`Error::Api`], and hands back the parsed JSON body.

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::auth::Authenticator;
use crate::config::Config;
use crate::error::{Error, Result};

/// Maximum length of a response body echoed into debug logs
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Truncate and strip a body before logging it
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..MAX_LOG_BODY_LENGTH],
            body.len()
        )
    } else {
        body.to_string()
    };
    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Error payload shape returned by the VPC API
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorEntry {
    #[serde(default)]
    message: String,
}

/// HTTP client wrapper shared by all typed operations
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: Config,
    auth: Authenticator,
}

impl HttpClient {
    pub fn new(config: Config, auth: Authenticator) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("vela-sdk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config,
            auth,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// GET a resource or collection path. Extra query pairs (e.g. `start`,
    /// `limit`) are appended after the version pins.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        self.request(Method::GET, path, query, None).await
    }

    /// POST a create request
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// PATCH a partial update
    pub async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::PATCH, path, &[], Some(body)).await
    }

    /// DELETE a resource. 202/204 bodies are empty and map to `Null`.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, &[], None).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url(), path);
        tracing::debug!("{} {}", method, url);

        let token = self.auth.get_token().await?;
        let generation = self.config.generation.to_string();

        let mut request = self
            .client
            .request(method, &url)
            .bearer_auth(token)
            .query(&[
                ("version", self.config.api_version.as_str()),
                ("generation", generation.as_str()),
            ])
            .query(query);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!("API error: {} - {}", status, sanitize_for_log(&text));
            return Err(api_error(status, &text));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Map a non-2xx response to an API error, pulling the first message out
/// of the structured error body when one is present
fn api_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.errors.into_iter().next())
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    Error::Api {
        status: status.as_u16(),
        message,
    }
}
