//! Authentication
//!
//! Bearer-token auth against the VPC API. Callers either hand the client
//! a ready-made token (the engine's opaque session handle) or an API key
//! that is exchanged for a short-lived token at an identity endpoint and
//! cached until shortly before expiry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::error::{Error, Result};

/// Refresh tokens this much before they actually expire so an in-flight
/// request never carries a token at the edge of its lifetime
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Default token TTL when the identity endpoint does not report one
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// How the client authenticates
#[derive(Clone)]
enum Credentials {
    /// Ready-made bearer token supplied by the caller
    BearerToken(String),
    /// API key exchanged for tokens at an identity endpoint
    ApiKey { key: String, token_url: String },
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Token source with caching
#[derive(Clone)]
pub struct Authenticator {
    credentials: Credentials,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
    http: reqwest::Client,
}

impl Authenticator {
    /// Use a token the caller already holds
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::BearerToken(token.into()),
            token_cache: Arc::new(RwLock::new(None)),
            http: reqwest::Client::new(),
        }
    }

    /// Exchange an API key for tokens at the given identity endpoint
    pub fn with_api_key(key: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::ApiKey {
                key: key.into(),
                token_url: token_url.into(),
            },
            token_cache: Arc::new(RwLock::new(None)),
            http: reqwest::Client::new(),
        }
    }

    /// Get a bearer token for API calls
    pub async fn get_token(&self) -> Result<String> {
        let (key, token_url) = match &self.credentials {
            Credentials::BearerToken(token) => return Ok(token.clone()),
            Credentials::ApiKey { key, token_url } => (key.clone(), token_url.clone()),
        };

        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("cached token expired, fetching new token");
            }
        }

        let response = self
            .http
            .post(&token_url)
            .form(&[
                ("grant_type", "urn:vela:params:oauth:grant-type:apikey"),
                ("apikey", key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Auth {
                message: format!("identity endpoint returned {}", status),
            });
        }

        let token: TokenResponse = response.json().await?;

        let ttl = token
            .expires_in
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_TTL);
        let expires_at = Instant::now() + ttl.saturating_sub(TOKEN_EXPIRY_BUFFER);

        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: token.access_token.clone(),
                expires_at,
            });
        }

        Ok(token.access_token)
    }

    /// Drop any cached token and fetch a fresh one
    pub async fn refresh_token(&self) -> Result<String> {
        {
            let mut cache = self.token_cache.write().await;
            *cache = None;
        }
        self.get_token().await
    }
}
