//! HTTP client for the upstream search API.
//!
//! One GET per call, no retry. Failures are classified into
//! [`ClientError`]; a decodable body that carries `message` is returned as
//! a normal [`SearchEnvelope`] for the renderer to report.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::config::ApiConfig;
use super::endpoint::Endpoint;
use crate::core::SearchEnvelope;
use crate::error::{ClientError, ConfigError};

/// Endpoint-agnostic access to the search API.
///
/// The dispatcher depends on this trait rather than on [`KokkaiClient`] so
/// it can run against a stub.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Performs one request and decodes the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn fetch(&self, endpoint: Endpoint, query: &str) -> Result<SearchEnvelope, ClientError>;
}

/// `reqwest`-backed [`SearchApi`] implementation.
#[derive(Debug, Clone)]
pub struct KokkaiClient {
    http: reqwest::Client,
    base_url: String,
}

impl KokkaiClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SearchApi for KokkaiClient {
    async fn fetch(&self, endpoint: Endpoint, query: &str) -> Result<SearchEnvelope, ClientError> {
        let url = endpoint.url(&self.base_url, query);
        debug!(%endpoint, %url, "sending search request");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(%endpoint, error = %e, "transport failure");
            ClientError::Transport {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%endpoint, status = status.as_u16(), "upstream returned error status");
            return Err(ClientError::HttpStatus {
                code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(|e| ClientError::Transport {
            message: e.to_string(),
        })?;

        let envelope: SearchEnvelope = serde_json::from_str(&body).map_err(|e| {
            warn!(%endpoint, error = %e, bytes = body.len(), "undecodable response body");
            ClientError::MalformedBody {
                message: e.to_string(),
            }
        })?;

        debug!(
            %endpoint,
            total = envelope.number_of_records,
            returned = envelope.number_of_return,
            semantic_error = envelope.message.is_some(),
            "search response decoded"
        );
        Ok(envelope)
    }
}
