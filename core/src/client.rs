//! Request builder, response parser and one-shot `shorten` call for the
//! short.io public link endpoint.
//!
//! # Design
//! `ShortIoClient` holds a `ClientConfig` and a `Transport` and carries no
//! mutable state between calls. `build_shorten` produces an `HttpRequest`,
//! `parse_shorten` consumes an `HttpResponse`, and `shorten` runs exactly one
//! round-trip between the two. Both halves are usable on their own when the
//! caller wants to do the I/O itself.

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::transport::UreqTransport;
use crate::types::{codes, ErrorModel, LinkRequest, LinkResponse, ShortenParams, ShortenResult};

const JSON: &str = "application/json";

/// Synchronous, stateless client for the short.io link API.
#[derive(Debug, Clone)]
pub struct ShortIoClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl ShortIoClient<UreqTransport> {
    /// Client for the production API with transport defaults.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self { config, transport }
    }
}

impl Default for ShortIoClient<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ShortIoClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the POST request that creates a short link.
    ///
    /// Fails without touching the network if the API key or `originalURL`
    /// is blank.
    pub fn build_shorten(&self, api_key: &str, params: &ShortenParams) -> Result<HttpRequest, ApiError> {
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }
        if params.original_url.trim().is_empty() {
            return Err(ApiError::MissingOriginalUrl);
        }

        let body = serde_json::to_string(&LinkRequest::from(params))?;
        let url = self.config.endpoint();
        debug!(%url, body_len = body.len(), "built shorten request");

        Ok(HttpRequest {
            method: HttpMethod::Post,
            url,
            headers: vec![
                ("accept".to_string(), JSON.to_string()),
                ("content-type".to_string(), JSON.to_string()),
                ("authorization".to_string(), api_key.to_string()),
            ],
            body: Some(body),
        })
    }

    /// Interpret a response from the link endpoint.
    ///
    /// Never fails: unusable payloads become an `ErrorModel` carrying the
    /// real status code.
    pub fn parse_shorten(&self, response: HttpResponse) -> ShortenResult {
        let status = response.status;
        debug!(status, body_len = response.body.len(), "received shorten response");

        if response.is_success() {
            return match serde_json::from_str::<LinkResponse>(&response.body) {
                Ok(link) => ShortenResult::Success(link),
                Err(e) => {
                    warn!(status, error = %e, "success response body unusable");
                    ShortenResult::Error(ErrorModel::new(
                        "Empty or malformed success response",
                        status,
                        codes::MALFORMED_SUCCESS,
                    ))
                }
            };
        }

        if response.body.trim().is_empty() {
            warn!(status, "error response with empty body");
            return ShortenResult::Error(ErrorModel::new("Unknown error", status, codes::UNKNOWN));
        }

        match ErrorModel::from_json(&response.body) {
            Ok(remote) => ShortenResult::Error(ErrorModel {
                status_code: status,
                success: false,
                ..remote
            }),
            Err(e) => {
                warn!(status, error = %e, "error response body unusable");
                ShortenResult::Error(ErrorModel::new(
                    "Malformed error response",
                    status,
                    codes::INVALID_JSON,
                ))
            }
        }
    }
}

impl<T: Transport> ShortIoClient<T> {
    /// Create a short link with a single POST.
    ///
    /// `Err` means no response was obtained (invalid input, encoding or
    /// network failure). Every response the server does send, including
    /// 4xx/5xx, is reported through `ShortenResult`.
    pub fn shorten(&self, api_key: &str, params: &ShortenParams) -> Result<ShortenResult, ApiError> {
        let request = self.build_shorten(api_key, params)?;
        let response = self.transport.execute(request)?;
        Ok(self.parse_shorten(response))
    }
}
