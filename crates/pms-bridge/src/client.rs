//! Generic HTTP GET executor with uniform error classification.

use crate::config::Config;
use crate::Error;
use tracing::{debug, warn};

/// Base HTTP API client for third-party REST integrations.
///
/// Handles base URL composition, GET execution, and translation of every
/// failure mode into the crate [`Error`] taxonomy. Domain clients wrap
/// this contract with service-specific typed methods.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    /// Create a client for the given configuration.
    ///
    /// The configured timeout applies to every request; there is no
    /// per-request override.
    pub fn new(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Connection(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Join the base URL and a relative path with exactly one `/` separator.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url(), path.trim_start_matches('/'))
    }

    /// Send a GET request and return the parsed JSON body.
    ///
    /// Exactly one error kind propagates per failed call:
    /// [`Error::Response`] for a non-2xx status, [`Error::Timeout`] when the
    /// connect or read phase exceeds the configured timeout, and
    /// [`Error::Connection`] for every other transport failure.
    pub async fn get(
        &self,
        path: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<serde_json::Value, Error> {
        let url = self.build_url(path);

        debug!(url = %url, "sending GET request");

        let mut request = self.http.get(&url);
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = request.send().await.map_err(classify_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport)?;

        if !status.is_success() {
            warn!(status = %status, url = %url, "API request failed");
            return Err(Error::response(status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Connection(format!("API returned invalid JSON: {e}")))
    }
}

/// Map a `reqwest` error to the taxonomy: timeouts of either phase collapse
/// into [`Error::Timeout`], everything else is [`Error::Connection`].
fn classify_transport(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout("API request timed out".to_string())
    } else {
        Error::Connection(format!("API request failed: {err}"))
    }
}
