//! Client configuration.

use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Base API client configuration.
///
/// Immutable after construction; a client never changes its base URL or
/// timeout between requests.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    timeout: Duration,
}

impl Config {
    /// Create a configuration for the given base URL.
    ///
    /// Trailing `/` characters are stripped so composed request URLs never
    /// contain a doubled separator.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout, applied to every request on the client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = Config::new("https://api.example.com/");
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_base_url_without_slash_unchanged() {
        let config = Config::new("https://api.example.com");
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_multiple_trailing_slashes_stripped() {
        let config = Config::new("https://api.example.com///");
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_default_timeout() {
        let config = Config::new("https://api.example.com");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_custom_timeout() {
        let config =
            Config::new("https://api.example.com").with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_accepts_string_and_str() {
        let _ = Config::new("https://api.example.com");
        let _ = Config::new(String::from("https://api.example.com"));
    }
}
