//! Error taxonomy for external API calls.
//!
//! One flat enum covers every failure a client method can surface, so a
//! caller can match on `pms_bridge::Error` to catch any external-API
//! failure generically, or on a single variant to handle one kind.

/// Errors surfaced by [`ApiClient`](crate::ApiClient) and
/// [`PmsClient`](crate::PmsClient).
///
/// The client layer never recovers from these itself: each failed call
/// classifies the failure once and returns exactly one of these variants.
/// Retry policy, if any, belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote responded with a non-2xx status.
    #[error("{message}")]
    Response { status_code: u16, message: String },

    /// The connect or read phase exceeded the configured timeout.
    #[error("{0}")]
    Timeout(String),

    /// Any other transport-level failure (DNS, refused connection, reset).
    #[error("{0}")]
    Connection(String),

    /// A domain lookup found no matching record.
    ///
    /// Conceptually a response error, but raised distinctly so callers can
    /// map it to 404 instead of 502.
    #[error("{0}")]
    NotFound(String),
}

impl Error {
    /// Build a [`Error::Response`], filling in the default message
    /// `"API returned HTTP <status_code>"` when none is supplied.
    pub fn response(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            format!("API returned HTTP {status_code}")
        } else {
            message
        };
        Self::Response {
            status_code,
            message,
        }
    }

    /// The status code carried by a [`Error::Response`], if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// The status a presentation layer should report for this error:
    /// 404 for a lookup miss, 502 for every other external failure.
    pub fn public_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            _ => 502,
        }
    }
}
