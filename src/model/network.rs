//! A closed hierarchy of network outcomes.
//!
//! The hierarchy is data only: nothing here raises or handles an error.
//! `NetworkResult` is either a [`Success`] or a [`NetworkError`], and
//! `NetworkError` is either an [`HttpError`] or a stateless timeout.

use crate::optics::{Optional, Prism};
use crate::{Lenses, Prisms};

/// Payload of a successful outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Success {
    /// Response content.
    pub content: String,
}

/// Payload of an HTTP failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HttpError {
    /// Failure description.
    pub message: String,
}

/// The failure family of [`NetworkResult`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Prisms)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NetworkError {
    /// The server answered with an error.
    Http(HttpError),
    /// No answer arrived in time.
    Timeout,
}

/// The outcome of a network operation.
///
/// # Examples
///
/// ```rust
/// use optikon::model::{HttpError, NetworkError, NetworkResult};
/// use optikon::optics::Prism;
///
/// let timeout = NetworkResult::timeout();
///
/// assert_eq!(NetworkResult::success_prism().preview(&timeout), None);
/// assert_eq!(
///     NetworkResult::error_prism().preview(&timeout),
///     Some(&NetworkError::Timeout)
/// );
/// assert_eq!(
///     NetworkResult::http_error_prism().review(HttpError { message: "404".to_string() }),
///     NetworkResult::http_error("404")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Prisms)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NetworkResult {
    /// The operation succeeded.
    Success(Success),
    /// The operation failed.
    Error(NetworkError),
}

impl NetworkResult {
    /// Creates a successful outcome.
    pub fn success(content: impl Into<String>) -> Self {
        Self::Success(Success {
            content: content.into(),
        })
    }

    /// Creates an HTTP failure.
    pub fn http_error(message: impl Into<String>) -> Self {
        Self::Error(NetworkError::Http(HttpError {
            message: message.into(),
        }))
    }

    /// Creates a timeout failure.
    pub const fn timeout() -> Self {
        Self::Error(NetworkError::Timeout)
    }

    /// Prism from a result to the HTTP failure two levels down.
    #[must_use]
    pub fn http_error_prism() -> impl Prism<Self, HttpError> + Clone {
        Self::error_prism().compose(NetworkError::http_prism())
    }

    /// Optional focusing on the content of a successful outcome.
    #[must_use]
    pub fn success_content_optional() -> impl Optional<Self, String> + Clone {
        Self::success_prism().compose_lens(Success::content_lens())
    }

    /// Optional focusing on the message of an HTTP failure.
    #[must_use]
    pub fn http_message_optional() -> impl Optional<Self, String> + Clone {
        Self::http_error_prism().compose_lens(HttpError::message_lens())
    }
}
