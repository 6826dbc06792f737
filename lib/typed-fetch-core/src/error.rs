//! Error types for typed-fetch.

use bytes::Bytes;
use derive_more::{Display, Error, From};

/// Main error type for typed-fetch operations.
///
/// A call fails in one of three ways that callers usually branch on:
/// - [`Error::UnexpectedStatus`]: the server answered outside `200..300`,
///   its payload is kept for inspection
/// - [`Error::Encoding`]: the request body could not be serialized, nothing was sent
/// - [`Error::Decode`]: the server answered with a success status but the
///   body does not match the requested type
///
/// The remaining variants come from the transport.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Response status outside the `200..300` range.
    #[display("unexpected status {status}")]
    #[from(skip)]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response payload, `None` when the server sent an empty body.
        #[error(not(source))]
        body: Option<Bytes>,
    },

    /// The request body could not be serialized to JSON.
    #[display("JSON encoding error: {_0}")]
    #[from]
    Encoding(serde_json::Error),

    /// The response body could not be decoded into the requested type.
    #[display("JSON decoding error at '{path}': {source}")]
    #[from(skip)]
    Decode {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Underlying `serde_json` failure, with its category and position.
        source: serde_json::Error,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// The request could not be turned into a wire request.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unexpected status error, an empty payload is stored as `None`.
    #[must_use]
    pub fn unexpected_status(status: u16, body: Bytes) -> Self {
        Self::UnexpectedStatus {
            status,
            body: (!body.is_empty()).then_some(body),
        }
    }

    /// Create a JSON decoding error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if the response status was outside `200..300`.
    #[must_use]
    pub const fn is_unexpected_status(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { .. })
    }

    /// Returns `true` if the request body could not be serialized.
    #[must_use]
    pub const fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }

    /// Returns `true` if the response body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the HTTP status code of an unexpected status error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the payload of an unexpected status error, if the server sent one.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::UnexpectedStatus { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Try to decode the payload of an unexpected status error as JSON.
    ///
    /// Returns `None` if there is no payload or this is another kind of error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Debug, Deserialize)]
    /// struct ApiError {
    ///     code: String,
    ///     message: String,
    /// }
    ///
    /// match fetcher.fetch::<User>(url, None, None).await {
    ///     Ok(user) => println!("User: {:?}", user),
    ///     Err(e) => {
    ///         if let Some(Ok(api_error)) = e.decode_body::<ApiError>() {
    ///             println!("API error: {} - {}", api_error.code, api_error.message);
    ///         } else {
    ///             println!("Error: {}", e);
    ///         }
    ///     }
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body))
    }
}
