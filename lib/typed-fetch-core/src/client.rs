//! HTTP transport trait.
//!
//! [`HttpClient`] is the seam between the fetch pipeline and the network.
//! The `typed-fetch` crate ships a hyper based implementation; implement the
//! trait yourself to plug another transport or a test double.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// An implementation sends the request as-is and returns whatever the server
/// answered, whatever the status. Status classification and body decoding
/// happen above this layer.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the response
    /// cannot be read:
    /// - Invalid header names or values
    /// - Network errors
    /// - TLS errors
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<C: HttpClient> HttpClient for Arc<C> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}
