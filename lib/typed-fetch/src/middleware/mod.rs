//! Tower middleware layers for the HTTP transport.
//!
//! Layers wrap the [`HyperClient`](crate::HyperClient) service and see every
//! request before it reaches the network. Add them with
//! [`HyperClientBuilder::layer`](crate::HyperClientBuilder::layer) or the
//! helper methods.
//!
//! # Available Layers
//!
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//!
//! # Example
//!
//! ```ignore
//! use typed_fetch::HyperClient;
//! use typed_fetch::middleware::LoggingLayer;
//!
//! let client = HyperClient::builder()
//!     .layer(LoggingLayer::debug())
//!     .build();
//! ```

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

pub use tower::Layer;
