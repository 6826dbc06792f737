//! # Chapter 3: Headers & Transport
//!
//! ## Default headers
//!
//! A default header provider is called for every request, so it can hand
//! out a fresh token each time:
//!
//! ```ignore
//! typed_fetch::assign_default_fetch_headers(|| {
//!     vec![Header::new("Authorization", format!("Bearer {}", current_token()))]
//! });
//! ```
//!
//! Headers are layered, later layers win on the same name:
//!
//! 1. `Content-Type: application/json`
//! 2. default headers
//! 3. per-call headers
//!
//! Call [`clear_default_fetch_headers`](crate::clear_default_fetch_headers)
//! to stop sending them. A [`Fetcher`](crate::Fetcher) has its own slot:
//!
//! ```ignore
//! let fetcher = Fetcher::builder(HyperClient::new())
//!     .default_headers(|| vec![Header::new("X-Api-Key", "secret")])
//!     .build();
//!
//! fetcher.default_headers().clear();
//! ```
//!
//! ## Configuring the transport
//!
//! ```ignore
//! use std::time::Duration;
//!
//! let client = HyperClient::builder()
//!     .pool_idle_per_host(8)
//!     .pool_idle_timeout(Duration::from_secs(30))
//!     .user_agent("my-app/1.0")
//!     .with_logging()
//!     .build();
//!
//! let fetcher = Fetcher::new(client);
//! ```
//!
//! Any Tower layer over `Request<Bytes>` can be added with
//! [`HyperClientBuilder::layer`](crate::HyperClientBuilder::layer). The
//! logging layer never prints header values.
//!
//! ## Custom transports
//!
//! Implement [`HttpClient`](crate::HttpClient) to plug in another transport,
//! for instance a recording stub in tests:
//!
//! ```ignore
//! struct Canned;
//!
//! impl HttpClient for Canned {
//!     async fn execute(&self, _request: Request<Bytes>) -> typed_fetch::Result<Response<Bytes>> {
//!         Ok(Response::new(200, HashMap::new(), Bytes::from_static(b"[]")))
//!     }
//! }
//!
//! let fetcher = Fetcher::new(Canned);
//! ```
