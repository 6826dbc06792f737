//! Typed async HTTP fetch for Rust.
//!
//! Turn a query struct into a URL, send a JSON body, get a decoded value
//! back, with default headers applied to every call.
//!
//! # Example
//!
//! ```ignore
//! use typed_fetch::prelude::*;
//!
//! #[derive(Query)]
//! struct UserQuery {
//!     id: String,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     id: String,
//!     name: String,
//! }
//!
//! assign_default_fetch_headers(|| vec![Header::new("Authorization", "Bearer abc")]);
//!
//! let query = UserQuery { id: "42".to_string() };
//! let user: User = fetch_query("https://api.example.com/users", &query, None, None).await?;
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

// Generated `#[derive(Query)]` code names `::typed_fetch`, this makes the
// path resolve inside this crate too.
extern crate self as typed_fetch;

pub mod _tutorial;
mod client;
mod config;
mod connector;
mod fetcher;
mod global;
pub mod middleware;
pub mod prelude;

// Re-export client types
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use fetcher::{FetchRequest, Fetcher, FetcherBuilder};
pub use global::{
    assign_default_fetch_headers, clear_default_fetch_headers, fetch, fetch_body, fetch_query,
    fetch_query_body, global_fetcher,
};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use typed_fetch_core::{
    APPLICATION_JSON, DefaultHeaders, Error, Header, HeaderProvider, Headers, HttpClient, Method,
    QUERY_VALUE, Request, RequestBuilder, Response, Result, ToQueryPairs, append_query,
    encode_query_pairs, encode_query_value, from_json, query_string, to_json,
};

// Re-export http types for status codes and headers
pub use typed_fetch_core::{StatusCode, header};

pub use url;

// Re-export macros
pub use typed_fetch_macro::Query;
