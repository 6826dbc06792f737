//! Core types and traits for the typed-fetch HTTP client.
//!
//! This crate provides the foundational types used by typed-fetch:
//! - [`Method`] - HTTP method enum
//! - [`Header`], [`Headers`] - ordered request headers
//! - [`DefaultHeaders`] - shared provider of headers added to every call
//! - [`ToQueryPairs`] - Trait for converting types to query parameter pairs
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - HTTP response type and status classification
//! - [`Error`] and [`Result`] - Error handling
//! - [`HttpClient`] - Transport trait for HTTP execution
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
mod client;
mod error;
mod headers;
mod method;
pub mod prelude;
mod query;
mod request;
mod response;

pub use body::{APPLICATION_JSON, from_json, to_json};
pub use client::HttpClient;
pub use error::{Error, Result};
pub use headers::{DefaultHeaders, Header, HeaderProvider, Headers};
pub use method::Method;
pub use query::{
    QUERY_VALUE, ToQueryPairs, append_query, encode_query_pairs, encode_query_value, query_string,
};
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
