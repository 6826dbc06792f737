//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use typed_fetch_core::prelude::*;
//! ```

pub use crate::{
    DefaultHeaders, Error, Header, Headers, HttpClient, Method, Request, RequestBuilder, Response,
    Result, ToQueryPairs, from_json, query_string, to_json,
};
