//! Prelude module for convenient imports.
//!
//! ```ignore
//! use typed_fetch::prelude::*;
//! ```

pub use crate::{
    ClientConfig, DefaultHeaders, Error, FetchRequest, Fetcher, Header, Headers, HttpClient,
    HyperClient, Method, Query, Request, Response, Result, StatusCode, ToQueryPairs,
    assign_default_fetch_headers, clear_default_fetch_headers, fetch, fetch_body, fetch_query,
    fetch_query_body, query_string,
};
pub use serde::{Deserialize, Serialize};
