//! # Chapter 0: Getting Started
//!
//! Add the dependency:
//!
//! ```toml
//! [dependencies]
//! typed-fetch = "0.1"
//! serde = { version = "1", features = ["derive"] }
//! tokio = { version = "1", features = ["macros", "rt-multi-thread"] }
//! ```
//!
//! ## Your first fetch
//!
//! Declare the shape of the response and ask for it:
//!
//! ```ignore
//! use typed_fetch::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! struct Todo {
//!     id: u64,
//!     title: String,
//!     completed: bool,
//! }
//!
//! #[tokio::main]
//! async fn main() -> typed_fetch::Result<()> {
//!     let todo: Todo = typed_fetch::fetch("https://jsonplaceholder.typicode.com/todos/1", None, None).await?;
//!     println!("{todo:?}");
//!     Ok(())
//! }
//! ```
//!
//! The method defaults to `GET`. Every request carries
//! `Content-Type: application/json`, and the response body is always
//! decoded as JSON into the requested type.
//!
//! ## Free functions or a `Fetcher`
//!
//! The free functions ([`fetch`](crate::fetch), [`fetch_query`](crate::fetch_query),
//! [`fetch_body`](crate::fetch_body), [`fetch_query_body`](crate::fetch_query_body))
//! share one process-wide [`Fetcher`](crate::Fetcher). Build your own when
//! you want separate default headers or a configured transport:
//!
//! ```ignore
//! let fetcher = Fetcher::new(HyperClient::new());
//! let todo: Todo = fetcher.request("https://jsonplaceholder.typicode.com/todos/1").send().await?;
//! ```
//!
//! Next: [Chapter 1: Queries & Bodies][super::chapter_1]
