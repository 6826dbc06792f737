//! # Tutorial: Typed fetches with typed-fetch
//!
//! Call JSON APIs with typed query values in and typed results out.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first fetch
//! 2. [Queries & Bodies][chapter_1] - `#[derive(Query)]`, JSON bodies, the four call shapes
//! 3. [Error Handling][chapter_2] - Status, encoding and decoding failures
//! 4. [Headers & Transport][chapter_3] - Default headers, logging, custom clients
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
pub mod chapter_3;
