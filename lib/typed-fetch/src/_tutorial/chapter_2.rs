//! # Chapter 2: Error Handling
//!
//! Every call returns [`typed_fetch::Result<T>`](crate::Result).
//!
//! ## Unexpected status
//!
//! Any status outside `200..300` becomes
//! [`Error::UnexpectedStatus`](crate::Error::UnexpectedStatus) carrying the
//! status code and the raw body:
//!
//! ```ignore
//! match typed_fetch::fetch::<Todo>(url, None, None).await {
//!     Ok(todo) => println!("{todo:?}"),
//!     Err(err) if err.is_not_found() => println!("no such todo"),
//!     Err(Error::UnexpectedStatus { status, .. }) => println!("server said {status}"),
//!     Err(err) => return Err(err),
//! }
//! ```
//!
//! Error payloads are often JSON too:
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct ApiError {
//!     message: String,
//! }
//!
//! if let Some(Ok(api_error)) = err.decode_body::<ApiError>() {
//!     eprintln!("{}", api_error.message);
//! }
//! ```
//!
//! ## Encoding and decoding
//!
//! - [`Error::Encoding`](crate::Error::Encoding): the body could not be
//!   serialized. Nothing was sent.
//! - [`Error::Decode`](crate::Error::Decode): the response was a success but
//!   its body is not a JSON value of the requested type. The error carries
//!   the JSON path of the failure, such as `items[2].name`.
//!
//! ## Transport
//!
//! Malformed URLs, refused connections and TLS failures surface as
//! [`Error::InvalidUrl`](crate::Error::InvalidUrl),
//! [`Error::Connection`](crate::Error::Connection) and
//! [`Error::Tls`](crate::Error::Tls). There is no automatic retry and no
//! timeout.
//!
//! Next: [Chapter 3: Headers & Transport][super::chapter_3]
