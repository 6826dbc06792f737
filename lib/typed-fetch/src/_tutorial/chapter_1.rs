//! # Chapter 1: Queries & Bodies
//!
//! ## Query values with `#[derive(Query)]`
//!
//! Derive `Query` on a struct and pass it as the query value. Each string
//! field becomes a `name=value` pair, in declaration order:
//!
//! ```ignore
//! #[derive(Query)]
//! struct Search {
//!     q: String,
//!     #[query(rename = "lang")]
//!     language: Option<String>,
//!     page: u32,
//! }
//!
//! let search = Search { q: "tower layer".into(), language: None, page: 2 };
//! let repos: Vec<Repo> = typed_fetch::fetch_query("https://api.example.com/search", &search, None, None).await?;
//!
//! // GET https://api.example.com/search?q=tower%20layer
//! ```
//!
//! Only string-valued fields take part: `String`, `&str`, `Cow<str>`,
//! `Box<str>`, `Rc<str>` and `Arc<str>`, plus `Option` of those when set.
//! `page` above is not a string and is left out. Values are
//! percent-encoded so `&`, `=`, `+`, `#` and spaces survive the trip.
//!
//! Use `#[query(skip)]` to leave a string field out and
//! `#[query(rename_all = "camelCase")]` on the struct to rename every field.
//!
//! A URL that already has a query string keeps it, the new pairs are joined
//! with `&`.
//!
//! ## JSON bodies
//!
//! Any `Serialize` value can be sent as the body:
//!
//! ```ignore
//! #[derive(Serialize)]
//! struct NewTodo<'a> {
//!     title: &'a str,
//! }
//!
//! let created: Todo = typed_fetch::fetch_body(
//!     "https://api.example.com/todos",
//!     Some(Method::Post),
//!     Some(&NewTodo { title: "write docs" }),
//!     None,
//! )
//! .await?;
//! ```
//!
//! ## The four call shapes
//!
//! | Function | Query | Body |
//! |----------|-------|------|
//! | `fetch` | - | - |
//! | `fetch_query` | required | - |
//! | `fetch_body` | - | optional |
//! | `fetch_query_body` | optional | optional |
//!
//! All of them take an optional method (default `GET`) and optional
//! per-call headers. The builder form covers the same ground:
//!
//! ```ignore
//! let created: Todo = fetcher
//!     .request("https://api.example.com/todos")
//!     .query(&search)
//!     .method(Method::Post)
//!     .body(&new_todo)
//!     .header("X-Request-Id", "42")
//!     .send()
//!     .await?;
//! ```
//!
//! Next: [Chapter 2: Error Handling][super::chapter_2]
