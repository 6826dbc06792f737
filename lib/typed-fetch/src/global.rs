//! Process-wide fetcher and default headers.
//!
//! The free functions in this module share one lazily created
//! [`Fetcher<HyperClient>`]. Its default headers are set with
//! [`assign_default_fetch_headers`]; the provider is read on every call, so
//! a replacement applies to all requests assembled after it.

use std::sync::LazyLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use typed_fetch_core::{DefaultHeaders, Header, Method, Result, ToQueryPairs};

use crate::{Fetcher, HyperClient};

static DEFAULT_FETCH_HEADERS: LazyLock<DefaultHeaders> = LazyLock::new(DefaultHeaders::new);

static GLOBAL_FETCHER: LazyLock<Fetcher<HyperClient>> = LazyLock::new(|| {
    Fetcher::builder(HyperClient::new())
        .shared_default_headers(DEFAULT_FETCH_HEADERS.clone())
        .build()
});

/// Install the default header provider used by the free `fetch*` functions.
///
/// Replaces any previous provider.
///
/// ```
/// use typed_fetch::{Header, assign_default_fetch_headers, clear_default_fetch_headers};
///
/// assign_default_fetch_headers(|| vec![Header::new("Authorization", "Bearer token")]);
/// clear_default_fetch_headers();
/// ```
pub fn assign_default_fetch_headers<F>(provider: F)
where
    F: Fn() -> Vec<Header> + Send + Sync + 'static,
{
    DEFAULT_FETCH_HEADERS.set(provider);
}

/// Remove the default header provider used by the free `fetch*` functions.
pub fn clear_default_fetch_headers() {
    DEFAULT_FETCH_HEADERS.clear();
}

/// The shared fetcher behind the free `fetch*` functions.
#[must_use]
pub fn global_fetcher() -> &'static Fetcher<HyperClient> {
    &GLOBAL_FETCHER
}

/// Fetch `url` and decode the JSON response.
///
/// # Errors
///
/// See [`FetchRequest::send`](crate::FetchRequest::send).
pub async fn fetch<T>(url: &str, method: Option<Method>, headers: Option<&[Header]>) -> Result<T>
where
    T: DeserializeOwned,
{
    global_fetcher().fetch(url, method, headers).await
}

/// Fetch `url` with the query string of `query`.
///
/// # Errors
///
/// See [`FetchRequest::send`](crate::FetchRequest::send).
pub async fn fetch_query<Q, T>(
    url: &str,
    query: &Q,
    method: Option<Method>,
    headers: Option<&[Header]>,
) -> Result<T>
where
    Q: ToQueryPairs + ?Sized,
    T: DeserializeOwned,
{
    global_fetcher()
        .fetch_query(url, query, method, headers)
        .await
}

/// Fetch `url` with an optional JSON body.
///
/// # Errors
///
/// See [`FetchRequest::send`](crate::FetchRequest::send).
pub async fn fetch_body<B, T>(
    url: &str,
    method: Option<Method>,
    body: Option<&B>,
    headers: Option<&[Header]>,
) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    global_fetcher()
        .fetch_body(url, method, body, headers)
        .await
}

/// Fetch `url` with an optional query value and an optional JSON body.
///
/// # Errors
///
/// See [`FetchRequest::send`](crate::FetchRequest::send).
pub async fn fetch_query_body<Q, B, T>(
    url: &str,
    query: Option<&Q>,
    method: Option<Method>,
    body: Option<&B>,
    headers: Option<&[Header]>,
) -> Result<T>
where
    Q: ToQueryPairs + ?Sized,
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    global_fetcher()
        .fetch_query_body(url, query, method, body, headers)
        .await
}
