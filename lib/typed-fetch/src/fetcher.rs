//! The fetch pipeline.
//!
//! A [`Fetcher`] owns a transport and a [`DefaultHeaders`] slot. Each call
//! goes through the same steps:
//!
//! 1. encode the query value and append it to the URL
//! 2. serialize the body to JSON
//! 3. merge `Content-Type: application/json`, the default headers, and the
//!    per-call headers (later ones win)
//! 4. send through the [`HttpClient`]
//! 5. reject any status outside `200..300`
//! 6. decode the JSON body into the requested type
//!
//! # Example
//!
//! ```ignore
//! use typed_fetch::prelude::*;
//!
//! #[derive(Query)]
//! struct Search {
//!     q: String,
//! }
//!
//! let fetcher = Fetcher::builder(HyperClient::new())
//!     .default_headers(|| vec![Header::new("Authorization", "Bearer abc")])
//!     .build();
//!
//! let repos: Vec<Repo> = fetcher
//!     .request("https://api.example.com/search")
//!     .query(&Search { q: "rust".to_string() })
//!     .send()
//!     .await?;
//! ```

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use typed_fetch_core::{
    DefaultHeaders, Header, Headers, HttpClient, Method, Request, Result, ToQueryPairs,
    append_query, encode_query_pairs, to_json,
};
use url::Url;

use crate::HyperClient;

/// Typed HTTP client: query values in, decoded JSON out.
///
/// Cloning is cheap when the transport is; clones share the same default
/// header slot.
#[derive(Debug, Clone)]
pub struct Fetcher<C = HyperClient> {
    client: C,
    default_headers: DefaultHeaders,
}

impl Default for Fetcher<HyperClient> {
    fn default() -> Self {
        Self::new(HyperClient::new())
    }
}

impl<C: HttpClient> Fetcher<C> {
    /// Create a fetcher without default headers.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            default_headers: DefaultHeaders::new(),
        }
    }

    /// Create a fetcher builder around `client`.
    #[must_use]
    pub fn builder(client: C) -> FetcherBuilder<C> {
        FetcherBuilder {
            client,
            default_headers: DefaultHeaders::new(),
        }
    }

    /// The underlying transport.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// The default header slot, use it to replace or clear the provider.
    #[must_use]
    pub const fn default_headers(&self) -> &DefaultHeaders {
        &self.default_headers
    }

    /// Start a request to `url`.
    ///
    /// The URL is taken as-is; any query value is appended to it.
    #[must_use]
    pub fn request(&self, url: impl Into<String>) -> FetchRequest<'_, C> {
        FetchRequest {
            fetcher: self,
            url: url.into(),
            query: Vec::new(),
            method: Method::default(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// Fetch `url` without query value or body.
    ///
    /// `method` defaults to `GET`.
    ///
    /// # Errors
    ///
    /// See [`FetchRequest::send`].
    pub async fn fetch<T>(
        &self,
        url: &str,
        method: Option<Method>,
        headers: Option<&[Header]>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request(url)
            .method_or_default(method)
            .headers(headers.unwrap_or_default().iter().cloned())
            .send()
            .await
    }

    /// Fetch `url` with the query string of `query`.
    ///
    /// # Errors
    ///
    /// See [`FetchRequest::send`].
    pub async fn fetch_query<Q, T>(
        &self,
        url: &str,
        query: &Q,
        method: Option<Method>,
        headers: Option<&[Header]>,
    ) -> Result<T>
    where
        Q: ToQueryPairs + ?Sized,
        T: DeserializeOwned,
    {
        self.request(url)
            .query(query)
            .method_or_default(method)
            .headers(headers.unwrap_or_default().iter().cloned())
            .send()
            .await
    }

    /// Fetch `url` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`FetchRequest::send`].
    pub async fn fetch_body<B, T>(
        &self,
        url: &str,
        method: Option<Method>,
        body: Option<&B>,
        headers: Option<&[Header]>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(url)
            .method_or_default(method)
            .optional_body(body)
            .headers(headers.unwrap_or_default().iter().cloned())
            .send()
            .await
    }

    /// Fetch `url` with an optional query value and an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`FetchRequest::send`].
    pub async fn fetch_query_body<Q, B, T>(
        &self,
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
        let mut request = self.request(url);
        if let Some(query) = query {
            request = request.query(query);
        }
        request
            .method_or_default(method)
            .optional_body(body)
            .headers(headers.unwrap_or_default().iter().cloned())
            .send()
            .await
    }
}

/// Builder for [`Fetcher`].
#[derive(Debug)]
pub struct FetcherBuilder<C> {
    client: C,
    default_headers: DefaultHeaders,
}

impl<C: HttpClient> FetcherBuilder<C> {
    /// Install a default header provider, invoked on every request.
    #[must_use]
    pub fn default_headers<F>(self, provider: F) -> Self
    where
        F: Fn() -> Vec<Header> + Send + Sync + 'static,
    {
        self.default_headers.set(provider);
        self
    }

    /// Use an existing default header slot, shared with its other holders.
    #[must_use]
    pub fn shared_default_headers(mut self, default_headers: DefaultHeaders) -> Self {
        self.default_headers = default_headers;
        self
    }

    /// Build the fetcher.
    #[must_use]
    pub fn build(self) -> Fetcher<C> {
        Fetcher {
            client: self.client,
            default_headers: self.default_headers,
        }
    }
}

/// A single request being assembled.
///
/// Created by [`Fetcher::request`]. Nothing is evaluated until
/// [`build`](Self::build) or [`send`](Self::send), except the body which is
/// serialized as soon as it is set.
#[derive(Debug)]
#[must_use = "a request does nothing until it is sent"]
pub struct FetchRequest<'a, C> {
    fetcher: &'a Fetcher<C>,
    url: String,
    query: Vec<(String, String)>,
    method: Method,
    body: Option<Result<Bytes>>,
    headers: Vec<Header>,
}

impl<C: HttpClient> FetchRequest<'_, C> {
    /// Append the query pairs of `query`.
    pub fn query<Q: ToQueryPairs + ?Sized>(mut self, query: &Q) -> Self {
        self.query.extend(query.to_query_pairs());
        self
    }

    /// Set the HTTP method, `GET` if never called.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    fn method_or_default(self, method: Option<Method>) -> Self {
        let method = method.unwrap_or_default();
        self.method(method)
    }

    /// Set a JSON body.
    ///
    /// A serialization failure is reported by [`build`](Self::build) or
    /// [`send`](Self::send) as [`Error::Encoding`](crate::Error::Encoding).
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(to_json(body));
        self
    }

    fn optional_body<B: Serialize + ?Sized>(self, body: Option<&B>) -> Self {
        match body {
            Some(body) => self.body(body),
            None => self,
        }
    }

    /// Add a per-call header, it overrides default headers with the same key.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(key, value));
        self
    }

    /// Add per-call headers.
    pub fn headers(mut self, headers: impl IntoIterator<Item = Header>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Assemble the request without sending it.
    ///
    /// The default header provider is invoked here.
    ///
    /// # Errors
    ///
    /// - [`Error::Encoding`](crate::Error::Encoding) if the body could not be serialized
    /// - [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the URL with its query does not parse
    pub fn build(self) -> Result<Request<Bytes>> {
        let body = self.body.transpose()?;

        let url = append_query(&self.url, &encode_query_pairs(self.query));
        let url = Url::parse(&url)?;

        let headers = Headers::merged(self.fetcher.default_headers.headers(), self.headers);

        debug!(
            method = %self.method,
            %url,
            headers = headers.len(),
            body_len = body.as_ref().map_or(0, Bytes::len),
            "request assembled"
        );

        Ok(Request::from_parts(self.method, url, headers, body))
    }

    /// Send the request and decode the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::Encoding`](crate::Error::Encoding) if the body could not be
    ///   serialized, nothing is sent
    /// - [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the URL does not parse
    /// - any transport error from the [`HttpClient`]
    /// - [`Error::UnexpectedStatus`](crate::Error::UnexpectedStatus) for a
    ///   status outside `200..300`
    /// - [`Error::Decode`](crate::Error::Decode) if the body is not a JSON `T`
    pub async fn send<T: DeserializeOwned>(self) -> Result<T> {
        let fetcher = self.fetcher;
        let request = self.build()?;

        let response = fetcher.client.execute(request).await?;
        let response = response.error_for_status().inspect_err(|err| {
            debug!(status = err.status(), "unexpected response status");
        })?;

        response.json()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::{check, let_assert};
    use typed_fetch_core::{Error, Response};

    use super::*;

    /// Transport stub, these tests only assemble requests.
    #[derive(Debug, Clone)]
    struct Unreachable;

    impl HttpClient for Unreachable {
        async fn execute(&self, _request: Request<Bytes>) -> Result<Response<Bytes>> {
            Ok(Response::new(500, HashMap::new(), Bytes::new()))
        }
    }

    struct Pairs(Vec<(&'static str, &'static str)>);

    impl ToQueryPairs for Pairs {
        fn to_query_pairs(&self) -> Vec<(String, String)> {
            self.0
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect()
        }
    }

    #[test]
    fn build_defaults_to_get_without_body() {
        let fetcher = Fetcher::new(Unreachable);
        let_assert!(Ok(request) = fetcher.request("http://preview.art/items").build());

        check!(request.method() == Method::Get);
        check!(request.url().as_str() == "http://preview.art/items");
        check!(request.body().is_none());
        check!(request.header("content-type") == Some("application/json"));
    }

    #[test]
    fn build_appends_query() {
        let fetcher = Fetcher::new(Unreachable);
        let query = Pairs(vec![("id", "ababababab"), ("name", "a b")]);

        let_assert!(Ok(request) = fetcher.request("http://preview.art").query(&query).build());
        check!(request.url().as_str() == "http://preview.art/?id=ababababab&name=a%20b");
    }

    #[test]
    fn build_merges_existing_query() {
        let fetcher = Fetcher::new(Unreachable);
        let query = Pairs(vec![("page", "2")]);

        let_assert!(
            Ok(request) = fetcher
                .request("http://preview.art/items?sort=asc")
                .query(&query)
                .build()
        );
        check!(request.url().query() == Some("sort=asc&page=2"));
    }

    #[test]
    fn build_keeps_first_key_verbatim() {
        let fetcher = Fetcher::new(Unreachable);
        let query = Pairs(vec![("?x", "1"), ("y", "2")]);

        let_assert!(Ok(request) = fetcher.request("http://preview.art/items").query(&query).build());
        check!(request.url().query() == Some("?x=1&y=2"));
    }

    #[test]
    fn build_serializes_body() {
        let fetcher = Fetcher::new(Unreachable);
        let_assert!(
            Ok(request) = fetcher
                .request("http://preview.art/items")
                .method(Method::Post)
                .body(&serde_json::json!({"name": "widget"}))
                .build()
        );

        check!(request.method() == Method::Post);
        check!(request.body().map(|body| &body[..]) == Some(br#"{"name":"widget"}"#.as_slice()));
    }

    #[test]
    fn build_orders_header_layers() {
        let fetcher = Fetcher::builder(Unreachable)
            .default_headers(|| {
                vec![
                    Header::new("Authorization", "Bearer default"),
                    Header::new("X-App", "demo"),
                ]
            })
            .build();

        let_assert!(
            Ok(request) = fetcher
                .request("http://preview.art")
                .header("Authorization", "Bearer call")
                .build()
        );

        let keys: Vec<_> = request.headers().iter().map(Header::key).collect();
        check!(keys == ["content-type", "Authorization", "X-App", "Authorization"]);
        check!(request.header("authorization") == Some("Bearer call"));
        check!(request.header("x-app") == Some("demo"));
    }

    #[test]
    fn build_rejects_invalid_url() {
        let fetcher = Fetcher::new(Unreachable);
        let_assert!(Err(Error::InvalidUrl(_)) = fetcher.request("not a url").build());
    }

    #[test]
    fn shared_default_headers_follow_replacement() {
        let slot = DefaultHeaders::new();
        let fetcher = Fetcher::builder(Unreachable)
            .shared_default_headers(slot.clone())
            .build();

        slot.set(|| vec![Header::new("X-Version", "2")]);
        let_assert!(Ok(request) = fetcher.request("http://preview.art").build());
        check!(request.header("x-version") == Some("2"));

        fetcher.default_headers().clear();
        let_assert!(Ok(request) = fetcher.request("http://preview.art").build());
        check!(request.header("x-version").is_none());
    }
}
