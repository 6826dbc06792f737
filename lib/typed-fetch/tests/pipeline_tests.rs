//! Fetch pipeline tests against an in-memory transport.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use assert2::{check, let_assert};
use bytes::Bytes;
use serde::Deserialize;
use typed_fetch::{Error, Fetcher, Header, HttpClient, Method, Query, Request, Response, Result};

/// Replies with a fixed status and body, recording every request.
#[derive(Debug, Clone)]
struct Canned {
    status: u16,
    body: &'static str,
    seen: Arc<Mutex<Vec<Request<Bytes>>>>,
}

impl Canned {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            seen: Arc::default(),
        }
    }

    fn requests(&self) -> Vec<Request<Bytes>> {
        self.seen.lock().expect("lock").clone()
    }
}

impl HttpClient for Canned {
    async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        self.seen.lock().expect("lock").push(request);
        Ok(Response::new(
            self.status,
            HashMap::new(),
            Bytes::from_static(self.body.as_bytes()),
        ))
    }
}

#[derive(Debug, PartialEq, Deserialize)]
struct Item {
    id: u32,
}

#[derive(Query)]
struct ItemQuery<'a> {
    id: &'a str,
}

#[tokio::test]
async fn test_status_boundaries() {
    for status in [200, 201, 204, 299] {
        let fetcher = Fetcher::new(Canned::new(status, r#"{"id": 1}"#));
        let result = fetcher.fetch::<Item>("http://api.test/items/1", None, None).await;
        check!(result.ok() == Some(Item { id: 1 }), "status {status}");
    }

    for status in [100, 199, 300, 304, 400, 404, 500, 599] {
        let fetcher = Fetcher::new(Canned::new(status, "nope"));
        let result = fetcher.fetch::<Item>("http://api.test/items/1", None, None).await;
        let_assert!(Err(Error::UnexpectedStatus { status: got, .. }) = result);
        check!(got == status);
    }
}

#[tokio::test]
async fn test_empty_error_payload_is_absent() {
    let fetcher = Fetcher::new(Canned::new(500, ""));
    let result = fetcher.fetch::<Item>("http://api.test/items", None, None).await;

    let_assert!(Err(err) = result);
    check!(err.status() == Some(500));
    check!(err.body().is_none());
}

#[tokio::test]
async fn test_empty_success_body_fails_to_decode() {
    let fetcher = Fetcher::new(Canned::new(204, ""));
    let result = fetcher.fetch::<Item>("http://api.test/items/1", None, None).await;

    let_assert!(Err(err) = result);
    check!(err.is_decode());
}

#[tokio::test]
async fn test_default_method_is_get() {
    let client = Canned::new(200, "[]");
    let fetcher = Fetcher::new(client.clone());

    let _: Vec<Item> = fetcher
        .fetch("http://api.test/items", None, None)
        .await
        .expect("items");
    let _: Vec<Item> = fetcher
        .fetch_query("http://api.test/items", &ItemQuery { id: "1" }, None, None)
        .await
        .expect("items");
    let _: Vec<Item> = fetcher
        .fetch_body::<(), _>("http://api.test/items", None, None, None)
        .await
        .expect("items");
    let _: Vec<Item> = fetcher
        .fetch_query_body::<ItemQuery<'_>, (), _>("http://api.test/items", None, None, None, None)
        .await
        .expect("items");

    let requests = client.requests();
    check!(requests.len() == 4);
    check!(requests.iter().all(|request| request.method() == Method::Get));
    check!(requests.iter().all(|request| request.body().is_none()));
}

#[tokio::test]
async fn test_provider_called_once_per_request() {
    let calls = Arc::new(Mutex::new(0_u32));
    let counter = Arc::clone(&calls);

    let client = Canned::new(200, "[]");
    let fetcher = Fetcher::builder(client.clone())
        .default_headers(move || {
            let mut calls = counter.lock().expect("lock");
            *calls += 1;
            vec![Header::new("X-Call", calls.to_string())]
        })
        .build();

    for _ in 0..3 {
        let _: Vec<Item> = fetcher
            .fetch("http://api.test/items", None, None)
            .await
            .expect("items");
    }

    check!(*calls.lock().expect("lock") == 3);
    let values: Vec<_> = client
        .requests()
        .iter()
        .filter_map(|request| request.header("x-call").map(str::to_string))
        .collect();
    check!(values == ["1", "2", "3"]);
}

#[tokio::test]
async fn test_per_call_headers_win() {
    let client = Canned::new(200, "[]");
    let fetcher = Fetcher::builder(client.clone())
        .default_headers(|| vec![Header::new("Accept-Language", "en")])
        .build();

    let headers = [
        Header::new("accept-language", "fr"),
        Header::new("Content-Type", "text/plain"),
    ];
    let _: Vec<Item> = fetcher
        .fetch("http://api.test/items", None, Some(&headers))
        .await
        .expect("items");

    let requests = client.requests();
    let_assert!([request] = requests.as_slice());
    check!(request.header("Accept-Language") == Some("fr"));
    check!(request.header("content-type") == Some("text/plain"));
}

#[tokio::test]
async fn test_clone_shares_default_headers() {
    let client = Canned::new(200, "[]");
    let fetcher = Fetcher::new(client.clone());
    let clone = fetcher.clone();

    fetcher
        .default_headers()
        .set(|| vec![Header::new("X-Shared", "yes")]);

    let _: Vec<Item> = clone
        .fetch("http://api.test/items", None, None)
        .await
        .expect("items");

    let requests = client.requests();
    let_assert!([request] = requests.as_slice());
    check!(request.header("x-shared") == Some("yes"));
}

#[tokio::test]
async fn test_replaced_provider_drops_old_headers() {
    let client = Canned::new(200, "[]");
    let fetcher = Fetcher::builder(client.clone())
        .default_headers(|| vec![Header::new("X-Old", "1")])
        .build();

    let _: Vec<Item> = fetcher
        .fetch("http://api.test/items", None, None)
        .await
        .expect("items");
    fetcher
        .default_headers()
        .set(|| vec![Header::new("X-New", "2")]);
    let _: Vec<Item> = fetcher
        .fetch("http://api.test/items", None, None)
        .await
        .expect("items");

    let requests = client.requests();
    let_assert!([before, after] = requests.as_slice());
    check!(before.header("x-old") == Some("1"));
    check!(before.header("x-new").is_none());
    check!(after.header("x-new") == Some("2"));
    check!(after.header("x-old").is_none());
}
