//! Integration tests for `#[derive(Query)]`.

#![allow(missing_docs)]

use std::borrow::Cow;
use std::sync::Arc;

use assert2::check;
use typed_fetch::prelude::*;
use typed_fetch::url::Url;

#[derive(Debug, Query)]
struct Empty {}

#[derive(Debug, Query)]
struct Unit;

#[derive(Debug, Query)]
struct NoStrings {
    page: u32,
    active: bool,
    tags: Vec<String>,
}

#[derive(Debug, Query)]
struct Single {
    id: String,
}

#[derive(Debug, Query)]
struct Ordered {
    zeta: String,
    alpha: String,
    count: u64,
    middle: String,
}

#[derive(Debug, Query)]
struct Mixed<'a> {
    borrowed: &'a str,
    cow: Cow<'a, str>,
    boxed: Box<str>,
    shared: Arc<str>,
    maybe: Option<String>,
    maybe_borrowed: Option<&'a str>,
    number: Option<u32>,
}

#[derive(Debug, Query)]
#[query(rename_all = "camelCase")]
struct Renamed {
    search_term: String,
    #[query(rename = "token")]
    api_token: String,
    #[query(skip)]
    debug_label: String,
}

#[derive(Debug, Query)]
#[query(rename_all = "kebab-case")]
struct Kebab {
    sort_order: String,
}

fn pairs(query: &impl ToQueryPairs) -> Vec<(String, String)> {
    query.to_query_pairs()
}

#[test]
fn test_zero_fields_give_empty_query() {
    check!(query_string(&Empty {}).is_empty());
    check!(query_string(&Unit).is_empty());
}

#[test]
fn test_non_string_fields_are_ignored() {
    let query = NoStrings {
        page: 3,
        active: true,
        tags: vec!["a".to_string()],
    };
    check!(pairs(&query).is_empty());
    check!(query_string(&query) == "");
}

#[test]
fn test_single_field() {
    let query = Single {
        id: "ababababab".to_string(),
    };
    check!(query_string(&query) == "?id=ababababab");
}

#[test]
fn test_declaration_order() {
    let query = Ordered {
        zeta: "z".to_string(),
        alpha: "a".to_string(),
        count: 7,
        middle: "m".to_string(),
    };
    check!(query_string(&query) == "?zeta=z&alpha=a&middle=m");
}

#[test]
fn test_string_like_types_and_options() {
    let query = Mixed {
        borrowed: "b",
        cow: Cow::Borrowed("c"),
        boxed: "x".into(),
        shared: Arc::from("s"),
        maybe: None,
        maybe_borrowed: Some("mb"),
        number: Some(1),
    };

    let keys: Vec<String> = pairs(&query).into_iter().map(|(key, _)| key).collect();
    check!(keys == ["borrowed", "cow", "boxed", "shared", "maybe_borrowed"]);

    let query = Mixed {
        maybe: Some("m".to_string()),
        ..query
    };
    check!(query_string(&query) == "?borrowed=b&cow=c&boxed=x&shared=s&maybe=m&maybe_borrowed=mb");
}

#[test]
fn test_renames_and_skip() {
    let query = Renamed {
        search_term: "rust".to_string(),
        api_token: "secret".to_string(),
        debug_label: "ignored".to_string(),
    };
    check!(query_string(&query) == "?searchTerm=rust&token=secret");

    let query = Kebab {
        sort_order: "desc".to_string(),
    };
    check!(query_string(&query) == "?sort-order=desc");
}

#[test]
fn test_values_are_escaped() {
    let query = Single {
        id: "fish & chips = 2+2 #1".to_string(),
    };
    check!(query_string(&query) == "?id=fish%20%26%20chips%20%3D%202%2B2%20%231");
}

#[test]
fn test_values_survive_url_parsing() {
    let values = [
        "plain",
        "with space",
        "a&b=c",
        "1+1",
        "#hash",
        "100%",
        "slash/and?question",
        "caf\u{e9}",
        "\u{1f980}",
    ];

    for value in values {
        let query = Single {
            id: value.to_string(),
        };
        let url = Url::parse(&format!("http://localhost/items{}", query_string(&query)))
            .expect("valid url");

        let decoded: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        check!(decoded == [("id".to_string(), value.to_string())]);
    }
}
