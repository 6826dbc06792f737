//! Query string projection.
//!
//! [`ToQueryPairs`] turns a value into ordered `(key, value)` pairs, usually
//! through `#[derive(Query)]`. [`query_string`] renders them as `?k1=v1&k2=v2`
//! and [`append_query`] attaches the result to a URL.

use std::fmt::Write;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Trait for types that can be converted to query parameter pairs.
///
/// This is automatically implemented by the `#[derive(Query)]` macro, which
/// keeps the string-typed fields in declaration order and skips the others.
///
/// # Example
///
/// ```ignore
/// use typed_fetch::Query;
///
/// #[derive(Query)]
/// struct SearchParams {
///     q: String,
///     lang: Option<String>, // only sent when `Some`
///     page: u32,            // not a string: skipped
///     #[query(rename = "sort_by")]
///     sort: String,
/// }
/// ```
pub trait ToQueryPairs {
    /// Convert this type to a vector of key-value pairs for query parameters.
    fn to_query_pairs(&self) -> Vec<(String, String)>;
}

impl<T: ToQueryPairs + ?Sized> ToQueryPairs for &T {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        (**self).to_query_pairs()
    }
}

impl ToQueryPairs for [(String, String)] {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.to_vec()
    }
}

impl ToQueryPairs for Vec<(String, String)> {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.clone()
    }
}

/// Characters escaped in a query value.
///
/// Unreserved characters and the sub-delimiters that are harmless inside a
/// value stay intact. `&`, `=`, `+` and `#` are escaped because they would
/// change how the query is split or decoded.
pub const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b';')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Percent-encode a single query value.
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Render pairs as a query string.
///
/// The first pair is prefixed by `?`, the next ones by `&`. Keys are written
/// as-is, values are percent-encoded with [`QUERY_VALUE`]. No pair gives an
/// empty string.
#[must_use]
pub fn encode_query_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut result = String::new();
    for (key, value) in pairs {
        let separator = if result.is_empty() { '?' } else { '&' };
        // Writing to a String cannot fail
        let _ = write!(
            result,
            "{separator}{}={}",
            key.as_ref(),
            utf8_percent_encode(value.as_ref(), QUERY_VALUE)
        );
    }
    result
}

/// Render a value's query pairs as a query string.
///
/// # Example
///
/// ```
/// use typed_fetch_core::{ToQueryPairs, query_string};
///
/// struct Search {
///     q: String,
/// }
///
/// impl ToQueryPairs for Search {
///     fn to_query_pairs(&self) -> Vec<(String, String)> {
///         vec![("q".to_string(), self.q.clone())]
///     }
/// }
///
/// let search = Search { q: "rust lang".to_string() };
/// assert_eq!(query_string(&search), "?q=rust%20lang");
/// ```
#[must_use]
pub fn query_string<Q: ToQueryPairs + ?Sized>(query: &Q) -> String {
    encode_query_pairs(query.to_query_pairs())
}

/// Append a rendered query string (as produced by [`query_string`]) to a URL.
///
/// When the URL already carries a query, the new pairs are joined with `&`
/// instead of opening a second `?`. A fragment stays at the end.
///
/// # Example
///
/// ```
/// use typed_fetch_core::append_query;
///
/// assert_eq!(append_query("https://a.io/s", "?q=1"), "https://a.io/s?q=1");
/// assert_eq!(append_query("https://a.io/s?x=0", "?q=1"), "https://a.io/s?x=0&q=1");
/// assert_eq!(append_query("https://a.io/s#top", "?q=1"), "https://a.io/s?q=1#top");
/// ```
#[must_use]
pub fn append_query(url: &str, query: &str) -> String {
    // Only the separator written by `query_string` is dropped, keys stay intact
    let pairs = query.strip_prefix('?').unwrap_or(query);
    if pairs.is_empty() {
        return url.to_string();
    }

    let (base, fragment) = match url.find('#') {
        Some(index) => url.split_at(index),
        None => (url, ""),
    };

    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with(['?', '&']) {
        ""
    } else {
        "&"
    };

    format!("{base}{separator}{pairs}{fragment}")
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;

    use super::*;

    #[test]
    fn no_pair_is_empty() {
        let pairs: Vec<(String, String)> = Vec::new();
        assert_eq!(encode_query_pairs(pairs), "");
    }

    #[test]
    fn single_pair() {
        assert_eq!(encode_query_pairs([("id", "ababababab")]), "?id=ababababab");
    }

    #[test]
    fn pairs_keep_order() {
        assert_eq!(
            encode_query_pairs([("b", "2"), ("a", "1")]),
            "?b=2&a=1"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            encode_query_pairs([("q", "fish & chips = 2+2 #1")]),
            "?q=fish%20%26%20chips%20%3D%202%2B2%20%231"
        );
        assert_eq!(encode_query_value("a/b?c:d@e"), "a/b?c:d@e");
        assert_eq!(encode_query_value("héllo"), "h%C3%A9llo");
    }

    #[test]
    fn ascii_values_round_trip() {
        let value: String = (0x20_u8..0x7f).map(char::from).collect();
        let encoded = encode_query_value(&value);

        assert!(!encoded.contains(['&', '=', '+', '#', ' ']));
        let decoded = percent_decode_str(&encoded)
            .decode_utf8()
            .expect("valid utf-8");
        assert_eq!(decoded, value);
    }

    #[test]
    fn query_string_from_pairs() {
        let pairs = vec![("lang".to_string(), "en".to_string())];
        assert_eq!(query_string(&pairs), "?lang=en");
        assert_eq!(query_string(pairs.as_slice()), "?lang=en");
    }

    #[test]
    fn append_query_without_existing_query() {
        assert_eq!(
            append_query("http://preview.art", "?id=1"),
            "http://preview.art?id=1"
        );
        assert_eq!(append_query("http://preview.art", ""), "http://preview.art");
    }

    #[test]
    fn append_query_merges_existing_query() {
        assert_eq!(
            append_query("http://a.io/p?x=0", "?id=1&v=2"),
            "http://a.io/p?x=0&id=1&v=2"
        );
        assert_eq!(append_query("http://a.io/p?", "?id=1"), "http://a.io/p?id=1");
        assert_eq!(
            append_query("http://a.io/p?x=0&", "?id=1"),
            "http://a.io/p?x=0&id=1"
        );
    }

    #[test]
    fn append_query_keeps_leading_key_characters() {
        assert_eq!(append_query("http://a.io/p", "??x=1"), "http://a.io/p??x=1");
        assert_eq!(
            append_query("http://a.io/p?y=0", "?&x=1"),
            "http://a.io/p?y=0&&x=1"
        );
        assert_eq!(append_query("http://a.io/p", "?"), "http://a.io/p");
    }

    #[test]
    fn append_query_keeps_fragment_last() {
        assert_eq!(
            append_query("http://a.io/p?x=0#frag", "?id=1"),
            "http://a.io/p?x=0&id=1#frag"
        );
    }
}
