//! Request headers and the default header provider.
//!
//! - [`Header`] - a single key/value pair
//! - [`Headers`] - an ordered list of headers, duplicates allowed
//! - [`DefaultHeaders`] - a shared, replaceable source of headers evaluated on every call

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::APPLICATION_JSON;

/// A single HTTP header.
///
/// Keys and values are kept as given; nothing is validated until the
/// transport turns them into wire headers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    key: String,
    value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Header name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Header value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume into (key, value).
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Header
where
    K: Into<String>,
    V: Into<String>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Ordered list of headers.
///
/// Insertion order is preserved and duplicate keys are kept. When the list is
/// applied to a request, each entry overwrites any earlier entry with the same
/// key, so [`Headers::get`] reports the last matching value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<Header>);

impl Headers {
    /// Creates an empty header list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a header.
    pub fn push(&mut self, header: Header) {
        self.0.push(header);
    }

    /// Appends a header built from a key and a value.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.push(Header::new(key, value));
    }

    /// Effective value for `key`: the last entry whose key matches, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|header| header.key.eq_ignore_ascii_case(key))
            .map(Header::value)
    }

    /// Returns `true` if at least one entry has this key (ASCII case-insensitive).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the headers in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.0.iter()
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there is no header.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge the header layers of one call.
    ///
    /// The result starts with `Content-Type: application/json`, then the
    /// defaults, then the per-call headers, so a later layer overrides an
    /// earlier one for the same key.
    #[must_use]
    pub fn merged(
        defaults: impl IntoIterator<Item = Header>,
        per_call: impl IntoIterator<Item = Header>,
    ) -> Self {
        let mut headers = Self::new();
        headers.append(http::header::CONTENT_TYPE.as_str(), APPLICATION_JSON);
        headers.extend(defaults);
        headers.extend(per_call);
        headers
    }
}

impl Extend<Header> for Headers {
    fn extend<T: IntoIterator<Item = Header>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Header> for Headers {
    fn from_iter<T: IntoIterator<Item = Header>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Headers {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Header>> for Headers {
    fn from(headers: Vec<Header>) -> Self {
        Self(headers)
    }
}

// ============================================================================
// Default Header Provider
// ============================================================================

/// A function producing the current default headers.
pub type HeaderProvider = Arc<dyn Fn() -> Vec<Header> + Send + Sync>;

/// Shared slot holding at most one [`HeaderProvider`].
///
/// Clones share the same slot: replacing the provider through one handle is
/// visible through every other. The provider is invoked on each call to
/// [`DefaultHeaders::headers`], so values that change over time (a refreshed
/// bearer token, for instance) are picked up by the next request.
///
/// # Example
///
/// ```
/// use typed_fetch_core::{DefaultHeaders, Header};
///
/// let defaults = DefaultHeaders::new();
/// assert!(defaults.headers().is_empty());
///
/// defaults.set(|| vec![Header::new("Authorization", "Bearer abc")]);
/// assert_eq!(defaults.headers(), vec![Header::new("Authorization", "Bearer abc")]);
/// ```
#[derive(Clone, Default)]
pub struct DefaultHeaders {
    slot: Arc<RwLock<Option<HeaderProvider>>>,
}

impl fmt::Debug for DefaultHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultHeaders")
            .field("is_set", &self.is_set())
            .finish()
    }
}

impl DefaultHeaders {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot already holding `provider`.
    #[must_use]
    pub fn with_provider<F>(provider: F) -> Self
    where
        F: Fn() -> Vec<Header> + Send + Sync + 'static,
    {
        let defaults = Self::new();
        defaults.set(provider);
        defaults
    }

    /// Installs `provider`, replacing any previous one.
    pub fn set<F>(&self, provider: F)
    where
        F: Fn() -> Vec<Header> + Send + Sync + 'static,
    {
        self.set_provider(Arc::new(provider));
    }

    /// Installs an already shared provider, replacing any previous one.
    pub fn set_provider(&self, provider: HeaderProvider) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(provider);
    }

    /// Removes the installed provider.
    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns `true` if a provider is installed.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Invoke the current provider, or return no header if none is installed.
    #[must_use]
    pub fn headers(&self) -> Vec<Header> {
        // Release the lock before running user code
        let provider = self
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        provider.map(|provider| provider()).unwrap_or_default()
    }
}
