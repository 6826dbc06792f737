//! Procedural macros for the typed-fetch HTTP client.
//!
//! - `#[derive(Query)]` - project a struct's string fields into query parameters
//!
//! The generated code refers to `::typed_fetch::ToQueryPairs`, so use the
//! macro through the `typed-fetch` crate.

mod query_derive;

use proc_macro::TokenStream;

/// Derive the `ToQueryPairs` trait for a struct.
///
/// Every named field whose declared type is string-like becomes a query
/// parameter, in declaration order. String-like types are `String`, `&str`,
/// `Cow<str>`, `Box<str>`, `Rc<str>`, `Arc<str>`, and `Option` of any of
/// these (sent only when `Some`). Fields of any other type are skipped.
///
/// The check is syntactic: a type alias to `String` is not recognised.
///
/// # Struct Attributes
///
/// - `#[query(rename_all = "camelCase")]` - Rename all fields using a case convention
///
/// Supported case conventions:
/// - `lowercase`, `UPPERCASE`
/// - `camelCase`, `PascalCase`
/// - `snake_case`, `SCREAMING_SNAKE_CASE`
/// - `kebab-case`, `SCREAMING-KEBAB-CASE`
///
/// # Field Attributes
///
/// - `#[query(rename = "name")]` - Use a different name in the query string (overrides `rename_all`)
/// - `#[query(skip)]` - Never send this field
///
/// # Example
///
/// ```ignore
/// use typed_fetch::Query;
///
/// #[derive(Query)]
/// #[query(rename_all = "camelCase")]
/// struct SearchParams {
///     search_query: String,        // "searchQuery"
///     locale: Option<String>,      // "locale", only when Some
///     page_number: u32,            // not a string: skipped
///     #[query(rename = "token")]   // explicit rename overrides rename_all
///     api_token: String,
///     #[query(skip)]
///     debug_label: String,
/// }
/// ```
#[proc_macro_derive(Query, attributes(query))]
pub fn derive_query(input: TokenStream) -> TokenStream {
    query_derive::expand_query_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
