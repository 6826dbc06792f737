//! Query derive macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, GenericArgument, PathArguments, Type, parse2};

/// Struct-level options parsed from `#[query(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct QueryStructOptions {
    /// Rename all fields using the given case convention.
    rename_all: Option<RenameRule>,
}

/// Case conversion rules for `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
enum RenameRule {
    /// `lowercase`
    LowerCase,
    /// `UPPERCASE`
    UpperCase,
    /// `camelCase`
    CamelCase,
    /// `PascalCase`
    PascalCase,
    /// `snake_case`
    SnakeCase,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnakeCase,
    /// `kebab-case`
    KebabCase,
    /// `SCREAMING-KEBAB-CASE`
    ScreamingKebabCase,
}

impl RenameRule {
    /// Parse a rename rule from a string.
    fn parse(s: &str) -> Option<Self> {
        match s {
            "lowercase" => Some(Self::LowerCase),
            "UPPERCASE" => Some(Self::UpperCase),
            "camelCase" => Some(Self::CamelCase),
            "PascalCase" => Some(Self::PascalCase),
            "snake_case" => Some(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            "SCREAMING-KEBAB-CASE" => Some(Self::ScreamingKebabCase),
            _ => None,
        }
    }

    /// Apply the rename rule to a field name.
    ///
    /// Field names are Rust identifiers, so they are expected in `snake_case`.
    fn apply(self, name: &str) -> String {
        match self {
            Self::LowerCase => name.to_lowercase(),
            Self::UpperCase => name.to_uppercase(),
            Self::CamelCase => to_camel_case(name),
            Self::PascalCase => to_pascal_case(name),
            Self::SnakeCase => name.to_string(),
            Self::ScreamingSnakeCase => name.to_uppercase(),
            Self::KebabCase => name.replace('_', "-"),
            Self::ScreamingKebabCase => name.to_uppercase().replace('_', "-"),
        }
    }
}

/// Convert a `snake_case` string to `camelCase`.
fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a `snake_case` string to `PascalCase`.
fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Field options parsed from `#[query(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct QueryFieldOptions {
    /// Never emit this field
    skip: bool,
    /// Rename the field in query string
    rename: Option<String>,
}

/// How a field is projected into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// Always emitted.
    Text,
    /// `Option` of a string-like type, emitted when `Some`.
    OptionalText,
    /// Not a string: never emitted.
    Ignored,
}

impl FieldKind {
    fn of(ty: &Type) -> Self {
        if is_string_like(ty) {
            Self::Text
        } else if option_inner(ty).is_some_and(is_string_like) {
            Self::OptionalText
        } else {
            Self::Ignored
        }
    }
}

/// Expand the `#[derive(Query)]` macro.
pub fn expand_query_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let struct_options = parse_query_struct_options(&input.attrs)?;

    // Only support structs with named fields
    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => {
                return Ok(quote! {
                    impl #impl_generics ::typed_fetch::ToQueryPairs for #name #ty_generics #where_clause {
                        fn to_query_pairs(&self) -> ::std::vec::Vec<(::std::string::String, ::std::string::String)> {
                            ::std::vec::Vec::new()
                        }
                    }
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Query derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Query derive only supports structs",
            ));
        }
    };

    let mut field_handlers = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let options = parse_query_field_options(&field.attrs)?;
        if options.skip {
            continue;
        }

        // Explicit rename > rename_all > field name
        let raw_name = field_name.to_string();
        let raw_name = raw_name.strip_prefix("r#").unwrap_or(&raw_name);
        let key = if let Some(ref rename) = options.rename {
            rename.clone()
        } else if let Some(rule) = struct_options.rename_all {
            rule.apply(raw_name)
        } else {
            raw_name.to_string()
        };

        if let Some(handler) = generate_field_handler(field_name, FieldKind::of(&field.ty), &key) {
            field_handlers.push(handler);
        }
    }

    Ok(quote! {
        impl #impl_generics ::typed_fetch::ToQueryPairs for #name #ty_generics #where_clause {
            fn to_query_pairs(&self) -> ::std::vec::Vec<(::std::string::String, ::std::string::String)> {
                #[allow(unused_mut)]
                let mut pairs = ::std::vec::Vec::new();
                #(#field_handlers)*
                pairs
            }
        }
    })
}

/// Parse struct-level options from `#[query(...)]` attributes.
fn parse_query_struct_options(attrs: &[syn::Attribute]) -> syn::Result<QueryStructOptions> {
    let mut options = QueryStructOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("query") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: syn::LitStr = meta.value()?.parse()?;
                let rule = RenameRule::parse(&value.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &value,
                        format!(
                            "unknown rename_all value: \"{}\". Expected one of: \
                             lowercase, UPPERCASE, camelCase, PascalCase, \
                             snake_case, SCREAMING_SNAKE_CASE, kebab-case, SCREAMING-KEBAB-CASE",
                            value.value()
                        ),
                    )
                })?;
                options.rename_all = Some(rule);
                Ok(())
            } else {
                Err(meta.error("unsupported query attribute, expected `rename_all`"))
            }
        })?;
    }

    Ok(options)
}

/// Parse field options from `#[query(...)]` attributes.
fn parse_query_field_options(attrs: &[syn::Attribute]) -> syn::Result<QueryFieldOptions> {
    let mut options = QueryFieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("query") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
            } else if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
            } else {
                return Err(meta.error("unsupported query attribute, expected `rename` or `skip`"));
            }
            Ok(())
        })?;
    }

    Ok(options)
}

/// Generate code for handling a single field, `None` if the field is never emitted.
fn generate_field_handler(
    field_name: &syn::Ident,
    kind: FieldKind,
    key: &str,
) -> Option<TokenStream> {
    match kind {
        FieldKind::Text => Some(quote! {
            pairs.push((
                #key.to_owned(),
                ::std::convert::AsRef::<str>::as_ref(&self.#field_name).to_owned(),
            ));
        }),
        FieldKind::OptionalText => Some(quote! {
            if let ::std::option::Option::Some(value) = &self.#field_name {
                pairs.push((
                    #key.to_owned(),
                    ::std::convert::AsRef::<str>::as_ref(value).to_owned(),
                ));
            }
        }),
        FieldKind::Ignored => None,
    }
}

/// Check if a type is `String`, `str`, a reference to one, or a smart pointer to `str`.
fn is_string_like(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) => is_string_like(&reference.elem),
        Type::Paren(paren) => is_string_like(&paren.elem),
        Type::Group(group) => is_string_like(&group.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            let Some(segment) = type_path.path.segments.last() else {
                return false;
            };
            match segment.ident.to_string().as_str() {
                "String" | "str" => segment.arguments.is_none(),
                "Cow" | "Box" | "Rc" | "Arc" => {
                    first_type_argument(&segment.arguments).is_some_and(is_str)
                }
                _ => false,
            }
        }
        _ => false,
    }
}

/// Check if a type is exactly `str`.
fn is_str(ty: &Type) -> bool {
    matches!(ty, Type::Path(type_path)
        if type_path.qself.is_none() && type_path.path.is_ident("str"))
}

/// Inner type of `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    first_type_argument(&segment.arguments)
}

/// First type in a `<...>` argument list, lifetimes skipped.
fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}
