use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod kind;

/// Derive macro for implementing the `Kind` trait on a fieldless enum.
///
/// Generates `Kind` (`ALL` in declaration order, `name`), `FromStr` and
/// `Display`. Wire names default to the SCREAMING_SNAKE_CASE form of the
/// variant name; `#[kind(rename = "...")]` overrides a single variant.
///
/// ```rust,ignore
/// #[derive(Kind, Debug, Clone, Copy, PartialEq, Eq)]
/// enum Channel {
///     Email,
///     #[kind(rename = "TEXT")]
///     Sms,
///     PushNotification, // "PUSH_NOTIFICATION"
/// }
/// ```
#[proc_macro_derive(Kind, attributes(kind))]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match kind::expand(&input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
