use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr};

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "`Kind` can only be derived for enums",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Kind` cannot be derived for generic enums",
        ));
    }

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "`Kind` requires at least one variant",
        ));
    }

    let mut variants = Vec::with_capacity(data.variants.len());
    let mut wire_names: Vec<String> = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "`Kind` variants must not carry data",
            ));
        }

        let wire_name = match rename(&variant.attrs)? {
            Some(renamed) => renamed,
            None => screaming_snake_case(&variant.ident.to_string()),
        };

        if wire_names.contains(&wire_name) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate kind name `{wire_name}`"),
            ));
        }

        variants.push(&variant.ident);
        wire_names.push(wire_name);
    }

    Ok(quote! {
        impl ::selecta::Kind for #name {
            const ALL: &'static [Self] = &[#(Self::#variants),*];

            fn name(&self) -> &'static str {
                match self {
                    #(Self::#variants => #wire_names,)*
                }
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = ::selecta::ParseKindError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::selecta::Kind>::from_name(s)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as ::selecta::Kind>::name(self))
            }
        }
    })
}

fn rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut renamed = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("kind")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                renamed = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported `kind` attribute, expected `rename`"))
            }
        })?;
    }

    Ok(renamed)
}

/// `PushNotification` -> `PUSH_NOTIFICATION`, `HTTPGateway` -> `HTTP_GATEWAY`.
fn screaming_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }

    out
}
