use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, LitStr};

/// Derive macro for enumeration name tables.
///
/// Implements `tessera_conversion::Enumeration` for a fieldless enum:
///
/// - `NAMES`: every variant with its canonical name, in declaration order.
/// - `from_name(&str)` / `name(self)`: exact lookups in both directions.
///
/// The canonical name defaults to the variant name in kebab-case
/// (`LineCenter` → `"line-center"`). Override it with
/// `#[enumeration(rename = "...")]`. Two variants with the same
/// canonical name are rejected at compile time.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy, Enumeration)]
/// pub enum TextTransform {
///     None,
///     Uppercase,
///     Lowercase,
/// }
/// ```
///
/// The enum must also be `Copy`.
#[proc_macro_derive(Enumeration, attributes(enumeration))]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Enumeration only supports enums",
            ))
        }
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Enumeration does not support generic enums",
        ));
    }

    let mut idents: Vec<&Ident> = Vec::new();
    let mut names: Vec<String> = Vec::new();

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Enumeration only supports unit variants",
            ));
        }

        // Parse #[enumeration(...)] attribute.
        let mut rename: Option<String> = None;
        for attr in &variant.attrs {
            if !attr.path().is_ident("enumeration") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    rename = Some(value.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown enumeration attribute (expected 'rename')"))
                }
            })?;
        }

        let canonical = rename.unwrap_or_else(|| kebab_case(&variant.ident.to_string()));
        if let Some(index) = names.iter().position(|n| *n == canonical) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!(
                    "canonical name '{canonical}' is already used by variant '{}'",
                    idents[index]
                ),
            ));
        }

        idents.push(&variant.ident);
        names.push(canonical);
    }

    let expanded = quote! {
        impl tessera_conversion::Enumeration for #name {
            const NAMES: &'static [(Self, &'static str)] = &[
                #((#name::#idents, #names)),*
            ];

            fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#names => ::core::option::Option::Some(#name::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name(self) -> &'static str {
                match self {
                    #(#name::#idents => #names,)*
                }
            }
        }
    };

    Ok(TokenStream::from(expanded))
}

/// `LineCenter` → `line-center`, `ViewportY` → `viewport-y`,
/// `SDFIcon` → `sdf-icon`, `Map3D` → `map3-d`.
fn kebab_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            out.push('-');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_lower);
            if boundary && !out.ends_with('-') {
                out.push('-');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}
