//! Derive macros for the todo context store
//!
//! This crate provides procedural macros to reduce boilerplate when writing
//! action enums for a store.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `todo_context_core::action::Action`
//!
//! # Example
//!
//! ```ignore
//! use todo_context_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     Create { text: String },
//!     #[kind = "DELETE"]
//!     Remove { id: u64 },
//! }
//!
//! assert_eq!(TodoAction::Create { text: "test".into() }.kind(), "CREATE");
//! assert_eq!(TodoAction::KINDS, &["CREATE", "DELETE"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Lit};

/// Derive macro for Action enums
///
/// Implements `todo_context_core::action::Action`:
/// - `KINDS` - every kind name, in declaration order
/// - `kind()` - the kind name of the current variant
///
/// Kind names default to the variant name in `SCREAMING_SNAKE_CASE`
/// (`MarkDone` becomes `MARK_DONE`), which lines up with
/// `#[serde(rename_all = "SCREAMING_SNAKE_CASE")]`.
///
/// # Attributes
///
/// - `#[kind = "NAME"]` - Override the kind name of a variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A `#[kind]` attribute is not a string literal
/// - Two variants end up with the same kind name
#[proc_macro_derive(Action, attributes(kind))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut kinds: Vec<String> = Vec::new();
    let mut kind_arms = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let kind = match kind_override(&variant.attrs) {
            Ok(Some(kind)) => kind,
            Ok(None) => screaming_snake_case(&variant_name.to_string()),
            Err(err) => return err.to_compile_error().into(),
        };

        if kinds.contains(&kind) {
            return syn::Error::new_spanned(
                variant,
                format!("Duplicate action kind \"{kind}\""),
            )
            .to_compile_error()
            .into();
        }

        kind_arms.push(match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #kind, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #kind, },
            Fields::Unit => quote! { Self::#variant_name => #kind, },
        });
        kinds.push(kind);
    }

    // An empty enum has no values, so `kind` can never be called
    let kind_body = if kind_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#kind_arms)*
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics ::todo_context_core::action::Action for #name #ty_generics #where_clause {
            const KINDS: &'static [&'static str] = &[#(#kinds),*];

            fn kind(&self) -> &'static str {
                #kind_body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[kind = "NAME"]` if present
fn kind_override(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("kind")) else {
        return Ok(None);
    };

    let value = &attr.meta.require_name_value()?.value;
    match value {
        Expr::Lit(expr) => match &expr.lit {
            Lit::Str(lit) => Ok(Some(lit.value())),
            other => Err(syn::Error::new_spanned(other, "#[kind] expects a string literal")),
        },
        other => Err(syn::Error::new_spanned(other, "#[kind] expects a string literal")),
    }
}

/// `MarkDone` -> `MARK_DONE`
fn screaming_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev_lower = false;

    for ch in ident.chars() {
        if ch.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        out.extend(ch.to_uppercase());
    }

    out
}
