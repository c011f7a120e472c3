//! Expansion of `#[derive(Record)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Data;
use syn::DeriveInput;
use syn::Expr;
use syn::ExprLit;
use syn::Fields;
use syn::Ident;
use syn::Lit;
use syn::LitStr;
use syn::Meta;
use syn::Token;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;

/// One exposed struct field.
struct MemberField<'a> {
    ident: &'a Ident,
    /// The declared name, without any `r#` prefix.
    name: String,
    serialized_name: Option<String>,
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`#[derive(Record)]` does not support generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => return Err(named_fields_error(input)),
        },
        _ => return Err(named_fields_error(input)),
    };

    let mut members = Vec::with_capacity(fields.len());
    for field in fields {
        let attrs = FieldAttrs::parse(field)?;
        if attrs.skip {
            continue;
        }
        // Named fields always carry an ident.
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        members.push(MemberField {
            ident,
            name: ident.unraw().to_string(),
            serialized_name: attrs.rename,
        });
    }

    let type_ident = &input.ident;
    let type_name = type_ident.unraw().to_string();

    let member_entries = members.iter().map(|member| {
        let name = &member.name;
        match &member.serialized_name {
            Some(serialized_name) => quote! {
                minigql::RecordMember::new(#name).with_serialized_name(#serialized_name)
            },
            None => quote! { minigql::RecordMember::new(#name) },
        }
    });

    let value_arms = members.iter().map(|member| {
        let name = &member.name;
        let ident = member.ident;
        quote! {
            #name => ::std::option::Option::Some(
                ::std::convert::Into::<minigql::Value>::into(
                    ::std::clone::Clone::clone(&self.#ident),
                ),
            ),
        }
    });

    Ok(quote! {
        impl minigql::Record for #type_ident {
            fn type_name(&self) -> &str {
                #type_name
            }

            fn members(&self) -> ::std::vec::Vec<minigql::RecordMember<'_>> {
                ::std::vec![#(#member_entries),*]
            }

            fn member_value(&self, name: &str) -> ::std::option::Option<minigql::Value> {
                match name {
                    #(#value_arms)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::convert::From<#type_ident> for minigql::Value {
            fn from(record: #type_ident) -> Self {
                minigql::Value::record(record)
            }
        }
    })
}

fn named_fields_error(input: &DeriveInput) -> syn::Error {
    syn::Error::new_spanned(
        &input.ident,
        "`#[derive(Record)]` only supports structs with named fields",
    )
}

// =============================================================================
// Field attributes
// =============================================================================

#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
}

impl FieldAttrs {
    /// Reads `#[record(...)]` and the `rename` part of `#[serde(...)]`. A
    /// `#[record(rename)]` wins over any serde rename.
    fn parse(field: &syn::Field) -> syn::Result<Self> {
        let mut attrs = FieldAttrs::default();
        let mut record_rename = None;
        let mut serde_rename = None;

        for attr in &field.attrs {
            if attr.path().is_ident("record") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        attrs.skip = true;
                        Ok(())
                    } else if meta.path.is_ident("rename") {
                        let name: LitStr = meta.value()?.parse()?;
                        record_rename = Some(name.value());
                        Ok(())
                    } else {
                        Err(meta.error("expected `skip` or `rename = \"...\"`"))
                    }
                })?;
            } else if attr.path().is_ident("serde") {
                // Other serde options are none of our business, so parse
                // loosely and only pick out `rename`.
                let metas = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
                for meta in metas {
                    if let Some(name) = serde_rename_of(&meta)? {
                        serde_rename = Some(name);
                    }
                }
            }
        }

        attrs.rename = record_rename.or(serde_rename);
        Ok(attrs)
    }
}

/// The serialized name given by `rename = "..."` or
/// `rename(serialize = "...")`.
fn serde_rename_of(meta: &Meta) -> syn::Result<Option<String>> {
    if !meta.path().is_ident("rename") {
        return Ok(None);
    }
    match meta {
        Meta::NameValue(name_value) => Ok(string_literal(&name_value.value)),
        Meta::List(list) => {
            let nested = list.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            Ok(nested.iter().find_map(|meta| match meta {
                Meta::NameValue(name_value) if name_value.path.is_ident("serialize") => {
                    string_literal(&name_value.value)
                },
                _ => None,
            }))
        },
        Meta::Path(_) => Ok(None),
    }
}

fn string_literal(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Some(lit.value()),
        _ => None,
    }
}
