//! Procedural macros for idag
//!
//! This crate provides the `#[derive(Node)]` macro that implements the `Node` identity trait
//! by reading one of the struct's fields.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Member};

/// Derive macro implementing the `Node` trait.
///
/// The generated `id()` borrows one field as `&str` through `AsRef<str>`, so the field can be a
/// `String`, a `&'static str`, a `Box<str>`, an `Arc<str>`, or any other type implementing
/// `AsRef<str>`.
///
/// # Choosing the Id Field
///
/// - A field marked `#[node(id)]` is used if there is one.
/// - Otherwise a field named `id` is used.
///
/// ```ignore
/// use idag::Node;
///
/// #[derive(Node)]
/// struct Privilege {
///     id: String,
///     label: String,
/// }
///
/// #[derive(Node)]
/// struct Step {
///     #[node(id)]
///     name: String,
///     retries: u8,
/// }
///
/// #[derive(Node)]
/// struct Tag(#[node(id)] String);
/// ```
///
/// # Requirements
///
/// - Only structs are supported (not enums or unions)
/// - At most one field may be marked `#[node(id)]`
/// - Tuple structs must mark their id field
///
/// # Generated Code
///
/// ```ignore
/// impl ::idag::Node for Privilege {
///     fn id(&self) -> &str {
///         ::core::convert::AsRef::<str>::as_ref(&self.id)
///     }
/// }
/// ```
#[proc_macro_derive(Node, attributes(node))]
pub fn derive_node(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) | Data::Union(_) => {
            return syn::Error::new_spanned(
                &input.ident,
                "#[derive(Node)] only supports structs\n\n\
                 Implement idag::Node by hand for enums and unions.",
            )
            .to_compile_error()
            .into();
        }
    };

    let member = match id_member(fields) {
        Ok(Some(member)) => member,
        Ok(None) => {
            return syn::Error::new_spanned(
                &input.ident,
                "no id field found\n\n\
                 Add a field named `id`, or mark the field holding the node id with #[node(id)].",
            )
            .to_compile_error()
            .into();
        }
        Err(e) => return e.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::idag::Node for #name #ty_generics #where_clause {
            fn id(&self) -> &str {
                ::core::convert::AsRef::<str>::as_ref(&self.#member)
            }
        }
    }
    .into()
}

/// Find the field carrying the node id: the one marked `#[node(id)]`, else the one named `id`.
fn id_member(fields: &Fields) -> syn::Result<Option<Member>> {
    let mut marked: Option<Member> = None;

    for (index, field) in fields.iter().enumerate() {
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("node")) {
            let mut is_id = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    is_id = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported node attribute\n\n\
                         The only supported form is #[node(id)].",
                    ))
                }
            })?;

            if is_id {
                if marked.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "more than one field is marked #[node(id)]\n\n\
                         A node has exactly one id.",
                    ));
                }
                marked = Some(match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(index.into()),
                });
            }
        }
    }

    if marked.is_some() {
        return Ok(marked);
    }

    Ok(fields.iter().find_map(|field| {
        field
            .ident
            .as_ref()
            .filter(|ident| *ident == "id")
            .map(|ident| Member::Named(ident.clone()))
    }))
}
