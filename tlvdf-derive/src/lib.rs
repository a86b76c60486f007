//! This crate provides the derive macro for [tlvdf](../tlvdf/index.html), along with some helpers.

use proc_macro::TokenStream;

mod attributes;
mod model;
mod types;
mod util;

use crate::model::Table;

/// Turns a fieldless enum into an immutable table of field descriptors.
///
/// Each variant is one tag. The generated `tlvdf::FieldTable` impl exposes the table as
/// `FIELDS`, the decoder other tables use to refer to it as `DECODER`, and the descriptor used
/// when the type is a list element as `ELEMENT`.
///
/// ```ignore
/// #[derive(FieldTable)]
/// #[tlvdf(prefix = "docsis_vsif.cisco")]
/// enum Cisco {
///     #[tlvdf(tag = 0x0a, typ = "uint", len = 1, rename = "Number of phone lines")]
///     NumPhones,
///     #[tlvdf(tag = 0x0b, nested = "IpPrecedence", rename = "IP Precedence Encodings")]
///     IpPrecedence,
/// }
/// ```
#[proc_macro_derive(FieldTable, attributes(tlvdf))]
pub fn derive_field_table(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    let ret = derive_field_table_impl(&input).unwrap_or_else(|e| e.to_compile_error());
    ret.into()
}

fn derive_field_table_impl(input: &syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let table = Table::from_input(input)?;
    Ok(table.impl_field_table())
}
