use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;

use crate::attributes::*;
use crate::types::{LengthSpec, Primitive, TagClass};
use crate::util::*;

/// How an entry's value is decoded.
#[derive(Debug, Clone)]
pub(crate) enum EntryDecoder {
    Primitive(Primitive),
    Nested(syn::Path),
    SequenceOf(syn::Path),
    SetOf(syn::Path),
}

impl EntryDecoder {
    fn to_tokens(&self) -> TokenStream {
        match self {
            EntryDecoder::Primitive(p) => {
                let enc = p.to_tokens();
                quote! { tlvdf::Decoder::Primitive(#enc) }
            }
            EntryDecoder::Nested(path) => quote! { <#path as tlvdf::FieldTable>::DECODER },
            EntryDecoder::SequenceOf(path) => quote! {
                tlvdf::Decoder::SequenceOf(<#path as tlvdf::FieldTable>::ELEMENT)
            },
            EntryDecoder::SetOf(path) => quote! {
                tlvdf::Decoder::SetOf(<#path as tlvdf::FieldTable>::ELEMENT)
            },
        }
    }
}

/// One variant of a table enum, i.e. one tag.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) ident: syn::Ident,
    pub(crate) class: TagClass,
    pub(crate) tag: u32,
    pub(crate) name: String,
    pub(crate) abbrev: String,
    pub(crate) blurb: Option<String>,
    pub(crate) decoder: EntryDecoder,
    pub(crate) length: LengthSpec,
    pub(crate) values: Option<syn::Path>,
}

impl Entry {
    fn from_variant(
        variant: &syn::Variant,
        prefix: &str,
        rename_all: Option<RenameRule>,
    ) -> syn::Result<Self> {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return make_err(&variant.fields, "FieldTable entries must be unit variants");
        }
        if let Some((_, discriminant)) = &variant.discriminant {
            return make_err(discriminant, "use #[tlvdf(tag = ...)] instead of a discriminant");
        }

        let opts = init_options::<EntryOptions>(&variant.attrs)?;

        let tag = match opts.tag {
            Some(tag) => tag,
            None => return make_err(&variant.ident, "missing #[tlvdf(tag = ...)]"),
        };

        let decoder = match (&opts.typ, &opts.nested, &opts.seq_of, &opts.set_of) {
            (Some(p), None, None, None) => EntryDecoder::Primitive(*p),
            (None, Some(path), None, None) => EntryDecoder::Nested(path.clone()),
            (None, None, Some(path), None) => EntryDecoder::SequenceOf(path.clone()),
            (None, None, None, Some(path)) => EntryDecoder::SetOf(path.clone()),
            (None, None, None, None) => {
                return make_err(
                    &variant.ident,
                    "expected one of `typ`, `nested`, `seq_of` or `set_of`",
                )
            }
            _ => {
                return make_err(
                    &variant.ident,
                    "`typ`, `nested`, `seq_of` and `set_of` are mutually exclusive",
                )
            }
        };

        if let Some(values) = &opts.values {
            match &decoder {
                EntryDecoder::Primitive(p) if p.is_integer() => (),
                _ => return make_err(values, "`values` only applies to integer entries"),
            }
        }

        let name = match (&opts.rename, rename_all) {
            (Some(rename), _) => rename.clone(),
            (None, Some(RenameRule::Asn1)) => variant.ident.to_asn1_case(),
            (None, _) => variant.ident.to_tlvdf_title_case(),
        };

        Ok(Entry {
            ident: variant.ident.clone(),
            class: opts.class.unwrap_or_default(),
            tag,
            name,
            abbrev: format!("{}.{}", prefix, variant.ident.to_tlvdf_snake_case()),
            blurb: get_docs(&variant.attrs),
            length: opts.length_spec(&variant.ident)?,
            values: opts.values,
            decoder,
        })
    }

    fn descriptor_tokens(&self) -> TokenStream {
        let tag = self.class.tag_tokens(self.tag);
        let name = &self.name;
        let abbrev = &self.abbrev;
        let blurb = option_str(self.blurb.as_deref());
        let decoder = self.decoder.to_tokens();
        let length = self.length.to_tokens();
        let values = match &self.values {
            Some(path) => quote! { std::option::Option::Some(#path) },
            None => quote! { std::option::Option::None },
        };
        quote! {
            tlvdf::FieldDescriptor {
                tag: #tag,
                name: #name,
                abbrev: #abbrev,
                blurb: #blurb,
                decoder: #decoder,
                length: #length,
                values: #values,
            }
        }
    }
}

/// A whole `#[derive(FieldTable)]` enum.
#[derive(Debug, Clone)]
pub(crate) struct Table {
    pub(crate) ident: syn::Ident,
    pub(crate) kind: TableKind,
    pub(crate) name: String,
    pub(crate) prefix: String,
    pub(crate) blurb: Option<String>,
    pub(crate) entries: Vec<Entry>,
}

impl Table {
    pub(crate) fn from_input(input: &syn::DeriveInput) -> syn::Result<Self> {
        let data = match &input.data {
            syn::Data::Enum(data) => data,
            syn::Data::Struct(data) => {
                return make_err(&data.struct_token, "only enums can derive FieldTable")
            }
            syn::Data::Union(data) => {
                return make_err(&data.union_token, "only enums can derive FieldTable")
            }
        };
        if !input.generics.params.is_empty() {
            return make_err(&input.generics, "FieldTable enums cannot be generic");
        }

        let opts = init_options::<TableOptions>(&input.attrs)?;
        let prefix = opts
            .prefix
            .clone()
            .unwrap_or_else(|| input.ident.to_tlvdf_snake_case());
        let name = match (&opts.rename, opts.rename_all) {
            (Some(rename), _) => rename.clone(),
            (None, Some(RenameRule::Asn1)) => input.ident.to_string(),
            (None, _) => input.ident.to_tlvdf_title_case(),
        };

        let mut entries = Vec::with_capacity(data.variants.len());
        let mut seen = HashSet::new();
        for variant in &data.variants {
            let entry = Entry::from_variant(variant, &prefix, opts.rename_all)?;
            if !seen.insert((entry.class, entry.tag)) {
                return make_err(&variant.ident, "duplicate tag in this table");
            }
            entries.push(entry);
        }

        Ok(Table {
            ident: input.ident.clone(),
            kind: opts.kind,
            name,
            prefix,
            blurb: get_docs(&input.attrs),
            entries,
        })
    }

    pub(crate) fn impl_field_table(&self) -> TokenStream {
        let ident = &self.ident;
        let descriptors = self.entries.iter().map(Entry::descriptor_tokens);
        let decoder = match self.kind {
            TableKind::Sequence => quote! { tlvdf::Decoder::Sequence(Self::FIELDS) },
            TableKind::Choice => quote! { tlvdf::Decoder::Choice(Self::FIELDS) },
        };
        // Sequences appear as UNIVERSAL 16 when they are list elements. A choice element carries
        // the tag of whichever alternative is present, so the element tag is never compared.
        let element_tag = match self.kind {
            TableKind::Sequence => TagClass::Universal.tag_tokens(16),
            TableKind::Choice => TagClass::Universal.tag_tokens(0),
        };
        let name = &self.name;
        let prefix = &self.prefix;
        let blurb = option_str(self.blurb.as_deref());

        let descriptor_arms = self.entries.iter().enumerate().map(|(idx, entry)| {
            let variant = &entry.ident;
            quote! { Self::#variant => &Self::FIELDS[#idx], }
        });
        let from_tag_arms = self.entries.iter().enumerate().map(|(idx, entry)| {
            let variant = &entry.ident;
            quote! { std::option::Option::Some(#idx) => std::option::Option::Some(Self::#variant), }
        });

        quote! {
            impl tlvdf::FieldTable for #ident {
                const FIELDS: &'static [tlvdf::FieldDescriptor] = &[#(#descriptors),*];
                const DECODER: tlvdf::Decoder = #decoder;
                const ELEMENT: &'static tlvdf::FieldDescriptor = &tlvdf::FieldDescriptor {
                    tag: #element_tag,
                    name: #name,
                    abbrev: #prefix,
                    blurb: #blurb,
                    decoder: Self::DECODER,
                    length: tlvdf::LengthRule::Any,
                    values: std::option::Option::None,
                };

                fn descriptor(&self) -> &'static tlvdf::FieldDescriptor {
                    match *self {
                        #(#descriptor_arms)*
                    }
                }

                fn from_tag(tag: tlvdf::Tag) -> std::option::Option<Self> {
                    match Self::FIELDS.iter().position(|field| field.tag == tag) {
                        #(#from_tag_arms)*
                        _ => std::option::Option::None,
                    }
                }
            }
        }
    }
}

fn option_str(s: Option<&str>) -> TokenStream {
    match s {
        Some(s) => quote! { std::option::Option::Some(#s) },
        None => quote! { std::option::Option::None },
    }
}

#[cfg(test)]
mod test_table_model {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn builds_entries_with_prefix_and_names() {
        let input: syn::DeriveInput = parse_quote! {
            #[tlvdf(prefix = "docsis_vsif.cisco")]
            enum Cisco {
                /// Phone lines provisioned on the modem.
                #[tlvdf(tag = 0x0a, typ = "uint", len = 1, rename = "Number of phone lines")]
                NumPhones,
                #[tlvdf(tag = 0x80, typ = "string")]
                IosConfigFile,
            }
        };
        let table = Table::from_input(&input).unwrap();
        assert_eq!(table.kind, TableKind::Sequence);
        assert_eq!(table.entries.len(), 2);

        let phones = &table.entries[0];
        assert_eq!(phones.tag, 10);
        assert_eq!(phones.name, "Number of phone lines");
        assert_eq!(phones.abbrev, "docsis_vsif.cisco.num_phones");
        assert_eq!(phones.blurb.as_deref(), Some("Phone lines provisioned on the modem."));
        assert_eq!(phones.length, LengthSpec::Exact(1));

        let ios = &table.entries[1];
        assert_eq!(ios.tag, 0x80);
        assert_eq!(ios.name, "Ios Config File");
        assert_eq!(ios.length, LengthSpec::Any);
    }

    #[test]
    fn asn1_rename_rule() {
        let input: syn::DeriveInput = parse_quote! {
            #[tlvdf(kind = "choice", rename_all = "asn1")]
            enum XiriEvent {
                #[tlvdf(tag = 6, nested = "SmfPduSessionEstablishment")]
                PDUSessionEstablishment,
            }
        };
        let table = Table::from_input(&input).unwrap();
        assert_eq!(table.kind, TableKind::Choice);
        assert_eq!(table.prefix, "xiri_event");
        assert_eq!(table.entries[0].name, "pDUSessionEstablishment");
        assert_eq!(table.entries[0].abbrev, "xiri_event.pdusession_establishment");
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let input: syn::DeriveInput = parse_quote! {
            enum Dup {
                #[tlvdf(tag = 1, typ = "uint")]
                A,
                #[tlvdf(tag = 1, typ = "uint")]
                B,
            }
        };
        assert!(Table::from_input(&input).is_err());
    }

    #[test]
    fn same_number_in_another_class_is_fine() {
        let input: syn::DeriveInput = parse_quote! {
            enum Mixed {
                #[tlvdf(tag = 16, typ = "bytes")]
                A,
                #[tlvdf(tag = 16, class = "universal", typ = "bytes")]
                B,
            }
        };
        assert!(Table::from_input(&input).is_ok());
    }

    #[test]
    fn rejects_bad_shapes() {
        let tests: Vec<syn::DeriveInput> = vec![
            parse_quote! { struct NotAnEnum { x: u8 } },
            parse_quote! { enum NoTag { #[tlvdf(typ = "uint")] A } },
            parse_quote! { enum NoDecoder { #[tlvdf(tag = 1)] A } },
            parse_quote! { enum TwoDecoders { #[tlvdf(tag = 1, typ = "uint", nested = "X")] A } },
            parse_quote! { enum Tuple { #[tlvdf(tag = 1, typ = "uint")] A(u8) } },
            parse_quote! {
                enum ValuesOnString { #[tlvdf(tag = 1, typ = "string", values = "V")] A }
            },
            parse_quote! { enum Generic<T> { #[tlvdf(tag = 1, typ = "uint")] A } },
        ];
        for tt in tests {
            assert!(Table::from_input(&tt).is_err(), "{}", tt.ident);
        }
    }

    #[test]
    fn impl_mentions_every_entry() {
        let input: syn::DeriveInput = parse_quote! {
            enum Gex {
                #[tlvdf(tag = 1, typ = "uint", len = 4)]
                PolicyId,
                #[tlvdf(tag = 4, typ = "uint", len = [2])]
                RangingClassIdExtension,
            }
        };
        let out = Table::from_input(&input).unwrap().impl_field_table().to_string();
        assert!(out.contains("gex.policy_id"));
        assert!(out.contains("gex.ranging_class_id_extension"));
        assert!(out.contains("Decoder :: Sequence"));
    }
}
