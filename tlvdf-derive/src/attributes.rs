use syn::punctuated::Punctuated;
use syn::spanned::Spanned;

use crate::types::{LengthSpec, Primitive, TagClass};
use crate::util::*;

/// Implement this for things which can extract options out of meta items.
pub(crate) trait OptionBuilder {
    fn add_option(&mut self, meta: &syn::Meta) -> syn::Result<()>;
}

/// Initializes some set of options from a list of attributes. Note that each attribute may contain
/// multiple meta items, but each meta item should map to exactly one option.
pub(crate) fn init_options<T>(attrs: &[syn::Attribute]) -> syn::Result<T>
where
    T: OptionBuilder + Default,
{
    let mut opts = T::default();
    // Not all attributes are tlvdf attributes, so we need to filter them out first.
    let meta_items = get_meta_items(get_tlvdf_attrs(attrs).as_slice())?;
    for meta in &meta_items {
        opts.add_option(meta)?;
    }
    Ok(opts)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TableKind {
    /// Tagged fields in any order until the region is exhausted. Covers DOCSIS TLV bodies too.
    #[default]
    Sequence,
    /// Exactly one alternative, picked by its tag.
    Choice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    /// `SomeName` becomes `someName`.
    Asn1,
    /// `SomeName` becomes `Some Name`.
    Title,
}

/// Options for the table as a whole, i.e. the enum.
#[derive(Debug, Clone, Default)]
pub(crate) struct TableOptions {
    pub(crate) kind: TableKind,
    /// Filter prefix shared by every entry, e.g. "docsis_vsif.cisco".
    pub(crate) prefix: Option<String>,
    /// Display name used when the whole table is a list element.
    pub(crate) rename: Option<String>,
    pub(crate) rename_all: Option<RenameRule>,
}

/// Options for one entry, i.e. one variant.
#[derive(Debug, Clone, Default)]
pub(crate) struct EntryOptions {
    pub(crate) tag: Option<u32>,
    pub(crate) class: Option<TagClass>,
    pub(crate) rename: Option<String>,
    pub(crate) typ: Option<Primitive>,
    pub(crate) len: Option<LengthSpec>,
    pub(crate) min_len: Option<usize>,
    pub(crate) max_len: Option<usize>,
    /// Path to a `&[(i64, &str)]` table of labels.
    pub(crate) values: Option<syn::Path>,
    /// Another `FieldTable` type whose decoder this entry uses.
    pub(crate) nested: Option<syn::Path>,
    pub(crate) seq_of: Option<syn::Path>,
    pub(crate) set_of: Option<syn::Path>,
}

impl OptionBuilder for TableOptions {
    fn add_option(&mut self, meta: &syn::Meta) -> syn::Result<()> {
        match meta {
            syn::Meta::NameValue(nv) => match nv.path.get_ident() {
                None => return make_err(meta, "expected identifier"),
                Some(ident) => match ident.to_string().as_str() {
                    META_KIND => {
                        let kind = get_lit_str(&nv.value)?;
                        self.kind = match kind.value().as_str() {
                            "sequence" => TableKind::Sequence,
                            "choice" => TableKind::Choice,
                            _ => return make_err(kind, "expected \"sequence\" or \"choice\""),
                        };
                    }
                    META_PREFIX => {
                        let prefix = get_lit_str(&nv.value)?.value();
                        if prefix.is_empty() {
                            return make_err(&nv.value, "prefix must not be empty");
                        }
                        self.prefix = Some(prefix);
                    }
                    META_RENAME => {
                        let rename = get_lit_str(&nv.value)?.value();
                        self.rename = Some(rename);
                    }
                    META_RENAME_ALL => {
                        let rule = get_lit_str(&nv.value)?;
                        self.rename_all = match rule.value().as_str() {
                            "asn1" => Some(RenameRule::Asn1),
                            "title" => Some(RenameRule::Title),
                            _ => return make_err(rule, "expected \"asn1\" or \"title\""),
                        };
                    }
                    _ => return make_err(meta, "unrecognized attribute"),
                },
            },
            _ => return make_err(meta, "unexpected meta item"),
        }
        Ok(())
    }
}

impl OptionBuilder for EntryOptions {
    fn add_option(&mut self, meta: &syn::Meta) -> syn::Result<()> {
        match meta {
            syn::Meta::NameValue(nv) => match nv.path.get_ident() {
                None => return make_err(meta, "expected identifier"),
                Some(ident) => match ident.to_string().as_str() {
                    META_TAG => {
                        let tag = get_lit_int(&nv.value)?.base10_parse()?;
                        self.tag = Some(tag);
                    }
                    META_CLASS => {
                        let class = get_lit_str(&nv.value)?;
                        match TagClass::from_name(&class.value()) {
                            Some(c) => self.class = Some(c),
                            None => return make_err(class, "unknown tag class"),
                        }
                    }
                    META_RENAME => {
                        let rename = get_lit_str(&nv.value)?.value();
                        self.rename = Some(rename);
                    }
                    META_TYP => {
                        let typ = get_lit_str(&nv.value)?;
                        match Primitive::from_name(&typ.value()) {
                            Some(p) => self.typ = Some(p),
                            None => return make_err(typ, "unknown primitive type"),
                        }
                    }
                    META_LEN => {
                        let lens = parse_usizes(&nv.value)?;
                        self.len = match lens.as_slice() {
                            [] => return make_err(&nv.value, "expected at least one length"),
                            [n] => Some(LengthSpec::Exact(*n)),
                            _ => Some(LengthSpec::OneOf(lens)),
                        };
                    }
                    META_MIN_LEN => {
                        let min = get_lit_int(&nv.value)?.base10_parse()?;
                        self.min_len = Some(min);
                    }
                    META_MAX_LEN => {
                        let max = get_lit_int(&nv.value)?.base10_parse()?;
                        self.max_len = Some(max);
                    }
                    META_VALUES => self.values = Some(parse_path(&nv.value)?),
                    META_NESTED => self.nested = Some(parse_path(&nv.value)?),
                    META_SEQ_OF => self.seq_of = Some(parse_path(&nv.value)?),
                    META_SET_OF => self.set_of = Some(parse_path(&nv.value)?),
                    _ => return make_err(meta, "unrecognized attribute"),
                },
            },
            _ => return make_err(meta, "unexpected meta item"),
        }
        Ok(())
    }
}

impl EntryOptions {
    /// Folds `len`, `min_len` and `max_len` into a single constraint.
    pub(crate) fn length_spec(&self, span: &impl Spanned) -> syn::Result<LengthSpec> {
        match (&self.len, self.min_len, self.max_len) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                make_err(span, "`len` cannot be combined with `min_len` or `max_len`")
            }
            (Some(len), None, None) => Ok(len.clone()),
            (None, None, None) => Ok(LengthSpec::Any),
            (None, min, max) => {
                let min = min.unwrap_or(0);
                let max = max.unwrap_or(usize::MAX);
                if min > max {
                    return make_err(span, "`min_len` is larger than `max_len`");
                }
                Ok(LengthSpec::Range { min, max })
            }
        }
    }
}

const META_KIND: &str = "kind";
const META_PREFIX: &str = "prefix";
const META_RENAME: &str = "rename";
const META_RENAME_ALL: &str = "rename_all";
const META_TAG: &str = "tag";
const META_CLASS: &str = "class";
const META_TYP: &str = "typ";
const META_LEN: &str = "len";
const META_MIN_LEN: &str = "min_len";
const META_MAX_LEN: &str = "max_len";
const META_VALUES: &str = "values";
const META_NESTED: &str = "nested";
const META_SEQ_OF: &str = "seq_of";
const META_SET_OF: &str = "set_of";

/// Extracts all the meta items from a list of attributes.
pub(crate) fn get_meta_items(attrs: &[&syn::Attribute]) -> syn::Result<Vec<syn::Meta>> {
    let mut xs = Vec::new();
    for attr in attrs {
        let pairs: Punctuated<syn::Meta, syn::Token![,]> =
            attr.parse_args_with(Punctuated::parse_terminated)?;
        xs.extend(pairs);
    }
    Ok(xs)
}

/// Extracts the attributes which start with some identifier.
pub(crate) fn get_attrs<'a>(attrs: &'a [syn::Attribute], ident: &str) -> Vec<&'a syn::Attribute> {
    attrs
        .iter()
        .filter(|attr| match attr.meta {
            syn::Meta::List(ref lst) => lst
                .path
                .segments
                .first()
                .filter(|s| s.ident == ident)
                .is_some(),
            _ => false,
        })
        .collect()
}

pub(crate) fn get_tlvdf_attrs(attrs: &[syn::Attribute]) -> Vec<&syn::Attribute> {
    get_attrs(attrs, "tlvdf")
}

pub(crate) fn get_docs(attrs: &[syn::Attribute]) -> Option<String> {
    let docs = attrs
        .iter()
        .filter_map(get_doc)
        .collect::<Vec<_>>()
        .join(" ");
    if docs.is_empty() {
        None
    } else {
        Some(docs)
    }
}

/// Extracts the doc comment contents from an attribute, if any.
fn get_doc(attr: &syn::Attribute) -> Option<String> {
    match attr.meta {
        syn::Meta::NameValue(ref nv) if nv.path.is_ident("doc") => get_lit_str(&nv.value)
            .ok()
            .map(|lit| lit.value().trim().to_string())
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}

#[cfg(test)]
mod test_attribute_parsing {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn get_attrs_works() {
        let foo: syn::Attribute = parse_quote! { #[foo(bar, baz = "qux")] };
        let bar: syn::Attribute = parse_quote! { #[bar(foo, baz = "qux")] };
        let attrs = vec![foo.clone(), bar.clone()];
        assert_eq!(get_attrs(&attrs, "foo"), vec![&foo]);
        assert_eq!(get_attrs(&attrs, "bar"), vec![&bar]);
        assert_eq!(get_attrs(&attrs, "baz").len(), 0);
    }

    #[test]
    fn get_docs_joins_lines() {
        let a: syn::Attribute = parse_quote! { #[doc = " Number of"] };
        let b: syn::Attribute = parse_quote! { #[doc = " phone lines "] };
        assert_eq!(get_docs(&[a, b]), Some("Number of phone lines".to_string()));
        assert_eq!(get_docs(&[]), None);
    }

    #[test]
    fn entry_options_parse() {
        let attrs: Vec<syn::Attribute> = vec![
            parse_quote! { #[tlvdf(tag = 0x0a, typ = "uint", len = 1)] },
            parse_quote! { #[tlvdf(rename = "Number of phone lines")] },
        ];
        let opts = init_options::<EntryOptions>(&attrs).unwrap();
        assert_eq!(opts.tag, Some(10));
        assert_eq!(opts.typ, Some(Primitive::Uint));
        assert_eq!(opts.len, Some(LengthSpec::Exact(1)));
        assert_eq!(opts.rename.as_deref(), Some("Number of phone lines"));
    }

    #[test]
    fn length_ranges_fold() {
        let attrs: Vec<syn::Attribute> = vec![parse_quote! { #[tlvdf(min_len = 6, max_len = 15)] }];
        let opts = init_options::<EntryOptions>(&attrs).unwrap();
        let spec = opts.length_spec(&attrs[0]).unwrap();
        assert_eq!(spec, LengthSpec::Range { min: 6, max: 15 });

        let attrs: Vec<syn::Attribute> = vec![parse_quote! { #[tlvdf(len = [2, 3], max_len = 4)] }];
        let opts = init_options::<EntryOptions>(&attrs).unwrap();
        assert!(opts.length_spec(&attrs[0]).is_err());
    }

    #[test]
    fn unknown_options_are_rejected() {
        let attrs: Vec<syn::Attribute> = vec![parse_quote! { #[tlvdf(decode_with = "f")] }];
        assert!(init_options::<EntryOptions>(&attrs).is_err());

        let attrs: Vec<syn::Attribute> = vec![parse_quote! { #[tlvdf(kind = "set")] }];
        assert!(init_options::<TableOptions>(&attrs).is_err());
    }

    #[test]
    fn other_attributes_are_ignored() {
        let attrs: Vec<syn::Attribute> = vec![
            parse_quote! { #[derive(Debug)] },
            parse_quote! { #[tlvdf(kind = "choice", prefix = "lix2.supi")] },
        ];
        let opts = init_options::<TableOptions>(&attrs).unwrap();
        assert_eq!(opts.kind, TableKind::Choice);
        assert_eq!(opts.prefix.as_deref(), Some("lix2.supi"));
    }
}
