use proc_macro2::TokenStream;
use quote::quote;

/// Primitive encodings, keyed by how they are spelled in `#[tlvdf(typ = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Primitive {
    Uint,
    Int,
    Bool,
    Bytes,
    Utf8,
    Ascii,
    Ipv4,
    Ipv6,
    IpAddr,
    Time,
    Bits,
    RelativeOid,
    Oid,
    Null,
}

impl Primitive {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        let ret = match name {
            "uint" => Self::Uint,
            // ENUMERATED is encoded exactly like INTEGER.
            "int" | "enum" => Self::Int,
            "bool" => Self::Bool,
            "bytes" => Self::Bytes,
            "string" | "utf8" => Self::Utf8,
            "ascii" | "numeric" => Self::Ascii,
            "ipv4" => Self::Ipv4,
            "ipv6" => Self::Ipv6,
            "ip" => Self::IpAddr,
            "time" => Self::Time,
            "bits" => Self::Bits,
            "relative_oid" => Self::RelativeOid,
            "oid" => Self::Oid,
            "null" => Self::Null,
            _ => return None,
        };
        Some(ret)
    }

    /// Whether a value-to-label table makes sense for this encoding.
    pub(crate) fn is_integer(self) -> bool {
        matches!(self, Self::Uint | Self::Int)
    }

    pub(crate) fn to_tokens(self) -> TokenStream {
        match self {
            Self::Uint => quote! { tlvdf::Encoding::Uint },
            Self::Int => quote! { tlvdf::Encoding::Int },
            Self::Bool => quote! { tlvdf::Encoding::Bool },
            Self::Bytes => quote! { tlvdf::Encoding::Bytes },
            Self::Utf8 => quote! { tlvdf::Encoding::Utf8 },
            Self::Ascii => quote! { tlvdf::Encoding::Ascii },
            Self::Ipv4 => quote! { tlvdf::Encoding::Ipv4 },
            Self::Ipv6 => quote! { tlvdf::Encoding::Ipv6 },
            Self::IpAddr => quote! { tlvdf::Encoding::IpAddr },
            Self::Time => quote! { tlvdf::Encoding::GeneralizedTime },
            Self::Bits => quote! { tlvdf::Encoding::BitString },
            Self::RelativeOid => quote! { tlvdf::Encoding::RelativeOid },
            Self::Oid => quote! { tlvdf::Encoding::ObjectId },
            Self::Null => quote! { tlvdf::Encoding::Null },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) enum TagClass {
    Universal,
    Application,
    #[default]
    Context,
    Private,
}

impl TagClass {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "universal" => Some(Self::Universal),
            "application" => Some(Self::Application),
            "context" => Some(Self::Context),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    pub(crate) fn tag_tokens(self, number: u32) -> TokenStream {
        match self {
            Self::Universal => quote! { tlvdf::Tag::universal(#number) },
            Self::Application => quote! { tlvdf::Tag::application(#number) },
            Self::Context => quote! { tlvdf::Tag::context(#number) },
            Self::Private => quote! { tlvdf::Tag::private(#number) },
        }
    }
}

/// Wire length constraint of a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum LengthSpec {
    #[default]
    Any,
    Exact(usize),
    OneOf(Vec<usize>),
    Range { min: usize, max: usize },
}

impl LengthSpec {
    pub(crate) fn to_tokens(&self) -> TokenStream {
        match self {
            Self::Any => quote! { tlvdf::LengthRule::Any },
            Self::Exact(n) => quote! { tlvdf::LengthRule::Exact(#n) },
            Self::OneOf(ns) => quote! { tlvdf::LengthRule::OneOf(&[#(#ns),*]) },
            Self::Range { min, max } => quote! {
                tlvdf::LengthRule::Range { min: #min, max: #max }
            },
        }
    }
}

#[cfg(test)]
mod test_types {
    use super::*;

    #[test]
    fn primitive_names_resolve() {
        assert_eq!(Primitive::from_name("uint"), Some(Primitive::Uint));
        assert_eq!(Primitive::from_name("enum"), Some(Primitive::Int));
        assert_eq!(Primitive::from_name("numeric"), Some(Primitive::Ascii));
        assert_eq!(Primitive::from_name("time"), Some(Primitive::Time));
        assert_eq!(Primitive::from_name("FT_UINT8"), None);
    }

    #[test]
    fn only_integers_take_values() {
        assert!(Primitive::Uint.is_integer());
        assert!(Primitive::Int.is_integer());
        assert!(!Primitive::Utf8.is_integer());
    }

    #[test]
    fn tag_class_defaults_to_context() {
        assert_eq!(TagClass::default(), TagClass::Context);
        assert_eq!(TagClass::from_name("universal"), Some(TagClass::Universal));
        assert_eq!(TagClass::from_name("UNIVERSAL"), None);
    }

    #[test]
    fn one_of_lengths_emit_a_slice() {
        let tokens = LengthSpec::OneOf(vec![1, 2]).to_tokens().to_string();
        assert!(tokens.contains("OneOf"));
        assert!(tokens.contains("1usize"));
        assert!(tokens.contains("2usize"));
    }
}
