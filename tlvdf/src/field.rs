//! Static field metadata. Tables of [`FieldDescriptor`]s are normally generated with
//! `#[derive(FieldTable)]` and live in read-only memory for the whole process.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagClass {
    Universal,
    Application,
    Context,
    Private,
}

impl TagClass {
    /// Maps the two class bits of a BER identifier octet.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::Context,
            _ => TagClass::Private,
        }
    }
}

/// A tag as matched against descriptor tables. DOCSIS type bytes are treated as context tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    pub class: TagClass,
    pub number: u32,
}

impl Tag {
    pub const fn new(class: TagClass, number: u32) -> Self {
        Tag { class, number }
    }

    pub const fn universal(number: u32) -> Self {
        Tag::new(TagClass::Universal, number)
    }

    pub const fn application(number: u32) -> Self {
        Tag::new(TagClass::Application, number)
    }

    pub const fn context(number: u32) -> Self {
        Tag::new(TagClass::Context, number)
    }

    pub const fn private(number: u32) -> Self {
        Tag::new(TagClass::Private, number)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            TagClass::Context => write!(f, "[{}]", self.number),
            TagClass::Universal => write!(f, "[UNIVERSAL {}]", self.number),
            TagClass::Application => write!(f, "[APPLICATION {}]", self.number),
            TagClass::Private => write!(f, "[PRIVATE {}]", self.number),
        }
    }
}

/// Allowed wire lengths of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    Any,
    Exact(usize),
    OneOf(&'static [usize]),
    Range { min: usize, max: usize },
}

impl LengthRule {
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            LengthRule::Any => true,
            LengthRule::Exact(n) => len == n,
            LengthRule::OneOf(ns) => ns.contains(&len),
            LengthRule::Range { min, max } => (min..=max).contains(&len),
        }
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LengthRule::Any => f.write_str("any"),
            LengthRule::Exact(n) => write!(f, "{n}"),
            LengthRule::OneOf(ns) => match ns {
                [] => f.write_str("nothing"),
                [n] => write!(f, "{n}"),
                [init @ .., last] => {
                    let init = init
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    write!(f, "{init} or {last}")
                }
            },
            LengthRule::Range { min, max } if max == usize::MAX => write!(f, "at least {min}"),
            LengthRule::Range { min, max } => write!(f, "{min} to {max}"),
        }
    }
}

/// Leaf encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Big-endian unsigned integer of 1 to 8 bytes.
    Uint,
    /// Two's complement integer of 1 to 8 bytes (BER INTEGER and ENUMERATED).
    Int,
    Bool,
    Bytes,
    Utf8,
    /// NumericString, PrintableString, IA5String and friends.
    Ascii,
    Ipv4,
    Ipv6,
    /// Either an IPv4 or an IPv6 address, told apart by length.
    IpAddr,
    GeneralizedTime,
    BitString,
    RelativeOid,
    ObjectId,
    Null,
}

/// How the value bytes of a field are interpreted.
#[derive(Clone, Copy)]
pub enum Decoder {
    Primitive(Encoding),
    /// Tagged fields in any order until the region is exhausted.
    Sequence(&'static [FieldDescriptor]),
    /// Exactly one of the alternatives.
    Choice(&'static [FieldDescriptor]),
    /// Repeated elements, kept in wire order.
    SequenceOf(&'static FieldDescriptor),
    SetOf(&'static FieldDescriptor),
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tables nest deeply, so only say what they refer to.
        match self {
            Decoder::Primitive(enc) => f.debug_tuple("Primitive").field(enc).finish(),
            Decoder::Sequence(fields) => write!(f, "Sequence({} fields)", fields.len()),
            Decoder::Choice(alts) => write!(f, "Choice({} alternatives)", alts.len()),
            Decoder::SequenceOf(elem) => write!(f, "SequenceOf({})", elem.abbrev),
            Decoder::SetOf(elem) => write!(f, "SetOf({})", elem.abbrev),
        }
    }
}

/// Label tables for integer values, e.g. `&[(1, "initial"), (2, "mobility")]`.
pub type ValueStrings = &'static [(i64, &'static str)];

#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub tag: Tag,
    /// Display name.
    pub name: &'static str,
    /// Filter string, e.g. "docsis_vsif.cisco.num_phones".
    pub abbrev: &'static str,
    pub blurb: Option<&'static str>,
    pub decoder: Decoder,
    pub length: LengthRule,
    pub values: Option<ValueStrings>,
}

impl FieldDescriptor {
    /// A descriptor which shows its value as raw bytes. Used for markers the walker adds itself.
    pub const fn bytes(name: &'static str, abbrev: &'static str) -> Self {
        FieldDescriptor {
            tag: Tag::universal(0),
            name,
            abbrev,
            blurb: None,
            decoder: Decoder::Primitive(Encoding::Bytes),
            length: LengthRule::Any,
            values: None,
        }
    }

    pub fn value_label(&self, value: i64) -> Option<&'static str> {
        self.values?
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, label)| *label)
    }
}

/// Finds the entry for a tag.
pub fn lookup(fields: &'static [FieldDescriptor], tag: Tag) -> Option<&'static FieldDescriptor> {
    fields.iter().find(|field| field.tag == tag)
}

/// Implemented by `#[derive(FieldTable)]` enums. Each variant stands for one entry of
/// [`FieldTable::FIELDS`].
pub trait FieldTable {
    const FIELDS: &'static [FieldDescriptor];
    /// What an entry referring to this type with `nested = "..."` decodes with.
    const DECODER: Decoder;
    /// Descriptor used when this type is the element of a SEQUENCE OF or SET OF.
    const ELEMENT: &'static FieldDescriptor;

    fn descriptor(&self) -> &'static FieldDescriptor;

    fn from_tag(tag: Tag) -> Option<Self>
    where
        Self: Sized;

    fn tag(&self) -> Tag {
        self.descriptor().tag
    }
}

#[cfg(test)]
mod test_field {
    use super::*;

    static FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor {
            tag: Tag::context(1),
            name: "Registration Type",
            abbrev: "test.registration_type",
            blurb: None,
            decoder: Decoder::Primitive(Encoding::Int),
            length: LengthRule::Range { min: 1, max: 8 },
            values: Some(&[(1, "initial"), (2, "mobility")]),
        },
        FieldDescriptor::bytes("Other", "test.other"),
    ];

    #[test]
    fn length_rules() {
        assert!(LengthRule::Any.accepts(0));
        assert!(LengthRule::Exact(4).accepts(4));
        assert!(!LengthRule::Exact(4).accepts(2));
        assert!(LengthRule::OneOf(&[2, 3]).accepts(3));
        assert!(!LengthRule::OneOf(&[2, 3]).accepts(4));
        assert!(LengthRule::Range { min: 6, max: 15 }.accepts(15));
        assert!(!LengthRule::Range { min: 6, max: 15 }.accepts(5));
    }

    #[test]
    fn length_rule_display() {
        let tests = [
            (LengthRule::Any, "any"),
            (LengthRule::Exact(1), "1"),
            (LengthRule::OneOf(&[2, 3]), "2 or 3"),
            (LengthRule::OneOf(&[1, 2, 4]), "1, 2 or 4"),
            (LengthRule::Range { min: 6, max: 15 }, "6 to 15"),
            (LengthRule::Range { min: 1, max: usize::MAX }, "at least 1"),
        ];
        for (tt, want) in tests {
            assert_eq!(tt.to_string(), want);
        }
    }

    #[test]
    fn tags_differ_by_class() {
        assert_ne!(Tag::context(16), Tag::universal(16));
        assert_eq!(Tag::new(TagClass::from_bits(0b10), 3), Tag::context(3));
        assert_eq!(Tag::context(3).to_string(), "[3]");
        assert_eq!(Tag::universal(16).to_string(), "[UNIVERSAL 16]");
    }

    #[test]
    fn lookup_by_tag() {
        let found = lookup(FIELDS, Tag::context(1)).unwrap();
        assert_eq!(found.abbrev, "test.registration_type");
        assert!(lookup(FIELDS, Tag::context(2)).is_none());
    }

    #[test]
    fn value_labels() {
        assert_eq!(FIELDS[0].value_label(2), Some("mobility"));
        assert_eq!(FIELDS[0].value_label(9), None);
        assert_eq!(FIELDS[1].value_label(1), None);
    }
}
