#![allow(dead_code)]

// Tests that entries can point at other tables, as a nested value or as repeated elements

use tlvdf::*;

const COLOURS: ValueStrings = &[(0, "red"), (1, "green")];

#[derive(FieldTable)]
#[tlvdf(prefix = "demo.inner", rename = "Inner")]
enum Inner {
    #[tlvdf(tag = 1, typ = "enum", values = "COLOURS")]
    Colour,
}

#[derive(FieldTable)]
#[tlvdf(prefix = "demo.outer")]
enum Outer {
    #[tlvdf(tag = 1, nested = "Inner")]
    One,
    #[tlvdf(tag = 2, seq_of = "Inner")]
    Many,
    #[tlvdf(tag = 3, set_of = "Inner")]
    Unordered,
    #[tlvdf(tag = 4, class = "private", typ = "bytes", len = [6, 8])]
    Address,
}

fn main() {
    assert!(matches!(Outer::One.descriptor().decoder, Decoder::Sequence(_)));
    assert!(matches!(Outer::Many.descriptor().decoder, Decoder::SequenceOf(_)));
    assert!(matches!(Outer::Unordered.descriptor().decoder, Decoder::SetOf(_)));
    assert_eq!(Outer::Address.tag(), Tag::new(TagClass::Private, 4));
    assert_eq!(Inner::Colour.descriptor().value_label(1), Some("green"));
    assert_eq!(Inner::ELEMENT.name, "Inner");
}
