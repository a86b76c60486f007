#![allow(dead_code)]

// Tests that a plain table of leaves derives, with names and abbreviations from the variants

use tlvdf::*;

#[derive(FieldTable)]
#[tlvdf(prefix = "demo")]
enum Demo {
    #[tlvdf(tag = 1, typ = "uint", len = 1)]
    Count,
    #[tlvdf(tag = 2, typ = "string", rename = "Host Name")]
    Host,
    /// Shown as a blurb.
    #[tlvdf(tag = 3, typ = "ipv4")]
    Address,
}

fn main() {
    assert_eq!(Demo::FIELDS.len(), 3);
    assert_eq!(Demo::Count.descriptor().abbrev, "demo.count");
    assert_eq!(Demo::Host.descriptor().name, "Host Name");
    assert_eq!(Demo::Address.descriptor().blurb, Some("Shown as a blurb."));
}
