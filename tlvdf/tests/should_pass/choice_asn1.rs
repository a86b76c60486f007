#![allow(dead_code)]

// Tests that choices derive, and that asn1 renaming only touches the first letter

use tlvdf::*;

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "demo.party")]
enum Party {
    #[tlvdf(tag = 1, typ = "numeric", min_len = 1, max_len = 15)]
    MSISDN,
    #[tlvdf(tag = 2, typ = "utf8")]
    EmailAddress,
}

fn main() {
    assert!(matches!(Party::DECODER, Decoder::Choice(_)));
    assert_eq!(Party::MSISDN.descriptor().name, "mSISDN");
    assert_eq!(Party::EmailAddress.descriptor().abbrev, "demo.party.email_address");
    assert_eq!(Party::ELEMENT.tag, Tag::universal(0));
}
