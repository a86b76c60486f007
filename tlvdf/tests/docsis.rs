use tlvdf::docsis::DocsisVsif;
use tlvdf::{ByteView, DecodeError, DissectorOptions, FieldValue, RecordingTree, Severity, Tag};

fn dissect(data: &[u8]) -> RecordingTree<'_> {
    tlvdf::dissect::<DocsisVsif>(ByteView::new(data), &DissectorOptions::default())
}

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

#[test]
fn cisco_phone_lines() {
    let data = unhex("08 03 00 00 0C 0A 01 05");
    let tree = dissect(&data);

    let phones = tree.find("docsis_vsif.cisco.num_phones").unwrap();
    assert_eq!(phones.name(), "Number of phone lines");
    assert_eq!(phones.value(), Some(&FieldValue::Uint(5)));
    assert_eq!(phones.range, 5..8);
    assert_eq!(tree.diagnostics().count(), 0);

    assert_eq!(
        tree.render(),
        "Vendor Id: Cisco Systems, Inc. (12)\nNumber of phone lines: 5\n"
    );
}

#[test]
fn cisco_ip_precedence() {
    let data = unhex("08 03 00 00 0C 0B 09 01 01 03 02 04 00 00 00 32 80 03 61 62 63");
    let tree = dissect(&data);
    assert_eq!(tree.diagnostics().count(), 0);

    let prec = tree.find("docsis_vsif.cisco.ip_precedence").unwrap();
    assert_eq!(prec.range, 5..16);
    assert_eq!(prec.children.len(), 2);
    assert_eq!(
        tree.find("docsis_vsif.cisco.ip_prec.value").unwrap().value(),
        Some(&FieldValue::Uint(3))
    );
    assert_eq!(
        tree.find("docsis_vsif.cisco.ip_prec.bw").unwrap().value(),
        Some(&FieldValue::Uint(50))
    );
    assert_eq!(
        tree.find("docsis_vsif.cisco.ios_config_file").unwrap().value(),
        Some(&FieldValue::Str("abc".into()))
    );
}

#[test]
fn ip_precedence_value_of_wrong_length() {
    let data = unhex("08 03 00 00 0C 0B 0A 01 02 00 05 02 04 00 00 00 32 0A 01 03");
    let tree = dissect(&data);

    let value = tree.find("docsis_vsif.cisco.ip_prec.value").unwrap();
    assert_eq!(value.value(), Some(&FieldValue::Bytes(&[0x00, 0x05])));
    assert_eq!(value.diagnostics.len(), 1);
    assert_eq!(value.diagnostics[0].range, 7..11);
    assert!(matches!(
        value.diagnostics[0].error,
        DecodeError::WrongLength {
            field: "IP Precedence Value",
            actual: 2,
            ..
        }
    ));

    // Siblings inside and after the nested TLV are unaffected.
    assert_eq!(
        tree.find("docsis_vsif.cisco.ip_prec.bw").unwrap().value(),
        Some(&FieldValue::Uint(50))
    );
    assert_eq!(
        tree.find("docsis_vsif.cisco.num_phones").unwrap().value(),
        Some(&FieldValue::Uint(3))
    );
    assert_eq!(tree.diagnostics().count(), 1);
}

#[test]
fn bandwidth_must_be_four_bytes() {
    let data = unhex("08 03 00 00 0C 0B 03 02 01 32");
    let tree = dissect(&data);
    let bw = tree.find("docsis_vsif.cisco.ip_prec.bw").unwrap();
    assert_eq!(bw.value(), Some(&FieldValue::Bytes(&[0x32])));
    assert!(matches!(
        bw.diagnostics[0].error,
        DecodeError::WrongLength { actual: 1, .. }
    ));
}

#[test]
fn general_extension() {
    let data = unhex("08 03 FF FF FF 01 04 00 00 00 07 04 02 01 00 0B 03 61 62 63");
    let tree = dissect(&data);
    assert_eq!(tree.diagnostics().count(), 0);
    assert_eq!(
        tree.find("docsis_vsif.vendor_id").unwrap().display_value().as_deref(),
        Some("General Extension Information (16777215)")
    );
    assert_eq!(
        tree.find("docsis_vsif.gex.cm_load_balancing_policy_id")
            .unwrap()
            .value(),
        Some(&FieldValue::Uint(7))
    );
    assert_eq!(
        tree.find("docsis_vsif.gex.cm_ranging_class_id_extension")
            .unwrap()
            .value(),
        Some(&FieldValue::Uint(256))
    );
    let sti = tree.find("docsis_vsif.gex.service_type_identifier").unwrap();
    assert_eq!(sti.name(), "Service Type Identifier");
    assert_eq!(sti.value(), Some(&FieldValue::Str("abc".into())));
}

#[test]
fn unknown_vendor_is_one_blob() {
    let data = unhex("08 03 00 11 22 01 02 03 04");
    let tree = dissect(&data);
    assert_eq!(
        tree.find("docsis_vsif.vendor_id").unwrap().value(),
        Some(&FieldValue::Uint(0x001122))
    );
    let blobs = tree.find_all("docsis_vsif.unknown_vendor");
    assert_eq!(blobs.len(), 1);
    assert_eq!(blobs[0].range, 5..9);
    assert_eq!(blobs[0].value(), Some(&FieldValue::Bytes(&[1, 2, 3, 4])));
    assert_eq!(tree.children(tree.root()).count(), 2);
}

#[test]
fn first_tlv_of_wrong_type_still_dispatches() {
    let data = unhex("09 03 00 00 0C 0A 01 05");
    let tree = dissect(&data);

    let root = tree.node(tree.root());
    assert_eq!(root.diagnostics.len(), 1);
    assert_eq!(root.diagnostics[0].severity, Severity::Warning);
    assert_eq!(root.diagnostics[0].range, 0..2);
    assert_eq!(
        root.diagnostics[0].error,
        DecodeError::UnexpectedTag {
            expected: Tag::context(8),
            found: Tag::context(9),
        }
    );

    let vendor = tree.find("docsis_vsif.vendor_id").unwrap();
    assert_eq!(vendor.range, 0..5);
    assert_eq!(vendor.value(), Some(&FieldValue::Uint(0x0c)));
    assert_eq!(
        tree.find("docsis_vsif.cisco.num_phones").unwrap().value(),
        Some(&FieldValue::Uint(5))
    );
    assert!(tree.find("docsis_vsif.unknown_vendor").is_none());
}

#[test]
fn first_tlv_of_wrong_type_and_unknown_oui() {
    let data = unhex("07 03 00 11 22 01 02");
    let tree = dissect(&data);

    assert_eq!(tree.diagnostics().count(), 1);
    let blob = tree.find("docsis_vsif.unknown_vendor").unwrap();
    assert_eq!(blob.range, 5..7);
}

#[test]
fn vendor_id_of_wrong_length_still_dispatches() {
    let data = unhex("08 04 00 00 0C 00 0A 01 05");
    let tree = dissect(&data);

    let vendor = tree.find("docsis_vsif.vendor_id").unwrap();
    assert_eq!(vendor.range, 0..6);
    assert_eq!(vendor.value(), Some(&FieldValue::Bytes(&[0x00, 0x00, 0x0c, 0x00])));
    assert!(matches!(
        vendor.diagnostics[0].error,
        DecodeError::WrongLength { actual: 4, .. }
    ));
    assert_eq!(
        tree.find("docsis_vsif.cisco.num_phones").unwrap().value(),
        Some(&FieldValue::Uint(5))
    );
}

#[test]
fn unknown_subtypes_are_skipped() {
    let data = unhex("08 03 00 00 0C 0F 01 AA 0A 01 05");
    let tree = dissect(&data);

    let unknown = tree.find("tlvdf.unknown").unwrap();
    assert_eq!(unknown.range, 5..8);
    assert_eq!(unknown.value(), Some(&FieldValue::Bytes(&[0xaa])));
    assert_eq!(
        unknown.diagnostics[0].error,
        DecodeError::UnknownTag {
            tag: Tag::context(15)
        }
    );
    assert_eq!(
        tree.find("docsis_vsif.cisco.num_phones").unwrap().value(),
        Some(&FieldValue::Uint(5))
    );
}

#[test]
fn empty_input() {
    let tree = dissect(&[]);
    assert_eq!(tree.children(tree.root()).count(), 0);
    assert!(matches!(
        tree.node(tree.root()).diagnostics[0].error,
        DecodeError::TruncatedHeader { needed: 2, available: 0 }
    ));
}
