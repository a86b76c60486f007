use tlvdf::lix2::smf::SMFPDUSessionEstablishment;
use tlvdf::lix2::{IRIEvent, Iri, XIRIEvent, Xiri};
use tlvdf::{
    ByteView, DecodeError, DissectorOptions, FieldTable, FieldValue, NodeKind, RecordingTree, Tag,
};

/// BER TLV with a definite length in the shortest form.
fn ber(tag: &[u8], content: &[u8]) -> Vec<u8> {
    let mut out = tag.to_vec();
    match content.len() {
        n if n < 0x80 => out.push(n as u8),
        n if n <= 0xff => out.extend([0x81, n as u8]),
        n => out.extend([0x82, (n >> 8) as u8, n as u8]),
    }
    out.extend_from_slice(content);
    out
}

/// Identifier octets of a context-specific tag below 128.
fn context(n: u8, constructed: bool) -> Vec<u8> {
    let first = if constructed { 0xa0 } else { 0x80 };
    if n < 31 {
        vec![first | n]
    } else {
        vec![first | 0x1f, n]
    }
}

fn payload(event_tag: u8, record: &[u8]) -> Vec<u8> {
    let oid = ber(&context(1, false), &[0x04, 0x00, 0x02]);
    let alternative = ber(&context(event_tag, true), record);
    let event = ber(&context(2, true), &alternative);
    ber(&[0x30], &[oid, event].concat())
}

fn dissect_xiri(data: &[u8]) -> RecordingTree<'_> {
    tlvdf::dissect::<Xiri>(ByteView::new(data), &DissectorOptions::default())
}

fn registration() -> Vec<u8> {
    let record = [
        ber(&context(1, false), &[0x01]),
        ber(&context(2, false), &[0x03]),
        ber(&context(4, true), &ber(&context(1, false), b"001010123456789")),
        ber(&context(7, true), &ber(&context(1, false), b"447700900123")),
    ]
    .concat();
    payload(1, &record)
}

#[test]
fn amf_registration() {
    let data = registration();
    let tree = dissect_xiri(&data);
    assert_eq!(tree.diagnostics().count(), 0, "{}", tree.render());

    let oid = tree.find("lix2.xiripayload.xiripayload_oid").unwrap();
    assert_eq!(oid.name(), "xIRIPayloadOID");
    assert_eq!(oid.value(), Some(&FieldValue::Oid(vec![4, 0, 2])));

    let event = tree.find("lix2.xirievent.registration").unwrap();
    assert_eq!(event.name(), "registration");
    assert_eq!(event.kind, NodeKind::Subtree);

    let result = tree
        .find("lix2.amfregistration.registration_result")
        .unwrap();
    assert_eq!(
        result.display_value().as_deref(),
        Some("threeGPPAndNonThreeGPPAccess (3)")
    );
    assert_eq!(
        tree.find("lix2.supi.imsi").unwrap().value(),
        Some(&FieldValue::Str("001010123456789".into()))
    );
    assert_eq!(
        tree.find("lix2.gpsi.msisdn").unwrap().value(),
        Some(&FieldValue::Str("447700900123".into()))
    );
}

#[test]
fn rendering() {
    let data = registration();
    let tree = dissect_xiri(&data);
    let want = "\
XIRIPayload
    xIRIPayloadOID: 4.0.2
    event
        registration
            registrationType: initial (1)
            registrationResult: threeGPPAndNonThreeGPPAccess (3)
            sUPI
                iMSI: 001010123456789
            gPSI
                mSISDN: 447700900123
";
    assert_eq!(tree.render(), want);
}

#[test]
fn every_xiri_event_dispatches() {
    for n in (1..=91u8).filter(|&n| n != 16) {
        let data = payload(n, &[]);
        let tree = dissect_xiri(&data);
        let field = XIRIEvent::FIELDS
            .iter()
            .find(|f| f.tag == Tag::context(u32::from(n)))
            .unwrap();
        let node = tree
            .find(field.abbrev)
            .unwrap_or_else(|| panic!("[{n}] not dispatched:\n{}", tree.render()));
        assert_eq!(node.name(), field.name);
        assert_eq!(node.kind, NodeKind::Subtree);
        assert_eq!(tree.diagnostics().count(), 0, "[{n}]");
    }
}

#[test]
fn tag_16_is_not_an_xiri_event() {
    let data = payload(16, &[]);
    let tree = dissect_xiri(&data);
    let unknown = tree.find("tlvdf.unknown").unwrap();
    assert_eq!(
        unknown.diagnostics[0].error,
        DecodeError::UnknownChoiceTag {
            tag: Tag::context(16)
        }
    );
}

#[test]
fn iri_payload_with_cell_site_report_and_targets() {
    let cell = ber(&[0x30], &ber(&context(3, false), b"20240131120000Z"));
    let oid = ber(&context(1, false), &[0x04, 0x00, 0x02]);
    let event = ber(&context(2, true), &ber(&context(16, true), &cell));
    let target = ber(
        &[0x30],
        &[
            ber(&context(1, true), &ber(&context(6, false), b"447700900123")),
            ber(&context(2, false), &[0x03]),
        ]
        .concat(),
    );
    let targets = ber(&context(3, true), &target);
    let data = ber(&[0x30], &[oid, event, targets].concat());

    let tree = tlvdf::dissect::<Iri>(ByteView::new(&data), &DissectorOptions::default());
    assert_eq!(tree.diagnostics().count(), 0, "{}", tree.render());

    let report = tree.find("lix2.irievent.mdfcell_site_report").unwrap();
    assert_eq!(report.name(), "mDFCellSiteReport");
    let time = tree.find("lix2.cell_information.time_of_location").unwrap();
    assert_eq!(
        time.display_value().as_deref(),
        Some("2024-01-31 12:00:00 UTC")
    );
    assert_eq!(
        tree.find("lix2.target_identifier.msisdn").unwrap().value(),
        Some(&FieldValue::Str("447700900123".into()))
    );
    assert_eq!(
        tree.find("lix2.iritarget_identifier.provenance")
            .unwrap()
            .display_value()
            .as_deref(),
        Some("matchedOn (3)")
    );
}

#[test]
fn every_iri_event_dispatches() {
    for field in IRIEvent::FIELDS {
        let Tag { number, .. } = field.tag;
        let data = payload(number as u8, &[]);
        let tree = tlvdf::dissect::<Iri>(ByteView::new(&data), &DissectorOptions::default());
        let node = tree.find(field.abbrev).unwrap();
        assert_eq!(node.name(), field.name);
    }
}

#[test]
fn long_form_lengths() {
    let uri = vec![b'a'; 128];
    let record = ber(&context(2, false), &uri);
    assert_eq!(&record[..3], &[0x82, 0x81, 0x80]);
    let data = payload(36, &record);

    let tree = dissect_xiri(&data);
    assert_eq!(tree.diagnostics().count(), 0, "{}", tree.render());
    let node = tree.find("lix2.ptcregistration.ptcserver_uri").unwrap();
    assert_eq!(node.name(), "pTCServerURI");
    assert_eq!(node.range.len(), 131);
    assert_eq!(
        node.value(),
        Some(&FieldValue::Str(String::from_utf8(uri).unwrap().into()))
    );
}

#[test]
fn sequence_of_untagged_choices() {
    // An MMS notification whose originator is known by two identities.
    let ids = [
        ber(&context(1, false), b"447700900123"),
        ber(&context(2, false), b"someone@example.com"),
    ]
    .concat();
    let party = ber(&context(1, true), &ids);
    let record = ber(&context(3, true), &party);
    let data = payload(19, &record);

    let tree = dissect_xiri(&data);
    assert_eq!(tree.diagnostics().count(), 0, "{}", tree.render());
    let list = tree.find("lix2.mmsparty.mmsparty_ids").unwrap();
    let names: Vec<_> = list.children.iter().map(|&c| tree.node(c).name()).collect();
    assert_eq!(names, ["e164Number", "emailAddress"]);
}

#[test]
fn unknown_fields_inside_records() {
    let record = [
        ber(&context(30, false), &[0xde, 0xad]),
        ber(&context(1, false), &[0x02]),
    ]
    .concat();
    let data = payload(1, &record);
    let tree = dissect_xiri(&data);

    let unknown = tree.find("tlvdf.unknown").unwrap();
    assert_eq!(
        unknown.diagnostics[0].error,
        DecodeError::UnknownTag {
            tag: Tag::context(30)
        }
    );
    assert_eq!(
        tree.find("lix2.amfregistration.registration_type")
            .unwrap()
            .display_value()
            .as_deref(),
        Some("mobility (2)")
    );
}

#[test]
fn late_session_establishment_elements() {
    let record = [
        ber(&context(5, false), &[0x01]),
        ber(&context(18, false), &[0x01, 0x02]),
        ber(&context(19, false), &[0x27, 0x80]),
        ber(&context(20, true), &ber(&context(1, false), &[0x02])),
    ]
    .concat();
    let data = payload(6, &record);
    let tree = dissect_xiri(&data);
    assert_eq!(tree.diagnostics().count(), 0, "{}", tree.render());
    assert!(tree.find("tlvdf.unknown").is_none());

    for (n, want) in [(19, "uEEPSPDNConnection"), (20, "ePS5GSComboInfo")] {
        let field = SMFPDUSessionEstablishment::FIELDS
            .iter()
            .find(|f| f.tag == Tag::context(n))
            .unwrap();
        assert_eq!(field.name, want);
        assert!(tree.find(field.abbrev).is_some(), "{}", tree.render());
    }
}

#[test]
fn bad_primitives_are_shown_raw() {
    let record = ber(&context(11, false), b"2024");
    let data = payload(4, &record);
    let tree = dissect_xiri(&data);

    let time = tree
        .find("lix2.amfstart_of_interception_with_registered_ue.time_of_registration")
        .unwrap();
    assert_eq!(time.value(), Some(&FieldValue::Bytes(b"2024")));
    assert!(matches!(
        time.diagnostics[0].error,
        DecodeError::InvalidValue(_)
    ));
}

#[test]
fn payload_must_be_a_sequence() {
    let data = ber(&[0x31], &[]);
    let tree = dissect_xiri(&data);
    let root = tree.node(tree.root());
    assert_eq!(
        tree.find("tlvdf.unknown").unwrap().diagnostics[0].error,
        DecodeError::UnexpectedTag {
            expected: Tag::universal(16),
            found: Tag::universal(17),
        }
    );
    assert!(root.diagnostics.is_empty());
}

#[test]
fn indefinite_lengths_are_reported() {
    let data = [0x30, 0x80, 0x00, 0x00];
    let tree = dissect_xiri(&data);
    let root = tree.node(tree.root());
    assert_eq!(root.diagnostics.len(), 1);
    assert_eq!(root.diagnostics[0].range, 0..4);
    assert_eq!(
        root.diagnostics[0].error,
        DecodeError::IndefiniteLengthNotSupported
    );
}

#[test]
fn depth_guard() {
    let data = registration();
    let opts = DissectorOptions {
        max_depth: 1,
        ..DissectorOptions::default()
    };
    let tree = tlvdf::dissect::<Xiri>(ByteView::new(&data), &opts);

    let event = tree.find("lix2.xiripayload.event").unwrap();
    assert_eq!(event.diagnostics[0].error, DecodeError::DepthExceeded { max: 1 });
    assert!(matches!(
        event.value(),
        Some(FieldValue::Bytes(b)) if b.len() == event.range.len() - 2
    ));
    assert!(tree.find("lix2.xirievent.registration").is_none());
    assert!(tree.find("lix2.xiripayload.xiripayload_oid").is_some());
}
