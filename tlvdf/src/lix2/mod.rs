//! 3GPP lawful interception records (TS 33.128), BER encoded.
//!
//! [`Xiri`] reads the `XIRIPayload` a point of interception sends over X2. [`Iri`] reads the
//! `IRIPayload` delivered over HI2, which wraps the same events and adds the identities of the
//! targets the record matched on.
//!
//! ```rust
//! use tlvdf::lix2::Xiri;
//! use tlvdf::{ByteView, DissectorOptions};
//!
//! let data = [
//!     0x30, 0x0f, // XIRIPayload
//!     0x81, 0x03, 0x04, 0x00, 0x02, // xIRIPayloadOID
//!     0xa2, 0x08, // event
//!     0xa1, 0x06, // registration
//!     0x81, 0x01, 0x01, // registrationType
//!     0x82, 0x01, 0x01, // registrationResult
//! ];
//! let tree = tlvdf::dissect::<Xiri>(ByteView::new(&data), &DissectorOptions::default());
//! let reg_type = tree.find("lix2.amfregistration.registration_type").unwrap();
//! assert_eq!(reg_type.display_value().as_deref(), Some("initial (1)"));
//! ```

// Type names follow the ASN.1 module, which is where the display names come from.
#![allow(clippy::upper_case_acronyms)]

use tracing::debug_span;

use crate::config::DissectorOptions;
use crate::field::FieldDescriptor;
use crate::header::Ber;
use crate::registry::FieldRegistry;
use crate::tree::{NodeId, ProtoTree};
use crate::tvb::ByteView;
use crate::walker::{self, DissectorArgs};
use crate::{FieldTable, Protocol, ProtocolInfo, ValueStrings};

pub mod amf;
pub mod common;
pub mod eps;
pub mod events;
pub mod exposure;
pub mod messaging;
pub mod ptc;
pub mod smf;
pub mod udm;

pub use events::{IRIEvent, XIRIEvent};

pub const TARGET_IDENTIFIER_PROVENANCE: ValueStrings = &[
    (1, "lEAProvided"),
    (2, "observed"),
    (3, "matchedOn"),
    (4, "other"),
];

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.xiripayload")]
pub enum XIRIPayload {
    #[tlvdf(tag = 1, typ = "relative_oid")]
    XIRIPayloadOID,
    #[tlvdf(tag = 2, nested = "XIRIEvent")]
    Event,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.target_identifier")]
pub enum TargetIdentifier {
    #[tlvdf(tag = 1, nested = "common::SUPI")]
    SUPI,
    #[tlvdf(tag = 2, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 3, nested = "common::PEI")]
    PEI,
    #[tlvdf(tag = 4, typ = "numeric")]
    IMEI,
    #[tlvdf(tag = 5, nested = "common::GPSI")]
    GPSI,
    #[tlvdf(tag = 6, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 7, typ = "string")]
    NAI,
    #[tlvdf(tag = 8, typ = "ipv4")]
    IPv4Address,
    #[tlvdf(tag = 9, typ = "ipv6")]
    IPv6Address,
    #[tlvdf(tag = 10, typ = "bytes", len = 6)]
    EthernetAddress,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.iritarget_identifier")]
pub enum IRITargetIdentifier {
    #[tlvdf(tag = 1, nested = "TargetIdentifier")]
    Identifier,
    #[tlvdf(tag = 2, typ = "enum", values = "TARGET_IDENTIFIER_PROVENANCE")]
    Provenance,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.iripayload")]
pub enum IRIPayload {
    #[tlvdf(tag = 1, typ = "relative_oid")]
    IRIPayloadOID,
    #[tlvdf(tag = 2, nested = "IRIEvent")]
    Event,
    #[tlvdf(tag = 3, seq_of = "IRITargetIdentifier")]
    TargetIdentifiers,
}

/// The X2 payload: a `XIRIPayload` SEQUENCE.
pub struct Xiri;

impl Protocol for Xiri {
    const INFO: ProtocolInfo = ProtocolInfo {
        name: "3GPP LI X2 xIRI Payload",
        short_name: "xIRI",
        filter: "lix2",
    };

    fn register(registry: &mut FieldRegistry) {
        register_payload(registry, XIRIPayload::ELEMENT);
    }

    fn dissect<'tvb, T>(
        view: &ByteView<'tvb>,
        opts: &DissectorOptions,
        tree: &mut T,
        parent: NodeId,
    ) -> usize
    where
        T: ProtoTree<'tvb> + ?Sized,
    {
        let span = debug_span!("xiri", len = view.declared_len());
        let _enter = span.enter();
        dissect_payload(XIRIPayload::ELEMENT, view, opts, tree, parent)
    }
}

/// The HI2 payload: an `IRIPayload` SEQUENCE.
pub struct Iri;

impl Protocol for Iri {
    const INFO: ProtocolInfo = ProtocolInfo {
        name: "3GPP LI HI2 IRI Payload",
        short_name: "IRI",
        filter: "lix2",
    };

    fn register(registry: &mut FieldRegistry) {
        register_payload(registry, IRIPayload::ELEMENT);
    }

    fn dissect<'tvb, T>(
        view: &ByteView<'tvb>,
        opts: &DissectorOptions,
        tree: &mut T,
        parent: NodeId,
    ) -> usize
    where
        T: ProtoTree<'tvb> + ?Sized,
    {
        let span = debug_span!("iri", len = view.declared_len());
        let _enter = span.enter();
        dissect_payload(IRIPayload::ELEMENT, view, opts, tree, parent)
    }
}

fn register_payload(registry: &mut FieldRegistry, payload: &'static FieldDescriptor) {
    registry.register_field(payload);
    registry.register_field(&walker::UNKNOWN_FIELD);
    registry.register_field(&walker::TRAILING_DATA);
}

/// Payloads are read like the elements of a list, so anything that is not the expected SEQUENCE
/// is flagged and skipped.
fn dissect_payload<'tvb, T>(
    payload: &'static FieldDescriptor,
    view: &ByteView<'tvb>,
    opts: &DissectorOptions,
    tree: &mut T,
    parent: NodeId,
) -> usize
where
    T: ProtoTree<'tvb> + ?Sized,
{
    let args = DissectorArgs::new(*view, parent, opts);
    walker::dissect_elements::<Ber, T>(&args, payload, tree);
    view.declared_len()
}
