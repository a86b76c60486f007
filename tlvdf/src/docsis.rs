//! DOCSIS vendor specific encodings (config file TLV 43 and friends).
//!
//! The value always starts with a Vendor ID TLV carrying a 24-bit OUI, which decides how the rest
//! of the TLVs are read.

use tracing::{debug, debug_span};

use crate::config::DissectorOptions;
use crate::error::DecodeError;
use crate::field::{Decoder, Encoding, FieldDescriptor, LengthRule, Tag};
use crate::header::{HeaderFormat, Tlv8};
use crate::registry::FieldRegistry;
use crate::tree::{NodeId, ProtoTree};
use crate::tvb::ByteView;
use crate::value::FieldValue;
use crate::walker::{self, dissect_field, dissect_fields, report, DissectorArgs};
use crate::{FieldTable, Protocol, ProtocolInfo};

pub const VENDOR_ID_TYPE: u8 = 0x08;
pub const OUI_CISCO: u32 = 0x00000c;
pub const OUI_GENERAL: u32 = 0xffffff;

const VENDOR_NAMES: &[(i64, &str)] = &[
    (OUI_CISCO as i64, "Cisco Systems, Inc."),
    (OUI_GENERAL as i64, "General Extension Information"),
];

pub static VENDOR_ID: FieldDescriptor = FieldDescriptor {
    tag: Tag::context(VENDOR_ID_TYPE as u32),
    name: "Vendor Id",
    abbrev: "docsis_vsif.vendor_id",
    blurb: Some("Organizationally unique identifier of the vendor"),
    decoder: Decoder::Primitive(Encoding::Uint),
    length: LengthRule::Exact(3),
    values: Some(VENDOR_NAMES),
};

/// Everything after the Vendor ID when the vendor is not known.
pub static UNKNOWN_VENDOR: FieldDescriptor =
    FieldDescriptor::bytes("Unknown Vendor", "docsis_vsif.unknown_vendor");

#[derive(FieldTable)]
#[tlvdf(prefix = "docsis_vsif.cisco", rename = "Cisco")]
pub enum CiscoTlv {
    #[tlvdf(tag = 0x0a, typ = "uint", len = 1, rename = "Number of phone lines")]
    NumPhones,
    #[tlvdf(tag = 0x0b, nested = "IpPrecedenceTlv", rename = "IP Precedence Encodings")]
    IpPrecedence,
    #[tlvdf(tag = 0x80, typ = "string", rename = "IOS Config File")]
    IosConfigFile,
}

#[derive(FieldTable)]
#[tlvdf(prefix = "docsis_vsif.cisco.ip_prec")]
pub enum IpPrecedenceTlv {
    #[tlvdf(tag = 0x01, typ = "uint", len = 1, rename = "IP Precedence Value")]
    Value,
    #[tlvdf(tag = 0x02, typ = "uint", len = 4, rename = "IP Precedence Bandwidth")]
    Bw,
}

/// TLV 43 subtypes defined by CableLabs, sent with the wildcard OUI.
#[derive(FieldTable)]
#[tlvdf(prefix = "docsis_vsif.gex", rename = "General Extension Information")]
pub enum GeneralExtensionTlv {
    #[tlvdf(tag = 1, typ = "uint", len = 4, rename = "CM Load Balancing Policy ID")]
    CmLoadBalancingPolicyId,
    #[tlvdf(tag = 2, typ = "uint", len = 4, rename = "CM Load Balancing Priority")]
    CmLoadBalancingPriority,
    #[tlvdf(tag = 3, typ = "uint", len = 4, rename = "CM Load Balancing Group ID")]
    CmLoadBalancingGroupId,
    #[tlvdf(tag = 4, typ = "uint", len = 2, rename = "CM Ranging Class ID Extension")]
    CmRangingClassIdExtension,
    #[tlvdf(tag = 5, typ = "bytes", rename = "L2VPN Encoding")]
    L2vpnEncoding,
    #[tlvdf(tag = 6, typ = "bytes", rename = "Extended CMTS MIC Configuration Setting")]
    ExtendedCmtsMicConfig,
    #[tlvdf(tag = 7, typ = "bytes", rename = "SAV Authorization Encoding")]
    SavAuthorization,
    #[tlvdf(tag = 9, typ = "bytes", rename = "CM Attribute Masks")]
    CmAttributeMasks,
    #[tlvdf(tag = 10, typ = "bytes", rename = "IP Multicast Join Authorization")]
    IpMulticastJoinAuthorization,
    #[tlvdf(tag = 11, typ = "string", rename = "Service Type Identifier")]
    ServiceTypeIdentifier,
}

/// A vendor the dissector knows the TLVs of.
#[derive(Debug, Clone, Copy)]
pub struct Vendor {
    pub oui: u32,
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

pub static VENDORS: &[Vendor] = &[
    Vendor {
        oui: OUI_CISCO,
        name: "Cisco",
        fields: CiscoTlv::FIELDS,
    },
    Vendor {
        oui: OUI_GENERAL,
        name: "General Extension",
        fields: GeneralExtensionTlv::FIELDS,
    },
];

pub fn find_vendor(oui: u32) -> Option<&'static Vendor> {
    VENDORS.iter().find(|v| v.oui == oui)
}

pub struct DocsisVsif;

impl Protocol for DocsisVsif {
    const INFO: ProtocolInfo = ProtocolInfo {
        name: "DOCSIS Vendor Specific Encodings",
        short_name: "DOCSIS VSIF",
        filter: "docsis_vsif",
    };

    fn register(registry: &mut FieldRegistry) {
        registry.register_field(&VENDOR_ID);
        registry.register_field(&UNKNOWN_VENDOR);
        registry.register_field(&walker::UNKNOWN_FIELD);
        for vendor in VENDORS {
            registry.register_table(vendor.fields);
        }
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
        let span = debug_span!("docsis_vsif", len = view.declared_len());
        let _enter = span.enter();

        let args = DissectorArgs::new(*view, parent, opts);
        let start = view.start();
        let header = match Tlv8::read(view, start) {
            Ok(header) => header,
            Err(err) => {
                report(tree, parent, view.range(), err);
                return view.declared_len();
            }
        };

        // Neither a wrong type nor a wrong length stops the dispatch: the first TLV is taken as
        // the Vendor ID either way and the OUI is read from the three bytes after its header.
        let expected = VENDOR_ID.tag;
        if header.tag != expected {
            report(
                tree,
                parent,
                start..start + header.header_len,
                DecodeError::UnexpectedTag {
                    expected,
                    found: header.tag,
                },
            );
        }
        let next = dissect_field::<Tlv8, T>(&args, &header, &VENDOR_ID, tree);
        let oui = view.get_ntoh24(start + header.header_len);

        match oui.as_ref().ok().and_then(|oui| find_vendor(*oui)) {
            Some(vendor) => {
                debug!(vendor = vendor.name, oui = vendor.oui, "vendor");
                dissect_fields::<Tlv8, T>(&args.at(next), vendor.fields, tree);
            }
            None => {
                debug!(oui = ?oui, "unknown vendor");
                add_unknown_vendor(&args, next, tree);
            }
        }
        view.declared_len()
    }
}

/// Shows everything from `offset` on as a single blob.
fn add_unknown_vendor<'tvb, T>(args: &DissectorArgs<'_, 'tvb>, offset: usize, tree: &mut T)
where
    T: ProtoTree<'tvb> + ?Sized,
{
    let range = offset..args.end();
    if range.is_empty() {
        return;
    }
    match args.view.bytes(range.clone()) {
        Ok(bytes) => {
            tree.add_field(args.parent, range, &UNKNOWN_VENDOR, FieldValue::Bytes(bytes));
        }
        Err(err) => {
            let bytes = args.view.available_bytes(range.clone());
            let node = tree.add_field(
                args.parent,
                range.clone(),
                &UNKNOWN_VENDOR,
                FieldValue::Bytes(bytes),
            );
            report(tree, node, range, err);
        }
    }
}

#[cfg(test)]
mod test_docsis {
    use super::*;

    #[test]
    fn vendor_lookup() {
        assert_eq!(find_vendor(0x00000c).map(|v| v.name), Some("Cisco"));
        assert_eq!(find_vendor(0xffffff).map(|v| v.name), Some("General Extension"));
        assert!(find_vendor(0x001122).is_none());
    }

    #[test]
    fn vendor_tables_do_not_overlap_with_vendor_id() {
        for vendor in VENDORS {
            assert!(vendor.fields.iter().all(|f| f.abbrev.starts_with("docsis_vsif.")));
        }
    }

    #[test]
    fn cisco_table() {
        assert_eq!(CiscoTlv::NumPhones.tag(), Tag::context(0x0a));
        assert_eq!(CiscoTlv::NumPhones.descriptor().name, "Number of phone lines");
        assert!(matches!(
            CiscoTlv::from_tag(Tag::context(0x80)),
            Some(CiscoTlv::IosConfigFile)
        ));
        assert!(CiscoTlv::from_tag(Tag::context(0x0c)).is_none());
        assert!(matches!(
            CiscoTlv::IpPrecedence.descriptor().decoder,
            Decoder::Sequence(fields) if fields.len() == 2
        ));
    }

    #[test]
    fn bandwidth_must_be_four_bytes() {
        let bw = IpPrecedenceTlv::Bw.descriptor();
        assert_eq!(bw.abbrev, "docsis_vsif.cisco.ip_prec.bw");
        assert!(bw.length.accepts(4));
        assert!(!bw.length.accepts(1));
        assert!(!bw.length.accepts(5));
    }

    #[test]
    fn vendor_id_labels() {
        assert_eq!(VENDOR_ID.value_label(0x0c), Some("Cisco Systems, Inc."));
    }
}
