//! Types shared by many event records: identities, slices, locations and addresses.

use crate::{FieldTable, ValueStrings};

pub const ACCESS_TYPE: ValueStrings = &[
    (1, "threeGPPAccess"),
    (2, "nonThreeGPPAccess"),
    (3, "threeGPPandNonThreeGPPAccess"),
];

pub const RAT_TYPE: ValueStrings = &[
    (1, "nR"),
    (2, "eUTRA"),
    (3, "wLAN"),
    (4, "virtual"),
    (5, "nBIOT"),
    (6, "wireline"),
    (7, "wirelineCable"),
    (8, "wirelineBBF"),
    (9, "lTEM"),
    (10, "nRU"),
    (11, "eUTRAU"),
    (12, "trustedN3GA"),
    (13, "trustedWLAN"),
    (14, "uTRA"),
    (15, "gERA"),
];

pub const DIRECTION: ValueStrings = &[(1, "fromTarget"), (2, "toTarget")];

pub const INITIATOR: ValueStrings = &[(1, "uE"), (2, "network"), (3, "unknown")];

pub const SWITCH_OFF_INDICATOR: ValueStrings = &[(1, "normalDetach"), (2, "switchOff")];

pub const SMS_OVER_NAS_INDICATOR: ValueStrings =
    &[(1, "sMSOverNASNotAllowed"), (2, "sMSOverNASAllowed")];

pub const EMM_5GMM_STATUS: ValueStrings = &[
    (1, "eMMRegistered"),
    (2, "fiveGMMRegistered"),
];

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.supi")]
pub enum SUPI {
    #[tlvdf(tag = 1, typ = "numeric", min_len = 6, max_len = 15)]
    IMSI,
    #[tlvdf(tag = 2, typ = "string")]
    NAI,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.suci")]
pub enum SUCI {
    #[tlvdf(tag = 1, typ = "numeric", len = 3)]
    MCC,
    #[tlvdf(tag = 2, typ = "numeric", len = [2, 3])]
    MNC,
    #[tlvdf(tag = 3, typ = "numeric", min_len = 1, max_len = 4)]
    RoutingIndicator,
    #[tlvdf(tag = 4, typ = "int")]
    ProtectionSchemeID,
    #[tlvdf(tag = 5, typ = "int")]
    HomeNetworkPublicKeyID,
    #[tlvdf(tag = 6, typ = "bytes")]
    SchemeOutput,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.pei")]
pub enum PEI {
    #[tlvdf(tag = 1, typ = "numeric", len = 14)]
    IMEI,
    #[tlvdf(tag = 2, typ = "numeric", len = 16)]
    IMEISV,
    #[tlvdf(tag = 3, typ = "bytes", len = 6)]
    MACAddress,
    #[tlvdf(tag = 4, typ = "bytes", len = 8)]
    EUI64,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.gpsi")]
pub enum GPSI {
    #[tlvdf(tag = 1, typ = "numeric", min_len = 1, max_len = 15)]
    MSISDN,
    #[tlvdf(tag = 2, typ = "string")]
    NAI,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.five_gguti")]
pub enum FiveGGUTI {
    #[tlvdf(tag = 1, typ = "numeric", len = 3)]
    MCC,
    #[tlvdf(tag = 2, typ = "numeric", len = [2, 3])]
    MNC,
    #[tlvdf(tag = 3, typ = "int")]
    AMFRegionID,
    #[tlvdf(tag = 4, typ = "int")]
    AMFSetID,
    #[tlvdf(tag = 5, typ = "int")]
    AMFPointer,
    #[tlvdf(tag = 6, typ = "int", max_len = 5)]
    FiveGTMSI,
}

/// EPS GUTI.
#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.guti")]
pub enum GUTI {
    #[tlvdf(tag = 1, typ = "numeric", len = 3)]
    MCC,
    #[tlvdf(tag = 2, typ = "numeric", len = [2, 3])]
    MNC,
    #[tlvdf(tag = 3, typ = "bytes", len = 2)]
    MMEGroupID,
    #[tlvdf(tag = 4, typ = "bytes", len = 1)]
    MMECode,
    #[tlvdf(tag = 5, typ = "bytes", len = 4)]
    MTMSI,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.eps5gguti")]
pub enum EPS5GGUTI {
    #[tlvdf(tag = 1, nested = "GUTI")]
    GUTI,
    #[tlvdf(tag = 2, nested = "FiveGGUTI")]
    FiveGGUTI,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.snssai")]
pub enum SNSSAI {
    #[tlvdf(tag = 1, typ = "int", min_len = 1, max_len = 2)]
    SliceServiceType,
    #[tlvdf(tag = 2, typ = "bytes", len = 3)]
    SliceDifferentiator,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.slice")]
pub enum Slice {
    #[tlvdf(tag = 1, set_of = "SNSSAI")]
    AllowedNSSAI,
    #[tlvdf(tag = 2, set_of = "SNSSAI")]
    ConfiguredNSSAI,
    #[tlvdf(tag = 3, set_of = "SNSSAI")]
    RequestedNSSAI,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.plmnid")]
pub enum PLMNID {
    #[tlvdf(tag = 1, typ = "numeric", len = 3)]
    MCC,
    #[tlvdf(tag = 2, typ = "numeric", len = [2, 3])]
    MNC,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.tai")]
pub enum TAI {
    #[tlvdf(tag = 1, nested = "PLMNID")]
    PLMNID,
    #[tlvdf(tag = 2, typ = "bytes", len = [2, 3])]
    TAC,
    #[tlvdf(tag = 3, typ = "string", len = 11)]
    NID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ncgi")]
pub enum NCGI {
    #[tlvdf(tag = 1, nested = "PLMNID")]
    PLMNID,
    /// 36 bits.
    #[tlvdf(tag = 2, typ = "bits", len = 6)]
    NRCellID,
    #[tlvdf(tag = 3, typ = "string", len = 11)]
    NID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ecgi")]
pub enum ECGI {
    #[tlvdf(tag = 1, nested = "PLMNID")]
    PLMNID,
    /// 28 bits.
    #[tlvdf(tag = 2, typ = "bits", len = 5)]
    EUTRACellID,
    #[tlvdf(tag = 3, typ = "string", len = 11)]
    NID,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.rancgi")]
pub enum RANCGI {
    #[tlvdf(tag = 1, nested = "ECGI")]
    ECGI,
    #[tlvdf(tag = 2, nested = "NCGI")]
    NCGI,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.ngenb_id")]
pub enum NGENbID {
    #[tlvdf(tag = 1, typ = "bits")]
    MacroNGENbID,
    #[tlvdf(tag = 2, typ = "bits")]
    ShortMacroNGENbID,
    #[tlvdf(tag = 3, typ = "bits")]
    LongMacroNGENbID,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.enb_id")]
pub enum ENbID {
    #[tlvdf(tag = 1, typ = "bits")]
    MacroENbID,
    #[tlvdf(tag = 2, typ = "bits")]
    HomeENbID,
    #[tlvdf(tag = 3, typ = "bits")]
    ShortMacroENbID,
    #[tlvdf(tag = 4, typ = "bits")]
    LongMacroENbID,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.annode_id")]
pub enum ANNodeID {
    #[tlvdf(tag = 1, typ = "bits")]
    N3IWFID,
    #[tlvdf(tag = 2, typ = "bits")]
    GNbID,
    #[tlvdf(tag = 3, nested = "NGENbID")]
    NGENbID,
    #[tlvdf(tag = 4, nested = "ENbID")]
    ENbID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.global_rannode_id")]
pub enum GlobalRANNodeID {
    #[tlvdf(tag = 1, nested = "PLMNID")]
    PLMNID,
    #[tlvdf(tag = 2, nested = "ANNodeID")]
    ANNodeID,
    #[tlvdf(tag = 3, typ = "string", len = 11)]
    NID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.geographical_coordinates")]
pub enum GeographicalCoordinates {
    #[tlvdf(tag = 1, typ = "string")]
    Latitude,
    #[tlvdf(tag = 2, typ = "string")]
    Longitude,
    #[tlvdf(tag = 3, typ = "string")]
    MapDatumInformation,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.cell_site_information")]
pub enum CellSiteInformation {
    #[tlvdf(tag = 1, nested = "GeographicalCoordinates")]
    GeographicalCoordinates,
    #[tlvdf(tag = 2, typ = "int")]
    Azimuth,
    #[tlvdf(tag = 3, typ = "string")]
    OperatorSpecificInformation,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.cell_information")]
pub enum CellInformation {
    #[tlvdf(tag = 1, nested = "RANCGI")]
    RANCGI,
    #[tlvdf(tag = 2, nested = "CellSiteInformation")]
    CellSiteinformation,
    #[tlvdf(tag = 3, typ = "time")]
    TimeOfLocation,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.eutralocation")]
pub enum EUTRALocation {
    #[tlvdf(tag = 1, nested = "TAI")]
    TAI,
    #[tlvdf(tag = 2, nested = "ECGI")]
    ECGI,
    #[tlvdf(tag = 3, typ = "int")]
    AgeOfLocatonInfo,
    #[tlvdf(tag = 4, typ = "time")]
    UELocationTimestamp,
    #[tlvdf(tag = 5, typ = "string")]
    GeographicalInformation,
    #[tlvdf(tag = 6, typ = "string")]
    GeodeticInformation,
    #[tlvdf(tag = 7, nested = "GlobalRANNodeID")]
    GlobalNGENbID,
    #[tlvdf(tag = 8, nested = "CellSiteInformation")]
    CellSiteInformation,
    #[tlvdf(tag = 9, nested = "GlobalRANNodeID")]
    GlobalENbID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nrlocation")]
pub enum NRLocation {
    #[tlvdf(tag = 1, nested = "TAI")]
    TAI,
    #[tlvdf(tag = 2, nested = "NCGI")]
    NCGI,
    #[tlvdf(tag = 3, typ = "int")]
    AgeOfLocationInfo,
    #[tlvdf(tag = 4, typ = "time")]
    UELocationTimestamp,
    #[tlvdf(tag = 5, typ = "string")]
    GeographicalInformation,
    #[tlvdf(tag = 6, typ = "string")]
    GeodeticInformation,
    #[tlvdf(tag = 7, nested = "GlobalRANNodeID")]
    GlobalGNbID,
    #[tlvdf(tag = 8, nested = "CellSiteInformation")]
    CellSiteInformation,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.n3galocation")]
pub enum N3GALocation {
    #[tlvdf(tag = 1, nested = "TAI")]
    TAI,
    #[tlvdf(tag = 2, typ = "bits")]
    N3IWFID,
    #[tlvdf(tag = 3, nested = "IPAddr")]
    UEIPAddr,
    #[tlvdf(tag = 4, typ = "int")]
    PortNumber,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.user_location")]
pub enum UserLocation {
    #[tlvdf(tag = 1, nested = "EUTRALocation")]
    EUTRALocation,
    #[tlvdf(tag = 2, nested = "NRLocation")]
    NRLocation,
    #[tlvdf(tag = 3, nested = "N3GALocation")]
    N3GALocation,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.location_info")]
pub enum LocationInfo {
    #[tlvdf(tag = 1, nested = "UserLocation")]
    UserLocation,
    #[tlvdf(tag = 2, typ = "bool")]
    CurrentLoc,
    #[tlvdf(tag = 4, typ = "enum", values = "RAT_TYPE")]
    RATType,
    #[tlvdf(tag = 5, typ = "string")]
    TimeZone,
    #[tlvdf(tag = 6, seq_of = "CellInformation")]
    AdditionalCellIDs,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.location")]
pub enum Location {
    #[tlvdf(tag = 1, nested = "LocationInfo")]
    LocationInfo,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ipaddr")]
pub enum IPAddr {
    #[tlvdf(tag = 1, typ = "ipv4", len = 4)]
    IPv4Addr,
    #[tlvdf(tag = 2, typ = "ipv6", len = 16)]
    IPv6Addr,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.ipaddress")]
pub enum IPAddress {
    #[tlvdf(tag = 1, typ = "ipv4", len = 4)]
    IPv4Address,
    #[tlvdf(tag = 2, typ = "ipv6", len = 16)]
    IPv6Address,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.ueendpoint_address")]
pub enum UEEndpointAddress {
    #[tlvdf(tag = 1, typ = "ipv4", len = 4)]
    IPv4Address,
    #[tlvdf(tag = 2, typ = "ipv6", len = 16)]
    IPv6Address,
    #[tlvdf(tag = 3, typ = "bytes", len = 6)]
    EthernetAddress,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.fteid")]
pub enum FTEID {
    #[tlvdf(tag = 1, typ = "int", max_len = 5)]
    TEID,
    #[tlvdf(tag = 2, typ = "ipv4", len = 4)]
    IPv4Address,
    #[tlvdf(tag = 3, typ = "ipv6", len = 16)]
    IPv6Address,
}

#[cfg(test)]
mod test_common {
    use super::*;
    use crate::{Decoder, Tag};

    #[test]
    fn asn1_names() {
        assert_eq!(SUPI::IMSI.descriptor().name, "iMSI");
        assert_eq!(FiveGGUTI::FiveGTMSI.descriptor().name, "fiveGTMSI");
        assert_eq!(IPAddress::IPv6Address.descriptor().name, "iPv6Address");
        assert_eq!(<FiveGGUTI as FieldTable>::ELEMENT.name, "FiveGGUTI");
    }

    #[test]
    fn choices_and_sequences() {
        assert!(matches!(<SUPI as FieldTable>::DECODER, Decoder::Choice(_)));
        assert!(matches!(<TAI as FieldTable>::DECODER, Decoder::Sequence(_)));
        assert!(matches!(
            Slice::AllowedNSSAI.descriptor().decoder,
            Decoder::SetOf(element) if element.tag == Tag::universal(16)
        ));
    }

    #[test]
    fn value_labels() {
        let rat = LocationInfo::RATType.descriptor();
        assert_eq!(rat.value_label(1), Some("nR"));
        assert_eq!(rat.value_label(99), None);
    }
}
