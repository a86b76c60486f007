//! SMF events (PDU sessions and multi-access PDU sessions) and the packet data reports.

use super::common::*;
use crate::{FieldTable, ValueStrings};

pub const PDU_SESSION_TYPE: ValueStrings = &[
    (1, "iPv4"),
    (2, "iPv6"),
    (3, "iPv4v6"),
    (4, "unstructured"),
    (5, "ethernet"),
];

pub const FIVEG_SM_REQUEST_TYPE: ValueStrings = &[
    (1, "initialRequest"),
    (2, "existingPDUSession"),
    (3, "initialEmergencyRequest"),
    (4, "existingEmergencyPDUSession"),
    (5, "modificationRequest"),
    (6, "reserved"),
    (7, "mAPDURequest"),
];

pub const SMF_FAILED_PROCEDURE_TYPE: ValueStrings = &[
    (1, "pDUSessionEstablishment"),
    (2, "pDUSessionModification"),
    (3, "pDUSessionRelease"),
];

pub const SMF_ERROR_CODES: ValueStrings = &[
    (1, "n1SmError"),
    (2, "n2SmError"),
    (3, "ruleError"),
    (4, "qoSError"),
];

pub const ESTABLISHMENT_STATUS: ValueStrings = &[(0, "established"), (1, "released")];

pub const PDSR_SUMMARY_TRIGGER: ValueStrings = &[
    (1, "timerExpiry"),
    (2, "packetCount"),
    (3, "byteCount"),
    (4, "startOfFlow"),
    (5, "endOfFlow"),
];

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smfpdusession_establishment")]
pub enum SMFPDUSessionEstablishment {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, typ = "bool")]
    SUPIUnauthenticated,
    #[tlvdf(tag = 3, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 4, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 5, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 6, nested = "FTEID")]
    GTPTunnelID,
    #[tlvdf(tag = 7, typ = "enum", values = "PDU_SESSION_TYPE")]
    PDUSessionType,
    #[tlvdf(tag = 8, nested = "SNSSAI")]
    SNSSAI,
    #[tlvdf(tag = 9, seq_of = "UEEndpointAddress")]
    UEEndpoint,
    #[tlvdf(tag = 10, nested = "UEEndpointAddress")]
    Non3GPPAccessEndpoint,
    #[tlvdf(tag = 11, nested = "Location")]
    Location,
    #[tlvdf(tag = 12, typ = "string")]
    DNN,
    #[tlvdf(tag = 13, typ = "string")]
    AMFID,
    #[tlvdf(tag = 14, typ = "string")]
    HSMFURI,
    #[tlvdf(tag = 15, typ = "enum", values = "FIVEG_SM_REQUEST_TYPE")]
    RequestType,
    #[tlvdf(tag = 16, typ = "enum", values = "ACCESS_TYPE")]
    AccessType,
    #[tlvdf(tag = 17, typ = "enum", values = "RAT_TYPE")]
    RATType,
    #[tlvdf(tag = 18, typ = "bytes")]
    SMPDUDNRequest,
    #[tlvdf(tag = 19, typ = "bytes")]
    UEEPSPDNConnection,
    #[tlvdf(tag = 20, typ = "bytes")]
    EPS5GSComboInfo,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smfpdusession_modification")]
pub enum SMFPDUSessionModification {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, typ = "bool")]
    SUPIUnauthenticated,
    #[tlvdf(tag = 3, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 4, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 5, nested = "SNSSAI")]
    SNSSAI,
    #[tlvdf(tag = 6, nested = "UEEndpointAddress")]
    Non3GPPAccessEndpoint,
    #[tlvdf(tag = 7, nested = "Location")]
    Location,
    #[tlvdf(tag = 8, typ = "enum", values = "FIVEG_SM_REQUEST_TYPE")]
    RequestType,
    #[tlvdf(tag = 9, typ = "enum", values = "ACCESS_TYPE")]
    AccessType,
    #[tlvdf(tag = 10, typ = "enum", values = "RAT_TYPE")]
    RATType,
    #[tlvdf(tag = 11, typ = "int")]
    PDUSessionID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smfpdusession_release")]
pub enum SMFPDUSessionRelease {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 3, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 4, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 5, typ = "time")]
    TimeOfFirstPacket,
    #[tlvdf(tag = 6, typ = "time")]
    TimeOfLastPacket,
    #[tlvdf(tag = 7, typ = "int")]
    UplinkVolume,
    #[tlvdf(tag = 8, typ = "int")]
    DownlinkVolume,
    #[tlvdf(tag = 9, nested = "Location")]
    Location,
    #[tlvdf(tag = 10, typ = "enum", values = "SMF_ERROR_CODES")]
    Cause,
}

#[derive(FieldTable)]
#[tlvdf(
    rename_all = "asn1",
    prefix = "lix2.smfstart_of_interception_with_established_pdusession"
)]
pub enum SMFStartOfInterceptionWithEstablishedPDUSession {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, typ = "bool")]
    SUPIUnauthenticated,
    #[tlvdf(tag = 3, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 4, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 5, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 6, nested = "FTEID")]
    GTPTunnelID,
    #[tlvdf(tag = 7, typ = "enum", values = "PDU_SESSION_TYPE")]
    PDUSessionType,
    #[tlvdf(tag = 8, nested = "SNSSAI")]
    SNSSAI,
    #[tlvdf(tag = 9, seq_of = "UEEndpointAddress")]
    UEEndpoint,
    #[tlvdf(tag = 10, nested = "UEEndpointAddress")]
    Non3GPPAccessEndpoint,
    #[tlvdf(tag = 11, nested = "Location")]
    Location,
    #[tlvdf(tag = 12, typ = "string")]
    DNN,
    #[tlvdf(tag = 13, typ = "string")]
    AMFID,
    #[tlvdf(tag = 14, typ = "string")]
    HSMFURI,
    #[tlvdf(tag = 15, typ = "enum", values = "FIVEG_SM_REQUEST_TYPE")]
    RequestType,
    #[tlvdf(tag = 16, typ = "enum", values = "ACCESS_TYPE")]
    AccessType,
    #[tlvdf(tag = 17, typ = "enum", values = "RAT_TYPE")]
    RATType,
    #[tlvdf(tag = 18, typ = "bytes")]
    SMPDUDNRequest,
    #[tlvdf(tag = 19, typ = "time")]
    TimeOfSessionEstablishment,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smfunsuccessful_procedure")]
pub enum SMFUnsuccessfulProcedure {
    #[tlvdf(tag = 1, typ = "enum", values = "SMF_FAILED_PROCEDURE_TYPE")]
    FailedProcedureType,
    #[tlvdf(tag = 2, typ = "int")]
    FailureCause,
    #[tlvdf(tag = 3, typ = "enum", values = "INITIATOR")]
    Initiator,
    #[tlvdf(tag = 4, set_of = "SNSSAI")]
    RequestedSlice,
    #[tlvdf(tag = 5, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 6, typ = "bool")]
    SUPIUnauthenticated,
    #[tlvdf(tag = 7, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 8, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 9, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 10, seq_of = "UEEndpointAddress")]
    UEEndpoint,
    #[tlvdf(tag = 11, nested = "UEEndpointAddress")]
    Non3GPPAccessEndpoint,
    #[tlvdf(tag = 12, typ = "string")]
    DNN,
    #[tlvdf(tag = 13, typ = "string")]
    AMFID,
    #[tlvdf(tag = 14, typ = "string")]
    HSMFURI,
    #[tlvdf(tag = 15, typ = "enum", values = "FIVEG_SM_REQUEST_TYPE")]
    RequestType,
    #[tlvdf(tag = 16, typ = "enum", values = "ACCESS_TYPE")]
    AccessType,
    #[tlvdf(tag = 17, typ = "enum", values = "RAT_TYPE")]
    RATType,
    #[tlvdf(tag = 18, typ = "bytes")]
    SMPDUDNRequest,
    #[tlvdf(tag = 19, nested = "Location")]
    Location,
}

/// One access leg of a multi-access PDU session.
#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.access_info")]
pub enum AccessInfo {
    #[tlvdf(tag = 1, typ = "enum", values = "ACCESS_TYPE")]
    AccessType,
    #[tlvdf(tag = 2, typ = "enum", values = "RAT_TYPE")]
    RATType,
    #[tlvdf(tag = 3, nested = "FTEID")]
    GTPTunnelID,
    #[tlvdf(tag = 4, nested = "UEEndpointAddress")]
    Non3GPPAccessEndpoint,
    #[tlvdf(tag = 5, typ = "enum", values = "ESTABLISHMENT_STATUS")]
    EstablishmentStatus,
    #[tlvdf(tag = 6, typ = "enum", values = "ACCESS_TYPE")]
    ANTypeToReactivate,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smfmapdusession_establishment")]
pub enum SMFMAPDUSessionEstablishment {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, typ = "bool")]
    SUPIUnauthenticated,
    #[tlvdf(tag = 3, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 4, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 5, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 6, typ = "enum", values = "PDU_SESSION_TYPE")]
    PDUSessionType,
    #[tlvdf(tag = 7, seq_of = "AccessInfo")]
    AccessInfo,
    #[tlvdf(tag = 8, nested = "SNSSAI")]
    SNSSAI,
    #[tlvdf(tag = 9, seq_of = "UEEndpointAddress")]
    UEEndpoint,
    #[tlvdf(tag = 10, nested = "Location")]
    Location,
    #[tlvdf(tag = 11, typ = "string")]
    DNN,
    #[tlvdf(tag = 12, typ = "string")]
    AMFID,
    #[tlvdf(tag = 13, typ = "string")]
    HSMFURI,
    #[tlvdf(tag = 14, typ = "enum", values = "FIVEG_SM_REQUEST_TYPE")]
    RequestType,
    #[tlvdf(tag = 15, typ = "bytes")]
    SMPDUDNRequest,
    #[tlvdf(tag = 17, typ = "int")]
    OldPDUSessionID,
    #[tlvdf(tag = 18, typ = "bool")]
    MAUpgradeIndication,
    #[tlvdf(tag = 20, typ = "bool")]
    MAAcceptedIndication,
    #[tlvdf(tag = 21, typ = "bytes")]
    ATSSSContainer,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smfmapdusession_modification")]
pub enum SMFMAPDUSessionModification {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, typ = "bool")]
    SUPIUnauthenticated,
    #[tlvdf(tag = 3, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 4, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 5, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 6, seq_of = "AccessInfo")]
    AccessInfo,
    #[tlvdf(tag = 7, nested = "SNSSAI")]
    SNSSAI,
    #[tlvdf(tag = 8, nested = "Location")]
    Location,
    #[tlvdf(tag = 9, typ = "enum", values = "FIVEG_SM_REQUEST_TYPE")]
    RequestType,
    #[tlvdf(tag = 11, typ = "bytes")]
    ATSSSContainer,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smfmapdusession_release")]
pub enum SMFMAPDUSessionRelease {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 3, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 4, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 5, typ = "time")]
    TimeOfFirstPacket,
    #[tlvdf(tag = 6, typ = "time")]
    TimeOfLastPacket,
    #[tlvdf(tag = 7, typ = "int")]
    UplinkVolume,
    #[tlvdf(tag = 8, typ = "int")]
    DownlinkVolume,
    #[tlvdf(tag = 9, nested = "Location")]
    Location,
    #[tlvdf(tag = 10, typ = "enum", values = "SMF_ERROR_CODES")]
    Cause,
}

#[derive(FieldTable)]
#[tlvdf(
    rename_all = "asn1",
    prefix = "lix2.smfstart_of_interception_with_established_mapdusession"
)]
pub enum SMFStartOfInterceptionWithEstablishedMAPDUSession {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, typ = "bool")]
    SUPIUnauthenticated,
    #[tlvdf(tag = 3, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 4, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 5, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 6, typ = "enum", values = "PDU_SESSION_TYPE")]
    PDUSessionType,
    #[tlvdf(tag = 7, seq_of = "AccessInfo")]
    AccessInfo,
    #[tlvdf(tag = 8, nested = "SNSSAI")]
    SNSSAI,
    #[tlvdf(tag = 9, seq_of = "UEEndpointAddress")]
    UEEndpoint,
    #[tlvdf(tag = 10, nested = "Location")]
    Location,
    #[tlvdf(tag = 11, typ = "string")]
    DNN,
    #[tlvdf(tag = 12, typ = "string")]
    AMFID,
    #[tlvdf(tag = 13, typ = "string")]
    HSMFURI,
    #[tlvdf(tag = 14, typ = "enum", values = "FIVEG_SM_REQUEST_TYPE")]
    RequestType,
    #[tlvdf(tag = 15, typ = "bytes")]
    SMPDUDNRequest,
    #[tlvdf(tag = 16, typ = "time")]
    TimeOfSessionEstablishment,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smfmaunsuccessful_procedure")]
pub enum SMFMAUnsuccessfulProcedure {
    #[tlvdf(tag = 1, typ = "enum", values = "SMF_FAILED_PROCEDURE_TYPE")]
    FailedProcedureType,
    #[tlvdf(tag = 2, typ = "int")]
    FailureCause,
    #[tlvdf(tag = 3, set_of = "SNSSAI")]
    RequestedSlice,
    #[tlvdf(tag = 4, typ = "enum", values = "INITIATOR")]
    Initiator,
    #[tlvdf(tag = 5, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 6, typ = "bool")]
    SUPIUnauthenticated,
    #[tlvdf(tag = 7, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 8, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 9, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 10, seq_of = "AccessInfo")]
    AccessInfo,
    #[tlvdf(tag = 11, seq_of = "UEEndpointAddress")]
    UEEndpoint,
    #[tlvdf(tag = 12, nested = "Location")]
    Location,
    #[tlvdf(tag = 13, typ = "string")]
    DNN,
    #[tlvdf(tag = 14, typ = "string")]
    AMFID,
    #[tlvdf(tag = 15, typ = "string")]
    HSMFURI,
    #[tlvdf(tag = 16, typ = "enum", values = "FIVEG_SM_REQUEST_TYPE")]
    RequestType,
    #[tlvdf(tag = 17, typ = "bytes")]
    SMPDUDNRequest,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smfpduto_mapdusession_modification")]
pub enum SMFPDUtoMAPDUSessionModification {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, typ = "bool")]
    SUPIUnauthenticated,
    #[tlvdf(tag = 3, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 4, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 5, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 6, seq_of = "AccessInfo")]
    AccessInfo,
    #[tlvdf(tag = 7, nested = "SNSSAI")]
    SNSSAI,
    #[tlvdf(tag = 8, seq_of = "UEEndpointAddress")]
    UEEndpoint,
    #[tlvdf(tag = 9, nested = "Location")]
    Location,
    #[tlvdf(tag = 10, typ = "enum", values = "FIVEG_SM_REQUEST_TYPE")]
    RequestType,
    #[tlvdf(tag = 11, typ = "bytes")]
    ATSSSContainer,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.pdheader_report")]
pub enum PDHeaderReport {
    #[tlvdf(tag = 1, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 2, nested = "IPAddress")]
    SourceIPAddress,
    #[tlvdf(tag = 3, typ = "int")]
    SourcePort,
    #[tlvdf(tag = 4, nested = "IPAddress")]
    DestinationIPAddress,
    #[tlvdf(tag = 5, typ = "int")]
    DestinationPort,
    #[tlvdf(tag = 6, typ = "int")]
    NextLayerProtocol,
    #[tlvdf(tag = 7, typ = "int")]
    IPv6flowLabel,
    #[tlvdf(tag = 8, typ = "enum", values = "DIRECTION")]
    Direction,
    #[tlvdf(tag = 9, typ = "int")]
    PacketSize,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.pdsummary_report")]
pub enum PDSummaryReport {
    #[tlvdf(tag = 1, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 2, nested = "IPAddress")]
    SourceIPAddress,
    #[tlvdf(tag = 3, typ = "int")]
    SourcePort,
    #[tlvdf(tag = 4, nested = "IPAddress")]
    DestinationIPAddress,
    #[tlvdf(tag = 5, typ = "int")]
    DestinationPort,
    #[tlvdf(tag = 6, typ = "int")]
    NextLayerProtocol,
    #[tlvdf(tag = 7, typ = "int")]
    IPv6flowLabel,
    #[tlvdf(tag = 8, typ = "enum", values = "DIRECTION")]
    Direction,
    #[tlvdf(tag = 9, typ = "enum", values = "PDSR_SUMMARY_TRIGGER")]
    PDSRSummaryTrigger,
    #[tlvdf(tag = 10, typ = "time")]
    FirstPacketTimestamp,
    #[tlvdf(tag = 11, typ = "time")]
    LastPacketTimestamp,
    #[tlvdf(tag = 12, typ = "int")]
    PacketCount,
    #[tlvdf(tag = 13, typ = "int")]
    ByteCount,
}
