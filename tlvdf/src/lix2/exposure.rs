//! Network exposure events, reported by the NEF (5G) and the SCEF (EPS).

use super::common::*;
use super::messaging::SMSTPDUData;
use crate::{FieldTable, ValueStrings};

pub const NEF_RELEASE_CAUSE: ValueStrings = &[
    (1, "sMFRelease"),
    (2, "dNRelease"),
    (3, "uDMRelease"),
    (4, "cHFRelease"),
    (5, "localConfigurationPolicy"),
    (6, "unknownCause"),
];

pub const NEF_FAILURE_CAUSE: ValueStrings = &[
    (1, "userUnknown"),
    (2, "niddConfigurationNotAvailable"),
    (3, "contextNotFound"),
    (4, "portNotFree"),
    (5, "portNotAssociatedWithSpecifiedApplication"),
];

pub const SCEF_RELEASE_CAUSE: ValueStrings = &[
    (1, "mMERelease"),
    (2, "dNRelease"),
    (3, "hSSRelease"),
    (4, "localConfigurationPolicy"),
    (5, "unknownCause"),
];

pub const SCEF_FAILURE_CAUSE: ValueStrings = &[
    (1, "userUnknown"),
    (2, "niddConfigurationNotAvailable"),
    (3, "invalidEPSBearer"),
    (4, "operationNotAllowed"),
    (5, "portNotFree"),
    (6, "portNotAssociatedWithSpecifiedApplication"),
];

pub const RDS_ACTION: ValueStrings = &[(1, "reservePort"), (2, "releasePort")];

pub const SERIALIZATION_FORMAT: ValueStrings = &[(1, "cBOR"), (2, "jSON"), (3, "xML")];

pub const PRIORITY_DT: ValueStrings = &[(1, "noPriority"), (2, "priority")];

pub const DEVICE_TRIGGER_DELIVERY_RESULT: ValueStrings = &[
    (1, "success"),
    (2, "unknown"),
    (3, "failure"),
    (4, "triggered"),
    (5, "expired"),
    (6, "unconfirmed"),
    (7, "replaced"),
    (8, "terminate"),
];

pub const STATIONARY_INDICATION: ValueStrings = &[(1, "stationary"), (2, "mobile")];

pub const PERIODIC_COMMUNICATION_INDICATOR: ValueStrings = &[(1, "periodic"), (2, "nonPeriodic")];

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nefpdusession_establishment")]
pub enum NEFPDUSessionEstablishment {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 3, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 4, typ = "string")]
    NEFID,
    #[tlvdf(tag = 5, typ = "string")]
    DNN,
    #[tlvdf(tag = 6, nested = "SNSSAI")]
    SNSSAI,
    #[tlvdf(tag = 7, typ = "bool")]
    RDSSupport,
    #[tlvdf(tag = 8, typ = "string")]
    SMFID,
    #[tlvdf(tag = 9, typ = "string")]
    AFID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nefpdusession_modification")]
pub enum NEFPDUSessionModification {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 3, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 4, typ = "string")]
    NEFID,
    #[tlvdf(tag = 5, typ = "int")]
    RDSSourcePortNumber,
    #[tlvdf(tag = 6, typ = "int")]
    RDSDestinationPortNumber,
    #[tlvdf(tag = 7, typ = "string")]
    ApplicationID,
    #[tlvdf(tag = 8, typ = "string")]
    AFID,
    #[tlvdf(tag = 9, typ = "enum", values = "RDS_ACTION")]
    RDSAction,
    #[tlvdf(tag = 10, typ = "enum", values = "SERIALIZATION_FORMAT")]
    SerializationFormat,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nefpdusession_release")]
pub enum NEFPDUSessionRelease {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 3, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 4, typ = "string")]
    NEFID,
    #[tlvdf(tag = 5, typ = "time")]
    TimeOfFirstPacket,
    #[tlvdf(tag = 6, typ = "time")]
    TimeOfLastPacket,
    #[tlvdf(tag = 7, typ = "int")]
    UplinkVolume,
    #[tlvdf(tag = 8, typ = "int")]
    DownlinkVolume,
    #[tlvdf(tag = 9, typ = "enum", values = "NEF_RELEASE_CAUSE")]
    ReleaseCause,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nefunsuccessful_procedure")]
pub enum NEFUnsuccessfulProcedure {
    #[tlvdf(tag = 1, typ = "enum", values = "NEF_FAILURE_CAUSE")]
    FailureCause,
    #[tlvdf(tag = 2, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 3, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 4, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 5, typ = "string")]
    DNN,
    #[tlvdf(tag = 6, nested = "SNSSAI")]
    SNSSAI,
    #[tlvdf(tag = 7, typ = "int")]
    RDSDestinationPortNumber,
    #[tlvdf(tag = 8, typ = "string")]
    ApplicationID,
    #[tlvdf(tag = 9, typ = "string")]
    AFID,
}

#[derive(FieldTable)]
#[tlvdf(
    rename_all = "asn1",
    prefix = "lix2.nefstart_of_interception_with_established_pdusession"
)]
pub enum NEFStartOfInterceptionWithEstablishedPDUSession {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 3, typ = "int")]
    PDUSessionID,
    #[tlvdf(tag = 4, typ = "string")]
    NEFID,
    #[tlvdf(tag = 5, typ = "string")]
    DNN,
    #[tlvdf(tag = 6, nested = "SNSSAI")]
    SNSSAI,
    #[tlvdf(tag = 7, typ = "bool")]
    RDSSupport,
    #[tlvdf(tag = 8, typ = "string")]
    SMFID,
    #[tlvdf(tag = 9, typ = "string")]
    AFID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nefdevice_trigger")]
pub enum NEFDeviceTrigger {
    #[tlvdf(tag = 1, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 2, typ = "string")]
    TriggerId,
    #[tlvdf(tag = 3, typ = "string")]
    AFID,
    #[tlvdf(tag = 4, typ = "bytes")]
    TriggerPayload,
    #[tlvdf(tag = 5, typ = "int")]
    ValidityPeriod,
    #[tlvdf(tag = 6, typ = "enum", values = "PRIORITY_DT")]
    PriorityDT,
    #[tlvdf(tag = 7, typ = "int")]
    SourcePortId,
    #[tlvdf(tag = 8, typ = "int")]
    DestinationPortId,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nefdevice_trigger_replace")]
pub enum NEFDeviceTriggerReplace {
    #[tlvdf(tag = 1, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 2, typ = "string")]
    TriggerId,
    #[tlvdf(tag = 3, typ = "string")]
    AFID,
    #[tlvdf(tag = 4, typ = "bytes")]
    TriggerPayload,
    #[tlvdf(tag = 5, typ = "int")]
    ValidityPeriod,
    #[tlvdf(tag = 6, typ = "enum", values = "PRIORITY_DT")]
    PriorityDT,
    #[tlvdf(tag = 7, typ = "int")]
    SourcePortId,
    #[tlvdf(tag = 8, typ = "int")]
    DestinationPortId,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nefdevice_trigger_cancellation")]
pub enum NEFDeviceTriggerCancellation {
    #[tlvdf(tag = 1, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 2, typ = "string")]
    TriggerId,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nefdevice_trigger_report_notify")]
pub enum NEFDeviceTriggerReportNotify {
    #[tlvdf(tag = 1, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 2, typ = "string")]
    TriggerId,
    #[tlvdf(tag = 3, typ = "enum", values = "DEVICE_TRIGGER_DELIVERY_RESULT")]
    DeviceTriggerDeliveryResult,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nefmsisdnless_mosms")]
pub enum NEFMSISDNLessMOSMS {
    #[tlvdf(tag = 1, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 2, typ = "string")]
    TerminatingSMSParty,
    #[tlvdf(tag = 3, nested = "SMSTPDUData")]
    SMS,
    #[tlvdf(tag = 4, typ = "int")]
    SourcePort,
    #[tlvdf(tag = 5, typ = "int")]
    DestinationPort,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.nefexpected_uebehaviour_update")]
pub enum NEFExpectedUEBehaviourUpdate {
    #[tlvdf(tag = 1, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 2, seq_of = "UserLocation")]
    ExpectedUEMovingTrajectory,
    #[tlvdf(tag = 3, typ = "enum", values = "STATIONARY_INDICATION")]
    StationaryIndication,
    #[tlvdf(tag = 4, typ = "int")]
    CommunicationDurationTime,
    #[tlvdf(tag = 5, typ = "int")]
    PeriodicTime,
    #[tlvdf(tag = 6, typ = "bytes")]
    ScheduledCommunicationTime,
    #[tlvdf(tag = 7, typ = "bytes")]
    BatteryIndication,
    #[tlvdf(tag = 8, typ = "int")]
    TrafficProfile,
    #[tlvdf(tag = 9, typ = "time")]
    ValidityTime,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.scefpdnconnection_establishment")]
pub enum SCEFPDNConnectionEstablishment {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 3, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 4, typ = "int")]
    EPSBearerID,
    #[tlvdf(tag = 5, typ = "string")]
    SCEFID,
    #[tlvdf(tag = 6, typ = "string")]
    APN,
    #[tlvdf(tag = 7, typ = "bool")]
    RDSSupport,
    #[tlvdf(tag = 8, typ = "string")]
    SCSASID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.scefpdnconnection_update")]
pub enum SCEFPDNConnectionUpdate {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 3, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 4, typ = "int")]
    EPSBearerID,
    #[tlvdf(tag = 5, typ = "string")]
    SCEFID,
    #[tlvdf(tag = 6, typ = "int")]
    RDSSourcePortNumber,
    #[tlvdf(tag = 7, typ = "int")]
    RDSDestinationPortNumber,
    #[tlvdf(tag = 8, typ = "string")]
    ApplicationID,
    #[tlvdf(tag = 9, typ = "string")]
    SCSASID,
    #[tlvdf(tag = 10, typ = "enum", values = "RDS_ACTION")]
    RDSAction,
    #[tlvdf(tag = 11, typ = "enum", values = "SERIALIZATION_FORMAT")]
    SerializationFormat,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.scefpdnconnection_release")]
pub enum SCEFPDNConnectionRelease {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 3, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 4, typ = "int")]
    EPSBearerID,
    #[tlvdf(tag = 5, typ = "string")]
    SCEFID,
    #[tlvdf(tag = 6, typ = "time")]
    TimeOfFirstPacket,
    #[tlvdf(tag = 7, typ = "time")]
    TimeOfLastPacket,
    #[tlvdf(tag = 8, typ = "int")]
    UplinkVolume,
    #[tlvdf(tag = 9, typ = "int")]
    DownlinkVolume,
    #[tlvdf(tag = 10, typ = "enum", values = "SCEF_RELEASE_CAUSE")]
    ReleaseCause,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.scefunsuccessful_procedure")]
pub enum SCEFUnsuccessfulProcedure {
    #[tlvdf(tag = 1, typ = "enum", values = "SCEF_FAILURE_CAUSE")]
    FailureCause,
    #[tlvdf(tag = 2, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 3, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 4, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 5, typ = "int")]
    EPSBearerID,
    #[tlvdf(tag = 6, typ = "string")]
    APN,
    #[tlvdf(tag = 7, typ = "int")]
    RDSDestinationPortNumber,
    #[tlvdf(tag = 8, typ = "string")]
    ApplicationID,
    #[tlvdf(tag = 9, typ = "string")]
    SCSASID,
}

#[derive(FieldTable)]
#[tlvdf(
    rename_all = "asn1",
    prefix = "lix2.scefstart_of_interception_with_established_pdnconnection"
)]
pub enum SCEFStartOfInterceptionWithEstablishedPDNConnection {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 3, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 4, typ = "int")]
    EPSBearerID,
    #[tlvdf(tag = 5, typ = "string")]
    SCEFID,
    #[tlvdf(tag = 6, typ = "string")]
    APN,
    #[tlvdf(tag = 7, typ = "bool")]
    RDSSupport,
    #[tlvdf(tag = 8, typ = "string")]
    SCSASID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.scefdevice_trigger")]
pub enum SCEFDeviceTrigger {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 3, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 4, typ = "string")]
    TriggerId,
    #[tlvdf(tag = 5, typ = "string")]
    SCSASID,
    #[tlvdf(tag = 6, typ = "bytes")]
    TriggerPayload,
    #[tlvdf(tag = 7, typ = "int")]
    ValidityPeriod,
    #[tlvdf(tag = 8, typ = "enum", values = "PRIORITY_DT")]
    PriorityDT,
    #[tlvdf(tag = 9, typ = "int")]
    SourcePortId,
    #[tlvdf(tag = 10, typ = "int")]
    DestinationPortId,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.scefdevice_trigger_replace")]
pub enum SCEFDeviceTriggerReplace {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 3, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 4, typ = "string")]
    TriggerId,
    #[tlvdf(tag = 5, typ = "string")]
    SCSASID,
    #[tlvdf(tag = 6, typ = "bytes")]
    TriggerPayload,
    #[tlvdf(tag = 7, typ = "int")]
    ValidityPeriod,
    #[tlvdf(tag = 8, typ = "enum", values = "PRIORITY_DT")]
    PriorityDT,
    #[tlvdf(tag = 9, typ = "int")]
    SourcePortId,
    #[tlvdf(tag = 10, typ = "int")]
    DestinationPortId,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.scefdevice_trigger_cancellation")]
pub enum SCEFDeviceTriggerCancellation {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 3, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 4, typ = "string")]
    TriggerId,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.scefdevice_trigger_report_notify")]
pub enum SCEFDeviceTriggerReportNotify {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 3, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 4, typ = "string")]
    TriggerId,
    #[tlvdf(tag = 5, typ = "enum", values = "DEVICE_TRIGGER_DELIVERY_RESULT")]
    DeviceTriggerDeliveryResult,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.scefmsisdnless_mosms")]
pub enum SCEFMSISDNLessMOSMS {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 3, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 4, typ = "string")]
    TerminatingSMSParty,
    #[tlvdf(tag = 5, nested = "SMSTPDUData")]
    SMS,
    #[tlvdf(tag = 6, typ = "int")]
    SourcePort,
    #[tlvdf(tag = 7, typ = "int")]
    DestinationPort,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.scefcommunication_pattern_update")]
pub enum SCEFCommunicationPatternUpdate {
    #[tlvdf(tag = 1, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 2, typ = "string")]
    ExternalIdentifier,
    #[tlvdf(tag = 3, typ = "enum", values = "PERIODIC_COMMUNICATION_INDICATOR")]
    PeriodicCommunicationIndicator,
    #[tlvdf(tag = 4, typ = "int")]
    CommunicationDurationTime,
    #[tlvdf(tag = 5, typ = "int")]
    PeriodicTime,
    #[tlvdf(tag = 6, typ = "bytes")]
    ScheduledCommunicationTime,
    #[tlvdf(tag = 7, typ = "enum", values = "STATIONARY_INDICATION")]
    StationaryIndication,
    #[tlvdf(tag = 8, typ = "bytes")]
    BatteryIndication,
    #[tlvdf(tag = 9, typ = "int")]
    TrafficProfile,
}
