//! SMS and MMS events.

use super::common::*;
use crate::{FieldTable, ValueStrings};

pub const SMS_TRANSFER_STATUS: ValueStrings = &[
    (1, "transferSucceeded"),
    (2, "transferFailed"),
    (3, "undefined"),
];

pub const SMS_NF_TYPE: ValueStrings = &[(1, "sMSGMSC"), (2, "iWKSMSC"), (3, "sMSRouter")];

pub const SMS_MESSAGE_TYPE: ValueStrings = &[
    (1, "deliver"),
    (2, "deliverReportAck"),
    (3, "deliverReportError"),
    (4, "statusReport"),
    (5, "command"),
    (6, "submit"),
    (7, "submitReportAck"),
    (8, "submitReportError"),
    (9, "reserved"),
];

pub const MMS_DIRECTION: ValueStrings = &[(0, "fromTarget"), (1, "toTarget")];

pub const NON_LOCAL_ID: ValueStrings = &[(1, "local"), (2, "nonLocal")];

pub const MMS_MESSAGE_CLASS: ValueStrings = &[
    (1, "personal"),
    (2, "advertisement"),
    (3, "informational"),
    (4, "auto"),
];

pub const MMS_PRIORITY: ValueStrings = &[(1, "low"), (2, "normal"), (3, "high")];

pub const MM_STATUS: ValueStrings = &[
    (1, "expired"),
    (2, "retrieved"),
    (3, "rejected"),
    (4, "deferred"),
    (5, "unrecognized"),
    (6, "indeterminate"),
    (7, "forwarded"),
    (8, "unreachable"),
];

pub const MM_STATE: ValueStrings = &[
    (1, "draft"),
    (2, "sent"),
    (3, "new"),
    (4, "retrieved"),
    (5, "forwarded"),
];

pub const MMS_READ_STATUS: ValueStrings = &[(1, "read"), (2, "deletedWithoutBeingRead")];

pub const MMS_RESPONSE_STATUS: ValueStrings = &[
    (1, "statusOk"),
    (2, "errUnspecified"),
    (3, "errServiceDenied"),
    (4, "errMessageFormatCorrupt"),
    (5, "errSendingAddressUnresolved"),
    (6, "errMessageNotFound"),
    (7, "errNetworkProblem"),
    (8, "errContentNotAccepted"),
    (9, "errUnsupportedMessage"),
];

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smsparty")]
pub enum SMSParty {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 3, nested = "GPSI")]
    GPSI,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.smstpdudata")]
pub enum SMSTPDUData {
    #[tlvdf(tag = 1, typ = "bytes")]
    SMSTPDU,
    #[tlvdf(tag = 2, typ = "bytes")]
    TruncatedSMSTPDU,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.smsnfaddress")]
pub enum SMSNFAddress {
    #[tlvdf(tag = 1, nested = "IPAddress")]
    IPAddress,
    #[tlvdf(tag = 2, typ = "numeric")]
    E164Number,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smsmessage")]
pub enum SMSMessage {
    #[tlvdf(tag = 1, nested = "SMSParty")]
    OriginatingSMSParty,
    #[tlvdf(tag = 2, nested = "SMSParty")]
    TerminatingSMSParty,
    #[tlvdf(tag = 3, typ = "enum", values = "DIRECTION")]
    Direction,
    #[tlvdf(tag = 4, typ = "enum", values = "SMS_TRANSFER_STATUS")]
    LinkTransferStatus,
    #[tlvdf(tag = 5, typ = "bool")]
    OtherMessage,
    #[tlvdf(tag = 6, nested = "Location")]
    Location,
    #[tlvdf(tag = 7, nested = "SMSNFAddress")]
    PeerNFAddress,
    #[tlvdf(tag = 8, typ = "enum", values = "SMS_NF_TYPE")]
    PeerNFType,
    #[tlvdf(tag = 9, nested = "SMSTPDUData")]
    SMSTPDUData,
    #[tlvdf(tag = 10, typ = "enum", values = "SMS_MESSAGE_TYPE")]
    MessageType,
    #[tlvdf(tag = 11, typ = "int")]
    RPMessageReference,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.smsreport")]
pub enum SMSReport {
    #[tlvdf(tag = 1, nested = "Location")]
    Location,
    #[tlvdf(tag = 2, nested = "SMSTPDUData")]
    SMSTPDUData,
    #[tlvdf(tag = 3, typ = "enum", values = "SMS_MESSAGE_TYPE")]
    MessageType,
    #[tlvdf(tag = 4, typ = "int")]
    RPMessageReference,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.impu")]
pub enum IMPU {
    #[tlvdf(tag = 1, typ = "string")]
    SIPURI,
    #[tlvdf(tag = 2, typ = "string")]
    TELURI,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.mmsparty_id")]
pub enum MMSPartyID {
    #[tlvdf(tag = 1, typ = "numeric")]
    E164Number,
    #[tlvdf(tag = 2, typ = "string")]
    EmailAddress,
    #[tlvdf(tag = 3, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 4, nested = "IMPU")]
    IMPU,
    #[tlvdf(tag = 5, typ = "string")]
    IMPI,
    #[tlvdf(tag = 6, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 7, nested = "GPSI")]
    GPSI,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsparty")]
pub enum MMSParty {
    /// Untagged CHOICE elements, one per known identity of the party.
    #[tlvdf(tag = 1, seq_of = "MMSPartyID")]
    MMSPartyIDs,
    #[tlvdf(tag = 2, typ = "enum", values = "NON_LOCAL_ID")]
    NonLocalID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsversion")]
pub enum MMSVersion {
    #[tlvdf(tag = 1, typ = "int")]
    MajorVersion,
    #[tlvdf(tag = 2, typ = "int")]
    MinorVersion,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmssend")]
pub enum MMSSend {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "time")]
    DateTime,
    #[tlvdf(tag = 4, nested = "MMSParty")]
    OriginatingMMSParty,
    #[tlvdf(tag = 5, seq_of = "MMSParty")]
    TerminatingMMSParty,
    #[tlvdf(tag = 6, seq_of = "MMSParty")]
    CCRecipients,
    #[tlvdf(tag = 7, seq_of = "MMSParty")]
    BCCRecipients,
    #[tlvdf(tag = 8, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 9, typ = "string")]
    Subject,
    #[tlvdf(tag = 10, typ = "enum", values = "MMS_MESSAGE_CLASS")]
    MessageClass,
    #[tlvdf(tag = 13, typ = "enum", values = "MMS_PRIORITY")]
    Priority,
    #[tlvdf(tag = 14, typ = "bool")]
    SenderVisibility,
    #[tlvdf(tag = 15, typ = "bool")]
    DeliveryReport,
    #[tlvdf(tag = 16, typ = "bool")]
    ReadReport,
    #[tlvdf(tag = 17, typ = "bool")]
    Store,
    #[tlvdf(tag = 18, typ = "enum", values = "MM_STATE")]
    State,
    #[tlvdf(tag = 27, typ = "string")]
    ContentType,
    #[tlvdf(tag = 28, typ = "enum", values = "MMS_RESPONSE_STATUS")]
    ResponseStatus,
    #[tlvdf(tag = 29, typ = "string")]
    ResponseStatusText,
    #[tlvdf(tag = 30, typ = "string")]
    MessageID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmssend_by_non_local_target")]
pub enum MMSSendByNonLocalTarget {
    #[tlvdf(tag = 1, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 2, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 3, typ = "string")]
    MessageID,
    #[tlvdf(tag = 4, seq_of = "MMSParty")]
    TerminatingMMSParty,
    #[tlvdf(tag = 5, nested = "MMSParty")]
    OriginatingMMSParty,
    #[tlvdf(tag = 6, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 7, typ = "string")]
    ContentType,
    #[tlvdf(tag = 8, typ = "enum", values = "MMS_MESSAGE_CLASS")]
    MessageClass,
    #[tlvdf(tag = 9, typ = "time")]
    DateTime,
    #[tlvdf(tag = 11, typ = "bool")]
    DeliveryReport,
    #[tlvdf(tag = 12, typ = "enum", values = "MMS_PRIORITY")]
    Priority,
    #[tlvdf(tag = 13, typ = "bool")]
    SenderVisibility,
    #[tlvdf(tag = 14, typ = "bool")]
    ReadReport,
    #[tlvdf(tag = 15, typ = "string")]
    Subject,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsnotification")]
pub enum MMSNotification {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, nested = "MMSParty")]
    OriginatingMMSParty,
    #[tlvdf(tag = 4, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 5, typ = "string")]
    Subject,
    #[tlvdf(tag = 6, typ = "bool")]
    DeliveryReportRequested,
    #[tlvdf(tag = 7, typ = "bool")]
    Stored,
    #[tlvdf(tag = 8, typ = "enum", values = "MMS_MESSAGE_CLASS")]
    MessageClass,
    #[tlvdf(tag = 9, typ = "enum", values = "MMS_PRIORITY")]
    Priority,
    #[tlvdf(tag = 10, typ = "int")]
    MessageSize,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmssend_to_non_local_target")]
pub enum MMSSendToNonLocalTarget {
    #[tlvdf(tag = 1, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 2, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 3, typ = "string")]
    MessageID,
    #[tlvdf(tag = 4, seq_of = "MMSParty")]
    TerminatingMMSParty,
    #[tlvdf(tag = 5, nested = "MMSParty")]
    OriginatingMMSParty,
    #[tlvdf(tag = 6, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 7, typ = "string")]
    ContentType,
    #[tlvdf(tag = 8, typ = "enum", values = "MMS_MESSAGE_CLASS")]
    MessageClass,
    #[tlvdf(tag = 9, typ = "time")]
    DateTime,
    #[tlvdf(tag = 11, typ = "bool")]
    DeliveryReport,
    #[tlvdf(tag = 12, typ = "enum", values = "MMS_PRIORITY")]
    Priority,
    #[tlvdf(tag = 15, typ = "string")]
    Subject,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsnotification_response")]
pub enum MMSNotificationResponse {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 4, typ = "enum", values = "MM_STATUS")]
    Status,
    #[tlvdf(tag = 5, typ = "bool")]
    ReportAllowed,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsretrieval")]
pub enum MMSRetrieval {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "string")]
    MessageID,
    #[tlvdf(tag = 4, typ = "time")]
    DateTime,
    #[tlvdf(tag = 5, nested = "MMSParty")]
    OriginatingMMSParty,
    #[tlvdf(tag = 9, seq_of = "MMSParty")]
    TerminatingMMSParty,
    #[tlvdf(tag = 10, seq_of = "MMSParty")]
    CCRecipients,
    #[tlvdf(tag = 11, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 12, typ = "string")]
    Subject,
    #[tlvdf(tag = 13, typ = "enum", values = "MM_STATE")]
    State,
    #[tlvdf(tag = 15, typ = "enum", values = "MMS_MESSAGE_CLASS")]
    MessageClass,
    #[tlvdf(tag = 16, typ = "enum", values = "MMS_PRIORITY")]
    Priority,
    #[tlvdf(tag = 17, typ = "bool")]
    DeliveryReport,
    #[tlvdf(tag = 18, typ = "bool")]
    ReadReport,
    #[tlvdf(tag = 27, typ = "string")]
    ContentType,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsdelivery_ack")]
pub enum MMSDeliveryAck {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "bool")]
    ReportAllowed,
    #[tlvdf(tag = 4, typ = "enum", values = "MM_STATUS")]
    Status,
    #[tlvdf(tag = 5, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsforward")]
pub enum MMSForward {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "time")]
    DateTime,
    #[tlvdf(tag = 4, nested = "MMSParty")]
    OriginatingMMSParty,
    #[tlvdf(tag = 5, seq_of = "MMSParty")]
    TerminatingMMSParty,
    #[tlvdf(tag = 6, seq_of = "MMSParty")]
    CCRecipients,
    #[tlvdf(tag = 7, seq_of = "MMSParty")]
    BCCRecipients,
    #[tlvdf(tag = 8, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 10, typ = "time")]
    DesiredDeliveryTime,
    #[tlvdf(tag = 11, typ = "bool")]
    DeliveryReportAllowed,
    #[tlvdf(tag = 12, typ = "bool")]
    DeliveryReport,
    #[tlvdf(tag = 13, typ = "bool")]
    Store,
    #[tlvdf(tag = 14, typ = "enum", values = "MM_STATE")]
    State,
    #[tlvdf(tag = 16, typ = "string")]
    ContentLocationReq,
    #[tlvdf(tag = 18, typ = "enum", values = "MMS_RESPONSE_STATUS")]
    ResponseStatus,
    #[tlvdf(tag = 19, typ = "string")]
    ResponseStatusText,
    #[tlvdf(tag = 20, typ = "string")]
    MessageID,
    #[tlvdf(tag = 21, typ = "string")]
    ContentLocationConf,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsdelete_from_relay")]
pub enum MMSDeleteFromRelay {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 6, typ = "enum", values = "MMS_RESPONSE_STATUS")]
    DeleteResponseStatus,
    #[tlvdf(tag = 7, typ = "string")]
    DeleteResponseText,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsdelivery_report")]
pub enum MMSDeliveryReport {
    #[tlvdf(tag = 1, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 2, typ = "string")]
    MessageID,
    #[tlvdf(tag = 3, seq_of = "MMSParty")]
    TerminatingMMSParty,
    #[tlvdf(tag = 4, typ = "time")]
    MMSDateTime,
    #[tlvdf(tag = 5, typ = "enum", values = "MMS_RESPONSE_STATUS")]
    ResponseStatus,
    #[tlvdf(tag = 6, typ = "string")]
    ResponseStatusText,
    #[tlvdf(tag = 7, typ = "string")]
    ApplicID,
    #[tlvdf(tag = 8, typ = "string")]
    ReplyApplicID,
    #[tlvdf(tag = 9, typ = "string")]
    AuxApplicInfo,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsdelivery_report_non_local_target")]
pub enum MMSDeliveryReportNonLocalTarget {
    #[tlvdf(tag = 1, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 2, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 3, typ = "string")]
    MessageID,
    #[tlvdf(tag = 4, seq_of = "MMSParty")]
    TerminatingMMSParty,
    #[tlvdf(tag = 5, nested = "MMSParty")]
    OriginatingMMSParty,
    #[tlvdf(tag = 6, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 7, typ = "time")]
    MMSDateTime,
    #[tlvdf(tag = 8, typ = "bool")]
    ForwardToOriginator,
    #[tlvdf(tag = 9, typ = "enum", values = "MM_STATUS")]
    Status,
    #[tlvdf(tag = 11, typ = "string")]
    StatusText,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsread_report")]
pub enum MMSReadReport {
    #[tlvdf(tag = 1, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 2, typ = "string")]
    MessageID,
    #[tlvdf(tag = 3, seq_of = "MMSParty")]
    TerminatingMMSParty,
    #[tlvdf(tag = 4, seq_of = "MMSParty")]
    OriginatingMMSParty,
    #[tlvdf(tag = 5, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 6, typ = "time")]
    MMSDateTime,
    #[tlvdf(tag = 7, typ = "enum", values = "MMS_READ_STATUS")]
    ReadStatus,
    #[tlvdf(tag = 8, typ = "string")]
    ApplicID,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsread_report_non_local_target")]
pub enum MMSReadReportNonLocalTarget {
    #[tlvdf(tag = 1, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 2, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 3, seq_of = "MMSParty")]
    TerminatingMMSParty,
    #[tlvdf(tag = 4, seq_of = "MMSParty")]
    OriginatingMMSParty,
    #[tlvdf(tag = 5, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 6, typ = "time")]
    MMSDateTime,
    #[tlvdf(tag = 7, typ = "string")]
    MessageID,
    #[tlvdf(tag = 8, typ = "enum", values = "MMS_READ_STATUS")]
    ReadStatus,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmscancel")]
pub enum MMSCancel {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "string")]
    CancelID,
    #[tlvdf(tag = 4, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsmbox_store")]
pub enum MMSMBoxStore {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 4, typ = "string")]
    ContentLocationReq,
    #[tlvdf(tag = 5, typ = "enum", values = "MM_STATE")]
    State,
    #[tlvdf(tag = 7, typ = "string")]
    ContentLocationConf,
    #[tlvdf(tag = 8, typ = "enum", values = "MMS_RESPONSE_STATUS")]
    StoreStatus,
    #[tlvdf(tag = 9, typ = "string")]
    StoreStatusText,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsmbox_upload")]
pub enum MMSMBoxUpload {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 4, typ = "enum", values = "MM_STATE")]
    State,
    #[tlvdf(tag = 6, typ = "string")]
    ContentType,
    #[tlvdf(tag = 7, typ = "string")]
    ContentLocation,
    #[tlvdf(tag = 8, typ = "enum", values = "MMS_RESPONSE_STATUS")]
    StoreStatus,
    #[tlvdf(tag = 9, typ = "string")]
    StoreStatusText,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsmbox_delete")]
pub enum MMSMBoxDelete {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "enum", values = "MMS_DIRECTION")]
    Direction,
    #[tlvdf(tag = 4, typ = "string")]
    ContentLocationReq,
    #[tlvdf(tag = 5, typ = "string")]
    ContentLocationConf,
    #[tlvdf(tag = 6, typ = "enum", values = "MMS_RESPONSE_STATUS")]
    ResponseStatus,
    #[tlvdf(tag = 7, typ = "string")]
    ResponseStatusText,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsmbox_view_request")]
pub enum MMSMBoxViewRequest {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "string")]
    ContentLocation,
    #[tlvdf(tag = 4, typ = "enum", values = "MM_STATE")]
    State,
    #[tlvdf(tag = 6, typ = "int")]
    Start,
    #[tlvdf(tag = 7, typ = "int")]
    Limit,
    #[tlvdf(tag = 9, typ = "bool")]
    Totals,
    #[tlvdf(tag = 10, typ = "bool")]
    Quotas,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmsmbox_view_response")]
pub enum MMSMBoxViewResponse {
    #[tlvdf(tag = 1, typ = "string")]
    TransactionID,
    #[tlvdf(tag = 2, nested = "MMSVersion")]
    Version,
    #[tlvdf(tag = 3, typ = "string")]
    ContentLocation,
    #[tlvdf(tag = 4, typ = "enum", values = "MM_STATE")]
    State,
    #[tlvdf(tag = 6, typ = "int")]
    Start,
    #[tlvdf(tag = 7, typ = "int")]
    Limit,
    #[tlvdf(tag = 9, typ = "bool")]
    MMSTotals,
    #[tlvdf(tag = 10, typ = "bool")]
    MMSQuotas,
    #[tlvdf(tag = 12, typ = "enum", values = "MMS_RESPONSE_STATUS")]
    ResponseStatus,
    #[tlvdf(tag = 13, typ = "string")]
    ResponseStatusText,
}
