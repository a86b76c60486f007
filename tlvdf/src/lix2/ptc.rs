//! Push-to-talk over cellular events.

use super::common::*;
use super::messaging::IMPU;
use crate::{FieldTable, ValueStrings};

pub const PTC_SESSION_TYPE: ValueStrings = &[
    (1, "ondemand"),
    (2, "preEstablished"),
    (3, "adhoc"),
    (4, "prearranged"),
    (5, "groupSession"),
];

pub const PTC_REGISTRATION_REQUEST: ValueStrings =
    &[(1, "register"), (2, "reRegister"), (3, "deRegister")];

pub const PTC_REGISTRATION_OUTCOME: ValueStrings = &[(1, "success"), (2, "failure")];

pub const PTC_SESSION_END_CAUSE: ValueStrings = &[
    (1, "initiaterLeavesSession"),
    (2, "definedParticipantLeaves"),
    (3, "numberOfParticipants"),
    (4, "sessionTimerExpired"),
    (5, "pTCSpeechInactive"),
    (6, "allMediaTypesInactive"),
];

pub const PTC_PRE_EST_STATUS: ValueStrings =
    &[(1, "established"), (2, "modified"), (3, "released")];

pub const PTC_FAILURE_CODE: ValueStrings = &[
    (1, "sessionCannotBeEstablished"),
    (2, "sessionNotClosed"),
    (3, "sessionNotJoined"),
    (4, "sessionNotModified"),
    (5, "sessionNotPreEstablished"),
    (6, "sessionNotRejoined"),
];

pub const PTC_PRESENCE_TYPE: ValueStrings = &[(1, "pTCClient"), (2, "pTCGroup")];

pub const PTC_GROUP_AUTH_RULE: ValueStrings = &[
    (1, "allow-Initiating-PTCSession"),
    (2, "block-Initiating-PTCSession"),
    (3, "allow-Joining-PTCSession"),
    (4, "block-Joining-PTCSession"),
    (5, "allow-Add-Participants"),
    (6, "block-Add-Participants"),
    (7, "allow-Subscription-PTCSession-State"),
    (8, "block-Subscription-PTCSession-State"),
    (9, "allow-Anonymity"),
    (10, "forbid-Anonymity"),
];

pub const PTC_TBP_PRIORITY_LEVEL: ValueStrings = &[
    (1, "preEmptive"),
    (2, "highPriority"),
    (3, "normalPriority"),
    (4, "listenOnly"),
];

pub const PTC_LIST_MANAGEMENT_TYPE: ValueStrings = &[
    (1, "contactListManagementAttempt"),
    (2, "groupListManagementAttempt"),
    (3, "contactListManagementResult"),
    (4, "groupListManagementResult"),
    (5, "requestUnsuccessful"),
];

pub const PTC_LIST_MANAGEMENT_ACTION: ValueStrings = &[
    (1, "create"),
    (2, "modify"),
    (3, "retrieve"),
    (4, "delete"),
    (5, "notify"),
];

pub const PTC_ACCESS_POLICY_TYPE: ValueStrings = &[
    (1, "allowedAccessPolicyAttempt"),
    (2, "blockedAccessPolicyAttempt"),
    (3, "allowedAccessPolicyResult"),
    (4, "blockedAccessPolicyResult"),
    (5, "requestUnsuccessful"),
];

pub const PTC_USER_ACCESS_POLICY: ValueStrings = &[
    (1, "allowIncomingPTCSessionRequest"),
    (2, "blockIncomingPTCSessionRequest"),
    (3, "allowAutoAnswerMode"),
    (4, "allowOverrideManualAnswerMode"),
];

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcchat_group_id")]
pub enum PTCChatGroupID {
    #[tlvdf(tag = 1, typ = "string")]
    GroupIdentity,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.ptcidentifiers")]
pub enum PTCIdentifiers {
    #[tlvdf(tag = 1, typ = "string")]
    MCPTTID,
    #[tlvdf(tag = 2, typ = "string")]
    InstanceIdentifierURN,
    #[tlvdf(tag = 3, nested = "PTCChatGroupID")]
    PTCChatGroupID,
    #[tlvdf(tag = 4, nested = "IMPU")]
    IMPU,
    #[tlvdf(tag = 5, typ = "string")]
    IMPI,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptctarget_information")]
pub enum PTCTargetInformation {
    #[tlvdf(tag = 1, seq_of = "PTCIdentifiers")]
    Identifiers,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcsession_info")]
pub enum PTCSessionInfo {
    #[tlvdf(tag = 1, typ = "string")]
    PTCSessionURI,
    #[tlvdf(tag = 2, typ = "enum", values = "PTC_SESSION_TYPE")]
    PTCSessionType,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcparticipant_presence_status")]
pub enum PTCParticipantPresenceStatus {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PresenceID,
    #[tlvdf(tag = 2, typ = "enum", values = "PTC_PRESENCE_TYPE")]
    PresenceType,
    #[tlvdf(tag = 3, typ = "bool")]
    PresenceStatus,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.rtpsetting")]
pub enum RTPSetting {
    #[tlvdf(tag = 1, nested = "IPAddress")]
    IPAddress,
    #[tlvdf(tag = 2, typ = "int")]
    PortNumber,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcregistration")]
pub enum PTCRegistration {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, typ = "string")]
    PTCServerURI,
    #[tlvdf(tag = 3, typ = "enum", values = "PTC_REGISTRATION_REQUEST")]
    PTCRegistrationRequest,
    #[tlvdf(tag = 4, typ = "enum", values = "PTC_REGISTRATION_OUTCOME")]
    PTCRegistrationOutcome,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcsession_initiation")]
pub enum PTCSessionInitiation {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, typ = "string")]
    PTCServerURI,
    #[tlvdf(tag = 3, nested = "PTCSessionInfo")]
    PTCSessionInfo,
    #[tlvdf(tag = 4, nested = "PTCTargetInformation")]
    PTCOriginatingID,
    #[tlvdf(tag = 5, seq_of = "PTCTargetInformation")]
    PTCParticipants,
    #[tlvdf(tag = 6, seq_of = "PTCParticipantPresenceStatus")]
    PTCParticipantPresenceStatus,
    #[tlvdf(tag = 7, nested = "Location")]
    Location,
    #[tlvdf(tag = 8, typ = "string")]
    PTCBearerCapability,
    #[tlvdf(tag = 9, nested = "PTCTargetInformation")]
    PTCHost,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcsession_abandon")]
pub enum PTCSessionAbandon {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, nested = "PTCSessionInfo")]
    PTCSessionInfo,
    #[tlvdf(tag = 3, nested = "Location")]
    Location,
    #[tlvdf(tag = 4, typ = "int")]
    PTCAbandonCause,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcsession_start")]
pub enum PTCSessionStart {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, typ = "string")]
    PTCServerURI,
    #[tlvdf(tag = 3, nested = "PTCSessionInfo")]
    PTCSessionInfo,
    #[tlvdf(tag = 4, nested = "PTCTargetInformation")]
    PTCOriginatingID,
    #[tlvdf(tag = 5, seq_of = "PTCTargetInformation")]
    PTCParticipants,
    #[tlvdf(tag = 6, seq_of = "PTCParticipantPresenceStatus")]
    PTCParticipantPresenceStatus,
    #[tlvdf(tag = 7, nested = "Location")]
    Location,
    #[tlvdf(tag = 8, typ = "string")]
    PTCBearerCapability,
    #[tlvdf(tag = 9, nested = "PTCTargetInformation")]
    PTCHost,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcsession_end")]
pub enum PTCSessionEnd {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, typ = "string")]
    PTCServerURI,
    #[tlvdf(tag = 3, nested = "PTCSessionInfo")]
    PTCSessionInfo,
    #[tlvdf(tag = 4, seq_of = "PTCTargetInformation")]
    PTCParticipants,
    #[tlvdf(tag = 5, nested = "Location")]
    Location,
    #[tlvdf(tag = 6, typ = "enum", values = "PTC_SESSION_END_CAUSE")]
    PTCSessionEndCause,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcstart_of_interception")]
pub enum PTCStartOfInterception {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, nested = "PTCSessionInfo")]
    PreEstSessionID,
    #[tlvdf(tag = 3, nested = "PTCTargetInformation")]
    PTCOriginatingID,
    #[tlvdf(tag = 4, nested = "PTCSessionInfo")]
    PTCSessionInfo,
    #[tlvdf(tag = 5, nested = "PTCTargetInformation")]
    PTCHost,
    #[tlvdf(tag = 6, seq_of = "PTCTargetInformation")]
    PTCParticipants,
    #[tlvdf(tag = 7, typ = "bool")]
    PTCMediaStreamAvail,
    #[tlvdf(tag = 8, typ = "string")]
    PTCBearerCapability,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcpre_established_session")]
pub enum PTCPreEstablishedSession {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, typ = "string")]
    PTCServerURI,
    #[tlvdf(tag = 3, nested = "RTPSetting")]
    RTPSetting,
    #[tlvdf(tag = 4, typ = "string")]
    PTCMediaCapability,
    #[tlvdf(tag = 5, nested = "PTCSessionInfo")]
    PTCPreEstSessionID,
    #[tlvdf(tag = 6, typ = "enum", values = "PTC_PRE_EST_STATUS")]
    PTCPreEstStatus,
    #[tlvdf(tag = 7, typ = "bool")]
    PTCMediaStreamAvail,
    #[tlvdf(tag = 8, nested = "Location")]
    Location,
    #[tlvdf(tag = 9, typ = "enum", values = "PTC_FAILURE_CODE")]
    PTCFailureCode,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcinstant_personal_alert")]
pub enum PTCInstantPersonalAlert {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, nested = "PTCTargetInformation")]
    PTCIPAPartyID,
    #[tlvdf(tag = 3, typ = "enum", values = "DIRECTION")]
    PTCIPADirection,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcparty_join")]
pub enum PTCPartyJoin {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, nested = "PTCSessionInfo")]
    PTCSessionInfo,
    #[tlvdf(tag = 3, seq_of = "PTCTargetInformation")]
    PTCParticipants,
    #[tlvdf(tag = 4, seq_of = "PTCParticipantPresenceStatus")]
    PTCParticipantPresenceStatus,
    #[tlvdf(tag = 5, typ = "bool")]
    PTCMediaStreamAvail,
    #[tlvdf(tag = 6, typ = "string")]
    PTCBearerCapability,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcparty_drop")]
pub enum PTCPartyDrop {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, nested = "PTCSessionInfo")]
    PTCSessionInfo,
    #[tlvdf(tag = 3, nested = "PTCTargetInformation")]
    PTCPartyDrop,
    #[tlvdf(tag = 4, nested = "PTCParticipantPresenceStatus")]
    PTCParticipantPresenceStatus,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcparty_hold")]
pub enum PTCPartyHold {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, nested = "PTCSessionInfo")]
    PTCSessionInfo,
    #[tlvdf(tag = 3, seq_of = "PTCTargetInformation")]
    PTCParticipants,
    #[tlvdf(tag = 4, seq_of = "PTCTargetInformation")]
    PTCHoldID,
    #[tlvdf(tag = 5, typ = "bool")]
    PTCHoldRetrieveInd,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcmedia_modification")]
pub enum PTCMediaModification {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, nested = "PTCSessionInfo")]
    PTCSessionInfo,
    #[tlvdf(tag = 3, typ = "bool")]
    PTCMediaStreamAvail,
    #[tlvdf(tag = 4, typ = "string")]
    PTCBearerCapability,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcgroup_advertisement")]
pub enum PTCGroupAdvertisement {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, seq_of = "PTCTargetInformation")]
    PTCIDList,
    #[tlvdf(tag = 3, typ = "enum", values = "PTC_GROUP_AUTH_RULE")]
    PTCGroupAuthRule,
    #[tlvdf(tag = 4, nested = "PTCTargetInformation")]
    PTCGroupAdSender,
    #[tlvdf(tag = 5, typ = "string")]
    PTCGroupNickname,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcfloor_control")]
pub enum PTCFloorControl {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, nested = "PTCSessionInfo")]
    PTCSessionInfo,
    /// SEQUENCE OF ENUMERATED, left undecoded.
    #[tlvdf(tag = 3, typ = "bytes")]
    PTCFloorActivity,
    #[tlvdf(tag = 4, nested = "PTCTargetInformation")]
    PTCFloorSpeakerID,
    #[tlvdf(tag = 5, typ = "int")]
    PTCMaxTBTime,
    #[tlvdf(tag = 6, typ = "bool")]
    PTCQueuedFloorControl,
    #[tlvdf(tag = 7, typ = "int")]
    PTCQueuedPosition,
    #[tlvdf(tag = 8, typ = "enum", values = "PTC_TBP_PRIORITY_LEVEL")]
    PTCTalkBurstPriority,
    #[tlvdf(tag = 9, typ = "string")]
    PTCTalkBurstReason,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptctarget_presence")]
pub enum PTCTargetPresence {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, nested = "PTCParticipantPresenceStatus")]
    PTCTargetPresenceStatus,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcparticipant_presence")]
pub enum PTCParticipantPresence {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, nested = "PTCParticipantPresenceStatus")]
    PTCParticipantPresenceStatus,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptclist_management")]
pub enum PTCListManagement {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, typ = "enum", values = "PTC_LIST_MANAGEMENT_TYPE")]
    PTCListManagementType,
    #[tlvdf(tag = 3, typ = "enum", values = "PTC_LIST_MANAGEMENT_ACTION")]
    PTCListManagementAction,
    #[tlvdf(tag = 4, typ = "string")]
    PTCListManagementFailure,
    #[tlvdf(tag = 5, nested = "PTCTargetInformation")]
    PTCContactID,
    #[tlvdf(tag = 6, seq_of = "PTCTargetInformation")]
    PTCIDList,
    #[tlvdf(tag = 7, nested = "PTCTargetInformation")]
    PTCHost,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.ptcaccess_policy")]
pub enum PTCAccessPolicy {
    #[tlvdf(tag = 1, nested = "PTCTargetInformation")]
    PTCTargetInformation,
    #[tlvdf(tag = 2, typ = "enum", values = "PTC_ACCESS_POLICY_TYPE")]
    PTCAccessPolicyType,
    #[tlvdf(tag = 3, typ = "enum", values = "PTC_USER_ACCESS_POLICY")]
    PTCUserAccessPolicy,
    #[tlvdf(tag = 4, typ = "enum", values = "PTC_GROUP_AUTH_RULE")]
    PTCGroupAuthRule,
    #[tlvdf(tag = 5, nested = "PTCTargetInformation")]
    PTCContactID,
    #[tlvdf(tag = 6, typ = "string")]
    PTCAccessPolicyFailure,
}
