//! MME events for UEs attached over EPS.

use super::common::*;
use crate::{FieldTable, ValueStrings};

pub const MME_ATTACH_TYPE: ValueStrings = &[
    (1, "ePSAttach"),
    (2, "combinedEPSIMSIAttach"),
    (3, "ePSRLOSAttach"),
    (4, "ePSEmergencyAttach"),
    (5, "reserved"),
];

pub const MME_ATTACH_RESULT: ValueStrings = &[(1, "ePSOnly"), (2, "combinedEPSIMSI")];

pub const MME_DIRECTION: ValueStrings = &[(1, "networkInitiated"), (2, "uEInitiated")];

pub const MME_DETACH_TYPE: ValueStrings = &[
    (1, "ePSDetach"),
    (2, "iMSIDetach"),
    (3, "combinedEPSIMSIDetach"),
    (4, "reAttachRequired"),
    (5, "reAttachNotRequired"),
    (6, "reserved"),
];

pub const SMS_SERVICE_STATUS: ValueStrings = &[
    (1, "sMSServicesNotAvailable"),
    (2, "sMSServicesNotAvailableInThisPLMN"),
    (3, "networkFailure"),
    (4, "congestion"),
];

pub const MME_FAILED_PROCEDURE: ValueStrings = &[
    (1, "attachReject"),
    (2, "authenticationReject"),
    (3, "securityModeReject"),
    (4, "serviceReject"),
    (5, "trackingAreaUpdateReject"),
    (6, "activateDedicatedEPSBearerContextReject"),
    (7, "activateDefaultEPSBearerContextReject"),
    (8, "bearerResourceAllocationReject"),
    (9, "bearerResourceModificationReject"),
    (10, "modifyEPSBearerContectReject"),
    (11, "pDNConnectivityReject"),
    (12, "pDNDisconnectReject"),
];

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmeattach")]
pub enum MMEAttach {
    #[tlvdf(tag = 1, typ = "enum", values = "MME_ATTACH_TYPE")]
    AttachType,
    #[tlvdf(tag = 2, typ = "enum", values = "MME_ATTACH_RESULT")]
    AttachResult,
    #[tlvdf(tag = 3, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 4, typ = "numeric")]
    IMEI,
    #[tlvdf(tag = 5, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 6, nested = "GUTI")]
    GUTI,
    #[tlvdf(tag = 7, nested = "Location")]
    Location,
    #[tlvdf(tag = 8, seq_of = "TAI")]
    EPSTAIList,
    #[tlvdf(tag = 9, typ = "enum", values = "SMS_SERVICE_STATUS")]
    SMSServiceStatus,
    #[tlvdf(tag = 10, nested = "EPS5GGUTI")]
    OldGUTI,
    #[tlvdf(tag = 11, typ = "enum", values = "EMM_5GMM_STATUS")]
    EMM5GRegStatus,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmedetach")]
pub enum MMEDetach {
    #[tlvdf(tag = 1, typ = "enum", values = "MME_DIRECTION")]
    DetachDirection,
    #[tlvdf(tag = 2, typ = "enum", values = "MME_DETACH_TYPE")]
    DetachType,
    #[tlvdf(tag = 3, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 4, typ = "numeric")]
    IMEI,
    #[tlvdf(tag = 5, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 6, nested = "GUTI")]
    GUTI,
    #[tlvdf(tag = 7, typ = "int")]
    Cause,
    #[tlvdf(tag = 8, nested = "Location")]
    Location,
    #[tlvdf(tag = 9, typ = "enum", values = "SWITCH_OFF_INDICATOR")]
    SwitchOffIndicator,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmelocation_update")]
pub enum MMELocationUpdate {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    IMEI,
    #[tlvdf(tag = 3, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 4, nested = "GUTI")]
    GUTI,
    #[tlvdf(tag = 5, nested = "Location")]
    Location,
    #[tlvdf(tag = 6, nested = "EPS5GGUTI")]
    OldGUTI,
    #[tlvdf(tag = 7, typ = "enum", values = "SMS_SERVICE_STATUS")]
    SMSServiceStatus,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmestart_of_interception_with_epsattached_ue")]
pub enum MMEStartOfInterceptionWithEPSAttachedUE {
    #[tlvdf(tag = 1, typ = "enum", values = "MME_ATTACH_TYPE")]
    AttachType,
    #[tlvdf(tag = 2, typ = "enum", values = "MME_ATTACH_RESULT")]
    AttachResult,
    #[tlvdf(tag = 3, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 4, typ = "numeric")]
    IMEI,
    #[tlvdf(tag = 5, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 6, nested = "GUTI")]
    GUTI,
    #[tlvdf(tag = 7, nested = "Location")]
    Location,
    #[tlvdf(tag = 8, seq_of = "TAI")]
    EPSTAIList,
    #[tlvdf(tag = 9, typ = "enum", values = "SMS_SERVICE_STATUS")]
    SMSServiceStatus,
    #[tlvdf(tag = 10, typ = "enum", values = "EMM_5GMM_STATUS")]
    EMM5GRegStatus,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.mmefailure_cause")]
pub enum MMEFailureCause {
    #[tlvdf(tag = 1, typ = "int")]
    EMMCause,
    #[tlvdf(tag = 2, typ = "int")]
    ESMCause,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmeunsuccessful_procedure")]
pub enum MMEUnsuccessfulProcedure {
    #[tlvdf(tag = 1, typ = "enum", values = "MME_FAILED_PROCEDURE")]
    FailedProcedure,
    #[tlvdf(tag = 2, nested = "MMEFailureCause")]
    FailureCause,
    #[tlvdf(tag = 3, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 4, typ = "numeric")]
    IMEI,
    #[tlvdf(tag = 5, typ = "numeric")]
    MSISDN,
    #[tlvdf(tag = 6, nested = "GUTI")]
    GUTI,
    #[tlvdf(tag = 7, nested = "Location")]
    Location,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.mmeidentifier_assocation")]
pub enum MMEIdentifierAssocation {
    #[tlvdf(tag = 1, typ = "numeric")]
    IMSI,
    #[tlvdf(tag = 2, typ = "numeric")]
    IMEI,
    #[tlvdf(tag = 3, nested = "Location")]
    Location,
    #[tlvdf(tag = 4, nested = "GUTI")]
    GUTI,
    #[tlvdf(tag = 5, seq_of = "TAI")]
    TAIList,
}
