//! AMF events: registration state of the target UE.

use super::common::*;
use crate::{FieldTable, ValueStrings};

pub const AMF_REGISTRATION_TYPE: ValueStrings = &[
    (1, "initial"),
    (2, "mobility"),
    (3, "periodic"),
    (4, "emergency"),
];

pub const AMF_REGISTRATION_RESULT: ValueStrings = &[
    (1, "threeGPPAccess"),
    (2, "nonThreeGPPAccess"),
    (3, "threeGPPAndNonThreeGPPAccess"),
];

pub const AMF_DIRECTION: ValueStrings = &[(1, "networkInitiated"), (2, "uEInitiated")];

pub const AMF_FAILED_PROCEDURE_TYPE: ValueStrings = &[
    (1, "registration"),
    (2, "sMS"),
    (3, "pDUSessionEstablishment"),
];

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.amfregistration")]
pub enum AMFRegistration {
    #[tlvdf(tag = 1, typ = "enum", values = "AMF_REGISTRATION_TYPE")]
    RegistrationType,
    #[tlvdf(tag = 2, typ = "enum", values = "AMF_REGISTRATION_RESULT")]
    RegistrationResult,
    #[tlvdf(tag = 3, nested = "Slice")]
    Slice,
    #[tlvdf(tag = 4, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 5, nested = "SUCI")]
    SUCI,
    #[tlvdf(tag = 6, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 7, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 8, nested = "FiveGGUTI")]
    GUTI,
    #[tlvdf(tag = 9, nested = "Location")]
    Location,
    #[tlvdf(tag = 10, nested = "UEEndpointAddress")]
    Non3GPPAccessEndpoint,
    #[tlvdf(tag = 11, seq_of = "TAI")]
    FiveGSTAIList,
    #[tlvdf(tag = 12, typ = "enum", values = "SMS_OVER_NAS_INDICATOR")]
    SMSOverNasIndicator,
    #[tlvdf(tag = 13, nested = "EPS5GGUTI")]
    OldGUTI,
    #[tlvdf(tag = 14, typ = "enum", values = "EMM_5GMM_STATUS")]
    EMM5GRegStatus,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.amfderegistration")]
pub enum AMFDeregistration {
    #[tlvdf(tag = 1, typ = "enum", values = "AMF_DIRECTION")]
    DeregistrationDirection,
    #[tlvdf(tag = 2, typ = "enum", values = "ACCESS_TYPE")]
    AccessType,
    #[tlvdf(tag = 3, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 4, nested = "SUCI")]
    SUCI,
    #[tlvdf(tag = 5, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 6, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 7, nested = "FiveGGUTI")]
    GUTI,
    #[tlvdf(tag = 8, typ = "int")]
    Cause,
    #[tlvdf(tag = 9, nested = "Location")]
    Location,
    #[tlvdf(tag = 10, typ = "enum", values = "SWITCH_OFF_INDICATOR")]
    SwitchOffIndicator,
    #[tlvdf(tag = 11, typ = "bool")]
    ReRegRequiredIndicator,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.amflocation_update")]
pub enum AMFLocationUpdate {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "SUCI")]
    SUCI,
    #[tlvdf(tag = 3, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 4, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 5, nested = "FiveGGUTI")]
    GUTI,
    #[tlvdf(tag = 6, nested = "Location")]
    Location,
    #[tlvdf(tag = 7, typ = "enum", values = "SMS_OVER_NAS_INDICATOR")]
    SMSOverNASIndicator,
    #[tlvdf(tag = 8, nested = "EPS5GGUTI")]
    OldGUTI,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.amfstart_of_interception_with_registered_ue")]
pub enum AMFStartOfInterceptionWithRegisteredUE {
    #[tlvdf(tag = 1, typ = "enum", values = "AMF_REGISTRATION_RESULT")]
    RegistrationResult,
    #[tlvdf(tag = 2, typ = "enum", values = "AMF_REGISTRATION_TYPE")]
    RegistrationType,
    #[tlvdf(tag = 3, nested = "Slice")]
    Slice,
    #[tlvdf(tag = 4, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 5, nested = "SUCI")]
    SUCI,
    #[tlvdf(tag = 6, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 7, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 8, nested = "FiveGGUTI")]
    GUTI,
    #[tlvdf(tag = 9, nested = "Location")]
    Location,
    #[tlvdf(tag = 10, nested = "UEEndpointAddress")]
    Non3GPPAccessEndpoint,
    #[tlvdf(tag = 11, typ = "time")]
    TimeOfRegistration,
    #[tlvdf(tag = 12, seq_of = "TAI")]
    FiveGSTAIList,
    #[tlvdf(tag = 13, typ = "enum", values = "SMS_OVER_NAS_INDICATOR")]
    SMSOverNASIndicator,
    #[tlvdf(tag = 14, nested = "EPS5GGUTI")]
    OldGUTI,
    #[tlvdf(tag = 15, typ = "enum", values = "EMM_5GMM_STATUS")]
    EMM5GRegStatus,
}

#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.amffailure_cause")]
pub enum AMFFailureCause {
    #[tlvdf(tag = 1, typ = "int")]
    FiveGMMCause,
    #[tlvdf(tag = 2, typ = "int")]
    FiveGSMCause,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.amfunsuccessful_procedure")]
pub enum AMFUnsuccessfulProcedure {
    #[tlvdf(tag = 1, typ = "enum", values = "AMF_FAILED_PROCEDURE_TYPE")]
    FailedProcedureType,
    #[tlvdf(tag = 2, nested = "AMFFailureCause")]
    FailureCause,
    #[tlvdf(tag = 3, set_of = "SNSSAI")]
    RequestedSlice,
    #[tlvdf(tag = 4, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 5, nested = "SUCI")]
    SUCI,
    #[tlvdf(tag = 6, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 7, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 8, nested = "FiveGGUTI")]
    GUTI,
    #[tlvdf(tag = 9, nested = "Location")]
    Location,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.amfidentifier_assocation")]
pub enum AMFIdentifierAssocation {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "SUCI")]
    SUCI,
    #[tlvdf(tag = 3, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 4, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 5, nested = "FiveGGUTI")]
    GUTI,
    #[tlvdf(tag = 6, nested = "Location")]
    Location,
    #[tlvdf(tag = 7, seq_of = "TAI")]
    FiveGSTAIList,
}
