//! UDM subscriber events and location reports from LALS.

use super::common::*;
use crate::{FieldTable, ValueStrings};

pub const UDM_SERVING_SYSTEM_METHOD: ValueStrings = &[
    (0, "amf3GPPAccessRegistration"),
    (1, "amfNon3GPPAccessRegistration"),
    (2, "unknown"),
];

pub const UDM_SUBSCRIBER_RECORD_CHANGE_METHOD: ValueStrings = &[
    (1, "pEIChange"),
    (2, "sUPIChange"),
    (3, "gPSIChange"),
    (4, "uEDeprovisioning"),
    (5, "unknown"),
    (6, "serviceIDChange"),
];

pub const UDM_CANCEL_LOCATION_METHOD: ValueStrings = &[
    (1, "aMF3GPPAccessDeregistration"),
    (2, "aMFNon3GPPAccessDeregistration"),
    (3, "uDMDeregistration"),
    (4, "unknown"),
];

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.udmserving_system_message")]
pub enum UDMServingSystemMessage {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 3, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 4, nested = "FiveGGUTI")]
    GUTI,
    #[tlvdf(tag = 5, nested = "Location")]
    Location,
    #[tlvdf(tag = 6, typ = "enum", values = "UDM_SERVING_SYSTEM_METHOD")]
    ServingSystemMethod,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.udmsubscriber_record_change_message")]
pub enum UDMSubscriberRecordChangeMessage {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 3, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 4, nested = "PEI")]
    OldPEI,
    #[tlvdf(tag = 5, nested = "SUPI")]
    OldSUPI,
    #[tlvdf(tag = 6, nested = "GPSI")]
    OldGPSI,
    #[tlvdf(tag = 7, typ = "bytes")]
    OldserviceID,
    #[tlvdf(tag = 8, typ = "bytes")]
    NewserviceID,
    #[tlvdf(tag = 9, typ = "enum", values = "UDM_SUBSCRIBER_RECORD_CHANGE_METHOD")]
    SubscriberRecordChangeMethod,
}

#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.udmcancel_location_message")]
pub enum UDMCancelLocationMessage {
    #[tlvdf(tag = 1, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 2, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 3, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 4, nested = "FiveGGUTI")]
    GUTI,
    #[tlvdf(tag = 5, typ = "enum", values = "UDM_CANCEL_LOCATION_METHOD")]
    CancelLocationMethod,
}

/// Tag 1 was retired, so the record starts at 2.
#[derive(FieldTable)]
#[tlvdf(rename_all = "asn1", prefix = "lix2.lalsreport")]
pub enum LALSReport {
    #[tlvdf(tag = 2, nested = "SUPI")]
    SUPI,
    #[tlvdf(tag = 3, nested = "PEI")]
    PEI,
    #[tlvdf(tag = 4, nested = "GPSI")]
    GPSI,
    #[tlvdf(tag = 5, nested = "Location")]
    Location,
}
