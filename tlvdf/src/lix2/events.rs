//! The event CHOICEs carried by the X2 and HI2 payloads.

use super::{amf, common, eps, exposure, messaging, ptc, smf, udm};
use crate::FieldTable;

/// Every tag from 1 to 91 except 16, which is only sent over HI2.
#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.xirievent")]
pub enum XIRIEvent {
    #[tlvdf(tag = 1, nested = "amf::AMFRegistration")]
    Registration,
    #[tlvdf(tag = 2, nested = "amf::AMFDeregistration")]
    Deregistration,
    #[tlvdf(tag = 3, nested = "amf::AMFLocationUpdate")]
    LocationUpdate,
    #[tlvdf(tag = 4, nested = "amf::AMFStartOfInterceptionWithRegisteredUE")]
    StartOfInterceptionWithRegisteredUE,
    #[tlvdf(tag = 5, nested = "amf::AMFUnsuccessfulProcedure")]
    UnsuccessfulAMProcedure,
    #[tlvdf(tag = 6, nested = "smf::SMFPDUSessionEstablishment")]
    PDUSessionEstablishment,
    #[tlvdf(tag = 7, nested = "smf::SMFPDUSessionModification")]
    PDUSessionModification,
    #[tlvdf(tag = 8, nested = "smf::SMFPDUSessionRelease")]
    PDUSessionRelease,
    #[tlvdf(tag = 9, nested = "smf::SMFStartOfInterceptionWithEstablishedPDUSession")]
    StartOfInterceptionWithEstablishedPDUSession,
    #[tlvdf(tag = 10, nested = "smf::SMFUnsuccessfulProcedure")]
    UnsuccessfulSMProcedure,
    #[tlvdf(tag = 11, nested = "udm::UDMServingSystemMessage")]
    ServingSystemMessage,
    #[tlvdf(tag = 12, nested = "messaging::SMSMessage")]
    SMSMessage,
    #[tlvdf(tag = 13, nested = "udm::LALSReport")]
    LALSReport,
    #[tlvdf(tag = 14, nested = "smf::PDHeaderReport")]
    PDHeaderReport,
    #[tlvdf(tag = 15, nested = "smf::PDSummaryReport")]
    PDSummaryReport,
    #[tlvdf(tag = 17, nested = "messaging::MMSSend")]
    MMSSend,
    #[tlvdf(tag = 18, nested = "messaging::MMSSendByNonLocalTarget")]
    MMSSendByNonLocalTarget,
    #[tlvdf(tag = 19, nested = "messaging::MMSNotification")]
    MMSNotification,
    #[tlvdf(tag = 20, nested = "messaging::MMSSendToNonLocalTarget")]
    MMSSendToNonLocalTarget,
    #[tlvdf(tag = 21, nested = "messaging::MMSNotificationResponse")]
    MMSNotificationResponse,
    #[tlvdf(tag = 22, nested = "messaging::MMSRetrieval")]
    MMSRetrieval,
    #[tlvdf(tag = 23, nested = "messaging::MMSDeliveryAck")]
    MMSDeliveryAck,
    #[tlvdf(tag = 24, nested = "messaging::MMSForward")]
    MMSForward,
    #[tlvdf(tag = 25, nested = "messaging::MMSDeleteFromRelay")]
    MMSDeleteFromRelay,
    #[tlvdf(tag = 26, nested = "messaging::MMSDeliveryReport")]
    MMSDeliveryReport,
    #[tlvdf(tag = 27, nested = "messaging::MMSDeliveryReportNonLocalTarget")]
    MMSDeliveryReportNonLocalTarget,
    #[tlvdf(tag = 28, nested = "messaging::MMSReadReport")]
    MMSReadReport,
    #[tlvdf(tag = 29, nested = "messaging::MMSReadReportNonLocalTarget")]
    MMSReadReportNonLocalTarget,
    #[tlvdf(tag = 30, nested = "messaging::MMSCancel")]
    MMSCancel,
    #[tlvdf(tag = 31, nested = "messaging::MMSMBoxStore")]
    MMSMBoxStore,
    #[tlvdf(tag = 32, nested = "messaging::MMSMBoxUpload")]
    MMSMBoxUpload,
    #[tlvdf(tag = 33, nested = "messaging::MMSMBoxDelete")]
    MMSMBoxDelete,
    #[tlvdf(tag = 34, nested = "messaging::MMSMBoxViewRequest")]
    MMSMBoxViewRequest,
    #[tlvdf(tag = 35, nested = "messaging::MMSMBoxViewResponse")]
    MMSMBoxViewResponse,
    #[tlvdf(tag = 36, nested = "ptc::PTCRegistration")]
    PTCRegistration,
    #[tlvdf(tag = 37, nested = "ptc::PTCSessionInitiation")]
    PTCSessionInitiation,
    #[tlvdf(tag = 38, nested = "ptc::PTCSessionAbandon")]
    PTCSessionAbandon,
    #[tlvdf(tag = 39, nested = "ptc::PTCSessionStart")]
    PTCSessionStart,
    #[tlvdf(tag = 40, nested = "ptc::PTCSessionEnd")]
    PTCSessionEnd,
    #[tlvdf(tag = 41, nested = "ptc::PTCStartOfInterception")]
    PTCStartOfInterception,
    #[tlvdf(tag = 42, nested = "ptc::PTCPreEstablishedSession")]
    PTCPreEstablishedSession,
    #[tlvdf(tag = 43, nested = "ptc::PTCInstantPersonalAlert")]
    PTCInstantPersonalAlert,
    #[tlvdf(tag = 44, nested = "ptc::PTCPartyJoin")]
    PTCPartyJoin,
    #[tlvdf(tag = 45, nested = "ptc::PTCPartyDrop")]
    PTCPartyDrop,
    #[tlvdf(tag = 46, nested = "ptc::PTCPartyHold")]
    PTCPartyHold,
    #[tlvdf(tag = 47, nested = "ptc::PTCMediaModification")]
    PTCMediaModification,
    #[tlvdf(tag = 48, nested = "ptc::PTCGroupAdvertisement")]
    PTCGroupAdvertisement,
    #[tlvdf(tag = 49, nested = "ptc::PTCFloorControl")]
    PTCFloorControl,
    #[tlvdf(tag = 50, nested = "ptc::PTCTargetPresence")]
    PTCTargetPresence,
    #[tlvdf(tag = 51, nested = "ptc::PTCParticipantPresence")]
    PTCParticipantPresence,
    #[tlvdf(tag = 52, nested = "ptc::PTCListManagement")]
    PTCListManagement,
    #[tlvdf(tag = 53, nested = "ptc::PTCAccessPolicy")]
    PTCAccessPolicy,
    #[tlvdf(tag = 54, nested = "udm::UDMSubscriberRecordChangeMessage")]
    SubscriberRecordChangeMessage,
    #[tlvdf(tag = 55, nested = "udm::UDMCancelLocationMessage")]
    CancelLocationMessage,
    #[tlvdf(tag = 56, nested = "messaging::SMSReport")]
    SMSReport,
    #[tlvdf(tag = 57, nested = "smf::SMFMAPDUSessionEstablishment")]
    SMFMAPDUSessionEstablishment,
    #[tlvdf(tag = 58, nested = "smf::SMFMAPDUSessionModification")]
    SMFMAPDUSessionModification,
    #[tlvdf(tag = 59, nested = "smf::SMFMAPDUSessionRelease")]
    SMFMAPDUSessionRelease,
    #[tlvdf(tag = 60, nested = "smf::SMFStartOfInterceptionWithEstablishedMAPDUSession")]
    StartOfInterceptionWithEstablishedMAPDUSession,
    #[tlvdf(tag = 61, nested = "smf::SMFMAUnsuccessfulProcedure")]
    UnsuccessfulMASMProcedure,
    #[tlvdf(tag = 62, nested = "amf::AMFIdentifierAssocation")]
    AMFIdentifierAssocation,
    #[tlvdf(tag = 63, nested = "eps::MMEIdentifierAssocation")]
    MMEIdentifierAssocation,
    #[tlvdf(tag = 64, nested = "smf::SMFPDUtoMAPDUSessionModification")]
    SMFPDUtoMAPDUSessionModification,
    #[tlvdf(tag = 65, nested = "exposure::NEFPDUSessionEstablishment")]
    NEFPDUSessionEstablishment,
    #[tlvdf(tag = 66, nested = "exposure::NEFPDUSessionModification")]
    NEFPDUSessionModification,
    #[tlvdf(tag = 67, nested = "exposure::NEFPDUSessionRelease")]
    NEFPDUSessionRelease,
    #[tlvdf(tag = 68, nested = "exposure::NEFUnsuccessfulProcedure")]
    NEFUnsuccessfulProcedure,
    #[tlvdf(tag = 69, nested = "exposure::NEFStartOfInterceptionWithEstablishedPDUSession")]
    NEFStartOfInterceptionWithEstablishedPDUSession,
    #[tlvdf(tag = 70, nested = "exposure::NEFDeviceTrigger")]
    NEFdeviceTrigger,
    #[tlvdf(tag = 71, nested = "exposure::NEFDeviceTriggerReplace")]
    NEFdeviceTriggerReplace,
    #[tlvdf(tag = 72, nested = "exposure::NEFDeviceTriggerCancellation")]
    NEFdeviceTriggerCancellation,
    #[tlvdf(tag = 73, nested = "exposure::NEFDeviceTriggerReportNotify")]
    NEFdeviceTriggerReportNotify,
    #[tlvdf(tag = 74, nested = "exposure::NEFMSISDNLessMOSMS")]
    NEFMSISDNLessMOSMS,
    #[tlvdf(tag = 75, nested = "exposure::NEFExpectedUEBehaviourUpdate")]
    NEFExpectedUEBehaviourUpdate,
    #[tlvdf(tag = 76, nested = "exposure::SCEFPDNConnectionEstablishment")]
    SCEFPDNConnectionEstablishment,
    #[tlvdf(tag = 77, nested = "exposure::SCEFPDNConnectionUpdate")]
    SCEFPDNConnectionUpdate,
    #[tlvdf(tag = 78, nested = "exposure::SCEFPDNConnectionRelease")]
    SCEFPDNConnectionRelease,
    #[tlvdf(tag = 79, nested = "exposure::SCEFUnsuccessfulProcedure")]
    SCEFUnsuccessfulProcedure,
    #[tlvdf(tag = 80, nested = "exposure::SCEFStartOfInterceptionWithEstablishedPDNConnection")]
    SCEFStartOfInterceptionWithEstablishedPDNConnection,
    #[tlvdf(tag = 81, nested = "exposure::SCEFDeviceTrigger")]
    SCEFdeviceTrigger,
    #[tlvdf(tag = 82, nested = "exposure::SCEFDeviceTriggerReplace")]
    SCEFdeviceTriggerReplace,
    #[tlvdf(tag = 83, nested = "exposure::SCEFDeviceTriggerCancellation")]
    SCEFdeviceTriggerCancellation,
    #[tlvdf(tag = 84, nested = "exposure::SCEFDeviceTriggerReportNotify")]
    SCEFdeviceTriggerReportNotify,
    #[tlvdf(tag = 85, nested = "exposure::SCEFMSISDNLessMOSMS")]
    SCEFMSISDNLessMOSMS,
    #[tlvdf(tag = 86, nested = "exposure::SCEFCommunicationPatternUpdate")]
    SCEFCommunicationPatternUpdate,
    #[tlvdf(tag = 87, nested = "eps::MMEAttach")]
    MMEAttach,
    #[tlvdf(tag = 88, nested = "eps::MMEDetach")]
    MMEDetach,
    #[tlvdf(tag = 89, nested = "eps::MMELocationUpdate")]
    MMELocationUpdate,
    #[tlvdf(tag = 90, nested = "eps::MMEStartOfInterceptionWithEPSAttachedUE")]
    MMEStartOfInterceptionWithEPSAttachedUE,
    #[tlvdf(tag = 91, nested = "eps::MMEUnsuccessfulProcedure")]
    MMEUnsuccessfulProcedure,
}

/// The X2 events plus the cell site report produced by the mediation function.
#[derive(FieldTable)]
#[tlvdf(kind = "choice", rename_all = "asn1", prefix = "lix2.irievent")]
pub enum IRIEvent {
    #[tlvdf(tag = 1, nested = "amf::AMFRegistration")]
    Registration,
    #[tlvdf(tag = 2, nested = "amf::AMFDeregistration")]
    Deregistration,
    #[tlvdf(tag = 3, nested = "amf::AMFLocationUpdate")]
    LocationUpdate,
    #[tlvdf(tag = 4, nested = "amf::AMFStartOfInterceptionWithRegisteredUE")]
    StartOfInterceptionWithRegisteredUE,
    #[tlvdf(tag = 5, nested = "amf::AMFUnsuccessfulProcedure")]
    UnsuccessfulAMProcedure,
    #[tlvdf(tag = 6, nested = "smf::SMFPDUSessionEstablishment")]
    PDUSessionEstablishment,
    #[tlvdf(tag = 7, nested = "smf::SMFPDUSessionModification")]
    PDUSessionModification,
    #[tlvdf(tag = 8, nested = "smf::SMFPDUSessionRelease")]
    PDUSessionRelease,
    #[tlvdf(tag = 9, nested = "smf::SMFStartOfInterceptionWithEstablishedPDUSession")]
    StartOfInterceptionWithEstablishedPDUSession,
    #[tlvdf(tag = 10, nested = "smf::SMFUnsuccessfulProcedure")]
    UnsuccessfulSMProcedure,
    #[tlvdf(tag = 11, nested = "udm::UDMServingSystemMessage")]
    ServingSystemMessage,
    #[tlvdf(tag = 12, nested = "messaging::SMSMessage")]
    SMSMessage,
    #[tlvdf(tag = 13, nested = "udm::LALSReport")]
    LALSReport,
    #[tlvdf(tag = 14, nested = "smf::PDHeaderReport")]
    PDHeaderReport,
    #[tlvdf(tag = 15, nested = "smf::PDSummaryReport")]
    PDSummaryReport,
    #[tlvdf(tag = 16, seq_of = "common::CellInformation")]
    MDFCellSiteReport,
    #[tlvdf(tag = 17, nested = "messaging::MMSSend")]
    MMSSend,
    #[tlvdf(tag = 18, nested = "messaging::MMSSendByNonLocalTarget")]
    MMSSendByNonLocalTarget,
    #[tlvdf(tag = 19, nested = "messaging::MMSNotification")]
    MMSNotification,
    #[tlvdf(tag = 20, nested = "messaging::MMSSendToNonLocalTarget")]
    MMSSendToNonLocalTarget,
    #[tlvdf(tag = 21, nested = "messaging::MMSNotificationResponse")]
    MMSNotificationResponse,
    #[tlvdf(tag = 22, nested = "messaging::MMSRetrieval")]
    MMSRetrieval,
    #[tlvdf(tag = 23, nested = "messaging::MMSDeliveryAck")]
    MMSDeliveryAck,
    #[tlvdf(tag = 24, nested = "messaging::MMSForward")]
    MMSForward,
    #[tlvdf(tag = 25, nested = "messaging::MMSDeleteFromRelay")]
    MMSDeleteFromRelay,
    #[tlvdf(tag = 26, nested = "messaging::MMSDeliveryReport")]
    MMSDeliveryReport,
    #[tlvdf(tag = 27, nested = "messaging::MMSDeliveryReportNonLocalTarget")]
    MMSDeliveryReportNonLocalTarget,
    #[tlvdf(tag = 28, nested = "messaging::MMSReadReport")]
    MMSReadReport,
    #[tlvdf(tag = 29, nested = "messaging::MMSReadReportNonLocalTarget")]
    MMSReadReportNonLocalTarget,
    #[tlvdf(tag = 30, nested = "messaging::MMSCancel")]
    MMSCancel,
    #[tlvdf(tag = 31, nested = "messaging::MMSMBoxStore")]
    MMSMBoxStore,
    #[tlvdf(tag = 32, nested = "messaging::MMSMBoxUpload")]
    MMSMBoxUpload,
    #[tlvdf(tag = 33, nested = "messaging::MMSMBoxDelete")]
    MMSMBoxDelete,
    #[tlvdf(tag = 34, nested = "messaging::MMSMBoxViewRequest")]
    MMSMBoxViewRequest,
    #[tlvdf(tag = 35, nested = "messaging::MMSMBoxViewResponse")]
    MMSMBoxViewResponse,
    #[tlvdf(tag = 36, nested = "ptc::PTCRegistration")]
    PTCRegistration,
    #[tlvdf(tag = 37, nested = "ptc::PTCSessionInitiation")]
    PTCSessionInitiation,
    #[tlvdf(tag = 38, nested = "ptc::PTCSessionAbandon")]
    PTCSessionAbandon,
    #[tlvdf(tag = 39, nested = "ptc::PTCSessionStart")]
    PTCSessionStart,
    #[tlvdf(tag = 40, nested = "ptc::PTCSessionEnd")]
    PTCSessionEnd,
    #[tlvdf(tag = 41, nested = "ptc::PTCStartOfInterception")]
    PTCStartOfInterception,
    #[tlvdf(tag = 42, nested = "ptc::PTCPreEstablishedSession")]
    PTCPreEstablishedSession,
    #[tlvdf(tag = 43, nested = "ptc::PTCInstantPersonalAlert")]
    PTCInstantPersonalAlert,
    #[tlvdf(tag = 44, nested = "ptc::PTCPartyJoin")]
    PTCPartyJoin,
    #[tlvdf(tag = 45, nested = "ptc::PTCPartyDrop")]
    PTCPartyDrop,
    #[tlvdf(tag = 46, nested = "ptc::PTCPartyHold")]
    PTCPartyHold,
    #[tlvdf(tag = 47, nested = "ptc::PTCMediaModification")]
    PTCMediaModification,
    #[tlvdf(tag = 48, nested = "ptc::PTCGroupAdvertisement")]
    PTCGroupAdvertisement,
    #[tlvdf(tag = 49, nested = "ptc::PTCFloorControl")]
    PTCFloorControl,
    #[tlvdf(tag = 50, nested = "ptc::PTCTargetPresence")]
    PTCTargetPresence,
    #[tlvdf(tag = 51, nested = "ptc::PTCParticipantPresence")]
    PTCParticipantPresence,
    #[tlvdf(tag = 52, nested = "ptc::PTCListManagement")]
    PTCListManagement,
    #[tlvdf(tag = 53, nested = "ptc::PTCAccessPolicy")]
    PTCAccessPolicy,
    #[tlvdf(tag = 54, nested = "udm::UDMSubscriberRecordChangeMessage")]
    SubscriberRecordChangeMessage,
    #[tlvdf(tag = 55, nested = "udm::UDMCancelLocationMessage")]
    CancelLocationMessage,
    #[tlvdf(tag = 56, nested = "messaging::SMSReport")]
    SMSReport,
    #[tlvdf(tag = 57, nested = "smf::SMFMAPDUSessionEstablishment")]
    SMFMAPDUSessionEstablishment,
    #[tlvdf(tag = 58, nested = "smf::SMFMAPDUSessionModification")]
    SMFMAPDUSessionModification,
    #[tlvdf(tag = 59, nested = "smf::SMFMAPDUSessionRelease")]
    SMFMAPDUSessionRelease,
    #[tlvdf(tag = 60, nested = "smf::SMFStartOfInterceptionWithEstablishedMAPDUSession")]
    StartOfInterceptionWithEstablishedMAPDUSession,
    #[tlvdf(tag = 61, nested = "smf::SMFMAUnsuccessfulProcedure")]
    UnsuccessfulMASMProcedure,
    #[tlvdf(tag = 62, nested = "amf::AMFIdentifierAssocation")]
    AMFIdentifierAssocation,
    #[tlvdf(tag = 63, nested = "eps::MMEIdentifierAssocation")]
    MMEIdentifierAssocation,
    #[tlvdf(tag = 64, nested = "smf::SMFPDUtoMAPDUSessionModification")]
    SMFPDUtoMAPDUSessionModification,
    #[tlvdf(tag = 65, nested = "exposure::NEFPDUSessionEstablishment")]
    NEFPDUSessionEstablishment,
    #[tlvdf(tag = 66, nested = "exposure::NEFPDUSessionModification")]
    NEFPDUSessionModification,
    #[tlvdf(tag = 67, nested = "exposure::NEFPDUSessionRelease")]
    NEFPDUSessionRelease,
    #[tlvdf(tag = 68, nested = "exposure::NEFUnsuccessfulProcedure")]
    NEFUnsuccessfulProcedure,
    #[tlvdf(tag = 69, nested = "exposure::NEFStartOfInterceptionWithEstablishedPDUSession")]
    NEFStartOfInterceptionWithEstablishedPDUSession,
    #[tlvdf(tag = 70, nested = "exposure::NEFDeviceTrigger")]
    NEFdeviceTrigger,
    #[tlvdf(tag = 71, nested = "exposure::NEFDeviceTriggerReplace")]
    NEFdeviceTriggerReplace,
    #[tlvdf(tag = 72, nested = "exposure::NEFDeviceTriggerCancellation")]
    NEFdeviceTriggerCancellation,
    #[tlvdf(tag = 73, nested = "exposure::NEFDeviceTriggerReportNotify")]
    NEFdeviceTriggerReportNotify,
    #[tlvdf(tag = 74, nested = "exposure::NEFMSISDNLessMOSMS")]
    NEFMSISDNLessMOSMS,
    #[tlvdf(tag = 75, nested = "exposure::NEFExpectedUEBehaviourUpdate")]
    NEFExpectedUEBehaviourUpdate,
    #[tlvdf(tag = 76, nested = "exposure::SCEFPDNConnectionEstablishment")]
    SCEFPDNConnectionEstablishment,
    #[tlvdf(tag = 77, nested = "exposure::SCEFPDNConnectionUpdate")]
    SCEFPDNConnectionUpdate,
    #[tlvdf(tag = 78, nested = "exposure::SCEFPDNConnectionRelease")]
    SCEFPDNConnectionRelease,
    #[tlvdf(tag = 79, nested = "exposure::SCEFUnsuccessfulProcedure")]
    SCEFUnsuccessfulProcedure,
    #[tlvdf(tag = 80, nested = "exposure::SCEFStartOfInterceptionWithEstablishedPDNConnection")]
    SCEFStartOfInterceptionWithEstablishedPDNConnection,
    #[tlvdf(tag = 81, nested = "exposure::SCEFDeviceTrigger")]
    SCEFdeviceTrigger,
    #[tlvdf(tag = 82, nested = "exposure::SCEFDeviceTriggerReplace")]
    SCEFdeviceTriggerReplace,
    #[tlvdf(tag = 83, nested = "exposure::SCEFDeviceTriggerCancellation")]
    SCEFdeviceTriggerCancellation,
    #[tlvdf(tag = 84, nested = "exposure::SCEFDeviceTriggerReportNotify")]
    SCEFdeviceTriggerReportNotify,
    #[tlvdf(tag = 85, nested = "exposure::SCEFMSISDNLessMOSMS")]
    SCEFMSISDNLessMOSMS,
    #[tlvdf(tag = 86, nested = "exposure::SCEFCommunicationPatternUpdate")]
    SCEFCommunicationPatternUpdate,
    #[tlvdf(tag = 87, nested = "eps::MMEAttach")]
    MMEAttach,
    #[tlvdf(tag = 88, nested = "eps::MMEDetach")]
    MMEDetach,
    #[tlvdf(tag = 89, nested = "eps::MMELocationUpdate")]
    MMELocationUpdate,
    #[tlvdf(tag = 90, nested = "eps::MMEStartOfInterceptionWithEPSAttachedUE")]
    MMEStartOfInterceptionWithEPSAttachedUE,
    #[tlvdf(tag = 91, nested = "eps::MMEUnsuccessfulProcedure")]
    MMEUnsuccessfulProcedure,
}
