//! Message type catalogue and type dispatch

use crate::applications;
use crate::bits::BitString;
use crate::codes::CodeTable;
use crate::engine::{DecodeOptions, Engine};
use crate::error::{ParseError, Result};
use crate::itu;
use crate::layouts::{self, HEADER};
use crate::observer::AisObserver;

/// AIS message type (ITU-R M.1371 numbering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageType {
    /// Class A position report, scheduled
    PositionReportScheduled = 1,
    /// Class A position report, assigned schedule
    PositionReportAssigned = 2,
    /// Class A position report, response to interrogation
    PositionReportResponse = 3,
    /// Base station report
    BaseStationReport = 4,
    /// Static and voyage related data
    StaticAndVoyageData = 5,
    /// Addressed binary message
    BinaryAddressed = 6,
    /// Binary acknowledge
    BinaryAcknowledge = 7,
    /// Broadcast binary message
    BinaryBroadcast = 8,
    /// Search and rescue aircraft position report
    SarAircraftPosition = 9,
    /// UTC and date inquiry
    UtcInquiry = 10,
    /// UTC and date response
    UtcResponse = 11,
    /// Addressed safety related message
    SafetyAddressed = 12,
    /// Safety related acknowledge
    SafetyAcknowledge = 13,
    /// Safety related broadcast message
    SafetyBroadcast = 14,
    /// Interrogation
    Interrogation = 15,
    /// Assignment mode command
    AssignmentCommand = 16,
    /// DGNSS broadcast binary message
    DgnssBroadcast = 17,
    /// Class B position report
    ClassBPosition = 18,
    /// Extended class B position report
    ClassBExtendedPosition = 19,
    /// Data link management
    DataLinkManagement = 20,
    /// Aid-to-navigation report
    AidToNavigation = 21,
    /// Channel management
    ChannelManagement = 22,
    /// Group assignment command
    GroupAssignment = 23,
    /// Static data report
    StaticDataReport = 24,
    /// Single slot binary message
    SingleSlotBinary = 25,
    /// Multiple slot binary message with communication state
    MultipleSlotBinary = 26,
    /// Long range position report
    LongRangeBroadcast = 27,
}

impl MessageType {
    /// Raw type tag
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Human readable name
    pub fn description(&self) -> &'static str {
        CodeTable::MessageType
            .lookup(self.code() as u16)
            .unwrap_or_default()
    }

    /// Carries a vessel position
    pub fn is_position_report(&self) -> bool {
        matches!(
            self,
            MessageType::PositionReportScheduled
                | MessageType::PositionReportAssigned
                | MessageType::PositionReportResponse
                | MessageType::BaseStationReport
                | MessageType::SarAircraftPosition
                | MessageType::ClassBPosition
                | MessageType::ClassBExtendedPosition
                | MessageType::AidToNavigation
                | MessageType::LongRangeBroadcast
        )
    }

    /// A layout exists for this type
    pub fn is_supported(&self) -> bool {
        layouts::layout(self.code()).is_some()
    }
}

impl TryFrom<u8> for MessageType {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self> {
        use MessageType::*;
        Ok(match value {
            1 => PositionReportScheduled,
            2 => PositionReportAssigned,
            3 => PositionReportResponse,
            4 => BaseStationReport,
            5 => StaticAndVoyageData,
            6 => BinaryAddressed,
            7 => BinaryAcknowledge,
            8 => BinaryBroadcast,
            9 => SarAircraftPosition,
            10 => UtcInquiry,
            11 => UtcResponse,
            12 => SafetyAddressed,
            13 => SafetyAcknowledge,
            14 => SafetyBroadcast,
            15 => Interrogation,
            16 => AssignmentCommand,
            17 => DgnssBroadcast,
            18 => ClassBPosition,
            19 => ClassBExtendedPosition,
            20 => DataLinkManagement,
            21 => AidToNavigation,
            22 => ChannelManagement,
            23 => GroupAssignment,
            24 => StaticDataReport,
            25 => SingleSlotBinary,
            26 => MultipleSlotBinary,
            27 => LongRangeBroadcast,
            _ => {
                return Err(ParseError::unknown_message_type(format!(
                    "type {} outside 1..={}",
                    value,
                    itu::MAX_MESSAGE_TYPE
                )))
            }
        })
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}

/// Decode one assembled message into `observer`
///
/// The type tag is checked before anything is delivered, so an unsupported
/// type produces no field calls. Types 6 and 8 continue into the binary
/// application named by their DAC/FID; an unknown application leaves the
/// remaining bits undecoded and is not an error.
pub fn decode<O: AisObserver + ?Sized>(
    bits: &BitString,
    observer: &mut O,
    options: DecodeOptions,
) -> Result<MessageType> {
    let tag = bits
        .bits(0, itu::TYPE_TAG_BITS)
        .ok_or_else(|| ParseError::truncated(format!("{} bits hold no type tag", bits.len())))?
        as u8;
    let message_type = MessageType::try_from(tag)?;
    let layout = layouts::layout(tag).ok_or_else(|| {
        ParseError::unknown_message_type(format!("{} is not supported", message_type))
    })?;

    let mut cursor = bits.cursor();
    let mut engine = Engine::new(observer, options);
    engine.run(&mut cursor, HEADER)?;
    engine.run(&mut cursor, layout.items)?;

    if let Some(header) = layout.application {
        let dac = bits.bits(header.dac_at, 10).unwrap_or_default() as u16;
        let fid = bits.bits(header.fid_at, 6).unwrap_or_default() as u8;
        match applications::lookup(tag, dac, fid) {
            Some(app) => {
                log::trace!("type {} application {}", tag, app.name);
                engine.run(&mut cursor, app.items)?;
            }
            None => log::debug!(
                "no layout for type {} DAC {} FID {}, {} bits left undecoded",
                tag,
                dac,
                fid,
                cursor.remaining()
            ),
        }
    }

    Ok(message_type)
}
