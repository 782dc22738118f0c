//! Field layouts for AIS message types 1-27
//!
//! Field order, widths and reserved values follow ITU-R M.1371. Every layout
//! starts after the common header (type, repeat indicator, MMSI).

use crate::codes::CodeTable;
use crate::field::Field::*;
use crate::field::Item::Field as F;
use crate::field::Item::{self, Optional, Spare, Switch};
use crate::field::{code, flag, int, text, text_var, binary_var, uint, Field, FieldSpec};
use crate::field::{Position, Selector};
use crate::itu;

/// Layout of one message type
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Fields following the common header
    pub items: &'static [Item],
    /// Set for the binary application types, which re-dispatch on DAC/FID
    pub application: Option<ApplicationHeader>,
}

/// Where a binary message carries its application identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationHeader {
    /// Bit offset of the 10-bit designated area code
    pub dac_at: usize,
    /// Bit offset of the 6-bit function identifier
    pub fid_at: usize,
}

/// Fields every message starts with
pub const HEADER: &[Item] = &[
    F(code(MessageType, 6, CodeTable::MessageType)),
    F(uint(RepeatIndicator, 2)),
    F(uint(Mmsi, 30)),
];

/// Longitude in 1/10000 minute
pub(crate) const fn lon_28(field: Field) -> FieldSpec {
    int(field, 28)
        .na(itu::LONGITUDE_NOT_AVAILABLE)
        .scaled(600_000.0)
        .within(-180.0, 180.0)
}

/// Latitude in 1/10000 minute
pub(crate) const fn lat_27(field: Field) -> FieldSpec {
    int(field, 27)
        .na(itu::LATITUDE_NOT_AVAILABLE)
        .scaled(600_000.0)
        .within(-90.0, 90.0)
}

/// Longitude in 1/1000 minute
pub(crate) const fn lon_25(field: Field) -> FieldSpec {
    int(field, 25)
        .na(itu::LONGITUDE_NOT_AVAILABLE / 10)
        .scaled(60_000.0)
        .within(-180.0, 180.0)
}

/// Latitude in 1/1000 minute
pub(crate) const fn lat_24(field: Field) -> FieldSpec {
    int(field, 24)
        .na(itu::LATITUDE_NOT_AVAILABLE / 10)
        .scaled(60_000.0)
        .within(-90.0, 90.0)
}

/// Longitude in 1/10 minute
pub(crate) const fn lon_18(field: Field) -> FieldSpec {
    int(field, 18)
        .na(itu::LONGITUDE_NOT_AVAILABLE / 1000)
        .scaled(600.0)
        .within(-180.0, 180.0)
}

/// Latitude in 1/10 minute
pub(crate) const fn lat_17(field: Field) -> FieldSpec {
    int(field, 17)
        .na(itu::LATITUDE_NOT_AVAILABLE / 1000)
        .scaled(600.0)
        .within(-90.0, 90.0)
}

pub(crate) const fn month(field: Field) -> FieldSpec {
    uint(field, 4).na(0)
}

pub(crate) const fn day(field: Field) -> FieldSpec {
    uint(field, 5).na(0)
}

pub(crate) const fn hour(field: Field) -> FieldSpec {
    uint(field, 5).na(24)
}

pub(crate) const fn minute(field: Field) -> FieldSpec {
    uint(field, 6).na(60)
}

const SPEED: FieldSpec = uint(SpeedOverGround, 10).na(1023).scaled(10.0);
const COURSE: FieldSpec = uint(CourseOverGround, 12)
    .na(3600)
    .scaled(10.0)
    .within(0.0, 360.0);
const HEADING: FieldSpec = uint(TrueHeading, 9).na(511);
const SECOND: FieldSpec = uint(Second, 6).na_from(60);

const POSITION_REPORT: &[Item] = &[
    F(code(NavigationStatus, 4, CodeTable::NavigationStatus)),
    F(int(RateOfTurn, 8).na(-128).rate_of_turn()),
    F(SPEED),
    F(flag(PositionAccuracy)),
    F(lon_28(Longitude)),
    F(lat_27(Latitude)),
    F(COURSE),
    F(HEADING),
    F(SECOND),
    F(code(ManeuverIndicator, 2, CodeTable::ManeuverIndicator)),
    Spare(3),
    F(flag(Raim)),
    F(uint(RadioStatus, 19)),
];

const BASE_STATION_REPORT: &[Item] = &[
    F(uint(Year, 14).na(0)),
    F(month(Month)),
    F(day(Day)),
    F(hour(Hour)),
    F(minute(Minute)),
    F(SECOND),
    F(flag(PositionAccuracy)),
    F(lon_28(Longitude)),
    F(lat_27(Latitude)),
    F(code(Epfd, 4, CodeTable::Epfd)),
    Spare(10),
    F(flag(Raim)),
    F(uint(RadioStatus, 19)),
];

const STATIC_AND_VOYAGE: &[Item] = &[
    F(uint(AisVersion, 2)),
    F(uint(ImoNumber, 30).na(0)),
    F(text(CallSign, 42)),
    F(text(ShipName, 120)),
    F(code(ShipType, 8, CodeTable::ShipType)),
    F(uint(ToBow, 9)),
    F(uint(ToStern, 9)),
    F(uint(ToPort, 6)),
    F(uint(ToStarboard, 6)),
    F(code(Epfd, 4, CodeTable::Epfd)),
    F(month(EtaMonth)),
    F(day(EtaDay)),
    F(hour(EtaHour)),
    F(minute(EtaMinute)),
    F(uint(Draught, 8).na(0).scaled(10.0)),
    F(text(Destination, 120)),
    F(flag(Dte).inverted()),
    Spare(1),
];

const BINARY_ADDRESSED: &[Item] = &[
    F(uint(SequenceNumber, 2)),
    F(uint(DestinationMmsi, 30)),
    F(flag(Retransmit)),
    Spare(1),
    F(uint(Dac, 10)),
    F(uint(Fid, 6)),
];

const ACKNOWLEDGE: &[Item] = &[
    Spare(2),
    F(uint(Mmsi1, 30)),
    F(uint(MmsiSequence1, 2)),
    Optional {
        items: &[F(uint(Mmsi2, 30)), F(uint(MmsiSequence2, 2))],
    },
    Optional {
        items: &[F(uint(Mmsi3, 30)), F(uint(MmsiSequence3, 2))],
    },
    Optional {
        items: &[F(uint(Mmsi4, 30)), F(uint(MmsiSequence4, 2))],
    },
];

const BINARY_BROADCAST: &[Item] = &[Spare(2), F(uint(Dac, 10)), F(uint(Fid, 6))];

const SAR_AIRCRAFT: &[Item] = &[
    F(uint(Altitude, 12).na(4095)),
    F(uint(SpeedOverGround, 10).na(1023)),
    F(flag(PositionAccuracy)),
    F(lon_28(Longitude)),
    F(lat_27(Latitude)),
    F(COURSE),
    F(SECOND),
    Spare(8),
    F(flag(Dte).inverted()),
    Spare(3),
    F(flag(Assigned)),
    F(flag(Raim)),
    F(uint(RadioStatus, 20)),
];

const UTC_INQUIRY: &[Item] = &[Spare(2), F(uint(DestinationMmsi, 30)), Spare(2)];

const SAFETY_ADDRESSED: &[Item] = &[
    F(uint(SequenceNumber, 2)),
    F(uint(DestinationMmsi, 30)),
    F(flag(Retransmit)),
    Spare(1),
    F(text_var(SafetyText, 0, 936)),
];

const SAFETY_BROADCAST: &[Item] = &[Spare(2), F(text_var(SafetyText, 0, 968))];

const INTERROGATION: &[Item] = &[
    Spare(2),
    F(uint(InterrogatedMmsi1, 30)),
    F(code(RequestedType1a, 6, CodeTable::MessageType)),
    F(uint(SlotOffset1a, 12)),
    Optional {
        items: &[
            Spare(2),
            F(code(RequestedType1b, 6, CodeTable::MessageType)),
            F(uint(SlotOffset1b, 12)),
        ],
    },
    Optional {
        items: &[
            Spare(2),
            F(uint(InterrogatedMmsi2, 30)),
            F(code(RequestedType2a, 6, CodeTable::MessageType)),
            F(uint(SlotOffset2a, 12)),
        ],
    },
    Spare(2),
];

const ASSIGNMENT_COMMAND: &[Item] = &[
    Spare(2),
    F(uint(AssignedMmsi1, 30)),
    F(uint(AssignmentOffset1, 12)),
    F(uint(AssignmentIncrement1, 10)),
    Optional {
        items: &[
            F(uint(AssignedMmsi2, 30)),
            F(uint(AssignmentOffset2, 12)),
            F(uint(AssignmentIncrement2, 10)),
        ],
    },
    Spare(4),
];

const DGNSS_BROADCAST: &[Item] = &[
    Spare(2),
    F(lon_18(Longitude)),
    F(lat_17(Latitude)),
    Spare(5),
    F(binary_var(DgnssData, 0, 736)),
];

const CLASS_B_POSITION: &[Item] = &[
    Spare(8),
    F(SPEED),
    F(flag(PositionAccuracy)),
    F(lon_28(Longitude)),
    F(lat_27(Latitude)),
    F(COURSE),
    F(HEADING),
    F(SECOND),
    Spare(2),
    F(flag(CarrierSenseUnit)),
    F(flag(HasDisplay)),
    F(flag(HasDsc)),
    F(flag(WholeBand)),
    F(flag(AcceptsMessage22)),
    F(flag(Assigned)),
    F(flag(Raim)),
    F(uint(RadioStatus, 20)),
];

const CLASS_B_EXTENDED: &[Item] = &[
    Spare(8),
    F(SPEED),
    F(flag(PositionAccuracy)),
    F(lon_28(Longitude)),
    F(lat_27(Latitude)),
    F(COURSE),
    F(HEADING),
    F(SECOND),
    Spare(4),
    F(text(ShipName, 120)),
    F(code(ShipType, 8, CodeTable::ShipType)),
    F(uint(ToBow, 9)),
    F(uint(ToStern, 9)),
    F(uint(ToPort, 6)),
    F(uint(ToStarboard, 6)),
    F(code(Epfd, 4, CodeTable::Epfd)),
    F(flag(Raim)),
    F(flag(Dte).inverted()),
    F(flag(Assigned)),
    Spare(4),
];

const DATA_LINK_MANAGEMENT: &[Item] = &[
    Spare(2),
    F(uint(ReservationOffset1, 12)),
    F(uint(ReservationSlots1, 4)),
    F(uint(ReservationTimeout1, 3)),
    F(uint(ReservationIncrement1, 11)),
    Optional {
        items: &[
            F(uint(ReservationOffset2, 12)),
            F(uint(ReservationSlots2, 4)),
            F(uint(ReservationTimeout2, 3)),
            F(uint(ReservationIncrement2, 11)),
        ],
    },
    Optional {
        items: &[
            F(uint(ReservationOffset3, 12)),
            F(uint(ReservationSlots3, 4)),
            F(uint(ReservationTimeout3, 3)),
            F(uint(ReservationIncrement3, 11)),
        ],
    },
    Optional {
        items: &[
            F(uint(ReservationOffset4, 12)),
            F(uint(ReservationSlots4, 4)),
            F(uint(ReservationTimeout4, 3)),
            F(uint(ReservationIncrement4, 11)),
        ],
    },
];

const AID_TO_NAVIGATION: &[Item] = &[
    F(code(AidType, 5, CodeTable::NavaidType)),
    F(text(Name, 120)),
    F(flag(PositionAccuracy)),
    F(lon_28(Longitude)),
    F(lat_27(Latitude)),
    F(uint(ToBow, 9)),
    F(uint(ToStern, 9)),
    F(uint(ToPort, 6)),
    F(uint(ToStarboard, 6)),
    F(code(Epfd, 4, CodeTable::Epfd)),
    F(SECOND),
    F(flag(OffPosition)),
    Spare(8),
    F(flag(Raim)),
    F(flag(VirtualAid)),
    F(flag(Assigned)),
    Spare(1),
    F(text_var(NameExtension, 0, 88)),
];

const CHANNEL_AREA: &[Item] = &[
    F(lon_18(NeLongitude)),
    F(lat_17(NeLatitude)),
    F(lon_18(SwLongitude)),
    F(lat_17(SwLatitude)),
];

const CHANNEL_ADDRESSED: &[Item] = &[
    F(uint(DestinationMmsi1, 30)),
    Spare(5),
    F(uint(DestinationMmsi2, 30)),
    Spare(5),
];

// The addressed flag sits after the 70-bit area/address block, so the
// block's shape is chosen by peeking ahead.
const CHANNEL_MANAGEMENT: &[Item] = &[
    Spare(2),
    F(uint(ChannelA, 12)),
    F(uint(ChannelB, 12)),
    F(code(TxRxMode, 4, CodeTable::TxRxMode)),
    F(flag(LowPower)),
    Switch {
        selector: Selector::Peek {
            at: Position::Absolute(139),
            width: 1,
        },
        cases: &[(0, CHANNEL_AREA), (1, CHANNEL_ADDRESSED)],
        default: CHANNEL_AREA,
    },
    F(flag(Addressed)),
    F(flag(BandA)),
    F(flag(BandB)),
    F(uint(ZoneSize, 3)),
    Spare(23),
];

const GROUP_ASSIGNMENT: &[Item] = &[
    Spare(2),
    F(lon_18(NeLongitude)),
    F(lat_17(NeLatitude)),
    F(lon_18(SwLongitude)),
    F(lat_17(SwLatitude)),
    F(code(StationType, 4, CodeTable::StationType)),
    F(code(ShipType, 8, CodeTable::ShipType)),
    Spare(22),
    F(code(TxRxMode, 2, CodeTable::TxRxMode)),
    F(code(ReportInterval, 4, CodeTable::StationInterval)),
    F(uint(QuietTime, 4)),
    Spare(6),
];

const STATIC_DATA_REPORT: &[Item] = &[Switch {
    selector: Selector::Field(uint(PartNumber, 2)),
    cases: &[
        (0, &[F(text(ShipName, 120)), Spare(8)]),
        (
            1,
            &[
                F(code(ShipType, 8, CodeTable::ShipType)),
                F(text(VendorId, 42)),
                F(text(CallSign, 42)),
                F(uint(ToBow, 9)),
                F(uint(ToStern, 9)),
                F(uint(ToPort, 6)),
                F(uint(ToStarboard, 6)),
                Spare(6),
            ],
        ),
    ],
    default: &[],
}];

const LONG_RANGE_BROADCAST: &[Item] = &[
    F(flag(PositionAccuracy)),
    F(flag(Raim)),
    F(code(NavigationStatus, 4, CodeTable::NavigationStatus)),
    F(lon_18(Longitude)),
    F(lat_17(Latitude)),
    F(uint(SpeedOverGround, 6).na(63)),
    F(uint(CourseOverGround, 9).na(511).within(0.0, 359.0)),
    F(flag(GnssPosition).inverted()),
    Spare(1),
];

const fn plain(items: &'static [Item]) -> Option<Layout> {
    Some(Layout {
        items,
        application: None,
    })
}

/// Layouts indexed by message type; `None` marks an unsupported type
static LAYOUTS: [Option<Layout>; 28] = [
    None,
    plain(POSITION_REPORT),
    plain(POSITION_REPORT),
    plain(POSITION_REPORT),
    plain(BASE_STATION_REPORT),
    plain(STATIC_AND_VOYAGE),
    Some(Layout {
        items: BINARY_ADDRESSED,
        application: Some(ApplicationHeader {
            dac_at: 72,
            fid_at: 82,
        }),
    }),
    plain(ACKNOWLEDGE),
    Some(Layout {
        items: BINARY_BROADCAST,
        application: Some(ApplicationHeader {
            dac_at: 40,
            fid_at: 50,
        }),
    }),
    plain(SAR_AIRCRAFT),
    plain(UTC_INQUIRY),
    plain(BASE_STATION_REPORT),
    plain(SAFETY_ADDRESSED),
    plain(ACKNOWLEDGE),
    plain(SAFETY_BROADCAST),
    plain(INTERROGATION),
    plain(ASSIGNMENT_COMMAND),
    plain(DGNSS_BROADCAST),
    plain(CLASS_B_POSITION),
    plain(CLASS_B_EXTENDED),
    plain(DATA_LINK_MANAGEMENT),
    plain(AID_TO_NAVIGATION),
    plain(CHANNEL_MANAGEMENT),
    plain(GROUP_ASSIGNMENT),
    plain(STATIC_DATA_REPORT),
    None,
    None,
    plain(LONG_RANGE_BROADCAST),
];

/// Layout for a raw message type
pub fn layout(message_type: u8) -> Option<&'static Layout> {
    LAYOUTS.get(message_type as usize)?.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::min_bits;

    fn bits_of(message_type: u8) -> usize {
        min_bits(HEADER) + min_bits(layout(message_type).unwrap().items)
    }

    #[test]
    fn test_fixed_lengths() {
        assert_eq!(bits_of(1), 168);
        assert_eq!(bits_of(4), 168);
        assert_eq!(bits_of(5), 424);
        assert_eq!(bits_of(9), 168);
        assert_eq!(bits_of(10), 72);
        assert_eq!(bits_of(18), 168);
        assert_eq!(bits_of(19), 312);
        assert_eq!(bits_of(21), 272);
        assert_eq!(bits_of(22), 168);
        assert_eq!(bits_of(23), 160);
        assert_eq!(bits_of(27), 96);
    }

    #[test]
    fn test_application_headers_end_at_fid() {
        let six = layout(6).unwrap();
        assert_eq!(min_bits(HEADER) + min_bits(six.items), 88);
        assert_eq!(six.application.unwrap().fid_at + 6, 88);

        let eight = layout(8).unwrap();
        assert_eq!(min_bits(HEADER) + min_bits(eight.items), 56);
        assert_eq!(eight.application.unwrap().fid_at + 6, 56);
    }

    #[test]
    fn test_unsupported_types() {
        assert!(layout(0).is_none());
        assert!(layout(25).is_none());
        assert!(layout(26).is_none());
        assert!(layout(28).is_none());
        assert!(layout(13).is_some());
    }

    #[test]
    fn test_sentinel_scaling() {
        assert_eq!(lon_25(Longitude).sentinel, crate::field::Sentinel::Equals(10_860_000));
        assert_eq!(lat_17(Latitude).sentinel, crate::field::Sentinel::Equals(54_600));
    }
}
