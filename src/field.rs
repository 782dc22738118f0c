//! Field descriptions and layout building blocks
//!
//! A message layout is a static slice of [`Item`]s. The decode engine walks
//! it against a bit cursor; nothing here touches bits directly except the
//! inverse transforms used to build payloads.

use crate::bits::{BitString, CommState};
use crate::codes::{Code, CodeTable};
use crate::error::{ParseError, Result};
use crate::text::FieldRef;

// `Field` and its `name()`/`ALL` are generated from the list at the bottom
// of this file.
macro_rules! fields {
    ($($variant:ident => $name:literal,)*) => {
        /// Semantic name of a decoded field
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Field {
            $(
                #[allow(missing_docs)]
                $variant,
            )*
        }

        impl Field {
            /// Every field name, in declaration order
            pub const ALL: &'static [Field] = &[$(Field::$variant,)*];

            /// Stable snake_case name
            pub fn name(&self) -> &'static str {
                match self {
                    $(Field::$variant => $name,)*
                }
            }
        }
    };
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Integer without unit conversion
    Int(i64),
    /// Scaled or converted quantity
    Float(f64),
    /// Single-bit flag
    Flag(bool),
    /// Enumerated value
    Code(Code),
    /// Six-bit text left in the message buffer
    Text(FieldRef<'a>),
    /// Opaque application data left in the message buffer
    Binary(FieldRef<'a>),
}

impl Value<'_> {
    /// Integer value, if this is an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value, converting integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Flag value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Flag(v) => Some(*v),
            _ => None,
        }
    }

    /// Enumerated value
    pub fn as_code(&self) -> Option<Code> {
        match self {
            Value::Code(c) => Some(*c),
            _ => None,
        }
    }

    /// Radio status as a communication state
    pub fn comm_state(&self) -> Option<CommState> {
        match self {
            Value::Int(v) => u32::try_from(*v).ok().map(CommState::new),
            _ => None,
        }
    }

    /// Text contents, materialized
    pub fn text(&self) -> Option<String> {
        match self {
            Value::Text(r) => Some(r.to_text()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Flag(v) => write!(f, "{}", v),
            Value::Code(c) => write!(f, "{}", c),
            Value::Text(r) => write!(f, "{}", r),
            Value::Binary(r) => {
                for byte in r.to_bytes() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

/// Field width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Exactly this many bits
    Fixed(u16),
    /// Whatever remains, at least `min` and at most `max` bits
    Variable {
        /// Fewest bits accepted
        min: u16,
        /// Most bits consumed
        max: u16,
    },
}

impl Width {
    /// Fewest bits the field needs
    pub const fn min(&self) -> usize {
        match self {
            Width::Fixed(n) => *n as usize,
            Width::Variable { min, .. } => *min as usize,
        }
    }
}

/// How raw bits become a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Unsigned integer
    Unsigned,
    /// Two's complement integer at the field width
    Signed,
    /// Six-bit text
    Text,
    /// Opaque bits
    Binary,
    /// Index into a code table
    Enum(CodeTable),
}

/// Raw values meaning "not available"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// Every value is real
    None,
    /// One reserved value
    Equals(i64),
    /// Several reserved values
    AnyOf(&'static [i64]),
    /// This value and everything above it
    AtLeast(i64),
}

impl Sentinel {
    /// Raw value is reserved
    pub fn matches(&self, raw: i64) -> bool {
        match self {
            Sentinel::None => false,
            Sentinel::Equals(v) => raw == *v,
            Sentinel::AnyOf(vs) => vs.contains(&raw),
            Sentinel::AtLeast(v) => raw >= *v,
        }
    }
}

/// Unit conversion applied after the sentinel check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Deliver the raw integer
    None,
    /// `raw / divisor + offset`
    Linear {
        /// Resolution denominator
        divisor: f64,
        /// Added after scaling
        offset: f64,
    },
    /// `raw + n`, kept integral
    Offset(i64),
    /// `raw * n`, kept integral
    Step(i64),
    /// `raw == 1`
    Flag,
    /// `raw != 1`
    InvertedFlag,
    /// Rate of turn indicator to degrees per minute
    RateOfTurn,
}

impl Transform {
    /// Convert a raw value
    pub fn apply(&self, raw: i64) -> Value<'static> {
        match *self {
            Transform::None => Value::Int(raw),
            Transform::Linear { divisor, offset } => Value::Float(raw as f64 / divisor + offset),
            Transform::Offset(n) => Value::Int(raw + n),
            Transform::Step(n) => Value::Int(raw * n),
            Transform::Flag => Value::Flag(raw == 1),
            Transform::InvertedFlag => Value::Flag(raw != 1),
            Transform::RateOfTurn => Value::Float(rate_of_turn(raw)),
        }
    }

    /// Raw value for a converted quantity
    pub fn invert(&self, value: f64) -> i64 {
        match *self {
            Transform::None => value.round() as i64,
            Transform::Linear { divisor, offset } => ((value - offset) * divisor).round() as i64,
            Transform::Offset(n) => value.round() as i64 - n,
            Transform::Step(n) => (value / n as f64).round() as i64,
            Transform::Flag => (value != 0.0) as i64,
            Transform::InvertedFlag => (value == 0.0) as i64,
            Transform::RateOfTurn => {
                if value == 10.0 {
                    127
                } else if value == -10.0 {
                    -127
                } else {
                    let raw = (value.signum() * 4.733 * value.abs().sqrt()).round() as i64;
                    raw.clamp(-126, 126)
                }
            }
        }
    }
}

fn rate_of_turn(raw: i64) -> f64 {
    match raw {
        127 => 10.0,
        -127 => -10.0,
        _ => {
            let r = raw as f64 / 4.733;
            r * r * (raw.signum() as f64)
        }
    }
}

/// Static description of one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Semantic name delivered to the observer
    pub field: Field,
    /// Bits consumed
    pub width: Width,
    /// Raw interpretation
    pub encoding: Encoding,
    /// Reserved "not available" values
    pub sentinel: Sentinel,
    /// Unit conversion
    pub transform: Transform,
    /// Physically meaningful range of the converted value
    pub range: Option<(f64, f64)>,
}

impl FieldSpec {
    /// Create a field with no sentinel, transform or range
    pub const fn new(field: Field, width: Width, encoding: Encoding) -> Self {
        FieldSpec {
            field,
            width,
            encoding,
            sentinel: Sentinel::None,
            transform: Transform::None,
            range: None,
        }
    }

    /// Reserve one raw value as "not available"
    pub const fn na(self, raw: i64) -> Self {
        FieldSpec {
            sentinel: Sentinel::Equals(raw),
            ..self
        }
    }

    /// Reserve several raw values
    pub const fn na_any(self, raws: &'static [i64]) -> Self {
        FieldSpec {
            sentinel: Sentinel::AnyOf(raws),
            ..self
        }
    }

    /// Reserve `raw` and everything above it
    pub const fn na_from(self, raw: i64) -> Self {
        FieldSpec {
            sentinel: Sentinel::AtLeast(raw),
            ..self
        }
    }

    /// Deliver `raw / divisor`
    pub const fn scaled(self, divisor: f64) -> Self {
        self.linear(divisor, 0.0)
    }

    /// Deliver `raw / divisor + offset`
    pub const fn linear(self, divisor: f64, offset: f64) -> Self {
        FieldSpec {
            transform: Transform::Linear { divisor, offset },
            ..self
        }
    }

    /// Deliver `raw + n`
    pub const fn plus(self, n: i64) -> Self {
        FieldSpec {
            transform: Transform::Offset(n),
            ..self
        }
    }

    /// Deliver `raw * n` for values counted in steps of `n`
    pub const fn step(self, n: i64) -> Self {
        FieldSpec {
            transform: Transform::Step(n),
            ..self
        }
    }

    /// Deliver a flag that is set when the raw bit is clear
    pub const fn inverted(self) -> Self {
        FieldSpec {
            transform: Transform::InvertedFlag,
            ..self
        }
    }

    /// Deliver a rate of turn
    pub const fn rate_of_turn(self) -> Self {
        FieldSpec {
            transform: Transform::RateOfTurn,
            ..self
        }
    }

    /// Converted value should fall inside `lo..=hi`
    pub const fn within(self, lo: f64, hi: f64) -> Self {
        FieldSpec {
            range: Some((lo, hi)),
            ..self
        }
    }

    /// Convert a raw integer read for this field
    pub fn convert(&self, raw: i64) -> Value<'static> {
        match self.encoding {
            Encoding::Enum(table) => Value::Code(Code::new(table, raw as u16)),
            _ => self.transform.apply(raw),
        }
    }

    /// Converted value lies outside the field's physical range
    pub fn out_of_range(&self, value: &Value<'_>) -> bool {
        match (self.range, value.as_f64()) {
            (Some((lo, hi)), Some(v)) => v < lo || v > hi,
            _ => false,
        }
    }

    /// Append the raw bits for a converted quantity
    ///
    /// Fails for text, binary and variable-width fields, and for fields
    /// wider than 64 bits.
    pub fn encode(&self, value: f64, bits: &mut BitString) -> Result<()> {
        let width = match (self.width, self.encoding) {
            (_, Encoding::Text | Encoding::Binary) | (Width::Variable { .. }, _) => {
                return Err(ParseError::encoding(format!(
                    "{} does not hold a number",
                    self.field
                )))
            }
            (Width::Fixed(n), _) => u8::try_from(n)
                .ok()
                .filter(|n| *n <= 64)
                .ok_or_else(|| ParseError::encoding(format!("{} is {} bits wide", self.field, n)))?,
        };
        let raw = self.transform.invert(value);
        match self.encoding {
            Encoding::Signed => bits.push_signed(raw, width),
            _ => bits.push_bits(raw as u64, width),
        }
        Ok(())
    }
}

/// Unsigned integer field
pub const fn uint(field: Field, bits: u16) -> FieldSpec {
    FieldSpec::new(field, Width::Fixed(bits), Encoding::Unsigned)
}

/// Signed integer field
pub const fn int(field: Field, bits: u16) -> FieldSpec {
    FieldSpec::new(field, Width::Fixed(bits), Encoding::Signed)
}

/// One-bit flag set when the bit is 1
pub const fn flag(field: Field) -> FieldSpec {
    FieldSpec {
        transform: Transform::Flag,
        ..uint(field, 1)
    }
}

/// Enumerated field
pub const fn code(field: Field, bits: u16, table: CodeTable) -> FieldSpec {
    FieldSpec::new(field, Width::Fixed(bits), Encoding::Enum(table))
}

/// Fixed-width text field
pub const fn text(field: Field, bits: u16) -> FieldSpec {
    FieldSpec::new(field, Width::Fixed(bits), Encoding::Text)
}

/// Trailing text field sized by what remains
pub const fn text_var(field: Field, min: u16, max: u16) -> FieldSpec {
    FieldSpec::new(field, Width::Variable { min, max }, Encoding::Text)
}

/// Fixed-width opaque field
pub const fn binary(field: Field, bits: u16) -> FieldSpec {
    FieldSpec::new(field, Width::Fixed(bits), Encoding::Binary)
}

/// Trailing opaque field sized by what remains
pub const fn binary_var(field: Field, min: u16, max: u16) -> FieldSpec {
    FieldSpec::new(field, Width::Variable { min, max }, Encoding::Binary)
}

/// Where a switch finds its selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selector {
    /// Decode and deliver this field, then branch on its raw value
    Field(FieldSpec),
    /// Branch on bits that are not consumed
    Peek {
        /// Where to look
        at: Position,
        /// How many bits
        width: u8,
    },
}

/// Bit position for a peek
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// From the start of the message
    Absolute(usize),
    /// From the cursor
    Relative(isize),
}

/// One element of a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item {
    /// Decode and deliver a field
    Field(FieldSpec),
    /// Skip reserved bits; may run short at the end of a message
    Spare(u16),
    /// Decode only when enough bits remain for the whole group
    Optional {
        /// The group
        items: &'static [Item],
    },
    /// Decode while enough bits remain for another pass
    Repeat {
        /// One pass
        items: &'static [Item],
    },
    /// Choose a sub-layout by selector value
    Switch {
        /// Where the selector comes from
        selector: Selector,
        /// Sub-layouts keyed by selector value
        cases: &'static [(u64, &'static [Item])],
        /// Sub-layout for any other value
        default: &'static [Item],
    },
}

impl Item {
    /// Fewest bits this item can consume
    pub fn min_bits(&self) -> usize {
        match self {
            Item::Field(spec) => spec.width.min(),
            Item::Spare(n) => *n as usize,
            Item::Optional { .. } | Item::Repeat { .. } => 0,
            Item::Switch {
                selector,
                cases,
                default,
            } => {
                let own = match selector {
                    Selector::Field(spec) => spec.width.min(),
                    Selector::Peek { .. } => 0,
                };
                let branch = cases
                    .iter()
                    .map(|(_, items)| min_bits(items))
                    .chain(std::iter::once(min_bits(default)))
                    .min()
                    .unwrap_or(0);
                own + branch
            }
        }
    }
}

/// Fewest bits a layout can consume
pub fn min_bits(items: &[Item]) -> usize {
    items.iter().map(Item::min_bits).sum()
}

fields! {
    MessageType => "message_type",
    RepeatIndicator => "repeat_indicator",
    Mmsi => "mmsi",
    SpeedOverGround => "speed_over_ground",
    CourseOverGround => "course_over_ground",
    TrueHeading => "true_heading",
    Second => "second",
    NavigationStatus => "navigation_status",
    RateOfTurn => "rate_of_turn",
    PositionAccuracy => "position_accuracy",
    Longitude => "longitude",
    Latitude => "latitude",
    ManeuverIndicator => "maneuver_indicator",
    Raim => "raim",
    RadioStatus => "radio_status",
    Year => "year",
    Month => "month",
    Day => "day",
    Hour => "hour",
    Minute => "minute",
    Epfd => "epfd",
    AisVersion => "ais_version",
    ImoNumber => "imo_number",
    CallSign => "call_sign",
    ShipName => "ship_name",
    ShipType => "ship_type",
    ToBow => "to_bow",
    ToStern => "to_stern",
    ToPort => "to_port",
    ToStarboard => "to_starboard",
    EtaMonth => "eta_month",
    EtaDay => "eta_day",
    EtaHour => "eta_hour",
    EtaMinute => "eta_minute",
    Draught => "draught",
    Destination => "destination",
    Dte => "dte",
    SequenceNumber => "sequence_number",
    DestinationMmsi => "destination_mmsi",
    Retransmit => "retransmit",
    Dac => "dac",
    Fid => "fid",
    Mmsi1 => "mmsi1",
    MmsiSequence1 => "mmsi_sequence1",
    Mmsi2 => "mmsi2",
    MmsiSequence2 => "mmsi_sequence2",
    Mmsi3 => "mmsi3",
    MmsiSequence3 => "mmsi_sequence3",
    Mmsi4 => "mmsi4",
    MmsiSequence4 => "mmsi_sequence4",
    Altitude => "altitude",
    Assigned => "assigned",
    SafetyText => "safety_text",
    InterrogatedMmsi1 => "interrogated_mmsi1",
    RequestedType1a => "requested_type1a",
    SlotOffset1a => "slot_offset1a",
    RequestedType1b => "requested_type1b",
    SlotOffset1b => "slot_offset1b",
    InterrogatedMmsi2 => "interrogated_mmsi2",
    RequestedType2a => "requested_type2a",
    SlotOffset2a => "slot_offset2a",
    AssignedMmsi1 => "assigned_mmsi1",
    AssignmentOffset1 => "assignment_offset1",
    AssignmentIncrement1 => "assignment_increment1",
    AssignedMmsi2 => "assigned_mmsi2",
    AssignmentOffset2 => "assignment_offset2",
    AssignmentIncrement2 => "assignment_increment2",
    DgnssData => "dgnss_data",
    CarrierSenseUnit => "carrier_sense_unit",
    HasDisplay => "has_display",
    HasDsc => "has_dsc",
    WholeBand => "whole_band",
    AcceptsMessage22 => "accepts_message22",
    ReservationOffset1 => "reservation_offset1",
    ReservationSlots1 => "reservation_slots1",
    ReservationTimeout1 => "reservation_timeout1",
    ReservationIncrement1 => "reservation_increment1",
    ReservationOffset2 => "reservation_offset2",
    ReservationSlots2 => "reservation_slots2",
    ReservationTimeout2 => "reservation_timeout2",
    ReservationIncrement2 => "reservation_increment2",
    ReservationOffset3 => "reservation_offset3",
    ReservationSlots3 => "reservation_slots3",
    ReservationTimeout3 => "reservation_timeout3",
    ReservationIncrement3 => "reservation_increment3",
    ReservationOffset4 => "reservation_offset4",
    ReservationSlots4 => "reservation_slots4",
    ReservationTimeout4 => "reservation_timeout4",
    ReservationIncrement4 => "reservation_increment4",
    AidType => "aid_type",
    Name => "name",
    OffPosition => "off_position",
    VirtualAid => "virtual_aid",
    NameExtension => "name_extension",
    NeLongitude => "ne_longitude",
    NeLatitude => "ne_latitude",
    SwLongitude => "sw_longitude",
    SwLatitude => "sw_latitude",
    DestinationMmsi1 => "destination_mmsi1",
    DestinationMmsi2 => "destination_mmsi2",
    ChannelA => "channel_a",
    ChannelB => "channel_b",
    TxRxMode => "tx_rx_mode",
    LowPower => "low_power",
    Addressed => "addressed",
    BandA => "band_a",
    BandB => "band_b",
    ZoneSize => "zone_size",
    StationType => "station_type",
    ReportInterval => "report_interval",
    QuietTime => "quiet_time",
    PartNumber => "part_number",
    VendorId => "vendor_id",
    GnssPosition => "gnss_position",
    LinkageId => "linkage_id",
    Duration => "duration",
    WindSpeed => "wind_speed",
    WindGust => "wind_gust",
    WindDirection => "wind_direction",
    WindGustDirection => "wind_gust_direction",
    AirTemperature => "air_temperature",
    RelativeHumidity => "relative_humidity",
    DewPoint => "dew_point",
    AirPressure => "air_pressure",
    Visibility => "visibility",
    WaveHeight => "wave_height",
    WavePeriod => "wave_period",
    WaveDirection => "wave_direction",
    SwellHeight => "swell_height",
    SwellPeriod => "swell_period",
    SwellDirection => "swell_direction",
    WaterTemperature => "water_temperature",
    Salinity => "salinity",
    SensorDataType => "sensor_data_type",
    LastPort => "last_port",
    LastPortMonth => "last_port_month",
    LastPortDay => "last_port_day",
    LastPortHour => "last_port_hour",
    LastPortMinute => "last_port_minute",
    NextPort => "next_port",
    NextPortMonth => "next_port_month",
    NextPortDay => "next_port_day",
    NextPortHour => "next_port_hour",
    NextPortMinute => "next_port_minute",
    DangerousCargo => "dangerous_cargo",
    ImdCategory => "imd_category",
    UnNumber => "un_number",
    CargoAmount => "cargo_amount",
    CargoUnit => "cargo_unit",
    FromHour => "from_hour",
    FromMinute => "from_minute",
    ToHour => "to_hour",
    ToMinute => "to_minute",
    CurrentDirection => "current_direction",
    CurrentSpeed => "current_speed",
    Persons => "persons",
    PortName => "port_name",
    BerthLength => "berth_length",
    BerthDepth => "berth_depth",
    MooringPosition => "mooring_position",
    ServicesAvailable => "services_available",
    AgentService => "agent_service",
    FuelService => "fuel_service",
    ChandlerService => "chandler_service",
    StevedoreService => "stevedore_service",
    ElectricalService => "electrical_service",
    WaterService => "water_service",
    CustomsService => "customs_service",
    CartageService => "cartage_service",
    CraneService => "crane_service",
    LiftService => "lift_service",
    MedicalService => "medical_service",
    NavigationRepairService => "navigation_repair_service",
    ProvisionsService => "provisions_service",
    ShipRepairService => "ship_repair_service",
    SurveyorService => "surveyor_service",
    SteamService => "steam_service",
    TugsService => "tugs_service",
    SolidWasteService => "solid_waste_service",
    LiquidWasteService => "liquid_waste_service",
    HazardousWasteService => "hazardous_waste_service",
    BallastService => "ballast_service",
    AdditionalService => "additional_service",
    RegionalService1 => "regional_service1",
    RegionalService2 => "regional_service2",
    FutureService1 => "future_service1",
    FutureService2 => "future_service2",
    BerthName => "berth_name",
    ScaleFactor => "scale_factor",
    Precision => "precision",
    Radius => "radius",
    EastDimension => "east_dimension",
    NorthDimension => "north_dimension",
    Orientation => "orientation",
    LeftBoundary => "left_boundary",
    RightBoundary => "right_boundary",
    PointBearing => "point_bearing",
    PointDistance => "point_distance",
    AreaText => "area_text",
    SubareaShape => "subarea_shape",
    NoticeDescription => "notice_description",
    SenderClass => "sender_class",
    RouteType => "route_type",
    WaypointCount => "waypoint_count",
    Description => "description",
    PressureTendency => "pressure_tendency",
    WaterLevel => "water_level",
    WaterLevelTrend => "water_level_trend",
    SurfaceCurrentSpeed => "surface_current_speed",
    SurfaceCurrentDirection => "surface_current_direction",
    CurrentSpeed2 => "current_speed2",
    CurrentDirection2 => "current_direction2",
    CurrentDepth2 => "current_depth2",
    CurrentSpeed3 => "current_speed3",
    CurrentDirection3 => "current_direction3",
    CurrentDepth3 => "current_depth3",
    SeaState => "sea_state",
    Precipitation => "precipitation",
    Ice => "ice",
    Reason => "reason",
    ClosedFrom => "closed_from",
    ClosedTo => "closed_to",
    ExtensionRadius => "extension_radius",
    ExtensionUnit => "extension_unit",
    FromDay => "from_day",
    FromMonth => "from_month",
    ToDay => "to_day",
    ToMonth => "to_month",
    AirDraught => "air_draught",
    TargetIdType => "target_id_type",
    TargetId => "target_id",
    StationName => "station_name",
    SignalStatus => "signal_status",
    Signal => "signal",
    NextSignal => "next_signal",
    Location => "location",
    PresentWeather => "present_weather",
    VisibilityLimit => "visibility_limit",
    PressureChange => "pressure_change",
    TrueWindDirection => "true_wind_direction",
    TrueWindSpeed => "true_wind_speed",
    RelativeWindDirection => "relative_wind_direction",
    RelativeWindSpeed => "relative_wind_speed",
    MaxGustSpeed => "max_gust_speed",
    MaxGustDirection => "max_gust_direction",
    SurfaceTemperature => "surface_temperature",
    PastWeather1 => "past_weather1",
    PastWeather2 => "past_weather2",
    TotalCloudCover => "total_cloud_cover",
    LowCloudAmount => "low_cloud_amount",
    LowCloudType => "low_cloud_type",
    MiddleCloudType => "middle_cloud_type",
    HighCloudType => "high_cloud_type",
    CloudBaseHeight => "cloud_base_height",
    WindWavePeriod => "wind_wave_period",
    WindWaveHeight => "wind_wave_height",
    SwellDirection1 => "swell_direction1",
    SwellPeriod1 => "swell_period1",
    SwellHeight1 => "swell_height1",
    SwellDirection2 => "swell_direction2",
    SwellPeriod2 => "swell_period2",
    SwellHeight2 => "swell_height2",
    IceDeposit => "ice_deposit",
    IceAccretionRate => "ice_accretion_rate",
    IceAccretionCause => "ice_accretion_cause",
    SeaIceConcentration => "sea_ice_concentration",
    IceType => "ice_type",
    IceSituation => "ice_situation",
    IceDevelopment => "ice_development",
    IceEdgeBearing => "ice_edge_bearing",
    WmoVariant => "wmo_variant",
    SecondPort => "second_port",
    AisClassStatus => "ais_class_status",
    AtaStatus => "ata_status",
    BnwasStatus => "bnwas_status",
    EcdisBackupStatus => "ecdis_backup_status",
    ChartEcdisStatus => "chart_ecdis_status",
    EchoSounderStatus => "echo_sounder_status",
    PlottingAidStatus => "plotting_aid_status",
    EmergencySteeringStatus => "emergency_steering_status",
    GnssStatus => "gnss_status",
    GyrocompassStatus => "gyrocompass_status",
    LritStatus => "lrit_status",
    MagneticCompassStatus => "magnetic_compass_status",
    NavtexStatus => "navtex_status",
    ArpaStatus => "arpa_status",
    SBandRadarStatus => "s_band_radar_status",
    XBandRadarStatus => "x_band_radar_status",
    HfRadioStatus => "hf_radio_status",
    InmarsatStatus => "inmarsat_status",
    MfRadioStatus => "mf_radio_status",
    VhfRadioStatus => "vhf_radio_status",
    GroundLogStatus => "ground_log_status",
    WaterLogStatus => "water_log_status",
    HeadingControlStatus => "heading_control_status",
    TrackControlStatus => "track_control_status",
    VdrStatus => "vdr_status",
    IceClass => "ice_class",
    ShaftHorsepower => "shaft_horsepower",
    VhfWorkingChannel => "vhf_working_channel",
    LloydsShipType => "lloyds_ship_type",
    GrossTonnage => "gross_tonnage",
    LadenBallast => "laden_ballast",
    HeavyFuelOil => "heavy_fuel_oil",
    LightFuelOil => "light_fuel_oil",
    DieselOil => "diesel_oil",
    TotalBunkerOil => "total_bunker_oil",
    SensorOwner => "sensor_owner",
    DataTimeout => "data_timeout",
    ForecastWindSpeed => "forecast_wind_speed",
    ForecastWindGust => "forecast_wind_gust",
    ForecastWindDirection => "forecast_wind_direction",
    ForecastDay => "forecast_day",
    ForecastHour => "forecast_hour",
    ForecastMinute => "forecast_minute",
    ForecastDuration => "forecast_duration",
    WaterLevelType => "water_level_type",
    VerticalDatum => "vertical_datum",
    ForecastType => "forecast_type",
    ForecastWaterLevel => "forecast_water_level",
    CurrentSpeed1 => "current_speed1",
    CurrentDirection1 => "current_direction1",
    CurrentDepth1 => "current_depth1",
    CurrentNorth1 => "current_north1",
    CurrentEast1 => "current_east1",
    CurrentUp1 => "current_up1",
    CurrentNorth2 => "current_north2",
    CurrentEast2 => "current_east2",
    CurrentUp2 => "current_up2",
    CurrentBearing1 => "current_bearing1",
    CurrentDistance1 => "current_distance1",
    CurrentBearing2 => "current_bearing2",
    CurrentDistance2 => "current_distance2",
    SwellSensorType => "swell_sensor_type",
    TemperatureDepth => "temperature_depth",
    WaterSensorType => "water_sensor_type",
    WaveSensorType => "wave_sensor_type",
    Conductivity => "conductivity",
    WaterPressure => "water_pressure",
    SalinityType => "salinity_type",
    DewPointType => "dew_point_type",
    PressureSensorType => "pressure_sensor_type",
    AirGap => "air_gap",
    AirGapTrend => "air_gap_trend",
    ForecastAirGap => "forecast_air_gap",
    SensorReportType => "sensor_report_type",
    SiteId => "site_id",
    SensorData => "sensor_data",
    VisibilityGreater => "visibility_greater",
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sentinels() {
        assert!(Sentinel::Equals(511).matches(511));
        assert!(!Sentinel::Equals(511).matches(510));
        assert!(Sentinel::AtLeast(60).matches(63));
        assert!(!Sentinel::AtLeast(60).matches(59));
        assert!(Sentinel::AnyOf(&[0, 24]).matches(24));
        assert!(!Sentinel::None.matches(0));
    }

    #[test]
    fn test_rate_of_turn() {
        assert_eq!(Transform::RateOfTurn.apply(0), Value::Float(0.0));
        assert_eq!(Transform::RateOfTurn.apply(127), Value::Float(10.0));
        assert_eq!(Transform::RateOfTurn.apply(-127), Value::Float(-10.0));

        let Value::Float(v) = Transform::RateOfTurn.apply(-20) else {
            panic!("expected float");
        };
        assert!((v + (20.0f64 / 4.733).powi(2)).abs() < 1e-9);
    }

    #[test]
    fn test_linear_formulas() {
        let air = Transform::Linear {
            divisor: 10.0,
            offset: 900.0,
        };
        assert_eq!(air.apply(1130), Value::Float(1013.0));
        assert_eq!(air.invert(1013.0), 1130);
        assert_eq!(Transform::Offset(800).apply(213), Value::Int(1013));
        assert_eq!(Transform::InvertedFlag.apply(0), Value::Flag(true));
        assert_eq!(Transform::Flag.apply(0), Value::Flag(false));
    }

    #[test]
    fn test_encode_rejects_non_numeric() {
        let mut bits = BitString::new();
        assert!(matches!(
            text(Field::Name, 120).encode(1.0, &mut bits),
            Err(ParseError::Encoding(_))
        ));
        assert!(matches!(
            binary_var(Field::DgnssData, 0, 736).encode(1.0, &mut bits),
            Err(ParseError::Encoding(_))
        ));
        assert!(matches!(
            uint(Field::MessageType, 72).encode(1.0, &mut bits),
            Err(ParseError::Encoding(_))
        ));
        assert!(bits.is_empty());

        uint(Field::MessageType, 6).encode(27.0, &mut bits).unwrap();
        assert_eq!(bits.bits(0, 6), Some(27));
    }

    #[test]
    fn test_range_check() {
        let spec = int(Field::MessageType, 28).scaled(600_000.0).within(-180.0, 180.0);
        assert!(!spec.out_of_range(&spec.convert(108_000_000)));
        assert!(spec.out_of_range(&spec.convert(108_000_001)));
    }

    #[test]
    fn test_min_bits() {
        static GROUP: &[Item] = &[
            Item::Field(uint(Field::MessageType, 6)),
            Item::Spare(2),
            Item::Optional {
                items: &[Item::Field(uint(Field::MessageType, 30))],
            },
        ];
        assert_eq!(min_bits(GROUP), 8);
    }

    proptest! {
        #[test]
        fn prop_linear_inverse(raw in -(1i64 << 27)..(1i64 << 27)) {
            let spec = int(Field::MessageType, 28).scaled(600_000.0);
            let Value::Float(v) = spec.convert(raw) else { unreachable!() };
            let mut bits = BitString::new();
            spec.encode(v, &mut bits).unwrap();
            prop_assert_eq!(bits.cursor().read_signed(28).unwrap(), raw);
        }

        #[test]
        fn prop_rate_of_turn_inverse(raw in -126i64..=126) {
            let Value::Float(v) = Transform::RateOfTurn.apply(raw) else { unreachable!() };
            prop_assert_eq!(Transform::RateOfTurn.invert(v), raw);
        }
    }
}
