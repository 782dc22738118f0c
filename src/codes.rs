//! Code tables for enumerated fields
//!
//! Each table is a dense list of descriptions indexed by the raw field value.
//! A raw value past the end of its table is reported as unknown rather than
//! failing the message.

/// Code table an enumerated field indexes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeTable {
    /// AIS message type
    MessageType,
    /// Navigation status
    NavigationStatus,
    /// Maneuver indicator
    ManeuverIndicator,
    /// EPFD fix type
    Epfd,
    /// Ship and cargo type
    ShipType,
    /// Aid-to-navigation type
    NavaidType,
    /// Area notice description
    AreaNotice,
    /// Sub-area shape
    SubareaShape,
    /// Mooring position
    MooringPosition,
    /// Berth service status
    ServiceStatus,
    /// Cargo amount unit
    CargoUnit,
    /// Extension unit
    ExtensionUnit,
    /// Route type
    RouteType,
    /// Marine traffic signal
    TrafficSignal,
    /// Precipitation type
    Precipitation,
    /// Beaufort scale
    Beaufort,
    /// SOLAS equipment status
    SolasStatus,
    /// Ice class
    IceClass,
    /// Station type
    StationType,
    /// Station reporting interval
    StationInterval,
    /// Transmit/receive mode
    TxRxMode,
    /// Target identifier type
    TargetIdType,
    /// Environmental sensor report type
    SensorReport,
    /// Sensor owner
    SensorOwner,
    /// Sensor data type
    SensorData,
    /// Vertical reference datum
    VerticalDatum,
}

impl CodeTable {
    /// Every table, in declaration order
    pub const ALL: &'static [CodeTable] = &[
        CodeTable::MessageType,
        CodeTable::NavigationStatus,
        CodeTable::ManeuverIndicator,
        CodeTable::Epfd,
        CodeTable::ShipType,
        CodeTable::NavaidType,
        CodeTable::AreaNotice,
        CodeTable::SubareaShape,
        CodeTable::MooringPosition,
        CodeTable::ServiceStatus,
        CodeTable::CargoUnit,
        CodeTable::ExtensionUnit,
        CodeTable::RouteType,
        CodeTable::TrafficSignal,
        CodeTable::Precipitation,
        CodeTable::Beaufort,
        CodeTable::SolasStatus,
        CodeTable::IceClass,
        CodeTable::StationType,
        CodeTable::StationInterval,
        CodeTable::TxRxMode,
        CodeTable::TargetIdType,
        CodeTable::SensorReport,
        CodeTable::SensorOwner,
        CodeTable::SensorData,
        CodeTable::VerticalDatum,
    ];

    /// Descriptions indexed by raw value
    pub fn entries(&self) -> &'static [&'static str] {
        match self {
            CodeTable::MessageType => &MESSAGE_TYPE,
            CodeTable::NavigationStatus => &NAVIGATION_STATUS,
            CodeTable::ManeuverIndicator => &MANEUVER_INDICATOR,
            CodeTable::Epfd => &EPFD,
            CodeTable::ShipType => &SHIP_TYPE,
            CodeTable::NavaidType => &NAVAID_TYPE,
            CodeTable::AreaNotice => &AREA_NOTICE,
            CodeTable::SubareaShape => &SUBAREA_SHAPE,
            CodeTable::MooringPosition => &MOORING_POSITION,
            CodeTable::ServiceStatus => &SERVICE_STATUS,
            CodeTable::CargoUnit => &CARGO_UNIT,
            CodeTable::ExtensionUnit => &EXTENSION_UNIT,
            CodeTable::RouteType => &ROUTE_TYPE,
            CodeTable::TrafficSignal => &TRAFFIC_SIGNAL,
            CodeTable::Precipitation => &PRECIPITATION,
            CodeTable::Beaufort => &BEAUFORT,
            CodeTable::SolasStatus => &SOLAS_STATUS,
            CodeTable::IceClass => &ICE_CLASS,
            CodeTable::StationType => &STATION_TYPE,
            CodeTable::StationInterval => &STATION_INTERVAL,
            CodeTable::TxRxMode => &TX_RX_MODE,
            CodeTable::TargetIdType => &TARGET_ID_TYPE,
            CodeTable::SensorReport => &SENSOR_REPORT,
            CodeTable::SensorOwner => &SENSOR_OWNER,
            CodeTable::SensorData => &SENSOR_DATA,
            CodeTable::VerticalDatum => &VERTICAL_DATUM,
        }
    }

    /// Human readable table name
    pub fn name(&self) -> &'static str {
        match self {
            CodeTable::MessageType => "AIS message type",
            CodeTable::NavigationStatus => "Navigation status",
            CodeTable::ManeuverIndicator => "Maneuver indicator",
            CodeTable::Epfd => "EPFD fix type",
            CodeTable::ShipType => "Ship and cargo type",
            CodeTable::NavaidType => "Aid-to-navigation type",
            CodeTable::AreaNotice => "Area notice description",
            CodeTable::SubareaShape => "Sub-area shape",
            CodeTable::MooringPosition => "Mooring position",
            CodeTable::ServiceStatus => "Berth service status",
            CodeTable::CargoUnit => "Cargo amount unit",
            CodeTable::ExtensionUnit => "Extension unit",
            CodeTable::RouteType => "Route type",
            CodeTable::TrafficSignal => "Marine traffic signal",
            CodeTable::Precipitation => "Precipitation type",
            CodeTable::Beaufort => "Beaufort scale",
            CodeTable::SolasStatus => "SOLAS equipment status",
            CodeTable::IceClass => "Ice class",
            CodeTable::StationType => "Station type",
            CodeTable::StationInterval => "Station reporting interval",
            CodeTable::TxRxMode => "Transmit/receive mode",
            CodeTable::TargetIdType => "Target identifier type",
            CodeTable::SensorReport => "Environmental sensor report type",
            CodeTable::SensorOwner => "Sensor owner",
            CodeTable::SensorData => "Sensor data type",
            CodeTable::VerticalDatum => "Vertical reference datum",
        }
    }

    /// Description for a raw value, `None` when out of range
    pub fn lookup(&self, index: u16) -> Option<&'static str> {
        self.entries().get(index as usize).copied()
    }
}

/// A raw enumerated value together with the table it indexes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Code {
    /// Table the value belongs to
    pub table: CodeTable,
    /// Raw field value
    pub index: u16,
}

impl Code {
    /// Create a new code
    pub fn new(table: CodeTable, index: u16) -> Self {
        Code { table, index }
    }

    /// Description, or `None` for an index outside the table
    pub fn description(&self) -> Option<&'static str> {
        self.table.lookup(self.index)
    }

    /// Index falls inside the table
    pub fn is_known(&self) -> bool {
        self.description().is_some()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.description() {
            Some(text) => f.write_str(text),
            None => write!(f, "unknown {} ({})", self.table.name().to_lowercase(), self.index),
        }
    }
}

static MESSAGE_TYPE: [&str; 28] = [
    "not used",
    "Position Report Class A",
    "Position Report Class A (Assigned schedule)",
    "Position Report Class A (Response to interrogation)",
    "Base Station Report",
    "Static and Voyage Related Data",
    "Binary Addressed Message",
    "Binary Acknowledge",
    "Binary Broadcast Message",
    "Standard SAR Aircraft Position Report",
    "UTC and Date Inquiry",
    "UTC and Date Response",
    "Addressed Safety Related Message",
    "Safety Related Acknowledgement",
    "Safety Related Broadcast Message",
    "Interrogation",
    "Assignment Mode Command",
    "DGNSS Binary Broadcast Message",
    "Standard Class B CS Position Report",
    "Extended Class B Equipment Position Report",
    "Data Link Management",
    "Aid-to-Navigation Report",
    "Channel Management",
    "Group Assignment Command",
    "Static Data Report",
    "Single Slot Binary Message",
    "Multiple Slot Binary Message With Communications State",
    "Position Report For Long-Range Applications",
];

static NAVIGATION_STATUS: [&str; 16] = [
    "Under way using engine",
    "At anchor",
    "Not under command",
    "Restricted manoeuverability",
    "Constrained by her draught",
    "Moored",
    "Aground",
    "Engaged in Fishing",
    "Under way sailing",
    "Reserved for future amendment of Navigational Status for HSC",
    "Reserved for future amendment of Navigational Status for WIG",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Not defined",
];

static MANEUVER_INDICATOR: [&str; 3] = [
    "Not available (default)",
    "No special maneuver",
    "Special maneuver",
];

static EPFD: [&str; 16] = [
    "Undefined (default)",
    "GPS",
    "GLONASS",
    "Combined GPS/GLONASS",
    "Loran-C",
    "Chayka",
    "Integrated navigation system",
    "Surveyed",
    "Galileo",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Internal GNSS",
];

static SHIP_TYPE: [&str; 100] = [
    "Not available (default)",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Wing in ground (WIG), all ships of this type",
    "Wing in ground (WIG), Hazardous category A",
    "Wing in ground (WIG), Hazardous category B",
    "Wing in ground (WIG), Hazardous category C",
    "Wing in ground (WIG), Hazardous category D",
    "Wing in ground (WIG), Reserved for future use",
    "Wing in ground (WIG), Reserved for future use",
    "Wing in ground (WIG), Reserved for future use",
    "Wing in ground (WIG), Reserved for future use",
    "Wing in ground (WIG), Reserved for future use",
    "Fishing",
    "Towing",
    "Towing: length exceeds 200m or breadth exceeds 25m",
    "Dredging or underwater ops",
    "Diving ops",
    "Military ops",
    "Sailing",
    "Pleasure Craft",
    "Reserved",
    "Reserved",
    "High speed craft (HSC), all ships of this type",
    "High speed craft (HSC), Hazardous category A",
    "High speed craft (HSC), Hazardous category B",
    "High speed craft (HSC), Hazardous category C",
    "High speed craft (HSC), Hazardous category D",
    "High speed craft (HSC), Reserved for future use",
    "High speed craft (HSC), Reserved for future use",
    "High speed craft (HSC), Reserved for future use",
    "High speed craft (HSC), Reserved for future use",
    "High speed craft (HSC), No additional information",
    "Pilot Vessel",
    "Search and Rescue vessel",
    "Tug",
    "Port Tender",
    "Anti-pollution equipment",
    "Law Enforcement",
    "Spare - Local Vessel",
    "Spare - Local Vessel",
    "Medical Transport",
    "Noncombatant ship according to RR Resolution No. 18",
    "Passenger, all ships of this type",
    "Passenger, Hazardous category A",
    "Passenger, Hazardous category B",
    "Passenger, Hazardous category C",
    "Passenger, Hazardous category D",
    "Passenger, Reserved for future use",
    "Passenger, Reserved for future use",
    "Passenger, Reserved for future use",
    "Passenger, Reserved for future use",
    "Passenger, No additional information",
    "Cargo, all ships of this type",
    "Cargo, Hazardous category A",
    "Cargo, Hazardous category B",
    "Cargo, Hazardous category C",
    "Cargo, Hazardous category D",
    "Cargo, Reserved for future use",
    "Cargo, Reserved for future use",
    "Cargo, Reserved for future use",
    "Cargo, Reserved for future use",
    "Cargo, No additional information",
    "Tanker, all ships of this type",
    "Tanker, Hazardous category A",
    "Tanker, Hazardous category B",
    "Tanker, Hazardous category C",
    "Tanker, Hazardous category D",
    "Tanker, Reserved for future use",
    "Tanker, Reserved for future use",
    "Tanker, Reserved for future use",
    "Tanker, Reserved for future use",
    "Tanker, No additional information",
    "Other Type, all ships of this type",
    "Other Type, Hazardous category A",
    "Other Type, Hazardous category B",
    "Other Type, Hazardous category C",
    "Other Type, Hazardous category D",
    "Other Type, Reserved for future use",
    "Other Type, Reserved for future use",
    "Other Type, Reserved for future use",
    "Other Type, Reserved for future use",
    "Other Type, no additional information",
];

static NAVAID_TYPE: [&str; 32] = [
    "Default, Type of Aid to Navigation not specified",
    "Reference point",
    "RACON (radar transponder marking a navigation hazard)",
    "Fixed structure off shore, such as oil platforms, wind farms, rigs. (Note: This code should identify an obstruction that is fitted with an Aid-to-Navigation AIS station.)",
    "Spare, Reserved for future use.",
    "Light, without sectors",
    "Light, with sectors",
    "Leading Light Front",
    "Leading Light Rear",
    "Beacon, Cardinal N",
    "Beacon, Cardinal E",
    "Beacon, Cardinal S",
    "Beacon, Cardinal W",
    "Beacon, Port hand",
    "Beacon, Starboard hand",
    "Beacon, Preferred Channel port hand",
    "Beacon, Preferred Channel starboard hand",
    "Beacon, Isolated danger",
    "Beacon, Safe water",
    "Beacon, Special mark",
    "Cardinal Mark N",
    "Cardinal Mark E",
    "Cardinal Mark S",
    "Cardinal Mark W",
    "Port hand Mark",
    "Starboard hand Mark",
    "Preferred Channel Port hand",
    "Preferred Channel Starboard hand",
    "Isolated danger",
    "Safe Water",
    "Special Mark",
    "Light Vessel / LANBY / Rigs",
];

static AREA_NOTICE: [&str; 128] = [
    "Caution Area: Marine mammals habitat",
    "Caution Area: Marine mammals in area - reduce speed",
    "Caution Area: Marine mammals in area - stay clear",
    "Caution Area: Marine mammals in area - report sightings",
    "Caution Area: Protected habitat - reduce speed",
    "Caution Area: Protected habitat - stay clear",
    "Caution Area: Protected habitat - no fishing or anchoring",
    "Caution Area: Derelicts (drifting objects)",
    "Caution Area: Traffic congestion",
    "Caution Area: Marine event",
    "Caution Area: Divers down",
    "Caution Area: Swim area",
    "Caution Area: Dredge operations",
    "Caution Area: Survey operations",
    "Caution Area: Underwater operation",
    "Caution Area: Seaplane operations",
    "Caution Area: Fishery - nets in water",
    "Caution Area: Cluster of fishing vessels",
    "Caution Area: Fairway closed",
    "Caution Area: Harbour closed",
    "Caution Area: Risk (define in associated text field)",
    "Caution Area: Underwater vehicle operation",
    "(reserved for future use)",
    "Environmental Caution Area: Storm front (line squall)",
    "Environmental Caution Area: Hazardous sea ice",
    "Environmental Caution Area: Storm warning (storm cell or line of storms)",
    "Environmental Caution Area: High wind",
    "Environmental Caution Area: High waves",
    "Environmental Caution Area: Restricted visibility (fog, rain, etc.)",
    "Environmental Caution Area: Strong currents",
    "Environmental Caution Area: Heavy icing",
    "(reserved for future use)",
    "Restricted Area: Fishing prohibited",
    "Restricted Area: No anchoring.",
    "Restricted Area: Entry approval required prior to transit",
    "Restricted Area: Entry prohibited",
    "Restricted Area: Active military OPAREA",
    "Restricted Area: Firing - danger area.",
    "Restricted Area: Drifting Mines",
    "(reserved for future use)",
    "Anchorage Area: Anchorage open",
    "Anchorage Area: Anchorage closed",
    "Anchorage Area: Anchorage prohibited",
    "Anchorage Area: Deep draft anchorage",
    "Anchorage Area: Shallow draft anchorage",
    "Anchorage Area: Vessel transfer operations",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "Security Alert - Level 1",
    "Security Alert - Level 2",
    "Security Alert - Level 3",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "Distress Area: Vessel disabled and adrift",
    "Distress Area: Vessel sinking",
    "Distress Area: Vessel abandoning ship",
    "Distress Area: Vessel requests medical assistance",
    "Distress Area: Vessel flooding",
    "Distress Area: Vessel fire/explosion",
    "Distress Area: Vessel grounding",
    "Distress Area: Vessel collision",
    "Distress Area: Vessel listing/capsizing",
    "Distress Area: Vessel under assault",
    "Distress Area: Person overboard",
    "Distress Area: SAR area",
    "Distress Area: Pollution response area",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "Instruction: Contact VTS at this point/juncture",
    "Instruction: Contact Port Administration at this point/juncture",
    "Instruction: Do not proceed beyond this point/juncture",
    "Instruction: Await instructions prior to proceeding beyond this point/juncture",
    "Proceed to this location - await instructions",
    "Clearance granted - proceed to berth",
    "(reserved for future use)",
    "(reserved for future use)",
    "Information: Pilot boarding position",
    "Information: Icebreaker waiting area",
    "Information: Places of refuge",
    "Information: Position of icebreakers",
    "Information: Location of response units",
    "VTS active target",
    "Rogue or suspicious vessel",
    "Vessel requesting non-distress assistance",
    "Chart Feature: Sunken vessel",
    "Chart Feature: Submerged object",
    "Chart Feature: Semi-submerged object",
    "Chart Feature: Shoal area",
    "Chart Feature: Shoal area due north",
    "Chart Feature: Shoal area due east",
    "Chart Feature: Shoal area due south",
    "Chart Feature: Shoal area due west",
    "Chart Feature: Channel obstruction",
    "Chart Feature: Reduced vertical clearance",
    "Chart Feature: Bridge closed",
    "Chart Feature: Bridge partially open",
    "Chart Feature: Bridge fully open",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "Report from ship: Icing info",
    "(reserved for future use)",
    "Report from ship: Miscellaneous information - define in associated text field",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "Route: Recommended route",
    "Route: Alternative route",
    "Route: Recommended route through ice",
    "(reserved for future use)",
    "(reserved for future use)",
    "Other - Define in associated text field",
    "Cancellation - cancel area as identified by Message Linkage ID",
    "Undefined (default)",
];

static SUBAREA_SHAPE: [&str; 8] = [
    "Circle or point",
    "Rectangle",
    "Sector",
    "Polyline",
    "Polygon",
    "Associated text",
    "Reserved for future use",
    "Reserved for future use",
];

static MOORING_POSITION: [&str; 8] = [
    "Not available (default)",
    "Port-side to",
    "Starboard-side to",
    "Mediterranean mooring",
    "Mooring buoy",
    "Anchorage",
    "Reserved for future use",
    "Reserved for future use",
];

static SERVICE_STATUS: [&str; 4] = [
    "Service not available or requested (default)",
    "Service available",
    "No data or unknown",
    "Not to be used",
];

static CARGO_UNIT: [&str; 4] = [
    "Not available (default)",
    "In kg",
    "In tons (10e3 kg)",
    "In 1000 tons (10e6 kg)",
];

static EXTENSION_UNIT: [&str; 4] = [
    "Meters",
    "Kilometers",
    "Nautical miles",
    "Cable length",
];

static ROUTE_TYPE: [&str; 32] = [
    "Undefined (default)",
    "Mandatory",
    "Recommended",
    "Alternative",
    "Recommended route through ice",
    "Ship route plan",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Reserved for future usage",
    "Cancel route identified by message linkage",
];

static TRAFFIC_SIGNAL: [&str; 32] = [
    "N/A (default)",
    "IALA port traffic signal 1: Serious emergency - all vessels to stop",
    "IALA port traffic signal 2: Vessels shall not proceed.",
    "IALA port traffic signal 3: Vessels may proceed. One way traffic.",
    "IALA port traffic signal 4: Vessels may proceed. Two way traffic.",
    "IALA port traffic signal 5: A vessel may proceed only when it has",
    "IALA port traffic signal 2a: Vessels shall not proceed, except that",
    "IALA port traffic signal 5a: A vessel may proceed only when it has",
    "Japan Traffic Signal - I = \"in-bound\" only acceptable.",
    "Japan Traffic Signal - O = \"out-bound\" only acceptable.",
    "Japan Traffic Signal - F = both \"in- and out-bound\" acceptable.",
    "Japan Traffic Signal - XI = Code will shift to \"I\" in due time.",
    "Japan Traffic Signal - XO = Code will shift to \"O\" in due time.",
    "Japan Traffic Signal - X = Vessels shall not proceed, except a vessel",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
];

static PRECIPITATION: [&str; 8] = [
    "Reserved",
    "Rain",
    "Thunderstorm",
    "Freezing rain",
    "Mixed/ice",
    "Snow",
    "Reserved",
    "N/A (default)",
];

static BEAUFORT: [&str; 16] = [
    "Calm",
    "Light air",
    "Light breeze",
    "Gentle breeze",
    "Moderate breeze",
    "Fresh breeze",
    "Strong breeze",
    "High wind",
    "Gale",
    "Strong gale",
    "Storm",
    "Violent storm",
    "Hurricane force",
    "Not available (default)",
    "Reserved for future use",
    "Reserved for future use",
];

static SOLAS_STATUS: [&str; 4] = [
    "Not available or requested (default)",
    "Equipment operational",
    "Equipment not operational",
    "No data (equipment may or may not be on board/or its status is unknown)",
];

static ICE_CLASS: [&str; 16] = [
    "Not classified",
    "IACS PC 1",
    "IACS PC 2",
    "IACS PC 3",
    "IACS PC 4",
    "IACS PC 5",
    "IACS PC 6 / FSICR IA Super / RS Arc5",
    "IACS PC 7 / FSICR IA / RS Arc4",
    "FSICR IB / RS Ice3",
    "FSICR IC / RS Ice2",
    "RS Ice1",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Not available = default",
];

static STATION_TYPE: [&str; 16] = [
    "All types of mobiles (default)",
    "Reserved for future use",
    "All types of Class B mobile stations",
    "SAR airborne mobile station",
    "Aid to Navigation station",
    "Class B shipborne mobile station (IEC62287 only)",
    "Regional use and inland waterways",
    "Regional use and inland waterways",
    "Regional use and inland waterways",
    "Regional use and inland waterways",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
];

static STATION_INTERVAL: [&str; 16] = [
    "As given by the autonomous mode",
    "10 Minutes",
    "6 Minutes",
    "3 Minutes",
    "1 Minute",
    "30 Seconds",
    "15 Seconds",
    "10 Seconds",
    "5 Seconds",
    "Next Shorter Reporting Interval",
    "Next Longer Reporting Interval",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
];

static TX_RX_MODE: [&str; 4] = [
    "TxA/TxB, RxA/RxB (default)",
    "TxA, RxA/RxB",
    "TxB, RxA/RxB",
    "Reserved for future use",
];

static TARGET_ID_TYPE: [&str; 4] = [
    "The MMSI number",
    "The IMO number",
    "The call sign",
    "Other (default)",
];

static SENSOR_REPORT: [&str; 12] = [
    "Site location",
    "Station ID",
    "Wind",
    "Water level",
    "Current flow (2D)",
    "Current flow (3D)",
    "Horizontal current flow",
    "Sea state",
    "Salinity",
    "Weather",
    "Air gap/Air draft",
    "(reserved for future use)",
];

static SENSOR_OWNER: [&str; 15] = [
    "Unknown (default)",
    "Hydrographic office",
    "Inland waterway authority",
    "Coastal directorate",
    "Meteorological service",
    "Port Authority",
    "Coast guard",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for future use)",
    "(reserved for regional use)",
];

static SENSOR_DATA: [&str; 8] = [
    "No data (default)",
    "Raw real time",
    "Real time with quality control",
    "Predicted (based on historical statistics)",
    "Forecast (predicted, refined with real-time information)",
    "Nowcast (a continuous forecast)",
    "(reserved for future use)",
    "Sensor not available",
];

static VERTICAL_DATUM: [&str; 31] = [
    "Mean Lower Low Water (MLLW)",
    "International Great Lakes Datum (IGLD-85)",
    "Local river datum",
    "Station Datum (STND)",
    "Mean Higher High Water (MHHW)",
    "Mean High Water (MHW)",
    "Mean Sea Level (MSL)",
    "Mean Low Water (MLW)",
    "National Geodetic Vertical Datum (NGVD-29)",
    "North American Vertical Datum (NAVD-88)",
    "World Geodetic System (WGS-84)",
    "Lowest Astronomical Tide (LAT)",
    "pool",
    "gauge",
    "Unknown/not available (default)",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(CodeTable::NavigationStatus.lookup(5), Some("Moored"));
        assert_eq!(CodeTable::Epfd.lookup(15), Some("Internal GNSS"));
        assert_eq!(CodeTable::ShipType.lookup(52), Some("Tug"));
        assert_eq!(CodeTable::ManeuverIndicator.lookup(3), None);
    }

    #[test]
    fn test_unknown_code_display() {
        let code = Code::new(CodeTable::SensorOwner, 15);
        assert!(!code.is_known());
        assert_eq!(code.to_string(), "unknown sensor owner (15)");

        let code = Code::new(CodeTable::AreaNotice, 127);
        assert_eq!(code.to_string(), "Undefined (default)");
    }

    #[test]
    fn test_table_sizes_match_field_widths() {
        // Tables that fill their field completely
        for (table, width) in [
            (CodeTable::NavigationStatus, 4),
            (CodeTable::Epfd, 4),
            (CodeTable::NavaidType, 5),
            (CodeTable::AreaNotice, 7),
            (CodeTable::SubareaShape, 3),
            (CodeTable::RouteType, 5),
            (CodeTable::SolasStatus, 2),
            (CodeTable::StationInterval, 4),
        ] {
            assert_eq!(table.entries().len(), 1 << width, "{}", table.name());
        }
        assert_eq!(CodeTable::ShipType.entries().len(), 100);
        assert_eq!(CodeTable::MessageType.entries().len(), 28);
    }

    #[test]
    fn test_tables_have_names() {
        for table in CodeTable::ALL {
            assert!(!table.name().is_empty());
            assert!(!table.entries().is_empty());
        }
    }
}
