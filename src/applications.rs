//! Binary application layouts for message types 6 and 8
//!
//! Keyed by (message type, DAC, FID). Only the international application
//! identifiers (DAC 1) from IMO SN.1/Circ.236 and SN.1/Circ.289 are known;
//! anything else is left undecoded after the common binary header.

use crate::codes::CodeTable;
use crate::field::Field::*;
use crate::field::Item::Field as F;
use crate::field::Item::{self, Repeat, Spare, Switch};
use crate::field::{binary, code, flag, int, text, text_var, uint, FieldSpec, Position, Selector};
use crate::layouts::{day, hour, lat_24, lat_27, lon_25, lon_28, minute, month};

/// A binary application known to the decoder
#[derive(Debug, Clone, Copy)]
pub struct Application {
    /// 6 (addressed) or 8 (broadcast)
    pub message_type: u8,
    /// Designated area code
    pub dac: u16,
    /// Function identifier
    pub fid: u8,
    /// Human readable name
    pub name: &'static str,
    /// Fields following the FID
    pub items: &'static [Item],
}

/// Find the layout for a binary application
pub fn lookup(message_type: u8, dac: u16, fid: u8) -> Option<&'static Application> {
    APPLICATIONS
        .iter()
        .find(|a| a.message_type == message_type && a.dac == dac && a.fid == fid)
}

/// All known binary applications
pub fn all() -> &'static [Application] {
    APPLICATIONS
}

const LINKAGE: FieldSpec = uint(LinkageId, 10);
const DURATION: FieldSpec = uint(Duration, 18).na(262_143);
const WIND_SPEED: FieldSpec = uint(WindSpeed, 7).na(127);
const WIND_GUST: FieldSpec = uint(WindGust, 7).na(127);
const WIND_DIRECTION: FieldSpec = uint(WindDirection, 9).na_from(361);
const WIND_GUST_DIRECTION: FieldSpec = uint(WindGustDirection, 9).na_from(361);
const AIR_TEMPERATURE: FieldSpec = uint(AirTemperature, 11).na_from(1201).linear(10.0, -60.0);
const HUMIDITY: FieldSpec = uint(RelativeHumidity, 7).na(127);
const DEW_POINT: FieldSpec = uint(DewPoint, 10).na_from(1023).linear(10.0, -20.0);
const AIR_PRESSURE: FieldSpec = uint(AirPressure, 9).na_from(403).plus(800);
const VISIBILITY: FieldSpec = uint(Visibility, 8).na_from(250).scaled(10.0);
const WAVE_HEIGHT: FieldSpec = uint(WaveHeight, 8).na(255).scaled(10.0);
const WAVE_PERIOD: FieldSpec = uint(WavePeriod, 6).na(63);
const WAVE_DIRECTION: FieldSpec = uint(WaveDirection, 9).na_from(361);
const SWELL_HEIGHT: FieldSpec = uint(SwellHeight, 8).na(255).scaled(10.0);
const SWELL_PERIOD: FieldSpec = uint(SwellPeriod, 6).na(63);
const SWELL_DIRECTION: FieldSpec = uint(SwellDirection, 9).na_from(361);
const WATER_TEMPERATURE: FieldSpec = uint(WaterTemperature, 10).na_from(601).linear(10.0, -10.0);
const SALINITY: FieldSpec = uint(Salinity, 9).na(511).scaled(10.0);
const SENSOR_DATA_TYPE: FieldSpec = code(SensorDataType, 3, CodeTable::SensorData);

const DANGEROUS_CARGO: &[Item] = &[
    F(text(LastPort, 30)),
    F(month(LastPortMonth)),
    F(day(LastPortDay)),
    F(hour(LastPortHour)),
    F(minute(LastPortMinute)),
    F(text(NextPort, 30)),
    F(month(NextPortMonth)),
    F(day(NextPortDay)),
    F(hour(NextPortHour)),
    F(minute(NextPortMinute)),
    F(text(DangerousCargo, 120)),
    F(text(ImdCategory, 24)),
    F(uint(UnNumber, 13)),
    F(uint(CargoAmount, 10)),
    F(code(CargoUnit, 2, CodeTable::CargoUnit)),
    Spare(3),
];

const TIDAL_WINDOW: &[Item] = &[
    F(month(Month)),
    F(day(Day)),
    Repeat {
        items: &[
            F(lat_27(Latitude)),
            F(lon_28(Longitude)),
            F(hour(FromHour)),
            F(minute(FromMinute)),
            F(hour(ToHour)),
            F(minute(ToMinute)),
            F(uint(CurrentDirection, 9).na(360)),
            F(uint(CurrentSpeed, 7).na(127).scaled(10.0)),
        ],
    },
];

const PERSONS_ON_BOARD: &[Item] = &[F(uint(Persons, 13).na(0)), Spare(3)];

const CLEARANCE_TIME: &[Item] = &[
    F(LINKAGE),
    F(month(Month)),
    F(day(Day)),
    F(hour(Hour)),
    F(minute(Minute)),
    F(text(PortName, 120)),
    F(text(Destination, 30)),
    F(lon_25(Longitude)),
    F(lat_24(Latitude)),
    Spare(43),
];

const SERVICE: CodeTable = CodeTable::ServiceStatus;

const BERTHING_DATA: &[Item] = &[
    F(LINKAGE),
    F(uint(BerthLength, 9).na(0)),
    F(uint(BerthDepth, 8).na(0).scaled(10.0)),
    F(code(MooringPosition, 3, CodeTable::MooringPosition)),
    F(month(Month)),
    F(day(Day)),
    F(hour(Hour)),
    F(minute(Minute)),
    F(flag(ServicesAvailable)),
    F(code(AgentService, 2, SERVICE)),
    F(code(FuelService, 2, SERVICE)),
    F(code(ChandlerService, 2, SERVICE)),
    F(code(StevedoreService, 2, SERVICE)),
    F(code(ElectricalService, 2, SERVICE)),
    F(code(WaterService, 2, SERVICE)),
    F(code(CustomsService, 2, SERVICE)),
    F(code(CartageService, 2, SERVICE)),
    F(code(CraneService, 2, SERVICE)),
    F(code(LiftService, 2, SERVICE)),
    F(code(MedicalService, 2, SERVICE)),
    F(code(NavigationRepairService, 2, SERVICE)),
    F(code(ProvisionsService, 2, SERVICE)),
    F(code(ShipRepairService, 2, SERVICE)),
    F(code(SurveyorService, 2, SERVICE)),
    F(code(SteamService, 2, SERVICE)),
    F(code(TugsService, 2, SERVICE)),
    F(code(SolidWasteService, 2, SERVICE)),
    F(code(LiquidWasteService, 2, SERVICE)),
    F(code(HazardousWasteService, 2, SERVICE)),
    F(code(BallastService, 2, SERVICE)),
    F(code(AdditionalService, 2, SERVICE)),
    F(code(RegionalService1, 2, SERVICE)),
    F(code(RegionalService2, 2, SERVICE)),
    F(code(FutureService1, 2, SERVICE)),
    F(code(FutureService2, 2, SERVICE)),
    F(text(BerthName, 120)),
    F(lon_25(Longitude)),
    F(lat_24(Latitude)),
];

const SUBAREA_ORIGIN: [Item; 4] = [
    F(uint(ScaleFactor, 2)),
    F(lon_25(Longitude)),
    F(lat_24(Latitude)),
    F(uint(Precision, 3)),
];

const CIRCLE: &[Item] = &[
    SUBAREA_ORIGIN[0],
    SUBAREA_ORIGIN[1],
    SUBAREA_ORIGIN[2],
    SUBAREA_ORIGIN[3],
    F(uint(Radius, 12)),
    Spare(18),
];

const RECTANGLE: &[Item] = &[
    SUBAREA_ORIGIN[0],
    SUBAREA_ORIGIN[1],
    SUBAREA_ORIGIN[2],
    SUBAREA_ORIGIN[3],
    F(uint(EastDimension, 8)),
    F(uint(NorthDimension, 8)),
    F(uint(Orientation, 9)),
    Spare(5),
];

const SECTOR: &[Item] = &[
    SUBAREA_ORIGIN[0],
    SUBAREA_ORIGIN[1],
    SUBAREA_ORIGIN[2],
    SUBAREA_ORIGIN[3],
    F(uint(Radius, 12)),
    F(uint(LeftBoundary, 9)),
    F(uint(RightBoundary, 9)),
];

// Polylines and polygons share one layout: four (bearing, distance) points
// relative to the previous sub-area.
const POLYLINE: &[Item] = &[
    F(uint(ScaleFactor, 2)),
    F(uint(PointBearing, 10).na(720)),
    F(uint(PointDistance, 10)),
    F(uint(PointBearing, 10).na(720)),
    F(uint(PointDistance, 10)),
    F(uint(PointBearing, 10).na(720)),
    F(uint(PointDistance, 10)),
    F(uint(PointBearing, 10).na(720)),
    F(uint(PointDistance, 10)),
    Spare(2),
];

const AREA_TEXT: &[Item] = &[F(text(AreaText, 84))];

const SUBAREA: &[Item] = &[Switch {
    selector: Selector::Field(code(SubareaShape, 3, CodeTable::SubareaShape)),
    cases: &[
        (0, CIRCLE),
        (1, RECTANGLE),
        (2, SECTOR),
        (3, POLYLINE),
        (4, POLYLINE),
        (5, AREA_TEXT),
    ],
    default: &[Spare(84)],
}];

const AREA_NOTICE: &[Item] = &[
    F(LINKAGE),
    F(code(NoticeDescription, 7, CodeTable::AreaNotice)),
    F(month(Month)),
    F(day(Day)),
    F(hour(Hour)),
    F(minute(Minute)),
    F(DURATION),
    Repeat { items: SUBAREA },
];

const ROUTE_INFORMATION: &[Item] = &[
    F(LINKAGE),
    F(uint(SenderClass, 3)),
    F(code(RouteType, 5, CodeTable::RouteType)),
    F(month(Month)),
    F(day(Day)),
    F(hour(Hour)),
    F(minute(Minute)),
    F(DURATION),
    F(uint(WaypointCount, 5)),
    Repeat {
        items: &[F(lon_28(Longitude)), F(lat_27(Latitude))],
    },
];

const ADDRESSED_TEXT: &[Item] = &[F(LINKAGE), F(text_var(Description, 6, 930))];

const BROADCAST_TEXT: &[Item] = &[F(LINKAGE), F(text_var(Description, 6, 966))];

const TIDAL_WINDOW_289: &[Item] = &[
    F(month(Month)),
    F(day(Day)),
    Repeat {
        items: &[
            F(lon_25(Longitude)),
            F(lat_24(Latitude)),
            F(hour(FromHour)),
            F(minute(FromMinute)),
            F(hour(ToHour)),
            F(minute(ToMinute)),
            F(uint(CurrentDirection, 9).na(360)),
            F(uint(CurrentSpeed, 8).na(255).scaled(10.0)),
        ],
    },
];

const METEO_HYDRO_236: &[Item] = &[
    F(lat_24(Latitude)),
    F(lon_25(Longitude)),
    F(day(Day)),
    F(hour(Hour)),
    F(minute(Minute)),
    F(WIND_SPEED),
    F(WIND_GUST),
    F(WIND_DIRECTION),
    F(WIND_GUST_DIRECTION),
    F(AIR_TEMPERATURE),
    F(HUMIDITY),
    F(DEW_POINT),
    F(AIR_PRESSURE),
    F(uint(PressureTendency, 2).na(3)),
    F(VISIBILITY),
    F(uint(WaterLevel, 9).na(511).linear(10.0, -10.0)),
    F(uint(WaterLevelTrend, 2).na(3)),
    F(uint(SurfaceCurrentSpeed, 8).na(255).scaled(10.0)),
    F(uint(SurfaceCurrentDirection, 9).na_from(361)),
    F(uint(CurrentSpeed2, 8).na(255).scaled(10.0)),
    F(uint(CurrentDirection2, 9).na_from(361)),
    F(uint(CurrentDepth2, 5).na(31).scaled(10.0)),
    F(uint(CurrentSpeed3, 8).na(255).scaled(10.0)),
    F(uint(CurrentDirection3, 9).na_from(361)),
    F(uint(CurrentDepth3, 5).na(31).scaled(10.0)),
    F(WAVE_HEIGHT),
    F(WAVE_PERIOD),
    F(WAVE_DIRECTION),
    F(SWELL_HEIGHT),
    F(SWELL_PERIOD),
    F(SWELL_DIRECTION),
    F(code(SeaState, 4, CodeTable::Beaufort)),
    F(WATER_TEMPERATURE),
    F(code(Precipitation, 3, CodeTable::Precipitation)),
    F(SALINITY),
    F(uint(Ice, 2).na(3)),
    Spare(6),
];

const FAIRWAY_CLOSED: &[Item] = &[
    F(text(Reason, 120)),
    F(text(ClosedFrom, 120)),
    F(text(ClosedTo, 120)),
    F(uint(ExtensionRadius, 10)),
    F(code(ExtensionUnit, 2, CodeTable::ExtensionUnit)),
    F(day(FromDay)),
    F(month(FromMonth)),
    F(hour(FromHour)),
    F(minute(FromMinute)),
    F(day(ToDay)),
    F(month(ToMonth)),
    F(hour(ToHour)),
    F(minute(ToMinute)),
    Spare(4),
];

const AIR_DRAUGHT: &[Item] = &[F(uint(AirDraught, 11).na(0).scaled(10.0)), Spare(5)];

const VTS_TARGETS: &[Item] = &[Repeat {
    items: &[
        F(code(TargetIdType, 2, CodeTable::TargetIdType)),
        F(text(TargetId, 42)),
        Spare(4),
        F(lat_24(Latitude)),
        F(lon_25(Longitude)),
        F(uint(CourseOverGround, 9).na_from(360)),
        F(uint(Second, 6).na_from(60)),
        F(uint(SpeedOverGround, 8).na_from(255)),
    ],
}];

const TRAFFIC_SIGNAL: &[Item] = &[
    F(LINKAGE),
    F(text(StationName, 120)),
    F(lon_25(Longitude)),
    F(lat_24(Latitude)),
    F(uint(SignalStatus, 2)),
    F(code(Signal, 5, CodeTable::TrafficSignal)),
    F(hour(Hour)),
    F(minute(Minute)),
    F(code(NextSignal, 5, CodeTable::TrafficSignal)),
    Spare(102),
];

const WEATHER_OBSERVATION: &[Item] = &[
    F(text(Location, 120)),
    F(lon_25(Longitude)),
    F(lat_24(Latitude)),
    F(day(Day)),
    F(hour(Hour)),
    F(minute(Minute)),
    F(uint(PresentWeather, 4)),
    F(flag(VisibilityLimit)),
    F(uint(Visibility, 7).na(127).scaled(10.0)),
    F(HUMIDITY),
    F(WIND_SPEED),
    F(WIND_DIRECTION),
    F(AIR_PRESSURE),
    F(uint(PressureTendency, 4)),
    F(AIR_TEMPERATURE),
    F(WATER_TEMPERATURE),
    F(WAVE_PERIOD),
    F(WAVE_HEIGHT),
    F(WAVE_DIRECTION),
    F(SWELL_HEIGHT),
    F(SWELL_DIRECTION),
    F(SWELL_PERIOD),
    Spare(3),
];

const WMO_WEATHER_OBSERVATION: &[Item] = &[
    F(uint(Longitude, 16).linear(100.0, -180.0).within(-180.0, 180.0)),
    F(uint(Latitude, 15).linear(100.0, -90.0).within(-90.0, 90.0)),
    F(month(Month)),
    F(uint(Day, 6).na(0)),
    F(hour(Hour)),
    F(uint(Minute, 3).step(10)),
    F(uint(CourseOverGround, 7).step(5)),
    F(uint(SpeedOverGround, 5)),
    F(uint(TrueHeading, 7).step(5)),
    F(uint(AirPressure, 11).linear(10.0, 900.0)),
    F(uint(PressureChange, 10).linear(10.0, -50.0)),
    F(uint(PressureTendency, 4)),
    F(uint(TrueWindDirection, 7).step(5)),
    F(uint(TrueWindSpeed, 8)),
    F(uint(RelativeWindDirection, 7).step(5)),
    F(uint(RelativeWindSpeed, 8)),
    F(uint(MaxGustSpeed, 8)),
    F(uint(MaxGustDirection, 7).step(5)),
    F(uint(AirTemperature, 10).linear(10.0, -50.0)),
    F(HUMIDITY),
    F(uint(SurfaceTemperature, 9).linear(10.0, -10.0)),
    F(uint(Visibility, 6)),
    F(uint(PresentWeather, 9)),
    F(uint(PastWeather1, 5)),
    F(uint(PastWeather2, 5)),
    F(uint(TotalCloudCover, 4)),
    F(uint(LowCloudAmount, 4)),
    F(uint(LowCloudType, 6)),
    F(uint(MiddleCloudType, 6)),
    F(uint(HighCloudType, 6)),
    F(uint(CloudBaseHeight, 7)),
    F(uint(WindWavePeriod, 5)),
    F(uint(WindWaveHeight, 6)),
    F(uint(SwellDirection1, 6)),
    F(uint(SwellPeriod1, 5)),
    F(uint(SwellHeight1, 6)),
    F(uint(SwellDirection2, 6)),
    F(uint(SwellPeriod2, 5)),
    F(uint(SwellHeight2, 6)),
    F(uint(IceDeposit, 7)),
    F(uint(IceAccretionRate, 3)),
    F(uint(IceAccretionCause, 3)),
    F(uint(SeaIceConcentration, 5)),
    F(uint(IceType, 4)),
    F(uint(IceSituation, 5)),
    F(uint(IceDevelopment, 5)),
    F(uint(IceEdgeBearing, 4)),
];

const WEATHER_REPORT: &[Item] = &[Switch {
    selector: Selector::Field(uint(WmoVariant, 1)),
    cases: &[(0, WEATHER_OBSERVATION), (1, WMO_WEATHER_OBSERVATION)],
    default: WEATHER_OBSERVATION,
}];

const SOLAS: CodeTable = CodeTable::SolasStatus;

const EXTENDED_STATIC: &[Item] = &[
    F(LINKAGE),
    F(uint(AirDraught, 13).na(0).scaled(10.0)),
    F(text(LastPort, 30)),
    F(text(NextPort, 30)),
    F(text(SecondPort, 30)),
    F(code(AisClassStatus, 2, SOLAS)),
    F(code(AtaStatus, 2, SOLAS)),
    F(code(BnwasStatus, 2, SOLAS)),
    F(code(EcdisBackupStatus, 2, SOLAS)),
    F(code(ChartEcdisStatus, 2, SOLAS)),
    F(code(EchoSounderStatus, 2, SOLAS)),
    F(code(PlottingAidStatus, 2, SOLAS)),
    F(code(EmergencySteeringStatus, 2, SOLAS)),
    F(code(GnssStatus, 2, SOLAS)),
    F(code(GyrocompassStatus, 2, SOLAS)),
    F(code(LritStatus, 2, SOLAS)),
    F(code(MagneticCompassStatus, 2, SOLAS)),
    F(code(NavtexStatus, 2, SOLAS)),
    F(code(ArpaStatus, 2, SOLAS)),
    F(code(SBandRadarStatus, 2, SOLAS)),
    F(code(XBandRadarStatus, 2, SOLAS)),
    F(code(HfRadioStatus, 2, SOLAS)),
    F(code(InmarsatStatus, 2, SOLAS)),
    F(code(MfRadioStatus, 2, SOLAS)),
    F(code(VhfRadioStatus, 2, SOLAS)),
    F(code(GroundLogStatus, 2, SOLAS)),
    F(code(WaterLogStatus, 2, SOLAS)),
    F(code(HeadingControlStatus, 2, SOLAS)),
    F(code(TrackControlStatus, 2, SOLAS)),
    F(code(VdrStatus, 2, SOLAS)),
    Spare(2),
    F(code(IceClass, 4, CodeTable::IceClass)),
    F(uint(ShaftHorsepower, 18).na(262_143)),
    F(uint(VhfWorkingChannel, 12)),
    F(text(LloydsShipType, 42)),
    F(uint(GrossTonnage, 18).na(0)),
    F(uint(LadenBallast, 2).na(0)),
    F(uint(HeavyFuelOil, 2).na(0)),
    F(uint(LightFuelOil, 2).na(0)),
    F(uint(DieselOil, 2).na(0)),
    F(uint(TotalBunkerOil, 14).na(16_383)),
    F(uint(Persons, 13).na(0)),
    Spare(10),
];

const SITE_LOCATION: &[Item] = &[
    F(lon_28(Longitude)),
    F(lat_27(Latitude)),
    F(uint(Altitude, 11).na(2047).scaled(10.0)),
    F(code(SensorOwner, 4, CodeTable::SensorOwner)),
    F(uint(DataTimeout, 3)),
    Spare(12),
];

const STATION_ID: &[Item] = &[F(text(StationName, 84)), Spare(1)];

const WIND_REPORT: &[Item] = &[
    F(WIND_SPEED),
    F(WIND_GUST),
    F(WIND_DIRECTION),
    F(WIND_GUST_DIRECTION),
    F(SENSOR_DATA_TYPE),
    F(uint(ForecastWindSpeed, 7).na(127)),
    F(uint(ForecastWindGust, 7).na(127)),
    F(uint(ForecastWindDirection, 9).na_from(361)),
    F(day(ForecastDay)),
    F(hour(ForecastHour)),
    F(minute(ForecastMinute)),
    F(uint(ForecastDuration, 8).na(255)),
    Spare(3),
];

const WATER_LEVEL_REPORT: &[Item] = &[
    F(uint(WaterLevelType, 1)),
    F(int(WaterLevel, 16).na(-32_768).scaled(100.0)),
    F(uint(WaterLevelTrend, 2).na(3)),
    F(code(VerticalDatum, 5, CodeTable::VerticalDatum)),
    F(SENSOR_DATA_TYPE),
    F(uint(ForecastType, 1)),
    F(int(ForecastWaterLevel, 16).na(-32_768).scaled(100.0)),
    F(day(ForecastDay)),
    F(hour(ForecastHour)),
    F(minute(ForecastMinute)),
    F(uint(ForecastDuration, 8).na(255)),
    Spare(17),
];

const CURRENT_2D_REPORT: &[Item] = &[
    F(uint(CurrentSpeed1, 8).na(255).scaled(10.0)),
    F(uint(CurrentDirection1, 9).na_from(360)),
    F(uint(CurrentDepth1, 9).na(511)),
    F(uint(CurrentSpeed2, 8).na(255).scaled(10.0)),
    F(uint(CurrentDirection2, 9).na_from(360)),
    F(uint(CurrentDepth2, 9).na(511)),
    F(uint(CurrentSpeed3, 8).na(255).scaled(10.0)),
    F(uint(CurrentDirection3, 9).na_from(360)),
    F(uint(CurrentDepth3, 9).na(511)),
    F(SENSOR_DATA_TYPE),
    Spare(4),
];

const CURRENT_3D_REPORT: &[Item] = &[
    F(uint(CurrentNorth1, 8).na(255).scaled(10.0)),
    F(uint(CurrentEast1, 8).na(255).scaled(10.0)),
    F(uint(CurrentUp1, 8).na(255).scaled(10.0)),
    F(uint(CurrentDepth1, 9).na(511)),
    F(uint(CurrentNorth2, 8).na(255).scaled(10.0)),
    F(uint(CurrentEast2, 8).na(255).scaled(10.0)),
    F(uint(CurrentUp2, 8).na(255).scaled(10.0)),
    F(uint(CurrentDepth2, 9).na(511)),
    F(SENSOR_DATA_TYPE),
    Spare(16),
];

const HORIZONTAL_CURRENT_REPORT: &[Item] = &[
    F(uint(CurrentBearing1, 9).na_from(360)),
    F(uint(CurrentDistance1, 7).na(127)),
    F(uint(CurrentSpeed1, 8).na(255).scaled(10.0)),
    F(uint(CurrentDirection1, 9).na_from(360)),
    F(uint(CurrentDepth1, 9).na(511)),
    F(uint(CurrentBearing2, 9).na_from(360)),
    F(uint(CurrentDistance2, 7).na(127)),
    F(uint(CurrentSpeed2, 8).na(255).scaled(10.0)),
    F(uint(CurrentDirection2, 9).na_from(360)),
    F(uint(CurrentDepth2, 9).na(511)),
    Spare(1),
];

const SEA_STATE_REPORT: &[Item] = &[
    F(SWELL_HEIGHT),
    F(SWELL_PERIOD),
    F(SWELL_DIRECTION),
    F(code(SeaState, 4, CodeTable::Beaufort)),
    F(code(SwellSensorType, 3, CodeTable::SensorData)),
    F(WATER_TEMPERATURE),
    F(uint(TemperatureDepth, 7).na(127).scaled(10.0)),
    F(code(WaterSensorType, 3, CodeTable::SensorData)),
    F(WAVE_HEIGHT),
    F(WAVE_PERIOD),
    F(WAVE_DIRECTION),
    F(code(WaveSensorType, 3, CodeTable::SensorData)),
    F(SALINITY),
];

const SALINITY_REPORT: &[Item] = &[
    F(WATER_TEMPERATURE),
    F(uint(Conductivity, 10).na(1023).scaled(100.0)),
    F(uint(WaterPressure, 16).na(65_535).scaled(10.0)),
    F(SALINITY),
    F(uint(SalinityType, 2)),
    F(SENSOR_DATA_TYPE),
    Spare(35),
];

const WEATHER_SENSOR_REPORT: &[Item] = &[
    F(AIR_TEMPERATURE),
    F(SENSOR_DATA_TYPE),
    F(code(Precipitation, 2, CodeTable::Precipitation)),
    F(VISIBILITY),
    F(DEW_POINT),
    F(code(DewPointType, 3, CodeTable::SensorData)),
    F(AIR_PRESSURE),
    F(uint(PressureTendency, 2).na(3)),
    F(code(PressureSensorType, 3, CodeTable::SensorData)),
    F(SALINITY),
    Spare(25),
];

const AIR_GAP_REPORT: &[Item] = &[
    F(uint(AirDraught, 13).na(0).scaled(10.0)),
    F(uint(AirGap, 13).na(0).scaled(10.0)),
    F(uint(AirGapTrend, 2).na(3)),
    F(uint(ForecastAirGap, 13).na(0).scaled(10.0)),
    F(day(ForecastDay)),
    F(hour(ForecastHour)),
    F(minute(ForecastMinute)),
    Spare(28),
];

// Each sensor report is a 27-bit header followed by an 85-bit payload whose
// shape depends on the report type at the start of the header.
const SENSOR_REPORT: &[Item] = &[
    F(code(SensorReportType, 4, CodeTable::SensorReport)),
    F(day(Day)),
    F(hour(Hour)),
    F(minute(Minute)),
    F(uint(SiteId, 7)),
    Switch {
        selector: Selector::Peek {
            at: Position::Relative(-27),
            width: 4,
        },
        cases: &[
            (0, SITE_LOCATION),
            (1, STATION_ID),
            (2, WIND_REPORT),
            (3, WATER_LEVEL_REPORT),
            (4, CURRENT_2D_REPORT),
            (5, CURRENT_3D_REPORT),
            (6, HORIZONTAL_CURRENT_REPORT),
            (7, SEA_STATE_REPORT),
            (8, SALINITY_REPORT),
            (9, WEATHER_SENSOR_REPORT),
            (10, AIR_GAP_REPORT),
        ],
        default: &[F(binary(SensorData, 85))],
    },
];

const ENVIRONMENTAL: &[Item] = &[Repeat {
    items: SENSOR_REPORT,
}];

const METEO_HYDRO_289: &[Item] = &[
    F(lon_25(Longitude)),
    F(lat_24(Latitude)),
    F(flag(PositionAccuracy)),
    F(day(Day)),
    F(hour(Hour)),
    F(minute(Minute)),
    F(WIND_SPEED),
    F(WIND_GUST),
    F(WIND_DIRECTION),
    F(WIND_GUST_DIRECTION),
    F(AIR_TEMPERATURE),
    F(HUMIDITY),
    F(DEW_POINT),
    F(AIR_PRESSURE),
    F(uint(PressureTendency, 2).na(3)),
    F(flag(VisibilityGreater)),
    F(VISIBILITY),
    F(uint(WaterLevel, 12).na(4001).linear(100.0, -10.0)),
    F(uint(WaterLevelTrend, 2).na(3)),
    F(uint(SurfaceCurrentSpeed, 8).na(255).scaled(10.0)),
    F(uint(SurfaceCurrentDirection, 9).na_from(361)),
    F(uint(CurrentSpeed2, 8).na(255).scaled(10.0)),
    F(uint(CurrentDirection2, 9).na_from(361)),
    F(uint(CurrentDepth2, 5).na(31).scaled(10.0)),
    F(uint(CurrentSpeed3, 8).na(255).scaled(10.0)),
    F(uint(CurrentDirection3, 9).na_from(361)),
    F(uint(CurrentDepth3, 5).na(31).scaled(10.0)),
    F(WAVE_HEIGHT),
    F(WAVE_PERIOD),
    F(WAVE_DIRECTION),
    F(SWELL_HEIGHT),
    F(SWELL_PERIOD),
    F(SWELL_DIRECTION),
    F(code(SeaState, 4, CodeTable::Beaufort)),
    F(WATER_TEMPERATURE),
    F(code(Precipitation, 3, CodeTable::Precipitation)),
    F(SALINITY),
    F(uint(Ice, 2).na(3)),
    Spare(10),
];

static APPLICATIONS: &[Application] = &[
    Application {
        message_type: 6,
        dac: 1,
        fid: 12,
        name: "Dangerous cargo indication",
        items: DANGEROUS_CARGO,
    },
    Application {
        message_type: 6,
        dac: 1,
        fid: 14,
        name: "Tidal window",
        items: TIDAL_WINDOW,
    },
    Application {
        message_type: 6,
        dac: 1,
        fid: 16,
        name: "Number of persons on board",
        items: PERSONS_ON_BOARD,
    },
    Application {
        message_type: 6,
        dac: 1,
        fid: 18,
        name: "Clearance time to enter port",
        items: CLEARANCE_TIME,
    },
    Application {
        message_type: 6,
        dac: 1,
        fid: 20,
        name: "Berthing data",
        items: BERTHING_DATA,
    },
    Application {
        message_type: 6,
        dac: 1,
        fid: 23,
        name: "Area notice (addressed)",
        items: AREA_NOTICE,
    },
    Application {
        message_type: 6,
        dac: 1,
        fid: 28,
        name: "Route information (addressed)",
        items: ROUTE_INFORMATION,
    },
    Application {
        message_type: 6,
        dac: 1,
        fid: 30,
        name: "Text description (addressed)",
        items: ADDRESSED_TEXT,
    },
    Application {
        message_type: 6,
        dac: 1,
        fid: 32,
        name: "Tidal window",
        items: TIDAL_WINDOW_289,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 11,
        name: "Meteorological and hydrological data",
        items: METEO_HYDRO_236,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 13,
        name: "Fairway closed",
        items: FAIRWAY_CLOSED,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 15,
        name: "Extended ship static and voyage related data",
        items: AIR_DRAUGHT,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 16,
        name: "Number of persons on board",
        items: PERSONS_ON_BOARD,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 17,
        name: "VTS-generated/synthetic targets",
        items: VTS_TARGETS,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 19,
        name: "Marine traffic signal",
        items: TRAFFIC_SIGNAL,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 21,
        name: "Weather observation report from ship",
        items: WEATHER_REPORT,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 22,
        name: "Area notice (broadcast)",
        items: AREA_NOTICE,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 24,
        name: "Extended ship static and voyage related data",
        items: EXTENDED_STATIC,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 26,
        name: "Environmental",
        items: ENVIRONMENTAL,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 27,
        name: "Route information (broadcast)",
        items: ROUTE_INFORMATION,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 29,
        name: "Text description (broadcast)",
        items: BROADCAST_TEXT,
    },
    Application {
        message_type: 8,
        dac: 1,
        fid: 31,
        name: "Meteorological and hydrological data",
        items: METEO_HYDRO_289,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{min_bits, Value};

    // Header bits of type 6 and type 8 messages up to and including the FID
    const ADDRESSED_HEADER: usize = 88;
    const BROADCAST_HEADER: usize = 56;

    fn total(message_type: u8, fid: u8) -> usize {
        let header = if message_type == 6 {
            ADDRESSED_HEADER
        } else {
            BROADCAST_HEADER
        };
        header + min_bits(lookup(message_type, 1, fid).unwrap().items)
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(8, 1, 11).unwrap().name, "Meteorological and hydrological data");
        assert!(lookup(8, 1, 12).is_none());
        assert!(lookup(6, 366, 12).is_none());
        assert!(lookup(8, 1, 23).is_none());
    }

    #[test]
    fn test_fixed_application_lengths() {
        assert_eq!(total(6, 12), 360);
        assert_eq!(total(6, 18), 360);
        assert_eq!(total(6, 20), 360);
        assert_eq!(total(8, 11), 352);
        assert_eq!(total(8, 13), 472);
        assert_eq!(total(8, 19), 360);
        assert_eq!(total(8, 21), 360);
        assert_eq!(total(8, 24), 360);
    }

    #[test]
    fn test_repeated_group_sizes() {
        assert_eq!(min_bits(SUBAREA), 87);
        assert_eq!(min_bits(SENSOR_REPORT), 112);
        for (_, payload) in [
            (0, SITE_LOCATION),
            (1, STATION_ID),
            (2, WIND_REPORT),
            (3, WATER_LEVEL_REPORT),
            (4, CURRENT_2D_REPORT),
            (5, CURRENT_3D_REPORT),
            (6, HORIZONTAL_CURRENT_REPORT),
            (7, SEA_STATE_REPORT),
            (8, SALINITY_REPORT),
            (9, WEATHER_SENSOR_REPORT),
            (10, AIR_GAP_REPORT),
        ] {
            assert_eq!(min_bits(payload), 85);
        }
        for shape in [CIRCLE, RECTANGLE, SECTOR, POLYLINE, AREA_TEXT] {
            assert_eq!(min_bits(shape), 84);
        }
    }

    #[test]
    fn test_weather_sentinels() {
        for (spec, sentinel) in [
            (AIR_TEMPERATURE, 1201),
            (DEW_POINT, 1023),
            (AIR_PRESSURE, 403),
            (VISIBILITY, 250),
            (WATER_TEMPERATURE, 601),
        ] {
            assert!(spec.sentinel.matches(sentinel), "{}", spec.field);
            assert!(spec.sentinel.matches(sentinel + 1), "{}", spec.field);
            assert!(!spec.sentinel.matches(sentinel - 1), "{}", spec.field);
        }
        assert!(AIR_TEMPERATURE.sentinel.matches(2047));
    }

    #[test]
    fn test_weather_conversions() {
        assert_eq!(AIR_PRESSURE.convert(213), Value::Int(1013));
        assert_eq!(AIR_PRESSURE.convert(402), Value::Int(1202));
        assert_eq!(AIR_TEMPERATURE.convert(1200), Value::Float(60.0));
        assert_eq!(WATER_TEMPERATURE.convert(600), Value::Float(50.0));
        assert_eq!(VISIBILITY.convert(249), Value::Float(24.9));
        let dew = DEW_POINT.convert(1022).as_f64().unwrap();
        assert!((dew - 82.2).abs() < 1e-9);

        let wmo_pressure = WMO_WEATHER_OBSERVATION
            .iter()
            .find_map(|item| match item {
                Item::Field(spec) if spec.field == AirPressure => Some(*spec),
                _ => None,
            })
            .unwrap();
        assert_eq!(wmo_pressure.convert(1130), Value::Float(1013.0));
    }

    #[test]
    fn test_identifiers_are_unique() {
        for (i, a) in all().iter().enumerate() {
            for b in &all()[i + 1..] {
                assert!(
                    (a.message_type, a.dac, a.fid) != (b.message_type, b.dac, b.fid),
                    "{} duplicated",
                    a.name
                );
            }
        }
    }
}
