//! Layout interpreter
//!
//! Walks a static layout against a bit cursor, delivering each available
//! field to the observer as it is decoded.

use crate::bits::BitCursor;
use crate::error::{ParseError, Result};
use crate::field::{min_bits, Encoding, FieldSpec, Item, Position, Selector, Value, Width};
use crate::observer::AisObserver;
use crate::text::FieldRef;

/// Decode-time options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Suppress converted values outside their physical range instead of
    /// delivering them with a warning
    pub range_checks: bool,
}

/// Layout interpreter bound to one observer
pub struct Engine<'o, O: AisObserver + ?Sized> {
    observer: &'o mut O,
    options: DecodeOptions,
}

impl<'o, O: AisObserver + ?Sized> Engine<'o, O> {
    /// Create an engine delivering to `observer`
    pub fn new(observer: &'o mut O, options: DecodeOptions) -> Self {
        Engine { observer, options }
    }

    /// Decode `items` in order
    ///
    /// Fields delivered before an error are not retracted.
    pub fn run(&mut self, cursor: &mut BitCursor<'_>, items: &[Item]) -> Result<()> {
        for item in items {
            self.item(cursor, item)?;
        }
        Ok(())
    }

    fn item(&mut self, cursor: &mut BitCursor<'_>, item: &Item) -> Result<()> {
        match item {
            Item::Field(spec) => {
                self.field(cursor, spec)?;
            }
            Item::Spare(n) => cursor.skip_saturating(*n as usize),
            Item::Optional { items } => {
                if cursor.remaining() >= min_bits(items) {
                    self.run(cursor, items)?;
                }
            }
            Item::Repeat { items } => {
                let min = min_bits(items);
                // A zero-width group would never exhaust the cursor
                if min == 0 {
                    return Ok(());
                }
                while cursor.remaining() >= min {
                    self.run(cursor, items)?;
                }
            }
            Item::Switch {
                selector,
                cases,
                default,
            } => {
                let key = self.select(cursor, selector)?;
                let branch = cases
                    .iter()
                    .find(|(value, _)| *value == key)
                    .map(|(_, items)| *items)
                    .unwrap_or(default);
                self.run(cursor, branch)?;
            }
        }
        Ok(())
    }

    fn select(&mut self, cursor: &mut BitCursor<'_>, selector: &Selector) -> Result<u64> {
        match *selector {
            Selector::Field(ref spec) => Ok(self.field(cursor, spec)? as u64),
            Selector::Peek { at, width } => {
                let position = match at {
                    Position::Absolute(p) => Some(p),
                    Position::Relative(d) => cursor.position().checked_add_signed(d),
                };
                position
                    .and_then(|p| cursor.peek_at(p, width))
                    .ok_or_else(|| {
                        ParseError::truncated(format!(
                            "selector at {:?} lies outside the {}-bit message",
                            at,
                            cursor.bits().len()
                        ))
                    })
            }
        }
    }

    /// Decode one field; returns its raw integer for use as a selector
    fn field(&mut self, cursor: &mut BitCursor<'_>, spec: &FieldSpec) -> Result<i64> {
        let width = spec.width.min() as u8;
        let raw = match spec.encoding {
            Encoding::Text | Encoding::Binary => {
                self.reference(cursor, spec)?;
                return Ok(0);
            }
            Encoding::Signed => cursor.read_signed(width),
            Encoding::Unsigned | Encoding::Enum(_) => cursor.read_unsigned(width).map(|v| v as i64),
        }
        .map_err(|_| short(cursor, spec, width as usize))?;

        if spec.sentinel.matches(raw) {
            log::trace!("{} not available", spec.field);
            return Ok(raw);
        }

        let value = spec.convert(raw);
        if spec.out_of_range(&value) {
            if self.options.range_checks {
                log::debug!("{} = {} out of range, suppressed", spec.field, value);
                return Ok(raw);
            }
            log::warn!("{} = {} out of range", spec.field, value);
        }
        self.observer.field(spec.field, value);
        Ok(raw)
    }

    fn reference(&mut self, cursor: &mut BitCursor<'_>, spec: &FieldSpec) -> Result<()> {
        let remaining = cursor.remaining();
        let len = match spec.width {
            Width::Fixed(n) => n as usize,
            Width::Variable { min, max } => {
                let mut len = remaining.min(max as usize);
                if spec.encoding == Encoding::Text {
                    len -= len % 6;
                }
                if len < min as usize {
                    return Err(short(cursor, spec, min as usize));
                }
                len
            }
        };
        if len > remaining {
            return Err(short(cursor, spec, len));
        }
        if len == 0 {
            return Ok(());
        }

        let offset = cursor.position();
        cursor.skip(len)?;
        let field = FieldRef::new(cursor.bits(), offset, len);
        let value = match spec.encoding {
            Encoding::Text => Value::Text(field),
            _ => Value::Binary(field),
        };
        self.observer.field(spec.field, value);
        Ok(())
    }
}

fn short(cursor: &BitCursor<'_>, spec: &FieldSpec, needed: usize) -> ParseError {
    ParseError::truncated(format!(
        "{} needs {} bits at offset {}, {} remain",
        spec.field,
        needed,
        cursor.position(),
        cursor.remaining()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CodeTable;
    use crate::field::Field::*;
    use crate::field::Item::Field as F;
    use crate::field::{binary_var, code, int, text, text_var, uint};
    use crate::observer::recorder::{Payload, Recorded, Recorder};

    fn decode(payload: &Payload, items: &[Item], options: DecodeOptions) -> (Recorder, Result<()>) {
        let mut recorder = Recorder::default();
        let mut cursor = payload.bits.cursor();
        let result = Engine::new(&mut recorder, options).run(&mut cursor, items);
        (recorder, result)
    }

    #[test]
    fn test_sentinel_suppresses_field() {
        static HEADING: &[Item] = &[F(uint(TrueHeading, 9).na(511))];

        let (rec, result) = decode(&Payload::new().uint(511, 9), HEADING, DecodeOptions::default());
        assert!(result.is_ok());
        assert!(rec.fields().is_empty());

        for raw in [510, 359] {
            let (rec, _) = decode(&Payload::new().uint(raw, 9), HEADING, DecodeOptions::default());
            assert_eq!(rec.get(TrueHeading), Some(Recorded::Int(raw as i64)));
        }
    }

    #[test]
    fn test_range_checks() {
        static COURSE: &[Item] = &[F(uint(CourseOverGround, 12)
            .na(3600)
            .scaled(10.0)
            .within(0.0, 360.0))];
        let payload = Payload::new().uint(3601, 12);

        let (rec, _) = decode(&payload, COURSE, DecodeOptions::default());
        assert_eq!(rec.get(CourseOverGround), Some(Recorded::Float(360.1)));

        let strict = DecodeOptions { range_checks: true };
        let (rec, result) = decode(&payload, COURSE, strict);
        assert!(result.is_ok());
        assert!(rec.fields().is_empty());
    }

    #[test]
    fn test_truncated_field() {
        static WIDE: &[Item] = &[F(uint(Mmsi, 30)), F(int(Longitude, 28))];
        let (rec, result) = decode(&Payload::new().uint(1, 30).uint(0, 20), WIDE, DecodeOptions::default());
        assert!(matches!(result, Err(ParseError::Truncated(_))));
        assert_eq!(rec.field_names(), vec![Mmsi]);
    }

    #[test]
    fn test_unknown_code_is_not_fatal() {
        static STATUS: &[Item] = &[F(code(ManeuverIndicator, 2, CodeTable::ManeuverIndicator))];
        let (rec, result) = decode(&Payload::new().uint(3, 2), STATUS, DecodeOptions::default());
        assert!(result.is_ok());
        assert_eq!(rec.get(ManeuverIndicator), Some(Recorded::Code(3, None)));
    }

    #[test]
    fn test_variable_text_is_floored_to_characters() {
        static TEXT: &[Item] = &[F(text_var(SafetyText, 0, 968))];
        let payload = Payload::new().text("MAYDAY", 6).uint(0b11, 2);
        let (rec, result) = decode(&payload, TEXT, DecodeOptions::default());
        assert!(result.is_ok());
        assert_eq!(rec.get(SafetyText), Some(Recorded::Text("MAYDAY".into())));

        let (rec, _) = decode(&Payload::new().uint(0, 4), TEXT, DecodeOptions::default());
        assert!(rec.fields().is_empty());
    }

    #[test]
    fn test_variable_binary_takes_remaining_bits() {
        static DATA: &[Item] = &[Item::Spare(2), F(binary_var(DgnssData, 0, 736))];
        let (rec, _) = decode(&Payload::new().uint(0, 2).uint(0xBEEF, 16), DATA, DecodeOptions::default());
        assert_eq!(rec.get(DgnssData), Some(Recorded::Binary(vec![0xBE, 0xEF])));
    }

    #[test]
    fn test_trailing_spare_may_run_short() {
        static LAYOUT: &[Item] = &[F(uint(Mmsi, 30)), Item::Spare(8)];
        let (rec, result) = decode(&Payload::new().uint(7, 30).uint(0, 2), LAYOUT, DecodeOptions::default());
        assert!(result.is_ok());
        assert_eq!(rec.get(Mmsi), Some(Recorded::Int(7)));
    }

    #[test]
    fn test_optional_and_repeat() {
        static LAYOUT: &[Item] = &[
            F(uint(Mmsi1, 30)),
            Item::Optional {
                items: &[F(uint(Mmsi2, 30))],
            },
            Item::Repeat {
                items: &[F(uint(PointBearing, 10)), F(uint(PointDistance, 10))],
            },
        ];

        let (rec, _) = decode(&Payload::new().uint(1, 30).uint(0, 12), LAYOUT, DecodeOptions::default());
        assert_eq!(rec.field_names(), vec![Mmsi1]);

        let payload = Payload::new()
            .uint(1, 30)
            .uint(2, 30)
            .uint(90, 10)
            .uint(5, 10)
            .uint(180, 10)
            .uint(6, 10)
            .uint(0, 7);
        let (rec, result) = decode(&payload, LAYOUT, DecodeOptions::default());
        assert!(result.is_ok());
        assert_eq!(
            rec.field_names(),
            vec![Mmsi1, Mmsi2, PointBearing, PointDistance, PointBearing, PointDistance]
        );
    }

    #[test]
    fn test_switch_on_field_and_peek() {
        static BY_FIELD: &[Item] = &[Item::Switch {
            selector: Selector::Field(uint(PartNumber, 2)),
            cases: &[(0, &[F(uint(ToBow, 9))]), (1, &[F(uint(ToStern, 9))])],
            default: &[],
        }];
        let (rec, _) = decode(&Payload::new().uint(1, 2).uint(12, 9), BY_FIELD, DecodeOptions::default());
        assert_eq!(
            rec.fields(),
            vec![(PartNumber, Recorded::Int(1)), (ToStern, Recorded::Int(12))]
        );

        static BY_PEEK: &[Item] = &[
            F(uint(SiteId, 4)),
            Item::Switch {
                selector: Selector::Peek {
                    at: Position::Relative(-4),
                    width: 4,
                },
                cases: &[(9, &[F(uint(ToPort, 6))])],
                default: &[F(uint(ToStarboard, 6))],
            },
        ];
        let (rec, _) = decode(&Payload::new().uint(9, 4).uint(3, 6), BY_PEEK, DecodeOptions::default());
        assert_eq!(rec.field_names(), vec![SiteId, ToPort]);
        let (rec, _) = decode(&Payload::new().uint(2, 4).uint(3, 6), BY_PEEK, DecodeOptions::default());
        assert_eq!(rec.field_names(), vec![SiteId, ToStarboard]);
    }

    #[test]
    fn test_peek_past_end_is_truncation() {
        static LAYOUT: &[Item] = &[Item::Switch {
            selector: Selector::Peek {
                at: Position::Absolute(100),
                width: 1,
            },
            cases: &[],
            default: &[],
        }];
        let (_, result) = decode(&Payload::new().uint(0, 8), LAYOUT, DecodeOptions::default());
        assert!(matches!(result, Err(ParseError::Truncated(_))));
    }

    #[test]
    fn test_fixed_text() {
        static NAME: &[Item] = &[F(text(ShipName, 120))];
        let (rec, _) = decode(&Payload::new().text("EVER GIVEN", 20), NAME, DecodeOptions::default());
        assert_eq!(rec.get(ShipName), Some(Recorded::Text("EVER GIVEN".into())));
    }
}
