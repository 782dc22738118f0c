//! Sink for decoded messages

use crate::field::{Field, Value};

/// Receives decoded fields and message lifecycle calls
///
/// Every `begin` is followed by exactly one `commit` or `rollback`. Field
/// calls arrive between them in layout order; a field whose raw value is a
/// "not available" sentinel produces no call. Fields delivered before a
/// rollback are not retracted, so observers that need atomic messages buffer
/// until `commit`.
///
/// Text and binary values borrow the assembled message bits and must be
/// materialized during the `field` call if they are needed later.
pub trait AisObserver {
    /// A new fragment train started
    fn begin(&mut self) {}

    /// One decoded field
    fn field(&mut self, field: Field, value: Value<'_>);

    /// The message decoded completely
    fn commit(&mut self, _reason: &str) {}

    /// The message was abandoned
    fn rollback(&mut self, _reason: &str) {}
}

impl<T: AisObserver + ?Sized> AisObserver for &mut T {
    fn begin(&mut self) {
        (**self).begin()
    }

    fn field(&mut self, field: Field, value: Value<'_>) {
        (**self).field(field, value)
    }

    fn commit(&mut self, reason: &str) {
        (**self).commit(reason)
    }

    fn rollback(&mut self, reason: &str) {
        (**self).rollback(reason)
    }
}

impl<T: AisObserver + ?Sized> AisObserver for Box<T> {
    fn begin(&mut self) {
        (**self).begin()
    }

    fn field(&mut self, field: Field, value: Value<'_>) {
        (**self).field(field, value)
    }

    fn commit(&mut self, reason: &str) {
        (**self).commit(reason)
    }

    fn rollback(&mut self, reason: &str) {
        (**self).rollback(reason)
    }
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl AisObserver for NullObserver {
    fn field(&mut self, _field: Field, _value: Value<'_>) {}
}

#[cfg(test)]
pub(crate) mod recorder {
    //! Observer that records every call, plus helpers for building payloads

    use super::AisObserver;
    use crate::bits::BitString;
    use crate::encoding::ArmorEncoder;
    use crate::field::{Field, Value};
    use crate::text::SixBitText;

    /// A recorded value with text materialized
    #[derive(Debug, Clone, PartialEq)]
    pub enum Recorded {
        Int(i64),
        Float(f64),
        Flag(bool),
        Code(u16, Option<&'static str>),
        Text(String),
        Binary(Vec<u8>),
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Event {
        Begin,
        Field(Field, Recorded),
        Commit(String),
        Rollback(String),
    }

    #[derive(Debug, Default)]
    pub struct Recorder {
        pub events: Vec<Event>,
    }

    impl Recorder {
        pub fn fields(&self) -> Vec<(Field, Recorded)> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Field(f, v) => Some((*f, v.clone())),
                    _ => None,
                })
                .collect()
        }

        pub fn field_names(&self) -> Vec<Field> {
            self.fields().into_iter().map(|(f, _)| f).collect()
        }

        pub fn get(&self, field: Field) -> Option<Recorded> {
            self.fields()
                .into_iter()
                .find(|(f, _)| *f == field)
                .map(|(_, v)| v)
        }

        pub fn count(&self, wanted: fn(&Event) -> bool) -> usize {
            self.events.iter().filter(|e| wanted(e)).count()
        }

        pub fn begins(&self) -> usize {
            self.count(|e| matches!(e, Event::Begin))
        }

        pub fn commits(&self) -> usize {
            self.count(|e| matches!(e, Event::Commit(_)))
        }

        pub fn rollbacks(&self) -> usize {
            self.count(|e| matches!(e, Event::Rollback(_)))
        }

        pub fn last_rollback(&self) -> Option<&str> {
            self.events.iter().rev().find_map(|e| match e {
                Event::Rollback(r) => Some(r.as_str()),
                _ => None,
            })
        }
    }

    impl AisObserver for Recorder {
        fn begin(&mut self) {
            self.events.push(Event::Begin);
        }

        fn field(&mut self, field: Field, value: Value<'_>) {
            let recorded = match value {
                Value::Int(v) => Recorded::Int(v),
                Value::Float(v) => Recorded::Float(v),
                Value::Flag(v) => Recorded::Flag(v),
                Value::Code(c) => Recorded::Code(c.index, c.description()),
                Value::Text(r) => Recorded::Text(r.to_text()),
                Value::Binary(r) => Recorded::Binary(r.to_bytes()),
            };
            self.events.push(Event::Field(field, recorded));
        }

        fn commit(&mut self, reason: &str) {
            self.events.push(Event::Commit(reason.to_string()));
        }

        fn rollback(&mut self, reason: &str) {
            self.events.push(Event::Rollback(reason.to_string()));
        }
    }

    /// Fluent payload builder over [`BitString`]
    #[derive(Debug, Default)]
    pub struct Payload {
        pub bits: BitString,
    }

    impl Payload {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn header(message_type: u8, mmsi: u32) -> Self {
            Self::new().uint(message_type as u64, 6).uint(0, 2).uint(mmsi as u64, 30)
        }

        pub fn uint(mut self, value: u64, width: u8) -> Self {
            self.bits.push_bits(value, width);
            self
        }

        pub fn int(mut self, value: i64, width: u8) -> Self {
            self.bits.push_signed(value, width);
            self
        }

        pub fn text(mut self, value: &str, chars: usize) -> Self {
            SixBitText::encode_into(value, chars, &mut self.bits).unwrap();
            self
        }

        pub fn len(&self) -> usize {
            self.bits.len()
        }

        pub fn armor(&self) -> (String, u8) {
            ArmorEncoder::encode(&self.bits)
        }
    }

    /// Class A position report for MMSI 366053209 with every field available
    pub fn position_report() -> Payload {
        Payload::header(1, 366_053_209)
            .uint(0, 4) // under way using engine
            .int(-20, 8)
            .uint(123, 10)
            .uint(1, 1)
            .int(-73_290_000, 28)
            .int(22_800_000, 27)
            .uint(2_195, 12)
            .uint(219, 9)
            .uint(33, 6)
            .uint(0, 2)
            .uint(0, 3)
            .uint(0, 1)
            .uint(0x2_4A4B, 19)
    }
}
