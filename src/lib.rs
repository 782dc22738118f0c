//! # AIS Payload Parser
//!
//! Decodes maritime Automatic Identification System messages carried in the
//! armored payloads of NMEA `!AIVDM`/`!AIVDO` sentences.
//!
//! The sentence layer (talker, checksum, field splitting) is left to the
//! caller, which hands each sentence's fragment header, payload and checksum
//! verdict to a [`Parser`]. This library provides:
//!
//! - Six-bit payload armoring and text codecs
//! - Reassembly of multi-sentence fragment trains with commit/rollback
//! - Field layouts for message types 1-24 and 27, plus the international
//!   binary applications of types 6 and 8
//! - Delivery of decoded fields to an [`AisObserver`]
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```
//! use ais_parser::{AisObserver, Channel, Field, Outcome, Parser, Value};
//!
//! #[derive(Default)]
//! struct Positions(Vec<(Field, f64)>);
//!
//! impl AisObserver for Positions {
//!     fn field(&mut self, field: Field, value: Value<'_>) {
//!         if matches!(field, Field::Longitude | Field::Latitude) {
//!             self.0.push((field, value.as_f64().unwrap_or_default()));
//!         }
//!     }
//! }
//!
//! let mut parser = Parser::new(Positions::default());
//! parser.begin_fragment(1, 1, None, Channel::B);
//! parser.payload("177KQJ5000G?tO`K>RA1wUbN0TKH", 0);
//! let outcome = parser.end_fragment(true, "checksum ok");
//!
//! assert!(matches!(outcome, Outcome::Committed(_)));
//! assert_eq!(parser.observer().0.len(), 2);
//! ```

pub mod applications;
pub mod bits;
pub mod codes;
pub mod core;
pub mod encoding;
pub mod engine;
pub mod error;
pub mod field;
pub mod layouts;
pub mod message;
pub mod observer;
pub mod parser;
pub mod protocol;
pub mod text;

pub use bits::{BitCursor, BitString, CommState};
pub use codes::{Code, CodeTable};
pub use core::{Channel, FragmentHeader, SentenceFragment};
pub use encoding::{ArmorDecoder, ArmorEncoder};
pub use engine::DecodeOptions;
pub use error::{ParseError, Result};
pub use field::{Field, Value};
pub use message::{decode, MessageType};
pub use observer::{AisObserver, NullObserver};
pub use parser::{Outcome, Parser, ParserBuilder, Transaction};
pub use protocol::{ChannelStats, Router, RouterBuilder};
pub use text::{FieldRef, SixBitText};

/// ITU-R M.1371 constants
pub mod itu {
    /// Payload bits carried by one armored character
    pub const BITS_PER_CHARACTER: usize = 6;

    /// Width of the message type tag
    pub const TYPE_TAG_BITS: u8 = 6;

    /// Highest assigned message type
    pub const MAX_MESSAGE_TYPE: u8 = 27;

    /// Longest fragment train a parser accepts by default
    pub const DEFAULT_MAX_FRAGMENTS: u8 = 9;

    /// Raw longitude meaning "not available" (181 degrees in 1/10000 minute)
    pub const LONGITUDE_NOT_AVAILABLE: i64 = 0x6791AC0;

    /// Raw latitude meaning "not available" (91 degrees in 1/10000 minute)
    pub const LATITUDE_NOT_AVAILABLE: i64 = 0x3412140;
}
