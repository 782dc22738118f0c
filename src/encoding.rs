//! Six-bit payload armoring
//!
//! Each payload character carries six bits. Characters `'0'..='W'` map to
//! 0..=39 and `` '`'..='w' `` map to 40..=63.

use crate::bits::BitString;
use crate::error::{ParseError, Result};

/// Armor encoder for AIS payloads
pub struct ArmorEncoder;

impl ArmorEncoder {
    /// Armor a single six-bit value
    pub fn encode_sextet(value: u8) -> char {
        let v = value & 0x3F;
        let c = if v < 40 { v + b'0' } else { v + b'0' + 8 };
        c as char
    }

    /// Armor a bit string
    ///
    /// Returns the payload and the number of fill bits appended to reach a
    /// multiple of six.
    pub fn encode(bits: &BitString) -> (String, u8) {
        let pad = ((6 - bits.len() % 6) % 6) as u8;
        let mut payload = String::with_capacity((bits.len() + 5) / 6);
        let mut offset = 0;
        while offset < bits.len() {
            let width = (bits.len() - offset).min(6) as u8;
            let chunk = bits.bits(offset, width).unwrap_or(0) << (6 - width);
            payload.push(Self::encode_sextet(chunk as u8));
            offset += 6;
        }
        (payload, pad)
    }
}

/// Armor decoder for AIS payloads
pub struct ArmorDecoder;

impl ArmorDecoder {
    /// Strip armor from one payload character
    pub fn decode_char(c: char) -> Result<u8> {
        match c {
            '0'..='W' | '`'..='w' => {
                let mut v = c as u8 - b'0';
                if v > 40 {
                    v -= 8;
                }
                Ok(v)
            }
            _ => Err(ParseError::armor(format!(
                "character {:?} outside armoring bands",
                c
            ))),
        }
    }

    /// Strip armor from a payload and append its bits to `bits`
    ///
    /// On error `bits` may hold a partial payload; the caller discards it.
    pub fn decode_into(payload: &str, bits: &mut BitString) -> Result<()> {
        for c in payload.chars() {
            let v = Self::decode_char(c)?;
            bits.push_bits(v as u64, 6);
        }
        Ok(())
    }

    /// Strip armor from a payload into a new bit string
    pub fn decode(payload: &str) -> Result<BitString> {
        let mut bits = BitString::with_capacity(payload.len() * 6);
        Self::decode_into(payload, &mut bits)?;
        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_band_edges() -> Result<()> {
        assert_eq!(ArmorDecoder::decode_char('0')?, 0);
        assert_eq!(ArmorDecoder::decode_char('W')?, 39);
        assert_eq!(ArmorDecoder::decode_char('`')?, 40);
        assert_eq!(ArmorDecoder::decode_char('w')?, 63);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_gap() {
        for c in ['X', '_', '/', 'x', ' ', '!', 'é'] {
            assert!(matches!(
                ArmorDecoder::decode_char(c),
                Err(ParseError::ArmorSyntax(_))
            ));
        }
    }

    #[test]
    fn test_decode_payload() -> Result<()> {
        let bits = ArmorDecoder::decode("15")?;
        assert_eq!(bits.len(), 12);
        assert_eq!(bits.bits(0, 6), Some(1));
        assert_eq!(bits.bits(6, 6), Some(5));
        Ok(())
    }

    #[test]
    fn test_encode_pads_to_sextet() {
        let mut bits = BitString::new();
        bits.push_bits(1, 6);
        bits.push_bits(0b11, 2);
        let (payload, pad) = ArmorEncoder::encode(&bits);
        assert_eq!(payload, "1h");
        assert_eq!(pad, 4);
    }

    proptest! {
        #[test]
        fn prop_decode_is_pure(payload in "[0-W`-w]{0,40}") {
            let a = ArmorDecoder::decode(&payload).unwrap();
            let b = ArmorDecoder::decode(&payload).unwrap();
            prop_assert_eq!(a.len(), payload.len() * 6);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_encode_inverts_decode(payload in "[0-W`-w]{0,40}") {
            let bits = ArmorDecoder::decode(&payload).unwrap();
            let (encoded, pad) = ArmorEncoder::encode(&bits);
            prop_assert_eq!(pad, 0);
            prop_assert_eq!(encoded, payload);
        }

        #[test]
        fn prop_sextet_roundtrip(v in 0u8..64) {
            let c = ArmorEncoder::encode_sextet(v);
            prop_assert_eq!(ArmorDecoder::decode_char(c).unwrap(), v);
        }
    }
}
