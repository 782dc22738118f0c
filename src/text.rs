//! Six-bit text codec and lazily materialized field references

use crate::bits::BitString;
use crate::error::{ParseError, Result};

/// Six-bit ASCII subset used by AIS text fields
pub struct SixBitText;

impl SixBitText {
    /// Character for a six-bit code; `None` for the `@` terminator (code 0)
    pub fn decode_char(code: u8) -> Option<char> {
        match code & 0x3F {
            0 => None,
            c @ 1..=31 => Some((b'@' + c) as char),
            c => Some(c as char),
        }
    }

    /// Six-bit code for a character
    pub fn encode_char(c: char) -> Result<u8> {
        let c = c.to_ascii_uppercase();
        match c {
            '@'..='_' => Ok(c as u8 - b'@'),
            ' '..='?' => Ok(c as u8),
            _ => Err(ParseError::invalid_text(format!(
                "{:?} has no six-bit code",
                c
            ))),
        }
    }

    /// Decode `len` bits starting at `offset`
    ///
    /// Decoding stops at the first `@`; trailing spaces are trimmed. A
    /// trailing partial character is ignored.
    pub fn decode(bits: &BitString, offset: usize, len: usize) -> String {
        let mut text = String::with_capacity(len / 6);
        let end = offset + len;
        let mut pos = offset;
        while pos + 6 <= end {
            let Some(code) = bits.bits(pos, 6) else { break };
            match Self::decode_char(code as u8) {
                Some(c) => text.push(c),
                None => break,
            }
            pos += 6;
        }
        text.truncate(text.trim_end().len());
        text
    }

    /// Append `text` as six-bit characters, `@`-padded to `chars` characters
    pub fn encode_into(text: &str, chars: usize, bits: &mut BitString) -> Result<()> {
        let count = text.chars().count();
        if count > chars {
            return Err(ParseError::invalid_text(format!(
                "{:?} longer than {} characters",
                text, chars
            )));
        }
        for c in text.chars() {
            bits.push_bits(Self::encode_char(c)? as u64, 6);
        }
        for _ in count..chars {
            bits.push_bits(0, 6);
        }
        Ok(())
    }
}

/// A text or binary field left in place inside the assembled bits
///
/// Observers that want the contents materialize them with [`FieldRef::to_text`]
/// or [`FieldRef::to_bytes`] while handling the field call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef<'a> {
    bits: &'a BitString,
    offset: usize,
    len: usize,
}

impl<'a> FieldRef<'a> {
    /// Reference `len` bits at `offset`
    pub fn new(bits: &'a BitString, offset: usize, len: usize) -> Self {
        FieldRef { bits, offset, len }
    }

    /// Bit offset of the field within the message
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Field width in bits
    pub fn len(&self) -> usize {
        self.len
    }

    /// Zero-width field
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Decode as six-bit text
    pub fn to_text(&self) -> String {
        SixBitText::decode(self.bits, self.offset, self.len)
    }

    /// Copy the bits out, packed MSB first, last byte zero-filled
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity((self.len + 7) / 8);
        let mut pos = self.offset;
        let end = self.offset + self.len;
        while pos < end {
            let width = (end - pos).min(8) as u8;
            let byte = self.bits.bits(pos, width).unwrap_or(0) << (8 - width);
            out.push(byte as u8);
            pos += 8;
        }
        out
    }
}

impl std::fmt::Display for FieldRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}
