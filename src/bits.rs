//! Bit buffer and cursor primitives
//!
//! Bits are stored packed, most significant bit first, in the order they come
//! off the armored payload. Bit 0 is the first bit of the message.

use crate::error::{ParseError, Result};
use bitfield::bitfield;

/// An ordered, growable sequence of bits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString {
    bytes: Vec<u8>,
    len: usize,
}

impl BitString {
    /// Create an empty bit string
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bit string with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        BitString {
            bytes: Vec::with_capacity((bits + 7) / 8),
            len: 0,
        }
    }

    /// Number of bits held
    pub fn len(&self) -> usize {
        self.len
    }

    /// No bits held
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all bits
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.len = 0;
    }

    /// Append a single bit
    pub fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `value`, most significant first
    ///
    /// Widths beyond 64 are padded with leading zero bits.
    pub fn push_bits(&mut self, value: u64, width: u8) {
        for i in (0..width).rev() {
            self.push_bit(i < 64 && (value >> i) & 1 != 0);
        }
    }

    /// Append a two's complement integer at the given width
    ///
    /// Widths beyond 64 are padded with copies of the sign bit.
    pub fn push_signed(&mut self, value: i64, width: u8) {
        let fill = width.saturating_sub(64);
        for _ in 0..fill {
            self.push_bit(value < 0);
        }
        let width = width - fill;
        let mask = if width >= 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        self.push_bits(value as u64 & mask, width);
    }

    /// Append all bits of another bit string
    pub fn extend_from(&mut self, other: &BitString) {
        for i in 0..other.len {
            self.push_bit(other.bit(i).unwrap_or(false));
        }
    }

    /// Shorten to `len` bits; no-op if already shorter
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        self.len = len;
        self.bytes.truncate((len + 7) / 8);
        if len % 8 != 0 {
            let last = self.bytes.len() - 1;
            self.bytes[last] &= 0xFFu8 << (8 - len % 8);
        }
    }

    /// Bit at position `index`
    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// `width` bits starting at `offset` as an unsigned integer
    pub fn bits(&self, offset: usize, width: u8) -> Option<u64> {
        if width > 64 || offset.checked_add(width as usize)? > self.len {
            return None;
        }
        let mut value = 0u64;
        for i in offset..offset + width as usize {
            let bit = self.bytes[i / 8] & (0x80 >> (i % 8)) != 0;
            value = (value << 1) | bit as u64;
        }
        Some(value)
    }

    /// Packed bytes, last byte zero-filled
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A cursor positioned at the first bit
    pub fn cursor(&self) -> BitCursor<'_> {
        BitCursor::new(self)
    }
}

/// Forward-only reader over a [`BitString`]
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    bits: &'a BitString,
    offset: usize,
}

impl<'a> BitCursor<'a> {
    /// Create a cursor at the start of `bits`
    pub fn new(bits: &'a BitString) -> Self {
        BitCursor { bits, offset: 0 }
    }

    /// The underlying bit string
    pub fn bits(&self) -> &'a BitString {
        self.bits
    }

    /// Current read position
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bits left to read
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.offset
    }

    fn ensure(&self, width: usize) -> Result<()> {
        if width > self.remaining() {
            return Err(ParseError::truncated(format!(
                "need {} bits at offset {}, {} remaining",
                width,
                self.offset,
                self.remaining()
            )));
        }
        Ok(())
    }

    /// Read an unsigned integer of `width` bits (at most 64)
    pub fn read_unsigned(&mut self, width: u8) -> Result<u64> {
        self.ensure(width as usize)?;
        let value = self
            .bits
            .bits(self.offset, width)
            .ok_or_else(|| ParseError::truncated(format!("bad read width {}", width)))?;
        self.offset += width as usize;
        Ok(value)
    }

    /// Read a two's complement integer of `width` bits
    pub fn read_signed(&mut self, width: u8) -> Result<i64> {
        let raw = self.read_unsigned(width)?;
        Ok(sign_extend(raw, width))
    }

    /// Advance by `width` bits
    pub fn skip(&mut self, width: usize) -> Result<()> {
        self.ensure(width)?;
        self.offset += width;
        Ok(())
    }

    /// Advance by up to `width` bits, stopping at the end
    pub fn skip_saturating(&mut self, width: usize) {
        self.offset += width.min(self.remaining());
    }

    /// Look at `width` bits at an absolute position without moving
    pub fn peek_at(&self, position: usize, width: u8) -> Option<u64> {
        self.bits.bits(position, width)
    }
}

/// Interpret the low `width` bits of `raw` as a two's complement number
pub fn sign_extend(raw: u64, width: u8) -> i64 {
    if width == 0 {
        return 0;
    }
    if width >= 64 {
        return raw as i64;
    }
    let shift = 64 - width as u32;
    ((raw << shift) as i64) >> shift
}

bitfield! {
    /// SOTDMA/ITDMA communication state trailing position reports
    ///
    /// Class A reports carry 19 bits, Class B and SAR reports 20 bits with a
    /// leading selector flag; the low 19 bits share this layout.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct CommState(u32);
    impl Debug;
    // 0 UTC direct, 1 UTC indirect, 2 base station, 3 number of received stations
    pub u8, sync_state, _: 18, 17;
    // frames left until a new slot is selected
    pub u8, slot_timeout, _: 16, 14;
    pub u16, sub_message, _: 13, 0;
}

impl CommState {
    /// Wrap a raw radio status value
    pub fn new(raw: u32) -> Self {
        CommState(raw)
    }

    /// Raw radio status value
    pub fn raw(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read() -> Result<()> {
        let mut bits = BitString::new();
        bits.push_bits(0b101, 3);
        bits.push_bits(0x3FF, 10);
        assert_eq!(bits.len(), 13);

        let mut cursor = bits.cursor();
        assert_eq!(cursor.read_unsigned(3)?, 0b101);
        assert_eq!(cursor.read_unsigned(10)?, 0x3FF);
        assert_eq!(cursor.remaining(), 0);
        Ok(())
    }

    #[test]
    fn test_read_signed() -> Result<()> {
        let mut bits = BitString::new();
        bits.push_signed(-128, 8);
        bits.push_signed(127, 8);
        bits.push_signed(-1, 28);

        let mut cursor = bits.cursor();
        assert_eq!(cursor.read_signed(8)?, -128);
        assert_eq!(cursor.read_signed(8)?, 127);
        assert_eq!(cursor.read_signed(28)?, -1);
        Ok(())
    }

    #[test]
    fn test_wide_push_pads_high_bits() -> Result<()> {
        let mut bits = BitString::new();
        bits.push_bits(u64::MAX, 70);
        bits.push_signed(-2, 66);
        bits.push_signed(5, 66);
        assert_eq!(bits.len(), 202);

        let mut cursor = bits.cursor();
        assert_eq!(cursor.read_unsigned(6)?, 0);
        assert_eq!(cursor.read_unsigned(64)?, u64::MAX);
        assert_eq!(cursor.read_unsigned(2)?, 0b11);
        assert_eq!(cursor.read_signed(64)?, -2);
        assert_eq!(cursor.read_unsigned(2)?, 0);
        assert_eq!(cursor.read_signed(64)?, 5);
        Ok(())
    }

    #[test]
    fn test_read_past_end_is_truncated() {
        let mut bits = BitString::new();
        bits.push_bits(0, 5);
        let mut cursor = bits.cursor();
        assert!(matches!(
            cursor.read_unsigned(6),
            Err(ParseError::Truncated(_))
        ));
        // A failed read leaves the cursor where it was
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_truncate_clears_tail() {
        let mut bits = BitString::new();
        bits.push_bits(0xFFFF, 16);
        bits.truncate(10);
        assert_eq!(bits.len(), 10);
        assert_eq!(bits.as_bytes(), &[0xFF, 0xC0]);

        bits.push_bits(0, 6);
        assert_eq!(bits.bits(0, 16), Some(0xFFC0));
    }

    #[test]
    fn test_peek_and_skip() -> Result<()> {
        let mut bits = BitString::new();
        bits.push_bits(0b1100_0011, 8);
        let mut cursor = bits.cursor();
        cursor.skip(2)?;
        assert_eq!(cursor.peek_at(6, 2), Some(0b11));
        assert_eq!(cursor.position(), 2);
        cursor.skip_saturating(100);
        assert_eq!(cursor.remaining(), 0);
        Ok(())
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0xFF, 8), -1);
        assert_eq!(sign_extend(0x7F, 8), 127);
        assert_eq!(sign_extend(0x6791AC0, 28), 0x6791AC0);
        assert_eq!(sign_extend(0, 0), 0);
    }

    #[test]
    fn test_comm_state_fields() {
        let state = CommState::new((2 << 17) | (3 << 14) | 0x0ABC);
        assert_eq!(state.sync_state(), 2);
        assert_eq!(state.slot_timeout(), 3);
        assert_eq!(state.sub_message(), 0x0ABC);
    }
}
