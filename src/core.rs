//! Core types describing the sentence fragments that carry AIS payloads

use crate::error::{ParseError, Result};

/// VHF data link channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// AIS 1 (161.975 MHz)
    A,
    /// AIS 2 (162.025 MHz)
    B,
}

impl Channel {
    /// Parse the channel field of a sentence
    ///
    /// Some receivers report `1`/`2` instead of `A`/`B`; both are accepted.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'A' | 'a' | '1' => Ok(Channel::A),
            'B' | 'b' | '2' => Ok(Channel::B),
            _ => Err(ParseError::invalid_fragment(format!(
                "Unknown channel '{}'",
                c
            ))),
        }
    }

    /// Character used for this channel in a sentence
    pub fn as_char(&self) -> char {
        match self {
            Channel::A => 'A',
            Channel::B => 'B',
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Channel {}", self.as_char())
    }
}

/// Position of one sentence within a fragment train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FragmentHeader {
    total: u8,
    index: u8,
    sequence_id: Option<u8>,
    channel: Channel,
}

impl FragmentHeader {
    /// Largest sequential message identifier a sentence can carry
    pub const MAX_SEQUENCE_ID: u8 = 9;

    /// Create a new header, validating `1 <= index <= total`
    pub fn new(total: u8, index: u8, sequence_id: Option<u8>, channel: Channel) -> Result<Self> {
        if total == 0 {
            return Err(ParseError::invalid_fragment(
                "Fragment count must be at least 1".to_string(),
            ));
        }
        if index == 0 || index > total {
            return Err(ParseError::invalid_fragment(format!(
                "Fragment index {} out of range [1, {}]",
                index, total
            )));
        }
        if let Some(id) = sequence_id {
            if id > Self::MAX_SEQUENCE_ID {
                return Err(ParseError::invalid_fragment(format!(
                    "Sequential message id {} out of range [0, {}]",
                    id,
                    Self::MAX_SEQUENCE_ID
                )));
            }
        }
        Ok(FragmentHeader {
            total,
            index,
            sequence_id,
            channel,
        })
    }

    /// Header of a single-sentence message
    pub fn single(channel: Channel) -> Self {
        FragmentHeader {
            total: 1,
            index: 1,
            sequence_id: None,
            channel,
        }
    }

    /// Number of fragments in the train
    pub fn total(&self) -> u8 {
        self.total
    }

    /// 1-based index of this fragment
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Sequential message identifier shared by all fragments of a train
    pub fn sequence_id(&self) -> Option<u8> {
        self.sequence_id
    }

    /// Channel the sentence was received on
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// First fragment of its train
    pub fn is_first(&self) -> bool {
        self.index == 1
    }

    /// Last fragment of its train
    pub fn is_final(&self) -> bool {
        self.index == self.total
    }
}

/// One physical sentence's share of an AIS message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceFragment {
    /// Train position
    pub header: FragmentHeader,
    /// Armored payload characters
    pub payload: String,
    /// Fill bits appended to the payload (0-5)
    pub pad_bits: u8,
}

impl SentenceFragment {
    /// Maximum number of fill bits
    pub const MAX_PAD_BITS: u8 = 5;

    /// Create a new fragment, validating the fill bit count
    pub fn new(header: FragmentHeader, payload: impl Into<String>, pad_bits: u8) -> Result<Self> {
        if pad_bits > Self::MAX_PAD_BITS {
            return Err(ParseError::invalid_fragment(format!(
                "Pad bits {} out of range [0, {}]",
                pad_bits,
                Self::MAX_PAD_BITS
            )));
        }
        Ok(SentenceFragment {
            header,
            payload: payload.into(),
            pad_bits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_parsing() -> Result<()> {
        assert_eq!(Channel::from_char('A')?, Channel::A);
        assert_eq!(Channel::from_char('2')?, Channel::B);
        assert!(Channel::from_char('C').is_err());
        assert_eq!(Channel::B.to_string(), "Channel B");
        Ok(())
    }

    #[test]
    fn test_header_validation() {
        assert!(FragmentHeader::new(0, 1, None, Channel::A).is_err());
        assert!(FragmentHeader::new(2, 0, Some(1), Channel::A).is_err());
        assert!(FragmentHeader::new(2, 3, Some(1), Channel::A).is_err());
        assert!(FragmentHeader::new(2, 2, Some(10), Channel::A).is_err());
        assert!(FragmentHeader::new(2, 2, Some(9), Channel::B).is_ok());
    }

    #[test]
    fn test_header_position() -> Result<()> {
        let first = FragmentHeader::new(2, 1, Some(3), Channel::A)?;
        assert!(first.is_first());
        assert!(!first.is_final());

        let single = FragmentHeader::single(Channel::B);
        assert!(single.is_first() && single.is_final());
        assert_eq!(single.sequence_id(), None);
        Ok(())
    }

    #[test]
    fn test_fragment_pad_bits() {
        let header = FragmentHeader::single(Channel::A);
        assert!(SentenceFragment::new(header, "15M67F", 0).is_ok());
        assert!(SentenceFragment::new(header, "15M67F", 6).is_err());
    }
}
