//! Error types for AIS decoding
//!
//! Every error here is local to one message. The transaction layer turns an
//! error into an observer rollback carrying the error's display text, so none
//! of these ever cross the fragment-level API.

use thiserror::Error;

/// Result type for AIS decoding operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error types encountered while assembling and decoding AIS messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fragment arrived out of order, with a foreign sequential id, or with no train
    #[error("Fragment sequence error: {0}")]
    FragmentSequence(String),

    /// Payload character outside the two armoring bands
    #[error("Armor syntax error: {0}")]
    ArmorSyntax(String),

    /// The sentence layer reported a checksum failure or otherwise refused the sentence
    #[error("Checksum failure: {0}")]
    Checksum(String),

    /// Message type outside 1..=27, or one of the unsupported types 25 and 26
    #[error("Unknown message type: {0}")]
    UnknownMessageType(String),

    /// A field read ran past the end of the assembled bits
    #[error("Truncated message: {0}")]
    Truncated(String),

    /// Fragment header values out of range
    #[error("Invalid fragment: {0}")]
    InvalidFragment(String),

    /// Text could not be expressed in the six-bit alphabet
    #[error("Invalid text: {0}")]
    InvalidText(String),

    /// A value could not be written into a field
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl ParseError {
    /// Create a new FragmentSequence error
    pub fn sequence(msg: impl Into<String>) -> Self {
        ParseError::FragmentSequence(msg.into())
    }

    /// Create a new ArmorSyntax error
    pub fn armor(msg: impl Into<String>) -> Self {
        ParseError::ArmorSyntax(msg.into())
    }

    /// Create a new Checksum error
    pub fn checksum(msg: impl Into<String>) -> Self {
        ParseError::Checksum(msg.into())
    }

    /// Create a new UnknownMessageType error
    pub fn unknown_message_type(msg: impl Into<String>) -> Self {
        ParseError::UnknownMessageType(msg.into())
    }

    /// Create a new Truncated error
    pub fn truncated(msg: impl Into<String>) -> Self {
        ParseError::Truncated(msg.into())
    }

    /// Create a new InvalidFragment error
    pub fn invalid_fragment(msg: impl Into<String>) -> Self {
        ParseError::InvalidFragment(msg.into())
    }

    /// Create a new InvalidText error
    pub fn invalid_text(msg: impl Into<String>) -> Self {
        ParseError::InvalidText(msg.into())
    }

    /// Create a new Encoding error
    pub fn encoding(msg: impl Into<String>) -> Self {
        ParseError::Encoding(msg.into())
    }
}
