//! Error types for the leecode crate.

use thiserror::Error;

/// Failure while turning plain text into a Leecode string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The text contains a character with no entry in the code table.
    ///
    /// `position` is the character index in the normalized text.
    #[error("Character '{character}' (Unicode: {code_point}) at position {position} not supported in Leecode mapping")]
    UnsupportedCharacter {
        character: char,
        code_point: u32,
        position: usize,
    },
}

/// Failure while turning a Leecode string back into text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// After stripping non-digits, the digit count is odd.
    #[error("Encoded string length must be even (pairs of digits), found {digits} digits")]
    InvalidLength { digits: usize },

    /// A two-digit group is not a key of the code table.
    ///
    /// `position` is the index of the pair, not of the digit.
    #[error("Code '{code}' at pair {position} not found in Leecode mapping")]
    UnknownCode { code: String, position: usize },
}

/// The umbrella error type for everything the crate and its binary do.
#[derive(Debug, Error)]
pub enum LeecodeError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Reading input for the codec failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` type alias using the crate's `LeecodeError` type.
pub type Result<T> = std::result::Result<T, LeecodeError>;
