//! Error types shared by every coder in the crate.

use thiserror::Error;

/// Error variants for prefix-code construction, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No symbols were provided, so there is nothing to build a code from.
    #[error("input is empty")]
    EmptyInput,

    /// The priority forest was asked for more nodes than it holds.
    #[error("forest holds {available} node(s), {needed} required")]
    InsufficientNodes { needed: usize, available: usize },

    /// A symbol being encoded has no entry in the code table.
    #[error("symbol {symbol:?} at position {position} has no code")]
    MissingSymbol { symbol: char, position: usize },

    /// The alphabet has a single symbol and the configured policy rejects it.
    #[error("alphabet has a single distinct symbol; no path-derived code exists")]
    DegenerateAlphabet,

    /// The encoded stream ended in the middle of a codeword.
    #[error("encoded stream ends with unmatched bits {trailing:?} starting at bit {position}")]
    MalformedEncoding { position: usize, trailing: String },

    /// The encoded stream contains something other than '0' or '1'.
    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit { bit: char, position: usize },

    /// Decoding the freshly encoded stream did not reproduce the input.
    #[error("round-trip verification failed")]
    RoundTripMismatch,

    /// Any other invalid argument.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Convenience constructor for [`Error::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// A specialized Result type for coder operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::MissingSymbol {
            symbol: 'x',
            position: 3,
        };
        assert_eq!(err.to_string(), "symbol 'x' at position 3 has no code");

        let err = Error::MalformedEncoding {
            position: 4,
            trailing: "11".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "encoded stream ends with unmatched bits \"11\" starting at bit 4"
        );

        assert_eq!(
            Error::invalid_input("bad bit").to_string(),
            "invalid input: bad bit"
        );
    }
}
