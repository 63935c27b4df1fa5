use crate::error::{Error, Result};

/// What code a lone symbol receives when the alphabet has one distinct symbol.
///
/// Such a tree is a single leaf with no edges, so the path-derived code would be
/// empty and could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleSymbolPolicy {
    /// Assign this one-bit code (`'0'` or `'1'`).
    FixedBit(char),
    /// Fail with [`Error::DegenerateAlphabet`].
    Reject,
}

impl Default for SingleSymbolPolicy {
    fn default() -> Self {
        SingleSymbolPolicy::FixedBit('0')
    }
}

/// Configuration for building and running a Huffman code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanConfig {
    /// Policy for single-symbol alphabets
    pub single_symbol: SingleSymbolPolicy,
    /// Decode the encoded output and compare it with the input
    pub verify_round_trip: bool,
}

impl HuffmanConfig {
    /// Default configuration: fixed code `'0'` for a lone symbol, no verification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for single-symbol alphabets.
    pub fn with_single_symbol(mut self, policy: SingleSymbolPolicy) -> Self {
        self.single_symbol = policy;
        self
    }

    /// Enable or disable decoding the output to check it against the input.
    pub fn with_verify_round_trip(mut self, verify: bool) -> Self {
        self.verify_round_trip = verify;
        self
    }

    /// Checks that a fixed single-symbol code is an actual bit.
    pub fn validate(&self) -> Result<()> {
        match self.single_symbol {
            SingleSymbolPolicy::FixedBit('0' | '1') | SingleSymbolPolicy::Reject => Ok(()),
            SingleSymbolPolicy::FixedBit(bit) => Err(Error::invalid_input(format!(
                "single-symbol code must be '0' or '1', got {bit:?}"
            ))),
        }
    }
}
