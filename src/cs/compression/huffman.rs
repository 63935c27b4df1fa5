//! Huffman prefix coding over text.
//!
//! The pipeline counts symbol frequencies, merges the two lightest subtrees until
//! a single code tree remains, reads a bit-string code for every leaf off its path
//! to the root, and concatenates codes to encode. Decoding matches the encoded
//! stream against the code table bit by bit.
//!
//! Trees are deterministic: equal weights are ordered by the concatenation of the
//! symbols below each subtree, so the same input always yields the same codes.
//!
//! # Examples
//!
//! ```rust
//! use huffcode::{huffman_decode, huffman_encode};
//!
//! let output = huffman_encode("aaaabbbccd").unwrap();
//! assert_eq!(output.code_table.get('a'), Some("0"));
//! assert_eq!(output.encoded.len(), 19);
//! assert_eq!(huffman_decode(&output.encoded, &output.code_table).unwrap(), "aaaabbbccd");
//! ```

use log::debug;

use crate::cs::compression::{Compression, Result};
use crate::error::Error;

pub mod code_table;
pub mod codec;
pub mod config;
pub mod forest;
pub mod frequency;
pub mod tree;

pub use code_table::CodeTable;
pub use codec::{decode, encode};
pub use config::{HuffmanConfig, SingleSymbolPolicy};
pub use forest::{ForestEntry, PriorityForest};
pub use frequency::FrequencyTable;
pub use tree::{CodeTree, CodeTreeNode, NodeId};

/// Everything one encoding run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanOutput {
    /// The original input
    pub input: String,
    /// Occurrence count of every symbol in `input`
    pub frequencies: FrequencyTable,
    /// The code tree built from `frequencies`
    pub tree: CodeTree,
    /// Code of every symbol
    pub code_table: CodeTable,
    /// `input` encoded as a string of '0' and '1'
    pub encoded: String,
}

/// Build the frequency table for `input`.
pub fn build_frequency_table(input: &str) -> FrequencyTable {
    FrequencyTable::from_text(input)
}

/// Build the Huffman tree for a frequency table.
pub fn build_huffman_tree(freq_table: &FrequencyTable) -> Result<CodeTree> {
    CodeTree::build(freq_table)
}

/// Derive the code table for a finished tree with the default configuration.
///
/// A one-leaf tree gets its code from [`SingleSymbolPolicy`]; the default
/// policy assigns `'0'`.
pub fn build_code_table(tree: &CodeTree) -> Result<CodeTable> {
    CodeTable::from_tree(tree)
}

/// Run the whole pipeline with the default configuration.
pub fn huffman_encode(input: &str) -> Result<HuffmanOutput> {
    huffman_encode_with(input, &HuffmanConfig::default())
}

/// Count, build the tree, assign codes and encode `input`.
///
/// Empty input is rejected with [`Error::EmptyInput`]. With
/// `config.verify_round_trip` set, the encoded string is decoded again and must
/// reproduce `input`.
pub fn huffman_encode_with(input: &str, config: &HuffmanConfig) -> Result<HuffmanOutput> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let frequencies = build_frequency_table(input);
    let tree = build_huffman_tree(&frequencies)?;
    let code_table = CodeTable::from_tree_with(&tree, config)?;
    let encoded = encode(input, &code_table)?;

    if config.verify_round_trip && decode(&encoded, &code_table)? != input {
        return Err(Error::RoundTripMismatch);
    }

    debug!(
        "encoded {} symbols ({} distinct) into {} bits",
        frequencies.total(),
        frequencies.len(),
        encoded.len()
    );
    Ok(HuffmanOutput {
        input: input.to_string(),
        frequencies,
        tree,
        code_table,
        encoded,
    })
}

/// Decode an encoded bit string with the table it was encoded with.
pub fn huffman_decode(encoded: &str, code_table: &CodeTable) -> Result<String> {
    decode(encoded, code_table)
}

/// A Huffman code fixed from sample text, reusable across inputs drawn from the
/// same alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanCoder {
    code_table: CodeTable,
    config: HuffmanConfig,
}

impl HuffmanCoder {
    /// Build a coder whose codes are trained on `sample`.
    pub fn from_text(sample: &str) -> Result<Self> {
        Self::with_config(sample, HuffmanConfig::default())
    }

    /// Build a coder trained on `sample`, applying `config` to code assignment
    /// and to every [`Compression::compress`] call.
    pub fn with_config(sample: &str, config: HuffmanConfig) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::EmptyInput);
        }
        let tree = CodeTree::build(&FrequencyTable::from_text(sample))?;
        let code_table = CodeTable::from_tree_with(&tree, &config)?;
        Ok(HuffmanCoder { code_table, config })
    }

    /// Wrap an existing code table.
    pub fn from_code_table(code_table: CodeTable) -> Self {
        HuffmanCoder {
            code_table,
            config: HuffmanConfig::default(),
        }
    }

    /// The codes this coder encodes and decodes with.
    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    /// The configuration the coder was built with.
    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }
}

impl Compression for HuffmanCoder {
    fn compress(&self, input: &str) -> Result<String> {
        let encoded = encode(input, &self.code_table)?;
        if self.config.verify_round_trip && decode(&encoded, &self.code_table)? != input {
            return Err(Error::RoundTripMismatch);
        }
        Ok(encoded)
    }

    fn decompress(&self, encoded: &str) -> Result<String> {
        decode(encoded, &self.code_table)
    }
}
