//! Compression algorithms implementation.
//!
//! This module provides prefix-code compression of text:
//! - Huffman coding with deterministic tie-breaking
//!
//! Encoded output is a string of `'0'` and `'1'` characters; packing it into
//! bytes is left to the caller.
//!
//! # Examples
//!
//! ```rust
//! use huffcode::cs::compression::{Compression, HuffmanCoder};
//!
//! let coder = HuffmanCoder::from_text("abracadabra").unwrap();
//! let encoded = coder.compress("abra").unwrap();
//! assert_eq!(coder.decompress(&encoded).unwrap(), "abra");
//! ```

use crate::error::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for text compression algorithms
pub trait Compression {
    /// Compress the input text into a bit string
    fn compress(&self, input: &str) -> Result<String>;

    /// Decompress a bit string back into text
    fn decompress(&self, encoded: &str) -> Result<String>;
}

pub mod huffman;
pub use huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, decode, encode, huffman_decode,
    huffman_encode, huffman_encode_with, CodeTable, CodeTree, CodeTreeNode, FrequencyTable,
    HuffmanCoder, HuffmanConfig, HuffmanOutput, NodeId, PriorityForest, SingleSymbolPolicy,
};
