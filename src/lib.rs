//! # huffcode
//!
//! Frequency-driven prefix-code compression of text.
//!
//! ```rust
//! use huffcode::{huffman_decode, huffman_encode};
//!
//! let output = huffman_encode("mississippi").unwrap();
//! let decoded = huffman_decode(&output.encoded, &output.code_table).unwrap();
//! assert_eq!(decoded, "mississippi");
//! ```

pub mod cs;
pub mod error;

pub use cs::compression;
pub use cs::compression::{
    build_code_table, build_frequency_table, build_huffman_tree, decode, encode, huffman_decode,
    huffman_encode, huffman_encode_with, CodeTable, CodeTree, CodeTreeNode, Compression,
    FrequencyTable, HuffmanCoder, HuffmanConfig, HuffmanOutput, NodeId, PriorityForest,
    SingleSymbolPolicy,
};
pub use error::{Error, Result};
