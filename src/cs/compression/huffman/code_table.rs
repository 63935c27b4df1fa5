use std::collections::HashMap;

use log::{debug, trace, warn};

use super::config::{HuffmanConfig, SingleSymbolPolicy};
use super::frequency::FrequencyTable;
use super::tree::{CodeTree, NodeId};
use crate::error::{Error, Result};

/// Prefix-free mapping from each symbol to its bit-string code.
///
/// Codes are strings over `'0'` and `'1'`. A reverse index from code to symbol
/// backs decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, String>,
    symbols: HashMap<String, char>,
}

impl CodeTable {
    /// Derive codes from a finished tree using the default configuration.
    ///
    /// # Examples
    /// ```
    /// use huffcode::{CodeTable, CodeTree, FrequencyTable};
    ///
    /// let tree = CodeTree::build(&FrequencyTable::from_text("aaaabbbccd")).unwrap();
    /// let table = CodeTable::from_tree(&tree).unwrap();
    /// assert_eq!(table.get('a'), Some("0"));
    /// assert_eq!(table.get('c'), Some("111"));
    /// ```
    pub fn from_tree(tree: &CodeTree) -> Result<Self> {
        Self::from_tree_with(tree, &HuffmanConfig::default())
    }

    /// Derive codes from a finished tree.
    ///
    /// Each leaf's code is read off the path from the leaf up to the root: `'0'`
    /// for every step out of a left child, `'1'` out of a right child. A tree that
    /// is a lone leaf has no such path, and `config.single_symbol` decides its code.
    pub fn from_tree_with(tree: &CodeTree, config: &HuffmanConfig) -> Result<Self> {
        config.validate()?;
        let mut table = CodeTable::default();
        table.assign(tree, tree.root(), config)?;
        debug!(
            "assigned {} codes, longest {} bits",
            table.len(),
            table.max_code_len()
        );
        Ok(table)
    }

    fn assign(&mut self, tree: &CodeTree, id: NodeId, config: &HuffmanConfig) -> Result<()> {
        let node = tree.node(id);
        if let Some(symbol) = node.symbol() {
            let mut code = path_code(tree, id);
            if code.is_empty() {
                code = match config.single_symbol {
                    SingleSymbolPolicy::FixedBit(bit) => {
                        warn!("single-symbol alphabet, assigning fixed code {bit:?} to {symbol:?}");
                        bit.to_string()
                    }
                    SingleSymbolPolicy::Reject => return Err(Error::DegenerateAlphabet),
                };
            }
            trace!("code {symbol:?} -> {code}");
            self.symbols.insert(code.clone(), symbol);
            self.codes.insert(symbol, code);
        }
        if let Some(left) = node.left() {
            self.assign(tree, left, config)?;
        }
        if let Some(right) = node.right() {
            self.assign(tree, right, config)?;
        }
        Ok(())
    }

    /// Build a table from explicit `(symbol, code)` pairs.
    ///
    /// Every code must be a non-empty string of `'0'`/`'1'`, symbols and codes
    /// must be unique, and the set must be prefix-free.
    pub fn from_codes<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut table = CodeTable::default();
        for (symbol, code) in pairs {
            let code = code.into();
            if code.is_empty() || !code.chars().all(|bit| bit == '0' || bit == '1') {
                return Err(Error::invalid_input(format!(
                    "code {code:?} for {symbol:?} is not a non-empty bit string"
                )));
            }
            if table.codes.contains_key(&symbol) {
                return Err(Error::invalid_input(format!(
                    "symbol {symbol:?} listed twice"
                )));
            }
            if table.symbols.contains_key(&code) {
                return Err(Error::invalid_input(format!("code {code:?} listed twice")));
            }
            table.symbols.insert(code.clone(), symbol);
            table.codes.insert(symbol, code);
        }
        if !table.is_prefix_free() {
            return Err(Error::invalid_input("codes are not prefix-free"));
        }
        Ok(table)
    }

    /// The code of `symbol`.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// The symbol whose code is exactly `code`.
    pub fn symbol_for(&self, code: &str) -> Option<char> {
        self.symbols.get(code).copied()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Number of bits needed to encode an input with these frequencies.
    ///
    /// Symbols without a code contribute nothing.
    pub fn encoded_len(&self, freq: &FrequencyTable) -> usize {
        freq.iter()
            .filter_map(|(symbol, count)| self.codes.get(&symbol).map(|code| code.len() * count))
            .sum()
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        // A prefix sorts immediately before some string it prefixes.
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

/// Bits on the path from the root down to `leaf`.
fn path_code(tree: &CodeTree, leaf: NodeId) -> String {
    let mut bits = Vec::new();
    let mut current = leaf;
    while let Some(parent) = tree.node(current).parent() {
        let bit = if tree.node(parent).left() == Some(current) {
            '0'
        } else {
            '1'
        };
        bits.push(bit);
        current = parent;
    }
    bits.iter().rev().collect()
}
