use std::collections::HashMap;

/// Occurrence counts for each distinct symbol of an input.
///
/// Every stored count is at least 1. The table carries no ordering of its own;
/// use [`FrequencyTable::by_descending_frequency`] when a stable order is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<char, usize>,
}

impl FrequencyTable {
    /// Count every symbol of `input`. Empty input yields an empty table.
    pub fn from_text(input: &str) -> Self {
        Self::from_symbols(input.chars())
    }

    /// Count every symbol produced by `symbols`.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut counts = HashMap::new();
        for ch in symbols {
            *counts.entry(ch).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }

    /// Returns the count of `symbol`, or `None` if it never occurred.
    pub fn get(&self, symbol: char) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no symbol was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the input length in symbols.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(symbol, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&ch, &count)| (ch, count))
    }

    /// Entries sorted by count, highest first; equal counts by symbol ascending.
    pub fn by_descending_frequency(&self) -> Vec<(char, usize)> {
        let mut entries: Vec<(char, usize)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}
