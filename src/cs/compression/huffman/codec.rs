use super::code_table::CodeTable;
use crate::error::{Error, Result};

/// Encode `input` by concatenating each symbol's code in input order.
///
/// Fails with [`Error::MissingSymbol`] on the first symbol the table has no code
/// for; `position` counts symbols, not bytes.
pub fn encode(input: &str, table: &CodeTable) -> Result<String> {
    let mut encoded = String::with_capacity(input.len());
    for (position, symbol) in input.chars().enumerate() {
        let code = table
            .get(symbol)
            .ok_or(Error::MissingSymbol { symbol, position })?;
        encoded.push_str(code);
    }
    Ok(encoded)
}

/// Decode a bit string produced by [`encode`] with the same table.
///
/// Bits are appended to a candidate one at a time until it equals some code; the
/// code's symbol is emitted and the candidate restarts empty. Since the table is
/// prefix-free the first match is the only possible one.
///
/// # Errors
/// * [`Error::InvalidBit`] if a character other than `'0'`/`'1'` appears.
/// * [`Error::MalformedEncoding`] if the stream ends inside a codeword, or if the
///   candidate grows past the longest code without matching.
///
/// # Complexity
/// * Time: O(n * L) where n is the number of bits and L the longest code length
pub fn decode(encoded: &str, table: &CodeTable) -> Result<String> {
    let max_code_len = table.max_code_len();
    let mut result = String::new();
    let mut candidate = String::with_capacity(max_code_len + 1);
    let mut start = 0;

    for (position, bit) in encoded.chars().enumerate() {
        if bit != '0' && bit != '1' {
            return Err(Error::InvalidBit { bit, position });
        }
        candidate.push(bit);
        if candidate.len() > max_code_len {
            return Err(Error::MalformedEncoding {
                position: start,
                trailing: candidate,
            });
        }
        if let Some(symbol) = table.symbol_for(&candidate) {
            result.push(symbol);
            candidate.clear();
            start = position + 1;
        }
    }

    if !candidate.is_empty() {
        return Err(Error::MalformedEncoding {
            position: start,
            trailing: candidate,
        });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_table() -> CodeTable {
        CodeTable::from_codes([('a', "0"), ('b', "10"), ('d', "110"), ('c', "111")]).unwrap()
    }

    #[test]
    fn test_encode() {
        let table = reference_table();
        assert_eq!(encode("abcd", &table).unwrap(), "010111110");
        assert_eq!(encode("", &table).unwrap(), "");
    }

    #[test]
    fn test_encode_missing_symbol() {
        let table = reference_table();
        assert_eq!(
            encode("abxd", &table),
            Err(Error::MissingSymbol {
                symbol: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn test_decode() {
        let table = reference_table();
        assert_eq!(decode("010111110", &table).unwrap(), "abcd");
        assert_eq!(decode("", &table).unwrap(), "");
        assert_eq!(decode("0000", &table).unwrap(), "aaaa");
    }

    #[test]
    fn test_decode_truncated() {
        let table = reference_table();
        assert_eq!(
            decode("01011", &table),
            Err(Error::MalformedEncoding {
                position: 3,
                trailing: "11".to_string()
            })
        );
    }

    #[test]
    fn test_decode_invalid_bit() {
        let table = reference_table();
        assert_eq!(
            decode("01a0", &table),
            Err(Error::InvalidBit {
                bit: 'a',
                position: 2
            })
        );
    }

    #[test]
    fn test_decode_stops_once_candidate_exceeds_longest_code() {
        let table = CodeTable::from_codes([('a', "0")]).unwrap();
        let ones = "1".repeat(100_000);
        match decode(&ones, &table) {
            Err(Error::MalformedEncoding { position, trailing }) => {
                assert_eq!(position, 0);
                assert_eq!(trailing.len(), 2);
            }
            other => panic!("expected MalformedEncoding, got {:?}", other),
        }

        assert_eq!(
            decode("0011000", &table),
            Err(Error::MalformedEncoding {
                position: 2,
                trailing: "11".to_string()
            })
        );
    }

    #[test]
    fn test_encode_multibyte_symbols() {
        let table = CodeTable::from_codes([('日', "0"), ('🦀', "1")]).unwrap();
        let encoded = encode("日🦀日", &table).unwrap();
        assert_eq!(encoded, "010");
        assert_eq!(decode(&encoded, &table).unwrap(), "日🦀日");
    }

    #[test]
    fn test_decode_with_empty_table() {
        let table = CodeTable::default();
        assert_eq!(
            decode("1", &table),
            Err(Error::MalformedEncoding {
                position: 0,
                trailing: "1".to_string()
            })
        );
    }
}
