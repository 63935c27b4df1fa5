use huffcode::{huffman_decode, huffman_encode, CodeTable, CodeTree, FrequencyTable};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_round_trip(input in "\\PC{1,200}") {
        let output = huffman_encode(&input).unwrap();
        let decoded = huffman_decode(&output.encoded, &output.code_table).unwrap();
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn test_prefix_free(input in "[a-h]{2,300}") {
        let output = huffman_encode(&input).unwrap();
        prop_assume!(output.frequencies.len() >= 2);

        let codes: Vec<&str> = output.code_table.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_weight_conservation(input in "[a-z0-9 ]{1,300}") {
        let freq = FrequencyTable::from_text(&input);
        let tree = CodeTree::build(&freq).unwrap();
        let leaf_sum: usize = tree.leaves().map(|(_, node)| node.weight()).sum();
        prop_assert_eq!(tree.weight(), leaf_sum);
        prop_assert_eq!(tree.weight(), input.chars().count());
    }

    #[test]
    fn test_deterministic(input in "[a-f]{1,200}") {
        let freq = FrequencyTable::from_text(&input);
        let first = CodeTree::build(&freq).unwrap();
        let second = CodeTree::build(&freq).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            CodeTable::from_tree(&first).unwrap(),
            CodeTable::from_tree(&second).unwrap()
        );
    }

    #[test]
    fn test_more_frequent_codes_are_not_longer(input in "[a-j]{1,400}") {
        let output = huffman_encode(&input).unwrap();
        let entries: Vec<(char, usize)> = output.frequencies.iter().collect();
        for &(x, fx) in &entries {
            for &(y, fy) in &entries {
                if fx > fy {
                    let lx = output.code_table.get(x).unwrap().len();
                    let ly = output.code_table.get(y).unwrap().len();
                    prop_assert!(lx <= ly, "{:?}({}) has {} bits, {:?}({}) has {}", x, fx, lx, y, fy, ly);
                }
            }
        }
    }
}
