//! Fixed-width Formatting Property Tests
//!
//! Properties that must hold for every value and width, not just the
//! hand-picked cases in the unit tests.

use codes_types::{digit_count, format_fixed_width, zero_pad, CodeError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_output_is_at_least_width(value in any::<u64>(), width in 1usize..32) {
        let padded = zero_pad(value, width);
        prop_assert!(padded.len() >= width);
        prop_assert_eq!(padded.len(), width.max(digit_count(value)));
    }

    #[test]
    fn prop_never_truncates(value in any::<u64>(), width in 1usize..32) {
        let padded = zero_pad(value, width);
        prop_assert!(padded.ends_with(&value.to_string()));
        prop_assert_eq!(padded.parse::<u64>().unwrap(), value);
    }

    #[test]
    fn prop_overflowing_values_are_unpadded(value in 1_000u64..u64::MAX, width in 1usize..4) {
        prop_assert_eq!(zero_pad(value, width), value.to_string());
    }

    #[test]
    fn prop_padding_is_only_zeros(value in 0u64..1_000, width in 4usize..16) {
        let padded = zero_pad(value, width);
        let pad_len = width - digit_count(value);
        prop_assert!(padded[..pad_len].chars().all(|c| c == '0'));
    }

    #[test]
    fn prop_non_positive_width_rejected(value in 0i64..i64::MAX, width in i64::MIN..=0) {
        prop_assert_eq!(
            format_fixed_width(value, width),
            Err(CodeError::InvalidWidth { width })
        );
    }

    #[test]
    fn prop_negative_value_rejected(value in i64::MIN..0, width in 1i64..20) {
        prop_assert_eq!(
            format_fixed_width(value, width),
            Err(CodeError::NegativeValue { value })
        );
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(zero_pad(5_000_000, 3), "5000000");
    assert_eq!(zero_pad(11, 4), "0011");
    assert_eq!(zero_pad(0, 3), "000");
}
