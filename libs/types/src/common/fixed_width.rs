//! Fixed-width decimal encoding
//!
//! Codes are built by concatenating decimal fields, so each field is
//! zero-padded to a known width. The width is a minimum: a value with more
//! digits than the width is emitted in full, never truncated.
//!
//! ```rust
//! use codes_types::{zero_pad, FixedWidth};
//!
//! assert_eq!(zero_pad(11, 4), "0011");
//! assert_eq!(zero_pad(5_000_000, 3), "5000000");
//!
//! let width = FixedWidth::new(8).unwrap();
//! assert_eq!(width.format(42), "00000042");
//! ```

use crate::{CodeError, Result};

/// Left-pad the decimal form of `value` with `'0'` to at least `width` characters
#[inline]
pub fn zero_pad(value: u64, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// Validated fixed-width formatting for signed inputs
///
/// Rejects `width <= 0` and `value < 0`; otherwise identical to [`zero_pad`].
pub fn format_fixed_width(value: i64, width: i64) -> Result<String> {
    let width = FixedWidth::new(width)?;
    if value < 0 {
        return Err(CodeError::NegativeValue { value });
    }
    Ok(width.format(value as u64))
}

/// Number of decimal digits in `value` (`0` has one digit)
#[inline]
pub fn digit_count(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// A strictly positive minimum pad width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedWidth(usize);

impl FixedWidth {
    /// Accept any width greater than zero
    pub fn new(width: i64) -> Result<Self> {
        if width <= 0 {
            return Err(CodeError::InvalidWidth { width });
        }
        usize::try_from(width)
            .map(Self)
            .map_err(|_| CodeError::InvalidWidth { width })
    }

    pub const fn get(&self) -> usize {
        self.0
    }

    /// Whether `value` overflows the width and will be emitted unpadded
    pub fn overflows(&self, value: u64) -> bool {
        digit_count(value) > self.0
    }

    pub fn format(&self, value: u64) -> String {
        zero_pad(value, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_applies_when_needed() {
        assert_eq!(zero_pad(11, 4), "0011");
        assert_eq!(zero_pad(0, 3), "000");
        assert_eq!(zero_pad(1, 1), "1");
    }

    #[test]
    fn test_width_is_a_minimum_not_a_cap() {
        assert_eq!(zero_pad(5_000_000, 3), "5000000");
        assert_eq!(format_fixed_width(5_000_000, 3).unwrap(), "5000000");
        assert!(FixedWidth::new(3).unwrap().overflows(5_000_000));
        assert!(!FixedWidth::new(7).unwrap().overflows(5_000_000));
    }

    #[test]
    fn test_rejects_non_positive_width() {
        assert_eq!(FixedWidth::new(0), Err(CodeError::InvalidWidth { width: 0 }));
        assert_eq!(
            format_fixed_width(5, -10),
            Err(CodeError::InvalidWidth { width: -10 })
        );
    }

    #[test]
    fn test_rejects_negative_value() {
        assert_eq!(
            format_fixed_width(-1, 4),
            Err(CodeError::NegativeValue { value: -1 })
        );
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u64::MAX), 20);
    }
}
