//! # Order Codes
//!
//! Deterministic, collision-resistant generation of business order codes,
//! return-order codes and payment trade numbers.
//!
//! ## Creators
//!
//! - [`SequenceTypeOrderCodeCreator`]: `yyyyMMdd` + caller sequence, zero-padded
//! - [`MultiSellerOrderCodeCreator`]: timestamp + seller/buyer tails + counter,
//!   distinct on every call of one instance
//! - [`create_trade_no`]: pure encoding of a trade id and its trade number count
//!
//! Both order code creators implement [`OrderCodeCreator`]; callers pick the
//! variant that fits the business context.
//!
//! ## Quick Start
//!
//! ```rust
//! use codes_config::MultiSellerConfig;
//! use codes_types::{BuyerId, SellerId};
//! use order_codes::{MultiSellerOrderCodeCreator, SequenceTypeOrderCodeCreator};
//!
//! let daily = SequenceTypeOrderCodeCreator::new();
//! let code = daily.create(11, 4)?;
//! assert!(code.ends_with("0011"));
//!
//! let creator = MultiSellerOrderCodeCreator::new(MultiSellerConfig::default())?;
//! let a = creator.create(SellerId::new(35191), BuyerId::new(555))?;
//! let b = creator.create(SellerId::new(35191), BuyerId::new(555))?;
//! assert_ne!(a, b);
//! # Ok::<(), codes_types::CodeError>(())
//! ```
//!
//! ## Scope
//!
//! Uniqueness is guaranteed per creator instance within one process. Global
//! uniqueness across processes belongs to the persisting system, typically a
//! unique index on the code column.

pub mod clock;
pub mod multi_seller;
pub mod sequence;
pub mod trade_no;

pub use clock::{Clock, FixedClock, SystemClock};
pub use multi_seller::MultiSellerOrderCodeCreator;
pub use sequence::{SequenceRequest, SequenceTypeOrderCodeCreator};
pub use trade_no::{create_trade_no, parse_trade_no};

use codes_types::{CodeError, Result};

/// Shared capability of the order code creators
///
/// The variants take different inputs, so the input shape is an associated type.
pub trait OrderCodeCreator {
    type Input;

    fn create_code(&self, input: Self::Input) -> Result<String>;
}

/// Prefixes end up in identifiers stored and compared as plain text
pub(crate) fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(CodeError::config(format!(
            "prefix must be ASCII alphanumeric, got {:?}",
            prefix
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_prefix() {
        assert!(validate_prefix("").is_ok());
        assert!(validate_prefix("SO2").is_ok());
        assert!(validate_prefix("S_O").is_err());
        assert!(validate_prefix("单").is_err());
    }
}
