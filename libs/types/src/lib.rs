//! # Order Codes Shared Types
//!
//! Error taxonomy, typed identifiers and the fixed-width decimal encoder used by
//! every order code creator in the workspace.
//!
//! ## Design Philosophy
//!
//! - **Fail Fast**: every precondition is checked at the entry point and reported
//!   as a [`CodeError`]; there is no partial result and no silent truncation
//! - **Type Safety**: seller, buyer and trade identifiers are distinct types
//! - **Plain Strings Out**: generated codes are ordinary `String`s, produced once
//!
//! ## Quick Start
//!
//! ```rust
//! use codes_types::{format_fixed_width, CodeError, SequenceValue};
//!
//! assert_eq!(format_fixed_width(11, 4)?, "0011");
//! assert!(matches!(
//!     SequenceValue::new(0),
//!     Err(CodeError::InvalidSequence { sequence: 0 })
//! ));
//! # Ok::<(), CodeError>(())
//! ```

pub mod common;

pub use common::errors::{CodeError, ValidationError};
pub use common::fixed_width::{digit_count, format_fixed_width, zero_pad, FixedWidth};
pub use common::identifiers::{BuyerId, SellerId, TradeId};
pub use common::sequence::SequenceValue;

/// Result type for code generation
pub type Result<T> = std::result::Result<T, CodeError>;
