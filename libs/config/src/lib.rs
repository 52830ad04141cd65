//! # Order Codes Configuration
//!
//! Centralized constants and configuration loading for the order code
//! creators and the command-line tool.
//!
//! ## Features
//!
//! - **Layout Constants**: trade number offsets and widths, date patterns
//! - **Creator Settings**: prefixes, debug mode, digit counts
//! - **Layered Loading**: defaults, TOML file, `ORDER_CODES__*` environment overrides
//!
//! ## Usage
//!
//! ```rust
//! use codes_config::{trade_no, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.multi_seller.id_digits, 4);
//! assert_eq!(trade_no::TRADE_ID_BASE, 1_000_000);
//! ```

pub mod codes;
pub mod generator_config;

// Re-export commonly used types
pub use codes::*;
pub use generator_config::{GeneratorConfig, LoggingConfig, MultiSellerConfig, SequenceConfig};
