//! Code layout constants
//!
//! Widths, offsets and date patterns shared by the creators. Changing any of
//! these changes the shape of every code issued afterwards, so downstream
//! storage columns must be sized from them.

/// Trade number layout: `zero_pad(BASE + trade_id, 8) ++ zero_pad(count + 1, 4)`
pub mod trade_no {
    /// Offset added to the trade id before encoding
    pub const TRADE_ID_BASE: u64 = 1_000_000;

    /// Minimum width of the trade id field
    pub const TRADE_ID_WIDTH: usize = 8;

    /// Minimum width of the trade number count field
    pub const COUNT_WIDTH: usize = 4;

    /// Length of a trade number whose fields did not overflow
    pub const ENCODED_LEN: usize = TRADE_ID_WIDTH + COUNT_WIDTH;
}

/// Sequence-type order codes
pub mod sequence {
    /// UTC calendar day prefix, 8 digits
    pub const DATE_PATTERN: &str = "%Y%m%d";

    /// Width used when a caller has no width of its own
    pub const DEFAULT_WIDTH: usize = 8;
}

/// Multi-seller order codes
pub mod multi_seller {
    /// UTC timestamp down to milliseconds, 15 digits
    pub const TIMESTAMP_PATTERN: &str = "%y%m%d%H%M%S%3f";

    /// Rendered length of `TIMESTAMP_PATTERN`
    pub const TIMESTAMP_PATTERN_LEN: usize = 15;

    /// Digits kept from the tail of seller and buyer ids
    pub const DEFAULT_ID_DIGITS: usize = 4;

    /// Upper bound for `id_digits`
    pub const MAX_ID_DIGITS: usize = 10;

    /// Random digits appended outside debug mode
    pub const DEFAULT_RANDOM_DIGITS: usize = 2;

    /// Upper bound for `random_digits`
    pub const MAX_RANDOM_DIGITS: usize = 6;

    /// Width of the intra-millisecond counter field
    pub const COUNTER_WIDTH: usize = 3;

    /// Largest counter value before the next logical millisecond is borrowed
    pub const MAX_COUNTER: u64 = 999;
}

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "ORDER_CODES";

/// Separator between prefix, section and key in environment overrides
pub const ENV_SEPARATOR: &str = "__";
