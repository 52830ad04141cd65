//! Payment trade numbers
//!
//! `zero_pad(1_000_000 + trade_id, 8) ++ zero_pad(count_trade_no + 1, 4)`
//!
//! Unlike order codes, a trade number carries no entropy: it is a pure
//! function of the trade id and of how many trade numbers that trade already
//! has, so it can be rebuilt (and parsed back) at any time.
//!
//! ```rust
//! use codes_types::TradeId;
//! use order_codes::trade_no::{create_trade_no, parse_trade_no};
//!
//! let trade_no = create_trade_no(TradeId::new(5545), 88)?;
//! assert_eq!(trade_no, "010055450089");
//! assert_eq!(parse_trade_no(&trade_no)?, (TradeId::new(5545), 88));
//! # Ok::<(), codes_types::CodeError>(())
//! ```

use codes_config::trade_no::{COUNT_WIDTH, ENCODED_LEN, TRADE_ID_BASE, TRADE_ID_WIDTH};
use codes_types::{zero_pad, CodeError, Result, TradeId};

/// Encode a trade id and its count of existing trade numbers
pub fn create_trade_no(trade_id: TradeId, count_trade_no: u32) -> Result<String> {
    let offset_id = TRADE_ID_BASE
        .checked_add(trade_id.inner())
        .ok_or(CodeError::Overflow {
            context: "trade id base offset",
        })?;
    let position = u64::from(count_trade_no) + 1;

    let mut trade_no = zero_pad(offset_id, TRADE_ID_WIDTH);
    trade_no.push_str(&zero_pad(position, COUNT_WIDTH));
    Ok(trade_no)
}

/// Recover `(trade_id, count_trade_no)` from a trade number
///
/// Only trade numbers whose fields fit their widths (12 digits in total)
/// can be split unambiguously; anything else is reported as malformed.
pub fn parse_trade_no(trade_no: &str) -> Result<(TradeId, u32)> {
    let malformed = |reason: &'static str| CodeError::MalformedTradeNo {
        input: trade_no.to_string(),
        reason,
    };

    if trade_no.len() != ENCODED_LEN {
        return Err(malformed("expected 12 digits"));
    }
    if !trade_no.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("expected only decimal digits"));
    }

    let (id_part, count_part) = trade_no.split_at(TRADE_ID_WIDTH);
    let offset_id: u64 = id_part
        .parse()
        .map_err(|_| malformed("unreadable trade id field"))?;
    let position: u32 = count_part
        .parse()
        .map_err(|_| malformed("unreadable count field"))?;

    let trade_id = offset_id
        .checked_sub(TRADE_ID_BASE)
        .ok_or_else(|| malformed("trade id field below base offset"))?;
    let count_trade_no = position
        .checked_sub(1)
        .ok_or_else(|| malformed("count field must be at least 1"))?;

    Ok((TradeId::new(trade_id), count_trade_no))
}
