//! Clock - Time Source for Order Codes
//!
//! ## Purpose
//!
//! Every order code carries a date or timestamp field. Creators read time
//! through the [`Clock`] trait instead of calling the system clock directly,
//! so the same creator code runs against wall time in production and against
//! a frozen, manually advanced [`FixedClock`] in tests and replays.
//!
//! All rendering is done in UTC. A creator never assumes the clock is
//! monotonic; the multi-seller creator keeps its own logical time on top of
//! whatever the clock reports.
//!
//! ## Usage
//!
//! ```rust
//! use order_codes::clock::{render_millis, Clock, FixedClock};
//!
//! let clock = FixedClock::new(1_700_000_000_000);
//! clock.advance(250);
//! assert_eq!(clock.now_millis(), 1_700_000_000_250);
//! assert_eq!(render_millis(clock.now_millis(), "%Y%m%d").unwrap(), "20231114");
//! ```

use chrono::{DateTime, Utc};
use codes_types::{CodeError, Result};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of wall-clock time in milliseconds since the Unix epoch
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Reads the system clock on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give the other to a creator.
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    current_millis: Arc<AtomicI64>,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self {
            current_millis: Arc::new(AtomicI64::new(millis)),
        }
    }

    /// Clock frozen at the given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::new(instant.timestamp_millis())
    }

    pub fn set(&self, millis: i64) {
        self.current_millis.store(millis, Ordering::Release);
    }

    /// Move the clock by `delta_millis`; negative values move it backwards
    pub fn advance(&self, delta_millis: i64) {
        self.current_millis.fetch_add(delta_millis, Ordering::AcqRel);
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now_millis(&self) -> i64 {
        self.current_millis.load(Ordering::Acquire)
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    #[inline]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Format a millisecond timestamp in UTC with a `chrono` pattern
pub fn render_millis(millis: i64, pattern: &str) -> Result<String> {
    let instant = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or(CodeError::TimestampOutOfRange { millis })?;
    Ok(instant.format(pattern).to_string())
}
