//! Multi-seller order codes
//!
//! ## Layout
//!
//! ```text
//! [prefix][yyMMddHHmmssSSS][seller tail][buyer tail][counter:3][random]
//!          15 digits, UTC   id_digits    id_digits   000-999    random_digits,
//!                                                               absent in debug
//! ```
//!
//! ## Uniqueness
//!
//! Orders from many sellers interleave, and the same seller/buyer pair can
//! place several orders inside one millisecond, so the timestamp alone is not
//! enough. Each creator owns one `AtomicU64` packing a logical millisecond and
//! a per-millisecond counter:
//!
//! - the clock moved past the logical millisecond: adopt it, counter 0
//! - same (or earlier) millisecond: counter + 1
//! - counter exhausted: borrow the next logical millisecond, counter 0
//!
//! The logical time never moves backwards, so every call on one instance gets
//! a distinct (millisecond, counter) pair and therefore a distinct code, even
//! with a frozen clock and across threads. The random suffix adds entropy
//! between separate processes; it is not needed for uniqueness within one.

use crate::clock::{render_millis, Clock, SystemClock};
use crate::{validate_prefix, OrderCodeCreator};
use codes_config::{multi_seller, MultiSellerConfig};
use codes_types::{zero_pad, BuyerId, CodeError, Result, SellerId};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace, warn};

/// Bits reserved for the counter in the packed stamp
const COUNTER_BITS: u32 = 10;
const COUNTER_MASK: u64 = (1 << COUNTER_BITS) - 1;

/// Concurrent callers can record their clock readings out of order
const CLOCK_STEP_BACK_TOLERANCE_MILLIS: u64 = 1;

/// Builds order codes that stay distinct across rapid repeated calls
#[derive(Debug)]
pub struct MultiSellerOrderCodeCreator<C = SystemClock> {
    config: MultiSellerConfig,
    clock: C,
    /// (logical millisecond << COUNTER_BITS) | counter of the last issued code
    stamp: AtomicU64,
    /// Highest clock reading seen, for detecting a clock that steps back
    last_clock: AtomicU64,
    id_modulus: u64,
    random_modulus: u64,
}

impl MultiSellerOrderCodeCreator<SystemClock> {
    /// Creator reading the system clock
    pub fn new(config: MultiSellerConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> MultiSellerOrderCodeCreator<C> {
    /// Validates `config`: the prefix must be ASCII alphanumeric, `id_digits`
    /// within 1..=10 and `random_digits` at most 6
    pub fn with_clock(config: MultiSellerConfig, clock: C) -> Result<Self> {
        validate_prefix(&config.prefix)?;

        if config.id_digits == 0 || config.id_digits > multi_seller::MAX_ID_DIGITS {
            return Err(CodeError::config(format!(
                "id_digits must be within 1..={}, got {}",
                multi_seller::MAX_ID_DIGITS,
                config.id_digits
            )));
        }
        if config.random_digits > multi_seller::MAX_RANDOM_DIGITS {
            return Err(CodeError::config(format!(
                "random_digits must be at most {}, got {}",
                multi_seller::MAX_RANDOM_DIGITS,
                config.random_digits
            )));
        }

        let random_digits = if config.debug { 0 } else { config.random_digits };
        let id_modulus = 10u64.pow(config.id_digits as u32);
        let random_modulus = 10u64.pow(random_digits as u32);

        debug!(
            prefix = %config.prefix,
            debug = config.debug,
            id_digits = config.id_digits,
            random_digits,
            "Multi-seller order code creator ready"
        );

        Ok(Self {
            config,
            clock,
            stamp: AtomicU64::new(0),
            last_clock: AtomicU64::new(0),
            id_modulus,
            random_modulus,
        })
    }

    pub fn config(&self) -> &MultiSellerConfig {
        &self.config
    }

    /// Create an order code for `seller_id` and `buyer_id`
    ///
    /// Also used for return-order codes; callers attach the label.
    pub fn create(&self, seller_id: SellerId, buyer_id: BuyerId) -> Result<String> {
        let (millis, counter) = self.next_stamp();
        let timestamp = render_millis(millis as i64, multi_seller::TIMESTAMP_PATTERN)?;

        let id_digits = self.config.id_digits;
        let mut code = String::with_capacity(self.config.code_len());
        code.push_str(&self.config.prefix);
        code.push_str(&timestamp);
        code.push_str(&zero_pad(seller_id.inner() % self.id_modulus, id_digits));
        code.push_str(&zero_pad(buyer_id.inner() % self.id_modulus, id_digits));
        code.push_str(&zero_pad(counter, multi_seller::COUNTER_WIDTH));

        if self.random_modulus > 1 {
            let random = rand::thread_rng().gen_range(0..self.random_modulus);
            code.push_str(&zero_pad(random, self.config.random_digits));
        }

        trace!(%seller_id, %buyer_id, code = %code, "Created multi-seller order code");
        Ok(code)
    }

    /// Advance the packed stamp and return the (millisecond, counter) it now holds
    fn next_stamp(&self) -> (u64, u64) {
        // Pre-epoch clocks are treated as the epoch
        let now = self.clock.now_millis().max(0) as u64;
        let previous_clock = self.last_clock.fetch_max(now, Ordering::AcqRel);
        if previous_clock.saturating_sub(now) > CLOCK_STEP_BACK_TOLERANCE_MILLIS {
            warn!(
                clock_millis = now,
                previous_clock_millis = previous_clock,
                "Clock moved backwards, holding logical time"
            );
        }

        let mut current = self.stamp.load(Ordering::Acquire);

        loop {
            let last_millis = current >> COUNTER_BITS;
            let last_counter = current & COUNTER_MASK;

            let (millis, counter) = if now > last_millis {
                (now, 0)
            } else if last_counter < multi_seller::MAX_COUNTER {
                (last_millis, last_counter + 1)
            } else {
                (last_millis + 1, 0)
            };

            let next = (millis << COUNTER_BITS) | counter;
            match self
                .stamp
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => {
                    if millis > last_millis && millis > now {
                        warn!(
                            logical_millis = millis,
                            clock_millis = now,
                            "Counter exhausted, borrowing the next millisecond"
                        );
                    }
                    return (millis, counter);
                }
                Err(actual) => current = actual,
            }
        }
    }
}

impl<C: Clock> OrderCodeCreator for MultiSellerOrderCodeCreator<C> {
    type Input = (SellerId, BuyerId);

    fn create_code(&self, (seller_id, buyer_id): (SellerId, BuyerId)) -> Result<String> {
        self.create(seller_id, buyer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    fn frozen_clock() -> FixedClock {
        FixedClock::at(Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap())
    }

    fn debug_creator(prefix: &str) -> MultiSellerOrderCodeCreator<FixedClock> {
        MultiSellerOrderCodeCreator::with_clock(MultiSellerConfig::debug(prefix), frozen_clock())
            .unwrap()
    }

    #[test]
    fn test_debug_layout() {
        let creator = debug_creator("SO");
        let code = creator.create(SellerId::new(35191), BuyerId::new(555)).unwrap();
        assert_eq!(code, "SO24030907050200051910555000");
        assert_eq!(code.len(), creator.config().code_len());
    }

    #[test]
    fn test_counter_advances_within_millisecond() {
        let creator = debug_creator("");
        let first = creator.create(SellerId::new(1), BuyerId::new(2)).unwrap();
        let second = creator.create(SellerId::new(1), BuyerId::new(2)).unwrap();
        assert!(first.ends_with("000"));
        assert!(second.ends_with("001"));
    }

    #[test]
    fn test_create_order_code_unique() {
        let creator = MultiSellerOrderCodeCreator::new(MultiSellerConfig::default()).unwrap();
        let codes: HashSet<String> = (0..100)
            .map(|_| creator.create(SellerId::new(35191), BuyerId::new(555)).unwrap())
            .collect();
        assert_eq!(codes.len(), 100);
    }

    #[test]
    fn test_counter_exhaustion_borrows_next_millisecond() {
        let clock = frozen_clock();
        let creator =
            MultiSellerOrderCodeCreator::with_clock(MultiSellerConfig::debug(""), clock.clone())
                .unwrap();

        let codes: Vec<String> = (0..1001)
            .map(|_| creator.create(SellerId::new(1), BuyerId::new(1)).unwrap())
            .collect();

        assert!(codes[999].starts_with("240309070502000"));
        assert!(codes[999].ends_with("999"));
        assert!(codes[1000].starts_with("240309070502001"));
        assert!(codes[1000].ends_with("000"));
        assert_eq!(codes.iter().collect::<HashSet<_>>().len(), 1001);

        // The clock catching up does not reuse the borrowed millisecond
        clock.advance(1);
        let next = creator.create(SellerId::new(1), BuyerId::new(1)).unwrap();
        assert!(next.starts_with("240309070502001"));
        assert!(next.ends_with("001"));
    }

    #[test]
    fn test_clock_moving_backwards_stays_unique() {
        let clock = frozen_clock();
        let creator =
            MultiSellerOrderCodeCreator::with_clock(MultiSellerConfig::debug(""), clock.clone())
                .unwrap();

        let before = creator.create(SellerId::new(9), BuyerId::new(9)).unwrap();
        clock.advance(-60_000);
        let after = creator.create(SellerId::new(9), BuyerId::new(9)).unwrap();

        assert_ne!(before, after);
        assert!(after > before);
    }

    /// Collects formatted log output for assertions
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_warnings(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.text()
    }

    #[test]
    fn test_clock_anomalies_are_warned() {
        let clock = frozen_clock();
        let creator =
            MultiSellerOrderCodeCreator::with_clock(MultiSellerConfig::debug(""), clock.clone())
                .unwrap();

        let steady = with_captured_warnings(|| {
            for _ in 0..1000 {
                creator.create(SellerId::new(1), BuyerId::new(1)).unwrap();
            }
        });
        assert!(steady.is_empty(), "unexpected warnings: {}", steady);

        let borrowed = with_captured_warnings(|| {
            creator.create(SellerId::new(1), BuyerId::new(1)).unwrap();
        });
        assert!(borrowed.contains("Counter exhausted"));

        clock.advance(-5_000);
        let backwards = with_captured_warnings(|| {
            creator.create(SellerId::new(1), BuyerId::new(1)).unwrap();
        });
        assert!(backwards.contains("Clock moved backwards"));
    }

    #[test]
    fn test_random_suffix_outside_debug() {
        let config = MultiSellerConfig {
            random_digits: 3,
            ..MultiSellerConfig::default()
        };
        let creator = MultiSellerOrderCodeCreator::with_clock(config, frozen_clock()).unwrap();
        let code = creator.create(SellerId::new(1161), BuyerId::new(5555555)).unwrap();
        assert_eq!(code.len(), 15 + 4 + 4 + 3 + 3);
        assert!(code.starts_with("24030907050200011615555000"));
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_id_tails() {
        let config = MultiSellerConfig {
            id_digits: 2,
            ..MultiSellerConfig::debug("")
        };
        let creator = MultiSellerOrderCodeCreator::with_clock(config, frozen_clock()).unwrap();
        let code = creator.create(SellerId::new(111121), BuyerId::new(7)).unwrap();
        assert_eq!(&code[15..19], "2107");
    }

    #[test]
    fn test_invalid_config() {
        let cases = [
            MultiSellerConfig {
                prefix: "SO ".to_string(),
                ..MultiSellerConfig::default()
            },
            MultiSellerConfig {
                id_digits: 0,
                ..MultiSellerConfig::default()
            },
            MultiSellerConfig {
                id_digits: 11,
                ..MultiSellerConfig::default()
            },
            MultiSellerConfig {
                random_digits: 7,
                ..MultiSellerConfig::default()
            },
        ];

        for config in cases {
            let result = MultiSellerOrderCodeCreator::with_clock(config.clone(), frozen_clock());
            assert!(
                matches!(result, Err(CodeError::InvalidConfig { .. })),
                "config should be rejected: {:?}",
                config
            );
        }
    }

    #[test]
    fn test_trait_dispatch() {
        let creator = debug_creator("RT");
        let code = creator
            .create_code((SellerId::new(1161), BuyerId::new(5555555)))
            .unwrap();
        assert_eq!(code, "RT24030907050200011615555000");
    }
}
