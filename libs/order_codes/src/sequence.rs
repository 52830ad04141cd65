//! Sequence-type order codes
//!
//! `[prefix] ++ yyyyMMdd ++ zero_pad(sequence, max_length)`
//!
//! The caller owns the sequence (typically "the Nth order today" from a
//! database counter); this creator only encodes it. For a fixed UTC day two
//! distinct sequences always produce distinct codes, because padding never
//! truncates.

use crate::clock::{render_millis, Clock, SystemClock};
use crate::{validate_prefix, OrderCodeCreator};
use codes_config::sequence::{DATE_PATTERN, DEFAULT_WIDTH};
use codes_config::SequenceConfig;
use codes_types::{FixedWidth, Result, SequenceValue};
use tracing::{trace, warn};

/// Input of [`SequenceTypeOrderCodeCreator`] through the [`OrderCodeCreator`] trait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceRequest {
    pub sequence: i64,
    pub max_length: i64,
}

impl SequenceRequest {
    pub fn new(sequence: i64, max_length: i64) -> Self {
        Self {
            sequence,
            max_length,
        }
    }
}

/// Builds order codes from a caller-supplied sequence and the current day
#[derive(Debug, Clone)]
pub struct SequenceTypeOrderCodeCreator<C = SystemClock> {
    clock: C,
    prefix: String,
    default_width: usize,
}

impl SequenceTypeOrderCodeCreator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SequenceTypeOrderCodeCreator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SequenceTypeOrderCodeCreator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            prefix: String::new(),
            default_width: DEFAULT_WIDTH,
        }
    }

    /// Creator configured from the `[sequence]` config section
    pub fn from_config(config: &SequenceConfig, clock: C) -> Result<Self> {
        validate_prefix(&config.prefix)?;
        FixedWidth::new(config.default_width as i64)?;
        Ok(Self {
            clock,
            prefix: config.prefix.clone(),
            default_width: config.default_width,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Encode `sequence` for today, padded to at least `max_length` digits
    ///
    /// Fails with `InvalidSequence` when `sequence <= 0` and with
    /// `InvalidWidth` when `max_length <= 0`; the sequence is checked first.
    pub fn create(&self, sequence: i64, max_length: i64) -> Result<String> {
        let sequence = SequenceValue::new(sequence)?;
        let width = FixedWidth::new(max_length)?;

        if width.overflows(sequence.get()) {
            // Kept unpadded for compatibility; the code is longer than usual
            warn!(
                sequence = sequence.get(),
                max_length = width.get(),
                "Sequence exceeds configured width, code will be longer than expected"
            );
        }

        let date = render_millis(self.clock.now_millis(), DATE_PATTERN)?;
        let padded = width.format(sequence.get());

        let mut code = String::with_capacity(self.prefix.len() + date.len() + padded.len());
        code.push_str(&self.prefix);
        code.push_str(&date);
        code.push_str(&padded);

        trace!(code = %code, "Created sequence-type order code");
        Ok(code)
    }

    /// [`create`](Self::create) with the configured default width
    pub fn create_with_default_width(&self, sequence: i64) -> Result<String> {
        self.create(sequence, self.default_width as i64)
    }
}

impl<C: Clock> OrderCodeCreator for SequenceTypeOrderCodeCreator<C> {
    type Input = SequenceRequest;

    fn create_code(&self, input: SequenceRequest) -> Result<String> {
        self.create(input.sequence, input.max_length)
    }
}
