//! Sequence values: how many of something have happened so far

use crate::{CodeError, Result};

/// A strictly positive sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceValue(u64);

impl SequenceValue {
    /// Rejects zero and negative sequences
    pub fn new(sequence: i64) -> Result<Self> {
        if sequence <= 0 {
            return Err(CodeError::InvalidSequence { sequence });
        }
        Ok(Self(sequence as u64))
    }

    #[inline(always)]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SequenceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
