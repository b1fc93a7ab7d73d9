//! Per-algorithm primitive-operation counters.
//!
//! A counter is unset until its builder runs; each run resets it to zero before
//! counting. Builders own their counters; nothing reads or resets another
//! algorithm's counter.

use std::fmt;

/// Counter of one builder's most recent run (`None` = not run since last clear).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunCounter(Option<u64>);

impl RunCounter {
    /// Unset counter.
    #[inline]
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Start a run: value becomes 0.
    #[inline]
    pub fn reset(&mut self) {
        self.0 = Some(0);
    }

    /// Back to unset.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Count one primitive operation. Implicitly starts a run if unset.
    #[inline]
    pub fn bump(&mut self) {
        self.add(1);
    }

    #[inline]
    pub fn add(&mut self, n: u64) {
        self.0 = Some(self.0.unwrap_or(0) + n);
    }

    #[inline]
    pub fn get(&self) -> Option<u64> {
        self.0
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Display for RunCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => f.write_str("-"),
        }
    }
}
