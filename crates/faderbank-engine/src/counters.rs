//! Atomic transmit counters.
//!
//! [`TransmitCounters`] can be shared between the thread that ticks a bank and
//! a thread that reports statistics. All updates are single `Relaxed`
//! fetch-adds; readers get an eventually consistent [`CounterSnapshot`].

use core::sync::atomic::{AtomicU64, Ordering};

/// Counter snapshot returned by [`TransmitCounters::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    /// Controller ticks processed
    pub ticks: u64,
    /// Values handed to the transport
    pub sends: u64,
    /// Sends the gate allowed but the disconnected transport swallowed
    pub suppressed_disconnected: u64,
}

impl CounterSnapshot {
    /// Fraction of ticks that produced a send, `0.0` before the first tick.
    pub fn send_ratio(&self) -> f64 {
        if self.ticks == 0 {
            0.0
        } else {
            self.sends as f64 / self.ticks as f64
        }
    }
}

/// Lock-free counters for transmit activity.
///
/// # Example
///
/// ```rust
/// use faderbank_engine::TransmitCounters;
///
/// let counters = TransmitCounters::new();
/// counters.inc_tick();
/// counters.inc_send();
///
/// let snapshot = counters.snapshot();
/// assert_eq!(snapshot.ticks, 1);
/// assert_eq!(snapshot.sends, 1);
/// ```
#[derive(Debug)]
pub struct TransmitCounters {
    ticks: AtomicU64,
    sends: AtomicU64,
    suppressed_disconnected: AtomicU64,
}

impl Default for TransmitCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl TransmitCounters {
    /// All counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU64::new(0),
            sends: AtomicU64::new(0),
            suppressed_disconnected: AtomicU64::new(0),
        }
    }

    /// Increment the tick counter.
    #[inline]
    pub fn inc_tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the send counter.
    #[inline]
    pub fn inc_send(&self) {
        self.sends.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a send dropped because the transport was disconnected.
    #[inline]
    pub fn inc_suppressed(&self) {
        self.suppressed_disconnected.fetch_add(1, Ordering::Relaxed);
    }

    /// Read all counters without resetting them.
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            ticks: self.ticks.load(Ordering::Relaxed),
            sends: self.sends.load(Ordering::Relaxed),
            suppressed_disconnected: self.suppressed_disconnected.load(Ordering::Relaxed),
        }
    }

    /// Read all counters and reset them to zero.
    pub fn snapshot_and_reset(&self) -> CounterSnapshot {
        CounterSnapshot {
            ticks: self.ticks.swap(0, Ordering::Relaxed),
            sends: self.sends.swap(0, Ordering::Relaxed),
            suppressed_disconnected: self.suppressed_disconnected.swap(0, Ordering::Relaxed),
        }
    }
}
