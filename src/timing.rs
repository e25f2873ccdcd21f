// SPDX-License-Identifier: MPL-2.0
//! Rate-limiting helpers for event bursts.
//!
//! Both helpers are driven by host-supplied timestamps rather than a clock,
//! so their behavior is deterministic under test. [`Throttle`] admits at
//! most one call per window and *drops* the rest; [`Debounce`] collapses a
//! burst to a single trailing delivery. They are part of the stable utility
//! surface: page-specific scripts outside this crate rely on both, so
//! `Debounce` stays exported even though the engine itself only wires
//! `Throttle` to scroll.

/// Leading-edge rate limiter: the first call in a window passes, later calls
/// inside the same window are dropped.
#[derive(Debug, Clone)]
pub struct Throttle {
    window_ms: u64,
    open_at: u64,
}

impl Throttle {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            open_at: 0,
        }
    }

    /// Returns `true` if the call is admitted; admitting closes the window
    /// until `now_ms + window`.
    pub fn admit(&mut self, now_ms: u64) -> bool {
        if now_ms >= self.open_at {
            self.open_at = now_ms.saturating_add(self.window_ms);
            true
        } else {
            false
        }
    }
}

/// Trailing-edge burst collapser: every `schedule` call resets the deadline,
/// and only the value from the last call is delivered once the burst goes
/// quiet for the configured wait.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    wait_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debounce<T> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    /// Records `value` for delivery after the quiet period, superseding any
    /// previously scheduled value.
    pub fn schedule(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms.saturating_add(self.wait_ms)));
    }

    /// Delivers the pending value once its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now_ms >= *deadline => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
