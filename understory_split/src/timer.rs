// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A value that resets itself after a countdown.
//!
//! The engine has no clock of its own. The host reports elapsed time through
//! [`AutoReset::advance`]; setting a value arms a countdown, and setting again
//! before it expires cancels the old countdown and starts a fresh one.
//!
//! ```
//! use core::time::Duration;
//! use understory_split::timer::AutoReset;
//!
//! let mut t = AutoReset::new(Duration::from_millis(300));
//! t.set(7);
//! t.advance(Duration::from_millis(200));
//! t.set(8); // restarts the countdown
//! t.advance(Duration::from_millis(200));
//! assert_eq!(t.get(), Some(8));
//! t.advance(Duration::from_millis(100));
//! assert_eq!(t.get(), None);
//! ```

use core::time::Duration;

/// A value that clears back to `None` once its countdown elapses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoReset<T> {
    value: Option<T>,
    duration: Duration,
    remaining: Option<Duration>,
}

impl<T: Copy> AutoReset<T> {
    /// Create an empty value with the given countdown length.
    pub fn new(duration: Duration) -> Self {
        Self {
            value: None,
            duration,
            remaining: None,
        }
    }

    /// Current value, if the countdown has not yet elapsed.
    pub fn get(&self) -> Option<T> {
        self.value
    }

    /// Countdown length used by the next [`AutoReset::set`].
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the countdown length. A countdown already running keeps its deadline.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Set the value and (re)arm the countdown.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
        self.remaining = Some(self.duration);
    }

    /// Set the value without arming a countdown; it stays until [`AutoReset::clear`].
    pub fn set_held(&mut self, value: T) {
        self.value = Some(value);
        self.remaining = None;
    }

    /// Clear the value and cancel any pending countdown.
    pub fn clear(&mut self) -> Option<T> {
        self.remaining = None;
        self.value.take()
    }

    /// True while a countdown is pending.
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Report elapsed time. Returns the value that was cleared, if the countdown expired.
    ///
    /// A zero-length countdown expires on the first call, whatever `elapsed` is.
    pub fn advance(&mut self, elapsed: Duration) -> Option<T> {
        let remaining = self.remaining?;
        match remaining.checked_sub(elapsed) {
            Some(left) if !left.is_zero() => {
                self.remaining = Some(left);
                None
            }
            _ => self.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn starts_empty_and_unarmed() {
        let t: AutoReset<u8> = AutoReset::new(MS_300);
        assert_eq!(t.get(), None);
        assert!(!t.is_armed());
    }

    #[test]
    fn clears_after_duration() {
        let mut t = AutoReset::new(MS_300);
        t.set(1_u8);
        assert_eq!(t.advance(Duration::from_millis(299)), None);
        assert_eq!(t.get(), Some(1));
        assert_eq!(t.advance(Duration::from_millis(1)), Some(1));
        assert_eq!(t.get(), None);
        assert!(!t.is_armed());
    }

    #[test]
    fn overshoot_clears() {
        let mut t = AutoReset::new(MS_300);
        t.set(1_u8);
        assert_eq!(t.advance(Duration::from_secs(5)), Some(1));
    }

    #[test]
    fn rearm_restarts_countdown() {
        let mut t = AutoReset::new(MS_300);
        t.set(1_u8);
        let _ = t.advance(Duration::from_millis(250));
        t.set(2);
        assert_eq!(t.advance(Duration::from_millis(250)), None);
        assert_eq!(t.get(), Some(2));
        assert_eq!(t.advance(Duration::from_millis(50)), Some(2));
    }

    #[test]
    fn zero_duration_clears_on_next_advance() {
        let mut t = AutoReset::new(Duration::ZERO);
        t.set(3_u8);
        assert_eq!(t.get(), Some(3));
        assert_eq!(t.advance(Duration::ZERO), Some(3));
    }

    #[test]
    fn held_value_ignores_time() {
        let mut t = AutoReset::new(MS_300);
        t.set_held(4_u8);
        assert_eq!(t.advance(Duration::from_secs(10)), None);
        assert_eq!(t.get(), Some(4));
        assert_eq!(t.clear(), Some(4));
        assert_eq!(t.get(), None);
    }

    #[test]
    fn advance_without_value_is_noop() {
        let mut t: AutoReset<u8> = AutoReset::new(MS_300);
        assert_eq!(t.advance(MS_300), None);
    }
}
