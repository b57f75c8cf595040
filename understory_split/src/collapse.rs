// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapse and expand.
//!
//! ## State
//!
//! `{expanded, collapsed}` crossed with a transient transition state
//! `{none, collapsing, expanding}`.
//!
//! - expanded → collapsed: the current raw size is cached, the size is forced to the
//!   configured collapsed size, and the transition state becomes `Collapsing`.
//! - collapsed → expanded: the cached size is written back and the transition state
//!   becomes `Expanding`.
//!
//! Collapsing at the collapsed size still caches (that size) and still sets the transition
//! state; only the size write is a no-op.
//!
//! ## Clearing the transition state
//!
//! With [`TransitionEnd::Timer`] the state clears once the configured duration has been
//! reported through [`SplitPanel::advance`]; each new transition restarts the countdown.
//! With [`TransitionEnd::Signal`] it clears only on [`SplitPanel::transition_finished`], which
//! also queues [`SplitEvent::TransitionEnd`] for the host to forward.

use alloc::format;
use alloc::string::String;
use core::time::Duration;

use crate::config::SplitConfig;
use crate::panel::SplitPanel;
use crate::pointer::ThresholdLocation;
use crate::timer::AutoReset;
use crate::types::{SplitEvent, TransitionEnd, TransitionState};

#[derive(Clone, Debug)]
pub(crate) struct CollapseState {
    /// Raw size, in the configured unit, restored on expand.
    pub(crate) expanded_size: f64,
    pub(crate) transition: AutoReset<TransitionState>,
}

impl CollapseState {
    pub(crate) fn new(config: &SplitConfig) -> Self {
        Self {
            expanded_size: 0.0,
            transition: AutoReset::new(config.transition_duration),
        }
    }
}

impl SplitPanel {
    /// Whether the primary region is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Set the collapsed flag and reconcile the size with it.
    ///
    /// This is the only write path for the flag. Setting the current value does nothing.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        if collapsed == self.collapsed {
            return;
        }

        let state = if collapsed {
            self.collapse.expanded_size = self.size;
            self.collapsed = true;
            self.set_size_percentage(self.config.collapsed_size);
            TransitionState::Collapsing
        } else {
            self.collapsed = false;
            self.store_size(self.collapse.expanded_size);
            self.remember_pixels();
            TransitionState::Expanding
        };
        log::debug!(
            "collapsed -> {collapsed}; cached {}, size now {}",
            self.collapse.expanded_size,
            self.size
        );

        // A gesture in progress keeps its latch until drag_end.
        if !self.pointer.dragging {
            self.pointer.threshold = ThresholdLocation::for_collapsed(collapsed);
        }

        match self.config.transition_end {
            TransitionEnd::Timer => self.collapse.transition.set(state),
            TransitionEnd::Signal => self.collapse.transition.set_held(state),
        }
        self.push_event(SplitEvent::CollapsedChanged(collapsed));
    }

    /// Collapse the primary region.
    pub fn collapse(&mut self) {
        self.set_collapsed(true);
    }

    /// Expand the primary region to its cached size.
    pub fn expand(&mut self) {
        self.set_collapsed(false);
    }

    /// Set the collapsed flag to `collapsed`.
    pub fn toggle(&mut self, collapsed: bool) {
        self.set_collapsed(collapsed);
    }

    /// Percentage that expanding will restore.
    pub fn expanded_size_percentage(&self) -> f64 {
        self.to_percentage(self.collapse.expanded_size)
    }

    /// Transition in progress, if any.
    pub fn collapse_transition_state(&self) -> Option<TransitionState> {
        self.collapse.transition.get()
    }

    /// Report elapsed time to the transition countdown.
    ///
    /// Returns the transition that just ended, if any. Only meaningful with
    /// [`TransitionEnd::Timer`]; in signal mode nothing is armed and this returns `None`.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TransitionState> {
        let ended = self.collapse.transition.advance(elapsed);
        if let Some(state) = ended {
            log::trace!("transition {state:?} timed out");
        }
        ended
    }

    /// The presentation layer finished its transition.
    ///
    /// With [`TransitionEnd::Signal`] this clears the transition state and queues
    /// [`SplitEvent::TransitionEnd`] carrying the cleared state. With [`TransitionEnd::Timer`] the
    /// signal is ignored; the countdown owns the state.
    pub fn transition_finished(&mut self) -> Option<TransitionState> {
        if self.config.transition_end != TransitionEnd::Signal {
            return None;
        }
        let ended = self.collapse.transition.clear()?;
        self.push_event(SplitEvent::TransitionEnd(ended));
        Some(ended)
    }

    /// Transition duration as a CSS time value, e.g. `"300ms"`.
    pub fn transition_duration_css(&self) -> String {
        format!("{}ms", self.config.transition_duration.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SizeUnit;
    use alloc::vec;

    fn panel(size: f64) -> SplitPanel {
        SplitPanel::new(
            SplitConfig {
                transition_duration: Duration::from_millis(300),
                ..Default::default()
            },
            size,
        )
    }

    #[test]
    fn starts_without_transition() {
        let p = panel(50.0);
        assert_eq!(p.collapse_transition_state(), None);
        assert_eq!(p.transition_duration_css(), "300ms");
    }

    #[test]
    fn collapse_caches_and_zeroes() {
        let mut p = panel(75.0);
        p.collapse();
        assert!(p.is_collapsed());
        assert_eq!(p.size_percentage(), 0.0);
        assert_eq!(p.expanded_size_percentage(), 75.0);
        assert_eq!(
            p.collapse_transition_state(),
            Some(TransitionState::Collapsing)
        );
    }

    #[test]
    fn expand_restores() {
        let mut p = panel(60.0);
        p.collapse();
        p.expand();
        assert!(!p.is_collapsed());
        assert_eq!(p.size_percentage(), 60.0);
        assert_eq!(
            p.collapse_transition_state(),
            Some(TransitionState::Expanding)
        );
    }

    #[test]
    fn round_trips_across_cycles() {
        let mut p = panel(42.0);
        for _ in 0..3 {
            p.collapse();
            assert_eq!(p.size_percentage(), 0.0);
            p.expand();
            assert_eq!(p.size_percentage(), 42.0);
        }
    }

    #[test]
    fn restores_latest_expanded_size() {
        let mut p = panel(42.0);
        p.collapse();
        p.expand();
        p.set_size(80.0);
        p.collapse();
        assert_eq!(p.size_percentage(), 0.0);
        p.expand();
        assert_eq!(p.size_percentage(), 80.0);
    }

    #[test]
    fn collapse_at_zero_still_transitions() {
        let mut p = panel(0.0);
        p.collapse();
        assert_eq!(p.size_percentage(), 0.0);
        assert_eq!(
            p.collapse_transition_state(),
            Some(TransitionState::Collapsing)
        );
        // Only the flag changed; the size write was a no-op.
        assert_eq!(p.drain_events(), vec![SplitEvent::CollapsedChanged(true)]);
        p.expand();
        assert_eq!(p.size_percentage(), 0.0);
    }

    #[test]
    fn pixel_size_restores_without_extent() {
        let mut p = SplitPanel::new(
            SplitConfig {
                size_unit: SizeUnit::Pixels,
                ..Default::default()
            },
            150.0,
        );
        p.collapse();
        assert_eq!(p.size(), 0.0);
        p.expand();
        assert_eq!(p.size(), 150.0);
    }

    #[test]
    fn custom_collapsed_size() {
        let mut p = SplitPanel::new(
            SplitConfig {
                collapsed_size: 10.0,
                ..Default::default()
            },
            60.0,
        );
        p.collapse();
        assert_eq!(p.size_percentage(), 10.0);
        p.expand();
        assert_eq!(p.size_percentage(), 60.0);
    }

    #[test]
    fn toggle_and_idempotent_writes() {
        let mut p = panel(45.0);
        p.toggle(true);
        p.toggle(true);
        assert_eq!(p.expanded_size_percentage(), 45.0);
        p.toggle(false);
        p.toggle(false);
        assert_eq!(p.size_percentage(), 45.0);
        assert_eq!(
            p.drain_events(),
            vec![
                SplitEvent::SizeChanged(0.0),
                SplitEvent::CollapsedChanged(true),
                SplitEvent::SizeChanged(45.0),
                SplitEvent::CollapsedChanged(false),
            ]
        );
    }

    #[test]
    fn timer_clears_transition() {
        let mut p = panel(50.0);
        p.collapse();
        assert_eq!(p.advance(Duration::from_millis(299)), None);
        assert_eq!(
            p.advance(Duration::from_millis(1)),
            Some(TransitionState::Collapsing)
        );
        assert_eq!(p.collapse_transition_state(), None);
    }

    // A second toggle during an active countdown restarts it instead of queueing a clear.
    #[test]
    fn rapid_toggle_restarts_timer() {
        let mut p = panel(65.0);
        p.collapse();
        let _ = p.advance(Duration::from_millis(200));
        p.expand();
        assert_eq!(p.size_percentage(), 65.0);
        assert_eq!(p.advance(Duration::from_millis(200)), None);
        assert_eq!(
            p.collapse_transition_state(),
            Some(TransitionState::Expanding)
        );
        assert_eq!(
            p.advance(Duration::from_millis(100)),
            Some(TransitionState::Expanding)
        );
    }

    #[test]
    fn signal_mode_waits_for_transition_end() {
        let mut p = SplitPanel::new(
            SplitConfig {
                transition_duration: Duration::from_millis(300),
                transition_end: TransitionEnd::Signal,
                ..Default::default()
            },
            50.0,
        );
        p.collapse();
        let _ = p.drain_events();
        assert_eq!(p.advance(Duration::from_secs(1)), None);
        assert_eq!(
            p.collapse_transition_state(),
            Some(TransitionState::Collapsing)
        );
        assert_eq!(p.transition_finished(), Some(TransitionState::Collapsing));
        assert_eq!(p.collapse_transition_state(), None);
        assert_eq!(
            p.drain_events(),
            vec![SplitEvent::TransitionEnd(TransitionState::Collapsing)]
        );
        // Nothing left to finish.
        assert_eq!(p.transition_finished(), None);
        assert!(p.drain_events().is_empty());
    }

    #[test]
    fn timer_mode_ignores_signal() {
        let mut p = panel(50.0);
        p.collapse();
        assert_eq!(p.transition_finished(), None);
        assert_eq!(
            p.collapse_transition_state(),
            Some(TransitionState::Collapsing)
        );
    }

    #[test]
    fn duration_css_follows_config() {
        let mut p = panel(50.0);
        p.set_config(SplitConfig {
            transition_duration: Duration::from_millis(600),
            ..Default::default()
        });
        assert_eq!(p.transition_duration_css(), "600ms");
    }
}
