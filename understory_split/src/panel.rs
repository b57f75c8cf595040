// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine: one stored size, one collapsed flag, and the controllers that reconcile them.

use alloc::vec::Vec;

use crate::collapse::CollapseState;
use crate::config::SplitConfig;
use crate::pointer::{PointerState, ThresholdLocation};
use crate::resize::ResizeState;
use crate::sizes::Measure;
use crate::types::SplitEvent;

/// Sizing and interaction engine for a two-region split panel.
///
/// ## Single source of truth
///
/// The only writable size is the raw value in the configured
/// [`SizeUnit`](crate::SizeUnit). Percent and pixel views
/// ([`SplitPanel::size_percentage`], [`SplitPanel::size_pixels`]) are derived on every read and
/// convert on every write.
///
/// The collapsed flag has one write path, [`SplitPanel::set_collapsed`]. Keyboard, pointer and host
/// writes all go through it, so the cached pre-collapse size and the transition state are
/// reconciled no matter who flipped the flag. While collapsed, the stored size equals the
/// configured collapsed size.
///
/// ## Driving the engine
///
/// - Measurements: [`SplitPanel::mount`], [`SplitPanel::resize`], [`SplitPanel::set_divider_box`].
/// - Input: [`SplitPanel::handle_keydown`], [`SplitPanel::drag_start`] /
///   [`SplitPanel::drag_move`] / [`SplitPanel::drag_end`], [`SplitPanel::handle_dbl_click`].
/// - Time: [`SplitPanel::advance`] or [`SplitPanel::transition_finished`], depending on
///   [`TransitionEnd`](crate::TransitionEnd).
/// - Output: [`SplitPanel::grid_template`], [`SplitPanel::is_collapsed`],
///   [`SplitPanel::collapse_transition_state`], [`SplitPanel::is_dragging`], and model updates
///   from [`SplitPanel::drain_events`].
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_split::{Primary, SplitConfig, SplitEvent, SplitPanel};
///
/// let mut panel = SplitPanel::new(
///     SplitConfig { primary: Some(Primary::Start), ..Default::default() },
///     50.0,
/// );
/// panel.mount(Size::new(400.0, 300.0), Size::new(4.0, 300.0));
///
/// panel.drag_start();
/// panel.drag_move(Point::new(100.0, 0.0));
/// panel.drag_end();
/// assert_eq!(panel.size_percentage(), 25.0);
/// assert_eq!(panel.drain_events(), vec![SplitEvent::SizeChanged(25.0)]);
///
/// // The primary region keeps its 100px when the container grows.
/// panel.resize(Size::new(800.0, 300.0));
/// assert_eq!(panel.size_percentage(), 12.5);
/// ```
#[derive(Clone, Debug)]
pub struct SplitPanel {
    pub(crate) config: SplitConfig,
    pub(crate) size: f64,
    pub(crate) collapsed: bool,
    pub(crate) measure: Measure,
    pub(crate) collapse: CollapseState,
    pub(crate) pointer: PointerState,
    pub(crate) resize: ResizeState,
    events: Vec<SplitEvent>,
}

impl SplitPanel {
    /// Create an expanded panel with `size` in the configured unit.
    ///
    /// Nothing is measured yet: all extents read as zero until [`SplitPanel::mount`].
    pub fn new(config: SplitConfig, size: f64) -> Self {
        let collapse = CollapseState::new(&config);
        Self {
            config,
            size,
            collapsed: false,
            measure: Measure::default(),
            collapse,
            pointer: PointerState::new(ThresholdLocation::Collapse),
            resize: ResizeState::default(),
            events: Vec::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// The stored size is kept as-is; when `size_unit` changes the host is expected to
    /// [`set_size`](SplitPanel::set_size) a value in the new unit.
    pub fn set_config(&mut self, config: SplitConfig) {
        self.collapse
            .transition
            .set_duration(config.transition_duration);
        self.config = config;
        self.pointer.threshold = ThresholdLocation::for_collapsed(self.collapsed);
    }

    /// Raw stored size in the configured unit.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Host write of the size model.
    ///
    /// While expanded this replaces the stored size. While collapsed the stored size stays at
    /// the collapsed size; `size` becomes the value restored on expand and refreshes the pixel
    /// footprint kept across container resizes.
    pub fn set_size(&mut self, size: f64) {
        if self.collapsed {
            self.collapse.expanded_size = size;
            self.resize.cached_pixels = self.to_pixels(size);
            log::debug!("size {size} written while collapsed; restored on expand");
            return;
        }
        self.store_size(size);
        self.remember_pixels();
    }

    /// Take all queued model updates, oldest first.
    pub fn drain_events(&mut self) -> Vec<SplitEvent> {
        core::mem::take(&mut self.events)
    }

    /// Write the raw size and queue an update if it changed.
    ///
    /// Does not touch the resize cache; see [`SplitPanel::remember_pixels`].
    pub(crate) fn store_size(&mut self, raw: f64) {
        if raw == self.size {
            return;
        }
        self.size = raw;
        self.events.push(SplitEvent::SizeChanged(raw));
    }

    pub(crate) fn push_event(&mut self, event: SplitEvent) {
        self.events.push(event);
    }
}
