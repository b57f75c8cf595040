// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use alloc::vec::Vec;
use core::time::Duration;

use crate::types::{CollapsedDoubleClick, Direction, Orientation, Primary, SizeUnit, TransitionEnd};

/// Default pixel tolerance within which a dragged divider snaps to a snap point.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 12.0;

/// Configuration for a [`SplitPanel`](crate::SplitPanel).
///
/// Values in [`SplitConfig::size_unit`] apply to `min_size`, `max_size` and `snap_points`.
/// `collapsed_size` is always a percentage. Nothing here is validated: `min_size > max_size`
/// or negative snap points produce whatever the arithmetic produces.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitConfig {
    /// Layout axis.
    pub orientation: Orientation,
    /// Text direction; mirrors horizontal drags in RTL.
    pub direction: Direction,
    /// Authoritative region, if any.
    pub primary: Option<Primary>,
    /// Unit of the stored size and of the size bounds below.
    pub size_unit: SizeUnit,
    /// Ignore keyboard, drag and double-click input.
    pub disabled: bool,
    /// Allow Enter and drag thresholds to collapse the primary region.
    pub collapsible: bool,
    /// Minimum primary size.
    pub min_size: Option<f64>,
    /// Maximum primary size.
    pub max_size: Option<f64>,
    /// Sizes the divider is attracted to.
    pub snap_points: Vec<f64>,
    /// Pixel tolerance for drag snapping.
    pub snap_threshold: f64,
    /// How far (in pixels) past `min_size` a drag must go to collapse.
    pub collapse_threshold: Option<f64>,
    /// Percentage the primary region takes while collapsed.
    pub collapsed_size: f64,
    /// Length of the collapse/expand transition.
    pub transition_duration: Duration,
    /// How the transition state is cleared.
    pub transition_end: TransitionEnd,
    /// Double-click policy while collapsed.
    pub collapsed_double_click: CollapsedDoubleClick,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            direction: Direction::default(),
            primary: None,
            size_unit: SizeUnit::default(),
            disabled: false,
            collapsible: false,
            min_size: None,
            max_size: None,
            snap_points: Vec::new(),
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            collapse_threshold: None,
            collapsed_size: 0.0,
            transition_duration: Duration::ZERO,
            transition_end: TransitionEnd::default(),
            collapsed_double_click: CollapsedDoubleClick::default(),
        }
    }
}

impl SplitConfig {
    /// True when `primary` is [`Primary::End`]; keyboard and drag input are inverted.
    #[inline]
    pub(crate) fn primary_is_end(&self) -> bool {
        self.primary == Some(Primary::End)
    }
}
