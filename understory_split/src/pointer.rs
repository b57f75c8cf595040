// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Divider dragging and double-click snapping.
//!
//! ## Drag samples
//!
//! Each [`SplitPanel::drag_move`] runs, in order:
//!
//! 1. Pick the coordinate on the layout axis.
//! 2. Mirror it for horizontal RTL, then again for `primary = end`, so it measures the primary
//!    region from its own edge.
//! 3. Threshold check against the single boundary selected by the drag latch.
//! 4. Snap to any snap point within `snap_threshold` pixels.
//! 5. Write the percentage, clamped to 0–100.
//!
//! ## Threshold latch
//!
//! The latch is fixed for a whole gesture. It is `Collapse` when the gesture began expanded
//! (boundary `min_size_px - collapse_threshold`) and `Expand` when it began collapsed (boundary
//! `collapse_threshold`). During a gesture it is recomputed only when the drag ends, so a
//! position hovering near either boundary cannot flip the panel back and forth. Between
//! gestures it follows every change of the collapsed flag (keyboard, host, double-click).

use alloc::vec::Vec;
use kurbo::Point;

use crate::closest::closest_number;
use crate::panel::SplitPanel;
use crate::types::{CollapsedDoubleClick, Direction, Orientation};
use crate::units::{clamp, pixels_to_percentage};

/// Which collapse boundary the current drag gesture tests against.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ThresholdLocation {
    Collapse,
    Expand,
}

impl ThresholdLocation {
    pub(crate) fn for_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Self::Expand
        } else {
            Self::Collapse
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct PointerState {
    pub(crate) dragging: bool,
    pub(crate) threshold: ThresholdLocation,
}

impl PointerState {
    pub(crate) fn new(threshold: ThresholdLocation) -> Self {
        Self {
            dragging: false,
            threshold,
        }
    }
}

impl SplitPanel {
    /// Whether a divider drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.pointer.dragging
    }

    /// Begin a divider drag. Ignored when disabled.
    pub fn drag_start(&mut self) {
        if self.config.disabled || self.pointer.dragging {
            return;
        }
        self.pointer.dragging = true;
        log::debug!("drag start, latch {:?}", self.pointer.threshold);
    }

    /// Feed one drag sample: the divider's offset within the container, in pixels.
    ///
    /// Ignored unless a drag is in progress and the panel is enabled.
    pub fn drag_move(&mut self, position: Point) {
        if self.config.disabled || !self.pointer.dragging {
            return;
        }

        let extent = self.component_size();
        let mut pos = match self.config.orientation {
            Orientation::Horizontal => position.x,
            Orientation::Vertical => position.y,
        };
        if self.config.orientation == Orientation::Horizontal
            && self.config.direction == Direction::Rtl
        {
            pos = extent - pos;
        }
        if self.config.primary_is_end() {
            pos = extent - pos;
        }

        self.check_collapse_threshold(pos);

        let tolerance = self.config.snap_threshold;
        for snap in self.snap_pixels() {
            if pos >= snap - tolerance && pos <= snap + tolerance {
                log::trace!("snap {pos}px -> {snap}px");
                pos = snap;
            }
        }

        // A collapsed panel holds the collapsed size until a sample crosses the expand boundary.
        if self.collapsed {
            return;
        }
        self.set_size_percentage(clamp(pixels_to_percentage(extent, pos), 0.0, 100.0));
    }

    /// End the divider drag and re-arm the latch from the current collapsed flag.
    pub fn drag_end(&mut self) {
        if !self.pointer.dragging {
            return;
        }
        self.pointer.dragging = false;
        self.pointer.threshold = ThresholdLocation::for_collapsed(self.collapsed);
        log::debug!("drag end, next latch {:?}", self.pointer.threshold);
    }

    /// Snap the divider to the snap point nearest the current pixel size.
    ///
    /// Does nothing when disabled or when there are no finite snap points. While collapsed the
    /// behavior follows [`SplitConfig::collapsed_double_click`](crate::SplitConfig::collapsed_double_click).
    pub fn handle_dbl_click(&mut self) {
        if self.config.disabled {
            return;
        }
        let snaps: Vec<f64> = self.snap_pixels().filter(|s| s.is_finite()).collect();
        if snaps.is_empty() {
            return;
        }

        if self.collapsed {
            match self.config.collapsed_double_click {
                CollapsedDoubleClick::Ignore => return,
                CollapsedDoubleClick::Expand => self.set_collapsed(false),
            }
        }

        if let Some(target) = closest_number(&snaps, self.size_pixels()) {
            log::debug!("double-click snap to {target}px");
            self.set_size_pixels(target);
        }
    }

    fn check_collapse_threshold(&mut self, pos: f64) {
        if !self.config.collapsible {
            return;
        }
        let (Some(threshold), Some(min_px)) =
            (self.config.collapse_threshold, self.min_size_pixels())
        else {
            return;
        };

        match self.pointer.threshold {
            ThresholdLocation::Collapse if !self.collapsed && pos < min_px - threshold => {
                log::trace!(
                    "drag at {pos}px crossed collapse boundary {}",
                    min_px - threshold
                );
                self.set_collapsed(true);
            }
            ThresholdLocation::Expand if self.collapsed && pos > threshold => {
                log::trace!("drag at {pos}px crossed expand boundary {threshold}");
                self.set_collapsed(false);
            }
            _ => {}
        }
    }
}
