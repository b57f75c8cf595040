// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size resolution: derived percent and pixel views over the single stored size.
//!
//! Every quantity here is recomputed from the stored size, the configuration, and the latest
//! measurements on each call. Nothing is cached, so a write through one unit is immediately
//! visible through the other with no rounding beyond floating point.

use kurbo::Size;

use crate::panel::SplitPanel;
use crate::types::{Orientation, SizeUnit};
use crate::units::{percentage_to_pixels, pixels_to_percentage};

/// Latest measured boxes. Zero until the host reports them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct Measure {
    pub(crate) container: Size,
    pub(crate) divider: Size,
}

impl Measure {
    fn along(size: Size, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }
}

impl SplitPanel {
    /// Container extent along the layout axis (width when horizontal, height when vertical).
    pub fn component_size(&self) -> f64 {
        Measure::along(self.measure.container, self.config.orientation)
    }

    /// Divider thickness along the layout axis.
    pub fn divider_size(&self) -> f64 {
        Measure::along(self.measure.divider, self.config.orientation)
    }

    /// Primary size as a percentage of the container.
    pub fn size_percentage(&self) -> f64 {
        self.to_percentage(self.size)
    }

    /// Write the primary size as a percentage; converted to pixels when the unit is `px`.
    pub fn set_size_percentage(&mut self, percentage: f64) {
        let raw = self.raw_from_percentage(percentage);
        self.store_size(raw);
        self.remember_pixels();
    }

    /// Primary size in pixels.
    pub fn size_pixels(&self) -> f64 {
        self.to_pixels(self.size)
    }

    /// Write the primary size in pixels; converted to a percentage when the unit is `%`.
    pub fn set_size_pixels(&mut self, pixels: f64) {
        let raw = match self.config.size_unit {
            SizeUnit::Pixels => pixels,
            SizeUnit::Percent => pixels_to_percentage(self.component_size(), pixels),
        };
        self.store_size(raw);
        self.remember_pixels();
    }

    /// Configured minimum as a percentage, if any.
    pub fn min_size_percentage(&self) -> Option<f64> {
        self.config.min_size.map(|v| self.to_percentage(v))
    }

    /// Configured minimum in pixels, if any.
    pub fn min_size_pixels(&self) -> Option<f64> {
        self.config.min_size.map(|v| self.to_pixels(v))
    }

    /// Configured maximum as a percentage, if any.
    pub fn max_size_percentage(&self) -> Option<f64> {
        self.config.max_size.map(|v| self.to_percentage(v))
    }

    /// Configured maximum in pixels, if any.
    pub fn max_size_pixels(&self) -> Option<f64> {
        self.config.max_size.map(|v| self.to_pixels(v))
    }

    /// Snap points in pixels, in configuration order.
    pub fn snap_pixels(&self) -> impl Iterator<Item = f64> + '_ {
        self.config.snap_points.iter().map(|&v| self.to_pixels(v))
    }

    /// Convert a value in the configured unit to a percentage.
    pub(crate) fn to_percentage(&self, value: f64) -> f64 {
        match self.config.size_unit {
            SizeUnit::Percent => value,
            SizeUnit::Pixels => pixels_to_percentage(self.component_size(), value),
        }
    }

    /// Convert a value in the configured unit to pixels.
    pub(crate) fn to_pixels(&self, value: f64) -> f64 {
        match self.config.size_unit {
            SizeUnit::Pixels => value,
            SizeUnit::Percent => percentage_to_pixels(self.component_size(), value),
        }
    }

    /// Convert a percentage to a raw value in the configured unit.
    pub(crate) fn raw_from_percentage(&self, percentage: f64) -> f64 {
        match self.config.size_unit {
            SizeUnit::Percent => percentage,
            SizeUnit::Pixels => percentage_to_pixels(self.component_size(), percentage),
        }
    }
}
