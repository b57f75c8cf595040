// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurements and container-resize reconciliation.
//!
//! The engine remembers the primary region's pixel footprint. Any size write that is not
//! itself a resize refreshes that memory. When the container is resized and a primary region
//! is designated, the percentage is recomputed so the primary region keeps its pixels. With no
//! primary region both sides scale with the container and the size is left alone.

use kurbo::Size;

use crate::panel::SplitPanel;
use crate::units::pixels_to_percentage;

#[derive(Clone, Debug, Default)]
pub(crate) struct ResizeState {
    pub(crate) cached_pixels: f64,
}

impl SplitPanel {
    /// Record the first measurements of the container and divider boxes.
    ///
    /// Caches the current pixel size as the footprint to preserve across resizes.
    pub fn mount(&mut self, container: Size, divider: Size) {
        self.measure.container = container;
        self.measure.divider = divider;
        self.resize.cached_pixels = self.size_pixels();
        log::debug!(
            "mounted at {}px, primary footprint {}px",
            self.component_size(),
            self.resize.cached_pixels
        );
    }

    /// Record a new divider box.
    pub fn set_divider_box(&mut self, divider: Size) {
        self.measure.divider = divider;
    }

    /// The container box changed size.
    pub fn resize(&mut self, container: Size) {
        self.measure.container = container;
        let extent = self.component_size();

        if self.config.primary.is_none() {
            // Proportional scaling: the percentage stays, the footprint follows it.
            if !self.collapsed {
                self.resize.cached_pixels = self.size_pixels();
            }
            return;
        }

        let percentage = pixels_to_percentage(extent, self.resize.cached_pixels);
        log::debug!(
            "resize to {extent}px keeps {}px as {percentage}%",
            self.resize.cached_pixels
        );
        if self.collapsed {
            self.collapse.expanded_size = self.raw_from_percentage(percentage);
        } else {
            let raw = self.raw_from_percentage(percentage);
            self.store_size(raw);
        }
    }

    /// Pixel footprint preserved across container resizes.
    pub fn cached_size_pixels(&self) -> f64 {
        self.resize.cached_pixels
    }

    /// Refresh the footprint after a non-resize size write.
    ///
    /// Collapsing does not count: the footprint keeps the expanded size.
    pub(crate) fn remember_pixels(&mut self) {
        if !self.collapsed {
            self.resize.cached_pixels = self.size_pixels();
        }
    }
}
