// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS grid track template for the two regions and the divider.

use alloc::format;
use alloc::string::String;

use crate::panel::SplitPanel;
use crate::types::{Direction, Orientation, Primary};

impl SplitPanel {
    /// Grid template of the form `"<primary> <divider>px auto"`, or reversed.
    ///
    /// The primary track is `0` (or the collapsed percentage) while collapsed, otherwise a
    /// `clamp(...)` that honors the min/max bounds and leaves room for the divider.
    /// The primary track comes first when the primary region is the start region and the
    /// start region is drawn first (LTR or vertical), and also when an end primary is drawn
    /// first because of RTL.
    ///
    /// ```
    /// use kurbo::Size;
    /// use understory_split::{SplitConfig, SplitPanel};
    ///
    /// let mut panel = SplitPanel::new(SplitConfig::default(), 50.0);
    /// panel.mount(Size::new(400.0, 300.0), Size::new(4.0, 300.0));
    /// assert_eq!(panel.grid_template(), "clamp(0%, 50%, calc(100% - 4px)) 4px auto");
    /// ```
    pub fn grid_template(&self) -> String {
        let divider = self.divider_size();
        let size = self.size_percentage();

        let primary = if self.collapsed {
            let collapsed = self.config.collapsed_size;
            if collapsed == 0.0 {
                String::from("0")
            } else {
                format!("{collapsed}%")
            }
        } else {
            match (self.min_size_percentage(), self.max_size_percentage()) {
                (Some(min), Some(max)) => format!(
                    "clamp(0%, clamp({min}%, {size}%, {max}%), calc(100% - {divider}px))"
                ),
                (Some(min), None) => {
                    format!("clamp({min}%, max({min}%, {size}%), calc(100% - {divider}px))")
                }
                _ => format!("clamp(0%, {size}%, calc(100% - {divider}px))"),
            }
        };
        let secondary = "auto";

        let start_first =
            self.config.direction == Direction::Ltr || self.config.orientation == Orientation::Vertical;
        let primary_first = match self.config.primary {
            None | Some(Primary::Start) => start_first,
            Some(Primary::End) => !start_first,
        };

        if primary_first {
            format!("{primary} {divider}px {secondary}")
        } else {
            format!("{secondary} {divider}px {primary}")
        }
    }
}
