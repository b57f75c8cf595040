// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard resizing on the focused divider.
//!
//! | Key | Effect |
//! | --- | --- |
//! | ArrowLeft / ArrowUp | shrink the primary region (grow with `primary = end`) |
//! | ArrowRight / ArrowDown | grow the primary region (shrink with `primary = end`) |
//! | Home | 0% (100% with `primary = end`) |
//! | End | 100% (0% with `primary = end`) |
//! | Enter | toggle collapsed, when collapsible |
//!
//! Only Left/Right apply to horizontal panels and only Up/Down to vertical ones.
//! Steps are 1% or 10% with shift. Text direction does not mirror the arrows.

use crate::panel::SplitPanel;
use crate::types::{Key, KeyInput, KeyOutcome, Modifiers, Orientation};
use crate::units::clamp;

const STEP: f64 = 1.0;
const SHIFT_STEP: f64 = 10.0;

impl SplitPanel {
    /// Apply a key press to the divider.
    ///
    /// Recognized keys return [`KeyOutcome::Handled`] even when they end up not changing anything
    /// (an orthogonal arrow, Enter on a non-collapsible panel). The result is clamped to the
    /// configured min/max percentage, or to 0–100 when unset.
    pub fn handle_keydown(&mut self, input: KeyInput) -> KeyOutcome {
        if self.config.disabled || input.key == Key::Other {
            return KeyOutcome::Ignored;
        }

        if input.key == Key::Enter {
            if self.config.collapsible {
                self.set_collapsed(!self.collapsed);
            }
            return KeyOutcome::Handled;
        }

        // The size is pinned to the collapsed size until something expands the panel.
        if self.collapsed {
            return KeyOutcome::Handled;
        }

        let end = self.config.primary_is_end();
        let step = if input.modifiers.contains(Modifiers::SHIFT) {
            SHIFT_STEP
        } else {
            STEP
        };
        let increment = if end { -step } else { step };
        let current = self.size_percentage();

        let next = match (input.key, self.config.orientation) {
            (Key::ArrowLeft, Orientation::Horizontal) | (Key::ArrowUp, Orientation::Vertical) => {
                current - increment
            }
            (Key::ArrowRight, Orientation::Horizontal)
            | (Key::ArrowDown, Orientation::Vertical) => current + increment,
            (Key::Home, _) => {
                if end {
                    100.0
                } else {
                    0.0
                }
            }
            (Key::End, _) => {
                if end {
                    0.0
                } else {
                    100.0
                }
            }
            _ => return KeyOutcome::Handled,
        };

        let lo = self.min_size_percentage().unwrap_or(0.0);
        let hi = self.max_size_percentage().unwrap_or(100.0);
        self.set_size_percentage(clamp(next, lo, hi));
        KeyOutcome::Handled
    }
}
