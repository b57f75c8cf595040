// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the split engine: configuration enums, keyboard input, and outgoing events.

/// Axis along which the two regions are laid out.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Regions side by side; the divider moves along x.
    #[default]
    Horizontal,
    /// Regions stacked; the divider moves along y.
    Vertical,
}

/// Text direction of the host. Only affects horizontal layouts.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left; the start region sits on the right.
    Rtl,
}

/// Which region's size is authoritative.
///
/// Stored as `Option<Primary>` in [`SplitConfig`](crate::SplitConfig): `None` means both
/// regions scale proportionally when the container is resized.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Primary {
    /// The start region (left in LTR, top when vertical).
    Start,
    /// The end region.
    End,
}

/// Unit of the stored size value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeUnit {
    /// Percentage of the container extent (0–100 by convention, not enforced).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "%"))]
    Percent,
    /// Absolute pixels.
    #[cfg_attr(feature = "serde", serde(rename = "px"))]
    Pixels,
}

/// Transient state set on every collapsed-flag transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransitionState {
    /// The primary region is animating towards the collapsed size.
    Collapsing,
    /// The primary region is animating back to its cached size.
    Expanding,
}

/// How the transient [`TransitionState`] is cleared.
///
/// Pick one per host; the two modes are never combined.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransitionEnd {
    /// Cleared after the configured duration, driven by
    /// [`SplitPanel::advance`](crate::SplitPanel::advance).
    #[default]
    Timer,
    /// Cleared only by
    /// [`SplitPanel::transition_finished`](crate::SplitPanel::transition_finished),
    /// for hosts that observe real transition completion.
    Signal,
}

/// What a double-click does while the primary region is collapsed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CollapsedDoubleClick {
    /// Stay collapsed; the size is left untouched.
    #[default]
    Ignore,
    /// Expand to the cached size, then snap to the nearest snap point.
    Expand,
}

bitflags::bitflags! {
    /// Keyboard modifier state accompanying a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift; selects the accelerated step.
        const SHIFT   = 0b0000_0001;
        /// Control.
        const CONTROL = 0b0000_0010;
        /// Alt / Option.
        const ALT     = 0b0000_0100;
        /// Meta / Command.
        const META    = 0b0000_1000;
    }
}

/// Keys the divider reacts to. Anything else maps to [`Key::Other`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `Enter`.
    Enter,
    /// Any other key.
    Other,
}

impl Key {
    /// Map a DOM-style key name (`KeyboardEvent.key`) to a [`Key`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            _ => Self::Other,
        }
    }
}

/// A key press delivered to the divider.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyInput {
    /// The pressed key.
    pub key: Key,
    /// Modifier state at the time of the press.
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// A key press without modifiers.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// A key press with shift held.
    pub const fn shifted(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::SHIFT,
        }
    }
}

/// Result of [`SplitPanel::handle_keydown`](crate::SplitPanel::handle_keydown).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyOutcome {
    /// Not handled; leave the host's default action alone.
    Ignored,
    /// Handled; the host should suppress the default action.
    Handled,
}

/// Model updates queued for the host, drained with
/// [`SplitPanel::drain_events`](crate::SplitPanel::drain_events).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SplitEvent {
    /// The stored size changed; carries the new value in the configured [`SizeUnit`].
    SizeChanged(f64),
    /// The collapsed flag changed.
    CollapsedChanged(bool),
    /// A [`TransitionEnd::Signal`] completion, re-emitted unchanged.
    TransitionEnd(TransitionState),
}
