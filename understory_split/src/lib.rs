// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_split --heading-base-level=0

//! Understory Split: the sizing and interaction engine behind a two-region split panel.
//!
//! Two content regions share a container, separated by a draggable divider.
//! This crate owns the arithmetic and the state machine; it does not render anything.
//!
//! - One stored size in the configured unit (`%` or `px`), with derived percent and pixel views.
//! - Collapse/expand that remembers the pre-collapse size and reports a transient transition state.
//! - Keyboard resizing (arrows, Home/End, Enter), pointer dragging with collapse thresholds and
//!   snap points, and double-click snapping.
//! - Container-resize reconciliation that keeps a designated primary region at a fixed pixel size.
//!
//! ## Where this fits
//!
//! A presentation layer measures the container and divider boxes, forwards pointer, keyboard, and
//! resize input, and reads back the results: a grid template string, the collapsed flag, the
//! transition state, and whether a drag is in progress. Model updates (new size, new collapsed
//! flag) are queued as [`SplitEvent`]s for two-way binding.
//!
//! ## Not a layout engine
//!
//! Exactly one divider between exactly two regions. Nested or multi-pane layouts compose several
//! engines. Nothing is persisted across sessions.
//!
//! ## API overview
//!
//! - [`SplitPanel`]: the engine.
//! - [`SplitConfig`]: orientation, direction, primary region, unit, bounds, snapping, collapse.
//! - [`units`]: the two conversion primitives.
//! - [`closest`]: nearest-value lookup with deterministic ties.
//! - [`timer`]: the self-clearing value backing the transition state.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use understory_split::{
//!     Key, KeyInput, KeyOutcome, Primary, SizeUnit, SplitConfig, SplitPanel, TransitionState,
//! };
//!
//! let config = SplitConfig {
//!     primary: Some(Primary::Start),
//!     size_unit: SizeUnit::Pixels,
//!     collapsible: true,
//!     min_size: Some(50.0),
//!     collapse_threshold: Some(10.0),
//!     snap_points: vec![100.0, 200.0],
//!     transition_duration: Duration::from_millis(200),
//!     ..Default::default()
//! };
//! let mut panel = SplitPanel::new(config, 150.0);
//! panel.mount(Size::new(400.0, 300.0), Size::new(4.0, 300.0));
//!
//! // Drag near a snap point.
//! panel.drag_start();
//! panel.drag_move(Point::new(195.0, 10.0));
//! panel.drag_end();
//! assert_eq!(panel.size(), 200.0);
//!
//! // Keyboard steps are percentages, even when the model is in pixels.
//! assert_eq!(panel.handle_keydown(KeyInput::new(Key::ArrowRight)), KeyOutcome::Handled);
//! assert_eq!(panel.size(), 204.0);
//!
//! // Enter collapses; the transition state clears once the duration has elapsed.
//! panel.handle_keydown(KeyInput::new(Key::Enter));
//! assert!(panel.is_collapsed());
//! assert_eq!(panel.collapse_transition_state(), Some(TransitionState::Collapsing));
//! panel.advance(Duration::from_millis(200));
//! assert_eq!(panel.collapse_transition_state(), None);
//! assert_eq!(panel.grid_template(), "0 4px auto");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod closest;
mod collapse;
mod config;
mod grid;
mod keyboard;
mod panel;
mod pointer;
mod resize;
mod sizes;
pub mod timer;
mod types;
pub mod units;

pub use config::{DEFAULT_SNAP_THRESHOLD, SplitConfig};
pub use panel::SplitPanel;
pub use types::{
    CollapsedDoubleClick, Direction, Key, KeyInput, KeyOutcome, Modifiers, Orientation, Primary,
    SizeUnit, SplitEvent, TransitionEnd, TransitionState,
};
