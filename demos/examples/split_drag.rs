// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragging the divider.
//!
//! Drags a collapsible sidebar past its collapse boundary, lets go, and drags it back out.
//! Snap points pull the divider in when it passes close by.
//!
//! Run:
//! - `cargo run -p understory_demos --example split_drag`

use kurbo::{Point, Size};
use understory_split::{Primary, SizeUnit, SplitConfig, SplitPanel};

fn main() {
    let config = SplitConfig {
        primary: Some(Primary::Start),
        size_unit: SizeUnit::Pixels,
        collapsible: true,
        min_size: Some(120.0),
        collapse_threshold: Some(40.0),
        snap_points: vec![240.0, 320.0],
        snap_threshold: 8.0,
        ..Default::default()
    };
    let mut panel = SplitPanel::new(config, 280.0);
    panel.mount(Size::new(1200.0, 800.0), Size::new(4.0, 800.0));

    println!("== Drag in ==");
    panel.drag_start();
    for x in [260.0, 235.0, 180.0, 90.0, 70.0, 150.0] {
        panel.drag_move(Point::new(x, 400.0));
        println!(
            "  x={x:>5}: size={:>6.1}px collapsed={} template={}",
            panel.size(),
            panel.is_collapsed(),
            panel.grid_template()
        );
    }
    panel.drag_end();
    // The collapse boundary is 120 - 40 = 80px; the latch keeps us collapsed at 150px.
    assert!(panel.is_collapsed());

    println!("== Drag out ==");
    panel.drag_start();
    for x in [20.0, 60.0, 316.0] {
        panel.drag_move(Point::new(x, 400.0));
        println!(
            "  x={x:>5}: size={:>6.1}px collapsed={}",
            panel.size(),
            panel.is_collapsed()
        );
    }
    panel.drag_end();
    assert!(!panel.is_collapsed());
    assert_eq!(panel.size(), 320.0);

    println!("== Events ==\n  {:?}", panel.drain_events());
}
