// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container resizes with and without a primary region.
//!
//! With a primary region the sidebar keeps its pixel width; without one both regions scale.
//!
//! Run:
//! - `cargo run -p understory_demos --example split_resize`

use kurbo::Size;
use understory_split::{Primary, SplitConfig, SplitPanel};

fn run(label: &str, primary: Option<Primary>) -> f64 {
    let mut panel = SplitPanel::new(
        SplitConfig {
            primary,
            ..Default::default()
        },
        25.0,
    );
    panel.mount(Size::new(1000.0, 600.0), Size::new(4.0, 600.0));

    println!("== {label} ==");
    for width in [800.0, 1250.0, 500.0] {
        panel.resize(Size::new(width, 600.0));
        println!(
            "  width={width:>6}: {:>5}% = {:>5}px",
            panel.size_percentage(),
            panel.size_pixels()
        );
    }
    panel.size_pixels()
}

fn main() {
    let fixed = run("primary = start", Some(Primary::Start));
    assert_eq!(fixed, 250.0);

    let scaled = run("no primary", None);
    assert_eq!(scaled, 125.0);
}
