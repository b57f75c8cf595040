// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard resizing and collapse with a timed transition.
//!
//! Run:
//! - `cargo run -p understory_demos --example split_keyboard`

use core::time::Duration;

use kurbo::Size;
use understory_split::{Key, KeyInput, KeyOutcome, Primary, SplitConfig, SplitPanel};

fn main() {
    let config = SplitConfig {
        primary: Some(Primary::End),
        collapsible: true,
        min_size: Some(15.0),
        max_size: Some(85.0),
        transition_duration: Duration::from_millis(250),
        ..Default::default()
    };
    let mut panel = SplitPanel::new(config, 30.0);
    panel.mount(Size::new(800.0, 600.0), Size::new(6.0, 600.0));

    let presses = [
        KeyInput::new(Key::ArrowLeft),
        KeyInput::shifted(Key::ArrowLeft),
        KeyInput::new(Key::End),
        KeyInput::new(Key::Home),
        KeyInput::new(Key::from_name("a")),
    ];
    for input in presses {
        let outcome = panel.handle_keydown(input);
        println!(
            "  {:?}{}: {:?} -> {}%",
            input.key,
            if input.modifiers.is_empty() { "" } else { "+shift" },
            outcome,
            panel.size_percentage()
        );
    }
    // Home with primary = end grows the end region, up to the 85% maximum.
    assert_eq!(panel.size_percentage(), 85.0);

    assert_eq!(
        panel.handle_keydown(KeyInput::new(Key::Enter)),
        KeyOutcome::Handled
    );
    println!(
        "== Collapsed ==\n  state={:?} template={} duration={}",
        panel.collapse_transition_state(),
        panel.grid_template(),
        panel.transition_duration_css()
    );
    for _ in 0..3 {
        if let Some(ended) = panel.advance(Duration::from_millis(100)) {
            println!("  transition {ended:?} finished");
        }
    }
    assert_eq!(panel.collapse_transition_state(), None);

    panel.handle_keydown(KeyInput::new(Key::Enter));
    println!("== Expanded ==\n  size={}%", panel.size_percentage());
    assert_eq!(panel.size_percentage(), 85.0);
}
