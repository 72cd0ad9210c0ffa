// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building UI components.
//!
//! Buttons take their highlight-aware style as a value from the control
//! sheet. Feed each a press through the pointer methods and print how its
//! properties change.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p tailor_demos --example building_components`

use std::error::Error;

use kurbo::{Point, Rect};
use tailor_controls::StyledButton;
use tailor_demos::{Arranged, DemoStack};
use tailor_sheet::{LINK, PRIMARY, SECONDARY, control_sheet};
use tailor_view::{Button, View};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let sheet = control_sheet();
    let mut controls = Vec::new();
    for (title, name) in [
        ("Primary style", PRIMARY),
        ("Secondary style", SECONDARY),
        ("Link style", LINK),
    ] {
        controls.push(StyledButton::new(Button::new(title), sheet.require(name)?.clone())?);
    }

    let mut stack = DemoStack::new(20.0);
    for control in &controls {
        stack.push(control.button().clone());
    }
    stack.layout(Rect::new(0.0, 0.0, 375.0, 667.0));
    print!("{stack}");

    for (control, child) in controls.iter_mut().zip(stack.children()) {
        let frame = child.props().frame();
        control.button_mut().props_mut().set_frame(frame);
        let title = control.button().title().to_owned();
        control.subscribe(move |event| println!("{title}: {event:?}"));

        control.pointer_down(frame.center())?;
        println!("\npressed\n{}", Arranged::from(control.button().clone()));

        // Drag out and back in before releasing.
        control.pointer_move(Point::new(frame.x1 + 40.0, frame.center().y))?;
        control.pointer_move(frame.center())?;
        let activated = control.pointer_up(frame.center())?;
        println!(
            "released, activated = {activated}\n{}",
            Arranged::from(control.button().clone())
        );
    }
    Ok(())
}
