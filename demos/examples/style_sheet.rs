// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style sheet basics.
//!
//! Style two buttons from the built-in button sheet, configure a switch's
//! on/off styles with a local style, and compare it with a switch that uses
//! a style from the switch sheet.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p tailor_demos --example style_sheet`

use std::error::Error;

use kurbo::Rect;
use tailor_compose::{Style, Styleable, compose};
use tailor_controls::{StyledSwitch, SwitchStyle};
use tailor_demos::{Arranged, DemoStack};
use tailor_sheet::mixins::{base, border};
use tailor_sheet::{CUSTOM_SWITCH, PRIMARY_BUTTON, SECONDARY_BUTTON, button_sheet, switch_sheet};
use tailor_view::{Button, Switch, palette};

/// Styles local to this screen.
fn local_switch_style() -> Style<StyledSwitch> {
    Style::from_fn(|s: &mut StyledSwitch| {
        s.set_off_style(compose([border(Some(0.0), None), base(Some(palette::GRAY), None)]));
        s.set_on_style(compose([border(Some(1.0), None), base(Some(palette::WHITE), None)]));
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let buttons = button_sheet();
    let switches = switch_sheet();

    let primary = Button::new("Primary button").try_with_style(buttons.require(PRIMARY_BUTTON)?)?;
    let secondary =
        Button::new("Secondary button").try_with_style(buttons.require(SECONDARY_BUTTON)?)?;

    let mut custom1 = StyledSwitch::new(Switch::new()).with_style(&local_switch_style());
    custom1.subscribe(|event| println!("custom1 switch: {event:?}"));
    custom1.toggle()?;

    let mut custom2 =
        StyledSwitch::with_styles(Switch::new(), switches.require(CUSTOM_SWITCH)?.clone());
    custom2.restyle()?;

    let mut stack = DemoStack::new(10.0);
    stack.push(primary);
    stack.push(secondary);
    stack.push(custom1.switch().clone());
    stack.push(custom2.switch().clone());
    stack.layout(Rect::new(0.0, 0.0, 375.0, 667.0));
    print!("{stack}");

    // Reassigned styles take effect from the next value change.
    custom1.set_on_style(SwitchStyle::default().on);
    custom1.toggle()?;
    custom1.toggle()?;
    println!("custom1 with the default on style:\n{}", Arranged::from(custom1.switch().clone()));
    Ok(())
}
