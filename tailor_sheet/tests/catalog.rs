// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `tailor_sheet` used together with the other Tailor crates.
//!
//! These exercise the public path an application takes: build a catalog,
//! look styles up by name, derive new ones, and hand them to views and
//! controls.

use std::cell::RefCell;
use std::rc::Rc;

use tailor_compose::{Style, Styleable, compose};
use tailor_controls::{ControlEvent, StyledButton, StyledSwitch};
use tailor_sheet::mixins::{base, border, corner_radius};
use tailor_sheet::{
    AppStyles, CUSTOM_SWITCH, PRIMARY, SheetError, StyleSheetBuilder, button_sheet,
};
use tailor_view::{Button, Point, Rect, StyleError, Switch, View, ViewProps, palette};

#[test]
fn composed_setters_all_apply() {
    let style: Style<ViewProps, StyleError> = compose([
        base(Some(palette::WHITE), None),
        border(Some(2.0), None),
        corner_radius(8.0),
    ]);
    let mut view = ViewProps::default();
    style.apply(&mut view).unwrap();

    assert_eq!(view.background(), Some(palette::WHITE));
    assert_eq!(view.layer().border_width(), 2.0);
    assert_eq!(view.layer().corner_radius(), 8.0);
}

#[test]
fn derived_style_overrides_only_what_it_sets() {
    let sheet = StyleSheetBuilder::new()
        .insert(
            "base",
            compose([
                base(Some(palette::WHITE), None),
                border(Some(2.0), None),
                corner_radius(8.0),
            ]),
        )
        .derive(
            "secondary",
            "base",
            [base(Some(palette::CLEAR), None), border(Some(0.0), None)],
        )
        .unwrap()
        .build();

    let button = Button::new("Secondary")
        .try_with_style(sheet.require("secondary").unwrap())
        .unwrap();
    assert_eq!(button.props().background(), Some(palette::CLEAR));
    assert_eq!(button.props().layer().border_width(), 0.0);
    assert_eq!(button.props().layer().corner_radius(), 8.0);

    // The base entry is unaffected by the derivation.
    let plain = Button::new("Base")
        .try_with_style(sheet.require("base").unwrap())
        .unwrap();
    assert_eq!(plain.props().layer().border_width(), 2.0);
}

#[test]
fn missing_names_are_errors() {
    let sheet = button_sheet();
    assert!(sheet.get("tertiary_button").is_none());
    assert_eq!(
        sheet.require("tertiary_button").map(|_| ()),
        Err(SheetError::UnknownStyle("tertiary_button".into()))
    );
}

#[test]
fn failing_style_leaves_earlier_steps_applied() {
    let style = compose([
        border(Some(3.0), None),
        corner_radius(-1.0),
        base(Some(palette::GRAY), None),
    ]);
    let result = Button::new("Broken").try_with_style(&style);
    assert_eq!(result.map(|_| ()), Err(StyleError::InvalidCornerRadius(-1.0)));

    let mut button = Button::new("Broken");
    assert!(style.apply(&mut button).is_err());
    assert_eq!(button.props().layer().border_width(), 3.0);
    assert_eq!(button.props().background(), None);
}

#[test]
fn pressing_a_primary_button() {
    let styles = AppStyles::builtin();
    let mut button = Button::new("Primary style");
    button
        .props_mut()
        .set_frame(Rect::new(0.0, 0.0, 120.0, 44.0));
    let mut button =
        StyledButton::new(button, styles.controls.require(PRIMARY).unwrap().clone()).unwrap();

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    button.subscribe(move |event| sink.borrow_mut().push(*event));

    button.pointer_down(Point::new(10.0, 10.0)).unwrap();
    assert_eq!(button.button().props().background(), Some(palette::DARKER_BLUE));

    button.pointer_move(Point::new(200.0, 10.0)).unwrap();
    assert_eq!(button.button().props().background(), Some(palette::SYSTEM_BLUE));

    button.pointer_move(Point::new(20.0, 20.0)).unwrap();
    assert!(button.pointer_up(Point::new(20.0, 20.0)).unwrap());
    assert_eq!(button.button().props().background(), Some(palette::SYSTEM_BLUE));

    assert_eq!(
        *events.borrow(),
        [
            ControlEvent::HighlightChanged(true),
            ControlEvent::HighlightChanged(false),
            ControlEvent::HighlightChanged(true),
            ControlEvent::HighlightChanged(false),
            ControlEvent::Activated,
        ]
    );
}

#[test]
fn toggling_a_custom_switch() {
    let styles = AppStyles::builtin();
    let mut switch = StyledSwitch::with_styles(
        Switch::new(),
        styles.switches.require(CUSTOM_SWITCH).unwrap().clone(),
    );

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    switch.subscribe(move |event| sink.borrow_mut().push(*event));

    switch.toggle().unwrap();
    assert!(switch.is_on());
    assert_eq!(switch.switch().props().background(), Some(palette::WHITE));

    switch.toggle().unwrap();
    assert!(!switch.is_on());
    assert_eq!(switch.switch().props().background(), Some(palette::GRAY));

    assert_eq!(
        *events.borrow(),
        [ControlEvent::ValueChanged(true), ControlEvent::ValueChanged(false)]
    );
}

#[cfg(feature = "serde")]
#[test]
fn declared_sheet_matches_builtin() {
    use tailor_sheet::decl::SheetDecl;
    use tailor_sheet::{BASE_BUTTON, SECONDARY_BUTTON};
    use tailor_view::ControlState;

    let decl: SheetDecl = serde_json::from_str(
        r#"{
            "styles": {
                "base_button": {
                    "background": "white",
                    "clips_to_bounds": true,
                    "border_width": 2,
                    "border_color": "black",
                    "corner_radius": 8,
                    "title_color": "black",
                    "title_color_highlighted": "gray"
                },
                "secondary_button": {
                    "extends": "base_button",
                    "background": "transparent",
                    "border_width": 0,
                    "title_color": "blue"
                }
            }
        }"#,
    )
    .unwrap();
    let declared = decl.build_button_sheet().unwrap();
    let builtin = button_sheet();

    for name in [BASE_BUTTON, SECONDARY_BUTTON] {
        let a = Button::new(name).try_with_style(declared.require(name).unwrap()).unwrap();
        let b = Button::new(name).try_with_style(builtin.require(name).unwrap()).unwrap();

        let rgba = |c: Option<tailor_view::Color>| c.map(|c| c.to_rgba8());
        assert_eq!(rgba(a.props().background()), rgba(b.props().background()));
        assert_eq!(a.props().clips_to_bounds(), b.props().clips_to_bounds());
        assert_eq!(a.props().layer().border_width(), b.props().layer().border_width());
        assert_eq!(a.props().layer().corner_radius(), b.props().layer().corner_radius());
        for state in [ControlState::NORMAL, ControlState::HIGHLIGHTED] {
            assert_eq!(rgba(a.title_color(state)), rgba(b.title_color(state)));
        }
    }
}
