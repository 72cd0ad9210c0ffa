// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Support code for the Tailor demos.
//!
//! There is no renderer here. [`DemoStack`] lays styled views out in a
//! vertical column, the way a demo screen would, and its `Display` impl
//! prints every child's frame and visual properties.

use std::fmt;

use kurbo::{Rect, Size};
use peniko::Color;
use tailor_view::{Button, ControlState, Switch, TextStyle, View, ViewProps};

/// Fixed size of a switch.
pub const SWITCH_SIZE: Size = Size::new(51.0, 31.0);

/// A view arranged in a [`DemoStack`].
#[derive(Clone, Debug)]
pub enum Arranged {
    /// A button.
    Button(Button),
    /// A switch.
    Switch(Switch),
}

impl From<Button> for Arranged {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<Switch> for Arranged {
    fn from(switch: Switch) -> Self {
        Self::Switch(switch)
    }
}

impl View for Arranged {
    fn props(&self) -> &ViewProps {
        match self {
            Self::Button(button) => button.props(),
            Self::Switch(switch) => switch.props(),
        }
    }

    fn props_mut(&mut self) -> &mut ViewProps {
        match self {
            Self::Button(button) => button.props_mut(),
            Self::Switch(switch) => switch.props_mut(),
        }
    }
}

/// Line height of a title in `style`.
#[must_use]
pub fn line_height(style: TextStyle) -> f64 {
    match style {
        TextStyle::Title1 => 34.0,
        TextStyle::Title2 => 28.0,
        TextStyle::Title3 => 25.0,
        TextStyle::Headline | TextStyle::Body => 22.0,
        TextStyle::Callout => 21.0,
        TextStyle::Caption => 16.0,
    }
}

/// A vertical column of views, centered in its bounds.
///
/// Buttons span `width_fraction` of the bounds and are as tall as their
/// title plus content insets. Switches keep [`SWITCH_SIZE`] and align with
/// the leading edge of the column.
#[derive(Clone, Debug)]
pub struct DemoStack {
    spacing: f64,
    width_fraction: f64,
    children: Vec<Arranged>,
}

impl DemoStack {
    /// Creates an empty stack with `spacing` points between children.
    #[must_use]
    pub fn new(spacing: f64) -> Self {
        Self {
            spacing,
            width_fraction: 0.8,
            children: Vec::new(),
        }
    }

    /// Appends a child.
    pub fn push(&mut self, child: impl Into<Arranged>) {
        self.children.push(child.into());
    }

    /// The arranged children, top to bottom.
    #[must_use]
    pub fn children(&self) -> &[Arranged] {
        &self.children
    }

    fn height_of(child: &Arranged) -> f64 {
        match child {
            Arranged::Button(button) => {
                let insets = button.content_insets();
                line_height(button.text_style()) + insets.y0 + insets.y1
            }
            Arranged::Switch(_) => SWITCH_SIZE.height,
        }
    }

    /// Assigns every child a frame inside `bounds`.
    pub fn layout(&mut self, bounds: Rect) {
        let width = bounds.width() * self.width_fraction;
        let gaps = self.children.len().saturating_sub(1) as f64 * self.spacing;
        let total: f64 = self.children.iter().map(Self::height_of).sum::<f64>() + gaps;

        let x0 = bounds.center().x - width / 2.0;
        let mut y = bounds.center().y - total / 2.0;
        for child in &mut self.children {
            let height = Self::height_of(child);
            let frame = match child {
                Arranged::Button(_) => Rect::new(x0, y, x0 + width, y + height),
                Arranged::Switch(_) => Rect::from_origin_size((x0, y), SWITCH_SIZE),
            };
            log::debug!("arranged child at {frame:?}");
            child.props_mut().set_frame(frame);
            y += height + self.spacing;
        }
    }
}

/// Formats a color as `#rrggbbaa`.
#[must_use]
pub fn hex(color: Color) -> String {
    let c = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}

fn write_props(f: &mut fmt::Formatter<'_>, props: &ViewProps) -> fmt::Result {
    let frame = props.frame();
    let layer = props.layer();
    let shadow = layer.shadow();
    writeln!(
        f,
        "    frame       ({}, {}) {}x{}",
        frame.x0,
        frame.y0,
        frame.width(),
        frame.height()
    )?;
    writeln!(
        f,
        "    background  {}{}",
        props.background().map_or_else(|| "none".into(), hex),
        if props.clips_to_bounds() { ", clipped" } else { "" }
    )?;
    writeln!(
        f,
        "    border      {} {}, radius {}",
        layer.border_width(),
        hex(layer.border_color()),
        layer.corner_radius()
    )?;
    if shadow.opacity > 0.0 {
        writeln!(
            f,
            "    shadow      {} at ({}, {}), opacity {}, radius {}",
            hex(shadow.color),
            shadow.offset.x,
            shadow.offset.y,
            shadow.opacity,
            shadow.radius
        )?;
    }
    Ok(())
}

impl fmt::Display for Arranged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Button(button) => {
                writeln!(f, "button {:?}", button.title())?;
                write_props(f, button.props())?;
                let title = |state| button.title_color(state).map_or_else(|| "none".into(), hex);
                writeln!(
                    f,
                    "    title       {} / highlighted {}, {:?}",
                    title(ControlState::NORMAL),
                    title(ControlState::HIGHLIGHTED),
                    button.text_style()
                )?;
                let insets = button.content_insets();
                writeln!(
                    f,
                    "    insets      top {} left {} bottom {} right {}",
                    insets.y0, insets.x0, insets.y1, insets.x1
                )
            }
            Self::Switch(switch) => {
                writeln!(f, "switch {}", if switch.is_on() { "on" } else { "off" })?;
                write_props(f, switch.props())
            }
        }
    }
}

impl fmt::Display for DemoStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in &self.children {
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailor_view::Insets;

    #[test]
    fn layout_centers_column() {
        let mut button = Button::new("A");
        button
            .set_content_insets(Insets::uniform_xy(12.0, 8.0))
            .unwrap();
        let mut stack = DemoStack::new(10.0);
        stack.push(button);
        stack.push(Switch::new());
        stack.layout(Rect::new(0.0, 0.0, 400.0, 400.0));

        // 38 + 10 + 31 = 79 tall, centered at y = 200.
        let frames: Vec<Rect> = stack.children().iter().map(|c| c.props().frame()).collect();
        assert_eq!(frames[0], Rect::new(40.0, 160.5, 360.0, 198.5));
        assert_eq!(frames[1], Rect::new(40.0, 208.5, 91.0, 239.5));
    }

    #[test]
    fn hex_includes_alpha() {
        assert_eq!(hex(tailor_view::palette::SYSTEM_BLUE), "#007affff");
        assert_eq!(hex(tailor_view::palette::CLEAR), "#00000000");
    }
}
