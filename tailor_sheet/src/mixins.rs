// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable style fragments.
//!
//! A mixin is a small value describing a few property assignments. Turning
//! it into a [`Style`] with [`Mixin::into_style`] yields a single step that
//! can be composed with others. Optional fields left as `None` leave the
//! corresponding property untouched.

use kurbo::{Insets, Vec2};
use peniko::Color;
use tailor_compose::Style;
use tailor_view::{Button, Control, ControlState, Shadow, StyleError, TextStyle, View};

/// A value that converts into a style over handles of type `T`.
pub trait Mixin<T> {
    /// Builds the style step.
    fn into_style(self) -> Style<T, StyleError>;
}

/// Background fill and clipping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Base {
    /// Background fill to set.
    pub background: Option<Color>,
    /// Clipping flag to set.
    pub clips_to_bounds: Option<bool>,
}

impl<T: View + 'static> Mixin<T> for Base {
    fn into_style(self) -> Style<T, StyleError> {
        Style::from_fn(move |view: &mut T| {
            let props = view.props_mut();
            if let Some(color) = self.background {
                props.set_background(Some(color));
            }
            if let Some(clips) = self.clips_to_bounds {
                props.set_clips_to_bounds(clips);
            }
        })
    }
}

/// Border width and color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Border {
    /// Stroke width to set.
    pub width: Option<f64>,
    /// Stroke color to set.
    pub color: Option<Color>,
}

impl<T: View + 'static> Mixin<T> for Border {
    fn into_style(self) -> Style<T, StyleError> {
        Style::try_from_fn(move |view: &mut T| {
            let props = view.props_mut();
            if let Some(width) = self.width {
                props.set_border_width(width)?;
            }
            if let Some(color) = self.color {
                props.set_border_color(color);
            }
            Ok(())
        })
    }
}

/// Corner rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerRadius(pub f64);

impl<T: View + 'static> Mixin<T> for CornerRadius {
    fn into_style(self) -> Style<T, StyleError> {
        let Self(radius) = self;
        Style::try_from_fn(move |view: &mut T| view.props_mut().set_corner_radius(radius))
    }
}

/// Title color of a button in one control state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleColor {
    /// Color to use.
    pub color: Color,
    /// State the color applies to.
    pub state: ControlState,
}

impl Mixin<Button> for TitleColor {
    fn into_style(self) -> Style<Button, StyleError> {
        Style::from_fn(move |button: &mut Button| button.set_title_color(self.color, self.state))
    }
}

/// Padding between a button's edge and its title.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentInsets(pub Insets);

impl Mixin<Button> for ContentInsets {
    fn into_style(self) -> Style<Button, StyleError> {
        let Self(insets) = self;
        Style::try_from_fn(move |button: &mut Button| button.set_content_insets(insets))
    }
}

/// Title font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font(pub TextStyle);

impl Mixin<Button> for Font {
    fn into_style(self) -> Style<Button, StyleError> {
        let Self(text_style) = self;
        Style::from_fn(move |button: &mut Button| button.set_text_style(text_style))
    }
}

/// A drop shadow that flattens while the control is highlighted.
///
/// The shadow sits one point below the control normally and directly under
/// it while highlighted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropShadow {
    /// Shadow color.
    pub color: Color,
    /// Shadow opacity in `0.0..=1.0`.
    pub opacity: f32,
    /// Blur radius.
    pub radius: f64,
}

impl<T: Control + 'static> Mixin<T> for DropShadow {
    fn into_style(self) -> Style<T, StyleError> {
        Style::try_from_fn(move |control: &mut T| {
            let dy = if control.is_highlighted() { 0.0 } else { 1.0 };
            control.props_mut().set_shadow(Shadow {
                color: self.color,
                offset: Vec2::new(0.0, dy),
                opacity: self.opacity,
                radius: self.radius,
            })
        })
    }
}

/// Background fill that depends on the highlighted state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightBackground {
    /// Fill while not highlighted.
    pub normal: Color,
    /// Fill while highlighted.
    pub highlighted: Color,
}

impl<T: Control + 'static> Mixin<T> for HighlightBackground {
    fn into_style(self) -> Style<T, StyleError> {
        Style::from_fn(move |control: &mut T| {
            let color = if control.is_highlighted() {
                self.highlighted
            } else {
                self.normal
            };
            control.props_mut().set_background(Some(color));
        })
    }
}

/// Shorthand for a [`Base`] mixin.
#[must_use]
pub fn base<T: View + 'static>(
    background: Option<Color>,
    clips_to_bounds: Option<bool>,
) -> Style<T, StyleError> {
    Base {
        background,
        clips_to_bounds,
    }
    .into_style()
}

/// Shorthand for a [`Border`] mixin.
#[must_use]
pub fn border<T: View + 'static>(width: Option<f64>, color: Option<Color>) -> Style<T, StyleError> {
    Border { width, color }.into_style()
}

/// Shorthand for a [`CornerRadius`] mixin.
#[must_use]
pub fn corner_radius<T: View + 'static>(radius: f64) -> Style<T, StyleError> {
    CornerRadius(radius).into_style()
}

/// Shorthand for a [`TitleColor`] mixin.
#[must_use]
pub fn title_color(color: Color, state: ControlState) -> Style<Button, StyleError> {
    TitleColor { color, state }.into_style()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailor_compose::compose;
    use tailor_view::{Switch, ViewProps, palette};

    #[test]
    fn unset_fields_leave_properties_alone() {
        let mut view = ViewProps::default();
        view.set_border_width(3.0).unwrap();
        view.set_background(Some(palette::GRAY));

        let style: Style<ViewProps, StyleError> = compose([
            Border {
                width: None,
                color: Some(palette::BLUE),
            }
            .into_style(),
            Base::default().into_style(),
        ]);
        style.apply(&mut view).unwrap();

        assert_eq!(view.layer().border_width(), 3.0);
        assert_eq!(view.layer().border_color(), palette::BLUE);
        assert_eq!(view.background(), Some(palette::GRAY));
    }

    #[test]
    fn generic_mixins_work_on_any_view() {
        let style: Style<Switch, StyleError> = compose([
            base(Some(palette::WHITE), Some(true)),
            border(Some(1.0), None),
            corner_radius(4.0),
        ]);
        let mut switch = Switch::new();
        style.apply(&mut switch).unwrap();

        assert_eq!(switch.props().background(), Some(palette::WHITE));
        assert!(switch.props().clips_to_bounds());
        assert_eq!(switch.props().layer().border_width(), 1.0);
        assert_eq!(switch.props().layer().corner_radius(), 4.0);
    }

    #[test]
    fn invalid_border_fails() {
        let style: Style<ViewProps, StyleError> = border(Some(-2.0), Some(palette::BLACK));
        let mut view = ViewProps::default();
        assert_eq!(
            style.apply(&mut view),
            Err(StyleError::InvalidBorderWidth(-2.0))
        );
        // The color assignment after the width never ran.
        assert_eq!(view.layer().border_color(), ViewProps::default().layer().border_color());
    }

    #[test]
    fn drop_shadow_follows_highlight() {
        let style: Style<Button, StyleError> = DropShadow {
            color: palette::BLACK,
            opacity: 0.5,
            radius: 2.0,
        }
        .into_style();

        let mut button = Button::new("A");
        style.apply(&mut button).unwrap();
        assert_eq!(button.props().layer().shadow().offset, Vec2::new(0.0, 1.0));

        button.set_highlighted(true);
        style.apply(&mut button).unwrap();
        assert_eq!(button.props().layer().shadow().offset, Vec2::new(0.0, 0.0));
        assert_eq!(button.props().layer().shadow().opacity, 0.5);
    }

    #[test]
    fn highlight_background_reads_state() {
        let style: Style<Button, StyleError> = HighlightBackground {
            normal: palette::SYSTEM_BLUE,
            highlighted: palette::DARKER_BLUE,
        }
        .into_style();

        let mut button = Button::new("A");
        style.apply(&mut button).unwrap();
        assert_eq!(button.props().background(), Some(palette::SYSTEM_BLUE));

        button.set_highlighted(true);
        style.apply(&mut button).unwrap();
        assert_eq!(button.props().background(), Some(palette::DARKER_BLUE));
    }

    #[test]
    fn button_mixins() {
        let style = compose([
            title_color(palette::BLACK, ControlState::NORMAL),
            title_color(palette::GRAY, ControlState::HIGHLIGHTED),
            ContentInsets(Insets::uniform_xy(12.0, 8.0)).into_style(),
            Font(TextStyle::Title3).into_style(),
        ]);
        let mut button = Button::new("A");
        style.apply(&mut button).unwrap();

        assert_eq!(button.title_color(ControlState::NORMAL), Some(palette::BLACK));
        assert_eq!(button.title_color(ControlState::HIGHLIGHTED), Some(palette::GRAY));
        assert_eq!(button.content_insets(), Insets::new(12.0, 8.0, 12.0, 8.0));
        assert_eq!(button.text_style(), TextStyle::Title3);
    }
}
