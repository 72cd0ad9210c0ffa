// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual properties shared by every view.

use kurbo::{Rect, Vec2};
use peniko::Color;
use peniko::color::palette::css;

use crate::error::{StyleError, is_valid_length};

/// Drop shadow parameters of a view's layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Color,
    /// Offset of the shadow from the view, in points.
    pub offset: Vec2,
    /// Opacity in `0.0..=1.0`. Zero hides the shadow.
    pub opacity: f32,
    /// Blur radius in points.
    pub radius: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: css::BLACK,
            offset: Vec2::new(0.0, -3.0),
            opacity: 0.0,
            radius: 3.0,
        }
    }
}

/// Layer-level decoration: border, rounding and shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    border_width: f64,
    border_color: Color,
    corner_radius: f64,
    shadow: Shadow,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            border_width: 0.0,
            border_color: css::BLACK,
            corner_radius: 0.0,
            shadow: Shadow::default(),
        }
    }
}

impl Layer {
    /// Border stroke width in points.
    #[must_use]
    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    /// Border stroke color.
    #[must_use]
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// Corner radius in points.
    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Drop shadow parameters.
    #[must_use]
    pub fn shadow(&self) -> Shadow {
        self.shadow
    }
}

/// The visual properties of a single view.
///
/// Setters for lengths and opacities validate their input and return a
/// [`StyleError`] instead of storing an invalid value.
///
/// ```rust
/// use tailor_view::{StyleError, ViewProps};
///
/// let mut view = ViewProps::default();
/// view.set_border_width(2.0).unwrap();
/// assert_eq!(view.layer().border_width(), 2.0);
///
/// assert_eq!(
///     view.set_border_width(-1.0),
///     Err(StyleError::InvalidBorderWidth(-1.0))
/// );
/// assert_eq!(view.layer().border_width(), 2.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewProps {
    frame: Rect,
    background: Option<Color>,
    clips_to_bounds: bool,
    layer: Layer,
}

impl ViewProps {
    /// Creates a view with the given frame and default decoration.
    #[must_use]
    pub fn with_frame(frame: Rect) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// The view's frame in its parent's coordinates.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Moves or resizes the view.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Background fill, or `None` if never set.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Sets or clears the background fill.
    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    /// Whether content is clipped to the view's bounds.
    #[must_use]
    pub fn clips_to_bounds(&self) -> bool {
        self.clips_to_bounds
    }

    /// Enables or disables clipping to the view's bounds.
    pub fn set_clips_to_bounds(&mut self, clips: bool) {
        self.clips_to_bounds = clips;
    }

    /// Layer decoration.
    #[must_use]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Sets the border width.
    pub fn set_border_width(&mut self, width: f64) -> Result<(), StyleError> {
        if !is_valid_length(width) {
            return Err(StyleError::InvalidBorderWidth(width));
        }
        self.layer.border_width = width;
        Ok(())
    }

    /// Sets the border color.
    pub fn set_border_color(&mut self, color: Color) {
        self.layer.border_color = color;
    }

    /// Sets the corner radius.
    pub fn set_corner_radius(&mut self, radius: f64) -> Result<(), StyleError> {
        if !is_valid_length(radius) {
            return Err(StyleError::InvalidCornerRadius(radius));
        }
        self.layer.corner_radius = radius;
        Ok(())
    }

    /// Replaces the drop shadow.
    pub fn set_shadow(&mut self, shadow: Shadow) -> Result<(), StyleError> {
        if !(0.0..=1.0).contains(&shadow.opacity) {
            return Err(StyleError::InvalidShadowOpacity(shadow.opacity));
        }
        if !is_valid_length(shadow.radius) {
            return Err(StyleError::InvalidShadowRadius(shadow.radius));
        }
        self.layer.shadow = shadow;
        Ok(())
    }
}

/// A handle exposing a view's visual properties.
///
/// Styles that only touch generic view properties are written against this
/// trait so they apply to every kind of view.
pub trait View {
    /// Shared visual properties.
    fn props(&self) -> &ViewProps;

    /// Mutable access to the shared visual properties.
    fn props_mut(&mut self) -> &mut ViewProps;
}

impl View for ViewProps {
    fn props(&self) -> &ViewProps {
        self
    }

    fn props_mut(&mut self) -> &mut ViewProps {
        self
    }
}
