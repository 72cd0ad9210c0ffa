// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder-style application of a [`Style`] to an owned handle.

use core::convert::Infallible;

use crate::style::Style;

/// Applies a style to a freshly built value and hands the value back.
///
/// This is implemented for every sized type, so a handle can be styled in
/// the same expression that constructs it.
///
/// ```rust
/// use tailor_compose::{Style, Styleable};
///
/// #[derive(Default)]
/// struct Badge {
///     radius: f64,
/// }
///
/// let rounded: Style<Badge> = Style::from_fn(|b: &mut Badge| b.radius = 8.0);
/// let badge = Badge::default().with_style(&rounded);
/// assert_eq!(badge.radius, 8.0);
/// ```
pub trait Styleable: Sized {
    /// Applies an infallible `style` and returns `self`.
    #[must_use]
    fn with_style(mut self, style: &Style<Self, Infallible>) -> Self {
        style.run(&mut self);
        self
    }

    /// Applies `style` and returns `self`, or the first error a step raised.
    fn try_with_style<E>(mut self, style: &Style<Self, E>) -> Result<Self, E> {
        style.apply(&mut self)?;
        Ok(self)
    }
}

impl<T> Styleable for T {}
