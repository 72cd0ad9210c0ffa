// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by validated property setters.

use core::fmt;

use kurbo::Insets;

/// A property value the view model refuses to store.
///
/// Returned by the validated setters on [`ViewProps`](crate::ViewProps) and
/// [`Button`](crate::Button), and therefore by any style step that calls them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleError {
    /// Border width was negative or not finite.
    InvalidBorderWidth(f64),
    /// Corner radius was negative or not finite.
    InvalidCornerRadius(f64),
    /// Shadow opacity was outside `0.0..=1.0`.
    InvalidShadowOpacity(f32),
    /// Shadow blur radius was negative or not finite.
    InvalidShadowRadius(f64),
    /// One of the content insets was not finite.
    InvalidInsets(Insets),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBorderWidth(width) => {
                write!(f, "border width must be finite and non-negative, got {width}")
            }
            Self::InvalidCornerRadius(radius) => {
                write!(f, "corner radius must be finite and non-negative, got {radius}")
            }
            Self::InvalidShadowOpacity(opacity) => {
                write!(f, "shadow opacity must be within 0..=1, got {opacity}")
            }
            Self::InvalidShadowRadius(radius) => {
                write!(f, "shadow radius must be finite and non-negative, got {radius}")
            }
            Self::InvalidInsets(insets) => write!(f, "content insets must be finite, got {insets:?}"),
        }
    }
}

impl core::error::Error for StyleError {}

/// Returns `true` for finite, non-negative lengths.
pub(crate) fn is_valid_length(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
