// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named colors used by the built-in styles.

use peniko::Color;
use peniko::color::palette::css;

/// Opaque white.
pub const WHITE: Color = css::WHITE;
/// Opaque black.
pub const BLACK: Color = css::BLACK;
/// Mid gray.
pub const GRAY: Color = css::GRAY;
/// Fully transparent.
pub const CLEAR: Color = css::TRANSPARENT;
/// Pure blue.
pub const BLUE: Color = css::BLUE;
/// Platform accent blue.
pub const SYSTEM_BLUE: Color = Color::from_rgba8(0, 122, 255, 255);
/// Pressed variant of [`SYSTEM_BLUE`].
pub const DARKER_BLUE: Color = Color::from_rgba8(0, 98, 250, 255);
