// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tailor Sheet: reusable style fragments and named style catalogs.
//!
//! - [`mixins`]: small values such as [`Border`] or [`DropShadow`] that turn
//!   into single-step styles with [`Mixin::into_style`].
//! - [`StyleSheet`]: an immutable name to style map, assembled with a
//!   [`StyleSheetBuilder`]. [`StyleSheetBuilder::derive`] registers a style
//!   as an existing one followed by overrides.
//! - [`builtin`]: ready-made catalogs for buttons and switches, bundled as
//!   [`AppStyles`].
//! - `decl` (feature `serde`): declarative sheets with `extends`
//!   inheritance, loaded from JSON or any other serde format.
//!
//! Sheets are ordinary values. Build them once at startup and pass them to
//! whatever constructs views.
//!
//! ```rust
//! use tailor_compose::Styleable;
//! use tailor_sheet::{PRIMARY_BUTTON, SECONDARY_BUTTON, button_sheet};
//! use tailor_view::{Button, View, palette};
//!
//! let sheet = button_sheet();
//! let primary = Button::new("Primary button").try_with_style(sheet.require(PRIMARY_BUTTON)?)?;
//! let secondary = Button::new("Secondary button").try_with_style(sheet.require(SECONDARY_BUTTON)?)?;
//!
//! assert_eq!(primary.props().layer().border_width(), 2.0);
//! assert_eq!(secondary.props().layer().border_width(), 0.0);
//! assert_eq!(secondary.props().background(), Some(palette::CLEAR));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod builtin;
#[cfg(feature = "serde")]
pub mod decl;
pub mod mixins;
mod sheet;

pub use builtin::{
    AppStyles, BASE_BUTTON, CUSTOM_SWITCH, DEFAULT_SWITCH, LINK, PRIMARY, PRIMARY_BUTTON,
    SECONDARY, SECONDARY_BUTTON, button_sheet, control_sheet, switch_sheet,
};
pub use mixins::{
    Base, Border, ContentInsets, CornerRadius, DropShadow, Font, HighlightBackground, Mixin,
    TitleColor,
};
pub use sheet::{SheetError, StyleSheet, StyleSheetBuilder};
