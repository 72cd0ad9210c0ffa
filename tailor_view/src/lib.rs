// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tailor View: toolkit-neutral view handles.
//!
//! Styles from `tailor_compose` mutate view handles. This crate provides the
//! handles: a retained model of the visual properties a mobile UI toolkit
//! exposes, without any rendering or layout.
//!
//! - [`ViewProps`]: background, clipping, frame and [`Layer`] decoration
//!   (border, corner radius, [`Shadow`]). Every handle implements [`View`].
//! - [`Button`]: title, per-state [`TitleColors`], content insets,
//!   [`TextStyle`] and a highlighted flag.
//! - [`Switch`]: an on/off flag.
//! - [`Control`]: handles with a [`ControlState`] that styles can read.
//!
//! Setters for values with a valid range return [`StyleError`], so a style
//! step built on them fails instead of storing nonsense.
//!
//! ```rust
//! use tailor_view::{Button, View, palette};
//!
//! let mut button = Button::new("Secondary");
//! button.props_mut().set_background(Some(palette::CLEAR));
//! button.props_mut().set_corner_radius(8.0)?;
//!
//! assert_eq!(button.props().background(), Some(palette::CLEAR));
//! # Ok::<(), tailor_view::StyleError>(())
//! ```
//!
//! Colors are [`peniko::Color`]; geometry uses [`kurbo`] types.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable either `std` (default) or
//! `libm`.

#![no_std]

extern crate alloc;

mod button;
mod control;
mod error;
pub mod palette;
mod switch;
mod view;

pub use button::{Button, TextStyle, TitleColors};
pub use control::{Control, ControlState};
pub use error::StyleError;
pub use switch::Switch;
pub use view::{Layer, Shadow, View, ViewProps};

pub use kurbo::{Insets, Point, Rect, Vec2};
pub use peniko::Color;
