// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tailor Controls: controls that re-apply styles when their state changes.
//!
//! A control here is a view handle from `tailor_view` paired with the styles
//! it should wear. Styles are plain values injected at construction, never
//! picked by matching on a style enum inside the control:
//!
//! - [`StyledButton`] owns a [`ButtonStyle`]. Its `setup` part runs once and
//!   its `highlight` part runs on construction and every highlight change.
//! - [`StyledSwitch`] owns a [`SwitchStyle`] and applies the on or off part
//!   whenever its value changes.
//!
//! Both report changes as [`ControlEvent`]s to callbacks registered with
//! `subscribe`. [`PressState`] turns raw pointer events into the highlight
//! changes and activations a button reacts to.
//!
//! Style failures propagate to the caller of the state-changing method and
//! are logged at `warn` level through the `log` facade.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod button;
mod event;
mod press;
mod switch;

pub use button::{ButtonStyle, StyledButton};
pub use event::ControlEvent;
pub use press::{PressState, Release};
pub use switch::{StyledSwitch, SwitchStyle};
