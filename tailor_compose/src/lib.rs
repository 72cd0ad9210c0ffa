// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tailor Compose: composable style configurators for view handles.
//!
//! A visual style is represented as a side-effecting function over a mutable
//! view handle. This crate provides [`Style`], an immutable, cheaply clonable
//! ordered sequence of such functions, and [`compose`], which concatenates
//! styles into a new one.
//!
//! ## Core Concepts
//!
//! ### Configurators
//!
//! A configurator is any `Fn(&mut T) -> Result<(), E>`. Most configurators
//! cannot fail; those use the default error type [`Infallible`] and are built
//! with [`Style::from_fn`].
//!
//! ### Composition
//!
//! Applying a composed style runs every step in order on the same handle, so
//! later steps overwrite properties set by earlier ones. Composition is lazy
//! (nothing runs until [`Style::apply`]), associative, and has the empty style
//! as its identity.
//!
//! ```rust
//! use tailor_compose::{Style, compose};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Label {
//!     border_width: f64,
//!     corner_radius: f64,
//! }
//!
//! let base: Style<Label> = compose([
//!     Style::from_fn(|l: &mut Label| l.border_width = 2.0),
//!     Style::from_fn(|l: &mut Label| l.corner_radius = 8.0),
//! ]);
//! let borderless = compose([base.clone(), Style::from_fn(|l: &mut Label| l.border_width = 0.0)]);
//!
//! let mut label = Label::default();
//! borderless.run(&mut label);
//! assert_eq!(label, Label { border_width: 0.0, corner_radius: 8.0 });
//! ```
//!
//! ### State-dependent styles
//!
//! Styles do not store state. A style that depends on transient host state
//! (highlighted, on/off) reads it from the handle when applied, see
//! [`Style::when`].
//!
//! ### Failure
//!
//! If a step returns an error, [`Style::apply`] returns it immediately and the
//! remaining steps do not run. Steps already applied are not rolled back.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Styles are `Rc`-shared and
//! therefore stay on the thread that owns the views.

#![no_std]

extern crate alloc;

mod style;
mod styleable;

pub use core::convert::Infallible;
pub use style::{Style, apply, compose};
pub use styleable::Styleable;
