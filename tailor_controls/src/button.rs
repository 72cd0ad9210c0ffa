// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buttons restyled on highlight changes.

use kurbo::Point;
use tailor_compose::Style;
use tailor_view::{Button, Control, StyleError, View};

use crate::event::{ControlEvent, Subscribers};
use crate::press::PressState;

/// The look of a button, split by when each part runs.
///
/// `setup` runs once when the button is built. `highlight` runs right after
/// setup and again each time the highlighted flag changes, so it is where
/// highlight-dependent properties (background, shadow) belong.
#[derive(Clone, Debug, Default)]
pub struct ButtonStyle {
    /// Applied once, at construction.
    pub setup: Style<Button, StyleError>,
    /// Applied at construction and on every highlight change.
    pub highlight: Style<Button, StyleError>,
}

impl ButtonStyle {
    /// Creates a button style from its two parts.
    #[must_use]
    pub fn new(setup: Style<Button, StyleError>, highlight: Style<Button, StyleError>) -> Self {
        Self { setup, highlight }
    }

    /// Applies `setup` and then `highlight`.
    pub fn apply(&self, button: &mut Button) -> Result<(), StyleError> {
        self.setup.apply(button)?;
        self.highlight.apply(button)
    }
}

/// A [`Button`] that owns its [`ButtonStyle`] and re-applies it as its
/// highlighted state changes.
///
/// ```rust
/// use tailor_compose::Style;
/// use tailor_controls::{ButtonStyle, StyledButton};
/// use tailor_view::{Button, Control, View, palette};
///
/// let style = ButtonStyle::new(
///     Style::identity(),
///     Style::from_fn(|b: &mut Button| {
///         let color = if b.is_highlighted() { palette::DARKER_BLUE } else { palette::SYSTEM_BLUE };
///         b.props_mut().set_background(Some(color));
///     }),
/// );
///
/// let mut button = StyledButton::new(Button::new("Primary"), style)?;
/// assert_eq!(button.button().props().background(), Some(palette::SYSTEM_BLUE));
///
/// button.set_highlighted(true)?;
/// assert_eq!(button.button().props().background(), Some(palette::DARKER_BLUE));
/// # Ok::<(), tailor_view::StyleError>(())
/// ```
#[derive(Debug)]
pub struct StyledButton {
    button: Button,
    style: ButtonStyle,
    press: PressState,
    subscribers: Subscribers,
}

impl StyledButton {
    /// Applies `style` to `button` and wraps it.
    pub fn new(mut button: Button, style: ButtonStyle) -> Result<Self, StyleError> {
        style.apply(&mut button)?;
        Ok(Self {
            button,
            style,
            press: PressState::default(),
            subscribers: Subscribers::default(),
        })
    }

    /// The underlying button.
    #[must_use]
    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Mutable access to the underlying button, for host-owned properties
    /// such as the title or frame.
    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.button
    }

    /// Unwraps the underlying button.
    #[must_use]
    pub fn into_button(self) -> Button {
        self.button
    }

    /// The current style.
    #[must_use]
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Replaces the style. Nothing is re-applied until the next highlight
    /// change or an explicit [`restyle`](Self::restyle).
    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
    }

    /// Re-applies the whole style (setup and highlight parts).
    pub fn restyle(&mut self) -> Result<(), StyleError> {
        self.style.apply(&mut self.button).inspect_err(|err| {
            log::warn!("restyling button {:?} failed: {err}", self.button.title());
        })
    }

    /// Registers a callback for this button's events.
    pub fn subscribe(&mut self, callback: impl FnMut(&ControlEvent) + 'static) {
        self.subscribers.push(callback);
    }

    /// Sets the highlighted flag and, if it changed, re-applies the highlight
    /// style and notifies subscribers.
    ///
    /// Returns whether the flag changed. On error the flag keeps its new
    /// value, the style is partially applied and no event is emitted.
    pub fn set_highlighted(&mut self, highlighted: bool) -> Result<bool, StyleError> {
        if self.button.is_highlighted() == highlighted {
            return Ok(false);
        }
        self.button.set_highlighted(highlighted);
        log::trace!(
            "button {:?} highlighted={highlighted}, applying {} step(s)",
            self.button.title(),
            self.style.highlight.len()
        );
        if let Err(err) = self.style.highlight.apply(&mut self.button) {
            log::warn!("highlight style for {:?} failed: {err}", self.button.title());
            return Err(err);
        }
        self.subscribers.emit(ControlEvent::HighlightChanged(highlighted));
        Ok(true)
    }

    /// Pointer pressed at `pos`, in the button's parent coordinates.
    pub fn pointer_down(&mut self, pos: Point) -> Result<(), StyleError> {
        let bounds = self.button.props().frame();
        match self.press.on_down(bounds, pos) {
            Some(highlighted) => self.set_highlighted(highlighted).map(drop),
            None => Ok(()),
        }
    }

    /// Pointer moved to `pos` during a press.
    pub fn pointer_move(&mut self, pos: Point) -> Result<(), StyleError> {
        let bounds = self.button.props().frame();
        match self.press.on_move(bounds, pos) {
            Some(highlighted) => self.set_highlighted(highlighted).map(drop),
            None => Ok(()),
        }
    }

    /// Pointer released at `pos`. Returns `true` if the button was activated.
    pub fn pointer_up(&mut self, pos: Point) -> Result<bool, StyleError> {
        let bounds = self.button.props().frame();
        let release = self.press.on_up(bounds, pos);
        if let Some(highlighted) = release.highlight {
            self.set_highlighted(highlighted)?;
        }
        if release.activated && self.button.is_enabled() {
            self.subscribers.emit(ControlEvent::Activated);
            return Ok(true);
        }
        Ok(false)
    }

    /// Abandons an in-progress press.
    pub fn pointer_cancel(&mut self) -> Result<(), StyleError> {
        match self.press.cancel() {
            Some(highlighted) => self.set_highlighted(highlighted).map(drop),
            None => Ok(()),
        }
    }
}
