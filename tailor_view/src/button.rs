// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button handle.

use alloc::string::String;

use kurbo::Insets;
use peniko::Color;
use smallvec::SmallVec;

use crate::control::{Control, ControlState};
use crate::error::StyleError;
use crate::view::{View, ViewProps};

/// Dynamic-type text style used for a button title.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Large title.
    Title1,
    /// Second-level title.
    Title2,
    /// Third-level title.
    Title3,
    /// Headline.
    Headline,
    /// Body text.
    #[default]
    Body,
    /// Callout text.
    Callout,
    /// Caption text.
    Caption,
}

/// Title colors keyed by control state.
///
/// Lookups for a state without an explicit color fall back to the color set
/// for [`ControlState::NORMAL`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TitleColors {
    entries: SmallVec<[(ControlState, Color); 2]>,
}

impl TitleColors {
    /// Sets the color used for `state`, replacing any previous one.
    pub fn set(&mut self, state: ControlState, color: Color) {
        match self.entries.iter_mut().find(|(s, _)| *s == state) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((state, color)),
        }
    }

    /// The color set for exactly `state`.
    #[must_use]
    pub fn get(&self, state: ControlState) -> Option<Color> {
        self.entries
            .iter()
            .find(|(s, _)| *s == state)
            .map(|(_, color)| *color)
    }

    /// The color to draw with in `state`, falling back to the normal color.
    #[must_use]
    pub fn resolve(&self, state: ControlState) -> Option<Color> {
        self.get(state).or_else(|| self.get(ControlState::NORMAL))
    }
}

/// A push button.
///
/// ```rust
/// use tailor_view::{Button, Control, ControlState, palette};
///
/// let mut button = Button::new("Primary");
/// button.set_title_color(palette::BLACK, ControlState::NORMAL);
/// button.set_title_color(palette::GRAY, ControlState::HIGHLIGHTED);
///
/// assert_eq!(button.current_title_color(), Some(palette::BLACK));
/// button.set_highlighted(true);
/// assert!(button.is_highlighted());
/// assert_eq!(button.current_title_color(), Some(palette::GRAY));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Button {
    props: ViewProps,
    title: String,
    title_colors: TitleColors,
    content_insets: Insets,
    text_style: TextStyle,
    highlighted: bool,
    disabled: bool,
}

impl Button {
    /// Creates an undecorated button with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// The title shown in the normal state.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Per-state title colors.
    #[must_use]
    pub fn title_colors(&self) -> &TitleColors {
        &self.title_colors
    }

    /// Title color used in `state`, with fallback to the normal color.
    #[must_use]
    pub fn title_color(&self, state: ControlState) -> Option<Color> {
        self.title_colors.resolve(state)
    }

    /// Title color for the button's current state.
    #[must_use]
    pub fn current_title_color(&self) -> Option<Color> {
        self.title_color(self.state())
    }

    /// Sets the title color for `state`.
    pub fn set_title_color(&mut self, color: Color, state: ControlState) {
        self.title_colors.set(state, color);
    }

    /// Padding between the button's edge and its title.
    #[must_use]
    pub fn content_insets(&self) -> Insets {
        self.content_insets
    }

    /// Sets the content insets. Negative insets are allowed; non-finite ones are not.
    pub fn set_content_insets(&mut self, insets: Insets) -> Result<(), StyleError> {
        let Insets { x0, y0, x1, y1 } = insets;
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return Err(StyleError::InvalidInsets(insets));
        }
        self.content_insets = insets;
        Ok(())
    }

    /// Title font style.
    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        self.text_style
    }

    /// Sets the title font style.
    pub fn set_text_style(&mut self, style: TextStyle) {
        self.text_style = style;
    }

    /// Sets the highlighted flag. This is the host's raw state; it does not
    /// restyle anything by itself.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Returns `true` if the button accepts interaction.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Enables or disables the button.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

impl View for Button {
    fn props(&self) -> &ViewProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut ViewProps {
        &mut self.props
    }
}

impl Control for Button {
    fn state(&self) -> ControlState {
        let mut state = ControlState::NORMAL;
        state.set(ControlState::HIGHLIGHTED, self.highlighted);
        state.set(ControlState::DISABLED, self.disabled);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn title_colors_fall_back_to_normal() {
        let mut colors = TitleColors::default();
        assert_eq!(colors.resolve(ControlState::HIGHLIGHTED), None);

        colors.set(ControlState::NORMAL, palette::BLACK);
        assert_eq!(colors.resolve(ControlState::HIGHLIGHTED), Some(palette::BLACK));
        assert_eq!(colors.get(ControlState::HIGHLIGHTED), None);

        colors.set(ControlState::HIGHLIGHTED, palette::GRAY);
        assert_eq!(colors.resolve(ControlState::HIGHLIGHTED), Some(palette::GRAY));
    }

    #[test]
    fn title_color_is_replaced_not_duplicated() {
        let mut colors = TitleColors::default();
        colors.set(ControlState::NORMAL, palette::BLACK);
        colors.set(ControlState::NORMAL, palette::SYSTEM_BLUE);
        assert_eq!(colors.entries.len(), 1);
        assert_eq!(colors.get(ControlState::NORMAL), Some(palette::SYSTEM_BLUE));
    }

    #[test]
    fn state_reflects_flags() {
        let mut button = Button::new("OK");
        assert_eq!(button.state(), ControlState::NORMAL);

        button.set_highlighted(true);
        button.set_enabled(false);
        assert_eq!(
            button.state(),
            ControlState::HIGHLIGHTED | ControlState::DISABLED
        );
    }

    #[test]
    fn non_finite_insets_are_rejected() {
        let mut button = Button::new("OK");
        let good = Insets::new(20.0, 14.0, 20.0, 14.0);
        assert_eq!(button.set_content_insets(good), Ok(()));

        let bad = Insets::new(f64::NAN, 0.0, 0.0, 0.0);
        assert!(matches!(
            button.set_content_insets(bad),
            Err(StyleError::InvalidInsets(_))
        ));
        assert_eq!(button.content_insets(), good);
    }
}
