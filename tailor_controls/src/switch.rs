// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Switches restyled on value changes.

use tailor_compose::Style;
use tailor_view::{StyleError, Switch, View};

use crate::event::{ControlEvent, Subscribers};

/// The looks of a switch in its two positions.
#[derive(Clone, Debug)]
pub struct SwitchStyle {
    /// Applied when the switch turns on.
    pub on: Style<Switch, StyleError>,
    /// Applied when the switch turns off.
    pub off: Style<Switch, StyleError>,
}

impl SwitchStyle {
    /// Creates a switch style from its on and off parts.
    #[must_use]
    pub fn new(on: Style<Switch, StyleError>, off: Style<Switch, StyleError>) -> Self {
        Self { on, off }
    }

    /// The part matching `on`.
    #[must_use]
    pub fn for_value(&self, on: bool) -> &Style<Switch, StyleError> {
        if on { &self.on } else { &self.off }
    }
}

impl Default for SwitchStyle {
    /// A one-point border while on, none while off.
    fn default() -> Self {
        Self {
            on: border_width(1.0),
            off: border_width(0.0),
        }
    }
}

fn border_width(width: f64) -> Style<Switch, StyleError> {
    Style::try_from_fn(move |s: &mut Switch| s.props_mut().set_border_width(width))
}

/// A [`Switch`] holding reassignable on/off styles.
///
/// Whenever the value changes, the style for the new value is applied and
/// subscribers receive [`ControlEvent::ValueChanged`]. Reassigning a style
/// does not touch the switch; it is used from the next change on.
///
/// Because the composer is generic over the handle type, a
/// `Style<StyledSwitch>` can configure the styles themselves:
///
/// ```rust
/// use tailor_compose::{Style, Styleable};
/// use tailor_controls::StyledSwitch;
/// use tailor_view::{Switch, View, palette};
///
/// let gray_when_off: Style<StyledSwitch> = Style::from_fn(|s: &mut StyledSwitch| {
///     s.set_off_style(Style::from_fn(|sw: &mut Switch| {
///         sw.props_mut().set_background(Some(palette::GRAY));
///     }));
/// });
///
/// let mut switch = StyledSwitch::new(Switch::new()).with_style(&gray_when_off);
/// switch.set_on(true)?;
/// switch.set_on(false)?;
/// assert_eq!(switch.switch().props().background(), Some(palette::GRAY));
/// # Ok::<(), tailor_view::StyleError>(())
/// ```
#[derive(Debug)]
pub struct StyledSwitch {
    switch: Switch,
    style: SwitchStyle,
    subscribers: Subscribers,
}

impl StyledSwitch {
    /// Wraps `switch` with the default [`SwitchStyle`]. Nothing is applied yet.
    #[must_use]
    pub fn new(switch: Switch) -> Self {
        Self::with_styles(switch, SwitchStyle::default())
    }

    /// Wraps `switch` with `style`. Nothing is applied yet.
    #[must_use]
    pub fn with_styles(switch: Switch, style: SwitchStyle) -> Self {
        Self {
            switch,
            style,
            subscribers: Subscribers::default(),
        }
    }

    /// The underlying switch.
    #[must_use]
    pub fn switch(&self) -> &Switch {
        &self.switch
    }

    /// Mutable access to the underlying switch.
    pub fn switch_mut(&mut self) -> &mut Switch {
        &mut self.switch
    }

    /// Returns `true` if the switch is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.switch.is_on()
    }

    /// The current on/off styles.
    #[must_use]
    pub fn styles(&self) -> &SwitchStyle {
        &self.style
    }

    /// Replaces the style used when turning on.
    pub fn set_on_style(&mut self, style: Style<Switch, StyleError>) {
        self.style.on = style;
    }

    /// Replaces the style used when turning off.
    pub fn set_off_style(&mut self, style: Style<Switch, StyleError>) {
        self.style.off = style;
    }

    /// Registers a callback for this switch's events.
    pub fn subscribe(&mut self, callback: impl FnMut(&ControlEvent) + 'static) {
        self.subscribers.push(callback);
    }

    /// Applies the style for the current value.
    pub fn restyle(&mut self) -> Result<(), StyleError> {
        let on = self.switch.is_on();
        self.style.for_value(on).apply(&mut self.switch)
    }

    /// Sets the value; if it changed, applies the matching style and notifies
    /// subscribers. Returns whether the value changed.
    pub fn set_on(&mut self, on: bool) -> Result<bool, StyleError> {
        if self.switch.is_on() == on {
            return Ok(false);
        }
        self.switch.set_on(on);
        let style = self.style.for_value(on);
        log::trace!("switch on={on}, applying {} step(s)", style.len());
        if let Err(err) = style.apply(&mut self.switch) {
            log::warn!("switch style for on={on} failed: {err}");
            return Err(err);
        }
        self.subscribers.emit(ControlEvent::ValueChanged(on));
        Ok(true)
    }

    /// Flips the value.
    pub fn toggle(&mut self) -> Result<(), StyleError> {
        let on = !self.switch.is_on();
        self.set_on(on).map(drop)
    }
}
