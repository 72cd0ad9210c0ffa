// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press tracking: derive highlight changes and activations from pointer events.
//!
//! ## Usage
//!
//! 1) Call [`PressState::on_down`] with the control's bounds and the pointer position.
//! 2) On each move, call [`PressState::on_move`]; it reports highlight changes as the
//!    pointer leaves or re-enters the bounds.
//! 3) Finish with [`PressState::on_up`] (activates when released inside) or
//!    [`PressState::cancel`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tailor_controls::PressState;
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
//! let mut press = PressState::default();
//!
//! assert_eq!(press.on_down(bounds, Point::new(10.0, 10.0)), Some(true));
//! assert_eq!(press.on_move(bounds, Point::new(200.0, 10.0)), Some(false));
//! assert_eq!(press.on_move(bounds, Point::new(20.0, 10.0)), Some(true));
//!
//! let release = press.on_up(bounds, Point::new(20.0, 10.0));
//! assert!(release.activated);
//! assert_eq!(release.highlight, Some(false));
//! ```

use kurbo::{Point, Rect};

/// Result of releasing a press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Release {
    /// New highlight value, if the release changed it.
    pub highlight: Option<bool>,
    /// `true` if the pointer was released inside the bounds.
    pub activated: bool,
}

/// Tracks one pointer press over a control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressState {
    /// A press is in progress.
    pressed: bool,
    /// The pointer was inside the bounds at the last event.
    inside: bool,
}

impl PressState {
    /// Starts a press if `pos` is inside `bounds`; returns `Some(true)` when
    /// the control becomes highlighted.
    pub fn on_down(&mut self, bounds: Rect, pos: Point) -> Option<bool> {
        if self.pressed || !bounds.contains(pos) {
            return None;
        }
        self.pressed = true;
        self.inside = true;
        Some(true)
    }

    /// Updates the pointer position; returns the new highlight value if it changed.
    pub fn on_move(&mut self, bounds: Rect, pos: Point) -> Option<bool> {
        if !self.pressed {
            return None;
        }
        let inside = bounds.contains(pos);
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(inside)
    }

    /// Ends the press at `pos`.
    pub fn on_up(&mut self, bounds: Rect, pos: Point) -> Release {
        if !self.pressed {
            return Release::default();
        }
        let was_highlighted = self.inside;
        let activated = bounds.contains(pos);
        self.pressed = false;
        self.inside = false;
        Release {
            highlight: was_highlighted.then_some(false),
            activated,
        }
    }

    /// Abandons the press; returns `Some(false)` if the control was highlighted.
    pub fn cancel(&mut self) -> Option<bool> {
        let was_highlighted = self.is_highlighted();
        self.pressed = false;
        self.inside = false;
        was_highlighted.then_some(false)
    }

    /// Returns `true` while a press is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns `true` while pressed with the pointer inside the bounds.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.pressed && self.inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 40.0);

    #[test]
    fn down_outside_is_ignored() {
        let mut press = PressState::default();
        assert_eq!(press.on_down(BOUNDS, Point::new(150.0, 10.0)), None);
        assert!(!press.is_pressed());
    }

    #[test]
    fn second_down_does_not_restart() {
        let mut press = PressState::default();
        assert_eq!(press.on_down(BOUNDS, Point::new(5.0, 5.0)), Some(true));
        assert_eq!(press.on_down(BOUNDS, Point::new(6.0, 6.0)), None);
        assert!(press.is_highlighted());
    }

    #[test]
    fn move_without_press_reports_nothing() {
        let mut press = PressState::default();
        assert_eq!(press.on_move(BOUNDS, Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn move_inside_does_not_repeat_highlight() {
        let mut press = PressState::default();
        press.on_down(BOUNDS, Point::new(5.0, 5.0));
        assert_eq!(press.on_move(BOUNDS, Point::new(50.0, 20.0)), None);
    }

    #[test]
    fn release_outside_does_not_activate() {
        let mut press = PressState::default();
        press.on_down(BOUNDS, Point::new(5.0, 5.0));
        assert_eq!(press.on_move(BOUNDS, Point::new(500.0, 5.0)), Some(false));

        let release = press.on_up(BOUNDS, Point::new(500.0, 5.0));
        assert_eq!(
            release,
            Release {
                highlight: None,
                activated: false
            }
        );
        assert!(!press.is_pressed());
    }

    #[test]
    fn cancel_unhighlights() {
        let mut press = PressState::default();
        press.on_down(BOUNDS, Point::new(5.0, 5.0));
        assert_eq!(press.cancel(), Some(false));
        assert_eq!(press.cancel(), None);
    }

    #[test]
    fn up_without_press_is_inert() {
        let mut press = PressState::default();
        assert_eq!(press.on_up(BOUNDS, Point::new(5.0, 5.0)), Release::default());
    }
}
