// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state of controls.

use crate::view::View;

bitflags::bitflags! {
    /// Interaction state flags of a control.
    ///
    /// The empty set is the normal state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ControlState: u8 {
        /// The control is being pressed.
        const HIGHLIGHTED = 1 << 0;
        /// The control does not accept interaction.
        const DISABLED = 1 << 1;
        /// The control is selected (for switches: on).
        const SELECTED = 1 << 2;
    }
}

impl ControlState {
    /// The normal, idle state.
    pub const NORMAL: Self = Self::empty();
}

/// A view whose look can depend on transient interaction state.
pub trait Control: View {
    /// Current interaction state, as maintained by the host.
    fn state(&self) -> ControlState;

    /// Returns `true` while the control is highlighted.
    fn is_highlighted(&self) -> bool {
        self.state().contains(ControlState::HIGHLIGHTED)
    }
}
