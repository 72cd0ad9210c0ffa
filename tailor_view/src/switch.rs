// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! On/off switch handle.

use crate::control::{Control, ControlState};
use crate::view::{View, ViewProps};

/// A two-state switch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Switch {
    props: ViewProps,
    on: bool,
    disabled: bool,
}

impl Switch {
    /// Creates a switch in the off position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the switch is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Sets the on/off value. This is the host's raw state; it does not
    /// restyle anything by itself.
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    /// Enables or disables the switch.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

impl View for Switch {
    fn props(&self) -> &ViewProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut ViewProps {
        &mut self.props
    }
}

impl Control for Switch {
    fn state(&self) -> ControlState {
        let mut state = ControlState::NORMAL;
        state.set(ControlState::SELECTED, self.on);
        state.set(ControlState::DISABLED, self.disabled);
        state
    }
}
