// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control events and their subscribers.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// A state change reported by a control after it has been restyled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// The highlighted flag changed to the contained value.
    HighlightChanged(bool),
    /// A switch's value changed to the contained value.
    ValueChanged(bool),
    /// A press was released inside the control.
    Activated,
}

type Callback = Box<dyn FnMut(&ControlEvent)>;

/// Callbacks notified of [`ControlEvent`]s, in subscription order.
#[derive(Default)]
pub(crate) struct Subscribers {
    callbacks: Vec<Callback>,
}

impl Subscribers {
    pub(crate) fn push(&mut self, callback: impl FnMut(&ControlEvent) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    pub(crate) fn emit(&mut self, event: ControlEvent) {
        for callback in &mut self.callbacks {
            callback(&event);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn emits_to_all_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();
        for id in 0..2 {
            let log = Rc::clone(&log);
            subscribers.push(move |event| log.borrow_mut().push((id, *event)));
        }

        subscribers.emit(ControlEvent::Activated);
        assert_eq!(
            *log.borrow(),
            vec![(0, ControlEvent::Activated), (1, ControlEvent::Activated)]
        );
    }
}
