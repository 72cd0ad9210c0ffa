// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style configurators and their composition.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;

/// One configurator step.
type Step<T, E> = Rc<dyn Fn(&mut T) -> Result<(), E>>;

/// An ordered, immutable sequence of configurators over handles of type `T`.
///
/// Cloning is cheap: the steps live behind an `Rc` and are shared between
/// clones. A style has no identity beyond its steps, so two styles built
/// from the same steps in the same order behave identically.
///
/// # Example
///
/// ```rust
/// use tailor_compose::Style;
///
/// let double: Style<i32> = Style::from_fn(|n: &mut i32| *n *= 2);
/// let increment: Style<i32> = Style::from_fn(|n: &mut i32| *n += 1);
///
/// let mut n = 3;
/// double.then(&increment).run(&mut n);
/// assert_eq!(n, 7);
/// ```
pub struct Style<T: ?Sized, E = Infallible> {
    steps: Rc<[Step<T, E>]>,
}

impl<T: ?Sized, E> Style<T, E> {
    /// Returns the identity style, which performs no mutation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            steps: Rc::from(Vec::new()),
        }
    }

    /// Returns `true` if applying this style does nothing.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the number of configurator steps in this style.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Applies every step, in order, to `view`.
    ///
    /// Stops at the first failing step and returns its error. Steps that ran
    /// before the failure keep their effect.
    pub fn apply(&self, view: &mut T) -> Result<(), E> {
        for step in self.steps.iter() {
            step(view)?;
        }
        Ok(())
    }

    /// Returns a style that applies `self` and then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        compose([self.clone(), next.clone()])
    }
}

impl<T: ?Sized + 'static, E: 'static> Style<T, E> {
    /// Creates a single-step style from a fallible configurator.
    #[must_use]
    pub fn try_from_fn<F>(f: F) -> Self
    where
        F: Fn(&mut T) -> Result<(), E> + 'static,
    {
        let step: Step<T, E> = Rc::new(f);
        Self {
            steps: Rc::from([step]),
        }
    }

    /// Creates a single-step style from a configurator that cannot fail.
    #[must_use]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&mut T) + 'static,
    {
        Self::try_from_fn(move |view| {
            f(view);
            Ok(())
        })
    }

    /// Creates a style that picks `then` or `otherwise` each time it is applied.
    ///
    /// `predicate` sees the handle as it is at application time, which is how
    /// styles react to host state such as a highlighted or on/off flag.
    ///
    /// ```rust
    /// use tailor_compose::Style;
    ///
    /// struct Toggle {
    ///     on: bool,
    ///     border: f64,
    /// }
    ///
    /// let style = Style::when(
    ///     |t: &Toggle| t.on,
    ///     Style::from_fn(|t: &mut Toggle| t.border = 1.0),
    ///     Style::from_fn(|t: &mut Toggle| t.border = 0.0),
    /// );
    ///
    /// let mut toggle = Toggle { on: true, border: 0.0 };
    /// style.run(&mut toggle);
    /// assert_eq!(toggle.border, 1.0);
    ///
    /// toggle.on = false;
    /// style.run(&mut toggle);
    /// assert_eq!(toggle.border, 0.0);
    /// ```
    #[must_use]
    pub fn when<P>(predicate: P, then: Self, otherwise: Self) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::try_from_fn(move |view| {
            if predicate(&*view) {
                then.apply(view)
            } else {
                otherwise.apply(view)
            }
        })
    }

    /// Lifts this style onto a containing handle type.
    ///
    /// `project` borrows the inner handle out of the outer one. The result is
    /// a single step that applies all of `self` to the projected handle.
    #[must_use]
    pub fn lens<S, P>(self, project: P) -> Style<S, E>
    where
        S: ?Sized + 'static,
        P: Fn(&mut S) -> &mut T + 'static,
    {
        Style::try_from_fn(move |outer: &mut S| self.apply(project(outer)))
    }
}

impl<T: ?Sized> Style<T, Infallible> {
    /// Applies a style that cannot fail.
    pub fn run(&self, view: &mut T) {
        match self.apply(view) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<T: ?Sized + 'static> Style<T, Infallible> {
    /// Converts this style to one with error type `E`, for composing with
    /// fallible styles.
    #[must_use]
    pub fn fallible<E: 'static>(&self) -> Style<T, E> {
        let steps: Vec<Step<T, E>> = self
            .steps
            .iter()
            .map(|step| {
                let step = Rc::clone(step);
                let lifted: Step<T, E> = Rc::new(move |view: &mut T| -> Result<(), E> {
                    match step(view) {
                        Ok(()) => Ok(()),
                        Err(never) => match never {},
                    }
                });
                lifted
            })
            .collect();
        Style {
            steps: Rc::from(steps),
        }
    }
}

impl<T: ?Sized, E> Clone for Style<T, E> {
    fn clone(&self) -> Self {
        Self {
            steps: Rc::clone(&self.steps),
        }
    }
}

impl<T: ?Sized, E> Default for Style<T, E> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: ?Sized, E> fmt::Debug for Style<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl<T: ?Sized, E> FromIterator<Self> for Style<T, E> {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        compose(iter)
    }
}

/// Concatenates `styles` into one style that applies each of them in order.
///
/// Nested compositions are flattened, so `compose([compose([a, b]), c])`
/// and `compose([a, b, c])` hold the same steps. Nothing is applied here.
#[must_use]
pub fn compose<T, E, I>(styles: I) -> Style<T, E>
where
    T: ?Sized,
    I: IntoIterator<Item = Style<T, E>>,
{
    let mut steps = Vec::new();
    for style in styles {
        steps.extend(style.steps.iter().cloned());
    }
    Style {
        steps: Rc::from(steps),
    }
}

/// Applies `style` to `view`. Equivalent to [`Style::apply`].
pub fn apply<T: ?Sized, E>(style: &Style<T, E>, view: &mut T) -> Result<(), E> {
    style.apply(view)
}
