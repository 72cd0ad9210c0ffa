// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named style catalogs.
//!
//! A [`StyleSheet`] maps style names to values (usually [`Style`]s, or
//! grouped styles such as `ButtonStyle`). Sheets are built once at startup
//! with a [`StyleSheetBuilder`] and passed to whatever builds views; there is
//! no global registry.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tailor_compose::{Style, compose};
use tailor_view::StyleError;

/// Error raised while building or querying a style sheet.
#[derive(Clone, Debug, PartialEq)]
pub enum SheetError {
    /// No style with this name exists.
    UnknownStyle(String),
    /// The style inherits from itself, directly or indirectly.
    InheritanceCycle(String),
    /// A color literal could not be parsed.
    InvalidColor {
        /// Style that declared the color.
        style: String,
        /// The offending literal.
        value: String,
    },
    /// A declared value is rejected by the view model.
    InvalidValue {
        /// Style that declared the value.
        style: String,
        /// Why the value was rejected.
        error: StyleError,
    },
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStyle(name) => write!(f, "unknown style {name:?}"),
            Self::InheritanceCycle(name) => write!(f, "style {name:?} inherits from itself"),
            Self::InvalidColor { style, value } => {
                write!(f, "style {style:?}: invalid color {value:?}")
            }
            Self::InvalidValue { style, error } => write!(f, "style {style:?}: {error}"),
        }
    }
}

impl core::error::Error for SheetError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidValue { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// An immutable, named catalog of styles.
///
/// Cloning is cheap (`Rc`). Entries are kept sorted by name for binary
/// search lookup.
///
/// ```rust
/// use tailor_compose::Style;
/// use tailor_sheet::{StyleSheet, StyleSheetBuilder};
///
/// let sheet: StyleSheet<Style<u32>> = StyleSheetBuilder::new()
///     .insert("double", Style::from_fn(|n: &mut u32| *n *= 2))
///     .build();
///
/// let mut n = 21;
/// sheet.get("double").unwrap().run(&mut n);
/// assert_eq!(n, 42);
/// assert!(sheet.get("triple").is_none());
/// ```
pub struct StyleSheet<V> {
    inner: Rc<SheetData<V>>,
}

struct SheetData<V> {
    /// Sorted by name.
    entries: Vec<(String, V)>,
}

impl<V> StyleSheet<V> {
    fn position(&self, name: &str) -> Result<usize, usize> {
        self.inner
            .entries
            .binary_search_by(|(entry, _)| entry.as_str().cmp(name))
    }

    /// Returns the value registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.position(name)
            .ok()
            .map(|idx| &self.inner.entries[idx].1)
    }

    /// Like [`get`](Self::get), but reports a missing name as an error.
    pub fn require(&self, name: &str) -> Result<&V, SheetError> {
        self.get(name)
            .ok_or_else(|| SheetError::UnknownStyle(name.into()))
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_ok()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Returns `true` if the sheet has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Entry names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Entries, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.inner
            .entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<V> Clone for StyleSheet<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V> Default for StyleSheet<V> {
    fn default() -> Self {
        StyleSheetBuilder::new().build()
    }
}

impl<V: fmt::Debug> fmt::Debug for StyleSheet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Builder for [`StyleSheet`]s.
pub struct StyleSheetBuilder<V> {
    entries: Vec<(String, V)>,
}

impl<V> StyleSheetBuilder<V> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `value` under `name`, replacing any previous entry.
    #[must_use]
    pub fn insert(mut self, name: impl Into<String>, value: V) -> Self {
        let name = name.into();
        match self
            .entries
            .binary_search_by(|(entry, _)| entry.as_str().cmp(&name))
        {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (name, value)),
        }
        self
    }

    /// Returns the value registered so far under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .binary_search_by(|(entry, _)| entry.as_str().cmp(name))
            .ok()
            .map(|idx| &self.entries[idx].1)
    }

    /// Builds the sheet.
    #[must_use]
    pub fn build(self) -> StyleSheet<V> {
        StyleSheet {
            inner: Rc::new(SheetData {
                entries: self.entries,
            }),
        }
    }
}

impl<T: ?Sized, E> StyleSheetBuilder<Style<T, E>> {
    /// Registers `name` as the style `base` followed by `overrides`.
    ///
    /// `base` must already be registered in this builder.
    pub fn derive(
        self,
        name: impl Into<String>,
        base: &str,
        overrides: impl IntoIterator<Item = Style<T, E>>,
    ) -> Result<Self, SheetError> {
        let base = self
            .get(base)
            .cloned()
            .ok_or_else(|| SheetError::UnknownStyle(base.into()))?;
        let derived = compose(core::iter::once(base).chain(overrides));
        Ok(self.insert(name, derived))
    }
}

impl<V> Default for StyleSheetBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for StyleSheetBuilder<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSheetBuilder")
            .field("entries", &self.entries)
            .finish()
    }
}
