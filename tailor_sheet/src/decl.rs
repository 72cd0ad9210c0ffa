// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative style sheets.
//!
//! A [`SheetDecl`] is plain data (typically deserialized from JSON) naming
//! button styles. Each [`StyleDecl`] lists the properties it sets and may
//! `extends` another declaration, whose style then runs first. Colors are
//! CSS color strings (`"white"`, `"#007aff"`, `"transparent"`).
//!
//! ```rust
//! use tailor_sheet::decl::SheetDecl;
//! use tailor_compose::Styleable;
//! use tailor_view::{Button, View};
//!
//! let decl: SheetDecl = serde_json::from_str(r#"{
//!     "styles": {
//!         "base": { "background": "white", "border_width": 2, "corner_radius": 8 },
//!         "flat": { "extends": "base", "border_width": 0 }
//!     }
//! }"#)?;
//! let sheet = decl.build_button_sheet()?;
//!
//! let button = Button::new("Flat").try_with_style(sheet.require("flat")?)?;
//! assert_eq!(button.props().layer().border_width(), 0.0);
//! assert_eq!(button.props().layer().corner_radius(), 8.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Insets;
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};
use tailor_compose::{Style, compose};
use tailor_view::{Button, ControlState, StyleError, TextStyle};

use crate::mixins::{Base, Border, ContentInsets, CornerRadius, Font, Mixin, TitleColor};
use crate::sheet::{SheetError, StyleSheet, StyleSheetBuilder};

/// Title font names accepted in declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontDecl {
    /// [`TextStyle::Title1`].
    Title1,
    /// [`TextStyle::Title2`].
    Title2,
    /// [`TextStyle::Title3`].
    Title3,
    /// [`TextStyle::Headline`].
    Headline,
    /// [`TextStyle::Body`].
    Body,
    /// [`TextStyle::Callout`].
    Callout,
    /// [`TextStyle::Caption`].
    Caption,
}

impl From<FontDecl> for TextStyle {
    fn from(font: FontDecl) -> Self {
        match font {
            FontDecl::Title1 => Self::Title1,
            FontDecl::Title2 => Self::Title2,
            FontDecl::Title3 => Self::Title3,
            FontDecl::Headline => Self::Headline,
            FontDecl::Body => Self::Body,
            FontDecl::Callout => Self::Callout,
            FontDecl::Caption => Self::Caption,
        }
    }
}

/// One declared button style. Unset fields leave properties untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleDecl {
    /// Declaration applied before this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Clip content to bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clips_to_bounds: Option<bool>,
    /// Border width in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    /// Border color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Corner radius in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    /// Title color in the normal state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    /// Title color while highlighted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color_highlighted: Option<String>,
    /// Content insets as `[top, left, bottom, right]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_insets: Option<[f64; 4]>,
    /// Title font.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontDecl>,
}

impl StyleDecl {
    /// Builds this declaration's own style, without `extends`.
    ///
    /// Colors are parsed and values validated here, so a style built from a
    /// declaration does not fail when applied to a button.
    pub fn to_style(&self, name: &str) -> Result<Style<Button, StyleError>, SheetError> {
        let color = |value: &Option<String>| -> Result<Option<Color>, SheetError> {
            value.as_deref().map(|v| parse(name, v)).transpose()
        };

        let mut parts: Vec<Style<Button, StyleError>> = Vec::new();
        if self.background.is_some() || self.clips_to_bounds.is_some() {
            parts.push(
                Base {
                    background: color(&self.background)?,
                    clips_to_bounds: self.clips_to_bounds,
                }
                .into_style(),
            );
        }
        if self.border_width.is_some() || self.border_color.is_some() {
            parts.push(
                Border {
                    width: self.border_width,
                    color: color(&self.border_color)?,
                }
                .into_style(),
            );
        }
        if let Some(radius) = self.corner_radius {
            parts.push(CornerRadius(radius).into_style());
        }
        if let Some(normal) = color(&self.title_color)? {
            parts.push(
                TitleColor {
                    color: normal,
                    state: ControlState::NORMAL,
                }
                .into_style(),
            );
        }
        if let Some(highlighted) = color(&self.title_color_highlighted)? {
            parts.push(
                TitleColor {
                    color: highlighted,
                    state: ControlState::HIGHLIGHTED,
                }
                .into_style(),
            );
        }
        if let Some([top, left, bottom, right]) = self.content_insets {
            parts.push(ContentInsets(Insets::new(left, top, right, bottom)).into_style());
        }
        if let Some(font) = self.font {
            parts.push(Font(font.into()).into_style());
        }

        let style = compose(parts);
        style
            .apply(&mut Button::default())
            .map_err(|error| SheetError::InvalidValue {
                style: name.into(),
                error,
            })?;
        Ok(style)
    }
}

fn parse(style: &str, value: &str) -> Result<Color, SheetError> {
    parse_color(value)
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|_| SheetError::InvalidColor {
            style: style.into(),
            value: value.into(),
        })
}

/// A named set of [`StyleDecl`]s.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetDecl {
    /// Declarations by style name.
    pub styles: BTreeMap<String, StyleDecl>,
}

impl SheetDecl {
    /// Resolves inheritance and builds a button style sheet.
    ///
    /// Fails on the first unknown `extends` target, inheritance cycle,
    /// unparsable color or invalid value.
    pub fn build_button_sheet(&self) -> Result<StyleSheet<Style<Button, StyleError>>, SheetError> {
        let mut resolved = BTreeMap::new();
        let mut visiting = Vec::new();
        for name in self.styles.keys() {
            self.resolve(name, &mut resolved, &mut visiting)?;
        }
        Ok(resolved
            .into_iter()
            .fold(StyleSheetBuilder::new(), |builder, (name, style)| {
                builder.insert(name, style)
            })
            .build())
    }

    fn resolve<'a>(
        &'a self,
        name: &'a str,
        resolved: &mut BTreeMap<&'a str, Style<Button, StyleError>>,
        visiting: &mut Vec<&'a str>,
    ) -> Result<Style<Button, StyleError>, SheetError> {
        if let Some(style) = resolved.get(name) {
            return Ok(style.clone());
        }
        if visiting.contains(&name) {
            return Err(SheetError::InheritanceCycle(name.into()));
        }
        let decl = self
            .styles
            .get(name)
            .ok_or_else(|| SheetError::UnknownStyle(name.into()))?;

        visiting.push(name);
        let base = match decl.extends.as_deref() {
            Some(parent) => Some(self.resolve(parent, resolved, visiting)?),
            None => None,
        };
        visiting.pop();

        let style = compose(base.into_iter().chain([decl.to_style(name)?]));
        resolved.insert(name, style.clone());
        Ok(style)
    }
}
