// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in catalogs for buttons and switches.
//!
//! Each function builds a fresh sheet; applications call them once at
//! startup (or use [`AppStyles::builtin`]) and pass the result around.

use kurbo::Insets;
use tailor_compose::{Style, compose};
use tailor_controls::{ButtonStyle, SwitchStyle};
use tailor_view::{Button, ControlState, StyleError, TextStyle, palette};

use crate::mixins::{
    Base, Border, ContentInsets, CornerRadius, DropShadow, Font, HighlightBackground, Mixin,
    TitleColor,
};
use crate::sheet::{StyleSheet, StyleSheetBuilder};

/// Name of the shared base button style.
pub const BASE_BUTTON: &str = "base_button";
/// Name of the primary button style.
pub const PRIMARY_BUTTON: &str = "primary_button";
/// Name of the secondary button style.
pub const SECONDARY_BUTTON: &str = "secondary_button";

/// Name of the filled, highlight-aware control style.
pub const PRIMARY: &str = "primary";
/// Name of the white, highlight-aware control style.
pub const SECONDARY: &str = "secondary";
/// Name of the borderless link control style.
pub const LINK: &str = "link";

/// Name of the border-only switch style.
pub const DEFAULT_SWITCH: &str = "default";
/// Name of the border and background switch style.
pub const CUSTOM_SWITCH: &str = "custom";

/// Single-pass button styles.
///
/// - `base_button`: white background, clipping, 2pt black border, 8pt
///   corners, black title that turns gray while highlighted.
/// - `primary_button`: `base_button` with the border color reasserted.
/// - `secondary_button`: `base_button` made transparent and borderless,
///   with a blue title.
#[must_use]
pub fn button_sheet() -> StyleSheet<Style<Button, StyleError>> {
    let base_button: Style<Button, StyleError> = compose([
        Base {
            background: Some(palette::WHITE),
            clips_to_bounds: Some(true),
        }
        .into_style(),
        Border {
            width: Some(2.0),
            color: Some(palette::BLACK),
        }
        .into_style(),
        CornerRadius(8.0).into_style(),
        TitleColor {
            color: palette::BLACK,
            state: ControlState::NORMAL,
        }
        .into_style(),
        TitleColor {
            color: palette::GRAY,
            state: ControlState::HIGHLIGHTED,
        }
        .into_style(),
    ]);

    let primary_button = compose([
        base_button.clone(),
        Border {
            width: None,
            color: Some(palette::BLACK),
        }
        .into_style(),
    ]);

    let secondary_button = compose([
        base_button.clone(),
        Base {
            background: Some(palette::CLEAR),
            clips_to_bounds: None,
        }
        .into_style(),
        Border {
            width: Some(0.0),
            color: None,
        }
        .into_style(),
        TitleColor {
            color: palette::BLUE,
            state: ControlState::NORMAL,
        }
        .into_style(),
    ]);

    StyleSheetBuilder::new()
        .insert(BASE_BUTTON, base_button)
        .insert(PRIMARY_BUTTON, primary_button)
        .insert(SECONDARY_BUTTON, secondary_button)
        .build()
}

fn drop_shadow() -> Style<Button, StyleError> {
    DropShadow {
        color: palette::BLACK,
        opacity: 0.5,
        radius: 2.0,
    }
    .into_style()
}

fn blue_titles() -> Style<Button, StyleError> {
    compose([
        TitleColor {
            color: palette::SYSTEM_BLUE,
            state: ControlState::NORMAL,
        }
        .into_style(),
        TitleColor {
            color: palette::DARKER_BLUE,
            state: ControlState::HIGHLIGHTED,
        }
        .into_style(),
    ])
}

/// Highlight-aware button styles for [`StyledButton`](tailor_controls::StyledButton).
///
/// - `primary`: roomy insets, blue fill darkening while highlighted, white
///   title-3 text, rounded corners and a drop shadow.
/// - `secondary`: compact insets, white fill, blue body text, a blue
///   zero-width border, rounded corners and a drop shadow.
/// - `link`: compact insets, transparent fill, blue body text, no shadow.
#[must_use]
pub fn control_sheet() -> StyleSheet<ButtonStyle> {
    let compact = ContentInsets(Insets::uniform_xy(12.0, 8.0));

    let primary = ButtonStyle::new(
        compose([
            TitleColor {
                color: palette::WHITE,
                state: ControlState::NORMAL,
            }
            .into_style(),
            Font(TextStyle::Title3).into_style(),
            CornerRadius(8.0).into_style(),
            ContentInsets(Insets::uniform_xy(20.0, 14.0)).into_style(),
        ]),
        compose([
            HighlightBackground {
                normal: palette::SYSTEM_BLUE,
                highlighted: palette::DARKER_BLUE,
            }
            .into_style(),
            drop_shadow(),
        ]),
    );

    let secondary = ButtonStyle::new(
        compose([
            blue_titles(),
            Font(TextStyle::Body).into_style(),
            Border {
                width: Some(0.0),
                color: Some(palette::SYSTEM_BLUE),
            }
            .into_style(),
            CornerRadius(8.0).into_style(),
            compact.into_style(),
        ]),
        compose([
            Base {
                background: Some(palette::WHITE),
                clips_to_bounds: None,
            }
            .into_style(),
            drop_shadow(),
        ]),
    );

    let link = ButtonStyle::new(
        compose([
            blue_titles(),
            Font(TextStyle::Body).into_style(),
            compact.into_style(),
        ]),
        Base {
            background: Some(palette::CLEAR),
            clips_to_bounds: None,
        }
        .into_style(),
    );

    StyleSheetBuilder::new()
        .insert(PRIMARY, primary)
        .insert(SECONDARY, secondary)
        .insert(LINK, link)
        .build()
}

/// On/off styles for [`StyledSwitch`](tailor_controls::StyledSwitch).
///
/// - `default`: 1pt border while on, none while off.
/// - `custom`: additionally white while on and gray while off.
#[must_use]
pub fn switch_sheet() -> StyleSheet<SwitchStyle> {
    let custom = SwitchStyle::new(
        compose([
            Border {
                width: Some(1.0),
                color: None,
            }
            .into_style(),
            Base {
                background: Some(palette::WHITE),
                clips_to_bounds: None,
            }
            .into_style(),
        ]),
        compose([
            Border {
                width: Some(0.0),
                color: None,
            }
            .into_style(),
            Base {
                background: Some(palette::GRAY),
                clips_to_bounds: None,
            }
            .into_style(),
        ]),
    );

    StyleSheetBuilder::new()
        .insert(DEFAULT_SWITCH, SwitchStyle::default())
        .insert(CUSTOM_SWITCH, custom)
        .build()
}

/// Every catalog an application needs, built once and passed explicitly.
#[derive(Clone, Debug, Default)]
pub struct AppStyles {
    /// Single-pass button styles.
    pub buttons: StyleSheet<Style<Button, StyleError>>,
    /// Highlight-aware button styles.
    pub controls: StyleSheet<ButtonStyle>,
    /// Switch styles.
    pub switches: StyleSheet<SwitchStyle>,
}

impl AppStyles {
    /// The built-in catalogs.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            buttons: button_sheet(),
            controls: control_sheet(),
            switches: switch_sheet(),
        }
    }
}
