//! Text style values and the control changes that produce them.
//!
//! `TextStyle` is a plain value: the history stores it as-is and never
//! re-validates it. Raw control input (a control name plus the string value
//! the widget reported) goes through [`StyleChange::parse`] first, which is
//! where out-of-range sizes and unknown enum values are rejected.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};

// =============================================================================
// ERRORS
// =============================================================================

/// Error returned by [`StyleChange::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The control name is not one of the known style controls.
    #[error("unknown style control: {0}")]
    UnknownControl(String),
    /// The value is not a member of the control's enumerated set.
    #[error("invalid value for {control}: {value}")]
    InvalidValue { control: &'static str, value: String },
    /// The font size is not an integer pixel value.
    #[error("font size is not a number: {0}")]
    FontSizeNotNumber(String),
    /// The font size lies outside the accepted range.
    #[error("font size {0} outside {min}..={max}", min = MIN_FONT_SIZE, max = MAX_FONT_SIZE)]
    FontSizeOutOfRange(u32),
}

impl StyleError {
    /// Stable code for the host to branch on.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownControl(_) => "E_UNKNOWN_CONTROL",
            Self::InvalidValue { .. } => "E_INVALID_VALUE",
            Self::FontSizeNotNumber(_) | Self::FontSizeOutOfRange(_) => "E_FONT_SIZE",
        }
    }
}

// =============================================================================
// ENUMS
// =============================================================================

/// Font families offered by the family control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    Georgia,
    #[serde(rename = "Courier New")]
    CourierNew,
}

impl FontFamily {
    pub const ALL: [Self; 3] = [Self::Arial, Self::Georgia, Self::CourierNew];

    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::Georgia => "Georgia",
            Self::CourierNew => "Courier New",
        }
    }

    #[must_use]
    pub fn from_css(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_css() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }

    #[must_use]
    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::Normal),
            "bold" => Some(Self::Bold),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }

    #[must_use]
    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::Normal),
            "italic" => Some(Self::Italic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

impl TextDecoration {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Underline => "underline",
        }
    }

    #[must_use]
    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "underline" => Some(Self::Underline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    #[must_use]
    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

// =============================================================================
// TEXT STYLE
// =============================================================================

/// Full set of style attributes applied to the text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: u32,
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
    pub text_align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
            font_weight: FontWeight::default(),
            font_style: FontStyle::default(),
            text_decoration: TextDecoration::default(),
            text_align: TextAlign::default(),
        }
    }
}

impl TextStyle {
    /// Copy of this style with one control change applied.
    #[must_use]
    pub fn with(self, change: StyleChange) -> Self {
        let mut next = self;
        match change {
            StyleChange::FontSize(px) => next.font_size = px,
            StyleChange::FontFamily(family) => next.font_family = family,
            StyleChange::FontWeight(weight) => next.font_weight = weight,
            StyleChange::FontStyle(style) => next.font_style = style,
            StyleChange::TextDecoration(decoration) => next.text_decoration = decoration,
            StyleChange::TextAlign(align) => next.text_align = align,
        }
        next
    }
}

/// Renders the style as an inline CSS declaration list.
impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "font-size: {}px; font-family: {}; font-weight: {}; font-style: {}; text-decoration: {}; text-align: {};",
            self.font_size,
            self.font_family.as_css(),
            self.font_weight.as_css(),
            self.font_style.as_css(),
            self.text_decoration.as_css(),
            self.text_align.as_css(),
        )
    }
}

// =============================================================================
// CONTROL CHANGES
// =============================================================================

/// A single style control change, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "control", content = "value", rename_all = "camelCase")]
pub enum StyleChange {
    FontSize(u32),
    FontFamily(FontFamily),
    FontWeight(FontWeight),
    FontStyle(FontStyle),
    TextDecoration(TextDecoration),
    TextAlign(TextAlign),
}

impl StyleChange {
    /// Validate raw control input.
    ///
    /// `name` is the control name the host reports (`fontSize`, `fontFamily`,
    /// `fontWeight`, `fontStyle`, `textDecoration`, `textAlign`). Font sizes
    /// may carry a trailing `px`.
    ///
    /// # Errors
    ///
    /// Returns a [`StyleError`] for unknown controls, values outside the
    /// control's set, and font sizes that are not integers in range.
    pub fn parse(name: &str, value: &str) -> Result<Self, StyleError> {
        let value = value.trim();
        match name {
            "fontSize" => parse_font_size(value).map(Self::FontSize),
            "fontFamily" => FontFamily::from_css(value)
                .map(Self::FontFamily)
                .ok_or_else(|| invalid("fontFamily", value)),
            "fontWeight" => FontWeight::from_css(value)
                .map(Self::FontWeight)
                .ok_or_else(|| invalid("fontWeight", value)),
            "fontStyle" => FontStyle::from_css(value)
                .map(Self::FontStyle)
                .ok_or_else(|| invalid("fontStyle", value)),
            "textDecoration" => TextDecoration::from_css(value)
                .map(Self::TextDecoration)
                .ok_or_else(|| invalid("textDecoration", value)),
            "textAlign" => TextAlign::from_css(value)
                .map(Self::TextAlign)
                .ok_or_else(|| invalid("textAlign", value)),
            other => Err(StyleError::UnknownControl(other.to_string())),
        }
    }
}

fn invalid(control: &'static str, value: &str) -> StyleError {
    StyleError::InvalidValue { control, value: value.to_string() }
}

/// Parse and range-check a font size control value (`"24"` or `"24px"`).
///
/// # Errors
///
/// Returns [`StyleError::FontSizeNotNumber`] or [`StyleError::FontSizeOutOfRange`].
pub fn parse_font_size(value: &str) -> Result<u32, StyleError> {
    let digits = value.strip_suffix("px").unwrap_or(value).trim();
    let px = digits
        .parse::<u32>()
        .map_err(|_| StyleError::FontSizeNotNumber(value.to_string()))?;
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&px) {
        return Err(StyleError::FontSizeOutOfRange(px));
    }
    Ok(px)
}
