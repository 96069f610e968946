//! Session seed configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_START_X, DEFAULT_START_Y, DEFAULT_TEXT};
use crate::geom::{Point, Position, Size};
use crate::snapshot::Snapshot;
use crate::style::{FontFamily, StyleError, TextStyle, parse_font_size};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Style {
        var: &'static str,
        #[source]
        source: StyleError,
    },
    #[error("{var}: not a number: {value}")]
    NotNumber { var: &'static str, value: String },
    #[error("{var}: must be finite and non-negative, got {value}")]
    InvalidOffset { var: &'static str, value: f64 },
}

impl ConfigError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Style { .. } => "E_CONFIG_STYLE",
            Self::NotNumber { .. } | Self::InvalidOffset { .. } => "E_CONFIG_NUMBER",
        }
    }
}

/// Values a new editor session starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// First history entry.
    pub seed: Snapshot,
    /// Initial element top-left inside the canvas.
    pub start: Position,
    /// Canvas size assumed until the host measures it.
    pub canvas: Size,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            seed: Snapshot::new(DEFAULT_TEXT, TextStyle::default()),
            start: Point::new(DEFAULT_START_X, DEFAULT_START_Y),
            canvas: Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `EDITOR_TEXT`: seed text (default `Abhinav`)
    /// - `EDITOR_FONT_SIZE`: seed font size, 10..=50 (default 20)
    /// - `EDITOR_FONT_FAMILY`: `Arial` (default), `Georgia` or `Courier New`
    /// - `EDITOR_START_X` / `EDITOR_START_Y`: initial offset (default 50)
    /// - `EDITOR_CANVAS_WIDTH` / `EDITOR_CANVAS_HEIGHT`: default 320
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a present variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    /// Same as [`EditorConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a present variable fails to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut style = defaults.seed.style;

        if let Some(raw) = lookup("EDITOR_FONT_SIZE") {
            style.font_size =
                parse_font_size(raw.trim()).map_err(|source| ConfigError::Style { var: "EDITOR_FONT_SIZE", source })?;
        }
        if let Some(raw) = lookup("EDITOR_FONT_FAMILY") {
            style.font_family = FontFamily::from_css(raw.trim()).ok_or_else(|| ConfigError::Style {
                var: "EDITOR_FONT_FAMILY",
                source: StyleError::InvalidValue { control: "fontFamily", value: raw.clone() },
            })?;
        }

        let text = lookup("EDITOR_TEXT").unwrap_or(defaults.seed.text);
        let start = Point::new(
            parse_offset(&lookup, "EDITOR_START_X", defaults.start.x)?,
            parse_offset(&lookup, "EDITOR_START_Y", defaults.start.y)?,
        );
        let canvas = Size::new(
            parse_offset(&lookup, "EDITOR_CANVAS_WIDTH", defaults.canvas.width)?,
            parse_offset(&lookup, "EDITOR_CANVAS_HEIGHT", defaults.canvas.height)?,
        );

        Ok(Self { seed: Snapshot::new(text, style), start, canvas })
    }
}

fn env_var(key: &str) -> Option<String> {
    let Ok(value) = std::env::var(key) else {
        return None;
    };
    Some(value)
}

fn parse_offset<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::NotNumber { var, value: raw.clone() })?;
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidOffset { var, value });
    }
    Ok(value)
}
