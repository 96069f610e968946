#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use serde::{Deserialize, Serialize};

use crate::style::{StyleChange, TextStyle};

/// One point in the edit history: the text and the style it is drawn with.
///
/// Position is not part of a snapshot; dragging never creates history entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub text: String,
    pub style: TextStyle,
}

impl Snapshot {
    #[must_use]
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self { text: text.into(), style }
    }

    /// Same style, different text.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self { text: text.into(), style: self.style }
    }

    /// Same text, one style attribute changed.
    #[must_use]
    pub fn with_style(&self, change: StyleChange) -> Self {
        Self { text: self.text.clone(), style: self.style.with(change) }
    }
}
