//! Input model: pointer cursor feedback, the gesture state machine, and the
//! replayable event type.
//!
//! `InputState` tracks what the single text element is doing between events:
//! sitting idle, being dragged, or being edited inline. `EditorEvent` names
//! every operation the host can drive, so a recorded session can be replayed
//! against a fresh editor.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::drag::DragSession;
use crate::geom::{Point, Size};
use crate::style::StyleChange;

/// Pointer cursor the host should show over the text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    /// Idle: the element can be picked up.
    #[default]
    Grab,
    /// A drag is in progress.
    Grabbing,
    /// Inline editing is active.
    Text,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Text => "text",
        }
    }
}

/// Gesture state for the text element.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The element follows the pointer until the next pointer-up.
    Dragging(DragSession),
    /// The text is being edited inline; dragging is disabled.
    Editing,
}

impl InputState {
    /// Cursor matching this state.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        match self {
            Self::Idle => Cursor::Grab,
            Self::Dragging(_) => Cursor::Grabbing,
            Self::Editing => Cursor::Text,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// One host-driven editor operation, in replayable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEvent {
    /// Pointer pressed; `over_element` is true when it landed on the text element.
    PointerDown { point: Point, over_element: bool },
    PointerMove { point: Point },
    /// Pointer released anywhere over the container.
    PointerUp,
    /// A validated style change.
    Style { change: StyleChange },
    /// Raw control input that still needs validation.
    Control { name: String, value: String },
    BeginEdit,
    EditText { text: String },
    EndEdit,
    Undo,
    Redo,
    /// Host measured the canvas.
    ContainerResized { size: Size },
    /// Host measured the text element.
    ElementResized { size: Size },
}
