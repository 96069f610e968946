//! Editor session: history, position and gesture state for one canvas.
//!
//! DESIGN
//! ======
//! `EditorCore` owns everything a single editor needs and nothing else: no
//! globals, no DOM handles. The host feeds it pointer, control and text
//! events and gets back a list of [`Action`]s describing what to redraw.
//!
//! Text and style changes go through the [`EditHistory`]. Position does not:
//! a drag only moves the element, and undo/redo leave the position where it
//! is. The host measures the canvas and the text element and reports both
//! sizes; the current position is re-clamped whenever either changes.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use serde::Serialize;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::config::EditorConfig;
use crate::drag::{DragSession, constrain};
use crate::geom::{Point, Position, Size};
use crate::history::EditHistory;
use crate::input::{Cursor, EditorEvent, InputState};
use crate::snapshot::Snapshot;
use crate::style::{StyleChange, StyleError};

/// Instructions returned to the host after each operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    RenderNeeded,
    SetCursor { cursor: Cursor },
    PositionChanged { position: Position },
    SnapshotChanged { snapshot: Snapshot },
    /// Undo/redo availability, for enabling the toolbar buttons.
    HistoryChanged { can_undo: bool, can_redo: bool },
    EditStarted,
    EditEnded,
}

/// Core editor state, testable without a browser.
pub struct EditorCore {
    id: Uuid,
    history: EditHistory,
    position: Position,
    container: Size,
    element: Size,
    input: InputState,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorCore {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let id = Uuid::new_v4();
        debug!(session = %id, text = %config.seed.text, "editor session started");
        Self {
            id,
            history: EditHistory::new(config.seed),
            position: constrain(config.start, config.canvas, Size::default()),
            container: config.canvas,
            element: Size::default(),
            input: InputState::Idle,
        }
    }

    // --- Pointer ---

    /// Pointer pressed. Starts a drag when it landed on the element and no
    /// inline edit is active. A drag whose release was never seen is replaced,
    /// so the new drag measures from this press.
    pub fn on_pointer_down(&mut self, point: Point, over_element: bool) -> Vec<Action> {
        if !over_element || self.input.is_editing() {
            return Vec::new();
        }
        self.input = InputState::Dragging(DragSession::begin(point, self.position));
        debug!(session = %self.id, x = self.position.x, y = self.position.y, "drag started");
        vec![Action::SetCursor { cursor: Cursor::Grabbing }]
    }

    /// Pointer moved anywhere over the container.
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        let InputState::Dragging(session) = &self.input else {
            return Vec::new();
        };
        let next = session.move_to(point, self.container, self.element);
        next.map_or_else(Vec::new, |next| {
            trace!(session = %self.id, x = next.x, y = next.y, "drag moved");
            self.move_element(next)
        })
    }

    /// Pointer released anywhere over the container; ends any drag.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if !self.input.is_dragging() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        debug!(session = %self.id, x = self.position.x, y = self.position.y, "drag ended");
        vec![Action::SetCursor { cursor: Cursor::Grab }]
    }

    // --- Style ---

    /// Record a new snapshot with one style attribute changed.
    pub fn set_style(&mut self, change: StyleChange) -> Vec<Action> {
        let next = self.history.current().with_style(change);
        debug!(session = %self.id, ?change, "style changed");
        self.record(next)
    }

    /// Validate raw control input, then apply it like [`EditorCore::set_style`].
    ///
    /// # Errors
    ///
    /// Returns the [`StyleError`] from validation; nothing is recorded.
    pub fn apply_control(&mut self, name: &str, value: &str) -> Result<Vec<Action>, StyleError> {
        match StyleChange::parse(name, value) {
            Ok(change) => Ok(self.set_style(change)),
            Err(e) => {
                warn!(session = %self.id, error = %e, control = name, "style control rejected");
                Err(e)
            }
        }
    }

    // --- Text ---

    /// Switch the element into inline editing. Ends a drag in progress.
    pub fn begin_edit(&mut self) -> Vec<Action> {
        if self.input.is_editing() {
            return Vec::new();
        }
        self.input = InputState::Editing;
        debug!(session = %self.id, "edit started");
        vec![Action::EditStarted, Action::SetCursor { cursor: Cursor::Text }, Action::RenderNeeded]
    }

    /// Record a new snapshot with the text replaced. Every call is its own
    /// history entry.
    pub fn edit_text(&mut self, text: impl Into<String>) -> Vec<Action> {
        let next = self.history.current().with_text(text);
        self.record(next)
    }

    /// Leave inline editing (the input lost focus).
    pub fn end_edit(&mut self) -> Vec<Action> {
        if !self.input.is_editing() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        debug!(session = %self.id, "edit ended");
        vec![Action::EditEnded, Action::SetCursor { cursor: Cursor::Grab }, Action::RenderNeeded]
    }

    // --- History ---

    pub fn undo(&mut self) -> Vec<Action> {
        if !self.history.can_undo() {
            return Vec::new();
        }
        self.history.undo();
        debug!(session = %self.id, cursor = self.history.cursor(), "undo");
        self.snapshot_actions()
    }

    pub fn redo(&mut self) -> Vec<Action> {
        if !self.history.can_redo() {
            return Vec::new();
        }
        self.history.redo();
        debug!(session = %self.id, cursor = self.history.cursor(), "redo");
        self.snapshot_actions()
    }

    // --- Measurements ---

    /// Host measured the canvas.
    pub fn set_container_size(&mut self, size: Size) -> Vec<Action> {
        self.container = size;
        self.reclamp()
    }

    /// Host measured the text element.
    pub fn set_element_size(&mut self, size: Size) -> Vec<Action> {
        self.element = size;
        self.reclamp()
    }

    // --- Replay ---

    /// Dispatch one replayable event.
    ///
    /// # Errors
    ///
    /// Only [`EditorEvent::Control`] can fail, with the validation error.
    pub fn handle(&mut self, event: EditorEvent) -> Result<Vec<Action>, StyleError> {
        let actions = match event {
            EditorEvent::PointerDown { point, over_element } => self.on_pointer_down(point, over_element),
            EditorEvent::PointerMove { point } => self.on_pointer_move(point),
            EditorEvent::PointerUp => self.on_pointer_up(),
            EditorEvent::Style { change } => self.set_style(change),
            EditorEvent::Control { name, value } => self.apply_control(&name, &value)?,
            EditorEvent::BeginEdit => self.begin_edit(),
            EditorEvent::EditText { text } => self.edit_text(text),
            EditorEvent::EndEdit => self.end_edit(),
            EditorEvent::Undo => self.undo(),
            EditorEvent::Redo => self.redo(),
            EditorEvent::ContainerResized { size } => self.set_container_size(size),
            EditorEvent::ElementResized { size } => self.set_element_size(size),
        };
        Ok(actions)
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The current history entry.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        self.history.current()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.input.cursor()
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    #[must_use]
    pub fn element_size(&self) -> Size {
        self.element
    }

    // --- Internals ---

    fn record(&mut self, next: Snapshot) -> Vec<Action> {
        self.history.record(next);
        debug!(session = %self.id, entries = self.history.len(), "history recorded");
        self.snapshot_actions()
    }

    fn snapshot_actions(&self) -> Vec<Action> {
        vec![
            Action::SnapshotChanged { snapshot: self.history.current().clone() },
            Action::HistoryChanged { can_undo: self.history.can_undo(), can_redo: self.history.can_redo() },
            Action::RenderNeeded,
        ]
    }

    fn move_element(&mut self, next: Position) -> Vec<Action> {
        if next == self.position {
            return Vec::new();
        }
        self.position = next;
        vec![Action::PositionChanged { position: next }, Action::RenderNeeded]
    }

    fn reclamp(&mut self) -> Vec<Action> {
        let next = constrain(self.position, self.container, self.element);
        self.move_element(next)
    }
}
