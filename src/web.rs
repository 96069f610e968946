//! Browser bridge: exports the editor to JavaScript.
//!
//! `Editor` wraps [`EditorCore`] and owns no DOM state of its own. The JS
//! host forwards pointer, control and text events and applies the returned
//! JSON action list. The one place the crate reads the live page is
//! [`measure`], which the host calls through [`Editor::measure`] after layout
//! changes.

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::editor::{Action, EditorCore};
use crate::geom::{Point, Size};

/// Bounding box size of a rendered element.
#[must_use]
pub fn measure(element: &Element) -> Size {
    let rect = element.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}

/// Serialize an action list for the host.
///
/// # Errors
///
/// Propagates `serde_json` failures.
pub fn actions_json(actions: &[Action]) -> Result<String, serde_json::Error> {
    serde_json::to_string(actions)
}

/// The editor as seen from JavaScript. Every mutating method returns the
/// resulting actions as a JSON array string.
#[wasm_bindgen]
pub struct Editor {
    core: EditorCore,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self { core: EditorCore::default() }
    }

    /// Re-measure the canvas and the text element.
    ///
    /// # Errors
    ///
    /// Fails only if the action list cannot be serialized.
    pub fn measure(&mut self, container: &Element, element: &Element) -> Result<String, JsError> {
        let mut actions = self.core.set_container_size(measure(container));
        actions.extend(self.core.set_element_size(measure(element)));
        Ok(actions_json(&actions)?)
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, over_element: bool) -> Result<String, JsError> {
        Ok(actions_json(&self.core.on_pointer_down(Point::new(x, y), over_element))?)
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<String, JsError> {
        Ok(actions_json(&self.core.on_pointer_move(Point::new(x, y)))?)
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> Result<String, JsError> {
        Ok(actions_json(&self.core.on_pointer_up())?)
    }

    /// Apply raw style control input (`name` is the control's name attribute).
    ///
    /// # Errors
    ///
    /// Rejected input surfaces as a JS `Error` carrying the validation message.
    pub fn control(&mut self, name: &str, value: &str) -> Result<String, JsError> {
        let actions = self.core.apply_control(name, value)?;
        Ok(actions_json(&actions)?)
    }

    #[wasm_bindgen(js_name = beginEdit)]
    pub fn begin_edit(&mut self) -> Result<String, JsError> {
        Ok(actions_json(&self.core.begin_edit())?)
    }

    #[wasm_bindgen(js_name = editText)]
    pub fn edit_text(&mut self, text: String) -> Result<String, JsError> {
        Ok(actions_json(&self.core.edit_text(text))?)
    }

    #[wasm_bindgen(js_name = endEdit)]
    pub fn end_edit(&mut self) -> Result<String, JsError> {
        Ok(actions_json(&self.core.end_edit())?)
    }

    pub fn undo(&mut self) -> Result<String, JsError> {
        Ok(actions_json(&self.core.undo())?)
    }

    pub fn redo(&mut self) -> Result<String, JsError> {
        Ok(actions_json(&self.core.redo())?)
    }

    #[wasm_bindgen(js_name = canUndo)]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.core.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.core.can_redo()
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> String {
        self.core.snapshot().text.clone()
    }

    /// Current style as inline CSS declarations.
    #[wasm_bindgen(js_name = styleCss)]
    #[must_use]
    pub fn style_css(&self) -> String {
        self.core.snapshot().style.to_string()
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.core.position().x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.core.position().y
    }

    /// CSS cursor for the text element.
    #[must_use]
    pub fn cursor(&self) -> String {
        self.core.cursor().as_css().to_string()
    }
}
