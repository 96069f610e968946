//! Editing core for the text styling canvas.
//!
//! A single text element sits on a bounded canvas. The user drags it around,
//! edits its text inline and changes its font through style controls. Every
//! text or style change lands in a linear undo/redo timeline. The browser host
//! only wires DOM events into [`editor::EditorCore`] (directly, or through the
//! [`web::Editor`] wasm wrapper) and redraws from the [`editor::Action`]s it
//! gets back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | Editor session and the testable [`editor::EditorCore`] |
//! | [`history`] | Linear undo/redo timeline with branch discard |
//! | [`drag`] | Drag sessions and container clamping |
//! | [`style`] | Text style values and validated control changes |
//! | [`snapshot`] | The (text, style) pair recorded in history |
//! | [`input`] | Pointer cursor feedback, gesture state and replayable events |
//! | [`geom`] | Points, sizes and positions |
//! | [`config`] | Session seed values, read from the environment |
//! | [`consts`] | Shared numeric and textual defaults |
//! | [`web`] | `wasm-bindgen` bridge for the browser host |

pub mod config;
pub mod consts;
pub mod drag;
pub mod editor;
pub mod geom;
pub mod history;
pub mod input;
pub mod snapshot;
pub mod style;
pub mod web;
