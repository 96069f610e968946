use super::*;

// =============================================================
// Cursor
// =============================================================

#[test]
fn cursor_default_is_grab() {
    assert_eq!(Cursor::default(), Cursor::Grab);
}

#[test]
fn cursor_css_values() {
    assert_eq!(Cursor::Grab.as_css(), "grab");
    assert_eq!(Cursor::Grabbing.as_css(), "grabbing");
    assert_eq!(Cursor::Text.as_css(), "text");
}

#[test]
fn cursor_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Cursor::Grabbing).unwrap(), r#""grabbing""#);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert!(matches!(state, InputState::Idle));
    assert!(!state.is_dragging());
    assert!(!state.is_editing());
}

#[test]
fn input_state_cursor_per_variant() {
    let session = DragSession::begin(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    assert_eq!(InputState::Idle.cursor(), Cursor::Grab);
    assert_eq!(InputState::Dragging(session).cursor(), Cursor::Grabbing);
    assert_eq!(InputState::Editing.cursor(), Cursor::Text);
}

#[test]
fn input_state_predicates() {
    let session = DragSession::begin(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    assert!(InputState::Dragging(session).is_dragging());
    assert!(InputState::Editing.is_editing());
}

// =============================================================
// EditorEvent
// =============================================================

#[test]
fn event_pointer_down_from_json() {
    let event: EditorEvent =
        serde_json::from_str(r#"{"type":"pointer_down","point":{"x":1.0,"y":2.0},"over_element":true}"#).unwrap();
    assert_eq!(event, EditorEvent::PointerDown { point: Point::new(1.0, 2.0), over_element: true });
}

#[test]
fn event_unit_variants_from_json() {
    let undo: EditorEvent = serde_json::from_str(r#"{"type":"undo"}"#).unwrap();
    let up: EditorEvent = serde_json::from_str(r#"{"type":"pointer_up"}"#).unwrap();
    assert_eq!(undo, EditorEvent::Undo);
    assert_eq!(up, EditorEvent::PointerUp);
}

#[test]
fn event_control_from_json() {
    let event: EditorEvent =
        serde_json::from_str(r#"{"type":"control","name":"fontSize","value":"30"}"#).unwrap();
    assert_eq!(event, EditorEvent::Control { name: "fontSize".into(), value: "30".into() });
}

#[test]
fn event_unknown_type_is_rejected() {
    let parsed = serde_json::from_str::<EditorEvent>(r#"{"type":"explode"}"#);
    assert!(parsed.is_err());
}
