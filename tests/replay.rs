//! Replays recorded JSON-line sessions against a fresh editor, the same way
//! the `text-styler` binary does.
#![allow(clippy::float_cmp)]

use text_styler::config::EditorConfig;
use text_styler::editor::{Action, EditorCore};
use text_styler::geom::{Point, Size};
use text_styler::input::EditorEvent;
use text_styler::snapshot::Snapshot;
use text_styler::style::{FontFamily, TextStyle};

fn session() -> EditorCore {
    EditorCore::new(EditorConfig {
        seed: Snapshot::new("A", TextStyle::default()),
        start: Point::new(50.0, 50.0),
        canvas: Size::new(300.0, 300.0),
    })
}

fn replay(core: &mut EditorCore, script: &str) -> Vec<Vec<Action>> {
    script
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let event: EditorEvent = serde_json::from_str(line).unwrap();
            core.handle(event).unwrap()
        })
        .collect()
}

#[test]
fn drag_past_far_corner_lands_on_bound() {
    let mut core = session();
    replay(
        &mut core,
        r#"
        {"type":"element_resized","size":{"width":50.0,"height":50.0}}
        {"type":"pointer_down","point":{"x":100.0,"y":100.0},"over_element":true}
        {"type":"pointer_move","point":{"x":500.0,"y":500.0}}
        {"type":"pointer_up"}
        "#,
    );
    assert_eq!(core.position(), Point::new(250.0, 250.0));
}

#[test]
fn drag_past_origin_lands_on_zero() {
    let mut core = session();
    replay(
        &mut core,
        r#"
        {"type":"element_resized","size":{"width":50.0,"height":50.0}}
        {"type":"pointer_down","point":{"x":100.0,"y":100.0},"over_element":true}
        {"type":"pointer_move","point":{"x":-500.0,"y":-500.0}}
        {"type":"pointer_up"}
        "#,
    );
    assert_eq!(core.position(), Point::new(0.0, 0.0));
}

#[test]
fn wide_element_never_leaves_left_edge() {
    let mut core = session();
    let steps = replay(
        &mut core,
        r#"
        {"type":"element_resized","size":{"width":400.0,"height":50.0}}
        {"type":"pointer_down","point":{"x":100.0,"y":100.0},"over_element":true}
        {"type":"pointer_move","point":{"x":250.0,"y":120.0}}
        {"type":"pointer_move","point":{"x":-50.0,"y":140.0}}
        {"type":"pointer_up"}
        "#,
    );
    assert_eq!(core.position(), Point::new(0.0, 90.0));
    for actions in steps {
        for action in actions {
            if let Action::PositionChanged { position } = action {
                assert_eq!(position.x, 0.0);
            }
        }
    }
}

#[test]
fn branch_discard_through_events() {
    let mut core = session();
    replay(
        &mut core,
        r#"
        {"type":"edit_text","text":"B"}
        {"type":"edit_text","text":"C"}
        {"type":"undo"}
        {"type":"edit_text","text":"D"}
        {"type":"redo"}
        "#,
    );
    let texts: Vec<&str> = core.history().entries().iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, ["A", "B", "D"]);
    assert_eq!(core.snapshot().text, "D");
}

#[test]
fn style_controls_and_undo() {
    let mut core = session();
    let steps = replay(
        &mut core,
        r#"
        {"type":"control","name":"fontFamily","value":"Courier New"}
        {"type":"style","change":{"control":"fontSize","value":42}}
        {"type":"undo"}
        "#,
    );
    assert_eq!(core.snapshot().style.font_family, FontFamily::CourierNew);
    assert_eq!(core.snapshot().style.font_size, 20);
    assert!(core.can_redo());
    assert!(steps[2].contains(&Action::HistoryChanged { can_undo: true, can_redo: true }));
}

#[test]
fn boundary_undo_redo_emit_nothing() {
    let mut core = session();
    let steps = replay(
        &mut core,
        r#"
        {"type":"undo"}
        {"type":"redo"}
        "#,
    );
    assert!(steps.iter().all(Vec::is_empty));
    assert_eq!(core.snapshot().text, "A");
}
