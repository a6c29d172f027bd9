//! End-to-end editing sessions: host JSON in, event script applied, records
//! out. Mirrors what the `paramedit` binary does.

use paramedit_core::{Dataset, EditableRecord, ParamId, ParamType};
use paramedit_store::{EditorError, EditorEvent, ParamEditor};

const DATASET: &str = r#"{
    "params": [
        {"id": 1, "name": "Purpose", "type": "string"},
        {"id": 2, "name": "Length", "type": "string"},
        {"id": 3, "name": "Color", "type": "select"},
        {"id": 4, "name": "Size", "type": "number"}
    ],
    "model": {
        "paramValues": [
            {"paramId": 4, "value": "44"},
            {"paramId": 1, "value": "casual"},
            {"paramId": 2, "value": "maxi"}
        ]
    }
}"#;

fn open() -> ParamEditor {
    let dataset = Dataset::from_json(DATASET).expect("dataset parses");
    ParamEditor::from_dataset(&dataset)
}

#[test]
fn unmatched_definition_is_not_editable() {
    let editor = open();
    let ids: Vec<ParamId> = editor.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![ParamId(1), ParamId(2), ParamId(4)]);
}

#[test]
fn scripted_session() {
    let mut editor = open();
    let opened = editor.snapshot();

    let events: Vec<EditorEvent> = serde_json::from_str(
        r#"[
            {"op": "edit", "id": 2, "value": "midi"},
            {"op": "add", "name": "Fabric", "type": "string", "value": "linen"},
            {"op": "delete", "id": 1},
            {"op": "delete", "id": 99},
            {"op": "edit", "id": 99, "value": "ghost"}
        ]"#,
    )
    .expect("events parse");

    for event in events {
        editor.apply(event).expect("event applies");
    }

    assert_eq!(
        editor.records(),
        &[
            EditableRecord::new(2, "Length", ParamType::String, "midi"),
            EditableRecord::new(4, "Size", ParamType::Number, "44"),
            EditableRecord::new(5, "Fabric", ParamType::String, "linen"),
        ][..]
    );

    // The snapshot taken at open is unaffected.
    assert_eq!(opened.len(), 3);
    assert_eq!(opened[1].value, "maxi");
}

#[test]
fn rejected_add_leaves_records_unchanged() {
    let mut editor = open();
    let before = editor.snapshot();

    let result = editor.apply(EditorEvent::Add {
        name: "Color".into(),
        ty: ParamType::Select,
        value: "red".into(),
    });

    assert!(matches!(result, Err(EditorError::Draft(_))));
    assert_eq!(editor.records(), &*before);
}

#[test]
fn ids_stay_unique_after_manual_add() {
    let mut editor = open();
    editor.add(EditableRecord::new(10, "Manual", ParamType::String, "x"));
    editor
        .apply(EditorEvent::Add {
            name: "Next".into(),
            ty: ParamType::String,
            value: "y".into(),
        })
        .expect("add applies");

    let last = editor.records().last().expect("has records");
    assert_eq!(last.id, ParamId(11));
}
