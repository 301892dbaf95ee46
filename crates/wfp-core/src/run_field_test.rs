use super::{collect_run_strings, map_run_strings};
use serde_json::{json, Value};

#[test]
fn collects_run_strings_across_arrays_and_objects() {
    let document = json!({
        "id": "file:///a#main",
        "steps": [
            {"id": "s1", "run": "file:///a#wf2"},
            {"id": "s2", "run": "file:///b"},
        ],
        "nested": {"steps": [{"run": "file:///c#tool"}]},
    });
    assert_eq!(
        collect_run_strings(&document),
        vec!["file:///a#wf2", "file:///b", "file:///c#tool"]
    );
}

#[test]
fn preserves_discovery_order_with_duplicates() {
    let document = json!({
        "steps": [
            {"run": "file:///b"},
            {"run": "file:///a#wf2"},
            {"run": "file:///b"},
        ]
    });
    assert_eq!(
        collect_run_strings(&document),
        vec!["file:///b", "file:///a#wf2", "file:///b"]
    );
}

#[test]
fn non_string_run_values_are_not_collected() {
    let document = json!({
        "steps": [{"run": {"class": "CommandLineTool", "id": "inline"}}]
    });
    assert!(collect_run_strings(&document).is_empty());
}

#[test]
fn map_replaces_only_mapped_run_strings() {
    let document = json!({
        "steps": [
            {"run": "file:///a#wf2"},
            {"run": "not a reference"},
        ]
    });
    let mapped = map_run_strings(&document, &|raw| {
        (raw == "file:///a#wf2").then(|| json!({"class": "CommandLineTool"}))
    });
    assert_eq!(
        mapped,
        json!({
            "steps": [
                {"run": {"class": "CommandLineTool"}},
                {"run": "not a reference"},
            ]
        })
    );
}

#[test]
fn map_recurses_into_run_objects() {
    let document = json!({
        "steps": [{"run": {"steps": [{"run": "file:///inner"}]}}]
    });
    let mapped = map_run_strings(&document, &|_| Some(json!("seen")));
    assert_eq!(
        mapped,
        json!({"steps": [{"run": {"steps": [{"run": "seen"}]}}]})
    );
}

#[test]
fn identity_mapping_rebuilds_equal_tree() {
    let document = json!({
        "id": "file:///a#main",
        "steps": [{"run": {"class": "CommandLineTool"}}],
        "outputs": [],
        "scalar": 42,
        "flag": null,
    });
    let mapped: Value = map_run_strings(&document, &|_| None);
    assert_eq!(mapped, document);
}
