use super::{index_nodes, DocumentLoader};
use crate::normalize::{Normalizer, YamlNormalizer};
use serde_json::json;
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};
use wfp_core::{PreProcessIssue, Reference};

fn write_temp_file(prefix: &str, content: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time must be monotonic")
        .as_nanos();
    path.push(format!(
        "wfp-loader-{prefix}-{}-{nanos}.tmp",
        std::process::id()
    ));
    fs::write(&path, content).expect("must write temp file");
    path
}

struct CountingNormalizer {
    calls: Rc<Cell<usize>>,
}

impl Normalizer for CountingNormalizer {
    fn normalize(&self, file: &Path) -> Result<String, Vec<PreProcessIssue>> {
        self.calls.set(self.calls.get() + 1);
        YamlNormalizer.normalize(file)
    }
}

struct StaticNormalizer {
    text: &'static str,
}

impl Normalizer for StaticNormalizer {
    fn normalize(&self, _file: &Path) -> Result<String, Vec<PreProcessIssue>> {
        Ok(self.text.to_string())
    }
}

#[test]
fn load_parses_normalized_text() {
    let path = write_temp_file("parse", "{\"class\": \"CommandLineTool\"}");
    let loader = DocumentLoader::new(YamlNormalizer);
    let value = loader.load(path.as_path()).expect("must load");
    assert_eq!(value, json!({"class": "CommandLineTool"}));
}

#[test]
fn load_memoizes_by_file_path() {
    let path = write_temp_file("memo", "{\"class\": \"CommandLineTool\"}");
    let calls = Rc::new(Cell::new(0));
    let loader = DocumentLoader::new(CountingNormalizer {
        calls: Rc::clone(&calls),
    });

    loader.load(path.as_path()).expect("first load");
    loader.load(path.as_path()).expect("second load");

    assert_eq!(calls.get(), 1);
}

#[test]
fn load_rejects_unparseable_canonical_text() {
    let loader = DocumentLoader::new(StaticNormalizer { text: "not json" });
    let issues = loader
        .load(Path::new("/irrelevant"))
        .expect_err("must fail");
    assert_eq!(issues[0].kind, "parse_error");
    assert_eq!(issues[0].reference.as_deref(), Some("loader.json_parse_error"));
}

#[test]
fn index_recurses_through_arrays() {
    let document = json!([
        {"id": "file:///a#wf1", "class": "Workflow"},
        [{"id": "file:///a#wf2", "class": "CommandLineTool"}],
    ]);
    let nodes = index_nodes(&document);
    assert_eq!(nodes.len(), 2);
    let wf2 = Reference::new("/a", Some("wf2".to_string()));
    assert_eq!(nodes[&wf2]["class"], json!("CommandLineTool"));
}

#[test]
fn objects_without_resolvable_id_are_skipped() {
    let document = json!([
        {"class": "Workflow"},
        {"id": 42},
        {"id": "not-a-file-uri"},
        {"id": "file:///a#wf1"},
    ]);
    let nodes = index_nodes(&document);
    assert_eq!(nodes.len(), 1);
    assert!(nodes.contains_key(&Reference::new("/a", Some("wf1".to_string()))));
}

#[test]
fn bare_object_file_indexes_as_single_node() {
    let document = json!({"id": "file:///b", "class": "CommandLineTool"});
    let nodes = index_nodes(&document);
    assert_eq!(nodes.len(), 1);
    assert!(nodes.contains_key(&Reference::new("/b", None)));
}
