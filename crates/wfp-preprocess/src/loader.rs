use crate::normalize::Normalizer;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use wfp_core::{parse_reference, PreProcessIssue, Reference};

pub type NodeMap = BTreeMap<Reference, Value>;

pub struct DocumentLoader<N> {
    normalizer: N,
    loaded: RefCell<BTreeMap<PathBuf, Value>>,
}

impl<N: Normalizer> DocumentLoader<N> {
    pub fn new(normalizer: N) -> Self {
        Self {
            normalizer,
            loaded: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn load(&self, file: &Path) -> Result<Value, Vec<PreProcessIssue>> {
        if let Some(value) = self.loaded.borrow().get(file) {
            return Ok(value.clone());
        }

        let text = self.normalizer.normalize(file)?;
        let value = serde_json::from_str::<Value>(text.as_str()).map_err(|error| {
            vec![
                PreProcessIssue::error("parse_error", format!("json parse failed: {error}"))
                    .with_file(file.display().to_string())
                    .with_reference("loader.json_parse_error"),
            ]
        })?;

        self.loaded
            .borrow_mut()
            .insert(file.to_path_buf(), value.clone());
        Ok(value)
    }
}

pub fn index_nodes(value: &Value) -> NodeMap {
    let mut nodes = NodeMap::new();
    index_into(value, &mut nodes);
    nodes
}

fn index_into(value: &Value, nodes: &mut NodeMap) {
    match value {
        Value::Array(items) => {
            for item in items {
                index_into(item, nodes);
            }
        }
        Value::Object(object) => {
            // Objects without a resolvable id are not independently addressable.
            if let Some(id) = object.get("id").and_then(Value::as_str) {
                if let Some(reference) = parse_reference(id) {
                    nodes.insert(reference, value.clone());
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
