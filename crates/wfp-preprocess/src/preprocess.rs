use crate::flatten::{flatten_node, lookup_node, BreadCrumbs, ProcessedCache};
use crate::loader::{index_nodes, DocumentLoader};
use crate::normalize::{Normalizer, YamlNormalizer};
use std::fs;
use std::path::Path;
use wfp_core::{PreProcessIssue, Reference};

pub struct PreProcessor<N> {
    loader: DocumentLoader<N>,
}

impl Default for PreProcessor<YamlNormalizer> {
    fn default() -> Self {
        Self::new(YamlNormalizer)
    }
}

impl<N: Normalizer> PreProcessor<N> {
    pub fn new(normalizer: N) -> Self {
        Self {
            loader: DocumentLoader::new(normalizer),
        }
    }

    pub fn pre_process(
        &self,
        file: &Path,
        pointer: Option<&str>,
    ) -> Result<String, Vec<PreProcessIssue>> {
        let canonical = fs::canonicalize(file).unwrap_or_else(|_| file.to_path_buf());
        let root = Reference::new(
            canonical.display().to_string(),
            pointer.map(str::to_string),
        );

        let parsed = self.loader.load(canonical.as_path())?;
        let nodes = index_nodes(&parsed);
        let (matched_key, target) = lookup_node(&nodes, &parsed, &root)?;

        let mut siblings = nodes;
        if let Some(key) = &matched_key {
            siblings.remove(key);
        }

        let (flattened, _cache) = flatten_node(
            &self.loader,
            &target,
            &siblings,
            &ProcessedCache::new(),
            &BreadCrumbs::new(),
        )?;

        serde_json::to_string(&flattened).map_err(|error| {
            vec![
                PreProcessIssue::error("parse_error", format!("json encode failed: {error}"))
                    .with_file(root.file.clone())
                    .with_reference("preprocess.json_encode_failed"),
            ]
        })
    }
}

#[cfg(test)]
#[path = "preprocess_test.rs"]
mod tests;
