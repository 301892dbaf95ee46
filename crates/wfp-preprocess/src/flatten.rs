use crate::loader::{index_nodes, DocumentLoader, NodeMap};
use crate::normalize::Normalizer;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use wfp_core::{collect_run_strings, map_run_strings, parse_reference, PreProcessIssue, Reference};

pub type ProcessedCache = BTreeMap<Reference, Value>;
pub type BreadCrumbs = BTreeSet<Reference>;

pub fn flatten_node<N: Normalizer>(
    loader: &DocumentLoader<N>,
    node: &Value,
    siblings: &NodeMap,
    cache: &ProcessedCache,
    breadcrumbs: &BreadCrumbs,
) -> Result<(Value, ProcessedCache), Vec<PreProcessIssue>> {
    let discovered = discover_references(node);

    let mut accumulator = cache.clone();
    for reference in &discovered {
        if accumulator.contains_key(reference) {
            continue;
        }
        let (flattened, returned) = match siblings.get(reference) {
            Some(raw) => {
                // Removing the reference from its own sibling set is what cuts
                // same-file cycles: a node that reaches itself again falls
                // through to the cross-file branch below.
                let mut reduced = siblings.clone();
                reduced.remove(reference);
                flatten_node(loader, raw, &reduced, &accumulator, breadcrumbs)?
            }
            None => flatten_reference(loader, reference, &accumulator, breadcrumbs)?,
        };
        accumulator = returned;
        accumulator.insert(reference.clone(), flattened);
    }

    let substituted = map_run_strings(node, &|raw| {
        parse_reference(raw).and_then(|reference| accumulator.get(&reference).cloned())
    });

    if let Some(own) = node_reference(node) {
        accumulator.insert(own, substituted.clone());
    }

    Ok((substituted, accumulator))
}

fn flatten_reference<N: Normalizer>(
    loader: &DocumentLoader<N>,
    reference: &Reference,
    cache: &ProcessedCache,
    breadcrumbs: &BreadCrumbs,
) -> Result<(Value, ProcessedCache), Vec<PreProcessIssue>> {
    if breadcrumbs.contains(reference) {
        return Err(vec![
            PreProcessIssue::error(
                "circular_dependency",
                format!("found a circular dependency on `{reference}`"),
            )
            .with_file(reference.file.clone())
            .with_reference("flatten.circular_dependency"),
        ]);
    }

    let parsed = loader.load(Path::new(reference.file.as_str()))?;
    let nodes = index_nodes(&parsed);
    let (matched_key, target) = lookup_node(&nodes, &parsed, reference)?;

    let mut siblings = nodes;
    if let Some(key) = &matched_key {
        siblings.remove(key);
    }

    let mut crumbs = breadcrumbs.clone();
    crumbs.insert(reference.clone());

    flatten_node(loader, &target, &siblings, cache, &crumbs)
}

// Nodes are addressed by their pointer within the file they were loaded
// from; a file holding a single unpointed object is addressable as a whole
// even when indexing skipped it.
pub(crate) fn lookup_node(
    nodes: &NodeMap,
    parsed: &Value,
    reference: &Reference,
) -> Result<(Option<Reference>, Value), Vec<PreProcessIssue>> {
    let found = nodes
        .iter()
        .find(|(candidate, _)| candidate.pointer == reference.pointer)
        .map(|(key, node)| (key.clone(), node.clone()));

    match found {
        Some((key, node)) => Ok((Some(key), node)),
        None if reference.pointer.is_none() && parsed.is_object() => Ok((None, parsed.clone())),
        None => Err(vec![
            PreProcessIssue::error(
                "reference_not_found_in_file",
                format!(
                    "cannot find a node with reference `{reference}` in file `{}`",
                    reference.file
                ),
            )
            .with_file(reference.file.clone())
            .with_reference("flatten.reference_not_found_in_file"),
        ]),
    }
}

fn discover_references(node: &Value) -> Vec<Reference> {
    let mut seen = BTreeSet::new();
    let mut ordered = Vec::new();
    for raw in collect_run_strings(node) {
        if let Some(reference) = parse_reference(raw.as_str()) {
            if seen.insert(reference.clone()) {
                ordered.push(reference);
            }
        }
    }
    ordered
}

fn node_reference(node: &Value) -> Option<Reference> {
    node.get("id").and_then(Value::as_str).and_then(parse_reference)
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod tests;
