use serde_json::Value;
use std::fs;
use std::path::Path;
use wfp_core::PreProcessIssue;

pub trait Normalizer {
    fn normalize(&self, file: &Path) -> Result<String, Vec<PreProcessIssue>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlNormalizer;

impl Normalizer for YamlNormalizer {
    fn normalize(&self, file: &Path) -> Result<String, Vec<PreProcessIssue>> {
        let text = fs::read_to_string(file).map_err(|error| {
            vec![
                PreProcessIssue::error("io_error", format!("read file failed: {error}"))
                    .with_file(file.display().to_string())
                    .with_reference("normalize.read_file_failed"),
            ]
        })?;

        let value = if looks_like_json(&text) {
            parse_json(&text, file)?
        } else {
            parse_yaml(&text, file)?
        };

        serde_json::to_string(&value).map_err(|error| {
            vec![
                PreProcessIssue::error("parse_error", format!("json encode failed: {error}"))
                    .with_file(file.display().to_string())
                    .with_reference("normalize.json_encode_failed"),
            ]
        })
    }
}

fn looks_like_json(input: &str) -> bool {
    let trimmed = input.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

fn parse_json(input: &str, file: &Path) -> Result<Value, Vec<PreProcessIssue>> {
    serde_json::from_str::<Value>(input).map_err(|error| {
        vec![
            PreProcessIssue::error("parse_error", format!("json parse failed: {error}"))
                .with_file(file.display().to_string())
                .with_reference("normalize.json_parse_error"),
        ]
    })
}

fn parse_yaml(input: &str, file: &Path) -> Result<Value, Vec<PreProcessIssue>> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_str(input).map_err(|error| {
        vec![
            PreProcessIssue::error("parse_error", format!("yaml parse failed: {error}"))
                .with_file(file.display().to_string())
                .with_reference("normalize.yaml_parse_error"),
        ]
    })?;

    serde_json::to_value(yaml_value).map_err(|error| {
        vec![
            PreProcessIssue::error(
                "parse_error",
                format!("yaml-to-json conversion failed: {error}"),
            )
            .with_file(file.display().to_string())
            .with_reference("normalize.yaml_to_json_error"),
        ]
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
