use crate::cli::FlattenCommand;
use wfp_core::PreProcessIssue;
use wfp_preprocess::PreProcessor;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("flatten failed: {0}")]
    Flatten(String),
}

pub fn execute_flatten(command: &FlattenCommand) -> Result<String, RunnerError> {
    PreProcessor::default()
        .pre_process(command.file.as_path(), command.pointer.as_deref())
        .map_err(|issues| RunnerError::Flatten(render_issues(issues.as_slice())))
}

fn render_issues(issues: &[PreProcessIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.kind, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
