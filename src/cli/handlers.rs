use crate::error::{Error, Result};

use super::commands::GenerateArgs;
use crate::github::{Event, GitHubContext, RunnerContext, RunnerEnvironment};
use crate::intoto::collect_subjects;
use crate::slsa::generators::generate_provenance_statement;

use log::debug;
use std::fs;
use std::path::PathBuf;

/// Handle the `generate` command end to end: validate flags, collect
/// subjects, parse the context documents, assemble the statement, and write
/// it to the output path.
///
/// The single ambient read (the hosted/self-hosted runner flag) happens here,
/// once; everything downstream is pure.
pub fn handle_generate_command(args: GenerateArgs) -> Result<()> {
    let artifact_path = required_path(args.artifact_path, "artifact-path")?;
    let output_path = args.output_path;
    if output_path.as_os_str().is_empty() {
        return Err(Error::MissingInput("output-path".to_string()));
    }
    let github_context = required_value(args.github_context, "github-context")?;
    let runner_context = required_value(args.runner_context, "runner-context")?;

    let subjects = collect_subjects(&artifact_path)?;
    debug!("collected {} subject(s) from {}", subjects.len(), artifact_path.display());

    let gh = GitHubContext::from_json(&github_context)?;
    // Parsed for well-formedness only; no runner field flows into the statement.
    let _runner = RunnerContext::from_json(&runner_context)?;
    let event = Event::from_value(&gh.event)?;

    let runner_env = RunnerEnvironment::from_env();
    let statement = generate_provenance_statement(subjects, &gh, event.inputs, runner_env);

    let payload = serde_json::to_string_pretty(&statement)
        .map_err(|e| Error::Serialization(e.to_string()))?;

    println!("Saving provenance to {}:\n\n{payload}", output_path.display());
    fs::write(&output_path, &payload)?;

    Ok(())
}

fn required_value(value: Option<String>, flag: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingInput(flag.to_string())),
    }
}

fn required_path(value: Option<PathBuf>, flag: &str) -> Result<PathBuf> {
    match value {
        Some(p) if !p.as_os_str().is_empty() => Ok(p),
        _ => Err(Error::MissingInput(flag.to_string())),
    }
}
