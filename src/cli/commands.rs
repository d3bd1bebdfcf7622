use clap::Args;
use std::path::PathBuf;

/// Arguments for the `generate` command.
///
/// The context flags take the JSON documents a workflow interpolates with
/// `${{ toJSON(github) }}` and `${{ toJSON(runner) }}`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// The file or directory path of the artifacts for which provenance should be generated
    #[arg(long = "artifact-path")]
    pub artifact_path: Option<PathBuf>,

    /// The path to which the generated provenance should be written
    #[arg(long = "output-path", default_value = "build.provenance")]
    pub output_path: PathBuf,

    /// The '${{ github }}' context value, as JSON
    #[arg(long = "github-context")]
    pub github_context: Option<String>,

    /// The '${{ runner }}' context value, as JSON
    #[arg(long = "runner-context")]
    pub runner_context: Option<String>,
}
