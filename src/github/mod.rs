//! # GitHub Actions Context
//!
//! Types for the `${{ github }}` and `${{ runner }}` context documents that a
//! workflow passes to the CLI, plus the hosted/self-hosted runner
//! classification used to derive the builder identity.
//!
//! The context documents are produced upstream by GitHub Actions and are
//! treated as already-validated input: every field defaults when absent, and
//! missing values flow through into the statement unchanged rather than being
//! rejected here.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The subset of the `${{ github }}` context the generator reads.
///
/// The real context carries dozens of fields; unknown ones are ignored on
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubContext {
    /// Owner/name slug of the repository, e.g. `"philips-labs/hello"`.
    #[serde(default)]
    pub repository: String,
    /// Commit SHA the workflow ran against.
    #[serde(default)]
    pub sha: String,
    /// Declared workflow name. Not unique within a repository: multiple
    /// workflows can share a display name, an accepted imprecision of the
    /// upstream context data.
    #[serde(default)]
    pub workflow: String,
    /// Numeric run identifier, as a string.
    #[serde(default)]
    pub run_id: String,
    /// Raw trigger event payload; parsed separately via [`Event::from_value`].
    #[serde(default)]
    pub event: serde_json::Value,
}

impl GitHubContext {
    /// Parse the context from its JSON document.
    pub fn from_json(document: &str) -> Result<Self> {
        serde_json::from_str(document).map_err(|e| Error::MalformedContext("github context", e))
    }

    /// The HTTPS URI of the repository, the base for builder identity,
    /// materials, and the build invocation id.
    ///
    /// ```
    /// use slsa_provenance::github::GitHubContext;
    ///
    /// let gh = GitHubContext {
    ///     repository: "org/repo".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(gh.repository_uri(), "https://github.com/org/repo");
    /// ```
    pub fn repository_uri(&self) -> String {
        format!("https://github.com/{}", self.repository)
    }
}

/// The workflow trigger event payload, reduced to its `inputs` mapping.
///
/// `workflow_dispatch` runs carry the user-supplied inputs here; other
/// trigger types have no `inputs` key and yield an empty map. A
/// `workflow_dispatch` run with no declared inputs carries an explicit
/// `"inputs": null`, which also yields an empty map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_empty_inputs")]
    pub inputs: BTreeMap<String, String>,
}

fn null_as_empty_inputs<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let inputs = Option::<BTreeMap<String, String>>::deserialize(deserializer)?;
    Ok(inputs.unwrap_or_default())
}

impl Event {
    /// Parse the event out of the raw value carried by [`GitHubContext`].
    ///
    /// A null or absent event is an empty event, not an error.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Event::default());
        }
        serde_json::from_value(value.clone())
            .map_err(|e| Error::MalformedContext("github event payload", e))
    }
}

/// The subset of the `${{ runner }}` context the CLI accepts.
///
/// No field of it currently flows into the statement; the document is parsed
/// so a malformed one is reported rather than silently accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunnerContext {
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub temp: String,
    #[serde(default)]
    pub tool_cache: String,
}

impl RunnerContext {
    /// Parse the context from its JSON document.
    pub fn from_json(document: &str) -> Result<Self> {
        serde_json::from_str(document).map_err(|e| Error::MalformedContext("runner context", e))
    }
}

/// Classification of the runner executing the build, which selects the
/// builder identity suffix.
///
/// The classification comes from one ambient environment read; everything
/// downstream takes the enum as an explicit parameter so the statement
/// builder stays a pure function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEnvironment {
    /// Running on GitHub's managed runner fleet.
    GitHubHosted,
    /// Running on a self-hosted runner.
    SelfHosted,
}

impl RunnerEnvironment {
    /// Detect the runner environment from the `GITHUB_ACTIONS` variable.
    ///
    /// GitHub sets it to the literal `"true"` on its hosted runners.
    pub fn from_env() -> Self {
        match std::env::var("GITHUB_ACTIONS").as_deref() {
            Ok("true") => RunnerEnvironment::GitHubHosted,
            _ => RunnerEnvironment::SelfHosted,
        }
    }
}
