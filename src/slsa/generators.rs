//! Assembly of the SLSA v0.1 provenance statement from collected subjects
//! and the GitHub Actions build context.
//!
//! Every function here is a pure data transformation: the one ambient input,
//! the hosted/self-hosted runner classification, arrives as an explicit
//! [`RunnerEnvironment`] parameter so identical inputs always produce an
//! identical statement. Malformed context fields are not validated; they
//! propagate into the output as-is.

use crate::github::{GitHubContext, RunnerEnvironment};
use crate::intoto::{STATEMENT_TYPE_V01, Subject};
use crate::slsa::{
    Builder, GITHUB_ACTIONS_WORKFLOW_TYPE, GITHUB_HOSTED_ID_SUFFIX, Material, Metadata, Predicate,
    PROVENANCE_PREDICATE_TYPE_V01, ProvenanceStatement, Recipe, SELF_HOSTED_ID_SUFFIX,
};
use std::collections::BTreeMap;

/// Derive the builder identity URI from the repository URI and the runner
/// classification.
///
/// ```
/// use slsa_provenance::github::RunnerEnvironment;
/// use slsa_provenance::slsa::generators::make_builder_id;
///
/// let builder = make_builder_id("https://github.com/org/repo", RunnerEnvironment::GitHubHosted);
/// assert!(builder.id.ends_with("/Attestations/GitHubHostedActions@v1"));
/// ```
pub fn make_builder_id(repo_uri: &str, runner_env: RunnerEnvironment) -> Builder {
    let suffix = match runner_env {
        RunnerEnvironment::GitHubHosted => GITHUB_HOSTED_ID_SUFFIX,
        RunnerEnvironment::SelfHosted => SELF_HOSTED_ID_SUFFIX,
    };

    Builder {
        id: format!("{repo_uri}{suffix}"),
    }
}

/// Build the recipe for a workflow-based build.
///
/// The entry point is the workflow's declared name. Multiple workflows in a
/// repository can share a display name, so the entry point is not a unique
/// reference; that imprecision comes from the upstream context data and is
/// carried as-is. Arguments are the trigger event's `inputs` mapping,
/// verbatim, and `definedInMaterial` points at the sole source material.
pub fn make_recipe(workflow: &str, arguments: BTreeMap<String, String>) -> Recipe {
    Recipe {
        recipe_type: GITHUB_ACTIONS_WORKFLOW_TYPE.to_string(),
        defined_in_material: 0,
        entry_point: workflow.to_string(),
        arguments,
    }
}

/// Build the single source-repository material: the repository at the
/// triggering commit.
pub fn make_material(repo_uri: &str, sha: &str) -> Material {
    Material {
        uri: format!("git+{repo_uri}"),
        digest: BTreeMap::from([("sha1".to_string(), sha.to_string())]),
    }
}

/// Build the run metadata.
///
/// Workflow re-runs reuse the same run ID, so the invocation identifier is
/// not globally unique across re-runs.
pub fn make_metadata(repo_uri: &str, run_id: &str) -> Metadata {
    Metadata {
        build_invocation_id: format!("{repo_uri}/actions/runs/{run_id}"),
    }
}

/// Assemble the complete provenance statement.
///
/// Subjects are carried verbatim, including an empty list. The statement is
/// the invocation's single output; callers serialize it once and never
/// mutate it afterwards.
pub fn generate_provenance_statement(
    subjects: Vec<Subject>,
    gh: &GitHubContext,
    arguments: BTreeMap<String, String>,
    runner_env: RunnerEnvironment,
) -> ProvenanceStatement {
    let repo_uri = gh.repository_uri();

    ProvenanceStatement {
        statement_type: STATEMENT_TYPE_V01.to_string(),
        predicate_type: PROVENANCE_PREDICATE_TYPE_V01.to_string(),
        subject: subjects,
        predicate: Predicate {
            builder: make_builder_id(&repo_uri, runner_env),
            recipe: make_recipe(&gh.workflow, arguments),
            metadata: make_metadata(&repo_uri, &gh.run_id),
            materials: vec![make_material(&repo_uri, &gh.sha)],
        },
    }
}
