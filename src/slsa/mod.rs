//! # SLSA (Supply-chain Levels for Software Artifacts) Provenance
//!
//! Types and constants for SLSA v0.1 build provenance attestations produced
//! from a GitHub Actions workflow run. The statement shape follows the
//! in-toto Statement v0.1 layout with the SLSA v0.1 provenance predicate:
//! builder identity, recipe, build metadata, and materials.
//!
//! At SLSA L1 the plain Statement is sufficient output; wrapping it in a
//! signed envelope is deliberately left to higher trust levels.
//!
//! ## Examples
//!
//! ```
//! use slsa_provenance::github::{GitHubContext, RunnerEnvironment};
//! use slsa_provenance::slsa::generators::generate_provenance_statement;
//! use std::collections::BTreeMap;
//!
//! let gh = GitHubContext {
//!     repository: "org/repo".to_string(),
//!     sha: "abc123".to_string(),
//!     workflow: "release".to_string(),
//!     run_id: "12345".to_string(),
//!     ..Default::default()
//! };
//!
//! let statement = generate_provenance_statement(
//!     Vec::new(),
//!     &gh,
//!     BTreeMap::new(),
//!     RunnerEnvironment::GitHubHosted,
//! );
//! assert_eq!(statement.predicate_type, "https://slsa.dev/provenance/v0.1");
//! ```

use crate::intoto::{DigestSet, Subject};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod generators;

/// The SLSA v0.1 build provenance in-toto predicate type URI.
pub const PROVENANCE_PREDICATE_TYPE_V01: &str = "https://slsa.dev/provenance/v0.1";

/// Recipe type identifying the GitHub Actions workflow builder schema.
pub const GITHUB_ACTIONS_WORKFLOW_TYPE: &str =
    "https://github.com/Attestations/GitHubActionsWorkflow@v1";

/// Builder identity suffix for builds on GitHub's managed runner fleet.
pub const GITHUB_HOSTED_ID_SUFFIX: &str = "/Attestations/GitHubHostedActions@v1";

/// Builder identity suffix for builds on self-hosted runners.
pub const SELF_HOSTED_ID_SUFFIX: &str = "/Attestations/SelfHostedActions@v1";

/// The complete provenance statement: in-toto Statement v0.1 carrying the
/// SLSA v0.1 predicate.
///
/// Constructed once per invocation and serialized; never mutated after
/// emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceStatement {
    #[serde(rename = "_type")]
    pub statement_type: String,
    #[serde(rename = "predicateType")]
    pub predicate_type: String,
    pub subject: Vec<Subject>,
    pub predicate: Predicate,
}

/// The SLSA-specific payload describing how the subjects were built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub builder: Builder,
    pub recipe: Recipe,
    pub metadata: Metadata,
    pub materials: Vec<Material>,
}

/// URI identifying the execution environment that produced the attestation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Builder {
    pub id: String,
}

/// The build instructions captured in the predicate: entry point, arguments,
/// and the material the recipe is defined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "type")]
    pub recipe_type: String,
    #[serde(rename = "definedInMaterial")]
    pub defined_in_material: usize,
    #[serde(rename = "entryPoint")]
    pub entry_point: String,
    pub arguments: BTreeMap<String, String>,
}

/// Build-run metadata; currently just the invocation identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "buildInvocationId")]
    pub build_invocation_id: String,
}

/// An input consumed by the build, referenced by URI and digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub uri: String,
    pub digest: DigestSet,
}
