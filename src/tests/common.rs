use crate::github::GitHubContext;
use std::fs;
use tempfile::TempDir;

/// A github context document as a workflow would interpolate it, trimmed to
/// the fields the generator reads plus a few it ignores.
pub fn sample_github_context_json() -> &'static str {
    r#"{
        "repository": "org/repo",
        "repository_owner": "org",
        "sha": "c27d339ee6075c1f744c5d4b200f7901aad2c369",
        "workflow": "release",
        "run_id": "1029384756",
        "run_number": "4",
        "actor": "octocat",
        "event_name": "workflow_dispatch",
        "event": {
            "inputs": {"env": "prod", "tag": "v1.2.3"},
            "ref": "refs/heads/main"
        }
    }"#
}

pub fn sample_runner_context_json() -> &'static str {
    r#"{"os": "Linux", "arch": "X64", "name": "Hosted Agent", "temp": "/tmp", "tool_cache": "/opt/hostedtoolcache"}"#
}

pub fn sample_github_context() -> GitHubContext {
    GitHubContext::from_json(sample_github_context_json()).unwrap()
}

/// Lay out a small artifact tree: `artifact.bin` and `sub/nested.txt`.
pub fn sample_artifact_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("artifact.bin"), b"compiled artifact").unwrap();
    fs::create_dir(temp_dir.path().join("sub")).unwrap();
    fs::write(temp_dir.path().join("sub").join("nested.txt"), b"checksums").unwrap();
    temp_dir
}
