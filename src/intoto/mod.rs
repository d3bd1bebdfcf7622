//! # in-toto Statement Subjects
//!
//! Subject collection for in-toto attestation statements: walking an
//! artifact path (file or directory) and binding each regular file's
//! root-relative name to its content digest.
//!
//! ## Examples
//!
//! ```no_run
//! use slsa_provenance::intoto::collect_subjects;
//! use std::path::Path;
//!
//! let subjects = collect_subjects(Path::new("target/release")).unwrap();
//! for subject in &subjects {
//!     println!("{} {:?}", subject.name, subject.digest);
//! }
//! ```

use crate::error::{Error, Result};
use crate::hash::{HashAlgorithm, calculate_file_hash_with_algorithm};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// The in-toto Statement v0.1 type URI.
pub const STATEMENT_TYPE_V01: &str = "https://in-toto.io/Statement/v0.1";

/// Digest mapping keyed by algorithm name, hex value lowercase.
///
/// A BTreeMap keeps key order stable so identical inputs serialize to
/// byte-identical output.
pub type DigestSet = BTreeMap<String, String>;

/// A named artifact and its content digest, the unit being attested to.
///
/// Immutable once created; collection order is filesystem traversal order
/// and is preserved, never sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub digest: DigestSet,
}

/// Build a [`DigestSet`] holding a single algorithm/value pair.
pub fn digest_set(algorithm: &HashAlgorithm, digest: &str) -> DigestSet {
    BTreeMap::from([(algorithm.as_str().to_string(), digest.to_string())])
}

/// Walk `root` and produce one subject per regular file found.
///
/// Directories themselves yield no subjects. Subject names are the paths
/// relative to `root` with components joined by `/` on every host; when
/// `root` is itself a file, the single subject is named by the file's base
/// name. Digests are SHA-256 over the full file contents.
///
/// # Errors
///
/// * [`Error::NotFound`] carrying the provided path when `root` does not
///   exist.
/// * [`Error::Io`] for any other read failure; the whole scan aborts and no
///   partial list is returned.
///
/// An existing empty directory yields an empty list, not an error.
pub fn collect_subjects(root: &Path) -> Result<Vec<Subject>> {
    if !root.exists() {
        return Err(Error::NotFound(root.display().to_string()));
    }

    let mut subjects = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let description = e.to_string();
            match e.into_io_error() {
                Some(io_err) => Error::Io(io_err),
                None => Error::Io(std::io::Error::other(description)),
            }
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let name = subject_name(root, entry.path());
        let file_hash =
            calculate_file_hash_with_algorithm(entry.path(), &HashAlgorithm::Sha256)?;
        debug!("collected subject {name} ({file_hash})");

        subjects.push(Subject {
            name,
            digest: digest_set(&HashAlgorithm::Sha256, &file_hash),
        });
    }

    Ok(subjects)
}

/// Derive the subject name for `path` under `root`.
///
/// Relative components are joined with `/` regardless of the host path
/// separator. When `path` and `root` are the same file the relative path is
/// empty, and the base name of `root` is used instead.
fn subject_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let name = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if name.is_empty() {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::calculate_hash;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_single_file_named_by_base_name() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("artifact.tar.gz");
        fs::write(&file_path, b"release tarball").unwrap();

        let subjects = collect_subjects(&file_path).unwrap();

        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].name, "artifact.tar.gz");
        assert_eq!(
            subjects[0].digest.get("sha256"),
            Some(&calculate_hash(b"release tarball"))
        );
    }

    #[test]
    fn test_directory_yields_relative_names() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), b"aaa").unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("sub").join("b.txt"), b"bbb").unwrap();

        let subjects = collect_subjects(temp_dir.path()).unwrap();

        assert_eq!(subjects.len(), 2);
        let mut names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a.txt", "sub/b.txt"]);
    }

    #[test]
    fn test_directories_produce_no_subjects() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("nested/deeper")).unwrap();
        fs::write(temp_dir.path().join("nested/deeper/only.bin"), b"x").unwrap();

        let subjects = collect_subjects(temp_dir.path()).unwrap();

        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].name, "nested/deeper/only.bin");
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let subjects = collect_subjects(temp_dir.path()).unwrap();
        assert!(subjects.is_empty());
    }

    #[test]
    fn test_missing_path_is_not_found_with_original_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = collect_subjects(&missing).unwrap_err();

        match err {
            Error::NotFound(path) => assert_eq!(path, missing.display().to_string()),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_digest_matches_reference_hash() {
        let temp_dir = TempDir::new().unwrap();
        let content = b"the digest round-trips";
        fs::write(temp_dir.path().join("f.bin"), content).unwrap();

        let subjects = collect_subjects(temp_dir.path()).unwrap();

        assert_eq!(
            subjects[0].digest.get("sha256"),
            Some(&calculate_hash(content))
        );
    }
}
