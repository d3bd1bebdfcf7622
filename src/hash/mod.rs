//! # Hash Module
//!
//! Cryptographic content hashing for artifact subjects. SHA-256 is the
//! algorithm the SLSA v0.1 subject schema records digests under, and is the
//! default here; SHA-384 and SHA-512 are recognized options so a future
//! schema version can switch without touching the collection logic.
//!
//! ## Examples
//!
//! ### Basic hashing with the default algorithm (SHA-256)
//! ```
//! use slsa_provenance::hash::calculate_hash;
//!
//! let hash = calculate_hash(b"Hello, World!");
//! assert_eq!(hash.len(), 64); // SHA-256 produces 64 hex characters
//! ```
//!
//! ### File hashing
//! ```no_run
//! use slsa_provenance::hash::calculate_file_hash;
//! use std::path::Path;
//!
//! let hash = calculate_file_hash(Path::new("target/release/myapp")).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```

use crate::error::Result;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Content hash algorithms recognized by the generator.
///
/// The subject digest schema is keyed by algorithm name, so the enum carries
/// its own wire name via [`HashAlgorithm::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// The lowercase algorithm name used as the digest map key.
    ///
    /// ```
    /// use slsa_provenance::hash::HashAlgorithm;
    ///
    /// assert_eq!(HashAlgorithm::Sha256.as_str(), "sha256");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

/// Calculate the SHA-256 hash of the given data.
///
/// For other algorithms, use [`calculate_hash_with_algorithm`].
///
/// # Examples
///
/// ```
/// use slsa_provenance::hash::calculate_hash;
///
/// let hash = calculate_hash(b"data");
/// assert_eq!(hash, calculate_hash(b"data"));
/// assert_ne!(hash, calculate_hash(b"other data"));
/// ```
pub fn calculate_hash(data: &[u8]) -> String {
    calculate_hash_with_algorithm(data, &HashAlgorithm::Sha256)
}

/// Calculate the hash of data using the specified algorithm, returned as a
/// lowercase hexadecimal string.
pub fn calculate_hash_with_algorithm(data: &[u8], algorithm: &HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
        HashAlgorithm::Sha384 => hex::encode(Sha384::digest(data)),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(data)),
    }
}

/// Calculate the SHA-256 hash of a file.
///
/// For other algorithms, use [`calculate_file_hash_with_algorithm`].
pub fn calculate_file_hash(path: impl AsRef<Path>) -> Result<String> {
    calculate_file_hash_with_algorithm(path, &HashAlgorithm::Sha256)
}

/// Calculate the hash of a file using the specified algorithm.
///
/// Files are read in chunks, so arbitrarily large artifacts hash without
/// being loaded into memory whole.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be opened or read.
pub fn calculate_file_hash_with_algorithm(
    path: impl AsRef<Path>,
    algorithm: &HashAlgorithm,
) -> Result<String> {
    let file = File::open(path.as_ref())?;

    match algorithm {
        HashAlgorithm::Sha384 => hash_reader::<Sha384, _>(file),
        HashAlgorithm::Sha512 => hash_reader::<Sha512, _>(file),
        _ => hash_reader::<Sha256, _>(file),
    }
}

fn hash_reader<D: Digest, R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = D::new();
    let mut buffer = [0u8; 8192];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_calculate_hash_known_vectors() {
        // SHA-256 of the empty string
        assert_eq!(
            calculate_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        // SHA-256 of "abc"
        assert_eq!(
            calculate_hash(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_calculate_hash_is_lowercase_hex() {
        let hash = calculate_hash(b"artifact bytes");
        assert_eq!(hash.len(), 64);
        assert!(
            hash.chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_algorithm_lengths() {
        let data = b"some data";
        assert_eq!(
            calculate_hash_with_algorithm(data, &HashAlgorithm::Sha256).len(),
            64
        );
        assert_eq!(
            calculate_hash_with_algorithm(data, &HashAlgorithm::Sha384).len(),
            96
        );
        assert_eq!(
            calculate_hash_with_algorithm(data, &HashAlgorithm::Sha512).len(),
            128
        );
    }

    #[test]
    fn test_file_hash_matches_data_hash() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("artifact.bin");
        let content = b"binary artifact content";
        fs::write(&file_path, content).unwrap();

        let file_hash = calculate_file_hash(&file_path).unwrap();
        assert_eq!(file_hash, calculate_hash(content));
    }

    #[test]
    fn test_file_hash_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = calculate_file_hash(temp_dir.path().join("nope.bin"));
        assert!(result.is_err());
    }

    #[test]
    fn test_algorithm_as_str() {
        assert_eq!(HashAlgorithm::Sha256.as_str(), "sha256");
        assert_eq!(HashAlgorithm::Sha384.as_str(), "sha384");
        assert_eq!(HashAlgorithm::Sha512.as_str(), "sha512");
    }
}
