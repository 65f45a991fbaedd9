//! Hex digest functions for the hash tool

use serde::Serialize;
use sha2::{Digest, Sha256, Sha512};

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

/// Hex digest of `input` under the given algorithm.
pub fn hash_hex(input: &str, algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Md5 => format!("{:x}", md5::compute(input.as_bytes())),
        HashAlgorithm::Sha256 => format!("{:x}", Sha256::digest(input.as_bytes())),
        HashAlgorithm::Sha512 => format!("{:x}", Sha512::digest(input.as_bytes())),
    }
}
