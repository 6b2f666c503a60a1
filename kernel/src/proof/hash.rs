//! Board fingerprints: domain-separated SHA-256 digests.
//!
//! A fingerprint is only ever used as a set key. With 256 bits of digest and
//! at most `16!`-scale state spaces in practice, collisions are not a concern.

use sha2::{Digest, Sha256};

use super::hash_domain::HashDomain;

/// A 32-byte SHA-256 digest of `domain || payload`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering of the digest.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// `"sha256:<hex>"`, the form written into reports.
    #[must_use]
    pub fn to_prefixed(&self) -> String {
        format!("sha256:{}", self.to_hex())
    }
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Eight bytes are plenty to tell fingerprints apart in test output.
        write!(f, "Fingerprint({}..)", hex::encode(&self.0[..8]))
    }
}

/// Compute the canonical hash of a byte slice with domain separation.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    Fingerprint(hasher.finalize().into())
}
