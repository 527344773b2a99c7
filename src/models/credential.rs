//! Credential record model
//!
//! The account stores the credential opaquely; hashing and verification
//! live in the [`crate::crypto`] collaborator.

use serde::{Deserialize, Serialize};

/// A salted password hash, produced outside the ledger core
///
/// `hash` is the PHC-encoded Argon2id string, which embeds the salt; the
/// standalone `salt` field keeps the salt addressable on its own as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub hash: String,
    pub salt: String,
}

impl CredentialRecord {
    /// Create a credential record from its encoded parts
    pub fn new(hash: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            salt: salt.into(),
        }
    }
}
