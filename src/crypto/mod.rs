//! Credential collaborator for cashbook
//!
//! Argon2id password hashing and verification. The ledger core treats
//! the output as an opaque [`crate::models::CredentialRecord`].

pub mod passphrase;
pub mod password;

pub use passphrase::Passphrase;
pub use password::{hash_password, verify_password};
