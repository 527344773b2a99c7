//! Secure handling of plaintext passphrases
//!
//! Wraps the plaintext so it is zeroed on drop and never leaks through
//! Debug formatting.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A plaintext passphrase that zeroes its memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Passphrase(String);

impl Passphrase {
    /// Wrap a plaintext passphrase
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Borrow the plaintext
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Borrow the plaintext bytes (what the hasher consumes)
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase(***)")
    }
}

impl From<String> for Passphrase {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Passphrase {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
