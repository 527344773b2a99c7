//! Password hashing using Argon2id
//!
//! Produces the credential record stored on an account: a PHC-encoded
//! Argon2id hash with a freshly generated random salt. The ledger core
//! never calls into this module; it only stores the result.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};

use super::passphrase::Passphrase;
use crate::error::{CashbookError, CashbookResult};
use crate::models::CredentialRecord;

/// Memory cost in KiB (64 MiB)
const MEMORY_COST: u32 = 65536;
/// Time cost (iterations)
const TIME_COST: u32 = 2;
/// Parallelism degree
const PARALLELISM: u32 = 1;
/// Hash output length in bytes
const OUTPUT_LEN: usize = 32;

fn hasher() -> CashbookResult<Argon2<'static>> {
    let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, Some(OUTPUT_LEN))
        .map_err(|e| CashbookError::Crypto(format!("Invalid Argon2 parameters: {}", e)))?;

    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Hash a passphrase into a credential record
///
/// Each call draws a fresh salt from the OS CSPRNG; hashing the same
/// passphrase twice yields distinct records.
pub fn hash_password(passphrase: &Passphrase) -> CashbookResult<CredentialRecord> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = hasher()?
        .hash_password(passphrase.as_bytes(), &salt)
        .map_err(|e| CashbookError::Crypto(format!("Password hashing failed: {}", e)))?;

    Ok(CredentialRecord::new(hash.to_string(), salt.to_string()))
}

/// Verify a passphrase against a stored credential record
///
/// A wrong passphrase is `Ok(false)`; a credential that cannot be parsed
/// is an error.
pub fn verify_password(
    passphrase: &Passphrase,
    credential: &CredentialRecord,
) -> CashbookResult<bool> {
    let parsed = PasswordHash::new(&credential.hash)
        .map_err(|e| CashbookError::Crypto(format!("Malformed credential: {}", e)))?;

    match hasher()?.verify_password(passphrase.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CashbookError::Crypto(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
