//! Key derivation using PBKDF2-HMAC-SHA512
//!
//! Derives encryption keys from user passwords. The iteration count makes
//! every password guess pay the same fixed cost, and the per-operation salt
//! makes precomputed dictionaries useless.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroize;

use crate::crypto::{DEFAULT_KDF_ITERATIONS, KEY_LEN, SALT_LEN};
use crate::error::{SealboxError, SealboxResult};

/// Parameters for key derivation
#[derive(Debug, Clone)]
pub struct KdfParams {
    /// PBKDF2 iteration count. The envelope does not record it, so it must
    /// be identical between sealing and opening for the same deployment.
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_KDF_ITERATIONS,
        }
    }
}

impl KdfParams {
    /// Create params with the deployment default iteration count
    pub fn new() -> Self {
        Self::default()
    }

    /// Create params with a specific iteration count
    pub fn with_iterations(iterations: u32) -> Self {
        Self { iterations }
    }
}

/// A derived encryption key
///
/// Lives only for the duration of a single seal or open call. The bytes are
/// zeroed when the key is dropped.
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

// Never print key material in Debug output
impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey").field("len", &KEY_LEN).finish()
    }
}

/// Derive an encryption key from a password and salt
///
/// Deterministic: the same `(password, salt, iterations)` always yields the
/// same key, which is what lets open reproduce the key sealed with.
pub fn derive_key(password: &str, salt: &[u8], params: &KdfParams) -> SealboxResult<DerivedKey> {
    if salt.len() != SALT_LEN {
        return Err(SealboxError::Crypto(format!(
            "Invalid salt length: expected {}, got {}",
            SALT_LEN,
            salt.len()
        )));
    }
    if params.iterations == 0 {
        return Err(SealboxError::Crypto(
            "Iteration count must be at least 1".to_string(),
        ));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt, params.iterations, &mut key);

    Ok(DerivedKey { key })
}
