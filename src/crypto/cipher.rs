//! AES-256-GCM encryption/decryption
//!
//! The aes-gcm crate appends the authentication tag to the ciphertext; this
//! module splits it back out so the envelope layer controls where the tag
//! sits in the serialized layout.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::crypto::{DerivedKey, NONCE_LEN, TAG_LEN};
use crate::error::{SealboxError, SealboxResult};

fn build_cipher(key: &DerivedKey) -> SealboxResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SealboxError::Crypto(format!("Failed to create cipher: {}", e)))
}

/// Encrypt plaintext under `key` and `nonce`
///
/// Returns the ciphertext (same length as the plaintext, which may be empty)
/// and the 16-byte authentication tag. No associated data is authenticated
/// beyond the ciphertext itself.
pub fn seal(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> SealboxResult<(Vec<u8>, [u8; TAG_LEN])> {
    let cipher = build_cipher(key)?;

    let mut ciphertext = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| SealboxError::Crypto(format!("Encryption failed: {}", e)))?;

    if ciphertext.len() < TAG_LEN {
        return Err(SealboxError::Crypto(
            "Ciphertext shorter than authentication tag".to_string(),
        ));
    }
    let tag_bytes = ciphertext.split_off(ciphertext.len() - TAG_LEN);
    let auth_tag: [u8; TAG_LEN] = tag_bytes
        .try_into()
        .map_err(|_| SealboxError::Crypto("Authentication tag length mismatch".to_string()))?;

    Ok((ciphertext, auth_tag))
}

/// Decrypt ciphertext under `key` and `nonce`, verifying the tag
///
/// Verification happens atomically with decryption; on tag mismatch no
/// plaintext bytes are returned, not even partially decrypted ones. The
/// failure does not reveal whether the password was wrong or the data was
/// tampered with.
pub fn open(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    auth_tag: &[u8; TAG_LEN],
) -> SealboxResult<Vec<u8>> {
    let cipher = build_cipher(key)?;

    let mut combined = Vec::with_capacity(ciphertext.len() + TAG_LEN);
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(auth_tag);

    cipher
        .decrypt(Nonce::from_slice(nonce), combined.as_ref())
        .map_err(|_| SealboxError::WrongPasswordOrCorrupted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{derive_key, KdfParams, SALT_LEN};

    fn test_key() -> DerivedKey {
        derive_key(
            "test_password",
            &[9u8; SALT_LEN],
            &KdfParams::with_iterations(16),
        )
        .unwrap()
    }

    fn other_key() -> DerivedKey {
        derive_key(
            "other_password",
            &[9u8; SALT_LEN],
            &KdfParams::with_iterations(16),
        )
        .unwrap()
    }

    #[test]
    fn test_seal_open_round_trip() {
        let key = test_key();
        let nonce = [5u8; NONCE_LEN];
        let plaintext = b"Hello, World!";

        let (ciphertext, tag) = seal(&key, &nonce, plaintext).unwrap();
        let decrypted = open(&key, &nonce, &ciphertext, &tag).unwrap();

        assert_eq!(decrypted.as_slice(), plaintext);
    }

    #[test]
    fn test_ciphertext_same_length_as_plaintext() {
        let key = test_key();
        let nonce = [5u8; NONCE_LEN];
        let plaintext = b"twenty-three bytes long";

        let (ciphertext, tag) = seal(&key, &nonce, plaintext).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len());
        assert_eq!(tag.len(), TAG_LEN);
    }

    #[test]
    fn test_empty_plaintext() {
        let key = test_key();
        let nonce = [5u8; NONCE_LEN];

        let (ciphertext, tag) = seal(&key, &nonce, b"").unwrap();
        assert!(ciphertext.is_empty());

        let decrypted = open(&key, &nonce, &ciphertext, &tag).unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn test_wrong_key_fails() {
        let nonce = [5u8; NONCE_LEN];
        let (ciphertext, tag) = seal(&test_key(), &nonce, b"secret").unwrap();

        let result = open(&other_key(), &nonce, &ciphertext, &tag);
        assert!(matches!(result, Err(SealboxError::WrongPasswordOrCorrupted)));
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let key = test_key();
        let nonce = [5u8; NONCE_LEN];
        let (mut ciphertext, tag) = seal(&key, &nonce, b"tamper me").unwrap();

        ciphertext[0] ^= 0x01;

        let result = open(&key, &nonce, &ciphertext, &tag);
        assert!(matches!(result, Err(SealboxError::WrongPasswordOrCorrupted)));
    }

    #[test]
    fn test_tampered_tag_fails() {
        let key = test_key();
        let nonce = [5u8; NONCE_LEN];
        let (ciphertext, mut tag) = seal(&key, &nonce, b"tamper me").unwrap();

        tag[0] ^= 0x01;

        let result = open(&key, &nonce, &ciphertext, &tag);
        assert!(matches!(result, Err(SealboxError::WrongPasswordOrCorrupted)));
    }

    #[test]
    fn test_wrong_nonce_fails() {
        let key = test_key();
        let (ciphertext, tag) = seal(&key, &[5u8; NONCE_LEN], b"secret").unwrap();

        let result = open(&key, &[6u8; NONCE_LEN], &ciphertext, &tag);
        assert!(matches!(result, Err(SealboxError::WrongPasswordOrCorrupted)));
    }
}
