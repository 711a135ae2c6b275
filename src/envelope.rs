//! Self-describing encrypted envelopes
//!
//! A sealed value is the base64 encoding of `salt || nonce || auth_tag ||
//! ciphertext`. The layout carries no length fields: region boundaries come
//! from the fixed parameter lengths, and everything past the tag is
//! ciphertext. Each seal draws a fresh salt and nonce, so an envelope is
//! fully portable across invocations and two seals of the same value never
//! produce the same text.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::crypto::{self, derive_key, KdfParams, NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::error::{SealboxError, SealboxResult};

/// Minimum decoded envelope length: all fixed regions plus at least one
/// ciphertext byte.
pub const MIN_ENVELOPE_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN + 1;

/// One sealed value, split into its wire-format regions
///
/// Constructed once per seal, consumed once per open, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Key-derivation salt, fresh per seal, not secret
    pub salt: [u8; SALT_LEN],
    /// Cipher nonce, fresh per seal, not secret
    pub nonce: [u8; NONCE_LEN],
    /// Authentication tag over the ciphertext
    pub auth_tag: [u8; TAG_LEN],
    /// Encrypted payload, same length as the plaintext
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Encode to the printable wire form
    pub fn encode(&self) -> String {
        let mut bytes =
            Vec::with_capacity(SALT_LEN + NONCE_LEN + TAG_LEN + self.ciphertext.len());
        bytes.extend_from_slice(&self.salt);
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.auth_tag);
        bytes.extend_from_slice(&self.ciphertext);
        STANDARD.encode(bytes)
    }

    /// Decode the printable form and split it into regions
    ///
    /// Fails with [`SealboxError::Encoding`] when the text is not base64,
    /// or [`SealboxError::TooShort`] when the decoded bytes cannot hold the
    /// fixed regions plus a non-empty ciphertext.
    pub fn decode(text: &str) -> SealboxResult<Self> {
        let bytes = STANDARD
            .decode(text.trim())
            .map_err(|e| SealboxError::Encoding(e.to_string()))?;

        if bytes.len() < MIN_ENVELOPE_LEN {
            return Err(SealboxError::TooShort {
                expected_min: MIN_ENVELOPE_LEN,
                actual: bytes.len(),
            });
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&bytes[..SALT_LEN]);

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[SALT_LEN..SALT_LEN + NONCE_LEN]);

        let mut auth_tag = [0u8; TAG_LEN];
        auth_tag.copy_from_slice(&bytes[SALT_LEN + NONCE_LEN..SALT_LEN + NONCE_LEN + TAG_LEN]);

        let ciphertext = bytes[SALT_LEN + NONCE_LEN + TAG_LEN..].to_vec();

        Ok(Self {
            salt,
            nonce,
            auth_tag,
            ciphertext,
        })
    }
}

/// Seal one value with the deployment-default key-derivation cost
pub fn seal_value(plaintext: &str, password: &str) -> SealboxResult<String> {
    seal_value_with(plaintext, password, &KdfParams::default())
}

/// Seal one value
///
/// Rejects blank passwords and plaintexts before any key derivation, then
/// draws a fresh salt and nonce from the OS random source, derives a
/// single-use key, encrypts, and encodes.
pub fn seal_value_with(
    plaintext: &str,
    password: &str,
    params: &KdfParams,
) -> SealboxResult<String> {
    if password.trim().is_empty() {
        return Err(SealboxError::EmptyInput("Password"));
    }
    if plaintext.trim().is_empty() {
        return Err(SealboxError::EmptyInput("Plaintext"));
    }

    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let key = derive_key(password, &salt, params)?;
    let (ciphertext, auth_tag) = crypto::seal(&key, &nonce, plaintext.as_bytes())?;

    Ok(Envelope {
        salt,
        nonce,
        auth_tag,
        ciphertext,
    }
    .encode())
}

/// Open one sealed value with the deployment-default key-derivation cost
pub fn open_value(envelope_text: &str, password: &str) -> SealboxResult<String> {
    open_value_with(envelope_text, password, &KdfParams::default())
}

/// Open one sealed value
///
/// Format errors from decoding propagate unchanged. An authentication
/// failure is reported as [`SealboxError::WrongPasswordOrCorrupted`] without
/// distinguishing a wrong password from tampered data.
pub fn open_value_with(
    envelope_text: &str,
    password: &str,
    params: &KdfParams,
) -> SealboxResult<String> {
    if password.trim().is_empty() {
        return Err(SealboxError::EmptyInput("Password"));
    }

    let envelope = Envelope::decode(envelope_text)?;
    let key = derive_key(password, &envelope.salt, params)?;
    let plaintext = crypto::open(&key, &envelope.nonce, &envelope.ciphertext, &envelope.auth_tag)?;

    String::from_utf8(plaintext)
        .map_err(|e| SealboxError::Crypto(format!("Decrypted data is not valid UTF-8: {}", e)))
}
