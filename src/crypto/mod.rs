//! Cryptographic core for sealbox
//!
//! Provides AES-256-GCM authenticated encryption with PBKDF2-HMAC-SHA512
//! key derivation. The lengths below are part of the wire format: every
//! envelope ever sealed by a deployment uses the same values, and changing
//! any of them breaks compatibility with previously sealed envelopes.

pub mod cipher;
pub mod key_derivation;
pub mod secure_memory;

/// Salt length in bytes for key derivation
pub const SALT_LEN: usize = 32;

/// AES-GCM nonce length in bytes (96 bits)
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// Default PBKDF2 iteration count. Chosen to impose a consistent per-guess
/// cost against offline brute force; must not vary between seal and open
/// within a deployment.
pub const DEFAULT_KDF_ITERATIONS: u32 = 600_000;

pub use cipher::{open, seal};
pub use key_derivation::{derive_key, DerivedKey, KdfParams};
pub use secure_memory::SecureString;
