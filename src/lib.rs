//! sealbox - password-based authenticated encryption for text values
//!
//! This library seals short text values into self-describing envelopes:
//! base64 of `salt || nonce || auth_tag || ciphertext`, using AES-256-GCM
//! under a key derived from the password with PBKDF2-HMAC-SHA512. Because
//! every envelope carries its own salt and nonce, sealed values are portable
//! across independent invocations that share the password.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: key derivation, the AEAD cipher, and secure memory handling
//! - `envelope`: the wire-format codec and the seal/open operations
//! - `batch`: order-preserving batch processing with per-item error isolation
//! - `input` / `export`: line and CSV adapters feeding and draining batches
//! - `cli`: command handlers for the `sealbox` binary
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use sealbox::{open_value, seal_value};
//!
//! # fn demo() -> sealbox::SealboxResult<()> {
//! let sealed = seal_value("hello", "correct-horse")?;
//! assert_eq!(open_value(&sealed, "correct-horse")?, "hello");
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod cli;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod export;
pub mod input;

pub use batch::{process_batch, process_batch_with, BatchMode, BatchOutcome};
pub use envelope::{open_value, open_value_with, seal_value, seal_value_with, Envelope};
pub use error::{SealboxError, SealboxResult};
