//! Single-value seal/open commands

use std::io::{self, Write};

use crate::batch::BatchMode;
use crate::crypto::{KdfParams, SecureString};
use crate::envelope::{open_value_with, seal_value_with};
use crate::error::{SealboxError, SealboxResult};

/// Handle `sealbox seal`
pub fn handle_seal_command(
    value: Option<String>,
    password: Option<String>,
    iterations: u32,
) -> SealboxResult<()> {
    let value = match value {
        Some(v) => v,
        None => prompt_value("Value to seal: ")?,
    };
    let password = resolve_password(password, BatchMode::Seal)?;

    let params = KdfParams::with_iterations(iterations);
    let sealed = seal_value_with(&value, password.as_str(), &params)?;
    println!("{}", sealed);
    Ok(())
}

/// Handle `sealbox open`
pub fn handle_open_command(
    value: Option<String>,
    password: Option<String>,
    iterations: u32,
) -> SealboxResult<()> {
    let value = match value {
        Some(v) => v,
        None => prompt_value("Sealed value to open: ")?,
    };
    let password = resolve_password(password, BatchMode::Open)?;

    let params = KdfParams::with_iterations(iterations);
    let plaintext = open_value_with(&value, password.as_str(), &params)?;
    println!("{}", plaintext);
    Ok(())
}

/// Resolve the password from the flag/environment or an interactive prompt
///
/// Sealing prompts twice so a typo cannot produce an envelope nobody can
/// open; opening prompts once.
pub(crate) fn resolve_password(
    flag: Option<String>,
    mode: BatchMode,
) -> SealboxResult<SecureString> {
    if let Some(password) = flag {
        let password = SecureString::new(password);
        if password.is_blank() {
            return Err(SealboxError::EmptyInput("Password"));
        }
        return Ok(password);
    }

    loop {
        let first = SecureString::new(prompt_password("Password: ")?);
        if first.is_blank() {
            println!("Password must not be empty. Please try again.");
            continue;
        }
        if mode == BatchMode::Open {
            return Ok(first);
        }

        let second = SecureString::new(prompt_password("Confirm password: ")?);
        if first.as_str() != second.as_str() {
            println!("Passwords do not match. Please try again.");
            continue;
        }
        return Ok(first);
    }
}

/// Prompt for a value on stdin (visible input)
fn prompt_value(prompt: &str) -> SealboxResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> SealboxResult<String> {
    rpassword::prompt_password(prompt).map_err(|e| SealboxError::Io(e.to_string()))
}
