//! Secure memory handling for sensitive data
//!
//! Passwords taken from a prompt, the command line, or the environment are
//! held in a container that zeroes its memory on drop and never prints its
//! contents.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string type that zeros its contents on drop
///
/// Use this for passwords and other sensitive string data.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecureString {
    inner: String,
}

impl SecureString {
    /// Create a new SecureString
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Get the string contents
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Check if the contents are empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.inner.trim().is_empty()
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("len", &self.inner.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_creation() {
        let s = SecureString::new("test");
        assert_eq!(s.as_str(), "test");
        assert!(!s.is_blank());
    }

    #[test]
    fn test_blank_detection() {
        assert!(SecureString::new("").is_blank());
        assert!(SecureString::new("   ").is_blank());
        assert!(!SecureString::new(" x ").is_blank());
    }

    #[test]
    fn test_debug_redacts_contents() {
        let s = SecureString::new("hunter2");
        let debug = format!("{:?}", s);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("SecureString"));
    }

    #[test]
    fn test_display_redacts_contents() {
        let s = SecureString::new("hunter2");
        let display = format!("{}", s);
        assert!(!display.contains("hunter2"));
        assert!(display.contains("REDACTED"));
    }
}
