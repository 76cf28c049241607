//! Immutable byte blobs used for public keys and public key tokens.
//!
//! # Key Types
//! - [`Blob`] - An immutable sequence of bytes with hexadecimal text form
//!
//! # Public Key Tokens
//!
//! A public key token is the last 8 bytes of the SHA-1 hash of the full public key, in
//! reversed byte order. [`Blob::public_key_token`] performs that derivation so that an
//! assembly name carrying a full key can be matched against one carrying only the token.

use std::{fmt, str::FromStr, sync::Arc};

use sha1::{Digest, Sha1};

use crate::{syntax, Error, Result};

/// Length in bytes of a public key token.
pub const PUBLIC_KEY_TOKEN_LENGTH: usize = 8;

/// An immutable sequence of bytes.
///
/// Cloning a `Blob` is cheap; the bytes are shared.
///
/// # Examples
///
/// ```rust
/// use dotnames::Blob;
///
/// let token = Blob::parse("b77a5c561934e089")?;
/// assert_eq!(token.len(), 8);
/// assert_eq!(token.to_string(), "b77a5c561934e089");
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Blob {
    data: Arc<[u8]>,
}

impl Blob {
    /// Creates a blob from raw bytes.
    #[must_use]
    pub fn new(data: &[u8]) -> Self {
        Blob {
            data: Arc::from(data),
        }
    }

    /// Parses a blob from hexadecimal text.
    ///
    /// Upper and lower case digits are accepted; the text must have an even number of digits.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the text is not valid hexadecimal.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = hex::decode(text.trim())
            .map_err(|e| malformed_error!("Invalid hex blob '{}': {}", text, e))?;
        Ok(Blob::from(bytes))
    }

    /// Parses a blob from hexadecimal text, returning `None` on failure.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        syntax::log_failure(text, "blob", Self::parse(text))
    }

    /// Returns the bytes of this blob.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes in this blob.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the blob holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Derives the public key token from this blob, treating it as a full public key.
    ///
    /// The token is the last 8 bytes of the SHA-1 hash of the key, in reversed order.
    /// An empty key yields an empty token.
    #[must_use]
    pub fn public_key_token(&self) -> Blob {
        if self.data.is_empty() {
            return Blob::default();
        }

        let mut hasher = Sha1::new();
        hasher.update(&self.data);
        let hash = hasher.finalize();

        let token: Vec<u8> = hash[hash.len() - PUBLIC_KEY_TOKEN_LENGTH..]
            .iter()
            .rev()
            .copied()
            .collect();
        Blob::from(token)
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Blob {
            data: Arc::from(data),
        }
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.data))
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({})", self)
    }
}

impl FromStr for Blob {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ECMA-335 standard public key
    const ECMA_KEY: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0];

    #[test]
    fn test_parse_and_display() {
        let blob = Blob::parse("B77A5C561934E089").unwrap();
        assert_eq!(
            blob.data(),
            &[0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89]
        );
        assert_eq!(blob.to_string(), "b77a5c561934e089");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(Blob::parse("abc"), Err(Error::Malformed { .. })));
        assert!(Blob::parse("zz").is_err());
        assert!(Blob::parse("").unwrap().is_empty());
        assert!(Blob::try_parse("zz").is_none());
        assert_eq!(Blob::try_parse("00ff").unwrap().data(), &[0x00, 0xff]);
    }

    #[test]
    fn test_public_key_token_ecma_key() {
        let token = Blob::new(&ECMA_KEY).public_key_token();
        assert_eq!(token.to_string(), "b77a5c561934e089");
    }

    #[test]
    fn test_public_key_token_empty() {
        assert!(Blob::default().public_key_token().is_empty());
    }
}
