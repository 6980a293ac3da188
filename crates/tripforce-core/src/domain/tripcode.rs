//! Tripcode hashing
//!
//! The one-way function itself lives behind [`CryptPrimitive`]; this module
//! only sizes buffers and cuts the public tripcode out of the digest.

use crate::constants::{DIGEST_LENGTH, TRIPCODE_LENGTH, TRIPCODE_OFFSET};
use crate::domain::password::Password;
use crate::domain::salt::Salt;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Hashing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The primitive returned fewer bytes than the tripcode needs
    #[error("crypt digest too short: expected at least {expected} bytes, found {found}")]
    ShortDigest { expected: usize, found: usize },
    /// The salt contains a byte the primitive cannot decode
    #[error("unsupported salt byte: {0:#04x}")]
    UnsupportedSaltByte(u8),
    /// The primitive itself failed
    #[error("crypt primitive failed: {0}")]
    Primitive(String),
}

/// External traditional-crypt function
///
/// `crypt(password, salt)` must return at least 13 bytes: two salt
/// characters followed by the encoded hash.
pub trait CryptPrimitive: Send + Sync {
    fn crypt(&self, password: &Password, salt: &Salt) -> Result<Vec<u8>, HashError>;
}

/// 10-byte public tripcode
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tripcode([u8; TRIPCODE_LENGTH]);

impl Tripcode {
    pub fn from_bytes(bytes: [u8; TRIPCODE_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; TRIPCODE_LENGTH] {
        &self.0
    }

    /// Text form; bytes a primitive should never emit render as U+FFFD
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl fmt::Display for Tripcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl fmt::Debug for Tripcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tripcode({:?})", self.as_str())
    }
}

/// Cut the tripcode out of a crypt digest
///
/// Copies `digest[3..13]` into a fresh buffer. Digests shorter than
/// 13 bytes are rejected rather than padded.
pub fn truncate_digest(digest: &[u8]) -> Result<Tripcode, HashError> {
    if digest.len() < DIGEST_LENGTH {
        return Err(HashError::ShortDigest {
            expected: DIGEST_LENGTH,
            found: digest.len(),
        });
    }

    let mut trip = [0u8; TRIPCODE_LENGTH];
    trip.copy_from_slice(&digest[TRIPCODE_OFFSET..TRIPCODE_OFFSET + TRIPCODE_LENGTH]);
    Ok(Tripcode(trip))
}

/// Password + salt to tripcode
pub struct TripcodeHasher<C> {
    primitive: C,
}

impl<C: CryptPrimitive> TripcodeHasher<C> {
    pub fn new(primitive: C) -> Self {
        Self { primitive }
    }

    /// Hash a password with its derived salt
    #[inline]
    pub fn hash(&self, password: &Password, salt: &Salt) -> Result<Tripcode, HashError> {
        let digest = self.primitive.crypt(password, salt)?;
        truncate_digest(&digest)
    }
}
