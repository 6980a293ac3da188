//! Salt derivation
//!
//! Futaba-style salt: 2nd and 3rd password bytes followed by `"H."`,
//! then clamped towards the crypt alphabet in two passes:
//!
//! 1. bytes outside `'.'..='z'` become `'.'`
//! 2. bytes in `':'..='@'` and `'['..='`'` are shifted up by 6
//!
//! The shift is plain arithmetic, so `':'` lands on `'@'` and `'@'` on `'F'`.
//! Existing tripcodes depend on this, so it must not be "fixed" into a table.

use crate::constants::{SALT_LENGTH, SALT_SUFFIX};
use crate::domain::password::Password;

/// Fixed-length salt buffer
pub type Salt = [u8; SALT_LENGTH];

/// Punctuation shift distance
const PUNCTUATION_SHIFT: u8 = 0x06;

/// Derive the clamped salt for a password
#[inline]
pub fn derive_salt(password: &Password) -> Salt {
    let mut salt = [password[1], password[2], SALT_SUFFIX[0], SALT_SUFFIX[1]];
    strip_outliers(&mut salt);
    shift_punctuation(&mut salt);
    salt
}

/// Replace bytes outside `'.'..='z'` with `'.'`
#[inline]
pub fn strip_outliers(salt: &mut Salt) {
    for byte in salt.iter_mut() {
        if !(b'.'..=b'z').contains(byte) {
            *byte = b'.';
        }
    }
}

/// Shift `:;<=>?@` and ``[\]^_` `` up by 6
#[inline]
pub fn shift_punctuation(salt: &mut Salt) {
    for byte in salt.iter_mut() {
        if (b':'..=b'@').contains(byte) || (b'['..=b'`').contains(byte) {
            *byte += PUNCTUATION_SHIFT;
        }
    }
}
