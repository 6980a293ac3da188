//! Password generation
//!
//! Passwords are 8 bytes drawn from the single-byte Shift-JIS subset.
//! Imageboards tend to strip or convert the more exotic characters, which
//! would make the resulting tripcode unpredictable.

use crate::constants::{PASSWORD_LENGTH, PASSWORD_TABLE, PASSWORD_TABLE_SIZE};
use crate::domain::prng::Lcg;
use std::borrow::Cow;

/// Fixed-length password buffer
pub type Password = [u8; PASSWORD_LENGTH];

/// Draw a password from the worker's generator
///
/// Each byte is `PASSWORD_TABLE[draw() % 92]`.
#[inline]
pub fn generate_password(rng: &mut Lcg) -> Password {
    let mut password = [0u8; PASSWORD_LENGTH];
    for byte in password.iter_mut() {
        *byte = PASSWORD_TABLE[rng.draw() as usize % PASSWORD_TABLE_SIZE];
    }
    password
}

/// Render a password for display
///
/// Every table symbol is printable ASCII, so generated passwords never
/// lose data. Other bytes render as U+FFFD.
pub fn password_str(password: &Password) -> Cow<'_, str> {
    String::from_utf8_lossy(password)
}
