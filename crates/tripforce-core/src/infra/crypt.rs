//! Traditional DES crypt binding
//!
//! Delegates to `pwhash::unix_crypt`. Only the first two salt bytes reach
//! the primitive.

use crate::constants::CRYPT_ALPHABET;
use crate::domain::password::Password;
use crate::domain::salt::Salt;
use crate::domain::tripcode::{CryptPrimitive, HashError};

/// `crypt(3)` with a traditional 2-character salt
#[derive(Clone, Copy, Debug, Default)]
pub struct UnixCrypt;

impl CryptPrimitive for UnixCrypt {
    fn crypt(&self, password: &Password, salt: &Salt) -> Result<Vec<u8>, HashError> {
        let salt = [crypt_salt_byte(salt[0])?, crypt_salt_byte(salt[1])?];
        let salt = std::str::from_utf8(&salt).map_err(|e| HashError::Primitive(e.to_string()))?;

        // Tripcodes are defined over legacy DES crypt
        #[allow(deprecated)]
        let digest = pwhash::unix_crypt::hash_with(salt, &password[..]);
        digest
            .map(String::into_bytes)
            .map_err(|e| HashError::Primitive(e.to_string()))
    }
}

/// Map a salt byte onto the crypt alphabet
///
/// Alphabet bytes pass through. `':'..='@'` is decoded the way OpenSSL's
/// `DES_fcrypt` reads it (`byte - '5'`), so `':'` behaves as `'3'` and `'@'`
/// as `'9'`.
fn crypt_salt_byte(byte: u8) -> Result<u8, HashError> {
    if CRYPT_ALPHABET.contains(&byte) {
        return Ok(byte);
    }

    match byte {
        b':'..=b'@' => Ok(CRYPT_ALPHABET[(byte - b'5') as usize]),
        _ => Err(HashError::UnsupportedSaltByte(byte)),
    }
}
