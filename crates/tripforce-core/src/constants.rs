//! Tripcode search constants
//!
//! Note: sizes here are part of the tripcode contract and must not change.

// =============================================================================
// Buffer sizes
// =============================================================================

/// Significant password length (traditional crypt only reads 8 bytes)
pub const PASSWORD_LENGTH: usize = 8;

/// Salt length (2 significant bytes + "H." suffix)
pub const SALT_LENGTH: usize = 4;

/// Minimum digest length returned by the crypt primitive
pub const DIGEST_LENGTH: usize = 13;

/// Offset of the tripcode inside the digest
pub const TRIPCODE_OFFSET: usize = 3;

/// Public tripcode length
pub const TRIPCODE_LENGTH: usize = 10;

// =============================================================================
// Character sets
// =============================================================================

/// Number of entries in the password lookup table
pub const PASSWORD_TABLE_SIZE: usize = 92;

/// Single-byte Shift-JIS compatible password symbols, in draw order.
///
/// Printable ASCII minus `#` (secure tripcode trigger on 4chan),
/// `\` and `~` (no 1-byte Shift-JIS equivalent).
pub const PASSWORD_TABLE: &[u8; PASSWORD_TABLE_SIZE] = b" !\"$%&'()*+,-./0123456789:;<=>?\
@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_`abcdefghijklmnopqrstuvwxyz{|}";

/// Traditional crypt alphabet, in 6-bit value order
pub const CRYPT_ALPHABET: &[u8; 64] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Characters that can appear as the 10th tripcode character
pub const TENTH_CHAR_CANDIDATES: &[u8; 16] = b".26AEIMQUYcgkosw";

/// Fixed salt suffix
pub const SALT_SUFFIX: [u8; 2] = *b"H.";

// =============================================================================
// PRNG parameters
// =============================================================================

/// LCG multiplier (MSVC `rand()` compatible)
pub const LCG_MULTIPLIER: u32 = 214013;

/// LCG increment
pub const LCG_INCREMENT: u32 = 2531011;

/// Largest value returned by a single draw
pub const DRAW_MAX: u32 = 0x7FFF;

// =============================================================================
// Reporting
// =============================================================================

/// Rate magnitude step
pub const RATE_MAGNITUDE: u64 = 1000;

/// Rate prefixes for 1000^1 .. 1000^4
pub const RATE_PREFIXES: [char; 4] = ['k', 'm', 'g', 't'];
