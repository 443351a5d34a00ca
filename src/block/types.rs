//! LZF token-level constants, the crate error type, and small helpers shared
//! by the token encoder and decoder.
//!
//! Token layout (liblzf-compatible, format version 1):
//!
//! | First byte        | Meaning                                                        |
//! |-------------------|----------------------------------------------------------------|
//! | `000LLLLL`        | literal run of `L + 1` bytes (1..=32) follows                  |
//! | `LLLOOOOO` (L<7)  | back-reference, length `L + 2`, then one low-offset byte       |
//! | `111OOOOO`        | back-reference, length `7 + next + 2`, then one low-offset byte |
//!
//! The encoded offset is `distance - 1`, so 13 offset bits reach back
//! [`MAX_OFFSET`] bytes.

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Token constants
// ─────────────────────────────────────────────────────────────────────────────

/// Shortest back-reference the encoder emits, and the hashed prefix width.
pub const MIN_MATCH: usize = 3;

/// Longest back-reference a single token can describe: `(1 << 8) + (1 << 3)`.
pub const MAX_MATCH: usize = (1 << 8) + (1 << 3);

/// Largest back-reference distance: 13 offset bits, stored as `distance - 1`.
pub const MAX_OFFSET: usize = 1 << 13;

/// Longest literal run a single control byte can describe.
pub const MAX_LITERAL: usize = 1 << 5;

/// Number of bits the match-length field is shifted by in the control byte.
pub const LENGTH_SHIFT: u32 = 5;

/// Length-field value that signals an extra length byte follows.
pub const LENGTH_ESCAPE: usize = 7;

/// Slices shorter than this are always stored RAW; the token stream cannot
/// beat the two bytes of extra header a COMPRESSED chunk costs.
pub const MIN_BLOCK_TO_COMPRESS: usize = 16;

/// Worst-case size of a compressed token stream for `len` input bytes:
/// one control byte per 32 literals plus slack for the final run.
#[inline]
pub const fn max_compressed_body(len: usize) -> usize {
    len + (len + MAX_LITERAL - 1) / MAX_LITERAL + 1
}

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by the LZF encoder and decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzfError {
    /// A chunk slice length outside `1..=MAX_CHUNK_LEN`, or a slice that runs
    /// past the end of the input.
    InvalidChunkSize {
        /// Requested slice length.
        len: usize,
    },
    /// The destination buffer cannot hold the bytes that must be written.
    BufferTooSmall {
        /// Bytes required from the write position onward.
        needed: usize,
        /// Bytes actually available from the write position onward.
        available: usize,
    },
    /// The input is not a well-formed LZF chunk sequence.
    CorruptFormat(&'static str),
}

impl LzfError {
    /// Short, stable name of the error kind.
    pub fn error_name(&self) -> &'static str {
        match self {
            LzfError::InvalidChunkSize { .. } => "ERROR_invalidChunkSize",
            LzfError::BufferTooSmall { .. } => "ERROR_bufferTooSmall",
            LzfError::CorruptFormat(_) => "ERROR_corruptFormat",
        }
    }
}

impl fmt::Display for LzfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LzfError::InvalidChunkSize { len } => {
                write!(f, "{}: slice length {len} is out of range", self.error_name())
            }
            LzfError::BufferTooSmall { needed, available } => write!(
                f,
                "{}: need {needed} bytes, only {available} available",
                self.error_name()
            ),
            LzfError::CorruptFormat(reason) => write!(f, "{}: {reason}", self.error_name()),
        }
    }
}

impl std::error::Error for LzfError {}

// ─────────────────────────────────────────────────────────────────────────────
// Byte-order helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a big-endian `u16` from `src` at byte `offset`.
#[inline]
pub fn read_be16(src: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([src[offset], src[offset + 1]])
}

/// Write a big-endian `u16` into `dst` at byte `offset`.
#[inline]
pub fn write_be16(dst: &mut [u8], offset: usize, value: u16) {
    dst[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

/// Fail with [`LzfError::BufferTooSmall`] unless `dst[at..at + needed]` exists.
#[inline]
pub(crate) fn check_room(dst: &[u8], at: usize, needed: usize) -> Result<(), LzfError> {
    let available = dst.len().saturating_sub(at);
    if needed > available {
        return Err(LzfError::BufferTooSmall { needed, available });
    }
    Ok(())
}
