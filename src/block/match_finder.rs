//! Match finder for the LZF chunk encoder.
//!
//! Keeps a single-entry hash table over 3-byte prefixes.  Every position the
//! encoder advances over is inserted, so the most recent occurrence of a
//! prefix always wins its bucket; this is greedy parsing and keeps offsets
//! (and therefore tokens) small.
//!
//! The table holds absolute positions into the whole input, so one
//! [`MatchFinder`] serves every chunk of a single encode call.  Entries left
//! behind by earlier chunks are rejected by the `chunk_start` bound, which
//! keeps chunks independently decodable without clearing the table.

use super::types::{MAX_MATCH, MAX_OFFSET, MIN_MATCH};

/// Smallest hash table allocated, in entries.
pub const MIN_HASH_SIZE: usize = 256;

/// Largest hash table allocated, in entries.
pub const MAX_HASH_SIZE: usize = 1 << 16;

/// Marks a bucket that has never been written.
const EMPTY: usize = usize::MAX;

/// A back-reference candidate accepted by the finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Distance back from the current position, `1..=MAX_OFFSET`.
    pub offset: usize,
    /// Number of matching bytes, `MIN_MATCH..=MAX_MATCH`.
    pub len: usize,
}

/// Outcome of probing one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// No usable match; the byte at the probed position is a literal.
    InLiteralRun,
    /// A back-reference covering `Match::len` bytes starting at the position.
    MatchFound(Match),
}

/// Hash table size for an input of `len` bytes: about twice the input length,
/// rounded up to a power of two and clamped to
/// [`MIN_HASH_SIZE`]`..=`[`MAX_HASH_SIZE`].
pub fn hash_table_len(len: usize) -> usize {
    len.saturating_mul(2)
        .clamp(MIN_HASH_SIZE, MAX_HASH_SIZE)
        .next_power_of_two()
}

/// The 24-bit big-endian value of the three bytes at `pos`.
#[inline(always)]
fn prefix(data: &[u8], pos: usize) -> u32 {
    (u32::from(data[pos]) << 16) | (u32::from(data[pos + 1]) << 8) | u32::from(data[pos + 2])
}

/// Hash-indexed position table.
#[derive(Debug, Clone)]
pub struct MatchFinder {
    table: Vec<usize>,
    mask: usize,
}

impl MatchFinder {
    /// Create a finder sized for an input of `input_len` bytes.
    pub fn new(input_len: usize) -> Self {
        let size = hash_table_len(input_len);
        MatchFinder {
            table: vec![EMPTY; size],
            mask: size - 1,
        }
    }

    /// Number of buckets in the table.
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    #[inline(always)]
    fn bucket(&self, value: u32) -> usize {
        (value.wrapping_mul(57_321) >> 9) as usize & self.mask
    }

    /// Record `pos` as the most recent occurrence of its prefix.
    ///
    /// Positions with fewer than [`MIN_MATCH`] bytes before `end` are skipped.
    #[inline]
    pub fn insert(&mut self, data: &[u8], pos: usize, end: usize) {
        if pos + MIN_MATCH <= end {
            let h = self.bucket(prefix(data, pos));
            self.table[h] = pos;
        }
    }

    /// Probe `pos` for a back-reference into `[chunk_start, pos)` and insert
    /// `pos` into the table.
    ///
    /// The match is extended up to `MAX_MATCH` bytes but never past `end`;
    /// bytes beyond the cap are left for the next probe.
    pub fn find_match(&mut self, data: &[u8], chunk_start: usize, pos: usize, end: usize) -> Scan {
        if pos + MIN_MATCH > end {
            return Scan::InLiteralRun;
        }
        let value = prefix(data, pos);
        let h = self.bucket(value);
        let candidate = self.table[h];
        self.table[h] = pos;

        if candidate == EMPTY || candidate < chunk_start || candidate >= pos {
            return Scan::InLiteralRun;
        }
        let offset = pos - candidate;
        if offset > MAX_OFFSET || prefix(data, candidate) != value {
            return Scan::InLiteralRun;
        }

        let max_len = (end - pos).min(MAX_MATCH);
        let mut len = MIN_MATCH;
        while len < max_len && data[candidate + len] == data[pos + len] {
            len += 1;
        }
        Scan::MatchFound(Match { offset, len })
    }
}
