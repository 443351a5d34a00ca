//! LZF token-stream encoder.
//!
//! Turns one slice of input into a sequence of literal runs and
//! back-references (layout documented in [`super::types`]).  The scan is
//! greedy and left to right: each position is probed with the
//! [`MatchFinder`]; bytes without a match accumulate into a pending literal
//! run, which is flushed immediately before the next back-reference and once
//! more at the end of the slice.
//!
//! This module knows nothing about chunk framing; see
//! [`crate::frame::compress`] for the `ZV` chunk encoder built on top of it.

use super::match_finder::{Match, MatchFinder, Scan};
use super::types::{max_compressed_body, LENGTH_ESCAPE, LENGTH_SHIFT, MAX_LITERAL};

/// Append `literals` as one or more literal-run tokens of at most
/// [`MAX_LITERAL`] bytes each.
pub fn write_literals(out: &mut Vec<u8>, literals: &[u8]) {
    for run in literals.chunks(MAX_LITERAL) {
        out.push((run.len() - 1) as u8);
        out.extend_from_slice(run);
    }
}

/// Append the back-reference token for `m`.
pub fn write_back_ref(out: &mut Vec<u8>, m: Match) {
    let len = m.len - 2;
    let off = m.offset - 1;
    if len < LENGTH_ESCAPE {
        out.push(((len << LENGTH_SHIFT) | (off >> 8)) as u8);
    } else {
        out.push(((LENGTH_ESCAPE << LENGTH_SHIFT) | (off >> 8)) as u8);
        out.push((len - LENGTH_ESCAPE) as u8);
    }
    out.push(off as u8);
}

/// Encode `data[start..end]` as an LZF token stream appended to `out`.
///
/// Back-references never reach before `start`, so the stream decodes on its
/// own.  Every position covered by an accepted match is inserted into
/// `finder`, so later matches may start inside earlier ones.
///
/// Returns the number of bytes appended.
pub fn compress_block(
    data: &[u8],
    start: usize,
    end: usize,
    finder: &mut MatchFinder,
    out: &mut Vec<u8>,
) -> usize {
    let base = out.len();
    out.reserve(max_compressed_body(end - start));

    let mut anchor = start;
    let mut pos = start;
    while pos < end {
        match finder.find_match(data, start, pos, end) {
            Scan::InLiteralRun => pos += 1,
            Scan::MatchFound(m) => {
                write_literals(out, &data[anchor..pos]);
                write_back_ref(out, m);
                for covered in pos + 1..pos + m.len {
                    finder.insert(data, covered, end);
                }
                pos += m.len;
                anchor = pos;
            }
        }
    }
    write_literals(out, &data[anchor..end]);

    out.len() - base
}

/// Encode all of `src` as a bare token stream, without chunk framing.
///
/// The output is what liblzf's `lzf_compress` would accept for
/// decompression; streams longer than `0xFFFF` bytes cannot be framed as a
/// single chunk, but remain valid raw streams.
pub fn compress_block_to_vec(src: &[u8]) -> Vec<u8> {
    let mut finder = MatchFinder::new(src.len());
    let mut out = Vec::new();
    compress_block(src, 0, src.len(), &mut finder, &mut out);
    out
}
