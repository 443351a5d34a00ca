//! Decoder for concatenated `ZV` chunks.
//!
//! Accepts the output of [`crate::frame::compress::encode`] or any
//! concatenation of chunks from an independent encoder, including chunks up
//! to the full 16-bit length.  Decoding shares nothing with the encoder
//! beyond the byte format.

use crate::block::decompress::decompress_block;
use crate::block::types::{check_room, LzfError, MAX_MATCH};
use crate::frame::header::ChunkHeader;
use crate::frame::types::ChunkKind;

/// Most output one token-stream byte can stand for: a 3-byte back-reference
/// of [`MAX_MATCH`] bytes.
const MAX_EXPANSION: usize = MAX_MATCH / 3;

/// Iterator over `(header, body)` pairs of a chunk sequence.
///
/// A COMPRESSED header claiming more output than its body could ever decode
/// to is rejected before the body is touched.  Stops after the first error.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    src: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Chunks<'a> {
    /// Walk the chunks of `src`.
    pub fn new(src: &'a [u8]) -> Self {
        Chunks {
            src,
            pos: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Result<(ChunkHeader, &'a [u8]), LzfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.src.len() {
            return None;
        }
        let rest = &self.src[self.pos..];
        let item = ChunkHeader::parse(rest).and_then(|header| {
            if rest.len() < header.framed_len() {
                return Err(LzfError::CorruptFormat("truncated chunk body"));
            }
            if header.kind == ChunkKind::Compressed
                && header.original_len > header.body_len * MAX_EXPANSION
            {
                return Err(LzfError::CorruptFormat("declared length exceeds what the body can hold"));
            }
            Ok((header, &rest[header.header_len()..header.framed_len()]))
        });
        match &item {
            Ok((header, _)) => self.pos += header.framed_len(),
            Err(_) => self.failed = true,
        }
        Some(item)
    }
}

/// Total decoded length of `src`, from the chunk headers alone.
pub fn decoded_len(src: &[u8]) -> Result<usize, LzfError> {
    Chunks::new(src).try_fold(0usize, |total, item| item.map(|(h, _)| total + h.original_len))
}

/// Number of chunks in `src`.
pub fn chunk_count(src: &[u8]) -> Result<usize, LzfError> {
    Chunks::new(src).try_fold(0usize, |n, item| item.map(|_| n + 1))
}

/// Decode one checked chunk body into `out`, which is exactly
/// `header.original_len` bytes.
fn decode_chunk(header: &ChunkHeader, body: &[u8], out: &mut [u8]) -> Result<(), LzfError> {
    match header.kind {
        ChunkKind::Raw => out.copy_from_slice(body),
        ChunkKind::Compressed => {
            let n = decompress_block(body, out).map_err(|e| match e {
                LzfError::BufferTooSmall { .. } => {
                    LzfError::CorruptFormat("chunk decodes past its declared length")
                }
                other => other,
            })?;
            if n != header.original_len {
                return Err(LzfError::CorruptFormat("chunk decodes short of its declared length"));
            }
        }
    }
    Ok(())
}

/// Decode `src` into `dst`, returning the number of bytes written.
pub fn decode_into(src: &[u8], dst: &mut [u8]) -> Result<usize, LzfError> {
    let mut op = 0usize;
    for item in Chunks::new(src) {
        let (header, body) = item?;
        check_room(dst, op, header.original_len)?;
        decode_chunk(&header, body, &mut dst[op..op + header.original_len])?;
        op += header.original_len;
    }
    Ok(op)
}

/// Decode `src` into a new buffer.
///
/// The buffer grows one chunk at a time, so header lengths are never
/// trusted beyond the chunk being decoded.
pub fn decode(src: &[u8]) -> Result<Vec<u8>, LzfError> {
    let mut out = Vec::with_capacity(src.len());
    for item in Chunks::new(src) {
        let (header, body) = item?;
        let at = out.len();
        out.resize(at + header.original_len, 0);
        decode_chunk(&header, body, &mut out[at..])?;
    }
    Ok(out)
}
