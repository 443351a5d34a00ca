//! Chunk encoder and the one-shot encode driver.
//!
//! [`ChunkEncoder`] turns one slice of at most [`MAX_CHUNK_LEN`] bytes into a
//! framed [`Chunk`], keeping the COMPRESSED form only when it is strictly
//! smaller than the RAW one.  The driver functions ([`encode`],
//! [`encode_range`], [`encode_chain`], [`encode_into`]) split larger inputs
//! into consecutive slices and either chain the resulting chunks or write
//! them straight into a caller buffer.
//!
//! One encoder (and so one match-finder table) serves every chunk of a
//! single call; nothing is shared between calls.

use crate::block::compress::compress_block;
use crate::block::match_finder::MatchFinder;
use crate::block::types::{check_room, LzfError, MIN_BLOCK_TO_COMPRESS};
use crate::frame::chain::ChunkChain;
use crate::frame::chunk::Chunk;
use crate::frame::header::ChunkHeader;
use crate::frame::types::{EMPTY_CHUNK, HEADER_LEN_NOT_COMPRESSED, MAX_CHUNK_LEN};

/// Number of chunks the encoder produces for `len` input bytes.
///
/// An empty input still yields one (empty) chunk.
#[inline]
pub fn chunk_count(len: usize) -> usize {
    len.div_ceil(MAX_CHUNK_LEN).max(1)
}

/// Upper bound on the encoded size of `len` input bytes: the input plus one
/// RAW header per chunk.
#[inline]
pub fn max_encoded_len(len: usize) -> usize {
    len + chunk_count(len) * HEADER_LEN_NOT_COMPRESSED
}

/// Reusable per-call chunk encoder.
#[derive(Debug, Clone)]
pub struct ChunkEncoder {
    finder: MatchFinder,
    scratch: Vec<u8>,
}

impl ChunkEncoder {
    /// Create an encoder for an input of `total_len` bytes.  The size only
    /// tunes the hash table; any input can be encoded.
    pub fn new(total_len: usize) -> Self {
        ChunkEncoder {
            finder: MatchFinder::new(total_len),
            scratch: Vec::new(),
        }
    }

    /// Encode `data[offset..offset + len]` as one chunk.
    ///
    /// `len` must be in `1..=MAX_CHUNK_LEN` and the slice must lie inside
    /// `data`; otherwise [`LzfError::InvalidChunkSize`] is returned.
    pub fn encode_chunk(&mut self, data: &[u8], offset: usize, len: usize) -> Result<Chunk, LzfError> {
        check_slice(data, offset, len)?;
        if self.try_compress(data, offset, len) {
            Chunk::compressed(len, &self.scratch)
        } else {
            Chunk::raw(&data[offset..offset + len])
        }
    }

    /// Encode `data[offset..offset + len]` as one chunk written directly into
    /// `dst` at `at`.  Returns the position after the chunk.
    pub fn encode_chunk_into(
        &mut self,
        data: &[u8],
        offset: usize,
        len: usize,
        dst: &mut [u8],
        at: usize,
    ) -> Result<usize, LzfError> {
        check_slice(data, offset, len)?;
        let (header, body) = if self.try_compress(data, offset, len) {
            (
                ChunkHeader::compressed(self.scratch.len() as u16, len as u16),
                &self.scratch[..],
            )
        } else {
            (ChunkHeader::raw(len as u16), &data[offset..offset + len])
        };
        check_room(dst, at, header.framed_len())?;
        let body_at = header.write(dst, at)?;
        dst[body_at..body_at + body.len()].copy_from_slice(body);
        Ok(body_at + body.len())
    }

    /// Encode `data[offset..offset + len]` as consecutive chunks of at most
    /// [`MAX_CHUNK_LEN`] bytes.  An empty range yields one empty chunk.
    pub fn encode_chain(&mut self, data: &[u8], offset: usize, len: usize) -> Result<ChunkChain, LzfError> {
        let end = range_end(data, offset, len)?;
        let mut chain = ChunkChain::with_capacity(chunk_count(len));
        if len == 0 {
            chain.push(Chunk::empty());
            return Ok(chain);
        }
        let mut pos = offset;
        while pos < end {
            let slice_len = (end - pos).min(MAX_CHUNK_LEN);
            chain.push(self.encode_chunk(data, pos, slice_len)?);
            pos += slice_len;
        }
        Ok(chain)
    }

    /// Compress the slice into `self.scratch`; `true` when the COMPRESSED
    /// chunk would be smaller than the RAW one.
    fn try_compress(&mut self, data: &[u8], offset: usize, len: usize) -> bool {
        if len < MIN_BLOCK_TO_COMPRESS {
            return false;
        }
        self.scratch.clear();
        let body_len = compress_block(data, offset, offset + len, &mut self.finder, &mut self.scratch);
        // COMPRESSED header is two bytes longer than RAW
        body_len + 2 < len
    }
}

fn check_slice(data: &[u8], offset: usize, len: usize) -> Result<(), LzfError> {
    if len == 0 || len > MAX_CHUNK_LEN {
        return Err(LzfError::InvalidChunkSize { len });
    }
    range_end(data, offset, len).map(|_| ())
}

fn range_end(data: &[u8], offset: usize, len: usize) -> Result<usize, LzfError> {
    offset
        .checked_add(len)
        .filter(|&end| end <= data.len())
        .ok_or(LzfError::InvalidChunkSize { len })
}

/// Encode `data` into one contiguous buffer of chunks.
pub fn encode(data: &[u8]) -> Result<Vec<u8>, LzfError> {
    encode_range(data, 0, data.len())
}

/// Encode `data[offset..offset + len]` into one contiguous buffer of chunks.
///
/// Inputs that fit in one chunk are returned as that chunk's bytes with no
/// chain and no extra copy; larger inputs are chained and then coalesced
/// into a buffer of exactly the summed chunk length.
pub fn encode_range(data: &[u8], offset: usize, len: usize) -> Result<Vec<u8>, LzfError> {
    range_end(data, offset, len)?;
    if len == 0 {
        return Ok(EMPTY_CHUNK.to_vec());
    }
    let mut enc = ChunkEncoder::new(len);
    if len <= MAX_CHUNK_LEN {
        return Ok(enc.encode_chunk(data, offset, len)?.into_bytes());
    }
    enc.encode_chain(data, offset, len)?.coalesce()
}

/// Encode `data` into a chain of chunks, for callers that write chunks out
/// one by one.
pub fn encode_chain(data: &[u8]) -> Result<ChunkChain, LzfError> {
    ChunkEncoder::new(data.len()).encode_chain(data, 0, data.len())
}

/// Encode `data` directly into `dst`, returning the encoded length.
///
/// A `dst` of [`max_encoded_len`]`(data.len())` bytes always suffices.  On
/// [`LzfError::BufferTooSmall`] the contents of `dst` are unspecified.
pub fn encode_into(data: &[u8], dst: &mut [u8]) -> Result<usize, LzfError> {
    if data.is_empty() {
        check_room(dst, 0, EMPTY_CHUNK.len())?;
        dst[..EMPTY_CHUNK.len()].copy_from_slice(&EMPTY_CHUNK);
        return Ok(EMPTY_CHUNK.len());
    }
    let mut enc = ChunkEncoder::new(data.len());
    let mut pos = 0;
    let mut at = 0;
    while pos < data.len() {
        let slice_len = (data.len() - pos).min(MAX_CHUNK_LEN);
        at = enc.encode_chunk_into(data, pos, slice_len, dst, at)?;
        pos += slice_len;
    }
    Ok(at)
}
