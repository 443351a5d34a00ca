//! One framed, independently decodable chunk.

use crate::block::types::{check_room, LzfError};
use crate::frame::header::ChunkHeader;
use crate::frame::types::{ChunkKind, EMPTY_CHUNK, MAX_DECODED_CHUNK_LEN};

/// Header and body of one chunk, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    kind: ChunkKind,
    original_len: usize,
    bytes: Vec<u8>,
}

impl Chunk {
    /// The chunk that encodes an empty input.
    pub fn empty() -> Self {
        Chunk {
            kind: ChunkKind::Raw,
            original_len: 0,
            bytes: EMPTY_CHUNK.to_vec(),
        }
    }

    /// A RAW chunk holding `data` verbatim.
    ///
    /// Fails with [`LzfError::InvalidChunkSize`] if `data` is empty or longer
    /// than a 16-bit length field can describe.
    pub fn raw(data: &[u8]) -> Result<Self, LzfError> {
        let len = checked_len(data.len())?;
        let header = ChunkHeader::raw(len);
        let mut bytes = vec![0u8; header.framed_len()];
        let at = header.write(&mut bytes, 0)?;
        bytes[at..].copy_from_slice(data);
        Ok(Chunk {
            kind: ChunkKind::Raw,
            original_len: data.len(),
            bytes,
        })
    }

    /// A COMPRESSED chunk whose token stream `body` decodes to
    /// `original_len` bytes.
    pub fn compressed(original_len: usize, body: &[u8]) -> Result<Self, LzfError> {
        let header = ChunkHeader::compressed(checked_len(body.len())?, checked_len(original_len)?);
        let mut bytes = vec![0u8; header.framed_len()];
        let at = header.write(&mut bytes, 0)?;
        bytes[at..].copy_from_slice(body);
        Ok(Chunk {
            kind: ChunkKind::Compressed,
            original_len,
            bytes,
        })
    }

    /// RAW or COMPRESSED.
    #[inline]
    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    /// Source bytes this chunk represents.
    #[inline]
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Framed length: header plus body.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the framed byte buffer is empty; never true for chunks built
    /// by the constructors, which always write a header.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The framed bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the chunk, returning its framed bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Copy the framed bytes into `dst` starting at `at`.
    ///
    /// Returns `at + self.len()`.  Nothing is written unless the whole chunk
    /// fits.
    pub fn copy_to(&self, dst: &mut [u8], at: usize) -> Result<usize, LzfError> {
        let n = self.bytes.len();
        check_room(dst, at, n)?;
        dst[at..at + n].copy_from_slice(&self.bytes);
        Ok(at + n)
    }
}

fn checked_len(len: usize) -> Result<u16, LzfError> {
    if len == 0 || len > MAX_DECODED_CHUNK_LEN {
        return Err(LzfError::InvalidChunkSize { len });
    }
    Ok(len as u16)
}
