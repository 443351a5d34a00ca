//! Chunk header parsing and serialisation.

use crate::block::types::{check_room, read_be16, write_be16, LzfError};
use crate::frame::types::{
    ChunkKind, BYTE_V, BYTE_Z, HEADER_LEN_COMPRESSED, HEADER_LEN_NOT_COMPRESSED,
};

/// Decoded `ZV` chunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// RAW or COMPRESSED.
    pub kind: ChunkKind,
    /// Bytes of body following the header.
    pub body_len: usize,
    /// Source bytes the chunk decodes to.
    pub original_len: usize,
}

impl ChunkHeader {
    /// Header for a RAW chunk of `len` bytes.
    pub fn raw(len: u16) -> Self {
        ChunkHeader {
            kind: ChunkKind::Raw,
            body_len: len as usize,
            original_len: len as usize,
        }
    }

    /// Header for a COMPRESSED chunk.
    pub fn compressed(body_len: u16, original_len: u16) -> Self {
        ChunkHeader {
            kind: ChunkKind::Compressed,
            body_len: body_len as usize,
            original_len: original_len as usize,
        }
    }

    /// Header length in bytes.
    #[inline]
    pub fn header_len(&self) -> usize {
        self.kind.header_len()
    }

    /// Header plus body length.
    #[inline]
    pub fn framed_len(&self) -> usize {
        self.header_len() + self.body_len
    }

    /// Parse the header at the start of `src`.
    ///
    /// Only the header bytes are examined; the caller checks that the body
    /// is present.
    pub fn parse(src: &[u8]) -> Result<Self, LzfError> {
        if src.len() < HEADER_LEN_NOT_COMPRESSED {
            return Err(LzfError::CorruptFormat("truncated chunk header"));
        }
        if src[0] != BYTE_Z || src[1] != BYTE_V {
            return Err(LzfError::CorruptFormat("bad chunk magic"));
        }
        let kind = ChunkKind::from_type_byte(src[2])
            .ok_or(LzfError::CorruptFormat("unknown chunk type"))?;
        match kind {
            ChunkKind::Raw => Ok(ChunkHeader::raw(read_be16(src, 3))),
            ChunkKind::Compressed => {
                if src.len() < HEADER_LEN_COMPRESSED {
                    return Err(LzfError::CorruptFormat("truncated chunk header"));
                }
                Ok(ChunkHeader::compressed(read_be16(src, 3), read_be16(src, 5)))
            }
        }
    }

    /// Write the header into `dst` at `at`; returns the position after it.
    ///
    /// Lengths must fit in 16 bits, which holds for every header built by
    /// [`ChunkHeader::raw`] / [`ChunkHeader::compressed`].
    pub fn write(&self, dst: &mut [u8], at: usize) -> Result<usize, LzfError> {
        let n = self.header_len();
        check_room(dst, at, n)?;
        dst[at] = BYTE_Z;
        dst[at + 1] = BYTE_V;
        dst[at + 2] = self.kind.type_byte();
        write_be16(dst, at + 3, self.body_len as u16);
        if self.kind == ChunkKind::Compressed {
            write_be16(dst, at + 5, self.original_len as u16);
        }
        Ok(at + n)
    }
}
