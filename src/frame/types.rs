//! `ZV` chunk framing constants and the chunk kind enum.
//!
//! Every chunk starts with the magic bytes `Z` `V` and a type byte:
//!
//! | Type | Header                                   | Body                     |
//! |------|------------------------------------------|--------------------------|
//! | `0`  | `Z V 0 len:u16be`                        | `len` raw bytes          |
//! | `1`  | `Z V 1 clen:u16be ulen:u16be`            | `clen` token-stream bytes |
//!
//! This is the block layout written by the `lzf` command-line utility.

/// First magic byte.
pub const BYTE_Z: u8 = b'Z';

/// Second magic byte.
pub const BYTE_V: u8 = b'V';

/// Type byte of a chunk stored without compression.
pub const BLOCK_TYPE_NON_COMPRESSED: u8 = 0;

/// Type byte of a chunk holding an LZF token stream.
pub const BLOCK_TYPE_COMPRESSED: u8 = 1;

/// Header length of a RAW chunk.
pub const HEADER_LEN_NOT_COMPRESSED: usize = 5;

/// Header length of a COMPRESSED chunk.
pub const HEADER_LEN_COMPRESSED: usize = 7;

/// Most source bytes the encoder puts in one chunk.
///
/// Decoders accept anything the 16-bit length fields can hold
/// ([`MAX_DECODED_CHUNK_LEN`]); the encoder stays a little below that.
pub const MAX_CHUNK_LEN: usize = 0xFF00;

/// Most source bytes a chunk produced by any encoder may represent.
pub const MAX_DECODED_CHUNK_LEN: usize = 0xFFFF;

/// The five bytes that encode an empty input.
pub const EMPTY_CHUNK: [u8; HEADER_LEN_NOT_COMPRESSED] =
    [BYTE_Z, BYTE_V, BLOCK_TYPE_NON_COMPRESSED, 0, 0];

/// Whether a chunk body is stored as-is or as a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChunkKind {
    /// Body holds the original bytes.
    Raw = BLOCK_TYPE_NON_COMPRESSED,
    /// Body holds an LZF token stream.
    Compressed = BLOCK_TYPE_COMPRESSED,
}

impl ChunkKind {
    /// Map a header type byte to a kind.
    pub fn from_type_byte(b: u8) -> Option<Self> {
        match b {
            BLOCK_TYPE_NON_COMPRESSED => Some(ChunkKind::Raw),
            BLOCK_TYPE_COMPRESSED => Some(ChunkKind::Compressed),
            _ => None,
        }
    }

    /// The header type byte for this kind.
    #[inline]
    pub fn type_byte(self) -> u8 {
        self as u8
    }

    /// Header length for chunks of this kind.
    #[inline]
    pub fn header_len(self) -> usize {
        match self {
            ChunkKind::Raw => HEADER_LEN_NOT_COMPRESSED,
            ChunkKind::Compressed => HEADER_LEN_COMPRESSED,
        }
    }
}
