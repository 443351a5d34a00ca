// Tests for immutable framed chunks (frame::chunk).

use lzf::block::types::LzfError;
use lzf::frame::chunk::Chunk;
use lzf::frame::types::{ChunkKind, EMPTY_CHUNK, MAX_DECODED_CHUNK_LEN};

#[test]
fn empty_chunk_is_five_header_bytes() {
    let c = Chunk::empty();
    assert_eq!(c.kind(), ChunkKind::Raw);
    assert_eq!(c.original_len(), 0);
    assert_eq!(c.as_bytes(), &EMPTY_CHUNK);
    assert!(!c.is_empty());
}

#[test]
fn raw_chunk_carries_payload_verbatim() {
    let payload: Vec<u8> = (0u8..=99).collect();
    let c = Chunk::raw(&payload).unwrap();
    assert_eq!(c.len(), 105);
    assert_eq!(&c.as_bytes()[..5], &[b'Z', b'V', 0, 0, 100]);
    assert_eq!(&c.as_bytes()[5..], &payload[..]);
}

#[test]
fn compressed_chunk_header_fields() {
    let c = Chunk::compressed(9, &[0, b'x', 0xE0, 0, 0]).unwrap();
    assert_eq!(c.kind(), ChunkKind::Compressed);
    assert_eq!(c.original_len(), 9);
    assert_eq!(c.as_bytes(), &[b'Z', b'V', 1, 0, 5, 0, 9, 0, b'x', 0xE0, 0, 0]);
}

#[test]
fn length_limits() {
    assert_eq!(Chunk::raw(&[]), Err(LzfError::InvalidChunkSize { len: 0 }));
    let big = vec![0u8; MAX_DECODED_CHUNK_LEN + 1];
    assert_eq!(
        Chunk::raw(&big),
        Err(LzfError::InvalidChunkSize { len: MAX_DECODED_CHUNK_LEN + 1 })
    );
    assert!(Chunk::raw(&big[..MAX_DECODED_CHUNK_LEN]).is_ok());
    assert_eq!(
        Chunk::compressed(0, &[1, 2]),
        Err(LzfError::InvalidChunkSize { len: 0 })
    );
}

#[test]
fn copy_to_returns_end_position() {
    let c = Chunk::raw(b"abc").unwrap();
    let mut dst = [0xEEu8; 12];
    assert_eq!(c.copy_to(&mut dst, 2), Ok(10));
    assert_eq!(&dst[2..10], b"ZV\0\0\x03abc");
    assert_eq!(dst[0], 0xEE);
    assert_eq!(dst[10], 0xEE);
}

#[test]
fn copy_to_refuses_short_destination() {
    let c = Chunk::raw(b"abc").unwrap();
    let mut dst = [0u8; 10];
    assert_eq!(
        c.copy_to(&mut dst, 3),
        Err(LzfError::BufferTooSmall { needed: 8, available: 7 })
    );
    assert!(dst.iter().all(|&b| b == 0));
}

#[test]
fn into_bytes_moves_the_buffer() {
    let c = Chunk::raw(b"xyz").unwrap();
    let expected = c.as_bytes().to_vec();
    assert_eq!(c.into_bytes(), expected);
}
