// Tests for the LZF token-stream decoder (block::decompress).
//
// Hand-built token streams exercise every token shape; malformed streams
// must produce an error and never panic.

use lzf::block::compress::compress_block_to_vec;
use lzf::block::decompress::{decompress_block, decompress_block_to_vec};
use lzf::block::types::LzfError;

// ─────────────────────────────────────────────────────────────────────────────
// Hand-crafted streams
// ─────────────────────────────────────────────────────────────────────────────

// literal run "Hello"
const STREAM_HELLO: &[u8] = &[4, b'H', b'e', b'l', b'l', b'o'];

// "ab", then copy 6 bytes from distance 2
const STREAM_ABAB: &[u8] = &[1, b'a', b'b', 4 << 5, 1];

#[test]
fn decodes_plain_literals() {
    assert_eq!(decompress_block_to_vec(STREAM_HELLO, 5).unwrap(), b"Hello");
}

#[test]
fn decodes_overlapping_period_two() {
    assert_eq!(decompress_block_to_vec(STREAM_ABAB, 8).unwrap(), b"abababab");
}

#[test]
fn decodes_non_overlapping_copy() {
    // "abcdef", then copy 3 bytes from distance 6
    let src = [5, b'a', b'b', b'c', b'd', b'e', b'f', 1 << 5, 5];
    assert_eq!(decompress_block_to_vec(&src, 9).unwrap(), b"abcdefabc");
}

#[test]
fn decodes_longest_match() {
    let src = [0, b'r', 0xE0, 255, 0];
    let out = decompress_block_to_vec(&src, 265).unwrap();
    assert!(out.iter().all(|&b| b == b'r'));
}

#[test]
fn decodes_farthest_offset() {
    // 8192 literal bytes, then 3 bytes copied from distance 8192
    let mut plain: Vec<u8> = (0..8192u32).map(|i| (i * 7 % 253) as u8).collect();
    let mut src = Vec::new();
    for run in plain.chunks(32) {
        src.push((run.len() - 1) as u8);
        src.extend_from_slice(run);
    }
    src.extend_from_slice(&[0x20 | 0x1F, 0xFF]);
    let copied = plain[..3].to_vec();
    plain.extend_from_slice(&copied);
    assert_eq!(decompress_block_to_vec(&src, plain.len()).unwrap(), plain);
}

#[test]
fn empty_stream_decodes_to_nothing() {
    let mut dst = [0u8; 4];
    assert_eq!(decompress_block(&[], &mut dst), Ok(0));
    assert_eq!(decompress_block_to_vec(&[], 0), Ok(Vec::new()));
}

#[test]
fn larger_destination_reports_written_count() {
    let mut dst = [0u8; 64];
    assert_eq!(decompress_block(STREAM_ABAB, &mut dst), Ok(8));
    assert_eq!(&dst[..8], b"abababab");
    assert!(dst[8..].iter().all(|&b| b == 0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn back_ref_as_first_token_is_corrupt() {
    let mut dst = [0u8; 16];
    assert_eq!(
        decompress_block(&[0x20, 0], &mut dst),
        Err(LzfError::CorruptFormat("back-reference before start of output"))
    );
}

#[test]
fn overflowing_literal_reports_sizes() {
    let mut dst = [0u8; 4];
    assert_eq!(
        decompress_block(STREAM_HELLO, &mut dst),
        Err(LzfError::BufferTooSmall { needed: 5, available: 4 })
    );
}

#[test]
fn overflowing_back_ref_reports_sizes() {
    let mut dst = [0u8; 5];
    assert_eq!(
        decompress_block(STREAM_ABAB, &mut dst),
        Err(LzfError::BufferTooSmall { needed: 8, available: 5 })
    );
}

#[test]
fn to_vec_turns_overflow_into_corruption() {
    assert!(matches!(
        decompress_block_to_vec(STREAM_ABAB, 4),
        Err(LzfError::CorruptFormat(_))
    ));
}

#[test]
fn every_truncation_of_a_valid_stream_fails_cleanly() {
    let plain = b"truncate me, truncate me, truncate me please".to_vec();
    let body = compress_block_to_vec(&plain);
    for cut in 0..body.len() {
        let r = decompress_block_to_vec(&body[..cut], plain.len());
        assert!(r.is_err(), "prefix of {cut} bytes decoded");
    }
}

#[test]
fn arbitrary_bytes_never_panic() {
    let mut seed = 0x2545_F491_4F6C_DD1Du64;
    let mut dst = vec![0u8; 512];
    for _ in 0..2000 {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let len = (seed % 40) as usize;
        let src: Vec<u8> = (0..len).map(|i| (seed >> (i % 56)) as u8).collect();
        let _ = decompress_block(&src, &mut dst);
    }
}
