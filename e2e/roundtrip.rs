// e2e/roundtrip.rs: whole-input encode/decode properties.
//
// Exercises the public one-shot API the way a caller would: encode a
// buffer, inspect the chunk sequence, decode it back.  Inputs cover the
// chunk-size boundaries, highly repetitive data, and incompressible data.

use lzf::frame::decompress::{chunk_count, Chunks};
use lzf::{decode, encode, encode_chain, encode_into, max_encoded_len, ChunkKind, MAX_CHUNK_LEN};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Xorshift byte generator; `alphabet` bounds the byte values to tune
/// compressibility.
fn generate(len: usize, seed: u64, alphabet: u16) -> Vec<u8> {
    let mut s = seed | 1;
    (0..len)
        .map(|_| {
            s ^= s << 13;
            s ^= s >> 7;
            s ^= s << 17;
            ((s >> 32) % u64::from(alphabet)) as u8
        })
        .collect()
}

fn assert_roundtrip(data: &[u8]) -> Vec<u8> {
    let encoded = encode(data).expect("encode");
    let decoded = decode(&encoded).expect("decode");
    assert_eq!(decoded.len(), data.len());
    assert!(decoded == data, "roundtrip mismatch for {} bytes", data.len());
    encoded
}

fn chunk_lens(encoded: &[u8]) -> Vec<usize> {
    Chunks::new(encoded)
        .map(|c| c.expect("well-formed chunk").0.framed_len())
        .collect()
}

// ── 1. Boundary sizes ────────────────────────────────────────────────────────

#[test]
fn empty_input_is_five_bytes() {
    let encoded = assert_roundtrip(&[]);
    assert_eq!(encoded, [b'Z', b'V', 0, 0, 0]);
}

#[test]
fn one_byte_is_raw() {
    let encoded = assert_roundtrip(&[0x42]);
    assert_eq!(encoded, [b'Z', b'V', 0, 0, 1, 0x42]);
}

#[test]
fn exactly_max_chunk_len_is_one_chunk() {
    for data in [vec![0u8; MAX_CHUNK_LEN], generate(MAX_CHUNK_LEN, 11, 256)] {
        let encoded = assert_roundtrip(&data);
        assert_eq!(chunk_count(&encoded), Ok(1));
    }
}

#[test]
fn one_past_max_chunk_len_is_two_chunks() {
    let data = generate(MAX_CHUNK_LEN + 1, 5, 4);
    let encoded = assert_roundtrip(&data);
    let headers: Vec<_> = Chunks::new(&encoded).map(|c| c.unwrap().0).collect();
    assert_eq!(headers.len(), 2);
    assert_eq!(headers[0].original_len, MAX_CHUNK_LEN);
    assert_eq!(headers[1].original_len, 1);
    assert_eq!(headers[1].kind, ChunkKind::Raw);
}

#[test]
fn three_chunks_and_a_byte_of_zeros() {
    let data = vec![0u8; 3 * MAX_CHUNK_LEN + 1];
    let chain = encode_chain(&data).unwrap();
    assert_eq!(chain.len(), 4);
    let sum: usize = chain.iter().map(|c| c.len()).sum();
    let coalesced = chain.coalesce().unwrap();
    assert_eq!(coalesced.len(), sum);
    assert_eq!(chunk_lens(&coalesced), [753, 753, 753, 6]);
    assert_eq!(decode(&coalesced).unwrap(), data);
}

#[test]
fn seventy_thousand_zeros() {
    let data = vec![0u8; 70_000];
    let encoded = assert_roundtrip(&data);
    let headers: Vec<_> = Chunks::new(&encoded).map(|c| c.unwrap().0).collect();
    assert_eq!(headers.len(), 2);
    assert_eq!(headers[0].original_len, 65_280);
    assert_eq!(headers[1].original_len, 4_720);
    assert!(headers.iter().all(|h| h.kind == ChunkKind::Compressed));
}

// ── 2. Size bounds ───────────────────────────────────────────────────────────

#[test]
fn output_never_exceeds_input_plus_raw_headers() {
    for (i, &len) in [1usize, 15, 16, 17, 100, 4096, 65_279, 65_281, 200_000].iter().enumerate() {
        for alphabet in [2u16, 16, 256] {
            let data = generate(len, i as u64 * 31 + u64::from(alphabet), alphabet);
            let encoded = assert_roundtrip(&data);
            assert!(
                encoded.len() <= max_encoded_len(len),
                "len {len} alphabet {alphabet}: {} > {}",
                encoded.len(),
                max_encoded_len(len)
            );
        }
    }
}

#[test]
fn short_random_input_is_raw() {
    let data = generate(40, 99, 256);
    let encoded = assert_roundtrip(&data);
    assert_eq!(encoded.len(), 5 + data.len());
    assert_eq!(encoded[2], 0);
    assert_eq!(&encoded[5..], &data[..]);
}

#[test]
fn random_input_chunks_are_all_raw() {
    let data = generate(200_000, 2024, 256);
    let encoded = assert_roundtrip(&data);
    assert_eq!(encoded.len(), data.len() + 5 * 4);
    assert!(Chunks::new(&encoded).all(|c| c.unwrap().0.kind == ChunkKind::Raw));
}

#[test]
fn text_shrinks() {
    let data = b"The quick brown fox jumps over the lazy dog. ".repeat(3000);
    let encoded = assert_roundtrip(&data);
    assert!(encoded.len() * 10 < data.len());
}

// ── 3. Determinism and API agreement ─────────────────────────────────────────

#[test]
fn encoding_is_deterministic() {
    let data = generate(150_000, 77, 8);
    assert_eq!(encode(&data).unwrap(), encode(&data).unwrap());
}

#[test]
fn caller_buffer_matches_allocating_encoder() {
    let data = generate(140_000, 8, 32);
    let expected = encode(&data).unwrap();
    let mut dst = vec![0u8; max_encoded_len(data.len())];
    let n = encode_into(&data, &mut dst).unwrap();
    assert_eq!(&dst[..n], &expected[..]);
}

#[test]
fn chunks_decode_one_at_a_time() {
    let data = generate(3 * MAX_CHUNK_LEN / 2, 4, 6);
    let chain = encode_chain(&data).unwrap();
    let mut rebuilt = Vec::new();
    for chunk in &chain {
        rebuilt.extend(decode(chunk.as_bytes()).unwrap());
    }
    assert_eq!(rebuilt, data);
}

#[test]
fn many_small_inputs() {
    for len in 0..300usize {
        let data = generate(len, len as u64, 1 + (len % 7) as u16);
        assert_roundtrip(&data);
    }
}
