// e2e/error_handling.rs: error paths of the public API.
//
// Malformed chunk sequences must fail with CorruptFormat (never panic),
// undersized buffers with BufferTooSmall, and bad slice arguments with
// InvalidChunkSize.  Errors must also behave as ordinary std errors.

use std::error::Error;

use lzf::frame::decompress::decoded_len;
use lzf::{decode, decode_into, encode, encode_into, encode_range, ChunkEncoder, LzfError, MAX_CHUNK_LEN};

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * i / 7 % 23) as u8).collect()
}

// ── 1. Corrupt input ─────────────────────────────────────────────────────────

#[test]
fn every_truncation_is_rejected_or_shorter() {
    let data = sample(MAX_CHUNK_LEN + 3000);
    let encoded = encode(&data).unwrap();
    for cut in (1..encoded.len()).step_by(97) {
        // a cut exactly at a chunk boundary is a valid, shorter stream
        match decode(&encoded[..cut]) {
            Ok(out) => assert!(out.len() < data.len() && data.starts_with(&out)),
            Err(e) => assert!(matches!(e, LzfError::CorruptFormat(_)), "cut {cut}: {e}"),
        }
    }
}

#[test]
fn flipped_bytes_never_panic() {
    let data = sample(5000);
    let encoded = encode(&data).unwrap();
    for i in 0..encoded.len() {
        let mut bad = encoded.clone();
        bad[i] ^= 0x5A;
        if let Ok(out) = decode(&bad) {
            // a flip inside literal bytes still decodes
            assert_eq!(out.len(), data.len());
        }
    }
}

#[test]
fn garbage_is_not_lzf() {
    assert_eq!(decode(b"PK\x03\x04garbage"), Err(LzfError::CorruptFormat("bad chunk magic")));
    assert_eq!(decoded_len(b"Z"), Err(LzfError::CorruptFormat("truncated chunk header")));
}

#[test]
fn unknown_chunk_type() {
    assert_eq!(decode(b"ZV\x02\x00\x01x"), Err(LzfError::CorruptFormat("unknown chunk type")));
}

// ── 2. Buffer sizes ──────────────────────────────────────────────────────────

#[test]
fn decode_into_small_buffer() {
    let encoded = encode(&sample(1000)).unwrap();
    let mut dst = vec![0u8; 999];
    assert_eq!(
        decode_into(&encoded, &mut dst),
        Err(LzfError::BufferTooSmall { needed: 1000, available: 999 })
    );
}

#[test]
fn encode_into_small_buffer() {
    let data = sample(2 * MAX_CHUNK_LEN);
    let need = encode(&data).unwrap().len();
    let mut dst = vec![0u8; need - 1];
    assert!(matches!(encode_into(&data, &mut dst), Err(LzfError::BufferTooSmall { .. })));
    let mut dst = vec![0u8; need];
    assert_eq!(encode_into(&data, &mut dst), Ok(need));
}

// ── 3. Slice arguments ───────────────────────────────────────────────────────

#[test]
fn encoder_rejects_bad_slices() {
    let data = sample(MAX_CHUNK_LEN + 10);
    let mut enc = ChunkEncoder::new(data.len());
    assert_eq!(enc.encode_chunk(&data, 0, 0), Err(LzfError::InvalidChunkSize { len: 0 }));
    assert_eq!(
        enc.encode_chunk(&data, 0, MAX_CHUNK_LEN + 1),
        Err(LzfError::InvalidChunkSize { len: MAX_CHUNK_LEN + 1 })
    );
    // the encoder is still usable after an error
    let chunk = enc.encode_chunk(&data, 10, MAX_CHUNK_LEN).unwrap();
    assert_eq!(decode(chunk.as_bytes()).unwrap(), &data[10..]);
}

#[test]
fn range_overflow() {
    let data = sample(10);
    assert_eq!(encode_range(&data, usize::MAX, 2), Err(LzfError::InvalidChunkSize { len: 2 }));
}

// ── 4. Error trait behaviour ─────────────────────────────────────────────────

#[test]
fn errors_box_into_dyn_error() {
    fn run() -> Result<Vec<u8>, Box<dyn Error>> {
        Ok(decode(b"nope!")?)
    }
    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "ERROR_corruptFormat: bad chunk magic");
    assert!(err.downcast_ref::<LzfError>().is_some());
}

#[test]
fn error_names_are_stable() {
    assert_eq!(LzfError::InvalidChunkSize { len: 1 }.error_name(), "ERROR_invalidChunkSize");
    assert_eq!(
        LzfError::BufferTooSmall { needed: 2, available: 1 }.error_name(),
        "ERROR_bufferTooSmall"
    );
    assert_eq!(
        LzfError::BufferTooSmall { needed: 2, available: 1 }.to_string(),
        "ERROR_bufferTooSmall: need 2 bytes, only 1 available"
    );
}
