// Tests for the ZV chunk-sequence decoder (frame::decompress).

use lzf::block::types::LzfError;
use lzf::frame::compress::encode;
use lzf::frame::decompress::{chunk_count, decode, decode_into, decoded_len, Chunks};
use lzf::frame::types::{ChunkKind, MAX_DECODED_CHUNK_LEN};

#[test]
fn iterates_headers_and_bodies() {
    let src = [
        b'Z', b'V', 0, 0, 2, b'h', b'i', // RAW "hi"
        b'Z', b'V', 1, 0, 5, 0, 5, 1, b'a', b'b', 0x20, 1, // COMPRESSED "ababa"
    ];
    let items: Vec<_> = Chunks::new(&src).collect::<Result<_, _>>().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].0.kind, ChunkKind::Raw);
    assert_eq!(items[0].1, b"hi");
    assert_eq!(items[1].0.kind, ChunkKind::Compressed);
    assert_eq!(items[1].0.original_len, 5);
    assert_eq!(decode(&src).unwrap(), b"hiababa");
}

#[test]
fn iterator_stops_after_error() {
    let src = b"ZV\0\0\x01aXX\0\0\x01b";
    let mut it = Chunks::new(src);
    assert!(it.next().unwrap().is_ok());
    assert_eq!(it.next(), Some(Err(LzfError::CorruptFormat("bad chunk magic"))));
    assert_eq!(it.next(), None);
}

#[test]
fn accepts_raw_chunk_of_full_sixteen_bits() {
    let mut src = vec![b'Z', b'V', 0, 0xFF, 0xFF];
    src.extend(std::iter::repeat(7u8).take(MAX_DECODED_CHUNK_LEN));
    assert_eq!(decoded_len(&src), Ok(MAX_DECODED_CHUNK_LEN));
    let out = decode(&src).unwrap();
    assert_eq!(out.len(), MAX_DECODED_CHUNK_LEN);
}

#[test]
fn concatenated_encodings_decode_as_one() {
    let a = encode(b"first part of the stream, first part").unwrap();
    let b = encode(b"").unwrap();
    let c = encode(b"second part").unwrap();
    let joined = [a, b, c].concat();
    assert_eq!(chunk_count(&joined), Ok(3));
    assert_eq!(
        decode(&joined).unwrap(),
        b"first part of the stream, first partsecond part"
    );
}

#[test]
fn decode_into_exact_and_short_buffers() {
    let src = encode(&[b'w'; 300]).unwrap();
    let mut exact = vec![0u8; 300];
    assert_eq!(decode_into(&src, &mut exact), Ok(300));
    assert!(exact.iter().all(|&b| b == b'w'));

    let mut short = vec![0u8; 299];
    assert_eq!(
        decode_into(&src, &mut short),
        Err(LzfError::BufferTooSmall { needed: 300, available: 299 })
    );
}

#[test]
fn corrupt_token_stream_inside_chunk() {
    // back-reference with nothing decoded yet
    let src = [b'Z', b'V', 1, 0, 2, 0, 3, 0x20, 0];
    assert_eq!(
        decode(&src),
        Err(LzfError::CorruptFormat("back-reference before start of output"))
    );
}

#[test]
fn header_errors_surface_from_decoded_len() {
    assert_eq!(decoded_len(b"ZV"), Err(LzfError::CorruptFormat("truncated chunk header")));
    assert_eq!(chunk_count(b"ZV\x07\0\0"), Err(LzfError::CorruptFormat("unknown chunk type")));
}

#[test]
fn forged_lengths_fail_without_huge_allocation() {
    // empty COMPRESSED bodies that each claim 0xFFFF output bytes
    let forged = [b'Z', b'V', 1, 0, 0, 0xFF, 0xFF].repeat(2_000_000);
    assert_eq!(
        decode(&forged),
        Err(LzfError::CorruptFormat("declared length exceeds what the body can hold"))
    );
    assert!(decoded_len(&forged).is_err());
}

#[test]
fn bad_chunk_after_good_ones_is_reported() {
    let mut src = encode(&[b'g'; 1000]).unwrap();
    src.extend_from_slice(&[b'Z', b'V', 1, 0, 1, 0xFF, 0xFF, 0x00]);
    assert!(matches!(decode(&src), Err(LzfError::CorruptFormat(_))));
}
