#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let encoded = lzf::encode(data).expect("encode");
    assert!(encoded.len() <= lzf::max_encoded_len(data.len()));

    // caller-buffer path must produce identical bytes
    let mut dst = vec![0u8; lzf::max_encoded_len(data.len())];
    let n = lzf::encode_into(data, &mut dst).expect("encode_into");
    assert_eq!(&dst[..n], &encoded[..]);

    let decoded = lzf::decode(&encoded).expect("encoder output must decode");
    assert_eq!(decoded, data, "chunk round-trip mismatch");
});
