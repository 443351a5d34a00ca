#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Bare token stream, no chunk framing.
    let body = lzf::block::compress_block_to_vec(data);
    assert!(body.len() <= lzf::block::types::max_compressed_body(data.len()));

    let recovered = lzf::block::decompress_block_to_vec(&body, data.len())
        .expect("encoder output must decode");
    assert_eq!(recovered, data, "token stream round-trip mismatch");
});
