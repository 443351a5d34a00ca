#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a token stream; errors are fine, panics are not.
    let mut dst = vec![0u8; 4096];
    if let Ok(n) = lzf::block::decompress_block(data, &mut dst) {
        assert!(n <= dst.len());
    }
});
