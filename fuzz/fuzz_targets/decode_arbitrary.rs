#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a chunk sequence.
    if let Ok(out) = lzf::decode(data) {
        assert_eq!(Ok(out.len()), lzf::decoded_len(data));
    }
    for item in lzf::frame::Chunks::new(data) {
        if item.is_err() {
            break;
        }
    }
});
