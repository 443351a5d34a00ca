//! LZF token streams: match finding, encoding, and decoding.
//!
//! Everything here works on bare token streams.  Chunk framing (`ZV`
//! headers) lives in [`crate::frame`].

pub mod compress;
pub mod decompress;
pub mod match_finder;
pub mod types;

pub use compress::{compress_block, compress_block_to_vec};
pub use decompress::{decompress_block, decompress_block_to_vec};
pub use match_finder::{Match, MatchFinder, Scan};
pub use types::{LzfError, MAX_LITERAL, MAX_MATCH, MAX_OFFSET, MIN_MATCH};
