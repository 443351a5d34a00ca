// lzf: LZF chunked block codec (ZV framing) and command-line tool

pub mod config;
pub mod block;
pub mod frame;
pub mod file;
pub mod cli;

// ── Version constants ────────────────────────────────────────────────────────
pub const LZF_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string.
pub fn version_string() -> &'static str {
    LZF_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::types::LzfError;
pub use frame::compress::{encode, encode_chain, encode_into, encode_range, max_encoded_len, ChunkEncoder};
pub use frame::decompress::{decode, decode_into, decoded_len};
pub use frame::types::{ChunkKind, MAX_CHUNK_LEN};
pub use frame::{Chunk, ChunkChain};
