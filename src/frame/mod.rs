//! `ZV` chunk framing: chunk construction, chaining, the one-shot encode
//! driver, and the chunk-sequence decoder.

pub mod chain;
pub mod chunk;
pub mod compress;
pub mod decompress;
pub mod header;
pub mod types;

pub use chain::ChunkChain;
pub use chunk::Chunk;
pub use compress::{
    encode, encode_chain, encode_into, encode_range, max_encoded_len, ChunkEncoder,
};
pub use decompress::{decode, decode_into, decoded_len, Chunks};
pub use header::ChunkHeader;
pub use types::{
    ChunkKind, EMPTY_CHUNK, HEADER_LEN_COMPRESSED, HEADER_LEN_NOT_COMPRESSED, MAX_CHUNK_LEN,
};
