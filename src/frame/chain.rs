//! Ordered chunk chain and coalescing.
//!
//! Chunks are appended in input order and addressed by index; the chunk at
//! index `i + 1` is the successor of the chunk at `i`.  The chain owns every
//! chunk, so a chunk can belong to at most one chain and cycles cannot be
//! built.

use std::io::{self, Write};

use crate::block::types::{check_room, LzfError};
use crate::frame::chunk::Chunk;

/// Chunks produced for one input, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkChain {
    chunks: Vec<Chunk>,
    total_len: usize,
}

impl ChunkChain {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty chain with room for `n` chunks.
    pub fn with_capacity(n: usize) -> Self {
        ChunkChain {
            chunks: Vec::with_capacity(n),
            total_len: 0,
        }
    }

    /// Append `chunk` as the successor of the current last chunk and return
    /// its index.
    pub fn push(&mut self, chunk: Chunk) -> usize {
        self.total_len += chunk.len();
        self.chunks.push(chunk);
        self.chunks.len() - 1
    }

    /// Index of the first chunk, if any.
    pub fn first(&self) -> Option<usize> {
        if self.chunks.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Index of the chunk following `idx`, if any.
    pub fn next(&self, idx: usize) -> Option<usize> {
        let n = idx + 1;
        if n < self.chunks.len() {
            Some(n)
        } else {
            None
        }
    }

    /// The chunk at `idx`.
    pub fn get(&self, idx: usize) -> Option<&Chunk> {
        self.chunks.get(idx)
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// `true` when no chunk has been pushed.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    /// Sum of every chunk's framed length.
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Concatenate all chunks into one buffer of exactly
    /// [`total_len`](Self::total_len) bytes.
    pub fn coalesce(&self) -> Result<Vec<u8>, LzfError> {
        let mut out = vec![0u8; self.total_len];
        self.copy_to(&mut out, 0)?;
        Ok(out)
    }

    /// Copy every chunk into `dst` starting at `at`, in order; returns the
    /// position after the last chunk.
    pub fn copy_to(&self, dst: &mut [u8], at: usize) -> Result<usize, LzfError> {
        check_room(dst, at, self.total_len)?;
        let mut ptr = at;
        for chunk in &self.chunks {
            ptr = chunk.copy_to(dst, ptr)?;
        }
        Ok(ptr)
    }

    /// Write every chunk to `w` in order; returns the bytes written.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        for chunk in &self.chunks {
            w.write_all(chunk.as_bytes())?;
        }
        Ok(self.total_len)
    }
}

impl<'a> IntoIterator for &'a ChunkChain {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

impl IntoIterator for ChunkChain {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}
