// Tests for the chunk chain and coalescing (frame::chain).

use lzf::block::types::LzfError;
use lzf::frame::chain::ChunkChain;
use lzf::frame::chunk::Chunk;

fn chain_of(payloads: &[&[u8]]) -> ChunkChain {
    let mut chain = ChunkChain::new();
    for p in payloads {
        chain.push(Chunk::raw(p).unwrap());
    }
    chain
}

#[test]
fn push_returns_index_and_tracks_total() {
    let mut chain = ChunkChain::with_capacity(2);
    assert_eq!(chain.push(Chunk::raw(b"a").unwrap()), 0);
    assert_eq!(chain.push(Chunk::raw(b"bb").unwrap()), 1);
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.total_len(), 6 + 7);
}

#[test]
fn successor_walk_visits_every_chunk_once() {
    let chain = chain_of(&[b"1", b"22", b"333", b"4444"]);
    let mut visited = Vec::new();
    let mut cur = chain.first();
    while let Some(i) = cur {
        visited.push(i);
        cur = chain.next(i);
    }
    assert_eq!(visited, [0, 1, 2, 3]);
    assert_eq!(chain.next(3), None);
    assert!(chain.get(4).is_none());
}

#[test]
fn coalesce_is_concatenation_in_order() {
    let chain = chain_of(&[b"first", b"second", b"third"]);
    let flat = chain.coalesce().unwrap();
    let expected: Vec<u8> = chain.iter().flat_map(|c| c.as_bytes().to_vec()).collect();
    assert_eq!(flat, expected);
    assert_eq!(flat.len(), chain.total_len());
}

#[test]
fn coalesce_of_empty_chain() {
    let chain = ChunkChain::new();
    assert!(chain.is_empty());
    assert_eq!(chain.first(), None);
    assert_eq!(chain.coalesce(), Ok(Vec::new()));
}

#[test]
fn copy_to_checks_room_for_whole_chain() {
    let chain = chain_of(&[b"abc", b"def"]);
    let mut dst = vec![0u8; chain.total_len() - 1];
    assert_eq!(
        chain.copy_to(&mut dst, 0),
        Err(LzfError::BufferTooSmall { needed: 16, available: 15 })
    );
    // nothing was written
    assert!(dst.iter().all(|&b| b == 0));
}

#[test]
fn write_to_streams_all_bytes() {
    let chain = chain_of(&[b"stream", b"me"]);
    let mut sink = Vec::new();
    assert_eq!(chain.write_to(&mut sink).unwrap(), chain.total_len());
    assert_eq!(sink, chain.coalesce().unwrap());
}

#[test]
fn owned_iteration_yields_chunks() {
    let chain = chain_of(&[b"x", b"y"]);
    let lens: Vec<usize> = chain.into_iter().map(|c| c.original_len()).collect();
    assert_eq!(lens, [1, 1]);
}
