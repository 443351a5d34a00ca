// Tests for the 3-byte-prefix match finder (block::match_finder).

use lzf::block::match_finder::{hash_table_len, Match, MatchFinder, Scan, MAX_HASH_SIZE, MIN_HASH_SIZE};
use lzf::block::types::{MAX_MATCH, MIN_MATCH};

fn scan_all(data: &[u8], chunk_start: usize) -> Vec<Scan> {
    let mut mf = MatchFinder::new(data.len());
    (chunk_start..data.len())
        .map(|pos| mf.find_match(data, chunk_start, pos, data.len()))
        .collect()
}

#[test]
fn table_size_follows_input_length() {
    assert_eq!(MatchFinder::new(0).table_len(), MIN_HASH_SIZE);
    assert_eq!(MatchFinder::new(300).table_len(), 1024);
    assert_eq!(MatchFinder::new(1 << 20).table_len(), MAX_HASH_SIZE);
    for len in [1usize, 200, 5000, 70_000] {
        assert!(hash_table_len(len).is_power_of_two());
    }
}

#[test]
fn no_match_in_distinct_bytes() {
    let data: Vec<u8> = (0u8..64).collect();
    assert!(scan_all(&data, 0).iter().all(|s| *s == Scan::InLiteralRun));
}

#[test]
fn match_extends_as_far_as_bytes_agree() {
    let data = b"abcdefg-abcdeXg";
    let scans = scan_all(data, 0);
    assert_eq!(scans[8], Scan::MatchFound(Match { offset: 8, len: 5 }));
}

#[test]
fn self_overlapping_match() {
    let data = [b'z'; 20];
    let scans = scan_all(&data, 0);
    assert_eq!(scans[0], Scan::InLiteralRun);
    assert_eq!(scans[1], Scan::MatchFound(Match { offset: 1, len: 19 }));
}

#[test]
fn found_match_has_legal_length() {
    let data = b"xy".repeat(400);
    for scan in scan_all(&data, 0) {
        if let Scan::MatchFound(m) = scan {
            assert!(m.len >= MIN_MATCH && m.len <= MAX_MATCH);
            assert_eq!(m.offset % 2, 0);
        }
    }
}

#[test]
fn chunk_start_hides_earlier_positions() {
    let data = b"quartz|quartz|quartz";
    let mut mf = MatchFinder::new(data.len());
    for pos in 0..7 {
        mf.insert(data, pos, data.len());
    }
    // "quartz" at 7 would match position 0, which lies before the bound
    assert_eq!(mf.find_match(data, 7, 7, data.len()), Scan::InLiteralRun);
    // the probe at 7 was still recorded, so 14 finds it
    for pos in 8..14 {
        mf.insert(data, pos, data.len());
    }
    assert_eq!(
        mf.find_match(data, 7, 14, data.len()),
        Scan::MatchFound(Match { offset: 7, len: 6 })
    );
}

#[test]
fn end_bound_limits_match() {
    let data = b"abcdabcdabcd";
    let mut mf = MatchFinder::new(data.len());
    for pos in 0..4 {
        mf.insert(data, pos, 8);
    }
    assert_eq!(
        mf.find_match(data, 0, 4, 8),
        Scan::MatchFound(Match { offset: 4, len: 4 })
    );
}
