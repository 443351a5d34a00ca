//! Interoperability with other `ZV` chunk producers and consumers.
//!
//! The hand-built vectors below follow the liblzf token format and the `ZV`
//! block header used by liblzf's `lzf` tool and by compress-lzf.  When a
//! system `lzf` binary is available (or named by `LZF_BIN`), the last tests
//! pipe data through it in both directions; without one they print a skip
//! message and return, so they always appear in the test count.

use std::io::Write;
use std::process::{Command, Stdio};

use lzf::{decode, encode, LzfError};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Returns the path to a system `lzf` binary, or `None` if not found.
fn system_lzf() -> Option<String> {
    if let Ok(p) = std::env::var("LZF_BIN") {
        if std::path::Path::new(&p).exists() {
            return Some(p);
        }
    }
    let out = Command::new("which").arg("lzf").output().ok()?;
    if out.status.success() {
        let path = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if !path.is_empty() && path != env!("CARGO_BIN_EXE_lzf") {
            return Some(path);
        }
    }
    None
}

/// Run `bin` with `flag`, feeding `input` on stdin; returns stdout.
fn pipe_through(bin: &str, flag: &str, input: &[u8]) -> Option<Vec<u8>> {
    let mut child = Command::new(bin)
        .arg(flag)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;
    let mut stdin = child.stdin.take()?;
    let data = input.to_vec();
    let writer = std::thread::spawn(move || stdin.write_all(&data));
    let out = child.wait_with_output().ok()?;
    writer.join().ok()?.ok()?;
    out.status.success().then_some(out.stdout)
}

fn sample() -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..4000u32 {
        data.extend_from_slice(format!("line {i:>5}: the rain in spain stays mainly\n").as_bytes());
    }
    data
}

// ─────────────────────────────────────────────────────────────────────────────
// Hand-built vectors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decodes_liblzf_style_block() {
    // "aaaaaaaaaa" as liblzf emits it: one literal, then a 9-byte copy at distance 1
    let src = [b'Z', b'V', 1, 0, 5, 0, 10, 0, b'a', 0xE0, 0, 0];
    assert_eq!(decode(&src).unwrap(), b"aaaaaaaaaa");
}

#[test]
fn decodes_block_with_far_copy() {
    // 40 literal bytes (two runs of 20), then 4 bytes copied from distance 40
    let literals: Vec<u8> = (b'A'..b'A' + 40).collect();
    let mut body = vec![19];
    body.extend_from_slice(&literals[..20]);
    body.push(19);
    body.extend_from_slice(&literals[20..]);
    body.extend_from_slice(&[2 << 5, 39]);

    let mut src = vec![b'Z', b'V', 1, 0, body.len() as u8, 0, 44];
    src.extend_from_slice(&body);

    let mut expected = literals.clone();
    expected.extend_from_slice(&literals[..4]);
    assert_eq!(decode(&src).unwrap(), expected);
}

#[test]
fn decodes_mixed_raw_and_compressed_sequence() {
    let mut src = Vec::new();
    src.extend_from_slice(b"ZV\x00\x00\x06header");
    src.extend_from_slice(&[b'Z', b'V', 1, 0, 4, 0, 6, 0, b'-', 0x60, 0]);
    src.extend_from_slice(b"ZV\x00\x00\x06footer");
    assert_eq!(decode(&src).unwrap(), b"header------footer");
}

#[test]
fn decodes_full_width_chunks_from_other_encoders() {
    // other encoders may fill chunks up to 0xFFFF bytes
    let mut src = vec![b'Z', b'V', 0, 0xFF, 0xFF];
    src.extend((0..0xFFFFu32).map(|i| (i % 241) as u8));
    // 265 bytes: one literal and a full-length copy
    src.extend_from_slice(&[b'Z', b'V', 1, 0, 5, 0x01, 0x09, 0, b'#', 0xE0, 0xFF, 0]);

    let decoded = decode(&src).unwrap();
    assert_eq!(decoded.len(), 0xFFFF + 265);
    assert_eq!(decoded[241], 0);
    assert!(decoded[0xFFFF..].iter().all(|&b| b == b'#'));
}

#[test]
fn declared_length_must_match_token_stream() {
    // same body, but the header claims a full 0xFFFF bytes
    let src = [b'Z', b'V', 1, 0, 5, 0xFF, 0xFF, 0, b'#', 0xE0, 0xFF, 0];
    assert!(matches!(decode(&src), Err(LzfError::CorruptFormat(_))));
}

#[test]
fn our_output_uses_only_format_v1_tokens() {
    // every COMPRESSED body must decode with a strict token walk
    let encoded = encode(&sample()).unwrap();
    let mut pos = 0;
    while pos < encoded.len() {
        assert_eq!(&encoded[pos..pos + 2], b"ZV");
        match encoded[pos + 2] {
            0 => {
                let len = u16::from_be_bytes([encoded[pos + 3], encoded[pos + 4]]) as usize;
                pos += 5 + len;
            }
            1 => {
                let clen = u16::from_be_bytes([encoded[pos + 3], encoded[pos + 4]]) as usize;
                let body = &encoded[pos + 7..pos + 7 + clen];
                let mut i = 0;
                while i < body.len() {
                    let ctrl = body[i];
                    if ctrl < 32 {
                        i += 1 + ctrl as usize + 1;
                    } else if ctrl >> 5 == 7 {
                        i += 3;
                    } else {
                        i += 2;
                    }
                }
                assert_eq!(i, body.len());
                pos += 7 + clen;
            }
            other => panic!("unexpected chunk type {other}"),
        }
    }
    assert_eq!(pos, encoded.len());
}

// ─────────────────────────────────────────────────────────────────────────────
// System binary
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn system_lzf_decodes_our_output() {
    let Some(bin) = system_lzf() else {
        eprintln!("skipping: no system lzf binary found");
        return;
    };
    let data = sample();
    let encoded = encode(&data).unwrap();
    match pipe_through(&bin, "-d", &encoded) {
        Some(out) => assert_eq!(out, data),
        None => eprintln!("skipping: {bin} -d did not run as a stdin filter"),
    }
}

#[test]
fn we_decode_system_lzf_output() {
    let Some(bin) = system_lzf() else {
        eprintln!("skipping: no system lzf binary found");
        return;
    };
    let data = sample();
    match pipe_through(&bin, "-c", &data) {
        Some(out) => assert_eq!(decode(&out).unwrap(), data),
        None => eprintln!("skipping: {bin} -c did not run as a stdin filter"),
    }
}
