//! LZF token-stream decoder.
//!
//! Decodes one bare token stream (the body of a COMPRESSED chunk) into a
//! caller-supplied buffer.  Every read and write is bounds-checked; malformed
//! input yields [`LzfError::CorruptFormat`] and never panics.

use super::types::{LzfError, LENGTH_ESCAPE, LENGTH_SHIFT, MAX_LITERAL};

/// Decode the token stream `src` into `dst`.
///
/// Returns the number of bytes written.  A stream that would write past the
/// end of `dst` fails with [`LzfError::BufferTooSmall`].
pub fn decompress_block(src: &[u8], dst: &mut [u8]) -> Result<usize, LzfError> {
    let mut ip = 0usize;
    let mut op = 0usize;

    while ip < src.len() {
        let ctrl = src[ip] as usize;
        ip += 1;

        if ctrl < MAX_LITERAL {
            let run = ctrl + 1;
            if ip + run > src.len() {
                return Err(LzfError::CorruptFormat("literal run past end of input"));
            }
            if op + run > dst.len() {
                return Err(LzfError::BufferTooSmall {
                    needed: op + run,
                    available: dst.len(),
                });
            }
            dst[op..op + run].copy_from_slice(&src[ip..ip + run]);
            ip += run;
            op += run;
            continue;
        }

        let mut len = ctrl >> LENGTH_SHIFT;
        if len == LENGTH_ESCAPE {
            let extra = *src
                .get(ip)
                .ok_or(LzfError::CorruptFormat("truncated back-reference length"))?;
            len += extra as usize;
            ip += 1;
        }
        let low = *src
            .get(ip)
            .ok_or(LzfError::CorruptFormat("truncated back-reference offset"))?;
        ip += 1;
        let len = len + 2;
        let distance = (((ctrl & 0x1F) << 8) | low as usize) + 1;

        if distance > op {
            return Err(LzfError::CorruptFormat("back-reference before start of output"));
        }
        if op + len > dst.len() {
            return Err(LzfError::BufferTooSmall {
                needed: op + len,
                available: dst.len(),
            });
        }
        let from = op - distance;
        if distance >= len {
            dst.copy_within(from..from + len, op);
        } else {
            // overlapping copy replicates the last `distance` bytes
            for i in 0..len {
                dst[op + i] = dst[from + i];
            }
        }
        op += len;
    }

    Ok(op)
}

/// Decode `src` into a freshly allocated buffer of exactly `expected_len`
/// bytes; any other decoded length is [`LzfError::CorruptFormat`].
pub fn decompress_block_to_vec(src: &[u8], expected_len: usize) -> Result<Vec<u8>, LzfError> {
    let mut out = vec![0u8; expected_len];
    let n = decompress_block(src, &mut out).map_err(|e| match e {
        LzfError::BufferTooSmall { .. } => {
            LzfError::CorruptFormat("token stream decodes past declared length")
        }
        other => other,
    })?;
    if n != expected_len {
        return Err(LzfError::CorruptFormat("token stream shorter than declared length"));
    }
    Ok(out)
}
