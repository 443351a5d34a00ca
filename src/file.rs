//! File-level compress / decompress / test operations used by the CLI.
//!
//! Each operation reads its whole input into memory, runs the in-memory
//! codec, and writes the result in one pass; `-` names stdin or stdout.
//! Codec errors surface as `io::ErrorKind::InvalidData`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use filetime::FileTime;

use crate::block::types::LzfError;
use crate::config::STDIO_MARK;
use crate::displaylevel;
use crate::frame::compress::encode_chain;
use crate::frame::decompress::{decode, Chunks};

/// File-handling preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefs {
    /// Replace an existing output file.
    pub overwrite: bool,
    /// Delete the input file once the output is complete.
    pub remove_src_file: bool,
    /// Copy the input's modification time to the output file.
    pub preserve_mtime: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            overwrite: false,
            remove_src_file: false,
            preserve_mtime: true,
        }
    }
}

/// Byte and chunk counts for one processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStats {
    /// Bytes read.
    pub bytes_in: u64,
    /// Bytes written (decoded bytes in test mode).
    pub bytes_out: u64,
    /// Chunks encoded or decoded.
    pub chunks: usize,
}

impl FileStats {
    /// Output size as a percentage of input size; 0 for empty input.
    pub fn ratio_percent(&self) -> f64 {
        if self.bytes_in == 0 {
            0.0
        } else {
            self.bytes_out as f64 / self.bytes_in as f64 * 100.0
        }
    }
}

fn invalid_data(e: LzfError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

/// Read all of `path`, or stdin for `-`.
pub fn read_input(path: &str) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if path == STDIO_MARK {
        io::stdin().lock().read_to_end(&mut buf)?;
    } else {
        File::open(path)?.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

/// Open `path` for writing, or stdout for `-`.
///
/// An existing file is only replaced when `prefs.overwrite` is set.
pub fn open_output(path: &str, prefs: &Prefs) -> io::Result<Box<dyn Write>> {
    if path == STDIO_MARK {
        return Ok(Box::new(io::stdout().lock()));
    }
    if !prefs.overwrite && Path::new(path).exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{path} already exists; use -f to overwrite"),
        ));
    }
    Ok(Box::new(BufWriter::new(File::create(path)?)))
}

/// Copy the modification time of `src` to `dst`.
pub fn copy_mtime(src: &str, dst: &str) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    let mtime = FileTime::from_last_modification_time(&meta);
    filetime::set_file_mtime(dst, mtime)
}

fn finish(input: &str, output: Option<&str>, prefs: &Prefs) -> io::Result<()> {
    if input == STDIO_MARK {
        return Ok(());
    }
    if let Some(output) = output.filter(|&o| o != STDIO_MARK) {
        if prefs.preserve_mtime {
            copy_mtime(input, output)?;
        }
    }
    if prefs.remove_src_file {
        fs::remove_file(input)?;
        displaylevel!(3, "removed {}\n", input);
    }
    Ok(())
}

fn write_output(output: &str, prefs: &Prefs, data: &[u8]) -> io::Result<()> {
    let mut w = open_output(output, prefs)?;
    w.write_all(data)?;
    w.flush()
}

/// Compress `input` into `output`.
pub fn compress_filename(input: &str, output: &str, prefs: &Prefs) -> io::Result<FileStats> {
    let data = read_input(input)?;
    let chain = encode_chain(&data).map_err(invalid_data)?;

    for (i, chunk) in chain.iter().enumerate() {
        displaylevel!(
            4,
            "chunk {:>5}: {:?} {} -> {} bytes\n",
            i,
            chunk.kind(),
            chunk.original_len(),
            chunk.len()
        );
    }

    let mut w = open_output(output, prefs)?;
    let written = chain.write_to(&mut w)?;
    w.flush()?;
    drop(w);
    finish(input, Some(output), prefs)?;

    let stats = FileStats {
        bytes_in: data.len() as u64,
        bytes_out: written as u64,
        chunks: chain.len(),
    };
    displaylevel!(
        2,
        "{:<20} : {:6.2}% ({} => {} bytes, {} chunks, {})\n",
        input,
        stats.ratio_percent(),
        stats.bytes_in,
        stats.bytes_out,
        stats.chunks,
        output
    );
    Ok(stats)
}

/// Decompress `input` into `output`.
pub fn decompress_filename(input: &str, output: &str, prefs: &Prefs) -> io::Result<FileStats> {
    let data = read_input(input)?;
    let decoded = decode(&data).map_err(invalid_data)?;
    let chunks = Chunks::new(&data).count();

    write_output(output, prefs, &decoded)?;
    finish(input, Some(output), prefs)?;

    let stats = FileStats {
        bytes_in: data.len() as u64,
        bytes_out: decoded.len() as u64,
        chunks,
    };
    displaylevel!(
        2,
        "{:<20} : decoded {} bytes from {} chunks ({})\n",
        input,
        stats.bytes_out,
        stats.chunks,
        output
    );
    Ok(stats)
}

/// Decode `input` and discard the result.
pub fn test_filename(input: &str) -> io::Result<FileStats> {
    let data = read_input(input)?;
    let decoded = decode(&data).map_err(invalid_data)?;
    let stats = FileStats {
        bytes_in: data.len() as u64,
        bytes_out: decoded.len() as u64,
        chunks: Chunks::new(&data).count(),
    };
    displaylevel!(2, "{:<20} : OK ({} bytes)\n", input, stats.bytes_out);
    Ok(stats)
}
