//! Operation mode selection and output-name derivation.

use crate::config::{LZF_EXTENSION, STDIO_MARK};

/// What the CLI should do with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Decompress if the input ends in `.lzf`, compress otherwise.
    Auto,
    /// Encode the input into `ZV` chunks.
    Compress,
    /// Decode `ZV` chunks back to the original bytes.
    Decompress,
    /// Decode and discard, reporting only whether the input is valid.
    Test,
}

/// Infer the operation mode from `filename`'s extension.
pub fn determine_op_mode(filename: &str) -> OpMode {
    if filename.ends_with(LZF_EXTENSION) {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

/// Default output name for `input` under `mode`.
///
/// Compression appends `.lzf`; decompression strips it.  Returns `None`
/// when no name can be derived: stdin input, a decompress input without the
/// suffix, or `Auto`/`Test` mode.
pub fn default_output_name(input: &str, mode: OpMode) -> Option<String> {
    if input == STDIO_MARK {
        return None;
    }
    match mode {
        OpMode::Compress => Some(format!("{input}{LZF_EXTENSION}")),
        OpMode::Decompress => input
            .strip_suffix(LZF_EXTENSION)
            .filter(|base| !base.is_empty())
            .map(str::to_owned),
        OpMode::Auto | OpMode::Test => None,
    }
}
