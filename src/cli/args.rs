//! Command-line argument parsing for the `lzf` binary.
//!
//! [`Cli`] is the raw `clap` view of `argv`; [`parse_args_from`] turns it
//! into a [`ParsedArgs`] with the operation mode, input, and output fully
//! resolved, so the dispatch in `main` has no decisions left to make.

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};

use crate::cli::op_mode::{default_output_name, determine_op_mode, OpMode};
use crate::config::{DISPLAY_LEVEL_MAX, STDIO_MARK};
use crate::file::Prefs;

/// Raw command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "lzf",
    version,
    about = "Compress or decompress files in the LZF chunk format (ZV blocks)"
)]
pub struct Cli {
    /// Force compression
    #[arg(short = 'z', long, conflicts_with_all = ["decompress", "test"])]
    pub compress: bool,

    /// Force decompression
    #[arg(short = 'd', long, visible_alias = "uncompress", conflicts_with = "test")]
    pub decompress: bool,

    /// Decode the input and report whether it is valid; writes nothing
    #[arg(short = 't', long)]
    pub test: bool,

    /// Write to standard output
    #[arg(short = 'c', long = "stdout", visible_alias = "to-stdout")]
    pub stdout: bool,

    /// Overwrite existing output files
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Remove the input file after a successful operation
    #[arg(long = "rm")]
    pub remove_src: bool,

    /// Do not copy the input's modification time to the output
    #[arg(long)]
    pub no_mtime: bool,

    /// Increase verbosity (repeatable)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Input file; `-` or absent reads standard input
    pub input: Option<String>,

    /// Output file; `-` writes standard output
    pub output: Option<String>,
}

/// Fully resolved invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Compress, Decompress, or Test; never `Auto`.
    pub op_mode: OpMode,
    /// Input path, or `-` for stdin.
    pub input: String,
    /// Output path, `-` for stdout, `None` in test mode.
    pub output: Option<String>,
    /// File-handling preferences.
    pub prefs: Prefs,
    /// Display level after applying `-v` / `-q`.
    pub display_level: u32,
}

/// Parse `std::env::args()` starting from display level `initial_level`.
pub fn parse_args(initial_level: u32) -> Result<ParsedArgs> {
    let argv: Vec<String> = std::env::args().collect();
    parse_args_from(initial_level, &argv)
}

/// Parse an explicit argument list; `argv[0]` is the program name.
///
/// Help, version, and usage errors come back as a `clap::Error` inside the
/// `anyhow::Error`, so the caller can let clap print and exit.
pub fn parse_args_from(initial_level: u32, argv: &[String]) -> Result<ParsedArgs> {
    let cli = Cli::try_parse_from(argv)?;
    resolve(cli, initial_level)
}

/// Turn raw options into a [`ParsedArgs`].
pub fn resolve(cli: Cli, initial_level: u32) -> Result<ParsedArgs> {
    let display_level = initial_level
        .saturating_add(cli.verbose as u32)
        .saturating_sub(cli.quiet as u32)
        .min(DISPLAY_LEVEL_MAX);

    let input = cli.input.unwrap_or_else(|| STDIO_MARK.to_owned());

    let mut op_mode = if cli.test {
        OpMode::Test
    } else if cli.decompress {
        OpMode::Decompress
    } else if cli.compress {
        OpMode::Compress
    } else {
        OpMode::Auto
    };
    if op_mode == OpMode::Auto {
        op_mode = determine_op_mode(&input);
    }

    let output = if op_mode == OpMode::Test {
        if cli.output.is_some() || cli.stdout {
            return Err(anyhow!("bad usage: --test does not take an output"));
        }
        None
    } else if cli.stdout {
        if cli.output.is_some() {
            return Err(anyhow!("bad usage: --stdout conflicts with an output filename"));
        }
        Some(STDIO_MARK.to_owned())
    } else if let Some(out) = cli.output {
        Some(out)
    } else if input == STDIO_MARK {
        Some(STDIO_MARK.to_owned())
    } else {
        Some(
            default_output_name(&input, op_mode)
                .ok_or_else(|| anyhow!("cannot determine an output filename for {input}"))?,
        )
    };

    if cli.remove_src && input == STDIO_MARK {
        return Err(anyhow!("bad usage: --rm needs an input file"));
    }

    Ok(ParsedArgs {
        op_mode,
        input,
        output,
        prefs: Prefs {
            overwrite: cli.force,
            remove_src_file: cli.remove_src,
            preserve_mtime: !cli.no_mtime,
        },
        display_level,
    })
}
