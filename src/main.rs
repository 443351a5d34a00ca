//! Binary entry point for the `lzf` command-line tool.
//!
//! 1. [`init_display_level`] reads `LZF_DISPLAY_LEVEL`.
//! 2. [`parse_args`] resolves flags, mode, and file names into [`ParsedArgs`].
//! 3. [`run`] dispatches to the file layer and returns an exit code.

use std::io::IsTerminal;

use lzf::cli::args::{parse_args, ParsedArgs};
use lzf::cli::constants::{set_display_level, COMPRESSOR_NAME};
use lzf::cli::op_mode::OpMode;
use lzf::config::{init_display_level, STDIO_MARK};
use lzf::file::{compress_filename, decompress_filename, test_filename};

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, 1 = error).
fn run(args: ParsedArgs) -> i32 {
    lzf::displaylevel!(
        3,
        "*** {} v{} {}-bit ***\n",
        COMPRESSOR_NAME,
        lzf::version_string(),
        std::mem::size_of::<*const ()>() * 8
    );

    let output = args.output.as_deref().unwrap_or(STDIO_MARK);

    // Compressed bytes on a terminal are never what the user wants.
    if args.op_mode == OpMode::Compress && output == STDIO_MARK && std::io::stdout().is_terminal() {
        lzf::displaylevel!(1, "refusing to write compressed data to a console\n");
        return 1;
    }
    if args.input == STDIO_MARK && std::io::stdin().is_terminal() {
        lzf::displaylevel!(1, "refusing to read from a console\n");
        return 1;
    }

    let result = match args.op_mode {
        // Auto is resolved during argument parsing
        OpMode::Compress | OpMode::Auto => compress_filename(&args.input, output, &args.prefs),
        OpMode::Decompress => decompress_filename(&args.input, output, &args.prefs),
        OpMode::Test => test_filename(&args.input),
    };

    match result {
        Ok(_) => 0,
        Err(e) => {
            lzf::displaylevel!(1, "{}: {}: {}\n", COMPRESSOR_NAME, args.input, e);
            1
        }
    }
}

fn main() {
    set_display_level(init_display_level());

    let args = match parse_args(lzf::cli::constants::display_level()) {
        Ok(args) => args,
        Err(e) => {
            if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
            lzf::displaylevel!(1, "{}: {}\n", COMPRESSOR_NAME, e);
            std::process::exit(1);
        }
    };
    set_display_level(args.display_level);

    std::process::exit(run(args));
}
