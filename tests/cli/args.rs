// Tests for command-line parsing (cli::args).

use lzf::cli::args::{parse_args_from, resolve, Cli, ParsedArgs};
use lzf::cli::op_mode::OpMode;
use lzf::config::DISPLAY_LEVEL_MAX;

use clap::Parser;

fn parse_at(level: u32, args: &[&str]) -> anyhow::Result<ParsedArgs> {
    let argv: Vec<String> = std::iter::once("lzf")
        .chain(args.iter().copied())
        .map(str::to_owned)
        .collect();
    parse_args_from(level, &argv)
}

fn parse(args: &[&str]) -> anyhow::Result<ParsedArgs> {
    parse_at(2, args)
}

#[test]
fn force_and_no_mtime_reach_prefs() {
    let p = parse(&["-f", "--no-mtime", "log.txt"]).unwrap();
    assert!(p.prefs.overwrite);
    assert!(!p.prefs.preserve_mtime);
    assert!(!p.prefs.remove_src_file);
}

#[test]
fn explicit_compress_of_lzf_file() {
    let p = parse(&["-z", "twice.lzf"]).unwrap();
    assert_eq!(p.op_mode, OpMode::Compress);
    assert_eq!(p.output.as_deref(), Some("twice.lzf.lzf"));
}

#[test]
fn uncompress_alias() {
    let p = parse(&["--uncompress", "a.lzf"]).unwrap();
    assert_eq!(p.op_mode, OpMode::Decompress);
    assert_eq!(p.output.as_deref(), Some("a"));
}

#[test]
fn long_stdout_flag_with_decompress() {
    let p = parse(&["-d", "--stdout", "a.lzf"]).unwrap();
    assert_eq!(p.output.as_deref(), Some("-"));
}

#[test]
fn explicit_output_wins() {
    let p = parse(&["in.lzf", "elsewhere.bin"]).unwrap();
    assert_eq!(p.op_mode, OpMode::Decompress);
    assert_eq!(p.output.as_deref(), Some("elsewhere.bin"));
}

#[test]
fn display_level_starts_from_environment_level() {
    assert_eq!(parse_at(0, &["-v", "a"]).unwrap().display_level, 1);
    assert_eq!(parse_at(3, &["-q", "a"]).unwrap().display_level, 2);
    assert_eq!(parse_at(DISPLAY_LEVEL_MAX, &["a"]).unwrap().display_level, DISPLAY_LEVEL_MAX);
    assert_eq!(parse_at(1, &["-qqqqqq", "a"]).unwrap().display_level, 0);
}

#[test]
fn unknown_flag_is_an_error() {
    assert!(parse(&["--level-9", "a"]).is_err());
}

#[test]
fn resolve_accepts_a_prebuilt_cli() {
    let cli = Cli::try_parse_from(["lzf", "-t"]).unwrap();
    let p = resolve(cli, 2).unwrap();
    assert_eq!(p.op_mode, OpMode::Test);
    assert_eq!(p.input, "-");
    assert_eq!(p.output, None);
}
