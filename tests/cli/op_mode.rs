// Tests for operation-mode selection (cli::op_mode).

use lzf::cli::op_mode::{default_output_name, determine_op_mode, OpMode};

#[test]
fn suffix_must_be_exact() {
    assert_eq!(determine_op_mode("archive.LZF"), OpMode::Compress);
    assert_eq!(determine_op_mode("archive.lzf.bak"), OpMode::Compress);
    assert_eq!(determine_op_mode("dir/archive.lzf"), OpMode::Decompress);
}

#[test]
fn stdin_is_compressed() {
    assert_eq!(determine_op_mode("-"), OpMode::Compress);
}

#[test]
fn output_names_keep_directories() {
    assert_eq!(
        default_output_name("dir/sub/file.dat", OpMode::Compress).as_deref(),
        Some("dir/sub/file.dat.lzf")
    );
    assert_eq!(
        default_output_name("dir/sub/file.dat.lzf", OpMode::Decompress).as_deref(),
        Some("dir/sub/file.dat")
    );
}

#[test]
fn no_name_for_stdin_or_auto() {
    assert_eq!(default_output_name("-", OpMode::Decompress), None);
    assert_eq!(default_output_name("file", OpMode::Auto), None);
}
