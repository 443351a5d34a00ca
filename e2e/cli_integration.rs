// e2e/cli_integration.rs: the `lzf` binary as a black box.
//
// Covers compress/decompress dispatch by flag and by `.lzf` suffix, stdin and
// stdout filtering, test mode, overwrite protection, source removal, and
// exit codes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Path to the `lzf` binary built by Cargo.
fn lzf_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lzf"))
}

/// Create a TempDir holding `input.txt` with ~8 KB of text.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "Hello, LZF!\n".repeat(700)).unwrap();
    (dir, input)
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(lzf_bin())
        .args(args)
        .current_dir(dir)
        .env("LZF_DISPLAY_LEVEL", "2")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run lzf")
}

fn run_with_stdin(dir: &Path, args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(lzf_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn lzf");
    let mut stdin = child.stdin.take().unwrap();
    let data = input.to_vec();
    let writer = std::thread::spawn(move || stdin.write_all(&data));
    let out = child.wait_with_output().unwrap();
    writer.join().unwrap().unwrap();
    out
}

// ── 1. File roundtrip ────────────────────────────────────────────────────────

#[test]
fn compress_then_decompress_by_suffix() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();

    let out = run(dir.path(), &["input.txt"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let packed = dir.path().join("input.txt.lzf");
    assert!(packed.exists());
    assert!(fs::metadata(&packed).unwrap().len() < original.len() as u64);
    assert_eq!(lzf::decode(&fs::read(&packed).unwrap()).unwrap(), original);

    fs::remove_file(&input).unwrap();
    let out = run(dir.path(), &["input.txt.lzf"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(&input).unwrap(), original);
}

#[test]
fn explicit_output_names() {
    let (dir, _) = make_temp_input();
    assert!(run(dir.path(), &["-z", "input.txt", "packed.bin"]).status.success());
    assert!(run(dir.path(), &["-d", "packed.bin", "unpacked.txt"]).status.success());
    assert_eq!(
        fs::read(dir.path().join("unpacked.txt")).unwrap(),
        fs::read(dir.path().join("input.txt")).unwrap()
    );
}

// ── 2. Filters ───────────────────────────────────────────────────────────────

#[test]
fn stdin_to_stdout_roundtrip() {
    let dir = TempDir::new().unwrap();
    let data = b"piped through the filter ".repeat(5000);

    let packed = run_with_stdin(dir.path(), &["-z"], &data);
    assert!(packed.status.success());
    assert_eq!(lzf::decode(&packed.stdout).unwrap(), data);

    let unpacked = run_with_stdin(dir.path(), &["-d"], &packed.stdout);
    assert!(unpacked.status.success());
    assert_eq!(unpacked.stdout, data);
}

#[test]
fn stdout_flag_leaves_no_file() {
    let (dir, input) = make_temp_input();
    let out = run(dir.path(), &["-c", "input.txt"]);
    assert!(out.status.success());
    assert_eq!(lzf::decode(&out.stdout).unwrap(), fs::read(&input).unwrap());
    assert!(!dir.path().join("input.txt.lzf").exists());
}

#[test]
fn empty_stdin_gives_empty_chunk() {
    let dir = TempDir::new().unwrap();
    let out = run_with_stdin(dir.path(), &["-z"], b"");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"ZV\0\0\0");
}

// ── 3. Test mode ─────────────────────────────────────────────────────────────

#[test]
fn test_mode_accepts_good_and_rejects_bad() {
    let (dir, _) = make_temp_input();
    assert!(run(dir.path(), &["input.txt"]).status.success());
    assert!(run(dir.path(), &["-t", "input.txt.lzf"]).status.success());

    fs::write(dir.path().join("broken.lzf"), b"ZV\x01\x00\x09\x00\x20garbage").unwrap();
    let out = run(dir.path(), &["-t", "broken.lzf"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("broken.lzf"));
}

// ── 4. Safety flags ──────────────────────────────────────────────────────────

#[test]
fn existing_output_requires_force() {
    let (dir, _) = make_temp_input();
    let target = dir.path().join("input.txt.lzf");
    fs::write(&target, b"keep me").unwrap();

    let out = run(dir.path(), &["input.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read(&target).unwrap(), b"keep me");

    assert!(run(dir.path(), &["-f", "input.txt"]).status.success());
    assert_ne!(fs::read(&target).unwrap(), b"keep me");
}

#[test]
fn rm_deletes_source_after_success() {
    let (dir, input) = make_temp_input();
    assert!(run(dir.path(), &["--rm", "input.txt"]).status.success());
    assert!(!input.exists());
    assert!(dir.path().join("input.txt.lzf").exists());
}

#[test]
fn rm_with_stdout_deletes_source() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();
    let out = run(dir.path(), &["--rm", "-c", "input.txt"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(lzf::decode(&out.stdout).unwrap(), original);
    assert!(!input.exists());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["does-not-exist.txt"]);
    assert_eq!(out.status.code(), Some(1));
}

// ── 5. Informational flags ───────────────────────────────────────────────────

#[test]
fn version_flag() {
    let out = Command::new(lzf_bin()).arg("--version").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bad_usage_exits_nonzero() {
    let out = Command::new(lzf_bin()).args(["-z", "-d", "x"]).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn quiet_suppresses_summary() {
    let (dir, _) = make_temp_input();
    let out = run(dir.path(), &["-q", "input.txt"]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());

    let (dir, _) = make_temp_input();
    let out = run(dir.path(), &["input.txt"]);
    assert!(String::from_utf8_lossy(&out.stderr).contains("input.txt"));
}
