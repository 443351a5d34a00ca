// config.rs: Runtime defaults for the `lzf` command-line tool.
//
// Format parameters (chunk size, match limits) are fixed by the `ZV` format
// and live in `block::types` / `frame::types`; nothing here changes the bytes
// the codec produces.

/// Default display level: errors and per-file summaries.
/// Can be overridden by the `LZF_DISPLAY_LEVEL` environment variable,
/// then by `-q` / `-v` on the command line.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

/// Highest meaningful display level (per-chunk detail).
pub const DISPLAY_LEVEL_MAX: u32 = 4;

/// Environment variable holding the initial display level.
pub const ENV_DISPLAY_LEVEL: &str = "LZF_DISPLAY_LEVEL";

/// Suffix appended to compressed files and stripped when decompressing.
pub const LZF_EXTENSION: &str = ".lzf";

/// Filename that stands for stdin (as input) or stdout (as output).
pub const STDIO_MARK: &str = "-";

/// Read the initial display level from `LZF_DISPLAY_LEVEL`.
pub fn init_display_level() -> u32 {
    init_display_level_from(std::env::var(ENV_DISPLAY_LEVEL).ok().as_deref())
}

/// Testable core of [`init_display_level`]: parse an optional
/// `LZF_DISPLAY_LEVEL` value.
///
/// Unset or non-numeric values give [`DISPLAY_LEVEL_DEFAULT`]; numbers above
/// [`DISPLAY_LEVEL_MAX`] are clamped.
pub fn init_display_level_from(env_val: Option<&str>) -> u32 {
    match env_val.map(str::trim).map(str::parse::<u32>) {
        Some(Ok(level)) => level.min(DISPLAY_LEVEL_MAX),
        Some(Err(_)) => {
            eprintln!(
                "Ignore environment variable setting {}={}: not a valid unsigned value ",
                ENV_DISPLAY_LEVEL,
                env_val.unwrap_or_default()
            );
            DISPLAY_LEVEL_DEFAULT
        }
        None => DISPLAY_LEVEL_DEFAULT,
    }
}
