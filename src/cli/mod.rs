//! Command-line interface for the `lzf` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program name, the `DISPLAY_LEVEL` atomic, and the `displaylevel!` macro. |
//! | [`op_mode`]   | `OpMode` and output-name derivation from the `.lzf` suffix. |
//! | [`args`]      | `clap` option definitions and resolution into `ParsedArgs`. |
//!
//! Typical call sequence: `config::init_display_level` → `args::parse_args`
//! → dispatch to [`crate::file`].

pub mod constants;
pub mod op_mode;
pub mod args;
