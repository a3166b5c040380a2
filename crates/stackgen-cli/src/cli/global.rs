//! Flags shared by every stackgen subcommand.
//!
//! Flattened into the top-level parser so `-v`, `-q`, `--no-color` and
//! friends can appear anywhere on the command line.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise log verbosity; repeatable.
    ///
    /// `-v` shows progress (info), `-vv` diagnostics (debug), `-vvv`
    /// everything (trace). Without the flag only warnings and errors are
    /// logged.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Print errors only.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Strip ANSI color from all output. Also honored through the
    /// `NO_COLOR` environment variable (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the default config location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Force a rendering style instead of detecting the terminal.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output rendering style"
    )]
    pub output_format: OutputMode,
}

/// Rendering style for stdout messages.
///
/// `Auto` resolves to `Pretty` on a terminal and `Plain` when piped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Auto,
    /// Colored, with unicode status glyphs.
    Pretty,
    /// Uncolored text suitable for scripts and logs.
    Plain,
}
