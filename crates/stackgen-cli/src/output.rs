//! User-facing stdout rendering.
//!
//! Log events go to stderr through `tracing`; everything the user is meant
//! to read goes through [`OutputManager`] on stdout. Color is applied only
//! in pretty mode, so `--output-format plain` (or piping, via `Auto`)
//! yields clean text with the same glyphs.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputMode};
use crate::config::AppConfig;

pub struct OutputManager {
    quiet: bool,
    colored: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let mode = match args.output_format {
            OutputMode::Auto if io::stdout().is_terminal() => OutputMode::Pretty,
            OutputMode::Auto => OutputMode::Plain,
            explicit => explicit,
        };
        let colored = mode == OutputMode::Pretty && !args.no_color && !config.output.no_color;

        Self {
            quiet: args.quiet,
            colored,
            term: Term::stdout(),
        }
    }

    /// Plain line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        } else {
            format!("\u{2713} {msg}")
        };
        self.term.write_line(&line)
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        } else {
            format!("\u{26a0} {msg}")
        };
        self.term.write_line(&line)
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        } else {
            format!("\u{2139} {msg}")
        };
        self.term.write_line(&line)
    }

    /// Section header.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
