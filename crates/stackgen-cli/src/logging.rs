//! Tracing subscriber setup for the binary.
//!
//! The library crates only emit spans and events; this is the one place a
//! subscriber is installed. Verbosity flags map to a per-crate filter
//! (`warn` by default, `-v` info, `-vv` debug, `-vvv` trace, `--quiet`
//! error), and an explicit `RUST_LOG` wins over all of them.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global subscriber. Call once, before any events fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = filter_level(args);
            EnvFilter::new(format!(
                "stackgen={level},stackgen_core={level},stackgen_adapters={level}"
            ))
        }
    };

    // Logs share stderr with error output; color them only when stderr is a
    // terminal and the user has not opted out.
    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    // try_init instead of init: integration tests may attempt several
    // installs in one process.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn filter_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
