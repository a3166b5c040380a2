//! Command handlers.
//!
//! Each submodule translates parsed CLI arguments into core service calls
//! and renders the outcome. No business logic lives here.

pub mod add;
pub mod completions;
pub mod init;

use std::path::Path;

use stackgen_adapters::{LocalFilesystem, SystemProcessRunner};
use stackgen_core::application::{
    InvocationContext, ScaffoldOutcome, ScaffoldService, ServiceOptions,
};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// Build the core service over the production adapters.
fn build_service(root: &Path, options: ServiceOptions) -> ScaffoldService {
    ScaffoldService::new(
        InvocationContext::new(root),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemProcessRunner::new()),
        options,
    )
}

/// Service options for an `add` command: install toggled by flag + config,
/// git untouched (only `init` creates repositories).
fn add_options(config: &AppConfig, no_install: bool, dry_run: bool) -> ServiceOptions {
    ServiceOptions {
        run_git: false,
        run_install: config.tools.install && !no_install,
        dry_run,
        package_manager: config.defaults.package_manager.clone(),
    }
}

/// Render an outcome: per-path actions when verbose or dry-running, then
/// warnings. The caller prints its own success line.
fn report_outcome(
    outcome: &ScaffoldOutcome,
    output: &OutputManager,
    verbose: bool,
    dry_run: bool,
) -> CliResult<()> {
    if verbose || dry_run {
        for applied in &outcome.applied {
            output.print(&format!(
                "  {:<9} {}",
                applied.action.as_str(),
                applied.path.display()
            ))?;
        }
    }
    for warning in &outcome.warnings {
        output.warning(warning)?;
    }
    Ok(())
}
