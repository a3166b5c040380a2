//! Implementation of the `stackgen init` command.
//!
//! Responsibility: resolve the target path, confirm, and hand off to the
//! core scaffold service.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use stackgen_core::application::ServiceOptions;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stackgen init` command.
///
/// Dispatch sequence:
/// 1. Resolve the workspace name and target path
/// 2. Confirm with the user unless `--yes` or `--quiet`
/// 3. Run the init use case (dry-run short-circuits inside the service)
/// 4. Print next-steps guidance
#[instrument(skip_all, fields(workspace = args.name.as_deref().unwrap_or(".")))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve target
    let in_place = args.name.as_deref().is_none_or(|n| n == ".");
    let (workspace_name, root) = resolve_workspace_path(args.name.as_deref())?;
    debug!(name = %workspace_name, root = %root.display(), "Target resolved");

    // 2. Confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&workspace_name, &root, &args, &config, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 3. Scaffold
    let options = ServiceOptions {
        run_git: config.tools.git && !args.no_git,
        run_install: config.tools.install && !args.no_install,
        dry_run: args.dry_run,
        package_manager: config.defaults.package_manager.clone(),
    };
    let service = super::build_service(&root, options);

    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            workspace_name,
            root.display(),
        ))?;
    } else {
        output.header(&format!("Creating '{workspace_name}'..."))?;
    }
    info!(workspace = %workspace_name, path = %root.display(), "Init started");

    let outcome = service.init(&workspace_name)?;
    super::report_outcome(&outcome, &output, global.verbose > 0, args.dry_run)?;

    if args.dry_run {
        return Ok(());
    }

    // 4. Success + next steps
    output.success(&format!("Workspace '{workspace_name}' created!"))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        if !in_place {
            output.print(&format!("  cd {workspace_name}"))?;
        }
        output.print("  stackgen add app web --framework react")?;
        output.print("  stackgen add app api --framework server")?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split the NAME argument into a workspace name and the directory the
/// workspace lands in. `my-shop` creates `./my-shop`; `../foo/my-shop`
/// creates it one level up; no argument (or `.`) initializes the current
/// directory, named after it.
pub fn resolve_workspace_path(name: Option<&str>) -> CliResult<(String, PathBuf)> {
    let path = match name {
        Some(".") | None => std::env::current_dir()?,
        Some(n) => PathBuf::from(n),
    };

    let workspace_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidName {
            name: path.display().to_string(),
            reason: "cannot derive a workspace name from this path".into(),
        })?
        .to_string();

    Ok((workspace_name, path))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    name: &str,
    root: &Path,
    args: &InitArgs,
    config: &AppConfig,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Workspace:       {name}"))?;
    out.print(&format!("  Location:        {}", root.display()))?;
    out.print(&format!("  Package manager: {}", config.defaults.package_manager))?;
    out.print(&format!(
        "  Git:             {}",
        if config.tools.git && !args.no_git { "yes" } else { "no" }
    ))?;
    out.print(&format!(
        "  Install:         {}",
        if config.tools.install && !args.no_install { "yes" } else { "no" }
    ))?;
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Create workspace?")
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("prompt failed: {e}"),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    // Non-interactive builds cannot prompt; require an explicit --yes.
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
