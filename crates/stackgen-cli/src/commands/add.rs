//! Implementations of the `stackgen add` subcommands.
//!
//! All three operate on the workspace in the current directory; the core
//! service rejects directories without a root manifest.

use std::path::PathBuf;

use tracing::{info, instrument};

use stackgen_core::domain::{FeatureFlags, Framework};

use crate::{
    cli::{AddAppArgs, AddAuthArgs, AddPackageArgs, FrameworkArg, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `stackgen add app`.
#[instrument(skip_all, fields(app = %args.name))]
pub fn execute_app(
    args: AddAppArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let selected = match args.framework {
        Some(framework) => framework,
        None => framework_from_config(&config)?,
    };

    if args.tailwind && selected != FrameworkArg::React {
        return Err(CliError::InvalidInput {
            message: "--tailwind only applies to react apps".into(),
        });
    }

    let framework = match selected {
        FrameworkArg::React => Framework::React,
        FrameworkArg::Server => Framework::Server,
    };
    let flags = FeatureFlags::default().with_tailwind(args.tailwind);

    let root = workspace_root()?;
    let service =
        super::build_service(&root, super::add_options(&config, args.no_install, args.dry_run));

    info!(app = %args.name, %framework, "Add app started");
    let outcome = service.add_app(&args.name, framework, flags)?;
    super::report_outcome(&outcome, &output, global.verbose > 0, args.dry_run)?;

    if !args.dry_run {
        output.success(&format!("App '{}' added under apps/", args.name))?;
    }
    Ok(())
}

/// Execute `stackgen add package`.
#[instrument(skip_all, fields(package = %args.name))]
pub fn execute_package(
    args: AddPackageArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = workspace_root()?;
    let service =
        super::build_service(&root, super::add_options(&config, args.no_install, args.dry_run));

    info!(package = %args.name, "Add package started");
    let outcome = service.add_package(&args.name)?;
    super::report_outcome(&outcome, &output, global.verbose > 0, args.dry_run)?;

    if !args.dry_run {
        output.success(&format!("Package '{}' added under packages/", args.name))?;
    }
    Ok(())
}

/// Execute `stackgen add auth`.
///
/// With several server apps and no `--app`, prompts for the target (unless
/// `--yes` or `--quiet`, which make ambiguity an error instead).
#[instrument(skip_all)]
pub fn execute_auth(
    args: AddAuthArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = workspace_root()?;
    let service =
        super::build_service(&root, super::add_options(&config, args.no_install, args.dry_run));

    let target = match &args.app {
        Some(name) => Some(name.clone()),
        None if args.yes || global.quiet => None,
        None => {
            let candidates = service.auth_candidates()?;
            if candidates.len() > 1 {
                Some(pick_app(&candidates)?)
            } else {
                // Zero or one: the service resolves or errors with guidance.
                None
            }
        }
    };

    info!(app = target.as_deref().unwrap_or("<auto>"), "Add auth started");
    let outcome = service.add_auth(target.as_deref())?;
    super::report_outcome(&outcome, &output, global.verbose > 0, args.dry_run)?;

    if !args.dry_run {
        output.success("Authentication wired up")?;
        if !global.quiet {
            output.print("")?;
            output.print("Next steps:")?;
            output.print("  Set BETTER_AUTH_SECRET in the app's .env")?;
            output.print("  bun run --filter db db:push   # apply the auth tables")?;
        }
    }
    Ok(())
}

/// The workspace every `add` command targets: the current directory.
fn workspace_root() -> CliResult<PathBuf> {
    std::env::current_dir().map_err(CliError::from)
}

/// Framework fallback for `add app` when `--framework` is omitted.
fn framework_from_config(config: &AppConfig) -> CliResult<FrameworkArg> {
    let Some(name) = config.defaults.framework.as_deref() else {
        return Err(CliError::InvalidInput {
            message: "no framework selected; pass --framework react|server \
                      or set defaults.framework in the config file"
                .into(),
        });
    };
    match name {
        "react" => Ok(FrameworkArg::React),
        "server" | "hono" => Ok(FrameworkArg::Server),
        other => Err(CliError::ConfigError {
            message: format!("defaults.framework '{other}' is not a known framework"),
            source: None,
        }),
    }
}

#[cfg(feature = "interactive")]
fn pick_app(candidates: &[String]) -> CliResult<String> {
    let index = dialoguer::Select::new()
        .with_prompt("Which server app should receive auth?")
        .items(candidates)
        .default(0)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("prompt failed: {e}"),
        })?;
    Ok(candidates[index].clone())
}

#[cfg(not(feature = "interactive"))]
fn pick_app(_candidates: &[String]) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
