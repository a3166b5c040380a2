//! Process execution adapters.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use stackgen_core::{
    application::{ApplicationError, ports::ProcessRunner},
    error::Result,
};

/// Production process runner using `std::process::Command`.
///
/// Stdio is inherited so the child's output lands on the user's terminal
/// (install progress bars render as the tool intends). Output is never
/// parsed; only the exit status matters.
#[derive(Debug, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        info!(program, ?args, cwd = %cwd.display(), "running external command");

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| ApplicationError::ExternalTool {
                command: display_command(program, args),
                reason: format!("failed to spawn: {e}"),
            })?;

        if !status.success() {
            return Err(ApplicationError::ExternalTool {
                command: display_command(program, args),
                reason: match status.code() {
                    Some(code) => format!("exit status {code}"),
                    None => "terminated by signal".into(),
                },
            }
            .into());
        }

        debug!(program, "external command succeeded");
        Ok(())
    }
}

/// Test runner that records nothing and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProcessRunner;

impl NoopProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for NoopProcessRunner {
    fn run(&self, _program: &str, _args: &[&str], _cwd: &Path) -> Result<()> {
        Ok(())
    }
}

fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}
