//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stackgen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::Result;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackgen_adapters::filesystem::LocalFilesystem` (production)
/// - `stackgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - The materializer and mutator only see this trait; policy (write
///   modes, markers) lives above it, mechanics live below it.
/// - All content is UTF-8 text; this tool generates no binaries.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Write content to a file, replacing any prior content.
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> Result<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Names of immediate subdirectories, sorted. Missing directory yields
    /// an empty list (a workspace without `apps/` simply has no apps).
    fn list_subdirs(&self, path: &Path) -> Result<Vec<String>>;

    /// Whether a directory contains any entry at all.
    fn dir_has_entries(&self, path: &Path) -> Result<bool>;
}

/// Port for external process invocation (version control, installer).
///
/// Fire-and-forget: output is inherited, never parsed; a non-zero exit maps
/// to `ApplicationError::ExternalTool`.
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}
