//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No root manifest at the invocation root.
    #[error("{path} is not a workspace (no package.json found)")]
    NotAWorkspace { path: PathBuf },

    /// `init` target directory already contains entries and is not a
    /// previously-generated workspace.
    #[error("target directory {path} is not empty")]
    TargetNotEmpty { path: PathBuf },

    /// A Create-mode write found different content at its target path.
    #[error("{path} already exists with different content")]
    AlreadyExists { path: PathBuf },

    /// A required prior artifact is absent.
    #[error("missing prerequisite: {needed}")]
    MissingPrerequisite { needed: String, hint: String },

    /// No app in the workspace is eligible for the requested operation.
    #[error("no eligible server app found in this workspace")]
    NoCandidateApp,

    /// A named member does not exist in the given group.
    #[error("no member '{name}' under {group}/")]
    MemberNotFound { group: String, name: String },

    /// A named member exists but cannot receive the requested operation.
    #[error("member '{name}' is not eligible: {reason}")]
    IneligibleMember { name: String, reason: String },

    /// An artifact the mutator must modify is missing from disk.
    #[error("expected file {path} is missing")]
    MissingArtifact { path: PathBuf },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// An external tool exited non-zero or could not be spawned.
    /// Non-fatal to artifacts already written; surfaced as a warning.
    #[error("external command failed: {command}: {reason}")]
    ExternalTool { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotAWorkspace { path } => vec![
                format!("No workspace manifest at: {}", path.display()),
                "Run `stackgen init` first, or cd into an existing workspace".into(),
            ],
            Self::TargetNotEmpty { path } => vec![
                format!("Directory is not empty: {}", path.display()),
                "Choose an empty or new directory for init".into(),
                "Nothing was written".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("Conflicting content at: {}", path.display()),
                "Remove or rename the conflicting file and re-run".into(),
                "Files written earlier in this run were kept".into(),
            ],
            Self::MissingPrerequisite { hint, .. } => vec![hint.clone()],
            Self::NoCandidateApp => vec![
                "Auth wiring needs a server app to attach to".into(),
                "Create one: stackgen add app api --framework server".into(),
            ],
            Self::MemberNotFound { group, .. } => vec![
                format!("Check the member name under {group}/"),
            ],
            Self::IneligibleMember { .. } => vec![
                "Pick a server app (created with --framework server)".into(),
            ],
            Self::MissingArtifact { path } => vec![
                format!("Expected generated file: {}", path.display()),
                "The workspace appears partially generated; re-run the add command that creates it".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ExternalTool { command, .. } => vec![
                format!("Command failed: {command}"),
                "Ensure the tool is installed and in your PATH".into(),
                "Generated files were kept; you can retry the command manually".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotAWorkspace { .. }
            | Self::TargetNotEmpty { .. }
            | Self::MissingPrerequisite { .. }
            | Self::NoCandidateApp
            | Self::IneligibleMember { .. }
            | Self::MissingArtifact { .. } => ErrorCategory::Precondition,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::MemberNotFound { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::ExternalTool { .. } => ErrorCategory::External,
        }
    }
}
