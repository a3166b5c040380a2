use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for display/retry plumbing)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Render plan is empty")]
    EmptyPlan,

    #[error("Duplicate path in render plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed in render plan: {path}")]
    AbsolutePathNotAllowed { path: String },

    /// A generated config file referenced a base variant the shared config
    /// package does not export. Indicates a renderer bug, not user error.
    #[error("'{reference}' is not an exported base config variant")]
    UnknownBaseVariant { reference: String },

    #[error("Manifest at {path} is not valid JSON: {reason}")]
    MalformedManifest { path: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("Name '{}' is invalid: {}", name, reason),
                "Use lowercase letters, digits, hyphens, and underscores".into(),
                "Examples: web, api-server, db".into(),
            ],
            Self::MalformedManifest { path, .. } => vec![
                format!("The manifest at {} could not be parsed", path),
                "Fix the JSON syntax or restore the file from version control".into(),
            ],
            Self::UnknownBaseVariant { .. } => vec![
                "This is a bug in stackgen's renderers, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::MalformedManifest { .. } => ErrorCategory::Validation,
            Self::EmptyPlan
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::UnknownBaseVariant { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
