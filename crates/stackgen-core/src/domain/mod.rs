//! Core domain layer for Stackgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable entities**: Domain objects are Clone + PartialEq

pub mod artifact;
pub mod error;
pub mod manifest;
pub mod plan;
pub mod workspace;

// Re-exports for convenience
pub use artifact::{ArtifactKind, ArtifactSpec, FeatureFlags, Framework};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{PackageManifest, TsConfig, WORKSPACE_SELECTOR, to_json_string};
pub use plan::{FileUnit, PlanEntry, RenderPlan, WriteMode};
pub use workspace::{Capability, Member, MemberGroup, WorkspaceDescriptor};

/// Validate a workspace or member name.
///
/// Names become directory names and npm package identifiers, so the rules
/// are the intersection of both: non-empty, lowercase ASCII alphanumerics
/// plus `-` and `_`, starting with a letter or digit.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with(['.', '-', '_']) {
        return Err(DomainError::InvalidName {
            name: name.into(),
            reason: "name must start with a letter or digit".into(),
        });
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
    {
        return Err(DomainError::InvalidName {
            name: name.into(),
            reason: format!("character '{bad}' is not allowed (use a-z, 0-9, '-', '_')"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["web", "my-app", "api_2", "db", "proj123"] {
            assert!(validate_name(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_name(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn leading_punctuation_is_invalid() {
        assert!(validate_name(".hidden").is_err());
        assert!(validate_name("-web").is_err());
        assert!(validate_name("_web").is_err());
    }

    #[test]
    fn uppercase_and_separators_are_invalid() {
        assert!(validate_name("MyApp").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a b").is_err());
        assert!(validate_name("a@b").is_err());
    }
}
