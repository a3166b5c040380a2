//! Explicit invocation context.
//!
//! Rather than reading the current working directory ambiently, every
//! command resolves its workspace root once at the CLI boundary and passes
//! it down as an immutable [`InvocationContext`]. Rendering stays pure and
//! independently testable.

use std::path::{Path, PathBuf};

use crate::domain::MemberGroup;

/// Immutable per-invocation context: where this command operates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    root: PathBuf,
}

impl InvocationContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The workspace root this invocation targets.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a member group directory (`apps/` or `packages/`).
    pub fn group_dir(&self, group: MemberGroup) -> PathBuf {
        self.root.join(group.dir_name())
    }

    /// Absolute path of one member's directory.
    pub fn member_dir(&self, group: MemberGroup, name: &str) -> PathBuf {
        self.group_dir(group).join(name)
    }
}
