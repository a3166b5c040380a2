//! Project Mutator: read-modify-write of already-materialized artifacts.
//!
//! Three operations, all fail-fast when the target artifact is absent:
//! appending definitions to a generated source file, replacing a
//! machine-generated file wholesale, and patching specific keys of a
//! manifest without disturbing unrelated keys.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::application::{
    ApplicationError, materializer::WriteAction, ports::Filesystem,
};
use crate::domain::DomainError;
use crate::error::Result;

/// Which dependency table of a manifest a patch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencySection {
    Runtime,
    Dev,
}

impl DependencySection {
    fn key(&self) -> &'static str {
        match self {
            Self::Runtime => "dependencies",
            Self::Dev => "devDependencies",
        }
    }
}

/// Mutates existing generated artifacts through the filesystem port.
pub struct ProjectMutator<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> ProjectMutator<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Append `block` to an existing source file, prepending `import_line`
    /// first when `import_marker` is absent. Existing content is preserved
    /// verbatim. When `block_marker` is already present the file is left
    /// untouched, so repeated invocations are safe.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn append_definitions(
        &self,
        path: &Path,
        import_line: &str,
        import_marker: &str,
        block: &str,
        block_marker: &str,
    ) -> Result<WriteAction> {
        let existing = self.read_existing(path)?;

        if existing.contains(block_marker) {
            debug!("definitions already present, skipping");
            return Ok(WriteAction::AppendSkipped);
        }

        let mut updated = String::new();
        if !existing.contains(import_marker) {
            updated.push_str(import_line);
        }
        updated.push_str(&existing);
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(block);

        self.fs.write_file(path, &updated)?;
        Ok(WriteAction::Appended)
    }

    /// Replace a machine-generated file wholesale.
    ///
    /// Deliberately unconditional: generated entry points are not expected
    /// to carry user edits at this stage, and a warning is logged so a
    /// surprised user can diff with version control.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn replace_file(&self, path: &Path, content: &str) -> Result<WriteAction> {
        // Fail fast rather than create a file the renderer never produced.
        let _ = self.read_existing(path)?;
        warn!(path = %path.display(), "replacing generated file");
        self.fs.write_file(path, content)?;
        Ok(WriteAction::Replaced)
    }

    /// Set-or-overwrite dependency entries in a manifest, preserving all
    /// unrelated keys and their order.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn patch_manifest_dependencies(
        &self,
        path: &Path,
        section: DependencySection,
        entries: &[(String, String)],
    ) -> Result<WriteAction> {
        let raw = self.read_existing(path)?;
        let mut manifest: Value = serde_json::from_str(&raw).map_err(|e| {
            DomainError::MalformedManifest {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        let root = manifest
            .as_object_mut()
            .ok_or_else(|| DomainError::MalformedManifest {
                path: path.display().to_string(),
                reason: "top level is not an object".into(),
            })?;

        let deps = root
            .entry(section.key())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
        let deps = deps
            .as_object_mut()
            .ok_or_else(|| DomainError::MalformedManifest {
                path: path.display().to_string(),
                reason: format!("'{}' is not an object", section.key()),
            })?;

        for (name, version) in entries {
            deps.insert(name.clone(), Value::String(version.clone()));
        }

        let mut out = serde_json::to_string_pretty(&manifest).map_err(|e| {
            DomainError::MalformedManifest {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        out.push('\n');
        self.fs.write_file(path, &out)?;
        Ok(WriteAction::Patched)
    }

    fn read_existing(&self, path: &Path) -> Result<String> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::MissingArtifact {
                path: path.to_path_buf(),
            }
            .into());
        }
        self.fs.read_file(path)
    }
}
