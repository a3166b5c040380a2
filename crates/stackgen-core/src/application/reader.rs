//! Workspace Reader: derives a [`WorkspaceDescriptor`] from disk.
//!
//! Read fresh at the start of every `add` command; never cached across
//! invocations (each CLI invocation is a fresh process). Read-only.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::domain::{
    Capability, DomainError, Member, MemberGroup, PackageManifest,
    workspace::CAPABILITY_MARKERS, WorkspaceDescriptor,
};
use crate::error::Result;

/// Reads workspace state through the filesystem port.
pub struct WorkspaceReader<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> WorkspaceReader<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Read the root manifest and enumerate all members.
    ///
    /// Fails with `NotAWorkspace` when no root manifest is present.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn read_workspace(&self, root: &Path) -> Result<WorkspaceDescriptor> {
        let manifest_path = root.join("package.json");
        if !self.fs.exists(&manifest_path) {
            return Err(ApplicationError::NotAWorkspace {
                path: root.to_path_buf(),
            }
            .into());
        }

        let manifest = self.read_manifest(&manifest_path)?;

        let mut members = Vec::new();
        for group in [MemberGroup::Apps, MemberGroup::Packages] {
            for name in self.list_members(root, group)? {
                let member_path = root.join(group.dir_name()).join(&name);
                let capabilities = self.member_capabilities(&member_path)?;
                members.push(Member {
                    group,
                    name,
                    capabilities,
                });
            }
        }

        debug!(
            scope = %manifest.name,
            members = members.len(),
            "Workspace read"
        );
        Ok(WorkspaceDescriptor::new(manifest.name, members))
    }

    /// Member names of one group: the subdirectory names of `apps/` or
    /// `packages/`, sorted. A missing group directory yields no members.
    pub fn list_members(&self, root: &Path, group: MemberGroup) -> Result<Vec<String>> {
        self.fs.list_subdirs(&root.join(group.dir_name()))
    }

    /// Which recognized runtime dependencies this member declares.
    ///
    /// A member without a manifest has no capabilities; only `dependencies`
    /// counts, devDependencies never classify a member.
    pub fn member_capabilities(&self, member_path: &Path) -> Result<BTreeSet<Capability>> {
        let manifest_path = member_path.join("package.json");
        if !self.fs.exists(&manifest_path) {
            return Ok(BTreeSet::new());
        }

        let manifest = self.read_manifest(&manifest_path)?;
        Ok(CAPABILITY_MARKERS
            .iter()
            .filter(|(dep, _)| manifest.dependencies.contains_key(*dep))
            .map(|(_, cap)| *cap)
            .collect())
    }

    fn read_manifest(&self, path: &Path) -> Result<PackageManifest> {
        let raw = self.fs.read_file(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            DomainError::MalformedManifest {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::error::Error;
    use std::path::PathBuf;

    #[test]
    fn missing_root_manifest_is_not_a_workspace() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let reader = WorkspaceReader::new(&fs);
        let err = reader.read_workspace(Path::new("/tmp/nope")).unwrap_err();
        assert!(matches!(
            err,
            Error::Application(ApplicationError::NotAWorkspace { .. })
        ));
    }

    #[test]
    fn malformed_root_manifest_is_reported() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file()
            .returning(|_| Ok("not json".to_string()));

        let reader = WorkspaceReader::new(&fs);
        let err = reader.read_workspace(Path::new("/tmp/ws")).unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::MalformedManifest { .. })
        ));
    }

    #[test]
    fn member_without_manifest_has_no_capabilities() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let reader = WorkspaceReader::new(&fs);
        let caps = reader
            .member_capabilities(&PathBuf::from("/tmp/ws/apps/web"))
            .unwrap();
        assert!(caps.is_empty());
    }

    #[test]
    fn capabilities_derive_from_runtime_dependencies() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file().returning(|_| {
            Ok(r#"{
                "name": "@proj/api",
                "private": true,
                "dependencies": { "hono": "^4.0.0" },
                "devDependencies": { "react": "should-not-count" }
            }"#
            .to_string())
        });

        let reader = WorkspaceReader::new(&fs);
        let caps = reader
            .member_capabilities(&PathBuf::from("/tmp/ws/apps/api"))
            .unwrap();
        assert!(caps.contains(&Capability::ServerApp));
        assert!(!caps.contains(&Capability::UiApp));
    }
}
