//! Render plans: the output of the template renderers, ready for
//! materialization.
//!
//! A [`RenderPlan`] is an ordered sequence of directory and file units.
//! Order matters only for display; correctness requires only that parent
//! directories are creatable before files beneath them, which the
//! materializer guarantees itself.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// How the materializer must treat an existing file at the unit's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteMode {
    /// Write the file; fail if the path already holds *different* content.
    /// Identical content is skipped, which makes re-runs idempotent.
    Create,
    /// Write unconditionally, discarding prior content.
    CreateOrReplace,
    /// Append the content only if `marker` is not already present in the
    /// existing file (or write fresh if the file is absent).
    AppendIfAbsent { marker: String },
}

/// The atomic output of rendering: one file to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUnit {
    pub path: PathBuf,
    pub content: String,
    pub mode: WriteMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    Dir(PathBuf),
    File(FileUnit),
}

impl PlanEntry {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Dir(p) => p,
            Self::File(f) => &f.path,
        }
    }
}

/// Ordered set of filesystem effects produced by one rendering pass.
///
/// All paths are relative to the workspace root. Consumed immediately by
/// the materializer; never survives past one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan {
    entries: Vec<PlanEntry>,
}

impl RenderPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(PlanEntry::Dir(path.into()));
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.add_unit(path, content, WriteMode::Create);
    }

    pub fn add_unit(
        &mut self,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        mode: WriteMode,
    ) {
        self.entries.push(PlanEntry::File(FileUnit {
            path: path.into(),
            content: content.into(),
            mode,
        }));
    }

    /// Append all entries of another plan (e.g. root + shared config).
    pub fn extend(&mut self, other: RenderPlan) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileUnit> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn file(&self, path: &str) -> Option<&FileUnit> {
        self.files().find(|f| f.path == PathBuf::from(path))
    }

    pub fn dirs(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Dir(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_builds_in_order() {
        let mut plan = RenderPlan::new();
        plan.add_dir("apps");
        plan.add_file("package.json", "{}");
        plan.add_unit(
            ".env",
            "SECRET=x\n",
            WriteMode::AppendIfAbsent {
                marker: "SECRET".into(),
            },
        );

        assert_eq!(plan.entry_count(), 3);
        assert_eq!(plan.dirs().count(), 1);
        assert_eq!(plan.files().count(), 2);
        assert!(plan.file("package.json").is_some());
    }

    #[test]
    fn empty_plan_is_invalid() {
        assert!(matches!(
            RenderPlan::new().validate(),
            Err(DomainError::EmptyPlan)
        ));
    }

    #[test]
    fn duplicate_paths_are_invalid() {
        let mut plan = RenderPlan::new();
        plan.add_file("a.txt", "1");
        plan.add_file("a.txt", "2");
        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn absolute_paths_are_invalid() {
        let mut plan = RenderPlan::new();
        plan.add_file("/etc/passwd", "oops");
        assert!(matches!(
            plan.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn extend_preserves_order() {
        let mut a = RenderPlan::new();
        a.add_file("first", "");
        let mut b = RenderPlan::new();
        b.add_file("second", "");
        a.extend(b);

        let paths: Vec<_> = a.files().map(|f| f.path.clone()).collect();
        assert_eq!(paths, vec![PathBuf::from("first"), PathBuf::from("second")]);
    }
}
