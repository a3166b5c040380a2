//! Filesystem Materializer: applies a [`RenderPlan`] through the
//! filesystem port.
//!
//! Writes are sequential and best-effort: a failure partway through does
//! not roll back earlier writes. Re-running a command is the recovery path,
//! which the per-unit write modes make safe.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::domain::{FileUnit, PlanEntry, RenderPlan, WriteMode};
use crate::error::Result;

/// What the materializer (or mutator) did to one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    DirCreated,
    Created,
    /// Create-mode target already held identical content.
    Skipped,
    Replaced,
    Appended,
    /// AppendIfAbsent found its marker already present.
    AppendSkipped,
    /// A manifest patch applied by the mutator.
    Patched,
    /// Dry-run: nothing written, entry reported only.
    Planned,
}

impl WriteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DirCreated => "created",
            Self::Created => "created",
            Self::Skipped => "skipped",
            Self::Replaced => "replaced",
            Self::Appended => "appended",
            Self::AppendSkipped => "unchanged",
            Self::Patched => "patched",
            Self::Planned => "planned",
        }
    }
}

/// One applied plan entry, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub path: PathBuf,
    pub action: WriteAction,
}

/// Applies render plans against a base directory.
pub struct Materializer<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Apply every entry of the plan under `base`, in order.
    #[instrument(skip_all, fields(base = %base.display(), entries = plan.entry_count()))]
    pub fn apply(&self, base: &Path, plan: &RenderPlan) -> Result<Vec<Applied>> {
        plan.validate()?;

        let mut applied = Vec::with_capacity(plan.entry_count());
        for entry in plan.entries() {
            let result = match entry {
                PlanEntry::Dir(dir) => {
                    self.fs.create_dir_all(&base.join(dir))?;
                    Applied {
                        path: dir.clone(),
                        action: WriteAction::DirCreated,
                    }
                }
                PlanEntry::File(unit) => self.apply_file(base, unit)?,
            };
            debug!(path = %result.path.display(), action = result.action.as_str());
            applied.push(result);
        }
        Ok(applied)
    }

    fn apply_file(&self, base: &Path, unit: &FileUnit) -> Result<Applied> {
        let target = base.join(&unit.path);
        if let Some(parent) = target.parent() {
            self.fs.create_dir_all(parent)?;
        }

        let action = match &unit.mode {
            WriteMode::Create => {
                if self.fs.exists(&target) {
                    let existing = self.fs.read_file(&target)?;
                    if existing == unit.content {
                        WriteAction::Skipped
                    } else {
                        return Err(ApplicationError::AlreadyExists {
                            path: unit.path.clone(),
                        }
                        .into());
                    }
                } else {
                    self.fs.write_file(&target, &unit.content)?;
                    WriteAction::Created
                }
            }
            WriteMode::CreateOrReplace => {
                let existed = self.fs.exists(&target);
                self.fs.write_file(&target, &unit.content)?;
                if existed {
                    WriteAction::Replaced
                } else {
                    WriteAction::Created
                }
            }
            WriteMode::AppendIfAbsent { marker } => {
                if self.fs.exists(&target) {
                    let existing = self.fs.read_file(&target)?;
                    if existing.contains(marker) {
                        WriteAction::AppendSkipped
                    } else {
                        let mut combined = existing;
                        if !combined.is_empty() && !combined.ends_with('\n') {
                            combined.push('\n');
                        }
                        combined.push_str(&unit.content);
                        self.fs.write_file(&target, &combined)?;
                        WriteAction::Appended
                    }
                } else {
                    self.fs.write_file(&target, &unit.content)?;
                    WriteAction::Created
                }
            }
        };

        Ok(Applied {
            path: unit.path.clone(),
            action,
        })
    }
}
