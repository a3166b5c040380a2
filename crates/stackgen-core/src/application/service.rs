//! The scaffold service: one entry point per CLI command.
//!
//! Orchestrates reader, renderers, materializer and mutator behind the
//! driven ports. Each method reads fresh workspace state, renders a pure
//! plan, applies it, and finishes with the external tool steps (version
//! control, dependency install). External tool failures never fail the
//! scaffold; they surface as warnings on the [`ScaffoldOutcome`].

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::application::{
    ApplicationError, InvocationContext,
    materializer::{Applied, Materializer, WriteAction},
    mutator::{DependencySection, ProjectMutator},
    ports::{Filesystem, ProcessRunner},
    reader::WorkspaceReader,
};
use crate::domain::{
    ArtifactKind, ArtifactSpec, Capability, FeatureFlags, Framework, MemberGroup, PackageManifest,
    RenderPlan, WorkspaceDescriptor, validate_name,
};
use crate::error::Result;
use crate::render::{self, auth, packages::DATA_PKG_NAME};

/// Behaviour toggles resolved at the CLI boundary.
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// Run `git init` after scaffolding a new workspace.
    pub run_git: bool,
    /// Run the package manager install step after writes.
    pub run_install: bool,
    /// Render and report the plan without writing anything.
    pub dry_run: bool,
    /// The package manager invoked for installs.
    pub package_manager: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            run_git: true,
            run_install: true,
            dry_run: false,
            package_manager: "bun".into(),
        }
    }
}

/// What one command did: every touched path plus non-fatal warnings.
#[derive(Debug, Default)]
pub struct ScaffoldOutcome {
    pub applied: Vec<Applied>,
    pub warnings: Vec<String>,
}

impl ScaffoldOutcome {
    fn record(&mut self, applied: Vec<Applied>) {
        self.applied.extend(applied);
    }

    fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.warnings.push(message);
    }
}

/// Application service driving all scaffold use cases.
pub struct ScaffoldService {
    ctx: InvocationContext,
    fs: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
    options: ServiceOptions,
}

impl ScaffoldService {
    pub fn new(
        ctx: InvocationContext,
        fs: Box<dyn Filesystem>,
        runner: Box<dyn ProcessRunner>,
        options: ServiceOptions,
    ) -> Self {
        Self {
            ctx,
            fs,
            runner,
            options,
        }
    }

    pub fn context(&self) -> &InvocationContext {
        &self.ctx
    }

    /// Create a new workspace: root manifest, member group directories and
    /// the shared config package.
    ///
    /// Safe to re-run against a previously-generated workspace (identical
    /// files are skipped). A non-empty target that is not a workspace is
    /// rejected before anything is written.
    #[instrument(skip(self))]
    pub fn init(&self, name: &str) -> Result<ScaffoldOutcome> {
        validate_name(name)?;
        self.check_init_target()?;

        let root_spec = ArtifactSpec::new(ArtifactKind::RootWorkspace, name, FeatureFlags::default())?;
        let config_spec =
            ArtifactSpec::new(ArtifactKind::SharedConfigPackage, render::CONFIG_PKG_NAME, FeatureFlags::default())?;

        let mut plan = render::plan_for(&root_spec, name)?;
        plan.extend(render::plan_for(&config_spec, name)?);

        let mut outcome = ScaffoldOutcome::default();
        outcome.record(self.apply(&plan)?);

        self.git_init(&mut outcome);
        self.install(&mut outcome);

        info!(name, root = %self.ctx.root().display(), "workspace initialized");
        Ok(outcome)
    }

    /// Add an application under `apps/`.
    #[instrument(skip(self))]
    pub fn add_app(
        &self,
        name: &str,
        framework: Framework,
        flags: FeatureFlags,
    ) -> Result<ScaffoldOutcome> {
        let workspace = self.workspace()?;
        let kind = match framework {
            Framework::React => ArtifactKind::UiApp,
            Framework::Server => ArtifactKind::ServerApp,
        };
        let spec = ArtifactSpec::new(kind, name, flags)?;
        let plan = render::plan_for(&spec, workspace.scope())?;

        let mut outcome = ScaffoldOutcome::default();
        outcome.record(self.apply(&plan)?);
        self.install(&mut outcome);

        info!(app = %workspace.scoped(name), %framework, "app added");
        Ok(outcome)
    }

    /// Add a package under `packages/`. The reserved name `db` selects the
    /// data-access package; any other name yields a plain shared package.
    #[instrument(skip(self))]
    pub fn add_package(&self, name: &str) -> Result<ScaffoldOutcome> {
        let workspace = self.workspace()?;
        let kind = if name == DATA_PKG_NAME {
            ArtifactKind::DataPackage
        } else {
            ArtifactKind::SharedPackage
        };
        let spec = ArtifactSpec::new(kind, name, FeatureFlags::default())?;
        let plan = render::plan_for(&spec, workspace.scope())?;

        let mut outcome = ScaffoldOutcome::default();
        outcome.record(self.apply(&plan)?);
        self.install(&mut outcome);

        info!(package = %workspace.scoped(name), "package added");
        Ok(outcome)
    }

    /// Server apps eligible as auth targets, for prompting at the CLI.
    pub fn auth_candidates(&self) -> Result<Vec<String>> {
        let workspace = self.workspace()?;
        Ok(workspace
            .server_apps()
            .into_iter()
            .map(|m| m.name.clone())
            .collect())
    }

    /// Wire authentication into a server app.
    ///
    /// Requires the data package; with `app` unset, resolves the target
    /// only when exactly one server app exists. Renders the auth config and
    /// env entries, appends the session tables to the schema, swaps the
    /// server entry point for one with the auth handler mounted, and
    /// patches the app manifest dependencies.
    #[instrument(skip(self))]
    pub fn add_auth(&self, app: Option<&str>) -> Result<ScaffoldOutcome> {
        let workspace = self.workspace()?;

        if !workspace.has_data_package() {
            return Err(ApplicationError::MissingPrerequisite {
                needed: format!("the '{DATA_PKG_NAME}' data package"),
                hint: format!("Create it first: stackgen add package {DATA_PKG_NAME}"),
            }
            .into());
        }

        let target = self.resolve_auth_target(&workspace, app)?;
        let scope = workspace.scope();

        let mut outcome = ScaffoldOutcome::default();

        let auth_spec = ArtifactSpec::new(ArtifactKind::AuthWiring, target.as_str(), FeatureFlags::default())?;
        outcome.record(self.apply(&render::plan_for(&auth_spec, scope)?)?);

        let data_member = workspace
            .members_in(MemberGroup::Packages)
            .find(|m| m.has(Capability::DataPackage))
            .ok_or_else(|| ApplicationError::MissingPrerequisite {
                needed: format!("the '{DATA_PKG_NAME}' data package"),
                hint: format!("Create it first: stackgen add package {DATA_PKG_NAME}"),
            })?;
        let schema_rel = data_member.relative_path().join("src/schema.ts");
        let entry_rel = PathBuf::from(format!("apps/{target}/src/index.ts"));
        let manifest_rel = PathBuf::from(format!("apps/{target}/package.json"));

        if self.options.dry_run {
            // A dry run describes the mutations too, not just the new files.
            debug!("dry run, describing mutations without applying them");
            outcome.record(
                [schema_rel, entry_rel, manifest_rel]
                    .into_iter()
                    .map(|path| Applied {
                        path,
                        action: WriteAction::Planned,
                    })
                    .collect(),
            );
            return Ok(outcome);
        }

        let mutator = ProjectMutator::new(self.fs.as_ref());

        let action = mutator.append_definitions(
            &self.ctx.root().join(&schema_rel),
            auth::SCHEMA_IMPORT,
            auth::SCHEMA_IMPORT_MARKER,
            auth::schema_tables(),
            auth::SCHEMA_MARKER,
        )?;
        outcome.record(vec![Applied {
            path: schema_rel,
            action,
        }]);

        let app_dir = self.ctx.member_dir(MemberGroup::Apps, &target);
        let action = mutator.replace_file(
            &app_dir.join("src/index.ts"),
            &auth::wired_server_entry(scope, &target),
        )?;
        outcome.record(vec![Applied {
            path: entry_rel,
            action,
        }]);

        let action = mutator.patch_manifest_dependencies(
            &app_dir.join("package.json"),
            DependencySection::Runtime,
            &auth::dependency_patch(scope),
        )?;
        outcome.record(vec![Applied {
            path: manifest_rel,
            action,
        }]);

        self.install(&mut outcome);

        info!(app = %workspace.scoped(&target), "auth wired");
        Ok(outcome)
    }

    /// Read the current workspace state.
    pub fn workspace(&self) -> Result<WorkspaceDescriptor> {
        WorkspaceReader::new(self.fs.as_ref()).read_workspace(self.ctx.root())
    }

    fn resolve_auth_target(
        &self,
        workspace: &WorkspaceDescriptor,
        app: Option<&str>,
    ) -> Result<String> {
        if let Some(name) = app {
            let member = workspace.find(MemberGroup::Apps, name).ok_or_else(|| {
                ApplicationError::MemberNotFound {
                    group: MemberGroup::Apps.dir_name().into(),
                    name: name.into(),
                }
            })?;
            if !member.has(Capability::ServerApp) {
                return Err(ApplicationError::IneligibleMember {
                    name: name.into(),
                    reason: "not a server app".into(),
                }
                .into());
            }
            return Ok(name.to_string());
        }

        let mut candidates = workspace.server_apps();
        match candidates.len() {
            0 => Err(ApplicationError::NoCandidateApp.into()),
            1 => Ok(candidates.remove(0).name.clone()),
            _ => Err(ApplicationError::MissingPrerequisite {
                needed: "an app name".into(),
                hint: "Multiple server apps found; pass the app name explicitly".into(),
            }
            .into()),
        }
    }

    /// Apply a plan under the invocation root, or report it when dry-running.
    fn apply(&self, plan: &RenderPlan) -> Result<Vec<Applied>> {
        if self.options.dry_run {
            plan.validate()?;
            return Ok(plan
                .entries()
                .iter()
                .map(|entry| Applied {
                    path: entry.path().clone(),
                    action: WriteAction::Planned,
                })
                .collect());
        }
        Materializer::new(self.fs.as_ref()).apply(self.ctx.root(), plan)
    }

    /// `init` precondition: the target must be absent, empty, or a workspace
    /// generated by an earlier `init`. A foreign project with its own
    /// `package.json` is rejected here, before a single write, rather than
    /// failing partway through the plan.
    fn check_init_target(&self) -> Result<()> {
        let root = self.ctx.root();
        if !self.fs.exists(root) || !self.fs.dir_has_entries(root)? {
            return Ok(());
        }

        // Non-empty: only re-initialization counts as safe. Our root
        // manifests always declare both member group globs; a manifest
        // without them (or one that does not parse) is somebody else's.
        let manifest_path = root.join("package.json");
        if self.fs.exists(&manifest_path) {
            let raw = self.fs.read_file(&manifest_path)?;
            if let Ok(manifest) = serde_json::from_str::<PackageManifest>(&raw) {
                let ours = manifest.workspaces.is_some_and(|globs| {
                    ["apps/*", "packages/*"]
                        .iter()
                        .all(|g| globs.iter().any(|glob| glob == g))
                });
                if ours {
                    return Ok(());
                }
            }
        }

        Err(ApplicationError::TargetNotEmpty {
            path: root.to_path_buf(),
        }
        .into())
    }

    fn git_init(&self, outcome: &mut ScaffoldOutcome) {
        if !self.options.run_git || self.options.dry_run {
            return;
        }
        if self.fs.is_dir(&self.ctx.root().join(".git")) {
            debug!("repository already initialized, skipping git init");
            return;
        }
        if let Err(e) = self.runner.run("git", &["init"], self.ctx.root()) {
            outcome.warn(format!("git init failed: {e}"));
        }
    }

    fn install(&self, outcome: &mut ScaffoldOutcome) {
        if !self.options.run_install || self.options.dry_run {
            return;
        }
        let pm = &self.options.package_manager;
        if let Err(e) = self.runner.run(pm, &["install"], self.ctx.root()) {
            outcome.warn(format!("{pm} install failed: {e}"));
        }
    }
}

impl std::fmt::Debug for ScaffoldService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaffoldService")
            .field("ctx", &self.ctx)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
