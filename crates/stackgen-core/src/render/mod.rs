//! Template renderers: pure functions mapping (kind, name, scope, flags)
//! to a [`RenderPlan`] — never touching the filesystem.
//!
//! ## Cross-file consistency rules
//!
//! - **Naming**: every generated member's manifest identity is
//!   `@{scope}/{name}`; `scope` always comes from the workspace descriptor.
//! - **Cross-reference**: intra-workspace dependencies use the exact member
//!   identity plus [`WORKSPACE_SELECTOR`](crate::domain::WORKSPACE_SELECTOR),
//!   never a registry version.
//! - **Config inheritance**: members extend one of the base variants the
//!   shared config package exports; [`base_variant_ref`] refuses anything
//!   not in [`BASE_VARIANTS`].
//! - **Feature flags**: strictly additive; a disabled flag yields output
//!   byte-identical to a renderer that never knew about it.

pub mod auth;
pub mod config_pkg;
pub mod packages;
pub mod server_app;
pub mod ui_app;
pub mod workspace_root;

use crate::domain::{ArtifactKind, ArtifactSpec, DomainError, RenderPlan};

/// Name of the shared config member under `packages/`.
pub const CONFIG_PKG_NAME: &str = "tsconfig";

/// The base config variants the shared config package exports, as export
/// keys. Every extending file must reference one of these.
pub const BASE_VARIANTS: &[&str] = &["./base.json", "./node.json", "./react.json"];

/// Pinned versions for the dependencies the renderers write into manifests.
/// Literal strings only; no resolution happens here.
pub(crate) mod versions {
    pub const REACT: &str = "^19.0.0";
    pub const REACT_DOM: &str = "^19.0.0";
    pub const TYPES_REACT: &str = "^19.0.10";
    pub const TYPES_REACT_DOM: &str = "^19.0.4";
    pub const VITE: &str = "^6.2.2";
    pub const VITE_PLUGIN_REACT: &str = "^4.3.4";
    pub const TYPESCRIPT: &str = "^5.8.2";
    pub const TAILWINDCSS: &str = "^4.0.15";
    pub const TAILWIND_VITE: &str = "^4.0.15";
    pub const HONO: &str = "^4.7.4";
    pub const HONO_NODE_SERVER: &str = "^1.13.8";
    pub const TSX: &str = "^4.19.3";
    pub const TYPES_NODE: &str = "^22.13.11";
    pub const DRIZZLE_ORM: &str = "^0.40.1";
    pub const DRIZZLE_KIT: &str = "^0.30.5";
    pub const LIBSQL_CLIENT: &str = "^0.14.0";
    pub const BETTER_AUTH: &str = "^1.2.4";
}

/// `@{scope}/{name}` — the single place the naming rule is spelled out.
pub fn scoped(scope: &str, name: &str) -> String {
    format!("@{scope}/{name}")
}

/// Identity of the shared config package for a given scope.
pub fn config_pkg_dep(scope: &str) -> String {
    scoped(scope, CONFIG_PKG_NAME)
}

/// Reference to one of the shared base variants, e.g.
/// `@proj/tsconfig/react.json`. Fails on a variant the config package does
/// not export; the renderers are the only callers, so a failure here is a
/// renderer bug surfaced early instead of a broken generated config.
pub fn base_variant_ref(scope: &str, variant: &str) -> Result<String, DomainError> {
    if !BASE_VARIANTS.contains(&variant) {
        return Err(DomainError::UnknownBaseVariant {
            reference: variant.into(),
        });
    }
    // "./react.json" -> "@scope/tsconfig/react.json"
    let file = variant.trim_start_matches("./");
    Ok(format!("{}/{}", config_pkg_dep(scope), file))
}

/// Substitute the two template placeholders the static fragments use.
pub(crate) fn subst(template: &str, name: &str, scope: &str) -> String {
    template.replace("{{name}}", name).replace("{{scope}}", scope)
}

/// Render the plan for one artifact spec. Pure; validation included.
pub fn plan_for(spec: &ArtifactSpec, scope: &str) -> Result<RenderPlan, DomainError> {
    let plan = match spec.kind() {
        ArtifactKind::RootWorkspace => workspace_root::plan(spec.name()),
        ArtifactKind::SharedConfigPackage => config_pkg::plan(scope),
        ArtifactKind::UiApp => ui_app::plan(spec.name(), scope, spec.flags())?,
        ArtifactKind::ServerApp => server_app::plan(spec.name(), scope)?,
        ArtifactKind::DataPackage => packages::data_package(scope)?,
        ArtifactKind::SharedPackage => packages::shared_package(spec.name(), scope)?,
        ArtifactKind::AuthWiring => auth::plan(scope, spec.name()),
    };
    plan.validate()?;
    Ok(plan)
}
