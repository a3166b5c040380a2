//! Artifact specifications: what a single command asks us to generate.

use std::fmt;

use crate::domain::{DomainError, validate_name};

/// The kinds of artifact the renderers know how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// The workspace root: manifest, gitignore, readme, `apps/` + `packages/`.
    RootWorkspace,
    /// The shared `@scope/tsconfig` package with its three base variants.
    SharedConfigPackage,
    /// A React + Vite application under `apps/`.
    UiApp,
    /// A Hono server application under `apps/`.
    ServerApp,
    /// The `@scope/db` data-access package (drizzle).
    DataPackage,
    /// A plain shared library package under `packages/`.
    SharedPackage,
    /// Auth wiring across an existing server app and the db package.
    AuthWiring,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootWorkspace => write!(f, "root-workspace"),
            Self::SharedConfigPackage => write!(f, "shared-config-package"),
            Self::UiApp => write!(f, "ui-app"),
            Self::ServerApp => write!(f, "server-app"),
            Self::DataPackage => write!(f, "data-package"),
            Self::SharedPackage => write!(f, "shared-package"),
            Self::AuthWiring => write!(f, "auth-wiring"),
        }
    }
}

/// App frameworks the `add app` command can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    React,
    Server,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional feature toggles. Strictly additive: a disabled flag must
/// reproduce byte-identical output to a renderer that never knew about it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Add the Tailwind CSS toolkit to a UI app.
    pub tailwind: bool,
}

impl FeatureFlags {
    pub fn with_tailwind(mut self, enabled: bool) -> Self {
        self.tailwind = enabled;
        self
    }
}

/// A description of one thing to generate.
///
/// Constructed from the resolved command; immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    kind: ArtifactKind,
    name: String,
    flags: FeatureFlags,
}

impl ArtifactSpec {
    pub fn new(
        kind: ArtifactKind,
        name: impl Into<String>,
        flags: FeatureFlags,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { kind, name, flags })
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> FeatureFlags {
        self.flags
    }
}

impl fmt::Display for ArtifactSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.name)
    }
}
