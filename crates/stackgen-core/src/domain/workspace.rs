//! Workspace state as read from disk.
//!
//! A [`WorkspaceDescriptor`] is derived fresh at the start of every `add`
//! command by the Workspace Reader and never persisted or cached across
//! invocations.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// The two conventional member groups of a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberGroup {
    Apps,
    Packages,
}

impl MemberGroup {
    /// Directory name under the workspace root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Apps => "apps",
            Self::Packages => "packages",
        }
    }
}

impl fmt::Display for MemberGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A capability a member declares through its runtime dependencies.
///
/// Used to classify members, e.g. to find candidate apps for auth wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Depends on `react`.
    UiApp,
    /// Depends on `hono`.
    ServerApp,
    /// Depends on `drizzle-orm`.
    DataPackage,
}

/// Recognized runtime dependency identifiers and the capability each one
/// implies. The reader consults this table; renderers must stay in sync
/// with it (a rendered server app must depend on `hono` to be found later).
pub const CAPABILITY_MARKERS: &[(&str, Capability)] = &[
    ("react", Capability::UiApp),
    ("hono", Capability::ServerApp),
    ("drizzle-orm", Capability::DataPackage),
];

/// One member of the workspace, as found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub group: MemberGroup,
    pub name: String,
    pub capabilities: BTreeSet<Capability>,
}

impl Member {
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Path of this member relative to the workspace root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.group.dir_name()).join(&self.name)
    }
}

/// Snapshot of the workspace: root name plus enumerated members.
///
/// Invariant: `root_name` is the scope used to namespace every generated
/// member's package identity as `@root_name/member_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceDescriptor {
    root_name: String,
    members: Vec<Member>,
}

impl WorkspaceDescriptor {
    pub fn new(root_name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            root_name: root_name.into(),
            members,
        }
    }

    /// The scope every member identity is namespaced under.
    pub fn scope(&self) -> &str {
        &self.root_name
    }

    /// The manifest identity of a member: `@scope/name`.
    pub fn scoped(&self, member_name: &str) -> String {
        format!("@{}/{}", self.root_name, member_name)
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn members_in(&self, group: MemberGroup) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(move |m| m.group == group)
    }

    pub fn find(&self, group: MemberGroup, name: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.group == group && m.name == name)
    }

    /// Apps eligible as auth-wiring targets.
    pub fn server_apps(&self) -> Vec<&Member> {
        self.members_in(MemberGroup::Apps)
            .filter(|m| m.has(Capability::ServerApp))
            .collect()
    }

    /// Whether a data-access package is present anywhere under `packages/`.
    pub fn has_data_package(&self) -> bool {
        self.members_in(MemberGroup::Packages)
            .any(|m| m.has(Capability::DataPackage))
    }
}
