//! Typed models for the JSON files the renderers emit.
//!
//! Conditionally-present keys (flag-dependent devDependencies, optional
//! `exports`, etc.) are modeled as builder-style construction of a fully
//! typed record, serialized once. That makes feature-flag additivity a
//! mechanical property: a disabled flag simply never touches the record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version selector meaning "resolve to the workspace-local copy".
pub const WORKSPACE_SELECTOR: &str = "workspace:*";

/// A member or root `package.json`.
///
/// Dependency maps are `BTreeMap` so output is deterministically sorted,
/// matching what package managers themselves write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    pub private: bool,

    /// `"type": "module"` for ESM members.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspaces: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub exports: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub scripts: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(
        rename = "devDependencies",
        skip_serializing_if = "BTreeMap::is_empty",
        default
    )]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// A private member manifest with the given identity.
    pub fn member(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some("0.1.0".into()),
            private: true,
            module_type: Some("module".into()),
            ..Self::default()
        }
    }

    pub fn script(mut self, key: &str, value: &str) -> Self {
        self.scripts.insert(key.into(), value.into());
        self
    }

    pub fn dep(mut self, name: &str, version: &str) -> Self {
        self.dependencies.insert(name.into(), version.into());
        self
    }

    pub fn dev_dep(mut self, name: &str, version: &str) -> Self {
        self.dev_dependencies.insert(name.into(), version.into());
        self
    }

    pub fn export(mut self, key: &str, target: &str) -> Self {
        self.exports.insert(key.into(), target.into());
        self
    }

    /// Serialize to the canonical on-disk form (pretty, trailing newline).
    pub fn render(&self) -> String {
        to_json_string(self)
    }
}

/// A member `tsconfig.json` that extends one of the shared base variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(
        rename = "compilerOptions",
        skip_serializing_if = "serde_json::Map::is_empty",
        default
    )]
    pub compiler_options: serde_json::Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
}

impl TsConfig {
    pub fn extending(base: impl Into<String>) -> Self {
        Self {
            extends: Some(base.into()),
            ..Self::default()
        }
    }

    pub fn option(mut self, key: &str, value: Value) -> Self {
        self.compiler_options.insert(key.into(), value);
        self
    }

    pub fn include(mut self, dirs: &[&str]) -> Self {
        self.include = Some(dirs.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn render(&self) -> String {
        to_json_string(self)
    }
}

/// Pretty-print a serializable record the way generated files store it:
/// two-space indentation and a trailing newline.
pub fn to_json_string<T: Serialize>(value: &T) -> String {
    // Serialization of these records cannot fail: all keys are strings and
    // all values are JSON-representable.
    let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
    out.push('\n');
    out
}
