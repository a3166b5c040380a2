//! Renderer for the shared config package (`@scope/tsconfig`).
//!
//! The package exports exactly the base variants in
//! [`BASE_VARIANTS`](crate::render::BASE_VARIANTS); every other member's
//! config file extends one of them by name.

use serde_json::json;

use crate::domain::{PackageManifest, RenderPlan, TsConfig};
use crate::render::{BASE_VARIANTS, CONFIG_PKG_NAME, scoped};

/// Render the shared config package for the given scope.
pub fn plan(scope: &str) -> RenderPlan {
    let mut manifest = PackageManifest {
        name: scoped(scope, CONFIG_PKG_NAME),
        version: Some("0.1.0".into()),
        private: true,
        ..PackageManifest::default()
    };
    for variant in BASE_VARIANTS {
        manifest = manifest.export(variant, variant);
    }

    let base = TsConfig::default()
        .option("strict", json!(true))
        .option("target", json!("ES2022"))
        .option("module", json!("ESNext"))
        .option("moduleResolution", json!("bundler"))
        .option("esModuleInterop", json!(true))
        .option("skipLibCheck", json!(true))
        .option("resolveJsonModule", json!(true))
        .option("isolatedModules", json!(true))
        .option("forceConsistentCasingInFileNames", json!(true))
        .option("noUncheckedIndexedAccess", json!(true));

    let react = TsConfig::extending("./base.json")
        .option("jsx", json!("react-jsx"))
        .option("lib", json!(["DOM", "DOM.Iterable", "ES2022"]))
        .option("types", json!(["vite/client"]))
        .option("noEmit", json!(true));

    let node = TsConfig::extending("./base.json")
        .option("lib", json!(["ES2022"]))
        .option("types", json!(["node"]));

    let dir = format!("packages/{CONFIG_PKG_NAME}");
    let mut plan = RenderPlan::new();
    plan.add_dir(dir.clone());
    plan.add_file(format!("{dir}/package.json"), manifest.render());
    plan.add_file(format!("{dir}/base.json"), base.render());
    plan.add_file(format!("{dir}/react.json"), react.render());
    plan.add_file(format!("{dir}/node.json"), node.render());
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PackageManifest;

    #[test]
    fn config_package_identity_follows_naming_rule() {
        let plan = plan("proj");
        let unit = plan.file("packages/tsconfig/package.json").unwrap();
        let manifest: PackageManifest = serde_json::from_str(&unit.content).unwrap();
        assert_eq!(manifest.name, "@proj/tsconfig");
        assert!(manifest.private);
    }

    #[test]
    fn exports_are_exactly_the_base_variants() {
        let plan = plan("proj");
        let unit = plan.file("packages/tsconfig/package.json").unwrap();
        let manifest: PackageManifest = serde_json::from_str(&unit.content).unwrap();
        let keys: Vec<_> = manifest.exports.keys().map(String::as_str).collect();
        assert_eq!(keys, BASE_VARIANTS);
    }

    #[test]
    fn variant_files_extend_base() {
        let plan = plan("proj");
        for variant in ["react.json", "node.json"] {
            let unit = plan.file(&format!("packages/tsconfig/{variant}")).unwrap();
            let ts: crate::domain::TsConfig = serde_json::from_str(&unit.content).unwrap();
            assert_eq!(ts.extends.as_deref(), Some("./base.json"));
        }
    }

    #[test]
    fn base_has_no_extends() {
        let plan = plan("proj");
        let unit = plan.file("packages/tsconfig/base.json").unwrap();
        let ts: crate::domain::TsConfig = serde_json::from_str(&unit.content).unwrap();
        assert!(ts.extends.is_none());
        assert_eq!(ts.compiler_options["strict"], serde_json::json!(true));
    }
}
