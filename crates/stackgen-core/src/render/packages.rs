//! Renderers for `packages/*` members: the data-access package and plain
//! shared packages.

use crate::domain::{DomainError, PackageManifest, RenderPlan, TsConfig, WORKSPACE_SELECTOR};
use crate::render::{base_variant_ref, config_pkg_dep, scoped, subst, versions};

/// Member name that selects the data-access variant of `add package`.
pub const DATA_PKG_NAME: &str = "db";

const DB_INDEX_TS: &str = r#"import { createClient } from "@libsql/client";
import { drizzle } from "drizzle-orm/libsql";

const client = createClient({ url: "file:./local.db" });

export const db = drizzle(client);
"#;

const DRIZZLE_CONFIG_TS: &str = r#"import { defineConfig } from "drizzle-kit";

export default defineConfig({
  dialect: "sqlite",
  schema: "./src/schema.ts",
  dbCredentials: {
    url: "file:./local.db",
  },
});
"#;

const SHARED_INDEX_TS: &str = "// @{{scope}}/{{name}} entry point.\nexport {};\n";

/// Render the data-access package (`@scope/db`).
///
/// The schema file starts empty; `add auth` appends table definitions to it
/// later through the project mutator.
pub fn data_package(scope: &str) -> Result<RenderPlan, DomainError> {
    let manifest = PackageManifest::member(scoped(scope, DATA_PKG_NAME))
        .export(".", "./src/index.ts")
        .export("./schema", "./src/schema.ts")
        .script("db:push", "drizzle-kit push")
        .script("db:studio", "drizzle-kit studio")
        .dep("drizzle-orm", versions::DRIZZLE_ORM)
        .dep("@libsql/client", versions::LIBSQL_CLIENT)
        .dev_dep(&config_pkg_dep(scope), WORKSPACE_SELECTOR)
        .dev_dep("drizzle-kit", versions::DRIZZLE_KIT)
        .dev_dep("typescript", versions::TYPESCRIPT);

    let tsconfig =
        TsConfig::extending(base_variant_ref(scope, "./base.json")?).include(&["src"]);

    let dir = format!("packages/{DATA_PKG_NAME}");
    let mut plan = RenderPlan::new();
    plan.add_dir(dir.clone());
    plan.add_dir(format!("{dir}/src"));
    plan.add_file(format!("{dir}/package.json"), manifest.render());
    plan.add_file(format!("{dir}/tsconfig.json"), tsconfig.render());
    plan.add_file(format!("{dir}/drizzle.config.ts"), DRIZZLE_CONFIG_TS);
    plan.add_file(format!("{dir}/src/index.ts"), DB_INDEX_TS);
    plan.add_file(format!("{dir}/src/schema.ts"), "");
    Ok(plan)
}

/// Render a plain shared package under `packages/`.
pub fn shared_package(name: &str, scope: &str) -> Result<RenderPlan, DomainError> {
    let manifest = PackageManifest::member(scoped(scope, name))
        .export(".", "./src/index.ts")
        .dev_dep(&config_pkg_dep(scope), WORKSPACE_SELECTOR)
        .dev_dep("typescript", versions::TYPESCRIPT);

    let tsconfig =
        TsConfig::extending(base_variant_ref(scope, "./base.json")?).include(&["src"]);

    let dir = format!("packages/{name}");
    let mut plan = RenderPlan::new();
    plan.add_dir(dir.clone());
    plan.add_dir(format!("{dir}/src"));
    plan.add_file(format!("{dir}/package.json"), manifest.render());
    plan.add_file(format!("{dir}/tsconfig.json"), tsconfig.render());
    plan.add_file(format!("{dir}/src/index.ts"), subst(SHARED_INDEX_TS, name, scope));
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_package_identity_and_exports() {
        let plan = data_package("proj").unwrap();
        let unit = plan.file("packages/db/package.json").unwrap();
        let manifest: PackageManifest = serde_json::from_str(&unit.content).unwrap();
        assert_eq!(manifest.name, "@proj/db");
        assert_eq!(manifest.exports.get("."), Some(&"./src/index.ts".into()));
        assert_eq!(
            manifest.exports.get("./schema"),
            Some(&"./src/schema.ts".into())
        );
    }

    #[test]
    fn data_package_has_capability_marker() {
        let plan = data_package("proj").unwrap();
        let unit = plan.file("packages/db/package.json").unwrap();
        let manifest: PackageManifest = serde_json::from_str(&unit.content).unwrap();
        assert!(manifest.dependencies.contains_key("drizzle-orm"));
    }

    #[test]
    fn schema_file_starts_empty() {
        let plan = data_package("proj").unwrap();
        let schema = plan.file("packages/db/src/schema.ts").unwrap();
        assert!(schema.content.is_empty());
    }

    #[test]
    fn shared_package_uses_scope() {
        let plan = shared_package("utils", "proj").unwrap();
        let unit = plan.file("packages/utils/package.json").unwrap();
        let manifest: PackageManifest = serde_json::from_str(&unit.content).unwrap();
        assert_eq!(manifest.name, "@proj/utils");
        assert_eq!(
            manifest.dev_dependencies.get("@proj/tsconfig"),
            Some(&WORKSPACE_SELECTOR.to_string())
        );
    }

    #[test]
    fn shared_package_entry_mentions_identity() {
        let plan = shared_package("utils", "proj").unwrap();
        let entry = plan.file("packages/utils/src/index.ts").unwrap();
        assert!(entry.content.contains("@proj/utils"));
    }
}
