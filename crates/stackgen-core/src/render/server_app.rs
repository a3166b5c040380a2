//! Renderer for Hono server applications under `apps/`.

use serde_json::json;

use crate::domain::{DomainError, PackageManifest, RenderPlan, TsConfig, WORKSPACE_SELECTOR};
use crate::render::{base_variant_ref, config_pkg_dep, scoped, subst, versions};

const INDEX_TS: &str = r#"import { serve } from "@hono/node-server";
import { Hono } from "hono";

const app = new Hono();

app.get("/", (c) => c.text("Hello from {{name}}!"));

const port = 3000;

serve({ fetch: app.fetch, port }, (info) => {
  console.log("Listening on http://localhost:" + info.port);
});
"#;

/// Render a server app. The entry point is machine-generated; auth wiring
/// later replaces it wholesale via the project mutator.
pub fn plan(name: &str, scope: &str) -> Result<RenderPlan, DomainError> {
    let manifest = PackageManifest::member(scoped(scope, name))
        .script("dev", "tsx watch src/index.ts")
        .script("build", "tsc -b")
        .script("start", "node dist/index.js")
        .dep("hono", versions::HONO)
        .dep("@hono/node-server", versions::HONO_NODE_SERVER)
        .dev_dep(&config_pkg_dep(scope), WORKSPACE_SELECTOR)
        .dev_dep("@types/node", versions::TYPES_NODE)
        .dev_dep("tsx", versions::TSX)
        .dev_dep("typescript", versions::TYPESCRIPT);

    let tsconfig = TsConfig::extending(base_variant_ref(scope, "./node.json")?)
        .option("outDir", json!("dist"))
        .include(&["src"]);

    let dir = format!("apps/{name}");
    let mut plan = RenderPlan::new();
    plan.add_dir(dir.clone());
    plan.add_dir(format!("{dir}/src"));
    plan.add_file(format!("{dir}/package.json"), manifest.render());
    plan.add_file(format!("{dir}/tsconfig.json"), tsconfig.render());
    plan.add_file(format!("{dir}/src/index.ts"), subst(INDEX_TS, name, scope));
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_follows_naming_rule() {
        let plan = plan("api", "proj").unwrap();
        let unit = plan.file("apps/api/package.json").unwrap();
        let manifest: PackageManifest = serde_json::from_str(&unit.content).unwrap();
        assert_eq!(manifest.name, "@proj/api");
        assert_eq!(
            manifest.dev_dependencies.get("@proj/tsconfig"),
            Some(&WORKSPACE_SELECTOR.to_string())
        );
    }

    #[test]
    fn depends_on_server_capability_marker() {
        // The workspace reader classifies server apps by their `hono`
        // dependency; the renderer must keep that marker present.
        let plan = plan("api", "proj").unwrap();
        let unit = plan.file("apps/api/package.json").unwrap();
        let manifest: PackageManifest = serde_json::from_str(&unit.content).unwrap();
        assert!(manifest.dependencies.contains_key("hono"));
    }

    #[test]
    fn tsconfig_extends_node_variant() {
        let plan = plan("api", "proj").unwrap();
        let unit = plan.file("apps/api/tsconfig.json").unwrap();
        let ts: TsConfig = serde_json::from_str(&unit.content).unwrap();
        assert_eq!(ts.extends.as_deref(), Some("@proj/tsconfig/node.json"));
    }

    #[test]
    fn entry_point_greets_with_app_name() {
        let plan = plan("api", "proj").unwrap();
        let entry = plan.file("apps/api/src/index.ts").unwrap();
        assert!(entry.content.contains("Hello from api!"));
        assert!(entry.content.contains("new Hono()"));
    }
}
