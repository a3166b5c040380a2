//! Renderer for React + Vite applications under `apps/`.

use serde_json::json;

use crate::domain::{
    DomainError, FeatureFlags, PackageManifest, RenderPlan, TsConfig, WORKSPACE_SELECTOR,
};
use crate::render::{base_variant_ref, config_pkg_dep, scoped, subst, versions};

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{name}}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#;

const MAIN_TSX: &str = r#"import { StrictMode } from "react";
import { createRoot } from "react-dom/client";
import "./index.css";
import App from "./App.tsx";

createRoot(document.getElementById("root")!).render(
  <StrictMode>
    <App />
  </StrictMode>,
);
"#;

const APP_TSX: &str = r#"function App() {
  return (
    <main>
      <h1>{{name}}</h1>
      <p>Edit src/App.tsx to get started.</p>
    </main>
  );
}

export default App;
"#;

const INDEX_CSS: &str = ":root {\n  font-family: system-ui, sans-serif;\n}\n\nbody {\n  margin: 0;\n}\n";

/// Render a UI app. Tailwind support is strictly additive: it adds two
/// devDependency entries, one import plus one plugin registration in the
/// Vite config, and one CSS import line; nothing else changes.
pub fn plan(name: &str, scope: &str, flags: FeatureFlags) -> Result<RenderPlan, DomainError> {
    let mut manifest = PackageManifest::member(scoped(scope, name))
        .script("dev", "vite")
        .script("build", "tsc -b && vite build")
        .script("preview", "vite preview")
        .dep("react", versions::REACT)
        .dep("react-dom", versions::REACT_DOM)
        .dev_dep(&config_pkg_dep(scope), WORKSPACE_SELECTOR)
        .dev_dep("@types/react", versions::TYPES_REACT)
        .dev_dep("@types/react-dom", versions::TYPES_REACT_DOM)
        .dev_dep("@vitejs/plugin-react", versions::VITE_PLUGIN_REACT)
        .dev_dep("typescript", versions::TYPESCRIPT)
        .dev_dep("vite", versions::VITE);
    if flags.tailwind {
        manifest = manifest
            .dev_dep("tailwindcss", versions::TAILWINDCSS)
            .dev_dep("@tailwindcss/vite", versions::TAILWIND_VITE);
    }

    let tsconfig = TsConfig::extending(base_variant_ref(scope, "./react.json")?)
        .option("noEmit", json!(true))
        .include(&["src"]);

    let dir = format!("apps/{name}");
    let mut plan = RenderPlan::new();
    plan.add_dir(dir.clone());
    plan.add_dir(format!("{dir}/src"));
    plan.add_file(format!("{dir}/package.json"), manifest.render());
    plan.add_file(format!("{dir}/tsconfig.json"), tsconfig.render());
    plan.add_file(format!("{dir}/vite.config.ts"), vite_config(flags));
    plan.add_file(format!("{dir}/index.html"), subst(INDEX_HTML, name, scope));
    plan.add_file(format!("{dir}/src/main.tsx"), MAIN_TSX);
    plan.add_file(format!("{dir}/src/App.tsx"), subst(APP_TSX, name, scope));
    plan.add_file(format!("{dir}/src/index.css"), index_css(flags));
    Ok(plan)
}

/// Built from an (import, plugin) list so a flag can only ever append.
fn vite_config(flags: FeatureFlags) -> String {
    let mut imports = Vec::new();
    let mut plugins = Vec::new();
    if flags.tailwind {
        imports.push(r#"import tailwindcss from "@tailwindcss/vite";"#);
        plugins.push("tailwindcss()");
    }
    imports.push(r#"import react from "@vitejs/plugin-react";"#);
    imports.push(r#"import { defineConfig } from "vite";"#);
    plugins.push("react()");

    let mut out = String::new();
    for import in imports {
        out.push_str(import);
        out.push('\n');
    }
    out.push_str("\nexport default defineConfig({\n  plugins: [");
    out.push_str(&plugins.join(", "));
    out.push_str("],\n});\n");
    out
}

fn index_css(flags: FeatureFlags) -> String {
    if flags.tailwind {
        format!("@import \"tailwindcss\";\n\n{INDEX_CSS}")
    } else {
        INDEX_CSS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn manifest_of(plan: &RenderPlan) -> PackageManifest {
        let unit = plan.file("apps/web/package.json").unwrap();
        serde_json::from_str(&unit.content).unwrap()
    }

    #[test]
    fn identity_and_config_dep_use_scope() {
        let plan = plan("web", "proj", FeatureFlags::default()).unwrap();
        let manifest = manifest_of(&plan);
        assert_eq!(manifest.name, "@proj/web");
        assert_eq!(
            manifest.dev_dependencies.get("@proj/tsconfig"),
            Some(&WORKSPACE_SELECTOR.to_string())
        );
    }

    #[test]
    fn tsconfig_extends_react_variant() {
        let plan = plan("web", "proj", FeatureFlags::default()).unwrap();
        let unit = plan.file("apps/web/tsconfig.json").unwrap();
        let ts: TsConfig = serde_json::from_str(&unit.content).unwrap();
        assert_eq!(ts.extends.as_deref(), Some("@proj/tsconfig/react.json"));
    }

    #[test]
    fn tailwind_flag_is_strictly_additive() {
        let plain = plan("web", "proj", FeatureFlags::default()).unwrap();
        let styled = plan("web", "proj", FeatureFlags::default().with_tailwind(true)).unwrap();

        // Same file set
        let plain_paths: Vec<&PathBuf> = plain.files().map(|f| &f.path).collect();
        let styled_paths: Vec<&PathBuf> = styled.files().map(|f| &f.path).collect();
        assert_eq!(plain_paths, styled_paths);

        // Only styling-related files differ, character for character
        for (a, b) in plain.files().zip(styled.files()) {
            let styling = matches!(
                a.path.file_name().and_then(|n| n.to_str()),
                Some("package.json" | "vite.config.ts" | "index.css")
            );
            if styling {
                assert_ne!(a.content, b.content, "{} should change", a.path.display());
            } else {
                assert_eq!(a.content, b.content, "{} must not change", a.path.display());
            }
        }
    }

    #[test]
    fn tailwind_adds_only_dev_dependencies() {
        let plain = manifest_of(&plan("web", "proj", FeatureFlags::default()).unwrap());
        let styled = manifest_of(
            &plan("web", "proj", FeatureFlags::default().with_tailwind(true)).unwrap(),
        );
        assert_eq!(plain.dependencies, styled.dependencies);
        let extra: Vec<_> = styled
            .dev_dependencies
            .keys()
            .filter(|k| !plain.dev_dependencies.contains_key(*k))
            .collect();
        assert_eq!(extra, ["@tailwindcss/vite", "tailwindcss"]);
    }

    #[test]
    fn vite_config_registers_tailwind_plugin() {
        let cfg = vite_config(FeatureFlags::default().with_tailwind(true));
        assert!(cfg.contains(r#"import tailwindcss from "@tailwindcss/vite";"#));
        assert!(cfg.contains("plugins: [tailwindcss(), react()]"));

        let plain = vite_config(FeatureFlags::default());
        assert!(!plain.contains("tailwind"));
        assert!(plain.contains("plugins: [react()]"));
    }

    #[test]
    fn css_gains_tailwind_import_line() {
        let styled = index_css(FeatureFlags::default().with_tailwind(true));
        assert!(styled.starts_with("@import \"tailwindcss\";\n"));
        assert!(styled.ends_with(INDEX_CSS));
    }

    #[test]
    fn index_html_titled_after_app() {
        let plan = plan("web", "proj", FeatureFlags::default()).unwrap();
        let html = plan.file("apps/web/index.html").unwrap();
        assert!(html.content.contains("<title>web</title>"));
    }
}
