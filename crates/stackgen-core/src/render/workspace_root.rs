//! Renderer for the workspace root artifact.

use crate::domain::{PackageManifest, RenderPlan};
use crate::render::subst;

const GITIGNORE: &str = "\
node_modules/
dist/
.env
*.log
.DS_Store
";

const README: &str = "\
# {{name}}

Monorepo scaffolded with stackgen.

## Layout

- `apps/` - applications
- `packages/` - shared packages

## Commands

```sh
bun install      # install all workspace dependencies
bun run dev      # run every member's dev script
bun run build    # build every member
```
";

/// Render the root workspace: manifest, housekeeping files, and the two
/// member group directories. The shared config package is rendered
/// separately and appended to the same plan by the init use case.
pub fn plan(workspace_name: &str) -> RenderPlan {
    let manifest = PackageManifest {
        name: workspace_name.into(),
        private: true,
        workspaces: Some(vec!["apps/*".into(), "packages/*".into()]),
        ..PackageManifest::default()
    }
    .script("build", "bun run --filter '*' build")
    .script("dev", "bun run --filter '*' dev");

    let mut plan = RenderPlan::new();
    plan.add_dir("apps");
    plan.add_dir("packages");
    plan.add_file("package.json", manifest.render());
    plan.add_file(".gitignore", GITIGNORE);
    plan.add_file("README.md", subst(README, workspace_name, workspace_name));
    plan
}
