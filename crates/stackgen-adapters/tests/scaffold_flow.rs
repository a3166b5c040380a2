//! End-to-end scaffold flows against the in-memory filesystem.
//!
//! These tests drive the core service through the same ports the CLI uses,
//! with `MemoryFilesystem` standing in for disk and a no-op process runner
//! standing in for git and the package manager.

use std::path::Path;

use serde_json::Value;

use stackgen_adapters::{MemoryFilesystem, NoopProcessRunner};
use stackgen_core::application::{
    ApplicationError, InvocationContext, ScaffoldService, ServiceOptions, WriteAction,
};
use stackgen_core::domain::{FeatureFlags, Framework};
use stackgen_core::error::Error;

const ROOT: &str = "/ws/shop";

fn service(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(
        InvocationContext::new(ROOT),
        Box::new(fs.clone()),
        Box::new(NoopProcessRunner::new()),
        ServiceOptions::default(),
    )
}

fn read(fs: &MemoryFilesystem, rel: &str) -> String {
    use stackgen_core::application::ports::Filesystem;
    fs.read_file(&Path::new(ROOT).join(rel))
        .unwrap_or_else(|_| panic!("missing file: {rel}"))
}

fn read_json(fs: &MemoryFilesystem, rel: &str) -> Value {
    serde_json::from_str(&read(fs, rel)).unwrap_or_else(|_| panic!("invalid json: {rel}"))
}

#[test]
fn init_creates_workspace_skeleton() {
    let fs = MemoryFilesystem::new();
    service(&fs).init("shop").unwrap();

    let root = read_json(&fs, "package.json");
    assert_eq!(root["name"], "shop");
    assert_eq!(root["private"], true);
    assert_eq!(
        root["workspaces"],
        serde_json::json!(["apps/*", "packages/*"])
    );

    assert!(read(&fs, ".gitignore").contains("node_modules/"));
    assert!(read(&fs, "README.md").starts_with("# shop"));

    let tsconfig_pkg = read_json(&fs, "packages/tsconfig/package.json");
    assert_eq!(tsconfig_pkg["name"], "@shop/tsconfig");
    let exports: Vec<&str> = tsconfig_pkg["exports"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(exports, vec!["./base.json", "./node.json", "./react.json"]);
    for variant in ["base.json", "node.json", "react.json"] {
        read(&fs, &format!("packages/tsconfig/{variant}"));
    }
}

#[test]
fn init_twice_succeeds_without_changes() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    svc.init("shop").unwrap();
    let before = fs.list_files();

    let outcome = svc.init("shop").unwrap();
    assert_eq!(fs.list_files(), before);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn init_rejects_target_with_stray_content() {
    use stackgen_core::application::ports::Filesystem;
    let fs = MemoryFilesystem::new();
    fs.write_file(&Path::new(ROOT).join("random.txt"), "not ours")
        .unwrap();

    let err = service(&fs).init("shop").unwrap_err();
    assert!(matches!(
        err,
        Error::Application(ApplicationError::TargetNotEmpty { .. })
    ));
    // Nothing was written.
    assert_eq!(fs.list_files(), vec![Path::new(ROOT).join("random.txt")]);
}

#[test]
fn init_rejects_a_foreign_node_project() {
    use stackgen_core::application::ports::Filesystem;
    let fs = MemoryFilesystem::new();
    fs.write_file(
        &Path::new(ROOT).join("package.json"),
        "{\n  \"name\": \"legacy-app\",\n  \"version\": \"2.0.0\"\n}\n",
    )
    .unwrap();
    fs.write_file(
        &Path::new(ROOT).join("src/app.js"),
        "module.exports = {};\n",
    )
    .unwrap();
    let before = fs.list_files();

    // Having a package.json is not enough; it must be one of ours.
    let err = service(&fs).init("shop").unwrap_err();
    assert!(matches!(
        err,
        Error::Application(ApplicationError::TargetNotEmpty { .. })
    ));
    assert_eq!(fs.list_files(), before);
}

#[test]
fn generated_members_cross_reference_through_the_scope() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    svc.init("shop").unwrap();
    svc.add_app("web", Framework::React, FeatureFlags::default())
        .unwrap();
    svc.add_app("api", Framework::Server, FeatureFlags::default())
        .unwrap();

    let web = read_json(&fs, "apps/web/package.json");
    assert_eq!(web["name"], "@shop/web");
    assert_eq!(web["devDependencies"]["@shop/tsconfig"], "workspace:*");

    let web_ts = read_json(&fs, "apps/web/tsconfig.json");
    assert_eq!(web_ts["extends"], "@shop/tsconfig/react.json");

    let api_ts = read_json(&fs, "apps/api/tsconfig.json");
    assert_eq!(api_ts["extends"], "@shop/tsconfig/node.json");
}

#[test]
fn full_flow_wires_auth_into_the_server_app() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    svc.init("shop").unwrap();
    svc.add_app("web", Framework::React, FeatureFlags::default())
        .unwrap();
    svc.add_app("api", Framework::Server, FeatureFlags::default())
        .unwrap();
    svc.add_package("db").unwrap();
    svc.add_auth(None).unwrap();

    let auth = read(&fs, "apps/api/src/auth.ts");
    assert!(auth.contains("betterAuth"));
    assert!(auth.contains("from \"@shop/db\""));

    let entry = read(&fs, "apps/api/src/index.ts");
    assert!(entry.contains("auth.handler"));
    assert!(entry.contains("Hello from api!"));

    let schema = read(&fs, "packages/db/src/schema.ts");
    assert!(schema.contains("drizzle-orm/sqlite-core"));
    assert_eq!(schema.matches("sqliteTable(").count(), 4);

    let manifest = read_json(&fs, "apps/api/package.json");
    assert_eq!(manifest["dependencies"]["better-auth"], "^1.2.4");
    assert_eq!(manifest["dependencies"]["@shop/db"], "workspace:*");
    // Pre-existing keys survive the patch.
    assert_eq!(manifest["dependencies"]["hono"], "^4.7.4");
    assert_eq!(manifest["name"], "@shop/api");

    assert!(read(&fs, "apps/api/.env").contains("BETTER_AUTH_SECRET"));
}

#[test]
fn add_auth_twice_does_not_duplicate_anything() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    svc.init("shop").unwrap();
    svc.add_app("api", Framework::Server, FeatureFlags::default())
        .unwrap();
    svc.add_package("db").unwrap();
    svc.add_auth(None).unwrap();
    svc.add_auth(None).unwrap();

    let schema = read(&fs, "packages/db/src/schema.ts");
    assert_eq!(schema.matches("drizzle-orm/sqlite-core").count(), 1);
    assert_eq!(schema.matches("sqliteTable(\"user\"").count(), 1);

    let env = read(&fs, "apps/api/.env");
    assert_eq!(env.matches("BETTER_AUTH_SECRET").count(), 1);
}

#[test]
fn add_auth_dry_run_describes_everything_without_writing() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    svc.init("shop").unwrap();
    svc.add_app("api", Framework::Server, FeatureFlags::default())
        .unwrap();
    svc.add_package("db").unwrap();
    let before = fs.list_files();

    let dry = ScaffoldService::new(
        InvocationContext::new(ROOT),
        Box::new(fs.clone()),
        Box::new(NoopProcessRunner::new()),
        ServiceOptions {
            dry_run: true,
            ..ServiceOptions::default()
        },
    );
    let outcome = dry.add_auth(None).unwrap();

    // New files and the three mutations are all reported as planned.
    let planned: Vec<String> = outcome
        .applied
        .iter()
        .map(|a| a.path.display().to_string())
        .collect();
    for rel in [
        "apps/api/src/auth.ts",
        "packages/db/src/schema.ts",
        "apps/api/src/index.ts",
        "apps/api/package.json",
    ] {
        assert!(planned.contains(&rel.to_string()), "not planned: {rel}");
    }
    assert!(outcome.applied.iter().all(|a| a.action == WriteAction::Planned));

    // And nothing changed on disk.
    assert_eq!(fs.list_files(), before);
    assert!(!read(&fs, "apps/api/src/index.ts").contains("auth.handler"));
}

#[test]
fn add_auth_requires_the_data_package() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    svc.init("shop").unwrap();
    svc.add_app("api", Framework::Server, FeatureFlags::default())
        .unwrap();

    let err = svc.add_auth(None).unwrap_err();
    assert!(matches!(
        err,
        Error::Application(ApplicationError::MissingPrerequisite { .. })
    ));
}

#[test]
fn add_auth_rejects_a_ui_app_target() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    svc.init("shop").unwrap();
    svc.add_app("web", Framework::React, FeatureFlags::default())
        .unwrap();
    svc.add_package("db").unwrap();

    let err = svc.add_auth(Some("web")).unwrap_err();
    assert!(matches!(
        err,
        Error::Application(ApplicationError::IneligibleMember { .. })
    ));

    let err = svc.add_auth(Some("ghost")).unwrap_err();
    assert!(matches!(
        err,
        Error::Application(ApplicationError::MemberNotFound { .. })
    ));
}

#[test]
fn auth_candidates_lists_server_apps_only() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    svc.init("shop").unwrap();
    svc.add_app("web", Framework::React, FeatureFlags::default())
        .unwrap();
    svc.add_app("api", Framework::Server, FeatureFlags::default())
        .unwrap();

    assert_eq!(svc.auth_candidates().unwrap(), vec!["api".to_string()]);
}

#[test]
fn tailwind_flag_is_strictly_additive() {
    let plain_fs = MemoryFilesystem::new();
    let plain = service(&plain_fs);
    plain.init("shop").unwrap();
    plain
        .add_app("web", Framework::React, FeatureFlags::default())
        .unwrap();

    let styled_fs = MemoryFilesystem::new();
    let styled = service(&styled_fs);
    styled.init("shop").unwrap();
    styled
        .add_app("web", Framework::React, FeatureFlags::default().with_tailwind(true))
        .unwrap();

    // Same file set either way.
    assert_eq!(plain_fs.list_files(), styled_fs.list_files());

    // Only the three files the flag touches may differ.
    use stackgen_core::application::ports::Filesystem;
    let changed: Vec<String> = plain_fs
        .list_files()
        .into_iter()
        .filter(|p| plain_fs.read_file(p).unwrap() != styled_fs.read_file(p).unwrap())
        .map(|p| {
            p.strip_prefix(ROOT)
                .unwrap()
                .display()
                .to_string()
        })
        .collect();
    assert_eq!(
        changed,
        vec![
            "apps/web/package.json".to_string(),
            "apps/web/src/index.css".to_string(),
            "apps/web/vite.config.ts".to_string(),
        ]
    );

    let styled_css = read(&styled_fs, "apps/web/src/index.css");
    assert!(styled_css.starts_with("@import \"tailwindcss\";"));
}

#[test]
fn add_app_refuses_to_clobber_a_modified_member() {
    use stackgen_core::application::ports::Filesystem;
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    svc.init("shop").unwrap();
    svc.add_app("api", Framework::Server, FeatureFlags::default())
        .unwrap();

    // User edits, then accidentally re-runs the add command.
    fs.write_file(
        &Path::new(ROOT).join("apps/api/src/index.ts"),
        "// hand-edited\n",
    )
    .unwrap();

    let err = svc
        .add_app("api", Framework::Server, FeatureFlags::default())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Application(ApplicationError::AlreadyExists { .. })
    ));

    // The edit survives.
    assert_eq!(read(&fs, "apps/api/src/index.ts"), "// hand-edited\n");
}
