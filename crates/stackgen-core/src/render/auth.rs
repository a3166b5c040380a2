//! Renderer for auth wiring across an existing server app and the data
//! package.
//!
//! Auth is a cross-cutting artifact: it renders two new files into the
//! target app and supplies the fragments the project mutator applies to
//! already-materialized files (schema append, entry-point replacement,
//! manifest dependency patch).

use crate::domain::{RenderPlan, WORKSPACE_SELECTOR, WriteMode};
use crate::render::{packages::DATA_PKG_NAME, scoped, subst, versions};

/// Marker guarding the `.env` block against duplicate appends.
pub const ENV_MARKER: &str = "BETTER_AUTH_SECRET";

/// Marker the mutator checks before appending the table definitions.
pub const SCHEMA_MARKER: &str = "sqliteTable(\"user\"";

/// Substring identifying the required schema import.
pub const SCHEMA_IMPORT_MARKER: &str = "drizzle-orm/sqlite-core";

/// Import line prepended to the schema file when absent.
pub const SCHEMA_IMPORT: &str =
    "import { sqliteTable, text, integer } from \"drizzle-orm/sqlite-core\";\n";

const ENV_BLOCK: &str = "\
# Auth credentials
BETTER_AUTH_SECRET=replace-with-a-long-random-string
BETTER_AUTH_URL=http://localhost:3000
";

const AUTH_TS: &str = r#"import { betterAuth } from "better-auth";
import { drizzleAdapter } from "better-auth/adapters/drizzle";
import { db } from "@{{scope}}/db";
import * as schema from "@{{scope}}/db/schema";

export const auth = betterAuth({
  database: drizzleAdapter(db, {
    provider: "sqlite",
    schema,
  }),
  emailAndPassword: {
    enabled: true,
  },
});
"#;

const WIRED_INDEX_TS: &str = r#"import { serve } from "@hono/node-server";
import { Hono } from "hono";
import { cors } from "hono/cors";
import { auth } from "./auth";

const app = new Hono();

app.use(
  "*",
  cors({
    origin: "http://localhost:5173",
    credentials: true,
  }),
);

app.on(["GET", "POST"], "/api/auth/*", (c) => auth.handler(c.req.raw));

app.get("/", (c) => c.text("Hello from {{name}}!"));

const port = 3000;

serve({ fetch: app.fetch, port }, (info) => {
  console.log("Listening on http://localhost:" + info.port);
});
"#;

const SCHEMA_TABLES: &str = r#"
export const user = sqliteTable("user", {
  id: text("id").primaryKey(),
  name: text("name").notNull(),
  email: text("email").notNull().unique(),
  emailVerified: integer("email_verified", { mode: "boolean" }).notNull(),
  image: text("image"),
  createdAt: integer("created_at", { mode: "timestamp" }).notNull(),
  updatedAt: integer("updated_at", { mode: "timestamp" }).notNull(),
});

export const session = sqliteTable("session", {
  id: text("id").primaryKey(),
  expiresAt: integer("expires_at", { mode: "timestamp" }).notNull(),
  token: text("token").notNull().unique(),
  ipAddress: text("ip_address"),
  userAgent: text("user_agent"),
  userId: text("user_id")
    .notNull()
    .references(() => user.id),
  createdAt: integer("created_at", { mode: "timestamp" }).notNull(),
  updatedAt: integer("updated_at", { mode: "timestamp" }).notNull(),
});

export const account = sqliteTable("account", {
  id: text("id").primaryKey(),
  accountId: text("account_id").notNull(),
  providerId: text("provider_id").notNull(),
  userId: text("user_id")
    .notNull()
    .references(() => user.id),
  accessToken: text("access_token"),
  refreshToken: text("refresh_token"),
  idToken: text("id_token"),
  password: text("password"),
  createdAt: integer("created_at", { mode: "timestamp" }).notNull(),
  updatedAt: integer("updated_at", { mode: "timestamp" }).notNull(),
});

export const verification = sqliteTable("verification", {
  id: text("id").primaryKey(),
  identifier: text("identifier").notNull(),
  value: text("value").notNull(),
  expiresAt: integer("expires_at", { mode: "timestamp" }).notNull(),
  createdAt: integer("created_at", { mode: "timestamp" }).notNull(),
});
"#;

/// Render the freshly-created portion of auth wiring for the target app.
///
/// `auth.ts` is CreateOrReplace (machine-generated, safe to re-render); the
/// `.env` block appends only when its marker is absent, so re-running the
/// command never duplicates it.
pub fn plan(scope: &str, app_name: &str) -> RenderPlan {
    let dir = format!("apps/{app_name}");
    let mut plan = RenderPlan::new();
    plan.add_unit(
        format!("{dir}/src/auth.ts"),
        subst(AUTH_TS, app_name, scope),
        WriteMode::CreateOrReplace,
    );
    plan.add_unit(
        format!("{dir}/.env"),
        ENV_BLOCK,
        WriteMode::AppendIfAbsent {
            marker: ENV_MARKER.into(),
        },
    );
    plan
}

/// The replacement server entry point with session/auth middleware wired in.
pub fn wired_server_entry(scope: &str, app_name: &str) -> String {
    subst(WIRED_INDEX_TS, app_name, scope)
}

/// The four exported table definitions appended to the schema file.
pub fn schema_tables() -> &'static str {
    SCHEMA_TABLES
}

/// Dependencies patched into the target app's manifest.
pub fn dependency_patch(scope: &str) -> Vec<(String, String)> {
    vec![
        ("better-auth".into(), versions::BETTER_AUTH.into()),
        (scoped(scope, DATA_PKG_NAME), WORKSPACE_SELECTOR.into()),
    ]
}
