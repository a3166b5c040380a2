//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputMode};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackgen",
    bin_name = "stackgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant full-stack monorepo scaffolding",
    long_about = "Stackgen generates a TypeScript monorepo skeleton and grows it \
                  incrementally: init the workspace, then add apps, packages, \
                  and auth wiring on top.",
    after_help = "EXAMPLES:\n\
        \x20 stackgen init my-shop\n\
        \x20 stackgen add app web --framework react --tailwind\n\
        \x20 stackgen add app api --framework server\n\
        \x20 stackgen add package db\n\
        \x20 stackgen add auth --app api\n\
        \x20 stackgen completions bash > /usr/share/bash-completion/completions/stackgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new monorepo workspace.
    #[command(
        visible_alias = "i",
        about = "Create a new workspace",
        after_help = "EXAMPLES:\n\
            \x20 stackgen init my-shop              # creates ./my-shop\n\
            \x20 stackgen init ../projects/my-shop  # creates one level up\n\
            \x20 stackgen init                      # current directory\n\
            \x20 stackgen init my-shop --no-git --no-install"
    )]
    Init(InitArgs),

    /// Add a member or feature to an existing workspace.
    #[command(
        visible_alias = "a",
        about = "Add an app, package, or feature",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stackgen add app web --framework react\n\
            \x20 stackgen add package db\n\
            \x20 stackgen add auth --app api"
    )]
    Add(AddCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackgen completions bash > ~/.local/share/bash-completion/completions/stackgen\n\
            \x20 stackgen completions zsh  > ~/.zfunc/_stackgen\n\
            \x20 stackgen completions fish > ~/.config/fish/completions/stackgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Workspace name or path.  A plain name creates `./name`; a path like
    /// `../foo` places the workspace one level up.  Omitted (or `.`), the
    /// current directory becomes the workspace.
    #[arg(
        value_name = "NAME",
        help = "Workspace name or path (defaults to the current directory)"
    )]
    pub name: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Skip repository initialisation.
    #[arg(long = "no-git", help = "Do not run git init")]
    pub no_git: bool,

    /// Skip the dependency install step.
    #[arg(long = "no-install", help = "Do not run the package manager install")]
    pub no_install: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Subcommands for `stackgen add`.
#[derive(Debug, Subcommand)]
pub enum AddCommands {
    /// Add an application under `apps/`.
    #[command(
        about = "Add an application",
        after_help = "EXAMPLES:\n\
            \x20 stackgen add app web --framework react\n\
            \x20 stackgen add app web --framework react --tailwind\n\
            \x20 stackgen add app api --framework server"
    )]
    App(AddAppArgs),

    /// Add a package under `packages/`.
    #[command(
        about = "Add a package",
        after_help = "EXAMPLES:\n\
            \x20 stackgen add package db      # the data-access package\n\
            \x20 stackgen add package utils   # a plain shared package"
    )]
    Package(AddPackageArgs),

    /// Wire authentication into a server app.
    #[command(
        about = "Add authentication",
        after_help = "EXAMPLES:\n\
            \x20 stackgen add auth            # pick the only server app\n\
            \x20 stackgen add auth --app api  # target a specific app"
    )]
    Auth(AddAuthArgs),
}

/// Arguments for `stackgen add app`.
#[derive(Debug, Args)]
pub struct AddAppArgs {
    /// App name (becomes `apps/<name>` and `@scope/<name>`).
    #[arg(value_name = "NAME", help = "App name")]
    pub name: String,

    /// App framework.  Falls back to `defaults.framework` from the config
    /// file when omitted.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        value_enum,
        help = "App framework (default from config)"
    )]
    pub framework: Option<FrameworkArg>,

    /// Include the Tailwind CSS toolkit (react only).
    #[arg(long = "tailwind", help = "Add Tailwind CSS (react apps only)")]
    pub tailwind: bool,

    /// Skip the dependency install step.
    #[arg(long = "no-install", help = "Do not run the package manager install")]
    pub no_install: bool,

    /// Preview without writing.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Arguments for `stackgen add package`.
#[derive(Debug, Args)]
pub struct AddPackageArgs {
    /// Package name.  `db` selects the data-access package.
    #[arg(value_name = "NAME", help = "Package name")]
    pub name: String,

    /// Skip the dependency install step.
    #[arg(long = "no-install", help = "Do not run the package manager install")]
    pub no_install: bool,

    /// Preview without writing.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Arguments for `stackgen add auth`.
#[derive(Debug, Args)]
pub struct AddAuthArgs {
    /// Target server app.  Prompted for when omitted and ambiguous.
    #[arg(long = "app", value_name = "NAME", help = "Server app to wire auth into")]
    pub app: Option<String>,

    /// Skip prompts; fail instead of asking when the target is ambiguous.
    #[arg(short = 'y', long = "yes", help = "Never prompt")]
    pub yes: bool,

    /// Skip the dependency install step.
    #[arg(long = "no-install", help = "Do not run the package manager install")]
    pub no_install: bool,

    /// Preview without writing.
    #[arg(long = "dry-run", help = "Show what would be changed without changing")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// App frameworks accepted by `add app`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FrameworkArg {
    /// React + Vite UI app.
    React,
    /// Hono server app.  Also accepted as `hono`.
    #[value(alias = "hono")]
    Server,
}

impl std::fmt::Display for FrameworkArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::React => write!(f, "react"),
            Self::Server => write!(f, "server"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn framework_display() {
        assert_eq!(FrameworkArg::React.to_string(), "react");
        assert_eq!(FrameworkArg::Server.to_string(), "server");
    }

    #[test]
    fn parse_init_command() {
        let cli = Cli::parse_from(["stackgen", "init", "my-shop", "--no-git"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.name.as_deref(), Some("my-shop"));
                assert!(args.no_git);
                assert!(!args.no_install);
            }
            other => panic!("expected Init, got {other:?}"),
        }
    }

    #[test]
    fn init_name_is_optional() {
        let cli = Cli::parse_from(["stackgen", "init", "--yes"]);
        match cli.command {
            Commands::Init(args) => {
                assert!(args.name.is_none());
                assert!(args.yes);
            }
            other => panic!("expected Init, got {other:?}"),
        }
    }

    #[test]
    fn parse_add_app_with_tailwind() {
        let cli = Cli::parse_from([
            "stackgen", "add", "app", "web", "--framework", "react", "--tailwind",
        ]);
        match cli.command {
            Commands::Add(AddCommands::App(args)) => {
                assert_eq!(args.name, "web");
                assert_eq!(args.framework, Some(FrameworkArg::React));
                assert!(args.tailwind);
            }
            other => panic!("expected Add App, got {other:?}"),
        }
    }

    #[test]
    fn hono_alias_selects_server() {
        let cli = Cli::parse_from(["stackgen", "add", "app", "api", "-f", "hono"]);
        match cli.command {
            Commands::Add(AddCommands::App(args)) => {
                assert_eq!(args.framework, Some(FrameworkArg::Server));
            }
            other => panic!("expected Add App, got {other:?}"),
        }
    }

    #[test]
    fn framework_flag_may_be_omitted() {
        let cli = Cli::parse_from(["stackgen", "add", "app", "web"]);
        match cli.command {
            Commands::Add(AddCommands::App(args)) => assert!(args.framework.is_none()),
            other => panic!("expected Add App, got {other:?}"),
        }
    }

    #[test]
    fn parse_add_auth_without_app() {
        let cli = Cli::parse_from(["stackgen", "add", "auth"]);
        match cli.command {
            Commands::Add(AddCommands::Auth(args)) => assert!(args.app.is_none()),
            other => panic!("expected Add Auth, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["stackgen", "--quiet", "--verbose", "init", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn output_format_accepts_plain_and_pretty_only() {
        let cli = Cli::parse_from(["stackgen", "--output-format", "plain", "init", "x"]);
        assert_eq!(cli.global.output_format, OutputMode::Plain);

        let cli = Cli::parse_from(["stackgen", "--output-format", "pretty", "init", "x"]);
        assert_eq!(cli.global.output_format, OutputMode::Pretty);

        // There is no machine-readable format.
        let result = Cli::try_parse_from(["stackgen", "--output-format", "json", "init", "x"]);
        assert!(result.is_err());
    }
}
