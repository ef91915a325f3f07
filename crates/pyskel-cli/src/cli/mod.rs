//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pyskel",
    bin_name = "pyskel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a new Python project skeleton",
    long_about = "pyskel lays out a Python project: setup.py, README, VERSION, \
                  LICENSE, .gitignore, Makefile, a src/ package and a test/ \
                  package with one test stub per source file.",
    after_help = "EXAMPLES:\n\
        \x20 pyskel create --name demo --dir demo a b.py\n\
        \x20 pyskel create --name demo --dir demo --force utils --data author=Ada\n\
        \x20 pyskel templates\n\
        \x20 pyskel completions bash > /usr/share/bash-completion/completions/pyskel",
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
    /// Create a new project.
    #[command(
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 pyskel create --name demo --dir out/demo a b.py\n\
            \x20 pyskel create --name demo --dir out/demo --dry-run a\n\
            \x20 pyskel create --name demo --dir out/demo a --data author=Ada url=https://x.org\n\n\
            NOTE: --data takes every following value, so list FILEs before it\n\
            or separate them with `--`."
    )]
    Create(CreateArgs),

    /// Inspect the templates a project is rendered from.
    #[command(
        visible_alias = "ls",
        about = "List or show templates",
        after_help = "EXAMPLES:\n\
            \x20 pyskel templates\n\
            \x20 pyskel templates show setup.py.tmpl\n\
            \x20 pyskel templates --templates ./my-templates"
    )]
    Templates(TemplatesArgs),

    /// Initialise a pyskel configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pyskel init           # default location\n\
            \x20 pyskel init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pyskel completions bash > ~/.local/share/bash-completion/completions/pyskel\n\
            \x20 pyskel completions zsh  > ~/.zfunc/_pyskel\n\
            \x20 pyskel completions fish > ~/.config/fish/completions/pyskel.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `pyskel create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project name, substituted as `$name` into every template.
    #[arg(long = "name", value_name = "NAME", help = "Name of the new project")]
    pub name: String,

    /// Directory the project is created in.
    #[arg(long = "dir", value_name = "DIR", help = "Directory of the new project")]
    pub dir: PathBuf,

    /// Remove an existing directory first (destructive).
    #[arg(long = "force", help = "Overwrite an existing project")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip LICENSE and .gitignore instead of downloading them.
    #[arg(long = "offline", help = "Do not download LICENSE and .gitignore")]
    pub offline: bool,

    /// Read templates from a directory instead of the built-ins.
    #[arg(
        long = "templates",
        value_name = "DIR",
        env = "PYSKEL_TEMPLATES_DIR",
        help = "Directory holding replacement templates"
    )]
    pub templates: Option<PathBuf>,

    /// `KEY=VALUE` pairs that override template defaults.
    #[arg(
        long = "data",
        value_name = "KEY=VALUE",
        num_args = 1..,
        help = "Key-value pairs used in templates"
    )]
    pub data: Vec<String>,

    /// Logical file names; each gets a source file and a test stub.
    #[arg(
        value_name = "FILE",
        required = true,
        num_args = 1..,
        help = "Python files to create in src and test"
    )]
    pub files: Vec<String>,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `pyskel templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// What to do; defaults to `list`.
    #[command(subcommand)]
    pub action: Option<TemplatesAction>,

    /// Read templates from a directory instead of the built-ins.
    #[arg(
        long = "templates",
        value_name = "DIR",
        env = "PYSKEL_TEMPLATES_DIR",
        global = true,
        help = "Directory holding replacement templates"
    )]
    pub templates: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TemplatesAction {
    /// Summarise every template.
    List,
    /// Print one template's source.
    Show {
        /// Template file name, e.g. `setup.py.tmpl`.
        name: String,
    },
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pyskel init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pyskel completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
