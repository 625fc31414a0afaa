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
    name    = "confgen",
    bin_name = "confgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Materialize configuration headers from #cmakedefine templates",
    long_about = "confgen reads a CMake-style header template and writes it out with \
                  every '#cmakedefine' turned into '#define'. No feature detection \
                  is performed: all guarded definitions are enabled.",
    after_help = "EXAMPLES:\n\
        \x20 confgen materialize intgemm_config.h.in -o intgemm_config.h\n\
        \x20 confgen materialize config.h.in > config.h\n\
        \x20 confgen scan config.h.in\n\
        \x20 confgen completions bash > /usr/share/bash-completion/completions/confgen",
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
    /// Materialize a header from a template.
    #[command(
        visible_alias = "m",
        about = "Materialize a header from a template",
        after_help = "EXAMPLES:\n\
            \x20 confgen materialize config.h.in -o config.h\n\
            \x20 confgen materialize config.h.in --marker '#cmakedefine01' --replacement '#define'"
    )]
    Materialize(MaterializeArgs),

    /// Count the markers in a template without writing anything.
    #[command(
        about = "Report marker occurrences in a template",
        after_help = "EXAMPLES:\n\
            \x20 confgen scan config.h.in\n\
            \x20 confgen scan config.h.in --output-format json"
    )]
    Scan(ScanArgs),

    /// Initialise a confgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 confgen init           # default location\n\
            \x20 confgen init --local   # .confgen.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 confgen completions bash > ~/.local/share/bash-completion/completions/confgen\n\
            \x20 confgen completions zsh  > ~/.zfunc/_confgen"
    )]
    Completions(CompletionsArgs),

    /// Inspect the confgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 confgen config get substitution.marker\n\
            \x20 confgen config list\n\
            \x20 confgen config path"
    )]
    Config(ConfigCommands),
}

// ── substitution overrides ────────────────────────────────────────────────────

/// Per-invocation overrides of the configured substitution rule.
#[derive(Debug, Clone, Default, Args)]
pub struct SubstitutionArgs {
    /// Token to search for.
    #[arg(long = "marker", value_name = "TOKEN", help = "Marker token to replace")]
    pub marker: Option<String>,

    /// Token written in its place.
    #[arg(
        long = "replacement",
        value_name = "TOKEN",
        help = "Token written in place of each marker"
    )]
    pub replacement: Option<String>,
}

// ── materialize ───────────────────────────────────────────────────────────────

/// Arguments for `confgen materialize`.
#[derive(Debug, Args)]
pub struct MaterializeArgs {
    /// Path to the header template.
    #[arg(value_name = "TEMPLATE", help = "Template file to read")]
    pub template: PathBuf,

    /// Where to write the header. Defaults to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: stdout)"
    )]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub substitution: SubstitutionArgs,
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `confgen scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Path to the header template.
    #[arg(value_name = "TEMPLATE", help = "Template file to read")]
    pub template: PathBuf,

    #[command(flatten)]
    pub substitution: SubstitutionArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `confgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.confgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `confgen completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `confgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `substitution.marker`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
