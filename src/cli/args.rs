//! Command-line argument parsing for README Forge
//!
//! This module defines the CLI structure using clap derive macros: the
//! interactive form, one-shot generation, URL validation and configuration
//! management.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// README Forge - Generate README.md files from a Git repository
#[derive(Parser, Debug)]
#[command(
    name = "readme_forge",
    version,
    about = "Generate README.md files from a Git repository URL",
    long_about = "Generates a README.md for a GitHub, GitLab or Bitbucket repository using a remote generation service.
Run without a subcommand to open the interactive form."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands (defaults to the interactive form)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generation service base URL (overrides config and environment)
    #[arg(long, global = true, value_name = "URL")]
    pub service_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive README form
    Form(FormArgs),

    /// Generate a README in one shot
    Generate(GenerateArgs),

    /// Check whether a repository URL is accepted
    Validate {
        /// Repository URL to check
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the interactive form
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Pre-fill the repository URL
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Pre-fill the project name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Pre-fill the project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Directory README.md is downloaded to
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Arguments for one-shot generation
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Git repository URL (GitHub, GitLab or Bitbucket)
    #[arg(short, long, value_name = "URL")]
    pub url: String,

    /// Project name
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Project description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Write README.md into this directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Replace an existing README.md instead of writing README (n).md
    #[arg(short, long)]
    pub force: bool,

    /// Copy the README to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Don't print the README to stdout
    #[arg(long)]
    pub no_print: bool,
}

/// Arguments for configuration management
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file to the user config directory
    Init {
        /// Replace an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List the configuration search path
    Path,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }

    /// Whether the selected command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Form(_)))
    }
}

impl GenerateArgs {
    /// Check argument combinations clap can't express
    pub fn validate(&self) -> Result<(), String> {
        if self.no_print && self.output.is_none() && !self.copy {
            return Err(
                "--no-print needs --output or --copy, otherwise the README is discarded"
                    .to_string(),
            );
        }
        if self.force && self.output.is_none() {
            return Err("--force only applies together with --output".to_string());
        }
        Ok(())
    }
}
