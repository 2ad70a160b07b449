//! README Forge CLI application
//!
//! Interactive terminal form and one-shot command for generating README.md
//! files from a Git repository URL.

use std::fs::OpenOptions;
use std::process;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, EnvFilter};

// Import CLI modules through the library
use readme_forge::cli::{
    handle_config, handle_form, handle_generate, handle_validate, load_config, Cli, Commands,
    FormArgs,
};
use readme_forge::config::AppConfig;
use readme_forge::errors::{AppError, Result};

#[tokio::main]
async fn main() {
    // Initialize program
    let result = run().await;

    // Handle any errors that occurred
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let mut cli = Cli::parse_args();
    let interactive = cli.is_interactive();
    let command = cli
        .command
        .take()
        .unwrap_or_else(|| Commands::Form(FormArgs::default()));

    match command {
        Commands::Form(args) => {
            let config = load_config(&cli.global).await?;
            init_logging(&cli, Some(&config), interactive)?;
            info!("README Forge v{} starting", env!("CARGO_PKG_VERSION"));
            handle_form(args, &config).await
        }
        Commands::Generate(args) => {
            let config = load_config(&cli.global).await?;
            init_logging(&cli, Some(&config), interactive)?;
            info!("README Forge v{} starting", env!("CARGO_PKG_VERSION"));
            handle_generate(args, &cli.global, &config).await
        }
        Commands::Validate { url } => {
            init_logging(&cli, None, false)?;
            handle_validate(&url, &cli.global)
        }
        Commands::Config(args) => {
            init_logging(&cli, None, false)?;
            handle_config(args, &cli.global).await
        }
    }
}

/// Initialize logging based on CLI verbosity and configuration
///
/// The interactive form owns the terminal, so it logs to the configured file
/// or nowhere. Everything else logs to stderr.
fn init_logging(cli: &Cli, config: Option<&AppConfig>, interactive: bool) -> Result<()> {
    let explicit = cli.global.quiet || cli.global.verbose || cli.global.very_verbose;
    let level = match config {
        Some(config) if !explicit => config.logging.level.clone(),
        _ => cli.log_level().to_string().to_lowercase(),
    };

    // Create environment filter
    let directive = format!("readme_forge={}", level)
        .parse::<Directive>()
        .map_err(|e| AppError::generic(format!("Invalid log level '{}': {}", level, e)))?;
    let filter = EnvFilter::from_default_env().add_directive(directive);

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose); // Show levels only in very verbose mode

    if interactive {
        match config.and_then(|c| c.logging.log_file.as_ref()) {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
            }
            None => builder.with_writer(std::io::sink).init(),
        }
    } else {
        builder.with_writer(std::io::stderr).init();
    }

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
    Ok(())
}
