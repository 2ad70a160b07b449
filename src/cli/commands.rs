//! Command handlers for README Forge CLI
//!
//! This module implements the command handlers that coordinate between CLI
//! arguments and the core application functionality.

use std::io::{self, Write};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::app::form::{ActionOutcome, FormRuntime, ReadmeForm, RequestState};
use crate::app::{validator, FormInput, ReadmeClient, TerminalHost};
use crate::cli::progress::GenerationSpinner;
use crate::cli::tui;
use crate::cli::{ConfigAction, ConfigArgs, FormArgs, GenerateArgs, GlobalArgs};
use crate::config::AppConfig;
use crate::constants::messages;
use crate::errors::{AppError, Result};

/// Load configuration and apply CLI overrides
pub async fn load_config(global: &GlobalArgs) -> Result<AppConfig> {
    let mut config = AppConfig::load(global.config.clone()).await?;

    if let Some(url) = &global.service_url {
        debug!("Service URL overridden on the command line");
        config.service.base_url = url.clone();
        config.validate()?;
    }

    Ok(config)
}

fn build_client(config: &AppConfig) -> Result<Arc<ReadmeClient>> {
    let client = ReadmeClient::with_config(config.to_client_config())?;
    Ok(Arc::new(client))
}

/// Handle the interactive form
///
/// Owns the terminal until the user quits. Pre-filled values come from the
/// command line; everything else starts empty.
pub async fn handle_form(args: FormArgs, config: &AppConfig) -> Result<()> {
    let client = build_client(config)?;

    let mut form = ReadmeForm::new();
    if let Some(url) = args.url {
        form.set_git_url(url);
    }
    if let Some(name) = args.name {
        form.set_project_name(name);
    }
    if let Some(description) = args.description {
        form.set_description(description);
    }

    let output_dir = args.output.unwrap_or_else(|| config.output_dir());
    let host = TerminalHost::new(output_dir, config.export.overwrite);
    let runtime = FormRuntime::with_form(form, client);

    info!("Opening interactive form");
    tui::run_form(runtime, host).await
}

/// Handle one-shot generation
///
/// Submits through the same form state machine as the interactive mode, then
/// prints, exports or copies the result as requested.
pub async fn handle_generate(
    args: GenerateArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> Result<()> {
    args.validate().map_err(AppError::generic)?;

    let client = build_client(config)?;

    let input = FormInput::with_url(args.url.as_str())
        .project_name(args.name.as_str())
        .description(args.description.as_str());
    let mut runtime = FormRuntime::with_form(ReadmeForm::with_input(input), client);

    let spinner = GenerationSpinner::start(messages::IN_PROGRESS, global.quiet);
    let submitted = runtime.submit_and_wait().await;
    spinner.finish();
    submitted?;

    let form = runtime.form_mut();
    let readme = match form.state() {
        RequestState::Succeeded(content) => content.clone(),
        RequestState::Failed(message) => return Err(AppError::generic(message.clone())),
        other => {
            return Err(AppError::generic(format!(
                "Generation ended in unexpected state: {}",
                other.name()
            )))
        }
    };

    if !args.no_print {
        print!("{}", readme);
        if !readme.ends_with('\n') {
            println!();
        }
    }

    if let Some(output_dir) = args.output {
        let mut host = TerminalHost::new(output_dir, args.force || config.export.overwrite);
        report_action(form.download(&mut host), form, global.quiet)?;
        if let Some(path) = host.last_export() {
            info!("README written to {}", path.display());
            if !global.quiet {
                eprintln!("📄 {}", path.display());
            }
        }
    }

    if args.copy {
        // The process exits right after this, so the write has to outlive it
        let mut host = TerminalHost::new(config.output_dir(), false).with_clipboard_hold();
        if cfg!(all(unix, not(target_os = "macos"))) && !global.quiet {
            io::stdout().flush()?;
            eprintln!("📋 Holding the README on the clipboard until something else is copied");
        }
        report_action(form.copy(&mut host), form, global.quiet)?;
    }

    Ok(())
}

/// Surface the outcome of a post-result action on stderr
fn report_action(outcome: ActionOutcome, form: &ReadmeForm, quiet: bool) -> Result<()> {
    match outcome {
        ActionOutcome::Done => {
            if let (false, Some(notification)) = (quiet, form.notification()) {
                eprintln!("✅ {}", notification.message);
            }
            Ok(())
        }
        ActionOutcome::HostFailed(message) => Err(AppError::generic(message)),
        ActionOutcome::NoResult => Err(AppError::generic("No README to act on")),
    }
}

/// Handle URL validation
///
/// Exits with an error for rejected URLs so the command is usable in scripts.
pub fn handle_validate(url: &str, global: &GlobalArgs) -> Result<()> {
    match validator::validate(url) {
        Ok(()) => {
            if !global.quiet {
                println!("✅ {}", url);
            }
            Ok(())
        }
        Err(e) => {
            warn!("Rejected repository URL: {}", url);
            if !global.quiet {
                println!("❌ {}", url);
                println!("   {}", messages::GIT_URL_HELPER);
            }
            Err(e.into())
        }
    }
}

/// Handle configuration management commands
pub async fn handle_config(args: ConfigArgs, global: &GlobalArgs) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let config = load_config(global).await?;
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            let (path, created) = AppConfig::initialize_first_run(force).await?;
            if created {
                println!("📁 Created default configuration file:");
                println!("   {}", path.display());
                println!("   You can customize settings by editing this file.");
            } else {
                println!(
                    "✅ Configuration already exists at {}. Use --force to replace it.",
                    path.display()
                );
            }
        }
        ConfigAction::Path => {
            for path in AppConfig::search_paths() {
                let marker = if path.exists() { "✅" } else { "  " };
                println!("{} {}", marker, path.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_command_accepts_and_rejects() {
        let global = GlobalArgs {
            quiet: true,
            ..Default::default()
        };

        assert!(handle_validate("https://github.com/octocat/Hello-World", &global).is_ok());

        let err = handle_validate("https://github.com/octocat", &global).unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[tokio::test]
    async fn test_load_config_applies_service_url_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("readme-forge.toml");
        tokio::fs::write(&path, "[service]\nbase_url = \"http://file.example\"\n")
            .await
            .unwrap();

        let global = GlobalArgs {
            config: Some(path),
            service_url: Some("http://cli.example:9000".to_string()),
            ..Default::default()
        };

        let config = load_config(&global).await.unwrap();
        assert_eq!(config.service.base_url, "http://cli.example:9000");
    }

    #[tokio::test]
    async fn test_load_config_rejects_bad_cli_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("readme-forge.toml");
        tokio::fs::write(&path, "").await.unwrap();

        let global = GlobalArgs {
            config: Some(path),
            service_url: Some("not a url".to_string()),
            ..Default::default()
        };

        let err = load_config(&global).await.unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_url_before_any_request() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("readme-forge.toml");
        // Nothing listens here; a request would fail as a transport error
        tokio::fs::write(&path, "[service]\nbase_url = \"http://127.0.0.1:9\"\n")
            .await
            .unwrap();

        let global = GlobalArgs {
            quiet: true,
            config: Some(path),
            ..Default::default()
        };
        let args = GenerateArgs {
            url: "https://example.com/not/a-repo".to_string(),
            name: String::new(),
            description: String::new(),
            output: None,
            force: false,
            copy: false,
            no_print: false,
        };

        let config = load_config(&global).await.unwrap();
        let err = handle_generate(args, &global, &config).await.unwrap_err();
        assert_eq!(err.category(), "submit");
    }
}
