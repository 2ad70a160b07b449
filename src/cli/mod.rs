//! Command-line interface components
//!
//! This module contains CLI-specific code for README Forge, including
//! argument parsing, command handlers, progress display and the interactive
//! terminal form.

pub mod args;
pub mod commands;
pub mod progress;
pub mod tui;

pub use args::{
    Cli, Commands, ConfigAction, ConfigArgs, FormArgs, GenerateArgs, GlobalArgs,
};
pub use commands::{handle_config, handle_form, handle_generate, handle_validate, load_config};
pub use progress::GenerationSpinner;
pub use tui::{run_form, FormUi};
