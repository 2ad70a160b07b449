//! Prelude module for README Forge
//!
//! Re-exports the items most integrations need, so a single
//! `use readme_forge::prelude::*;` is enough to drive the form.
//!
//! # Usage
//!
//! ```rust,no_run
//! use readme_forge::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Arc::new(ReadmeClient::new()?);
//!     let mut runtime = FormRuntime::new(client);
//!     runtime.form_mut().set_git_url("https://github.com/user/repo");
//!     runtime.submit_and_wait().await?;
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

// Form and service
pub use crate::app::{
    ClientConfig,
    FormInput,
    FormRuntime,
    GenerationService,
    Panel,
    ReadmeClient,
    ReadmeForm,
    ReadmeRequest,
    RequestState,

    // Host environment
    ExportFile,
    HostEnvironment,
    RecordingHost,
    TerminalHost,

    // Validation
    is_valid_git_url,
};

pub use crate::config::AppConfig;

// Commonly used constants
pub use crate::constants::{NOTIFICATION_AUTO_HIDE, README_FILE_NAME, USER_AGENT};

// Standard library re-exports that are commonly needed
pub use std::path::{Path, PathBuf};
pub use std::sync::Arc;

pub use tokio;
