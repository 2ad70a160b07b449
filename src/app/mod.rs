//! Core application logic for README Forge
//!
//! This module contains the form state machine, the generation service
//! client, repository URL validation and the host environment seam used for
//! clipboard and file export.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use readme_forge::app::{FormRuntime, ReadmeClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(ReadmeClient::new()?);
//! let mut runtime = FormRuntime::new(client);
//!
//! runtime
//!     .form_mut()
//!     .set_git_url("https://github.com/octocat/Hello-World");
//! runtime.submit_and_wait().await?;
//!
//! if let Some(readme) = runtime.form().state().content() {
//!     println!("{}", readme);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod form;
pub mod host;
pub mod models;
pub mod validator;

// Re-export main public API
pub use client::{ClientConfig, GenerationService, ReadmeClient};
pub use form::{
    FormRuntime, FormView, Notification, NotificationKind, Panel, ReadmeForm, RequestId,
    RequestState, Resolution,
};
pub use host::{ExportFile, HostEnvironment, RecordingHost, ScrollTarget, TerminalHost};
pub use models::{FormInput, ReadmeRequest};
pub use validator::{is_valid_git_url, validate};
