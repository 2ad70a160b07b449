//! README Forge Library
//!
//! A Rust library and terminal front end for generating `README.md` files from
//! a Git repository URL via a remote generation service. Provides URL
//! validation, a request state machine that tolerates overlapping requests,
//! and clipboard and file export of the result.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
