//! Application constants for README Forge
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// Environment variable names for configuration overrides
pub mod env {
    /// Overrides the generation service base URL
    pub const SERVICE_URL: &str = "README_FORGE_SERVICE_URL";

    /// Overrides the directory README.md files are exported to
    pub const OUTPUT_DIR: &str = "README_FORGE_OUTPUT_DIR";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "README-Forge/0.1.0";

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection pool idle timeout
    pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
}

/// Generation service endpoint
pub mod service {
    /// Default base URL of the README generation service
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

    /// Path of the README generation endpoint
    pub const GENERATE_PATH: &str = "/api/readme/generate";
}

/// Git repository URL validation
pub mod validation {
    /// Accepted repository URL shape. `\w` is spelled out as ASCII so owner and
    /// repo segments never match non-ASCII letters.
    pub const GIT_URL_PATTERN: &str =
        r"^https://(github|gitlab|bitbucket)\.com/[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+(\.git)?(/?|#.*)?$";
}

/// README export settings
pub mod export {
    /// File name of the exported README
    pub const README_FILE_NAME: &str = "README.md";

    /// MIME type of the exported README
    pub const README_MIME_TYPE: &str = "text/markdown";

    /// Suffix for temporary files during atomic writes
    pub const TEMP_FILE_SUFFIX: &str = ".tmp";

    /// Highest `(n)` suffix tried before an export gives up on a free name
    pub const MAX_NUMBERED_COPIES: u32 = 999;
}

/// Transient notification behaviour
pub mod notifications {
    use super::Duration;

    /// Time a notification stays visible before it is dismissed automatically
    pub const AUTO_HIDE: Duration = Duration::from_millis(3000);
}

/// User-facing text
pub mod messages {
    /// Inline error shown next to an invalid repository URL
    pub const INVALID_GIT_URL: &str =
        "Please enter a valid Git repository URL (e.g. https://github.com/user/repo)";

    /// Helper text shown under a valid or untouched URL field
    pub const GIT_URL_HELPER: &str = "e.g. https://github.com/user/repo";

    /// Shown when a failed request carries no usable error payload
    pub const GENERIC_FAILURE: &str =
        "An error occurred while generating the README. Please check your Git URL and try again.";

    pub const COPY_SUCCESS: &str = "README.md copied to clipboard!";
    pub const DOWNLOAD_SUCCESS: &str = "README.md downloaded successfully!";

    pub const EMPTY_STATE_TITLE: &str = "No README generated yet";
    pub const EMPTY_STATE_HINT: &str =
        "Enter a Git repository URL and click Generate to get started.";

    pub const IN_PROGRESS: &str = "Generating your README.md...";

    pub const SUBMIT_LABEL: &str = "Generate README";
    pub const SUBMIT_BUSY_LABEL: &str = "Generating README...";
}

/// File system settings
pub mod files {
    /// Project-local configuration file name
    pub const LOCAL_CONFIG_FILE: &str = "readme-forge.toml";

    /// Directory name under the user config dir
    pub const CONFIG_DIR_NAME: &str = "readme-forge";

    /// Configuration file name inside the config dir
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}

// Re-export commonly used constants at the module level
pub use export::{README_FILE_NAME, README_MIME_TYPE};
pub use http::USER_AGENT;
pub use notifications::AUTO_HIDE as NOTIFICATION_AUTO_HIDE;
pub use service::{DEFAULT_BASE_URL, GENERATE_PATH};
