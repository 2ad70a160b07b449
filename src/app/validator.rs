//! Git repository URL validation
//!
//! Classifies the URL field of the form. Validation is pure and synchronous:
//! it runs on every edit and never performs I/O.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::validation::GIT_URL_PATTERN;
use crate::errors::{ValidationError, ValidationResult};

fn git_url_regex() -> &'static Regex {
    static GIT_URL: OnceLock<Regex> = OnceLock::new();
    GIT_URL.get_or_init(|| Regex::new(GIT_URL_PATTERN).expect("git URL pattern must compile"))
}

/// Validate a Git repository URL
///
/// Accepts `https://{github,gitlab,bitbucket}.com/<owner>/<repo>` where owner
/// and repo consist of ASCII word characters, dots and hyphens, optionally
/// followed by `.git`, a trailing slash, or a `#fragment`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidGitUrl` for anything else, including the
/// empty string.
pub fn validate(url: &str) -> ValidationResult<()> {
    if git_url_regex().is_match(url) {
        Ok(())
    } else {
        Err(ValidationError::InvalidGitUrl)
    }
}

/// Boolean form of [`validate`]
pub fn is_valid_git_url(url: &str) -> bool {
    validate(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_supported_hosts() {
        for url in [
            "https://github.com/octocat/Hello-World",
            "https://gitlab.com/gitlab-org/gitlab",
            "https://bitbucket.com/team/repo",
        ] {
            assert!(validate(url).is_ok(), "{url} should be valid");
        }
    }

    #[test]
    fn test_accepts_suffixes() {
        for url in [
            "https://github.com/user/repo.git",
            "https://github.com/user/repo/",
            "https://github.com/user/repo.git/",
            "https://github.com/user/repo#readme",
            "https://github.com/user/repo.git#main",
            "https://github.com/user.name/my_repo-2.0",
        ] {
            assert!(is_valid_git_url(url), "{url} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_urls() {
        for url in [
            "",
            "not-a-url",
            "http://github.com/user/repo",
            "https://example.com/a/b",
            "https://github.com/user",
            "https://github.com/user/",
            "https://github.com//repo",
            "https://github.com/user/repo/tree/main",
            "https://github.com/user/re po",
            "https://www.github.com/user/repo",
            "https://github.org/user/repo",
            " https://github.com/user/repo",
            "https://github.com/us\u{e9}r/repo",
        ] {
            assert_eq!(
                validate(url),
                Err(ValidationError::InvalidGitUrl),
                "{url:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        for url in ["https://github.com/a/b", "nope", ""] {
            assert_eq!(validate(url), validate(url));
        }
    }
}
