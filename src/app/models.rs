//! Data models for README Forge
//!
//! This module defines the core data structures shared between the form, the
//! generation client and the front ends: the user's form input and the wire
//! representation of a generation request.

use serde::{Deserialize, Serialize};

/// Values entered into the generation form
///
/// `git_url` is the only constrained field; the others are free text and may
/// be empty. Nothing in the form resets these automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    /// Git repository URL (required)
    pub git_url: String,
    /// Project name (optional)
    pub project_name: String,
    /// Project description (optional, multi-line)
    pub description: String,
}

impl FormInput {
    /// Create form input with only a repository URL
    pub fn with_url(git_url: impl Into<String>) -> Self {
        Self {
            git_url: git_url.into(),
            ..Default::default()
        }
    }

    /// Set the optional project name
    pub fn project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = project_name.into();
        self
    }

    /// Set the optional project description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// JSON body sent to the generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadmeRequest {
    pub project_name: String,
    pub description: String,
    pub git_url: String,
}

impl From<&FormInput> for ReadmeRequest {
    fn from(input: &FormInput) -> Self {
        Self {
            project_name: input.project_name.clone(),
            description: input.description.clone(),
            git_url: input.git_url.clone(),
        }
    }
}
