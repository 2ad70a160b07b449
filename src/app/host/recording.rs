//! In-memory host that records every effect
//!
//! Used by tests and by callers that want to inspect what the form would have
//! done without a real clipboard or file system.

use crate::app::host::{ExportFile, HostEnvironment, ScrollTarget};
use crate::errors::{HostError, HostResult};

/// A file captured by [`RecordingHost::save_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub name: String,
    pub mime: String,
    pub contents: String,
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Last text written to the clipboard
    pub clipboard: Option<String>,
    /// Every saved file, in order
    pub saved_files: Vec<SavedFile>,
    /// Every scroll request, in order
    pub scrolls: Vec<ScrollTarget>,
    /// Make clipboard writes fail with this reason
    pub fail_clipboard: Option<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose clipboard always fails
    pub fn without_clipboard(reason: impl Into<String>) -> Self {
        Self {
            fail_clipboard: Some(reason.into()),
            ..Default::default()
        }
    }
}

impl HostEnvironment for RecordingHost {
    fn write_clipboard(&mut self, text: &str) -> HostResult<()> {
        if let Some(reason) = &self.fail_clipboard {
            return Err(HostError::Clipboard {
                reason: reason.clone(),
            });
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn save_file(&mut self, file: &ExportFile<'_>) -> HostResult<()> {
        self.saved_files.push(SavedFile {
            name: file.name.to_string(),
            mime: file.mime.to_string(),
            contents: file.contents.to_string(),
        });
        Ok(())
    }

    fn scroll_into_view(&mut self, target: ScrollTarget) {
        self.scrolls.push(target);
    }
}
