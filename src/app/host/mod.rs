//! Host environment capabilities
//!
//! The form never touches the clipboard, the file system or the screen
//! directly. Those effects go through [`HostEnvironment`], so the state
//! machine can run headless in tests and behind different front ends.

pub mod recording;
pub mod terminal;

pub use recording::RecordingHost;
pub use terminal::TerminalHost;

use crate::constants::export;
use crate::errors::HostResult;

/// Element that should be brought into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// The generated README panel
    Result,
}

/// A file handed to the host for saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile<'a> {
    pub name: &'a str,
    pub mime: &'a str,
    pub contents: &'a str,
}

impl<'a> ExportFile<'a> {
    /// `README.md` as `text/markdown` with the given contents
    pub fn readme(contents: &'a str) -> Self {
        Self {
            name: export::README_FILE_NAME,
            mime: export::README_MIME_TYPE,
            contents,
        }
    }
}

/// Side effects available to the form
pub trait HostEnvironment {
    /// Place `text` on the system clipboard
    fn write_clipboard(&mut self, text: &str) -> HostResult<()>;

    /// Save `file` wherever the host keeps user downloads
    fn save_file(&mut self, file: &ExportFile<'_>) -> HostResult<()>;

    /// Bring `target` into view
    fn scroll_into_view(&mut self, target: ScrollTarget);
}
