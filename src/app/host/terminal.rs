//! Host environment for terminal front ends
//!
//! Clipboard access goes through `arboard`; exported files are written into
//! a configured directory with the temp file + rename pattern so an
//! interrupted export never leaves a truncated README behind. Scroll requests
//! are queued for the terminal form to pick up on its next frame.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::host::{ExportFile, HostEnvironment, ScrollTarget};
use crate::constants::export;
use crate::errors::{HostError, HostResult};

pub struct TerminalHost {
    output_dir: PathBuf,
    overwrite: bool,
    // Kept alive for the host's lifetime: on X11 the clipboard contents are
    // only served while the owning handle exists.
    clipboard: Option<arboard::Clipboard>,
    hold_clipboard: bool,
    pending_scroll: Option<ScrollTarget>,
    last_export: Option<PathBuf>,
}

impl std::fmt::Debug for TerminalHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalHost")
            .field("output_dir", &self.output_dir)
            .field("overwrite", &self.overwrite)
            .field("clipboard_open", &self.clipboard.is_some())
            .field("hold_clipboard", &self.hold_clipboard)
            .field("pending_scroll", &self.pending_scroll)
            .field("last_export", &self.last_export)
            .finish()
    }
}

impl TerminalHost {
    /// Create a host exporting into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            overwrite,
            clipboard: None,
            hold_clipboard: false,
            pending_scroll: None,
            last_export: None,
        }
    }

    /// Block clipboard writes until another program takes the selection
    ///
    /// For short-lived processes on X11 and Wayland, where the contents vanish
    /// with the process that set them. Elsewhere this changes nothing.
    pub fn with_clipboard_hold(mut self) -> Self {
        self.hold_clipboard = true;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the most recent successful export
    pub fn last_export(&self) -> Option<&Path> {
        self.last_export.as_deref()
    }

    /// Take the queued scroll request, if any
    pub fn take_scroll_request(&mut self) -> Option<ScrollTarget> {
        self.pending_scroll.take()
    }

    /// Persist `temp` under `name`, or `name (1)`, `name (2)`, ... when taken
    ///
    /// `persist_noclobber` makes the existence check and the rename one step,
    /// so a file created concurrently is never replaced.
    fn persist_to_free_name(
        &self,
        mut temp: tempfile::NamedTempFile,
        name: &str,
    ) -> HostResult<PathBuf> {
        for copy in 0..=export::MAX_NUMBERED_COPIES {
            let destination = self.output_dir.join(numbered_name(name, copy));
            match temp.persist_noclobber(&destination) {
                Ok(_) => return Ok(destination),
                Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => {
                    debug!("{} exists, trying the next name", destination.display());
                    temp = e.file;
                }
                Err(_e) => {
                    return Err(HostError::AtomicOperationFailed {
                        final_path: destination,
                    })
                }
            }
        }

        Err(HostError::FileExists {
            path: self.output_dir.join(name),
        })
    }

    fn clipboard(&mut self) -> HostResult<&mut arboard::Clipboard> {
        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| HostError::Clipboard {
                reason: e.to_string(),
            })?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard.as_mut().ok_or_else(|| HostError::Clipboard {
            reason: "clipboard handle missing".to_string(),
        })
    }
}

impl HostEnvironment for TerminalHost {
    fn write_clipboard(&mut self, text: &str) -> HostResult<()> {
        let hold = self.hold_clipboard;
        let result = set_clipboard_text(self.clipboard()?, text, hold).map_err(|e| {
            HostError::Clipboard {
                reason: e.to_string(),
            }
        });
        if let Err(e) = &result {
            warn!("Clipboard write failed: {}", e);
            // A broken handle is dropped so the next attempt reconnects
            self.clipboard = None;
        } else {
            debug!("Copied {} bytes to clipboard", text.len());
        }
        result
    }

    fn save_file(&mut self, file: &ExportFile<'_>) -> HostResult<()> {
        std::fs::create_dir_all(&self.output_dir)?;

        let mut temp = tempfile::Builder::new()
            .prefix(file.name)
            .suffix(export::TEMP_FILE_SUFFIX)
            .tempfile_in(&self.output_dir)?;
        temp.write_all(file.contents.as_bytes())?;
        temp.flush()?;

        let destination = if self.overwrite {
            let destination = self.output_dir.join(file.name);
            temp.persist(&destination)
                .map_err(|_e| HostError::AtomicOperationFailed {
                    final_path: destination.clone(),
                })?;
            destination
        } else {
            self.persist_to_free_name(temp, file.name)?
        };

        info!(
            "Saved {} ({}) to {}",
            file.name,
            file.mime,
            destination.display()
        );
        self.last_export = Some(destination);
        Ok(())
    }

    fn scroll_into_view(&mut self, target: ScrollTarget) {
        self.pending_scroll = Some(target);
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_clipboard_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: bool,
) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold {
        clipboard.set().wait().text(text.to_string())
    } else {
        clipboard.set_text(text.to_string())
    }
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_clipboard_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: bool,
) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}

/// `README.md` for copy 0, then `README (1).md`, `README (2).md`, ...
fn numbered_name(name: &str, copy: u32) -> String {
    if copy == 0 {
        return name.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => {
            format!("{} ({}).{}", stem, copy, extension)
        }
        _ => format!("{} ({})", name, copy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_file_writes_exact_contents() {
        let temp_dir = TempDir::new().unwrap();
        let mut host = TerminalHost::new(temp_dir.path(), false);
        let contents = "# Hello\n\nUnicode: \u{2603}\n";

        host.save_file(&ExportFile::readme(contents)).unwrap();

        let path = temp_dir.path().join("README.md");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), contents);
        assert_eq!(host.last_export(), Some(path.as_path()));
    }

    #[test]
    fn test_save_file_keeps_existing_readme_and_picks_next_name() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("README.md"), "existing").unwrap();
        let mut host = TerminalHost::new(temp_dir.path(), false);

        host.save_file(&ExportFile::readme("first")).unwrap();
        host.save_file(&ExportFile::readme("second")).unwrap();

        let read = |name: &str| std::fs::read_to_string(temp_dir.path().join(name)).unwrap();
        assert_eq!(read("README.md"), "existing");
        assert_eq!(read("README (1).md"), "first");
        assert_eq!(read("README (2).md"), "second");
        assert_eq!(
            host.last_export(),
            Some(temp_dir.path().join("README (2).md").as_path())
        );
    }

    #[test]
    fn test_numbered_name() {
        assert_eq!(numbered_name("README.md", 0), "README.md");
        assert_eq!(numbered_name("README.md", 3), "README (3).md");
        assert_eq!(numbered_name("LICENSE", 1), "LICENSE (1)");
        assert_eq!(numbered_name(".env", 2), ".env (2)");
    }


    #[test]
    fn test_save_file_overwrites_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("README.md"), "existing").unwrap();
        let mut host = TerminalHost::new(temp_dir.path(), true);

        host.save_file(&ExportFile::readme("new")).unwrap();
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_save_file_creates_output_dir_and_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("docs").join("generated");
        let mut host = TerminalHost::new(&nested, false);

        host.save_file(&ExportFile::readme("x")).unwrap();

        let names: Vec<_> = std::fs::read_dir(&nested)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["README.md".to_string()]);
    }

    #[test]
    fn test_clipboard_hold_is_opt_in() {
        let host = TerminalHost::new(".", false);
        assert!(!host.hold_clipboard);
        assert!(host.with_clipboard_hold().hold_clipboard);
    }

    #[test]
    fn test_scroll_request_is_taken_once() {
        let mut host = TerminalHost::new(".", false);
        host.scroll_into_view(ScrollTarget::Result);
        assert_eq!(host.take_scroll_request(), Some(ScrollTarget::Result));
        assert_eq!(host.take_scroll_request(), None);
    }
}
