//! Post-result actions
//!
//! Copy and download read the stored README and report through the notifier.
//! Neither touches the request state.

use tracing::warn;

use crate::app::form::notification::Notifier;
use crate::app::form::state::RequestState;
use crate::app::host::{ExportFile, HostEnvironment};
use crate::constants::messages;

/// Result of a post-result action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The host performed the action
    Done,
    /// The host failed; the error was shown as a notification
    HostFailed(String),
    /// There is no successful result to act on
    NoResult,
}

/// Copy the README to the clipboard
pub fn copy(
    state: &RequestState,
    notifier: &mut Notifier,
    host: &mut dyn HostEnvironment,
) -> ActionOutcome {
    let Some(content) = state.content() else {
        return ActionOutcome::NoResult;
    };

    match host.write_clipboard(content) {
        Ok(()) => {
            notifier.success(messages::COPY_SUCCESS);
            ActionOutcome::Done
        }
        Err(e) => {
            warn!("Copy failed: {}", e);
            let message = e.to_string();
            notifier.error(message.clone());
            ActionOutcome::HostFailed(message)
        }
    }
}

/// Export the README as `README.md`
pub fn download(
    state: &RequestState,
    notifier: &mut Notifier,
    host: &mut dyn HostEnvironment,
) -> ActionOutcome {
    let Some(content) = state.content() else {
        return ActionOutcome::NoResult;
    };

    match host.save_file(&ExportFile::readme(content)) {
        Ok(()) => {
            notifier.success(messages::DOWNLOAD_SUCCESS);
            ActionOutcome::Done
        }
        Err(e) => {
            warn!("Download failed: {}", e);
            let message = e.to_string();
            notifier.error(message.clone());
            ActionOutcome::HostFailed(message)
        }
    }
}
