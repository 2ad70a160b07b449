//! Result presenter
//!
//! Pure mapping from form state to what a front end should draw. Exactly one
//! [`Panel`] is produced per request state, which is what keeps the empty
//! state, progress indicator, error notice and result from co-rendering.

use crate::app::form::notification::Notification;
use crate::app::form::state::{RequestId, RequestState};
use crate::constants::messages;

/// Actions offered next to a generated README
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostResultAction {
    Copy,
    Download,
}

impl PostResultAction {
    pub fn label(self) -> &'static str {
        match self {
            PostResultAction::Copy => "Copy to clipboard",
            PostResultAction::Download => "Download README.md",
        }
    }
}

/// Main panel of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel<'a> {
    /// Nothing submitted yet
    Empty {
        title: &'static str,
        hint: &'static str,
    },
    /// Request outstanding
    InProgress { message: &'static str },
    /// Last request failed
    Error { message: &'a str },
    /// Last request succeeded; `content` is shown verbatim
    Result {
        content: &'a str,
        actions: [PostResultAction; 2],
    },
}

/// Render the panel for a request state
pub fn render_panel(state: &RequestState) -> Panel<'_> {
    match state {
        RequestState::Idle => Panel::Empty {
            title: messages::EMPTY_STATE_TITLE,
            hint: messages::EMPTY_STATE_HINT,
        },
        RequestState::InFlight => Panel::InProgress {
            message: messages::IN_PROGRESS,
        },
        RequestState::Failed(message) => Panel::Error { message },
        RequestState::Succeeded(content) => Panel::Result {
            content,
            actions: [PostResultAction::Copy, PostResultAction::Download],
        },
    }
}

/// URL field decoration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFieldView<'a> {
    pub value: &'a str,
    /// Inline validation error; when set it replaces the helper text
    pub error: Option<&'static str>,
    pub helper: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    pub label: &'static str,
    /// Show a busy indicator next to the label
    pub busy: bool,
}

impl SubmitButton {
    pub fn new(enabled: bool, in_flight: bool) -> Self {
        Self {
            enabled,
            label: if in_flight {
                messages::SUBMIT_BUSY_LABEL
            } else {
                messages::SUBMIT_LABEL
            },
            busy: in_flight,
        }
    }
}

/// Everything a front end needs to draw the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a> {
    pub url_field: UrlFieldView<'a>,
    pub project_name: &'a str,
    pub description: &'a str,
    pub submit: SubmitButton,
    pub panel: Panel<'a>,
    pub notification: Option<&'a Notification>,
}

/// Fires scroll-into-view once per transition into `Succeeded`
#[derive(Debug, Default)]
pub struct ScrollTracker {
    scrolled_for: Option<RequestId>,
}

impl ScrollTracker {
    /// Whether the result for `latest` still needs to be scrolled into view.
    /// Returns `true` at most once per request id.
    pub fn should_scroll(&mut self, state: &RequestState, latest: Option<RequestId>) -> bool {
        if !matches!(state, RequestState::Succeeded(_)) || latest.is_none() {
            return false;
        }
        if self.scrolled_for == latest {
            return false;
        }
        self.scrolled_for = latest;
        true
    }
}
