//! README generation form
//!
//! [`ReadmeForm`] is the single owner of the form input, the request
//! lifecycle and the notification slot. It combines four parts:
//!
//! - input validation (`crate::app::validator`) and the submit eligibility gate
//! - the request controller (`controller`)
//! - the result presenter (`presenter`)
//! - post-result actions (`actions`)
//!
//! The form is synchronous. Sending the request is left to the caller, or to
//! [`FormRuntime`] which runs it on tokio and feeds the outcome back.
//!
//! # Examples
//!
//! ```rust
//! use readme_forge::app::form::{ReadmeForm, RequestState};
//!
//! let mut form = ReadmeForm::new();
//! form.set_git_url("https://github.com/octocat/Hello-World");
//! assert!(form.can_submit());
//!
//! let pending = form.submit().unwrap();
//! assert_eq!(form.state(), &RequestState::InFlight);
//!
//! form.resolve(pending.id, Ok("# Hello".to_string()));
//! assert_eq!(form.state().content(), Some("# Hello"));
//! ```

pub mod actions;
pub mod controller;
pub mod notification;
pub mod presenter;
pub mod runtime;
pub mod state;

#[cfg(test)]
mod tests;

use std::time::Instant;

use tracing::debug;

pub use actions::ActionOutcome;
pub use controller::{PendingRequest, RequestController};
pub use notification::{Notification, NotificationKind, Notifier};
pub use presenter::{
    render_panel, FormView, Panel, PostResultAction, ScrollTracker, SubmitButton, UrlFieldView,
};
pub use runtime::{Completion, FormRuntime};
pub use state::{RequestId, RequestState, Resolution};

use crate::app::host::{HostEnvironment, ScrollTarget};
use crate::app::models::FormInput;
use crate::app::validator;
use crate::constants::messages;
use crate::errors::{SubmitError, TransportResult, ValidationResult};

/// The README generation form
#[derive(Debug, Default)]
pub struct ReadmeForm {
    input: FormInput,
    // The inline error only appears once the user has edited the URL or a
    // submit was rejected; an untouched empty field shows the helper text.
    url_touched: bool,
    controller: RequestController,
    notifier: Notifier,
    scroll: ScrollTracker,
}

impl ReadmeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with `input`
    pub fn with_input(input: FormInput) -> Self {
        let url_touched = !input.git_url.is_empty();
        Self {
            input,
            url_touched,
            ..Default::default()
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn set_git_url(&mut self, value: impl Into<String>) {
        self.input.git_url = value.into();
        self.url_touched = true;
    }

    pub fn set_project_name(&mut self, value: impl Into<String>) {
        self.input.project_name = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.input.description = value.into();
    }

    /// Current classification of the URL field
    pub fn url_validation(&self) -> ValidationResult<()> {
        validator::validate(&self.input.git_url)
    }

    /// Inline error to show next to the URL field
    pub fn url_error(&self) -> Option<&'static str> {
        (self.url_touched && self.url_validation().is_err()).then_some(messages::INVALID_GIT_URL)
    }

    /// Whether a submit would be acted on right now
    ///
    /// # Errors
    ///
    /// Returns the first failing condition: empty URL, invalid URL, or a
    /// request already in flight.
    pub fn eligibility(&self) -> Result<(), SubmitError> {
        if self.input.git_url.is_empty() {
            return Err(SubmitError::EmptyUrl);
        }
        self.url_validation()?;
        if self.controller.state().is_in_flight() {
            return Err(SubmitError::InFlight);
        }
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.eligibility().is_ok()
    }

    /// Submit the form
    ///
    /// On success the form is `InFlight` and the returned request must be sent
    /// exactly once, its outcome passed back through [`ReadmeForm::resolve`].
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when the eligibility gate is closed; nothing is
    /// issued and a URL problem becomes visible inline.
    pub fn submit(&mut self) -> Result<PendingRequest, SubmitError> {
        if let Err(e) = self.eligibility() {
            if !matches!(e, SubmitError::InFlight) {
                self.url_touched = true;
            }
            debug!("Submit rejected: {}", e);
            return Err(e);
        }
        self.controller.begin(&self.input)
    }

    /// Apply the outcome of request `id`
    pub fn resolve(&mut self, id: RequestId, outcome: TransportResult<String>) -> Resolution {
        self.controller.resolve(id, outcome)
    }

    pub fn state(&self) -> &RequestState {
        self.controller.state()
    }

    pub fn controller(&self) -> &RequestController {
        &self.controller
    }

    /// Direct access to the controller, bypassing the eligibility gate
    pub fn controller_mut(&mut self) -> &mut RequestController {
        &mut self.controller
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    pub fn close_notification(&mut self) {
        self.notifier.close();
    }

    /// Advance time-based state; returns `true` if anything changed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifier.tick(now)
    }

    /// Copy the generated README to the clipboard
    pub fn copy(&mut self, host: &mut dyn HostEnvironment) -> ActionOutcome {
        actions::copy(self.controller.state(), &mut self.notifier, host)
    }

    /// Export the generated README as `README.md`
    pub fn download(&mut self, host: &mut dyn HostEnvironment) -> ActionOutcome {
        actions::download(self.controller.state(), &mut self.notifier, host)
    }

    /// Run once-per-transition view effects (scrolling a new result into
    /// view). Returns `true` if an effect was issued.
    pub fn apply_view_effects(&mut self, host: &mut dyn HostEnvironment) -> bool {
        let state = self.controller.state();
        let latest = self.controller.latest_request();
        if self.scroll.should_scroll(state, latest) {
            host.scroll_into_view(ScrollTarget::Result);
            true
        } else {
            false
        }
    }

    /// Describe the form for rendering
    pub fn view(&self) -> FormView<'_> {
        FormView {
            url_field: UrlFieldView {
                value: &self.input.git_url,
                error: self.url_error(),
                helper: messages::GIT_URL_HELPER,
            },
            project_name: &self.input.project_name,
            description: &self.input.description,
            submit: SubmitButton::new(self.can_submit(), self.state().is_in_flight()),
            panel: render_panel(self.state()),
            notification: self.notifier.current(),
        }
    }
}
