//! Unit tests for the form module
//!
//! Scenario tests drive the form through a scripted generation service so the
//! order in which requests resolve is fully under test control. HTTP-level
//! behaviour is covered by the top-level tests directory.


use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::app::client::{ErrorBody, GenerationService};
use crate::app::host::RecordingHost;
use crate::app::models::ReadmeRequest;
use crate::errors::{TransportError, TransportResult};

use super::*;

/// Reply scripted for one repository URL
enum Reply {
    Now(TransportResult<String>),
    Gated(oneshot::Receiver<TransportResult<String>>),
}

/// Generation service answering from a script keyed by `gitUrl`
///
/// Each scripted reply is used once. Unscripted URLs fail with a 404.
#[derive(Default)]
pub struct ScriptedService {
    replies: Mutex<HashMap<String, Reply>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ReadmeRequest>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `git_url` immediately with `result`
    pub fn reply(self, git_url: &str, result: TransportResult<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(git_url.to_string(), Reply::Now(result));
        self
    }

    /// Hold the reply for `git_url` until the returned sender fires
    pub fn gate(&self, git_url: &str) -> oneshot::Sender<TransportResult<String>> {
        let (tx, rx) = oneshot::channel();
        self.replies
            .lock()
            .unwrap()
            .insert(git_url.to_string(), Reply::Gated(rx));
        tx
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ReadmeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for ScriptedService {
    async fn generate(&self, request: &ReadmeRequest) -> TransportResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let reply = self.replies.lock().unwrap().remove(&request.git_url);
        match reply {
            Some(Reply::Now(result)) => result,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(status_error(503, ErrorBody::Absent))),
            None => Err(status_error(404, ErrorBody::Absent)),
        }
    }
}

/// Build a non-success status error
pub fn status_error(status: u16, body: ErrorBody) -> TransportError {
    TransportError::Status { status, body }
}

#[test]
fn test_fresh_form_is_idle_without_inline_error() {
    let form = ReadmeForm::new();
    let view = form.view();

    assert_eq!(form.state(), &RequestState::Idle);
    assert!(matches!(view.panel, Panel::Empty { .. }));
    assert_eq!(view.url_field.error, None);
    assert!(!view.submit.enabled);
    assert!(view.notification.is_none());
}

#[test]
fn test_inline_error_tracks_validity_while_typing() {
    let mut form = ReadmeForm::new();

    form.set_git_url("https://github.com/octo");
    assert_eq!(form.url_error(), Some(messages::INVALID_GIT_URL));
    assert!(!form.can_submit());

    form.set_git_url("https://github.com/octocat/Hello-World");
    assert_eq!(form.url_error(), None);
    assert!(form.can_submit());
}

#[test]
fn test_eligibility_reports_first_failing_condition() {
    let mut form = ReadmeForm::new();
    assert_eq!(form.eligibility(), Err(SubmitError::EmptyUrl));

    form.set_git_url("git@github.com:octocat/Hello-World.git");
    assert!(matches!(form.eligibility(), Err(SubmitError::Invalid(_))));

    form.set_git_url("https://gitlab.com/group/project.git");
    assert_eq!(form.eligibility(), Ok(()));

    form.submit().unwrap();
    assert_eq!(form.eligibility(), Err(SubmitError::InFlight));
}

#[test]
fn test_rejected_empty_submit_reveals_inline_error() {
    let mut form = ReadmeForm::new();

    assert_eq!(form.submit(), Err(SubmitError::EmptyUrl));
    assert_eq!(form.url_error(), Some(messages::INVALID_GIT_URL));
    assert_eq!(form.state(), &RequestState::Idle);
    assert_eq!(form.controller().latest_request(), None);
}

#[test]
fn test_optional_fields_do_not_affect_eligibility() {
    let mut form = ReadmeForm::with_input(
        FormInput::with_url("https://bitbucket.org/team/repo").project_name("Demo"),
    );
    assert!(!form.can_submit());

    form.set_git_url("https://bitbucket.com/team/repo");
    form.set_project_name("");
    form.set_description("");
    assert!(form.can_submit());
}

#[test]
fn test_submit_sends_current_input_values() {
    let mut form = ReadmeForm::new();
    form.set_git_url("https://github.com/octocat/Hello-World");
    form.set_project_name("Hello World");
    form.set_description("First line\nSecond line");

    let pending = form.submit().unwrap();
    assert_eq!(
        pending.request,
        ReadmeRequest {
            project_name: "Hello World".to_string(),
            description: "First line\nSecond line".to_string(),
            git_url: "https://github.com/octocat/Hello-World".to_string(),
        }
    );
    // Input is kept for the next submit
    assert_eq!(form.input().project_name, "Hello World");
}

#[test]
fn test_in_flight_view_disables_submit() {
    let mut form = ReadmeForm::new();
    form.set_git_url("https://github.com/a/b");
    form.submit().unwrap();

    let view = form.view();
    assert!(!view.submit.enabled);
    assert!(view.submit.busy);
    assert_eq!(view.submit.label, messages::SUBMIT_BUSY_LABEL);
    assert_eq!(
        view.panel,
        Panel::InProgress {
            message: messages::IN_PROGRESS
        }
    );
}

fn panel_kind(form: &ReadmeForm) -> &'static str {
    match form.view().panel {
        Panel::Empty { .. } => "empty",
        Panel::InProgress { .. } => "in-progress",
        Panel::Error { .. } => "error",
        Panel::Result { .. } => "result",
    }
}

#[test]
fn test_exactly_one_panel_per_state() {
    let mut form = ReadmeForm::new();
    form.set_git_url("https://github.com/a/b");

    let mut seen = vec![panel_kind(&form)];
    let pending = form.submit().unwrap();
    seen.push(panel_kind(&form));
    form.resolve(pending.id, Err(status_error(500, ErrorBody::Absent)));
    seen.push(panel_kind(&form));
    let pending = form.submit().unwrap();
    form.resolve(pending.id, Ok("# Done".to_string()));
    seen.push(panel_kind(&form));

    assert_eq!(seen, ["empty", "in-progress", "error", "result"]);
}

#[test]
fn test_empty_readme_still_renders_result_panel() {
    let mut form = ReadmeForm::new();
    form.set_git_url("https://github.com/a/b");
    let pending = form.submit().unwrap();
    form.resolve(pending.id, Ok(String::new()));

    assert!(matches!(
        form.view().panel,
        Panel::Result { content: "", .. }
    ));
}

#[test]
fn test_view_effects_scroll_once_per_result() {
    let mut form = ReadmeForm::new();
    let mut host = RecordingHost::new();
    form.set_git_url("https://github.com/a/b");

    let pending = form.submit().unwrap();
    assert!(!form.apply_view_effects(&mut host));

    form.resolve(pending.id, Ok("# A".to_string()));
    assert!(form.apply_view_effects(&mut host));
    assert!(!form.apply_view_effects(&mut host));

    // Actions never retrigger the scroll
    form.copy(&mut host);
    form.download(&mut host);
    assert!(!form.apply_view_effects(&mut host));
    assert_eq!(host.scrolls, vec![ScrollTarget::Result]);
}

#[test]
fn test_notification_survives_new_request() {
    let mut form = ReadmeForm::new();
    let mut host = RecordingHost::new();
    form.set_git_url("https://github.com/a/b");

    let pending = form.submit().unwrap();
    form.resolve(pending.id, Ok("# A".to_string()));
    form.copy(&mut host);

    form.submit().unwrap();
    assert_eq!(
        form.notification().map(|n| n.message.as_str()),
        Some(messages::COPY_SUCCESS)
    );

    form.close_notification();
    assert!(form.notification().is_none());
}
