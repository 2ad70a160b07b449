//! Request controller
//!
//! Owns the request state, hands out one [`PendingRequest`] per accepted
//! submit and reconciles resolutions. Each accepted submit gets a fresh
//! [`RequestId`]; a resolution is applied only if it carries the latest id and
//! that request is still in flight, so overlapping submits always end with
//! the most recently issued request's outcome regardless of arrival order.

use tracing::{debug, info, warn};

use crate::app::form::state::{RequestId, RequestState, Resolution};
use crate::app::models::{FormInput, ReadmeRequest};
use crate::app::validator;
use crate::errors::{SubmitError, TransportResult};

/// An accepted submit waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub request: ReadmeRequest,
}

/// Owner of the request lifecycle
#[derive(Debug, Default)]
pub struct RequestController {
    state: RequestState,
    latest: Option<RequestId>,
}

impl RequestController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current request state
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Id of the most recently accepted submit
    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }

    /// Accept a submit and move to `InFlight`
    ///
    /// Any previous result or error is discarded immediately. The controller
    /// only checks the URL; refusing submits while a request is in flight is
    /// the form's eligibility gate.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Invalid` if the URL fails validation. The state
    /// is left untouched in that case.
    pub fn begin(&mut self, input: &FormInput) -> Result<PendingRequest, SubmitError> {
        validator::validate(&input.git_url)?;

        let id = self.latest.map_or_else(RequestId::first, RequestId::next);
        if self.state.is_in_flight() {
            warn!("Request {} supersedes an unresolved request", id);
        }
        self.latest = Some(id);
        self.state = RequestState::InFlight;
        info!("Request {} issued for {}", id, input.git_url);

        Ok(PendingRequest {
            id,
            request: ReadmeRequest::from(input),
        })
    }

    /// Apply the outcome of request `id`
    pub fn resolve(&mut self, id: RequestId, outcome: TransportResult<String>) -> Resolution {
        if self.latest != Some(id) || !self.state.is_in_flight() {
            debug!(
                "Discarding resolution of request {} (latest: {:?}, state: {})",
                id,
                self.latest,
                self.state.name()
            );
            return Resolution::Stale;
        }

        match outcome {
            Ok(content) => {
                info!("Request {} succeeded", id);
                self.state = RequestState::Succeeded(content);
                Resolution::Succeeded
            }
            Err(e) => {
                let message = e.user_message();
                warn!("Request {} failed: {} ({})", id, e, message);
                self.state = RequestState::Failed(message);
                Resolution::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::client::ErrorBody;
    use crate::errors::{TransportError, ValidationError};

    fn input(url: &str) -> FormInput {
        FormInput::with_url(url)
    }

    #[test]
    fn test_begin_rejects_invalid_url() {
        let mut controller = RequestController::new();
        let result = controller.begin(&input("https://example.com/a/b"));
        assert_eq!(result, Err(SubmitError::Invalid(ValidationError::InvalidGitUrl)));
        assert_eq!(controller.state(), &RequestState::Idle);
        assert_eq!(controller.latest_request(), None);
    }

    #[test]
    fn test_success_cycle() {
        let mut controller = RequestController::new();
        let pending = controller
            .begin(&input("https://github.com/octocat/Hello-World"))
            .unwrap();
        assert_eq!(controller.state(), &RequestState::InFlight);
        assert_eq!(pending.request.git_url, "https://github.com/octocat/Hello-World");

        let resolution = controller.resolve(pending.id, Ok("# Hello".to_string()));
        assert_eq!(resolution, Resolution::Succeeded);
        assert_eq!(controller.state().content(), Some("# Hello"));
    }

    #[test]
    fn test_failure_uses_user_message() {
        let mut controller = RequestController::new();
        let pending = controller.begin(&input("https://github.com/a/b")).unwrap();
        let error = TransportError::Status {
            status: 404,
            body: ErrorBody::Json(serde_json::json!({"message": "Repository not found"})),
        };

        assert_eq!(controller.resolve(pending.id, Err(error)), Resolution::Failed);
        assert_eq!(
            controller.state(),
            &RequestState::Failed("Repository not found".to_string())
        );
    }

    #[test]
    fn test_new_submit_clears_previous_payload() {
        let mut controller = RequestController::new();
        let first = controller.begin(&input("https://github.com/a/b")).unwrap();
        controller.resolve(first.id, Ok("old".to_string()));

        let second = controller.begin(&input("https://github.com/a/b")).unwrap();
        assert!(second.id > first.id);
        assert_eq!(controller.state(), &RequestState::InFlight);
    }

    #[test]
    fn test_later_submit_wins_regardless_of_arrival_order() {
        let mut controller = RequestController::new();
        let first = controller.begin(&input("https://github.com/a/first")).unwrap();
        let second = controller.begin(&input("https://github.com/a/second")).unwrap();

        assert_eq!(
            controller.resolve(second.id, Ok("second".to_string())),
            Resolution::Succeeded
        );
        assert_eq!(
            controller.resolve(first.id, Ok("first".to_string())),
            Resolution::Stale
        );
        assert_eq!(controller.state().content(), Some("second"));
    }

    #[test]
    fn test_early_stale_resolution_keeps_in_flight() {
        let mut controller = RequestController::new();
        let first = controller.begin(&input("https://github.com/a/first")).unwrap();
        let second = controller.begin(&input("https://github.com/a/second")).unwrap();

        assert_eq!(
            controller.resolve(first.id, Ok("first".to_string())),
            Resolution::Stale
        );
        assert!(controller.state().is_in_flight());

        controller.resolve(second.id, Ok("second".to_string()));
        assert_eq!(controller.state().content(), Some("second"));
    }

    #[test]
    fn test_duplicate_resolution_is_stale() {
        let mut controller = RequestController::new();
        let pending = controller.begin(&input("https://github.com/a/b")).unwrap();
        controller.resolve(pending.id, Ok("one".to_string()));
        assert_eq!(
            controller.resolve(pending.id, Ok("two".to_string())),
            Resolution::Stale
        );
        assert_eq!(controller.state().content(), Some("one"));
    }
}
