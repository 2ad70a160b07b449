//! Request lifecycle state
//!
//! A single tagged union replaces independent loading/error/result flags, so
//! "in flight with a stale result" or "error and result at once" cannot be
//! represented.

use std::fmt;

/// Identifier of an accepted submit
///
/// Issued in strictly increasing order by the controller. Only the latest
/// issued id may change the request state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) fn first() -> Self {
        RequestId(1)
    }

    pub(crate) fn next(self) -> Self {
        RequestId(self.0 + 1)
    }

    /// Raw sequence number
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State of the generation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is outstanding
    InFlight,
    /// The latest request returned this README text
    Succeeded(String),
    /// The latest request failed with this user-facing message
    Failed(String),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }

    /// README text of a successful request
    pub fn content(&self) -> Option<&str> {
        match self {
            RequestState::Succeeded(content) => Some(content),
            _ => None,
        }
    }

    /// Error message of a failed request
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::InFlight => "in-flight",
            RequestState::Succeeded(_) => "succeeded",
            RequestState::Failed(_) => "failed",
        }
    }
}

/// What a resolution did to the request state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// State moved to `Succeeded`
    Succeeded,
    /// State moved to `Failed`
    Failed,
    /// The resolution belonged to a superseded or already resolved request
    /// and was discarded
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_increase() {
        let first = RequestId::first();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.value(), 2);
        assert_eq!(first.to_string(), "#1");
    }

    #[test]
    fn test_state_accessors() {
        assert_eq!(RequestState::default(), RequestState::Idle);
        assert!(RequestState::InFlight.is_in_flight());

        let done = RequestState::Succeeded("# Hello".to_string());
        assert_eq!(done.content(), Some("# Hello"));
        assert_eq!(done.error_message(), None);

        let failed = RequestState::Failed("nope".to_string());
        assert_eq!(failed.content(), None);
        assert_eq!(failed.error_message(), Some("nope"));
        assert_eq!(failed.name(), "failed");
    }
}
