//! Lifecycle states of a plan request.

use crate::models::Plan;

/// Where the current submission cycle stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// One request in flight
    Pending,
    /// Last request produced a plan
    Success {
        plan: Box<Plan>,
        /// Duration the learner asked for, used when the roadmap is empty
        requested_weeks: u32,
    },
    /// Last request failed with a user-facing message
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// Whether this is a terminal state of a submission cycle.
    pub fn is_settled(&self) -> bool {
        matches!(self, RequestState::Success { .. } | RequestState::Failed(_))
    }

    pub fn plan(&self) -> Option<&Plan> {
        match self {
            RequestState::Success { plan, .. } => Some(&**plan),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Pending => "pending",
            RequestState::Success { .. } => "success",
            RequestState::Failed(_) => "failed",
        }
    }
}
