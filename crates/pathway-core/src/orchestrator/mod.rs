//! Plan request lifecycle.
//!
//! The [`Orchestrator`] owns the single [`RequestState`] of a view and is the
//! only thing that changes it. A submission cycle runs:
//!
//! ```text
//! Idle | Success | Failed ──begin──▶ Pending ──settle──▶ Success | Failed
//! ```
//!
//! [`Orchestrator::begin`] refuses to start while a request is pending, so at
//! most one request is ever in flight, however quickly submissions arrive.
//! The returned [`Submission`] token is consumed when the cycle settles.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pathway_core::{LearnerProfile, Orchestrator, ServiceBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ServiceBuilder::new().build()?;
//! let mut orchestrator = Orchestrator::new(service);
//!
//! let mut profile = LearnerProfile::new();
//! profile.set_current_skills("Some JavaScript");
//! profile.set_background("Self-taught");
//!
//! let state = orchestrator.submit(&profile).await?;
//! if let Some(plan) = state.plan() {
//!     println!("{}", plan.goal);
//! }
//! # Ok(())
//! # }
//! ```

use log::{debug, info, warn};

use crate::{
    error::{PathwayError, Result},
    models::{LearnerProfile, PlanRequest},
    service::{PlanService, ServiceResponse},
};

pub mod interpret;
pub mod state;


pub use interpret::{interpret, GENERIC_FAILURE_MESSAGE, REQUEST_FAILED_MESSAGE};
pub use state::RequestState;

/// Proof that a request was started and has not settled yet.
#[derive(Debug)]
pub struct Submission {
    request: PlanRequest,
}

impl Submission {
    /// The payload to send for this submission.
    pub fn request(&self) -> &PlanRequest {
        &self.request
    }
}

/// Owner of the request lifecycle for one view.
pub struct Orchestrator<S> {
    service: S,
    state: RequestState,
}

impl<S: PlanService> Orchestrator<S> {
    /// Creates an idle orchestrator talking to the given service.
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Starts a submission cycle.
    ///
    /// Clears the previous plan or error and moves to `Pending`.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::RequestInFlight` while a request is pending and
    /// `PathwayError::InvalidInput` for an invalid profile. The state is left
    /// untouched in both cases.
    pub fn begin(&mut self, profile: &LearnerProfile) -> Result<Submission> {
        if self.state.is_pending() {
            debug!("Submission ignored, request already in flight");
            return Err(PathwayError::RequestInFlight);
        }

        let request = PlanRequest::try_from(profile)?;
        debug!("{} -> pending", self.state.as_str());
        self.state = RequestState::Pending;

        Ok(Submission { request })
    }

    /// Applies the outcome of a submission's exchange.
    ///
    /// Always leaves the orchestrator settled.
    pub fn settle(
        &mut self,
        submission: Submission,
        outcome: Result<ServiceResponse>,
    ) -> &RequestState {
        let Submission { request } = submission;
        self.state = match interpret(outcome) {
            Ok(plan) => {
                info!("Plan received for goal '{}'", plan.goal);
                RequestState::Success {
                    plan: Box::new(plan),
                    requested_weeks: request.duration_weeks,
                }
            }
            Err(message) => {
                warn!("Plan request failed: {message}");
                RequestState::Failed(message)
            }
        };
        debug!("pending -> {}", self.state.as_str());

        &self.state
    }

    /// Issues the submission's single request and settles it.
    pub async fn resolve(&mut self, submission: Submission) -> &RequestState {
        info!(
            "Requesting {}-week plan for goal '{}'",
            submission.request.duration_weeks, submission.request.goal
        );
        let outcome = self.service.generate(&submission.request).await;
        self.settle(submission, outcome)
    }

    /// Runs a whole cycle: [`begin`](Self::begin) then
    /// [`resolve`](Self::resolve).
    ///
    /// # Errors
    ///
    /// Only the errors of [`begin`](Self::begin); collaborator failures end in
    /// `RequestState::Failed`.
    pub async fn submit(&mut self, profile: &LearnerProfile) -> Result<&RequestState> {
        let submission = self.begin(profile)?;
        Ok(self.resolve(submission).await)
    }
}
