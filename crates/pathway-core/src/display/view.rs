//! Page-level views driven by the request state.

use std::fmt;

use super::{
    form::{BUSY_LABEL, SUBMIT_LABEL},
    PlanView, ProfileForm, SubmitControl,
};
use crate::{models::LearnerProfile, orchestrator::RequestState};

/// Placeholder shown before anything has been requested.
pub struct EmptyState;

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Nothing yet")?;
        writeln!(f)?;
        writeln!(
            f,
            "Fill in your details and choose **{}** to see a personalized roadmap.",
            SUBMIT_LABEL
        )
    }
}

/// Loading indicator shown while a request is in flight.
pub struct LoadingIndicator;

impl fmt::Display for LoadingIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*{}*", BUSY_LABEL)
    }
}

/// Inline error alert.
///
/// Every line of the message is written verbatim behind a `> ` marker. Plan
/// and profile text never starts a line with `>`, so the marker identifies
/// the alert.
pub struct ErrorAlert<'a>(pub &'a str);

impl fmt::Display for ErrorAlert<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.0.split('\n') {
            writeln!(f, "> {line}")?;
        }
        Ok(())
    }
}

/// The results region for a request state.
///
/// Exactly one of the empty state, the loading indicator or the plan is
/// written. A failed state writes nothing here; its alert belongs under the
/// form (see [`AppView`]).
pub struct ResultsView<'a> {
    state: &'a RequestState,
}

impl<'a> ResultsView<'a> {
    pub fn new(state: &'a RequestState) -> Self {
        Self { state }
    }
}

impl fmt::Display for ResultsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            RequestState::Idle => write!(f, "{}", EmptyState),
            RequestState::Pending => write!(f, "{}", LoadingIndicator),
            RequestState::Success {
                plan,
                requested_weeks,
            } => write!(f, "{}", PlanView::new(plan, *requested_weeks)),
            RequestState::Failed(_) => Ok(()),
        }
    }
}

/// The whole page: profile form, submit control, inline error and results.
///
/// # Examples
///
/// ```rust
/// use pathway_core::{display::AppView, LearnerProfile, RequestState};
///
/// let profile = LearnerProfile::new();
/// let failed = RequestState::Failed("bad input".to_string());
///
/// let output = AppView::new(&profile, &failed).to_string();
/// assert!(output.contains("> bad input\n"));
/// assert!(!output.contains("Nothing yet"));
/// ```
pub struct AppView<'a> {
    profile: &'a LearnerProfile,
    state: &'a RequestState,
}

impl<'a> AppView<'a> {
    pub fn new(profile: &'a LearnerProfile, state: &'a RequestState) -> Self {
        Self { profile, state }
    }
}

impl fmt::Display for AppView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Personalized Learning Assistant")?;
        writeln!(f)?;
        writeln!(f, "## Learner Profile")?;
        writeln!(f)?;
        write!(f, "{}", ProfileForm::new(self.profile))?;
        writeln!(f)?;
        write!(f, "{}", SubmitControl::new(self.state.is_pending()))?;

        if let Some(message) = self.state.error_message() {
            writeln!(f)?;
            write!(f, "{}", ErrorAlert(message))?;
        }

        writeln!(f)?;
        writeln!(f, "## Generated Plan")?;
        writeln!(f)?;
        write!(f, "{}", ResultsView::new(self.state))
    }
}
