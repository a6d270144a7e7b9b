//! Learner profile form and its submit control.

use std::fmt;

use super::text::Text;
use crate::models::LearnerProfile;

/// Label of the submit control when it accepts a submission.
pub const SUBMIT_LABEL: &str = "Generate Learning Plan";

/// Label of the submit control while a request is in flight.
pub const BUSY_LABEL: &str = "Generating plan…";

/// The submit control, disabled and marked busy while pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pending: bool,
}

impl SubmitControl {
    pub fn new(pending: bool) -> Self {
        Self { pending }
    }

    /// Whether a submission can be made.
    pub fn is_enabled(&self) -> bool {
        !self.pending
    }

    pub fn label(&self) -> &'static str {
        if self.pending {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

impl fmt::Display for SubmitControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pending {
            writeln!(f, "*{}* (disabled)", self.label())
        } else {
            writeln!(f, "**[ {} ]**", self.label())
        }
    }
}

/// Current profile values as a field list.
pub struct ProfileForm<'a> {
    profile: &'a LearnerProfile,
}

impl<'a> ProfileForm<'a> {
    pub fn new(profile: &'a LearnerProfile) -> Self {
        Self { profile }
    }
}

impl fmt::Display for ProfileForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile;
        writeln!(f, "- **Learning goal**: {}", Text::inline(profile.goal()))?;
        writeln!(f, "- **Current skills**: {}", Text::inline(profile.current_skills()))?;
        writeln!(f, "- **Background**: {}", Text::inline(profile.background()))?;
        writeln!(f, "- **Hours per week**: {}", profile.hours_per_week())?;
        writeln!(f, "- **Duration**: {} weeks", profile.duration_weeks())
    }
}
