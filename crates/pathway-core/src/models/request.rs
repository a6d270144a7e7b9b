//! Request payload sent to the plan-generation service.

use serde::{Deserialize, Serialize};

use super::LearnerProfile;
use crate::error::{PathwayError, Result};

/// A validated learner profile in wire form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub goal: String,
    pub current_skills: String,
    pub background: String,
    pub hours_per_week: u32,
    pub duration_weeks: u32,
}

impl TryFrom<&LearnerProfile> for PlanRequest {
    type Error = PathwayError;

    fn try_from(profile: &LearnerProfile) -> Result<Self> {
        profile.validate()?;
        Ok(Self {
            goal: profile.goal().to_string(),
            current_skills: profile.current_skills().to_string(),
            background: profile.background().to_string(),
            hours_per_week: profile.hours_per_week(),
            duration_weeks: profile.duration_weeks(),
        })
    }
}
