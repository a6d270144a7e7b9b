//! Learner profile held by the input form.

use std::ops::RangeInclusive;

use crate::error::{PathwayError, Result};

/// Goal pre-filled into a fresh profile.
pub const DEFAULT_GOAL: &str = "Become a junior MERN web developer";

/// Weekly hours pre-filled into a fresh profile.
pub const DEFAULT_HOURS_PER_WEEK: u32 = 10;

/// Plan length pre-filled into a fresh profile.
pub const DEFAULT_DURATION_WEEKS: u32 = 6;

/// Accepted weekly study hours.
pub const HOURS_PER_WEEK_RANGE: RangeInclusive<u32> = 1..=60;

/// Accepted plan lengths, in weeks.
pub const DURATION_CHOICES: [u32; 3] = [4, 5, 6];

/// The five inputs describing a learner.
///
/// Setters store raw input without checks; [`LearnerProfile::validate`] is
/// applied when the profile is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerProfile {
    goal: String,
    current_skills: String,
    background: String,
    hours_per_week: u32,
    duration_weeks: u32,
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL.to_string(),
            current_skills: String::new(),
            background: String::new(),
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
            duration_weeks: DEFAULT_DURATION_WEEKS,
        }
    }
}

impl LearnerProfile {
    /// Creates a profile with the form defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn current_skills(&self) -> &str {
        &self.current_skills
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn hours_per_week(&self) -> u32 {
        self.hours_per_week
    }

    pub fn duration_weeks(&self) -> u32 {
        self.duration_weeks
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.goal = goal.into();
    }

    pub fn set_current_skills(&mut self, current_skills: impl Into<String>) {
        self.current_skills = current_skills.into();
    }

    pub fn set_background(&mut self, background: impl Into<String>) {
        self.background = background.into();
    }

    pub fn set_hours_per_week(&mut self, hours_per_week: u32) {
        self.hours_per_week = hours_per_week;
    }

    pub fn set_duration_weeks(&mut self, duration_weeks: u32) {
        self.duration_weeks = duration_weeks;
    }

    /// Checks required fields and numeric ranges.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::InvalidInput` naming the first offending field,
    /// using the wire name of that field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("goal", &self.goal),
            ("currentSkills", &self.current_skills),
            ("background", &self.background),
        ] {
            if value.trim().is_empty() {
                return Err(PathwayError::invalid_input(field).with_reason("must not be empty"));
            }
        }

        if !HOURS_PER_WEEK_RANGE.contains(&self.hours_per_week) {
            return Err(PathwayError::invalid_input("hoursPerWeek").with_reason(format!(
                "must be between {} and {}",
                HOURS_PER_WEEK_RANGE.start(),
                HOURS_PER_WEEK_RANGE.end()
            )));
        }

        if !DURATION_CHOICES.contains(&self.duration_weeks) {
            return Err(PathwayError::invalid_input("durationWeeks")
                .with_reason("must be one of 4, 5 or 6"));
        }

        Ok(())
    }
}
