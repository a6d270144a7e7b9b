//! Data models for learner profiles and generated plans.
//!
//! The [`LearnerProfile`] is the mutable input owned by the form, the
//! [`PlanRequest`] is its validated wire form, and [`Plan`] is the immutable
//! payload returned by the plan-generation service. Display implementations
//! live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use pathway_core::models::{LearnerProfile, PlanRequest};
//!
//! let mut profile = LearnerProfile::new();
//! profile.set_current_skills("Basic HTML/CSS");
//! profile.set_background("BSCS 5th semester");
//!
//! let request = PlanRequest::try_from(&profile).unwrap();
//! assert_eq!(request.hours_per_week, 10);
//! assert_eq!(request.duration_weeks, 6);
//! ```

pub mod plan;
pub mod profile;
pub mod request;


pub use plan::{Activity, PathItem, Plan, Resource, WeekPlan};
pub use profile::{
    LearnerProfile, DEFAULT_DURATION_WEEKS, DEFAULT_GOAL, DEFAULT_HOURS_PER_WEEK,
    DURATION_CHOICES, HOURS_PER_WEEK_RANGE,
};
pub use request::PlanRequest;
