//! Markdown rendering of the profile form and request outcomes.
//!
//! Rendering is a pure function of a [`LearnerProfile`] and a
//! [`RequestState`]; nothing here mutates either. Domain models implement
//! [`std::fmt::Display`] directly and wrapper types add page context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  RequestState   │    │  View Wrappers  │    │    Markdown     │
//! │  + Profile      │───▶│ (AppView, ...)  │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`form`]: Profile field list and submit control
//! - [`plan`]: The full plan document ([`PlanView`])
//! - [`view`]: Results region, empty state, loading and error alert
//! - [`models`]: Display implementations for plan models
//!
//! Optional plan sections are written only when present and non-empty, so an
//! absent collection and an empty one render identically.
//!
//! [`LearnerProfile`]: crate::models::LearnerProfile
//! [`RequestState`]: crate::orchestrator::RequestState

pub mod form;
pub mod models;
pub mod plan;
mod text;
pub mod view;

pub use form::{ProfileForm, SubmitControl, BUSY_LABEL, SUBMIT_LABEL};
pub use plan::PlanView;
pub use view::{AppView, EmptyState, ErrorAlert, LoadingIndicator, ResultsView};
