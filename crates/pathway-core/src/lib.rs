//! Core library for the Pathway learning plan assistant.
//!
//! This crate captures a learner profile, submits it to a remote
//! plan-generation service and renders the returned plan as markdown.
//!
//! # Architecture
//!
//! - **Profile Capture** ([`models::LearnerProfile`]): the five form inputs
//!   with defaults and submission-time validation
//! - **Request Orchestrator** ([`orchestrator`]): the single-request
//!   lifecycle `Idle → Pending → Success | Failed`
//! - **Service** ([`service`]): the collaborator boundary and its reqwest
//!   implementation
//! - **Rendering** ([`display`]): pure markdown views of the current state
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pathway_core::{display::AppView, LearnerProfile, Orchestrator, ServiceBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ServiceBuilder::new()
//!     .with_endpoint(Some("http://localhost:5000/api/plan/generate"))
//!     .build()?;
//! let mut orchestrator = Orchestrator::new(service);
//!
//! let mut profile = LearnerProfile::new();
//! profile.set_current_skills("Basic HTML/CSS, some JavaScript");
//! profile.set_background("BSCS 5th semester");
//!
//! orchestrator.submit(&profile).await?;
//! println!("{}", AppView::new(&profile, orchestrator.state()));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod service;

// Re-export commonly used types
pub use display::{AppView, PlanView, ResultsView};
pub use error::{PathwayError, Result};
pub use models::{LearnerProfile, Plan, PlanRequest};
pub use orchestrator::{Orchestrator, RequestState, Submission};
pub use service::{HttpPlanService, PlanService, ServiceBuilder, ServiceResponse};
