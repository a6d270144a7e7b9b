//! Boundary to the remote plan-generation service.
//!
//! The service is an opaque collaborator reached through a single POST
//! exchange. [`PlanService`] models that exchange at the transport level: it
//! returns the raw status and body, and leaves interpretation to the
//! [`crate::orchestrator`].

use async_trait::async_trait;

use crate::{error::Result, models::PlanRequest};

pub mod builder;
pub mod http;

pub use builder::{ServiceBuilder, DEFAULT_ENDPOINT};
pub use http::HttpPlanService;

/// Raw response of one plan-generation exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    /// HTTP status code
    pub status: u16,
    /// Unparsed response body
    pub body: String,
}

impl ServiceResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A plan-generation collaborator.
///
/// Each call is one independent request/response exchange. Errors are
/// transport-level only; a non-success status is still `Ok`.
#[async_trait]
pub trait PlanService: Send + Sync {
    async fn generate(&self, request: &PlanRequest) -> Result<ServiceResponse>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(ServiceResponse::new(200, "").is_success());
        assert!(ServiceResponse::new(201, "").is_success());
        assert!(!ServiceResponse::new(199, "").is_success());
        assert!(!ServiceResponse::new(400, "").is_success());
        assert!(!ServiceResponse::new(500, "").is_success());
    }
}
