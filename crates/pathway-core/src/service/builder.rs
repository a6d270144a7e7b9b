//! Builder for creating and configuring plan service clients.

use log::debug;
use reqwest::{Client, Url};

use super::HttpPlanService;
use crate::error::{PathwayError, Result};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/plan/generate";

/// Builder for creating and configuring [`HttpPlanService`] instances.
#[derive(Debug, Clone, Default)]
pub struct ServiceBuilder {
    endpoint: Option<String>,
}

impl ServiceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom plan-generation endpoint.
    ///
    /// If not specified, uses [`DEFAULT_ENDPOINT`].
    pub fn with_endpoint<S: AsRef<str>>(mut self, endpoint: Option<S>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.as_ref().trim().to_string());
        }
        self
    }

    /// Builds the configured service client.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::Configuration` if the endpoint is not an
    /// absolute http(s) URL or the HTTP client cannot be created.
    pub fn build(self) -> Result<HttpPlanService> {
        let raw = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let endpoint = Self::parse_endpoint(raw)?;

        let http = Client::builder()
            .build()
            .map_err(|e| PathwayError::configuration(format!("HTTP client: {e}")))?;

        debug!("Plan service endpoint: {endpoint}");
        Ok(HttpPlanService::new(http, endpoint))
    }

    fn parse_endpoint(raw: &str) -> Result<Url> {
        let url = Url::parse(raw)
            .map_err(|e| PathwayError::configuration(format!("invalid endpoint '{raw}': {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(PathwayError::configuration(format!(
                "unsupported endpoint scheme '{scheme}', expected http or https"
            ))),
        }
    }
}
