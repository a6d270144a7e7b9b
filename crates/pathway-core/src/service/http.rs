//! reqwest-backed plan service.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};

use super::{PlanService, ServiceResponse};
use crate::{error::Result, models::PlanRequest};

/// Plan service reached over HTTP with a JSON POST.
#[derive(Debug, Clone)]
pub struct HttpPlanService {
    http: Client,
    endpoint: Url,
}

impl HttpPlanService {
    pub(crate) fn new(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// The URL plan requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PlanService for HttpPlanService {
    async fn generate(&self, request: &PlanRequest) -> Result<ServiceResponse> {
        debug!("POST {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Plan service answered {status} with {} bytes", body.len());

        Ok(ServiceResponse { status, body })
    }
}
