//! Health sub-client.

use crate::client::NuamClient;
use crate::domain::health::HealthReport;
use crate::error::SdkError;

pub struct Health<'a> {
    pub(crate) client: &'a NuamClient,
}

impl<'a> Health<'a> {
    /// `GET /health`: served at the origin, outside the `/api` prefix.
    pub async fn check(&self) -> Result<HealthReport, SdkError> {
        let url = format!("{}/health", self.client.http.base_url());
        Ok(self
            .client
            .http
            .get(&url, "Health check failed")
            .await?)
    }
}
