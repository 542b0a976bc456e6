//! Reports sub-client: transaction history queries.

use crate::client::NuamClient;
use crate::domain::report::wire::ReportsResponse;
use crate::domain::report::{Transaction, DEFAULT_REPORT_LIMIT};
use crate::error::{SdkError, ValidationError};

pub struct Reports<'a> {
    pub(crate) client: &'a NuamClient,
}

impl<'a> Reports<'a> {
    /// Most recent transactions, in server order. Default limit 10.
    pub async fn list(&self, limit: Option<u32>) -> Result<Vec<Transaction>, SdkError> {
        let limit = limit.unwrap_or(DEFAULT_REPORT_LIMIT);
        if limit == 0 {
            return Err(ValidationError::InvalidLimit.into());
        }

        let url = self
            .client
            .http
            .api_url(&format!("/reportes?limite={}", limit));
        let resp: ReportsResponse = self
            .client
            .http
            .get(&url, "Error loading reports")
            .await?;

        let transactions: Vec<Transaction> = resp
            .transactions
            .into_iter()
            .map(Transaction::from)
            .collect();
        *self.client.report_cache.write().await = transactions.clone();
        Ok(transactions)
    }

    /// Last successfully fetched report.
    pub async fn cached(&self) -> Vec<Transaction> {
        self.client.report_cache.read().await.clone()
    }
}
