//! Tariffs sub-client: admin rate configuration and the rate table.

use crate::client::{Action, NuamClient};
use crate::domain::tariff::wire::{ConfigureTariffResponse, TariffsResponse};
use crate::domain::tariff::{Confirmation, Exchange, Tariff, TariffForm, TariffTable};
use crate::error::SdkError;

use rust_decimal::Decimal;

/// Sub-client for tariff operations.
pub struct Tariffs<'a> {
    pub(crate) client: &'a NuamClient,
}

impl<'a> Tariffs<'a> {
    /// Fetch the full rate table. Rows for unknown exchanges are skipped.
    pub async fn list(&self) -> Result<Vec<Tariff>, SdkError> {
        let url = self.client.http.api_url("/tarifas");
        let resp: TariffsResponse = self
            .client
            .http
            .get(&url, "Error loading tariffs")
            .await?;

        let tariffs: Vec<Tariff> = resp
            .tariffs
            .into_iter()
            .filter_map(|row| match Tariff::try_from(row) {
                Ok(t) => Some(t),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping tariff row");
                    None
                }
            })
            .collect();

        let mut table = self.client.tariff_cache.write().await;
        table.replace(tariffs);
        Ok(table.iter().cloned().collect())
    }

    /// Set the base rate for `exchange`.
    ///
    /// A missing or negative rate fails locally. On success, waits the
    /// configured propagation delay and re-reads the table.
    pub async fn configure(
        &self,
        exchange: Exchange,
        base_rate: Option<Decimal>,
    ) -> Result<Confirmation, SdkError> {
        let confirmation = self.write(&TariffForm::new(exchange, base_rate)).await?;
        self.refresh_after_write().await;
        Ok(confirmation)
    }

    /// Submit the admin form. Once the write is accepted the form is reset
    /// to its defaults, then the table is re-read after the propagation delay.
    pub async fn submit_form(&self, form: &mut TariffForm) -> Result<Confirmation, SdkError> {
        let confirmation = self.write(form).await?;
        form.reset();
        self.refresh_after_write().await;
        Ok(confirmation)
    }

    /// Last successfully fetched rate table.
    pub async fn cached(&self) -> TariffTable {
        self.client.tariff_cache.read().await.clone()
    }

    async fn write(&self, form: &TariffForm) -> Result<Confirmation, SdkError> {
        let request = form.validate()?;
        let _guard = self.client.in_flight.begin(Action::ConfigureTariff)?;

        let url = self.client.http.api_url("/tarifas");
        let resp: ConfigureTariffResponse = self
            .client
            .http
            .post(&url, Some(&request), "Error configuring tariff")
            .await?;

        tracing::info!(exchange = %request.exchange, base_rate = %request.base_rate, "tariff configured");
        Ok(Confirmation {
            message: resp.message.unwrap_or_default(),
        })
    }

    async fn refresh_after_write(&self) {
        NuamClient::pause(self.client.tariff_refresh_delay).await;
        if let Err(e) = self.list().await {
            tracing::warn!(error = %e, "tariff table refresh after write failed");
        }
    }
}
