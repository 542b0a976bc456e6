//! High-level client: `NuamClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared session handle, cached state,
//! and the in-flight guards for mutating actions.

use crate::auth::client::Auth;
use crate::auth::{MemorySessionStore, SessionHandle, SessionStore};
use crate::domain::health::client::Health;
use crate::domain::order::client::Orders;
use crate::domain::order::UserOrders;
use crate::domain::report::client::Reports;
use crate::domain::report::Transaction;
use crate::domain::tariff::client::Tariffs;
use crate::domain::tariff::TariffTable;
use crate::error::SdkError;
use crate::http::NuamHttp;

use async_lock::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::health::client::Health as HealthClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::report::client::Reports as ReportsClient;
pub use crate::domain::tariff::client::Tariffs as TariffsClient;

/// The primary entry point for the NUAM Exchange SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.auth()`, `client.orders()`, `client.tariffs()`, etc.
pub struct NuamClient {
    pub(crate) http: NuamHttp,
    /// Current session. Written only by the auth sub-client.
    pub(crate) session: SessionHandle,
    pub(crate) store: Arc<dyn SessionStore>,
    /// Last successfully fetched order list.
    pub(crate) order_cache: Arc<RwLock<UserOrders>>,
    /// Last successfully fetched tariff table.
    pub(crate) tariff_cache: Arc<RwLock<TariffTable>>,
    /// Last successfully fetched transaction report.
    pub(crate) report_cache: Arc<RwLock<Vec<Transaction>>>,
    pub(crate) in_flight: Arc<InFlight>,
    pub(crate) order_refresh_delay: Duration,
    pub(crate) tariff_refresh_delay: Duration,
}

impl NuamClient {
    pub fn builder() -> NuamClientBuilder {
        NuamClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn tariffs(&self) -> Tariffs<'_> {
        Tariffs { client: self }
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports { client: self }
    }

    pub fn health(&self) -> Health<'_> {
        Health { client: self }
    }

    /// Backend origin this client talks to.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Clear all cached backend state.
    pub async fn clear_all_caches(&self) {
        self.order_cache.write().await.clear();
        self.tariff_cache.write().await.clear();
        self.report_cache.write().await.clear();
    }

    /// Wait out a refresh delay, if any.
    pub(crate) async fn pause(delay: Duration) {
        if !delay.is_zero() {
            futures_timer::Delay::new(delay).await;
        }
    }
}

impl Clone for NuamClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
            store: self.store.clone(),
            order_cache: self.order_cache.clone(),
            tariff_cache: self.tariff_cache.clone(),
            report_cache: self.report_cache.clone(),
            in_flight: self.in_flight.clone(),
            order_refresh_delay: self.order_refresh_delay,
            tariff_refresh_delay: self.tariff_refresh_delay,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// In-flight guards
// ═════════════════════════════════════════════════════════════════════════════

/// Mutating actions that must not overlap with themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Login,
    Logout,
    SubmitOrder,
    ConfigureTariff,
}

impl Action {
    fn name(self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::Logout => "logout",
            Action::SubmitOrder => "order submission",
            Action::ConfigureTariff => "tariff configuration",
        }
    }
}

/// One flag per [`Action`]; set while a call of that action is outstanding.
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    login: AtomicBool,
    logout: AtomicBool,
    submit_order: AtomicBool,
    configure_tariff: AtomicBool,
}

impl InFlight {
    fn flag(&self, action: Action) -> &AtomicBool {
        match action {
            Action::Login => &self.login,
            Action::Logout => &self.logout,
            Action::SubmitOrder => &self.submit_order,
            Action::ConfigureTariff => &self.configure_tariff,
        }
    }

    /// Claim `action`, or fail with [`SdkError::Busy`] if it is already running.
    pub(crate) fn begin(&self, action: Action) -> Result<ActionGuard<'_>, SdkError> {
        let flag = self.flag(action);
        if flag.swap(true, Ordering::AcqRel) {
            tracing::debug!(action = action.name(), "rejected re-entrant trigger");
            return Err(SdkError::Busy(action.name()));
        }
        Ok(ActionGuard { flag })
    }
}

/// Releases its action when dropped.
pub(crate) struct ActionGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for ActionGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct NuamClientBuilder {
    base_url: String,
    store: Option<Arc<dyn SessionStore>>,
    order_refresh_delay: Duration,
    tariff_refresh_delay: Duration,
}

impl Default for NuamClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            store: None,
            order_refresh_delay: Duration::from_millis(500),
            tariff_refresh_delay: Duration::from_millis(500),
        }
    }
}

impl NuamClientBuilder {
    /// Defaults, with the base URL taken from `NUAM_API_URL` when set.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(crate::network::API_URL_ENV) {
            if !url.trim().is_empty() {
                builder.base_url = url.trim().to_string();
            }
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Where the session is persisted. Defaults to an in-memory store.
    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Pause between a successful order submission and the list re-fetch.
    pub fn order_refresh_delay(mut self, delay: Duration) -> Self {
        self.order_refresh_delay = delay;
        self
    }

    /// Pause between a successful tariff write and the table re-fetch, to
    /// let the backend's write propagate.
    pub fn tariff_refresh_delay(mut self, delay: Duration) -> Self {
        self.tariff_refresh_delay = delay;
        self
    }

    pub fn build(self) -> Result<NuamClient, SdkError> {
        let session: SessionHandle = Arc::new(RwLock::new(None));
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemorySessionStore::new()));

        Ok(NuamClient {
            http: NuamHttp::new(&self.base_url, session.clone())?,
            session,
            store,
            order_cache: Arc::new(RwLock::new(UserOrders::new())),
            tariff_cache: Arc::new(RwLock::new(TariffTable::new())),
            report_cache: Arc::new(RwLock::new(Vec::new())),
            in_flight: Arc::new(InFlight::default()),
            order_refresh_delay: self.order_refresh_delay,
            tariff_refresh_delay: self.tariff_refresh_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_rejects_overlap() {
        let in_flight = InFlight::default();
        let guard = in_flight.begin(Action::SubmitOrder).unwrap();
        let second = in_flight.begin(Action::SubmitOrder);
        assert!(matches!(second, Err(SdkError::Busy("order submission"))));
        // other actions are independent
        assert!(in_flight.begin(Action::ConfigureTariff).is_ok());
        drop(guard);
        assert!(in_flight.begin(Action::SubmitOrder).is_ok());
    }

    #[test]
    fn test_builder_defaults() {
        let client = NuamClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.order_refresh_delay, Duration::from_millis(500));
        assert_eq!(client.tariff_refresh_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = NuamClient::builder()
            .base_url("http://127.0.0.1:9000/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
        assert_eq!(client.http.api_url("/tarifas"), "http://127.0.0.1:9000/api/tarifas");
    }
}
