//! # NUAM Exchange client
//!
//! Client SDK for the NUAM Exchange multi-exchange trading front-end.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared newtypes, domain slices (orders, tariffs, reports, health), errors
//! 2. **Auth**: Session value, persistence stores, login/restore/logout
//! 3. **HTTP API**: `NuamHttp`, which normalizes every call into one error taxonomy
//! 4. **High-Level Client**: `NuamClient` with nested sub-clients and cached state
//! 5. **Routing**: `RouteState`, the role-based dashboard state machine
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nuam_exchange_client::prelude::*;
//!
//! let client = NuamClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let route = RouteState::from_session(client.auth().restore().await);
//! let user = client.auth().login("MirtaAguilar", "1234").await?;
//! let placed = client.orders().place("enel", Side::Buy, 100, None).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: session, persistence, login/logout.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP transport normalizer.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `NuamClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: Routing ─────────────────────────────────────────────────────────

/// Role-based dashboard routing.
pub mod router;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{OrderId, Side};

    // Domain types
    pub use crate::domain::health::HealthReport;
    pub use crate::domain::order::{
        Execution, Order, OrderDraft, OrderKind, OrderStatus, PlacedOrder, UserOrders,
    };
    pub use crate::domain::report::Transaction;
    pub use crate::domain::tariff::{Confirmation, Exchange, Tariff, TariffForm, TariffTable};

    // Errors
    pub use crate::error::{ErrorKind, HttpError, SdkError, StoreError, ValidationError};

    // Network
    pub use crate::network::{API_URL_ENV, DEFAULT_API_URL};

    // Auth + persistence
    pub use crate::auth::{
        FileSessionStore, MemorySessionStore, Role, Session, SessionStore, UserProfile,
    };

    // Routing
    pub use crate::router::{Dashboard, RouteError, RouteState};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, HealthClient, NuamClient, NuamClientBuilder, OrdersClient, ReportsClient,
        TariffsClient,
    };
}
