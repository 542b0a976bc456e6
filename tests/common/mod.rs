#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use mockito::{Server, ServerGuard};
use nuam_exchange_client::auth::{TOKEN_KEY, USER_KEY};
use nuam_exchange_client::prelude::*;
use serde_json::{json, Value};

pub use mockito::Matcher;

/// Nothing listens on port 1; requests fail before any response.
pub const DEAD_BACKEND: &str = "http://127.0.0.1:1";

pub async fn start_mock_server() -> ServerGuard {
    Server::new_async().await
}

/// Client against `base_url` with refresh pauses disabled.
pub fn client_for(base_url: &str, store: Arc<dyn SessionStore>) -> NuamClient {
    NuamClient::builder()
        .base_url(base_url)
        .session_store(store)
        .order_refresh_delay(Duration::ZERO)
        .tariff_refresh_delay(Duration::ZERO)
        .build()
        .expect("client should build")
}

/// Client whose session was restored from a pre-populated store.
pub async fn signed_in_client(
    base_url: &str,
    user: Value,
    token: &str,
) -> (NuamClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    store.set(TOKEN_KEY, token).unwrap();
    store.set(USER_KEY, &user.to_string()).unwrap();

    let client = client_for(base_url, store.clone());
    let restored = client.auth().restore().await;
    assert!(restored.is_some(), "fixture session should restore");
    (client, store)
}

pub fn operator_user() -> Value {
    json!({
        "idUsuario": "6561f0a2c3",
        "nombre": "MirtaAguilar",
        "rol": "Operador",
        "perfilBolsa": "CL"
    })
}

pub fn admin_user() -> Value {
    json!({
        "idUsuario": "6561f0a2c4",
        "nombre": "GabrielFuentes",
        "rol": "Admin",
        "perfilBolsa": "Regional"
    })
}

pub fn order_json(id: u64, instrument: &str, side: &str, quantity: u64, limit: Value) -> Value {
    json!({
        "idOrden": id,
        "tipo": side,
        "instrumento": instrument,
        "cantidad": quantity,
        "precioLimite": limit,
        "estado": "Pendiente",
        "fechaCreacion": "2025-11-20T14:03:11.123456"
    })
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
