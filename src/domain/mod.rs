//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, display-ready)
//! - `wire.rs`: Raw serde structs matching backend requests/responses
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `state.rs`: Cached snapshots of backend state
//! - `client.rs`: Sub-client with HTTP methods and cache refresh

pub mod health;
pub mod order;
pub mod report;
pub mod tariff;
