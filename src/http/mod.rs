//! HTTP client layer: `NuamHttp`, the transport normalizer.

pub mod client;

pub use client::NuamHttp;
pub use reqwest::Method;
