//! Network constants for the NUAM Exchange client.

/// Default backend origin. API routes live under `/api`, health at `/health`.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend origin.
pub const API_URL_ENV: &str = "NUAM_API_URL";

/// Path prefix shared by every API route.
pub const API_PREFIX: &str = "/api";
