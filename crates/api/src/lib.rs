//! HTTP API: routing, outcome→status mapping, and gateway-facing middleware.

pub mod app;
pub mod context;
pub mod middleware;
