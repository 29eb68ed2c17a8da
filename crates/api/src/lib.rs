//! HTTP API: routing and request/response mapping.

pub mod app;
