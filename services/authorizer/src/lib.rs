//! Authorizer service library crate.
//!
//! # Purpose
//! Exposes the HTTP decision API, configuration, and observability wiring
//! around `textura_rbac` for use by the binary and tests.
pub mod api;
pub mod app;
pub mod config;
pub mod observability;
