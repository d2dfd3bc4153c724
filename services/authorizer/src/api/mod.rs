//! HTTP handlers for the authorizer service.
//!
//! # Purpose
//! Groups system, catalog, and decision endpoints. Handlers are thin: they
//! parse requests, call into `textura_rbac`, log, count, and shape responses.
pub mod catalog;
pub mod decisions;
pub mod error;
pub mod system;
pub mod types;
