//! # depot-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **REST JSON API** for device management
//!   (`/api/devices`, `/api/devices/{id}`, filtered listings, …)
//! - Validate request bodies against an explicit declarative schema before
//!   invoking the application core
//! - Map application results into HTTP responses and domain errors into
//!   status codes (400 / 404 / 422 / 500)
//!
//! ## Dependency rule
//! Depends on `depot-app` (for the port trait and service) and
//! `depot-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
pub mod validate;
