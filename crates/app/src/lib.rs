//! # depot-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (driven/outbound port): [`ports::DeviceRepository`]
//! - Provide the **lifecycle service**: the single place where business
//!   rules about device state are enforced — all mutation passes through
//!   [`services::device_service::DeviceService`]
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `depot-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
