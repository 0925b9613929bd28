//! # depot-domain
//!
//! Pure domain model for the depot device inventory service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (inventory records with a name, a brand, and a
//!   lifecycle state) and their invariants
//! - Define the **lifecycle guard**: a device that is `in_use` cannot be
//!   renamed, rebranded, or deleted — only its state may change
//! - Define **patches** (partial updates applying only the fields present)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod device;
pub mod error;
pub mod id;
pub mod time;
