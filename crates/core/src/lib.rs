//! Hearthside Core - Shared types library.
//!
//! This crate provides common types used across all Hearthside components:
//! - `storefront` - The storefront widget library (cart, records, payments)
//! - `cli` - Command-line front end that drives the widget flows
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! payment clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, money, and
//!   statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
