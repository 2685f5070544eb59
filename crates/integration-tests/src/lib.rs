//! Integration test helpers for Hearthside.
//!
//! Tests live in `tests/`; this library provides the shared storefront
//! construction helpers.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use hearthside_storefront::db::RecordStore;
use hearthside_storefront::payment::SimulatedGateway;
use hearthside_storefront::pipeline::Storefront;
use hearthside_storefront::storage::JsonFileStorage;

/// Open a file-backed storefront in `dir` with a deterministic gateway.
///
/// An `approval_rate` of `1.0` approves every charge; `0.0` declines every
/// charge.
///
/// # Panics
///
/// Panics if the store cannot be opened; test directories are always
/// writable.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn storefront_in(dir: &Path, approval_rate: f64) -> Storefront {
    let backend = JsonFileStorage::open(dir).unwrap();
    let store = RecordStore::open(backend).unwrap();
    let gateway = Arc::new(SimulatedGateway::new(
        Duration::from_millis(1),
        approval_rate,
    ));
    Storefront::new(store, gateway)
}
