//! Hearthside Storefront library.
//!
//! This crate provides the storefront widget as a library: product catalog,
//! shopping cart, customer/subscription/order records over a pluggable
//! storage backend, simulated payment processing, and the form-to-record
//! pipeline that ties them together. Front ends (the CLI, tests) drive the
//! [`pipeline::Storefront`] and render the notifications it produces.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod models;
pub mod notify;
pub mod payment;
pub mod pipeline;
pub mod storage;
