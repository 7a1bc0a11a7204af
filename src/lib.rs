//! Receipt Processor
//!
//! This crate scores purchase receipts with loyalty points and serves the
//! results over HTTP. The [`scoring`] module holds the pure rule engine; the
//! [`api`] module exposes it through an axum router backed by a [`store`].

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scoring;
pub mod store;
