//! Inspection Register API Library
//!
//! This crate provides the core functionality for the inspection record
//! service: a storage trait with file and database adapters, the in-memory
//! query engine, and the HTTP handlers.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod dates;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod models;
pub mod query;
pub mod store;

use axum::Router;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn store::RecordStore>,
    /// Connection pool when the database backend is active; used by the
    /// readiness probe.
    pub db: Option<Arc<db::DbPool>>,
    pub config: config::AppConfig,
}

/// Builds the application router. The caller attaches middleware layers and
/// the state.
pub fn router() -> Router<AppState> {
    handlers::routes()
}
