//! HTTP layer: axum handlers and routes over the recipe services.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
