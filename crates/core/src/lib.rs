//! Domain layer for the recipe backend.
//!
//! Contains the entity types, the store (repository) traits, and the two
//! services that validate and orchestrate CRUD operations. No persistence
//! or HTTP concerns live here; those belong to `recettes-db` and
//! `recettes-api`.

pub mod error;
pub mod service;
pub mod store;
pub mod types;
