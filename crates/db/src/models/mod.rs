//! Row structs mapping database rows to the domain types.
//!
//! The domain types in `recettes-core` carry no sqlx derive, so each table
//! gets a local `FromRow` struct plus a conversion into its domain shape.

pub mod ingredient;
pub mod recette;
