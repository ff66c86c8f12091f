//! Postgres implementations of the core store traits.
//!
//! Each store owns a `PgPool` clone (the services hold them behind
//! `Arc<dyn …Store>`, so the pool must travel with the implementation).
//! Absence is always signaled with `Ok(None)` via `fetch_optional`; sqlx
//! errors are classified once, here, at the boundary.

pub mod ingredient_store;
pub mod recette_store;

pub use ingredient_store::PgIngredientStore;
pub use recette_store::PgRecetteStore;

use recettes_core::error::CoreError;

/// Classify a sqlx error into a domain error.
///
/// Foreign key (23503) and unique (23505) violations are caller mistakes and
/// map to `BadRequest`; everything else is a backend failure.
pub(crate) fn map_db_err(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some("23503") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::BadRequest(format!(
                    "Référence invalide (contrainte {constraint})"
                ));
            }
            Some("23505") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::BadRequest(format!(
                    "Valeur en double (contrainte {constraint})"
                ));
            }
            _ => {}
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::storage(err)
}
