use std::sync::Arc;

use recettes_core::service::{IngredientService, RecetteService};
use recettes_db::repositories::{PgIngredientStore, PgRecetteStore};
use recettes_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly only by the health check).
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Ingredient service wired with the Postgres store.
    pub ingredients: Arc<IngredientService>,
    /// Recipe service wired with both Postgres stores.
    pub recettes: Arc<RecetteService>,
}

impl AppState {
    /// Compose the services over Postgres-backed stores. This is the single
    /// production wiring point; tests construct services over in-memory
    /// stores through the same constructors.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let ingredient_store = Arc::new(PgIngredientStore::new(pool.clone()));
        let recette_store = Arc::new(PgRecetteStore::new(pool.clone()));

        let ingredients = Arc::new(IngredientService::new(ingredient_store.clone()));
        let recettes = Arc::new(RecetteService::new(recette_store, ingredient_store));

        Self {
            pool,
            config: Arc::new(config),
            ingredients,
            recettes,
        }
    }
}
