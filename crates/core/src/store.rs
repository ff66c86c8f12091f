//! Store (repository) traits.
//!
//! One contract for signaling absence: `get_by_id` returns `Ok(None)` when
//! no row matches; stores never raise their own not-found error. Structural
//! validation of candidates (e.g. rejecting empty names) and id assignment
//! belong to the store; any backend failure surfaces as
//! [`CoreError::Storage`].
//!
//! Services hold these as `Arc<dyn …Store>`, so production (Postgres) and
//! test (in-memory) wiring are symmetric.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{Ingredient, IngredientCandidate, Recette, RecetteCandidate, RecetteCategorie};

#[async_trait]
pub trait IngredientStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Ingredient>, CoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Ingredient>, CoreError>;

    /// Name lookup; match semantics (substring vs. exact) are owned by the
    /// store implementation.
    async fn get_by_nom(&self, nom: &str) -> Result<Vec<Ingredient>, CoreError>;

    async fn create(&self, candidate: IngredientCandidate) -> Result<Ingredient, CoreError>;

    async fn update(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError>;

    async fn delete(&self, id: &str) -> Result<(), CoreError>;
}

#[async_trait]
pub trait RecetteStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Recette>, CoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Recette>, CoreError>;

    async fn get_by_nom(&self, nom: &str) -> Result<Vec<Recette>, CoreError>;

    /// Filtered read by an already-validated category value.
    async fn get_by_categorie(
        &self,
        categorie: RecetteCategorie,
    ) -> Result<Vec<Recette>, CoreError>;

    async fn create(&self, candidate: RecetteCandidate) -> Result<Recette, CoreError>;

    async fn update(&self, recette: Recette) -> Result<Recette, CoreError>;

    async fn delete(&self, id: &str) -> Result<(), CoreError>;
}
