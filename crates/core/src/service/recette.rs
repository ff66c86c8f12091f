//! Recipe service: category membership validation, existence guards, and
//! cross-store referential integrity of the ingredient list on update.

use std::sync::Arc;

use crate::error::CoreError;
use crate::store::{IngredientStore, RecetteStore};
use crate::types::{Recette, RecetteCandidate, RecetteCategorie};

/// Message raised by the update/delete existence guards.
const RECETTE_NOT_FOUND: &str = "Recette not found";

pub struct RecetteService {
    store: Arc<dyn RecetteStore>,
    ingredients: Arc<dyn IngredientStore>,
}

impl RecetteService {
    /// Build the service with both store collaborators at composition time.
    /// The ingredient store is consulted for referential integrity on update.
    pub fn new(store: Arc<dyn RecetteStore>, ingredients: Arc<dyn IngredientStore>) -> Self {
        Self { store, ingredients }
    }

    pub async fn get_all(&self) -> Result<Vec<Recette>, CoreError> {
        self.store.get_all().await
    }

    /// Absence (`None`) propagates unchanged.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Recette>, CoreError> {
        self.store.get_by_id(id).await
    }

    pub async fn get_by_nom(&self, nom: &str) -> Result<Vec<Recette>, CoreError> {
        self.store.get_by_nom(nom).await
    }

    /// Validates membership in [`RecetteCategorie`] before consulting the
    /// store; an unknown label never reaches it.
    pub async fn get_by_categorie(&self, categorie: &str) -> Result<Vec<Recette>, CoreError> {
        let Some(categorie) = RecetteCategorie::parse(categorie) else {
            return Err(CoreError::BadRequest(format!(
                "Catégorie invalide. Les catégories valides sont : {}",
                RecetteCategorie::valid_labels()
            )));
        };
        self.store.get_by_categorie(categorie).await
    }

    /// The store assigns the id and validates the candidate structurally.
    pub async fn create(&self, candidate: RecetteCandidate) -> Result<Recette, CoreError> {
        self.store.create(candidate).await
    }

    /// Ordered guards: recipe existence first, then each referenced
    /// ingredient in list order. The first missing ingredient short-circuits
    /// the remaining checks, and the store's update is never called when any
    /// guard fails.
    pub async fn update(&self, recette: Recette) -> Result<Recette, CoreError> {
        if self.store.get_by_id(&recette.id).await?.is_none() {
            return Err(CoreError::NotFound(RECETTE_NOT_FOUND.to_string()));
        }
        for ingredient in &recette.ingredients {
            if self.ingredients.get_by_id(&ingredient.id).await?.is_none() {
                return Err(CoreError::BadRequest(format!(
                    "Ingredient with id {} does not exist",
                    ingredient.id
                )));
            }
        }
        self.store.update(recette).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        if self.store.get_by_id(id).await?.is_none() {
            return Err(CoreError::NotFound(RECETTE_NOT_FOUND.to_string()));
        }
        self.store.delete(id).await
    }
}
