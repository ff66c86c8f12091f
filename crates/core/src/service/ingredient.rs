//! Ingredient service: existence guards on update/delete, otherwise pure
//! delegation to the injected store.

use std::sync::Arc;

use crate::error::CoreError;
use crate::store::IngredientStore;
use crate::types::{Ingredient, IngredientCandidate};

/// Message raised by the update/delete existence guards.
const NO_ID_FOUND: &str = "No id found for this ingredient";

pub struct IngredientService {
    store: Arc<dyn IngredientStore>,
}

impl IngredientService {
    /// Build the service with its store collaborator. Wiring happens at
    /// composition time; there is no default store.
    pub fn new(store: Arc<dyn IngredientStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Ingredient>, CoreError> {
        self.store.get_all().await
    }

    /// Absence (`None`) propagates unchanged; translation to an error is the
    /// caller's concern.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Ingredient>, CoreError> {
        self.store.get_by_id(id).await
    }

    pub async fn get_by_nom(&self, nom: &str) -> Result<Vec<Ingredient>, CoreError> {
        self.store.get_by_nom(nom).await
    }

    /// The store assigns the id and validates the candidate.
    pub async fn create(&self, candidate: IngredientCandidate) -> Result<Ingredient, CoreError> {
        self.store.create(candidate).await
    }

    /// Fails with `NotFound` before calling the store's update if the id is
    /// absent.
    pub async fn update(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        if self.store.get_by_id(&ingredient.id).await?.is_none() {
            return Err(CoreError::NotFound(NO_ID_FOUND.to_string()));
        }
        self.store.update(ingredient).await
    }

    /// The existence check goes through this service's own `get_by_id`.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        if self.get_by_id(id).await?.is_none() {
            return Err(CoreError::NotFound(NO_ID_FOUND.to_string()));
        }
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use assert_matches::assert_matches;

    use super::*;
    use crate::service::testing::MemoryIngredients;

    fn tomate() -> Ingredient {
        Ingredient {
            id: "1".to_string(),
            nom: "Tomate".to_string(),
        }
    }

    fn service_with(items: Vec<Ingredient>) -> (IngredientService, Arc<MemoryIngredients>) {
        let store = Arc::new(MemoryIngredients::with(items));
        let service = IngredientService::new(store.clone());
        (service, store)
    }

    #[tokio::test]
    async fn test_get_all_returns_store_list_unmodified() {
        let (service, _) = service_with(vec![tomate()]);
        let all = service.get_all().await.unwrap();
        assert_eq!(all, vec![tomate()]);
    }

    #[tokio::test]
    async fn test_get_all_empty_store_yields_empty_list() {
        let (service, _) = service_with(vec![]);
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_absence_propagates_as_none() {
        let (service, _) = service_with(vec![tomate()]);
        assert_eq!(service.get_by_id("999").await.unwrap(), None);
        assert_eq!(service.get_by_id("1").await.unwrap(), Some(tomate()));
    }

    #[tokio::test]
    async fn test_create_delegates_and_store_assigns_id() {
        let (service, _) = service_with(vec![]);
        let created = service
            .create(IngredientCandidate {
                nom: "Basilic".to_string(),
            })
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.nom, "Basilic");
    }

    #[tokio::test]
    async fn test_update_existing_returns_updated_ingredient() {
        let (service, _) = service_with(vec![tomate()]);
        let updated = service
            .update(Ingredient {
                id: "1".to_string(),
                nom: "Updated Tomate".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.nom, "Updated Tomate");
    }

    #[tokio::test]
    async fn test_update_missing_id_fails_not_found_without_store_update() {
        let (service, store) = service_with(vec![tomate()]);
        let err = service
            .update(Ingredient {
                id: "999".to_string(),
                nom: "Nonexistent".to_string(),
            })
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound(msg) => {
            assert_eq!(msg, "No id found for this ingredient");
        });
        assert_eq!(store.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_existing_removes_from_store() {
        let (service, store) = service_with(vec![tomate()]);
        service.delete("1").await.unwrap();
        assert!(store.items.lock().unwrap().is_empty());
        assert_eq!(store.delete_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_id_fails_not_found_without_store_delete() {
        let (service, store) = service_with(vec![tomate()]);
        let err = service.delete("999").await.unwrap_err();
        assert_matches!(err, CoreError::NotFound(msg) => {
            assert_eq!(msg, "No id found for this ingredient");
        });
        assert_eq!(store.delete_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.items.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_nom_delegates_store_match_semantics() {
        let (service, _) = service_with(vec![
            tomate(),
            Ingredient {
                id: "2".to_string(),
                nom: "Tomate cerise".to_string(),
            },
        ]);
        let found = service.get_by_nom("Tomate").await.unwrap();
        assert_eq!(found.len(), 2);
    }
}
