//! sqlx-backed [`IngredientStore`].

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use recettes_core::error::CoreError;
use recettes_core::store::IngredientStore;
use recettes_core::types::{Ingredient, IngredientCandidate};

use crate::models::ingredient::IngredientRow;
use crate::repositories::map_db_err;

/// Column list for `ingredients` queries.
const INGREDIENT_COLUMNS: &str = "id, nom";

pub struct PgIngredientStore {
    pool: PgPool,
}

impl PgIngredientStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredientStore for PgIngredientStore {
    async fn get_all(&self) -> Result<Vec<Ingredient>, CoreError> {
        let query = format!("SELECT {INGREDIENT_COLUMNS} FROM ingredients ORDER BY nom");
        let rows = sqlx::query_as::<_, IngredientRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(Ingredient::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Ingredient>, CoreError> {
        let query = format!("SELECT {INGREDIENT_COLUMNS} FROM ingredients WHERE id = $1");
        let row = sqlx::query_as::<_, IngredientRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Ingredient::from))
    }

    /// Case-insensitive substring match.
    async fn get_by_nom(&self, nom: &str) -> Result<Vec<Ingredient>, CoreError> {
        let pattern = format!("%{nom}%");
        let query = format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredients WHERE nom ILIKE $1 ORDER BY nom"
        );
        let rows = sqlx::query_as::<_, IngredientRow>(&query)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(Ingredient::from).collect())
    }

    async fn create(&self, candidate: IngredientCandidate) -> Result<Ingredient, CoreError> {
        if candidate.nom.trim().is_empty() {
            return Err(CoreError::BadRequest(
                "Le nom de l'ingrédient est requis".to_string(),
            ));
        }
        let id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO ingredients (id, nom) VALUES ($1, $2) RETURNING {INGREDIENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, IngredientRow>(&query)
            .bind(&id)
            .bind(&candidate.nom)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(row.into())
    }

    async fn update(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        if ingredient.nom.trim().is_empty() {
            return Err(CoreError::BadRequest(
                "Le nom de l'ingrédient est requis".to_string(),
            ));
        }
        let query = format!(
            "UPDATE ingredients SET nom = $2 WHERE id = $1 RETURNING {INGREDIENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, IngredientRow>(&query)
            .bind(&ingredient.id)
            .bind(&ingredient.nom)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}
