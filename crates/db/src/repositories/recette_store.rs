//! sqlx-backed [`RecetteStore`].
//!
//! A recipe spans two tables: the `recettes` row and its ordered
//! `recette_ingredients` links. Writes that touch both run in a transaction;
//! reads attach the ingredient list per row.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use recettes_core::error::CoreError;
use recettes_core::store::RecetteStore;
use recettes_core::types::{Ingredient, Recette, RecetteCandidate, RecetteCategorie};

use crate::models::ingredient::IngredientRow;
use crate::models::recette::RecetteRow;
use crate::repositories::map_db_err;

/// Column list for `recettes` queries.
const RECETTE_COLUMNS: &str =
    "id, nom, description, temps_preparation, categorie, origine, instructions";

pub struct PgRecetteStore {
    pool: PgPool,
}

impl PgRecetteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the ordered ingredient list for one recipe.
    async fn load_ingredients(&self, recette_id: &str) -> Result<Vec<Ingredient>, CoreError> {
        let rows = sqlx::query_as::<_, IngredientRow>(
            "SELECT i.id, i.nom \
             FROM recette_ingredients ri \
             JOIN ingredients i ON i.id = ri.ingredient_id \
             WHERE ri.recette_id = $1 \
             ORDER BY ri.position",
        )
        .bind(recette_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;
        Ok(rows.into_iter().map(Ingredient::from).collect())
    }

    /// Attach ingredients to each fetched row.
    async fn assemble_all(&self, rows: Vec<RecetteRow>) -> Result<Vec<Recette>, CoreError> {
        let mut recettes = Vec::with_capacity(rows.len());
        for row in rows {
            let ingredients = self.load_ingredients(&row.id).await?;
            recettes.push(row.into_recette(ingredients)?);
        }
        Ok(recettes)
    }

    /// Re-read a recipe that is known to exist (just written).
    async fn fetch_required(&self, id: &str) -> Result<Recette, CoreError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::Internal(format!("Recette {id} vanished after write")))
    }
}

/// Replace the ingredient links of a recipe inside an open transaction,
/// preserving list order through the `position` column.
async fn replace_ingredient_links(
    tx: &mut Transaction<'_, Postgres>,
    recette_id: &str,
    ingredients: &[Ingredient],
) -> Result<(), CoreError> {
    sqlx::query("DELETE FROM recette_ingredients WHERE recette_id = $1")
        .bind(recette_id)
        .execute(&mut **tx)
        .await
        .map_err(map_db_err)?;

    for (position, ingredient) in ingredients.iter().enumerate() {
        sqlx::query(
            "INSERT INTO recette_ingredients (recette_id, ingredient_id, position) \
             VALUES ($1, $2, $3)",
        )
        .bind(recette_id)
        .bind(&ingredient.id)
        .bind(position as i32)
        .execute(&mut **tx)
        .await
        .map_err(map_db_err)?;
    }
    Ok(())
}

#[async_trait]
impl RecetteStore for PgRecetteStore {
    async fn get_all(&self) -> Result<Vec<Recette>, CoreError> {
        let query = format!("SELECT {RECETTE_COLUMNS} FROM recettes ORDER BY nom");
        let rows = sqlx::query_as::<_, RecetteRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;
        self.assemble_all(rows).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Recette>, CoreError> {
        let query = format!("SELECT {RECETTE_COLUMNS} FROM recettes WHERE id = $1");
        let row = sqlx::query_as::<_, RecetteRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;
        match row {
            Some(row) => {
                let ingredients = self.load_ingredients(id).await?;
                Ok(Some(row.into_recette(ingredients)?))
            }
            None => Ok(None),
        }
    }

    /// Case-insensitive substring match.
    async fn get_by_nom(&self, nom: &str) -> Result<Vec<Recette>, CoreError> {
        let pattern = format!("%{nom}%");
        let query = format!("SELECT {RECETTE_COLUMNS} FROM recettes WHERE nom ILIKE $1 ORDER BY nom");
        let rows = sqlx::query_as::<_, RecetteRow>(&query)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;
        self.assemble_all(rows).await
    }

    async fn get_by_categorie(
        &self,
        categorie: RecetteCategorie,
    ) -> Result<Vec<Recette>, CoreError> {
        let query =
            format!("SELECT {RECETTE_COLUMNS} FROM recettes WHERE categorie = $1 ORDER BY nom");
        let rows = sqlx::query_as::<_, RecetteRow>(&query)
            .bind(categorie.label())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;
        self.assemble_all(rows).await
    }

    async fn create(&self, candidate: RecetteCandidate) -> Result<Recette, CoreError> {
        if candidate.nom.trim().is_empty() {
            return Err(CoreError::BadRequest(
                "Le nom de la recette est requis".to_string(),
            ));
        }
        let id = Uuid::new_v4().to_string();
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;

        sqlx::query(
            "INSERT INTO recettes \
                 (id, nom, description, temps_preparation, categorie, origine, instructions) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&id)
        .bind(&candidate.nom)
        .bind(&candidate.description)
        .bind(candidate.temps_preparation)
        .bind(candidate.categorie.label())
        .bind(&candidate.origine)
        .bind(&candidate.instructions)
        .execute(&mut *tx)
        .await
        .map_err(map_db_err)?;

        replace_ingredient_links(&mut tx, &id, &candidate.ingredients).await?;
        tx.commit().await.map_err(map_db_err)?;

        self.fetch_required(&id).await
    }

    async fn update(&self, recette: Recette) -> Result<Recette, CoreError> {
        if recette.nom.trim().is_empty() {
            return Err(CoreError::BadRequest(
                "Le nom de la recette est requis".to_string(),
            ));
        }
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;

        sqlx::query(
            "UPDATE recettes SET \
                 nom = $2, description = $3, temps_preparation = $4, \
                 categorie = $5, origine = $6, instructions = $7 \
             WHERE id = $1",
        )
        .bind(&recette.id)
        .bind(&recette.nom)
        .bind(&recette.description)
        .bind(recette.temps_preparation)
        .bind(recette.categorie.label())
        .bind(&recette.origine)
        .bind(&recette.instructions)
        .execute(&mut *tx)
        .await
        .map_err(map_db_err)?;

        replace_ingredient_links(&mut tx, &recette.id, &recette.ingredients).await?;
        tx.commit().await.map_err(map_db_err)?;

        self.fetch_required(&recette.id).await
    }

    async fn delete(&self, id: &str) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM recettes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}
