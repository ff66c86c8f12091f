use recettes_core::types::Ingredient;
use sqlx::FromRow;

/// A row from the `ingredients` table.
#[derive(Debug, Clone, FromRow)]
pub struct IngredientRow {
    pub id: String,
    pub nom: String,
}

impl From<IngredientRow> for Ingredient {
    fn from(row: IngredientRow) -> Self {
        Ingredient {
            id: row.id,
            nom: row.nom,
        }
    }
}
