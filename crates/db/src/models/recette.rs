use recettes_core::error::CoreError;
use recettes_core::types::{Ingredient, Recette, RecetteCategorie};
use sqlx::FromRow;

/// A row from the `recettes` table. The ingredient list lives in
/// `recette_ingredients` and is attached by the repository.
#[derive(Debug, Clone, FromRow)]
pub struct RecetteRow {
    pub id: String,
    pub nom: String,
    pub description: String,
    pub temps_preparation: i32,
    pub categorie: String,
    pub origine: String,
    pub instructions: String,
}

impl RecetteRow {
    /// Assemble the domain entity. A stored category outside the enumeration
    /// is an invariant breach, not caller input, so it surfaces as
    /// `Internal`.
    pub fn into_recette(self, ingredients: Vec<Ingredient>) -> Result<Recette, CoreError> {
        let categorie = RecetteCategorie::parse(&self.categorie).ok_or_else(|| {
            CoreError::Internal(format!(
                "Unknown categorie '{}' stored for recette {}",
                self.categorie, self.id
            ))
        })?;
        Ok(Recette {
            id: self.id,
            nom: self.nom,
            description: self.description,
            temps_preparation: self.temps_preparation,
            categorie,
            origine: self.origine,
            instructions: self.instructions,
            ingredients,
        })
    }
}
