//! Entity types and DTO shapes.
//!
//! Ids are UUID v4 strings assigned by the store on creation and immutable
//! thereafter. Candidate shapes are the pre-persistence forms without an id;
//! they double as update request bodies (the path id supplies the identity).

use serde::{Deserialize, Serialize};

/// An ingredient row. `nom` is free text and not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub nom: String,
}

/// Pre-creation shape of an ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCandidate {
    pub nom: String,
}

impl IngredientCandidate {
    /// Attach an identity, producing a full entity (used by PUT handlers).
    pub fn with_id(self, id: String) -> Ingredient {
        Ingredient { id, nom: self.nom }
    }
}

/// Closed set of recipe categories. Wire labels are the French names from
/// the source domain; membership is checked explicitly via
/// [`RecetteCategorie::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecetteCategorie {
    #[serde(rename = "entrée")]
    Entree,
    #[serde(rename = "plat")]
    Plat,
    #[serde(rename = "dessert")]
    Dessert,
    #[serde(rename = "autre")]
    Autre,
}

impl RecetteCategorie {
    /// All members, in display order.
    pub const ALL: [RecetteCategorie; 4] = [
        RecetteCategorie::Entree,
        RecetteCategorie::Plat,
        RecetteCategorie::Dessert,
        RecetteCategorie::Autre,
    ];

    /// The wire/storage label for this category.
    pub fn label(self) -> &'static str {
        match self {
            RecetteCategorie::Entree => "entrée",
            RecetteCategorie::Plat => "plat",
            RecetteCategorie::Dessert => "dessert",
            RecetteCategorie::Autre => "autre",
        }
    }

    /// Total membership check: `None` for any string that is not exactly a
    /// category label.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }

    /// Comma-separated list of all valid labels, for error messages.
    pub fn valid_labels() -> String {
        Self::ALL
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for RecetteCategorie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A recipe with its ordered ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recette {
    pub id: String,
    pub nom: String,
    pub description: String,
    pub temps_preparation: i32,
    pub categorie: RecetteCategorie,
    pub origine: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
}

/// Pre-creation shape of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecetteCandidate {
    pub nom: String,
    pub description: String,
    pub temps_preparation: i32,
    pub categorie: RecetteCategorie,
    pub origine: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
}

impl RecetteCandidate {
    /// Attach an identity, producing a full entity (used by PUT handlers).
    pub fn with_id(self, id: String) -> Recette {
        Recette {
            id,
            nom: self.nom,
            description: self.description,
            temps_preparation: self.temps_preparation,
            categorie: self.categorie,
            origine: self.origine,
            instructions: self.instructions,
            ingredients: self.ingredients,
        }
    }
}
