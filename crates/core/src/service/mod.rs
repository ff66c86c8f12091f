//! Service layer: validation and orchestration over the store traits.
//!
//! Services are stateless between calls. Each operation is a short sequence
//! of strictly ordered awaits (existence check, then delegated action); the
//! ingredient-existence loop in recipe update is sequential so the first
//! missing ingredient deterministically produces the error. No locking is
//! performed here, so a check-then-act race on update/delete existence is
//! possible and left to the store's isolation guarantees.

pub mod ingredient;
pub mod recette;

pub use ingredient::IngredientService;
pub use recette::RecetteService;
