//! HTTP handlers. Each resource module maps requests onto the corresponding
//! service and translates `None` from get-by-id into a 404.

pub mod ingredient;
pub mod recette;
