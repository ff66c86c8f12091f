pub mod health;
pub mod ingredient;
pub mod recette;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ingredients            list (?nom=), create
/// /ingredients/{id}       get, update, delete
/// /recettes               list (?nom= | ?categorie=), create
/// /recettes/{id}          get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ingredients", ingredient::router())
        .nest("/recettes", recette::router())
}
