use axum::routing::get;
use axum::Router;

use crate::handlers::recette;
use crate::state::AppState;

/// Routes mounted at `/recettes`.
///
/// ```text
/// GET    /        -> list (optional ?nom= or ?categorie= filter)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recette::list).post(recette::create))
        .route(
            "/{id}",
            get(recette::get_by_id)
                .put(recette::update)
                .delete(recette::delete),
        )
}
