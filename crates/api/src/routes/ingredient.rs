use axum::routing::get;
use axum::Router;

use crate::handlers::ingredient;
use crate::state::AppState;

/// Routes mounted at `/ingredients`.
///
/// ```text
/// GET    /        -> list (optional ?nom= filter)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ingredient::list).post(ingredient::create))
        .route(
            "/{id}",
            get(ingredient::get_by_id)
                .put(ingredient::update)
                .delete(ingredient::delete),
        )
}
