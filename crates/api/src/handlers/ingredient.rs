//! Handlers for the `/ingredients` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use recettes_core::error::CoreError;
use recettes_core::types::{Ingredient, IngredientCandidate};

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/v1/ingredients`.
#[derive(Debug, Deserialize)]
pub struct IngredientListParams {
    /// Substring name filter; omitted means list everything.
    pub nom: Option<String>,
}

/// GET /api/v1/ingredients
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IngredientListParams>,
) -> AppResult<Json<Vec<Ingredient>>> {
    let ingredients = match params.nom {
        Some(nom) => state.ingredients.get_by_nom(&nom).await?,
        None => state.ingredients.get_all().await?,
    };
    Ok(Json(ingredients))
}

/// GET /api/v1/ingredients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ingredient>> {
    let ingredient = state
        .ingredients
        .get_by_id(&id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("Ingredient with id {id} not found")))?;
    Ok(Json(ingredient))
}

/// POST /api/v1/ingredients
pub async fn create(
    State(state): State<AppState>,
    Json(candidate): Json<IngredientCandidate>,
) -> AppResult<(StatusCode, Json<Ingredient>)> {
    let ingredient = state.ingredients.create(candidate).await?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

/// PUT /api/v1/ingredients/{id}
///
/// The body carries the candidate shape; the path id supplies the identity.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(candidate): Json<IngredientCandidate>,
) -> AppResult<Json<Ingredient>> {
    let ingredient = state.ingredients.update(candidate.with_id(id)).await?;
    Ok(Json(ingredient))
}

/// DELETE /api/v1/ingredients/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.ingredients.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
