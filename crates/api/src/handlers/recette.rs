//! Handlers for the `/recettes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use recettes_core::error::CoreError;
use recettes_core::types::{Recette, RecetteCandidate};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/v1/recettes`.
///
/// `nom` and `categorie` are mutually exclusive filters. The category value
/// is passed to the service as a raw string; membership validation is the
/// service's job.
#[derive(Debug, Deserialize)]
pub struct RecetteListParams {
    pub nom: Option<String>,
    pub categorie: Option<String>,
}

/// GET /api/v1/recettes
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RecetteListParams>,
) -> AppResult<Json<Vec<Recette>>> {
    let recettes = match (params.nom, params.categorie) {
        (Some(_), Some(_)) => {
            return Err(AppError::BadRequest(
                "Les filtres 'nom' et 'categorie' ne peuvent pas être combinés".to_string(),
            ))
        }
        (_, Some(categorie)) => state.recettes.get_by_categorie(&categorie).await?,
        (Some(nom), None) => state.recettes.get_by_nom(&nom).await?,
        (None, None) => state.recettes.get_all().await?,
    };
    Ok(Json(recettes))
}

/// GET /api/v1/recettes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Recette>> {
    let recette = state
        .recettes
        .get_by_id(&id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("Recette with id {id} not found")))?;
    Ok(Json(recette))
}

/// POST /api/v1/recettes
pub async fn create(
    State(state): State<AppState>,
    Json(candidate): Json<RecetteCandidate>,
) -> AppResult<(StatusCode, Json<Recette>)> {
    let recette = state.recettes.create(candidate).await?;
    Ok((StatusCode::CREATED, Json(recette)))
}

/// PUT /api/v1/recettes/{id}
///
/// The body carries the candidate shape; the path id supplies the identity.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(candidate): Json<RecetteCandidate>,
) -> AppResult<Json<Recette>> {
    let recette = state.recettes.update(candidate.with_id(id)).await?;
    Ok(Json(recette))
}

/// DELETE /api/v1/recettes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.recettes.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
