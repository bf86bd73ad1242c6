//! World API routes - Generation, templates and stored-world management

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{
    CopyWorldRequest, EnhanceWorldRequest, QuickWorldRequest, WorldMetadata, WorldTemplate,
};
use crate::application::services::{
    GenerationError, WorldGenerationService, WorldService, DEFAULT_MAGIC_LEVEL,
    DEFAULT_TECH_LEVEL,
};
use crate::domain::entities::World;
use crate::domain::value_objects::{
    CompleteWorldRequest, GenerationParameters, WorldId, DEFAULT_THEME,
};
use crate::infrastructure::state::AppState;

/// Map a service failure: validation problems are the caller's fault
pub(crate) fn service_error(error: anyhow::Error) -> (StatusCode, String) {
    match error.downcast_ref::<GenerationError>() {
        Some(GenerationError::Validation(message)) => (StatusCode::BAD_REQUEST, message.clone()),
        None => {
            tracing::error!(error = %error, "Request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}

pub(crate) fn parse_world_id(id: &str) -> Result<WorldId, (StatusCode, String)> {
    WorldId::parse(id).ok_or_else(|| (StatusCode::BAD_REQUEST, "Invalid world ID".to_string()))
}

pub(crate) async fn load_world(
    state: &AppState,
    id: &str,
) -> Result<World, (StatusCode, String)> {
    let world_id = parse_world_id(id)?;
    state
        .world_service
        .get_world(world_id)
        .await
        .map_err(service_error)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "World not found".to_string()))
}

// ============================================================================
// Generation
// ============================================================================

/// Quick generation from a name, theme and two levels
pub async fn generate_world(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuickWorldRequest>,
) -> Result<Json<World>, (StatusCode, String)> {
    let world = state
        .generation_service
        .generate_world(
            &req.world_name,
            req.theme.as_deref().unwrap_or(DEFAULT_THEME),
            req.tech_level.unwrap_or(DEFAULT_TECH_LEVEL),
            req.magic_level.unwrap_or(DEFAULT_MAGIC_LEVEL),
        )
        .await
        .map_err(service_error)?;

    Ok(Json(world))
}

pub async fn generate_custom_world(
    State(state): State<Arc<AppState>>,
    Json(params): Json<GenerationParameters>,
) -> Result<Json<World>, (StatusCode, String)> {
    let world = state
        .generation_service
        .generate_custom_world(params)
        .await
        .map_err(service_error)?;

    Ok(Json(world))
}

pub async fn generate_complete_world(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CompleteWorldRequest>,
) -> Result<Json<World>, (StatusCode, String)> {
    let world = state
        .generation_service
        .generate_complete_world(req)
        .await
        .map_err(service_error)?;

    Ok(Json(world))
}

/// Add one category of generated content to a stored world and save it
pub async fn enhance_world(
    State(state): State<Arc<AppState>>,
    Path(world_id): Path<String>,
    Json(req): Json<EnhanceWorldRequest>,
) -> Result<Json<World>, (StatusCode, String)> {
    let world = load_world(&state, &world_id).await?;

    let enhanced = state
        .generation_service
        .enhance_world(world, &req.content_type)
        .await
        .map_err(service_error)?;

    let saved = state
        .world_service
        .save_world(enhanced)
        .await
        .map_err(service_error)?;

    Ok(Json(saved))
}

pub async fn list_themes(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.generation_service.themes())
}

pub async fn list_templates(State(state): State<Arc<AppState>>) -> Json<Vec<WorldTemplate>> {
    Json(state.generation_service.templates())
}

// ============================================================================
// Storage
// ============================================================================

/// List all stored worlds
pub async fn list_worlds(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WorldMetadata>>, (StatusCode, String)> {
    let worlds = state
        .world_service
        .list_worlds()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(worlds))
}

/// Save a world, assigning an id when it has none
pub async fn save_world(
    State(state): State<Arc<AppState>>,
    Json(world): Json<World>,
) -> Result<(StatusCode, Json<World>), (StatusCode, String)> {
    let saved = state
        .world_service
        .save_world(world)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Get a world by ID
pub async fn get_world(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<World>, (StatusCode, String)> {
    let world = load_world(&state, &id).await?;
    Ok(Json(world))
}

/// Delete a world
pub async fn delete_world(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let world_id = parse_world_id(&id)?;

    let deleted = state
        .world_service
        .delete_world(world_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "World not found".to_string()))
    }
}

/// Copy a stored world under a new id
pub async fn copy_world(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<CopyWorldRequest>,
) -> Result<(StatusCode, Json<World>), (StatusCode, String)> {
    let world_id = parse_world_id(&id)?;

    let copy = state
        .world_service
        .copy_world(world_id, req.new_name)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "World not found".to_string()))?;

    Ok((StatusCode::CREATED, Json(copy)))
}
