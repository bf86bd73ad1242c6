//! Enhancement API routes - Comment-driven changes to a world sent by the client
//!
//! Except for export, these endpoints work on the world carried in the
//! request body and never touch storage. The client decides whether to save
//! the result.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::application::dto::{
    AddContentRequest, CreateAndEnhanceRequest, EnhancementRequest, RegenerateSectionRequest,
    UpdatePropertiesRequest, WorldEnhancementResult, WorldExport,
};
use crate::domain::entities::World;
use crate::infrastructure::http::world_routes::{load_world, service_error};
use crate::infrastructure::state::AppState;

#[derive(Debug, Serialize)]
pub struct NarrativeResponse {
    pub narrative: String,
}

fn bad_request(message: &str) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, message.to_string())
}

fn required_world(world: Option<World>) -> Result<World, (StatusCode, String)> {
    world.ok_or_else(|| bad_request("World data is required"))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub async fn enhance(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EnhancementRequest>,
) -> Result<Json<WorldEnhancementResult>, (StatusCode, String)> {
    let world = required_world(req.world)?;
    if is_blank(&req.user_comment) {
        return Err(bad_request("User comment is required"));
    }

    let result = state
        .enhancement_service
        .enhance(world, &req.user_comment, req.target_section.as_deref())
        .await
        .map_err(service_error)?;

    Ok(Json(result))
}

pub async fn regenerate_section(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegenerateSectionRequest>,
) -> Result<Json<WorldEnhancementResult>, (StatusCode, String)> {
    let world = required_world(req.world)?;
    if is_blank(&req.section_type) || is_blank(&req.section_id) {
        return Err(bad_request("Section type and ID are required"));
    }

    let result = state
        .enhancement_service
        .regenerate_section(world, &req.section_type, &req.section_id, &req.user_comment)
        .await
        .map_err(service_error)?;

    Ok(Json(result))
}

pub async fn add_content(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddContentRequest>,
) -> Result<Json<WorldEnhancementResult>, (StatusCode, String)> {
    let world = required_world(req.world)?;
    if is_blank(&req.content_type) || is_blank(&req.description) {
        return Err(bad_request("Content type and description are required"));
    }

    let result = state
        .enhancement_service
        .add_content(world, &req.content_type, &req.description)
        .await
        .map_err(service_error)?;

    Ok(Json(result))
}

pub async fn generate_narrative(
    State(state): State<Arc<AppState>>,
    Json(world): Json<World>,
) -> Json<NarrativeResponse> {
    let narrative = state.enhancement_service.generate_narrative(&world).await;
    Json(NarrativeResponse { narrative })
}

pub async fn update_properties(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdatePropertiesRequest>,
) -> Result<Json<World>, (StatusCode, String)> {
    let world = required_world(req.world)?;
    if is_blank(&req.user_comment) {
        return Err(bad_request("User comment is required"));
    }

    let updated = state
        .enhancement_service
        .update_properties(world, &req.user_comment)
        .await;

    Ok(Json(updated))
}

pub async fn create_and_enhance(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAndEnhanceRequest>,
) -> Result<Json<WorldEnhancementResult>, (StatusCode, String)> {
    if is_blank(&req.world_name) {
        return Err(bad_request("World name is required"));
    }

    let result = state
        .enhancement_service
        .create_and_enhance(req)
        .await
        .map_err(service_error)?;

    Ok(Json(result))
}

/// Export package for a stored world
pub async fn export_world(
    State(state): State<Arc<AppState>>,
    Path(world_id): Path<String>,
) -> Result<Json<WorldExport>, (StatusCode, String)> {
    let world = load_world(&state, &world_id).await?;
    let export = state.enhancement_service.export(world).await;
    Ok(Json(export))
}
