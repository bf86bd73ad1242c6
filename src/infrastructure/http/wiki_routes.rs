//! Wiki routes - HTML pages for stored worlds

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

use crate::infrastructure::export::{render_entity, render_not_found, render_world, WikiEntityKind};
use crate::infrastructure::http::world_routes::load_world;
use crate::infrastructure::state::AppState;

/// Overview page of a stored world
pub async fn world_wiki(
    State(state): State<Arc<AppState>>,
    Path(world_id): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let world = load_world(&state, &world_id).await?;
    Ok(Html(render_world(&world)))
}

/// One entity page. Unknown kinds and ids get a 404 with a not-found page.
pub async fn entity_wiki(
    State(state): State<Arc<AppState>>,
    Path((world_id, kind, entity_id)): Path<(String, String, String)>,
) -> Result<(StatusCode, Html<String>), (StatusCode, String)> {
    let world = load_world(&state, &world_id).await?;

    let Some(kind) = WikiEntityKind::parse(&kind) else {
        return Ok((StatusCode::NOT_FOUND, Html(render_not_found("Page", &entity_id))));
    };

    match render_entity(&world, kind, &entity_id) {
        Some(html) => Ok((StatusCode::OK, Html(html))),
        None => Ok((
            StatusCode::NOT_FOUND,
            Html(render_not_found(kind.label(), &entity_id)),
        )),
    }
}
