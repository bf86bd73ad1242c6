//! HTTP REST API routes

mod config_routes;
mod enhancement_routes;
mod wiki_routes;
mod world_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Generation routes
        .route("/api/world/generate", post(world_routes::generate_world))
        .route(
            "/api/world/generate-custom",
            post(world_routes::generate_custom_world),
        )
        .route(
            "/api/world/generate-complete",
            post(world_routes::generate_complete_world),
        )
        .route(
            "/api/world/{world_id}/enhance",
            post(world_routes::enhance_world),
        )
        .route("/api/world/themes", get(world_routes::list_themes))
        .route("/api/world/templates", get(world_routes::list_templates))
        // Stored worlds
        .route(
            "/api/worlds",
            get(world_routes::list_worlds).post(world_routes::save_world),
        )
        .route(
            "/api/worlds/{id}",
            get(world_routes::get_world).delete(world_routes::delete_world),
        )
        .route("/api/worlds/{id}/copy", post(world_routes::copy_world))
        // Enhancement routes
        .route("/api/enhancement/enhance", post(enhancement_routes::enhance))
        .route(
            "/api/enhancement/regenerate-section",
            post(enhancement_routes::regenerate_section),
        )
        .route(
            "/api/enhancement/add-content",
            post(enhancement_routes::add_content),
        )
        .route(
            "/api/enhancement/generate-narrative",
            post(enhancement_routes::generate_narrative),
        )
        .route(
            "/api/enhancement/update-properties",
            post(enhancement_routes::update_properties),
        )
        .route(
            "/api/enhancement/create-and-enhance",
            post(enhancement_routes::create_and_enhance),
        )
        .route(
            "/api/enhancement/export/{world_id}",
            get(enhancement_routes::export_world),
        )
        // Text-generation configuration
        .route(
            "/api/configuration/llm",
            get(config_routes::get_llm_config).post(config_routes::update_llm_config),
        )
        .route("/api/configuration/llm/test", get(config_routes::llm_health))
        .route("/api/text-generation/health", get(config_routes::llm_health))
        .route(
            "/api/text-generation/available",
            get(config_routes::llm_available),
        )
        .route(
            "/api/text-generation/generate-from-json",
            post(config_routes::generate_from_json),
        )
        // Wiki
        .route("/api/world/{world_id}/wiki", get(wiki_routes::world_wiki))
        .route(
            "/api/world/{world_id}/wiki/{kind}/{entity_id}",
            get(wiki_routes::entity_wiki),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::config::AppConfig;

    async fn test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            server_port: 0,
            world_storage_dir: dir.path().to_path_buf(),
            llm_base_url: "http://127.0.0.1:9".to_string(),
            llm_model: "test-model".to_string(),
            llm_timeout_secs: 1,
            llm_health_timeout_secs: 1,
        };
        let state = Arc::new(AppState::new(config).await.unwrap());
        (create_routes().with_state(state), dir)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_themes_and_templates() {
        let (app, _dir) = test_app().await;

        let (status, body) = send(&app, get_request("/api/world/themes")).await;
        assert_eq!(status, StatusCode::OK);
        let themes: Vec<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(themes.len(), 8);

        let (status, body) = send(&app, get_request("/api/world/templates")).await;
        assert_eq!(status, StatusCode::OK);
        let templates: Vec<Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(templates.len(), 5);
        assert_eq!(templates[0]["techLevel"], 8);
    }

    #[tokio::test]
    async fn test_generate_validates_name() {
        let (app, _dir) = test_app().await;

        let (status, body) = send(
            &app,
            json_request("POST", "/api/world/generate", json!({ "worldName": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "World name cannot be empty");

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/world/generate",
                json!({ "worldName": "Aeloria", "techLevel": 3 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let world: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(world["name"], "Aeloria");
        assert_eq!(world["places"].as_array().unwrap().len(), 25);
    }

    #[tokio::test]
    async fn test_stored_world_lifecycle() {
        let (app, _dir) = test_app().await;

        let (status, body) = send(
            &app,
            json_request("POST", "/api/worlds", json!({ "name": "Aeloria" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let saved: Value = serde_json::from_str(&body).unwrap();
        let id = saved["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, get_request(&format!("/api/worlds/{}", id))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Aeloria"));

        let (status, body) = send(
            &app,
            json_request("POST", &format!("/api/worlds/{}/copy", id), json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let copy: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(copy["name"], "Aeloria (Copy)");
        assert_ne!(copy["id"], saved["id"]);

        let (status, body) = send(&app, get_request("/api/worlds")).await;
        assert_eq!(status, StatusCode::OK);
        let listed: Vec<Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(listed.len(), 2);

        let delete = Request::builder()
            .method("DELETE")
            .uri(format!("/api/worlds/{}", id))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, delete).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get_request(&format!("/api/worlds/{}", id))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_world_id_is_a_bad_request() {
        let (app, _dir) = test_app().await;
        let (status, body) = send(&app, get_request("/api/worlds/not-a-uuid")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid world ID");
    }

    #[tokio::test]
    async fn test_wiki_pages() {
        let (app, _dir) = test_app().await;
        let (_, body) = send(
            &app,
            json_request("POST", "/api/worlds", json!({ "name": "Aeloria" })),
        )
        .await;
        let saved: Value = serde_json::from_str(&body).unwrap();
        let id = saved["id"].as_str().unwrap();

        let (status, body) = send(&app, get_request(&format!("/api/world/{}/wiki", id))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Aeloria - World Wiki</title>"));

        let uri = format!("/api/world/{}/wiki/place/{}", id, uuid::Uuid::new_v4());
        let (status, body) = send(&app, get_request(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("404 - Place Not Found"));

        let (status, _) = send(
            &app,
            get_request(&format!("/api/world/{}/wiki", uuid::Uuid::new_v4())),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_enhancement_requires_world_and_comment() {
        let (app, _dir) = test_app().await;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/enhancement/enhance",
                json!({ "userComment": "Add a city" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "World data is required");

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/enhancement/enhance",
                json!({ "world": { "name": "Aeloria" }, "userComment": "  " }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "User comment is required");

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/enhancement/create-and-enhance",
                json!({ "worldName": "" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "World name is required");
    }

    #[tokio::test]
    async fn test_llm_configuration_update() {
        let (app, _dir) = test_app().await;

        let (status, body) = send(
            &app,
            json_request("POST", "/api/configuration/llm", json!({ "baseUrl": " " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Base URL is required");

        let (status, body) = send(
            &app,
            json_request("POST", "/api/configuration/llm", json!({ "baseUrl": "not a url" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid URL format");

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/configuration/llm",
                json!({ "baseUrl": "http://localhost:1234/" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let reply: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(reply["message"], "LLM configuration updated successfully");
        assert_eq!(reply["config"]["baseUrl"], "http://localhost:1234");
        assert_eq!(reply["config"]["model"], "test-model");

        let (status, body) = send(&app, get_request("/api/configuration/llm")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("http://localhost:1234"));
    }
}
