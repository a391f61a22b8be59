pub mod catalog;
pub mod files;
pub mod health;
pub mod sessions;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};

use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/catalog", get(catalog::get_catalog))
        .route("/api/sessions", post(sessions::create_session))
        .route(
            "/api/sessions/{id}",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/api/sessions/{id}/context", put(sessions::update_context))
        .route("/api/sessions/{id}/plan", put(sessions::update_plan))
        .route("/api/sessions/{id}/analysis", post(sessions::start_analysis))
        .route(
            "/api/sessions/{id}/files",
            post(files::upload_files).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/sessions/{id}/files/sample", post(files::load_samples))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm::{GenerateRequest, GenerateResponse, MockProvider, Provider};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use std::path::PathBuf;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct DownProvider;

    #[async_trait::async_trait]
    impl Provider for DownProvider {
        async fn generate(&self, _req: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
            Err(anyhow::anyhow!("connection refused"))
        }

        fn name(&self) -> &str {
            "down"
        }
    }

    fn app_with(config: Config, provider: Arc<dyn Provider>) -> Router {
        create_router(AppState::new(config, provider))
    }

    fn app() -> Router {
        app_with(Config::default(), Arc::new(MockProvider))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn new_session(app: &Router) -> String {
        let (status, body) = send(app, empty_request("POST", "/api/sessions")).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), empty_request("GET", "/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["llm_provider"], "mock");
    }

    #[tokio::test]
    async fn test_catalog_lists_sections_and_modules() {
        let (status, body) = send(&app(), empty_request("GET", "/api/catalog")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sections"].as_array().unwrap().len(), 7);
        assert_eq!(body["modules"][0], "1.1 宏观环境分析 (PESTEL)");
    }

    #[tokio::test]
    async fn test_new_session_defaults() {
        let app = app();
        let (status, body) = send(&app, empty_request("POST", "/api/sessions")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["ai_planning"], false);
        assert_eq!(body["plan"].as_array().unwrap().len(), 39);
        assert_eq!(body["context"]["listing"], "listed");
        assert_eq!(body["context"]["angle"], "debt");
        assert!(body["report"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let uri = format!("/api/sessions/{}", uuid::Uuid::new_v4());
        let (status, body) = send(&app(), empty_request("GET", &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let app = app();
        let id = new_session(&app).await;
        let uri = format!("/api/sessions/{id}");

        let (status, _) = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_out_of_range_context_is_bad_request() {
        let app = app();
        let id = new_session(&app).await;
        let uri = format!("/api/sessions/{id}/context");

        let (status, body) = send(
            &app,
            json_request("PUT", &uri, json!({ "angle": "speculative" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert!(body["error"].as_str().unwrap().contains("speculative"));

        let (status, body) = send(&app, json_request("PUT", &uri, json!({ "listing": "" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);

        let (_, body) = send(&app, empty_request("GET", &format!("/api/sessions/{id}"))).await;
        assert_eq!(body["context"]["angle"], "debt");
    }

    #[tokio::test]
    async fn test_malformed_plan_is_bad_request() {
        let app = app();
        let id = new_session(&app).await;
        let request = Request::builder()
            .method("PUT")
            .uri(format!("/api/sessions/{id}/plan"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"ai_planning\": "))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_ai_plan_then_analysis() {
        let app = app();
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/sessions/{id}/context"),
                json!({"company": "A公司", "industry": "制造业", "listing": "是", "ticker": "000001", "angle": "股权投资"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["context"]["angle"], "equity");

        let (_, body) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/sessions/{id}/plan"),
                json!({"ai_planning": true}),
            ),
        )
        .await;
        assert_eq!(body["plan"].as_array().unwrap().len(), 39);

        let (_, body) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/sessions/{id}/plan"),
                json!({"ai_planning": true, "generate": true}),
            ),
        )
        .await;
        assert_eq!(body["ai_planning"], true);
        assert_eq!(body["plan"].as_array().unwrap().len(), 3);

        let (status, body) = send(
            &app,
            empty_request("POST", &format!("/api/sessions/{id}/analysis")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let document = body["report"]["document"].as_str().unwrap();
        assert!(document.starts_with("### 1.1 宏观环境分析 (PESTEL)\n模拟分析: "));
        assert_eq!(document.matches("### ").count(), 3);
        assert_eq!(body["report"]["modules_analyzed"], 3);
    }

    #[tokio::test]
    async fn test_failed_analysis_keeps_previous_report() {
        let app = app_with(Config::default(), Arc::new(DownProvider));
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            empty_request("POST", &format!("/api/sessions/{id}/analysis")),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");

        let (_, body) = send(&app, empty_request("GET", &format!("/api/sessions/{id}"))).await;
        assert!(body["report"].is_null());
    }

    #[tokio::test]
    async fn test_multipart_upload_last_write_wins() {
        let app = app();
        let id = new_session(&app).await;

        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"a.txt\"\r\n\r\nfirst\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nignored\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"a.txt\"\r\n\r\nsecond!\r\n\
             --{b}--\r\n",
            b = boundary
        );
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/sessions/{id}/files"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        let files = body["files"].as_array().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0]["name"], "a.txt");
        assert_eq!(files[0]["size_bytes"], 7);
    }

    #[tokio::test]
    async fn test_sample_files_loaded_into_session() {
        let dir = std::env::temp_dir().join(format!("samples-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("利润表.csv"), b"revenue,100").unwrap();

        let config = Config {
            sample_files_dir: dir.clone(),
            ..Config::default()
        };
        let app = app_with(config, Arc::new(MockProvider));
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            empty_request("POST", &format!("/api/sessions/{id}/files/sample")),
        )
        .await;
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["files"][0]["name"], "利润表.csv");
    }

    #[tokio::test]
    async fn test_missing_sample_dir_is_server_error() {
        let config = Config {
            sample_files_dir: PathBuf::from("/nonexistent/sample/files"),
            ..Config::default()
        };
        let app = app_with(config, Arc::new(MockProvider));
        let id = new_session(&app).await;

        let (status, _) = send(
            &app,
            empty_request("POST", &format!("/api/sessions/{id}/files/sample")),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
