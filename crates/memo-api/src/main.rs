//! memo-api - HTTP API server for memo-keeper

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use memo_core::{GenerationBackend, MemoRepository};
use memo_db::{Database, PoolConfig};
use memo_inference::GeminiBackend;

use handlers::{import, memos, summarize};

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    memos: Arc<dyn MemoRepository>,
    /// Summary backend (None when no Gemini API key is configured).
    generator: Option<Arc<dyn GenerationBackend>>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "memo-keeper API",
        description = "Personal memos with search, categories, AI summaries and batch import"
    ),
    paths(
        memos::list_memos,
        memos::create_memo,
        memos::get_memo,
        memos::update_memo,
        memos::delete_memo,
        memos::clear_memos,
        memos::memo_stats,
        summarize::summarize_memo,
        import::import_memos,
    ),
    components(schemas(
        memo_core::Memo,
        memo_core::MemoFields,
        memo_core::MemoStats,
        memo_core::ImportRecord,
        memo_core::ImportResult,
        summarize::SummarizeRequest,
        summarize::SummarizeResponse,
        import::ImportMemosRequest,
    )),
    tags(
        (name = "Memos", description = "Memo CRUD, search and import"),
        (name = "Summaries", description = "AI-generated memo summaries")
    )
)]
struct ApiDoc;

/// Parse allowed CORS origins from environment variable.
///
/// `ALLOWED_ORIGINS` is a comma-separated list; defaults to
/// `http://localhost:3000`.
fn parse_allowed_origins() -> Vec<HeaderValue> {
    let origins_str =
        std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string());

    if origins_str.trim().is_empty() {
        return vec![HeaderValue::from_static("http://localhost:3000")];
    }

    origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

/// Build the router with all routes and middleware.
fn app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // OpenAPI / Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Memos
        .route(
            "/api/memos",
            get(memos::list_memos)
                .post(memos::create_memo)
                .delete(memos::clear_memos),
        )
        .route("/api/memos/stats", get(memos::memo_stats))
        .route("/api/memos/import", post(import::import_memos))
        .route(
            "/api/memos/:id",
            get(memos::get_memo)
                .put(memos::update_memo)
                .delete(memos::delete_memo),
        )
        // Summaries
        .route("/api/summarize", post(summarize::summarize_memo))
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parse_allowed_origins()))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .max_age(std::time::Duration::from_secs(3600)),
        )
        .layer(CatchPanicLayer::new())
        .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024)) // 10 MB
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   LOG_FILE    - path to log file (optional, enables file logging)
    //   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected by default)
    //   RUST_LOG    - standard env filter (default: "memo_api=debug,memo_import=info,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "memo_api=debug,memo_import=info,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    // Optionally create a file appender with daily rotation
    let _file_guard = if let Some(ref path) = log_file {
        let file_dir = std::path::Path::new(path)
            .parent()
            .unwrap_or(std::path::Path::new("."));
        let file_name = std::path::Path::new(path)
            .file_name()
            .unwrap_or(std::ffi::OsStr::new("memo-api.log"));
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(log_ansi.unwrap_or(false)); // no ANSI in files by default
            registry.with(layer).init();
        }
        Some(guard)
    } else {
        if log_format == "json" {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer();
            if let Some(ansi) = log_ansi {
                layer = layer.with_ansi(ansi);
            }
            registry.with(layer).init();
        }
        None
    };

    info!(
        log_format = %log_format,
        log_file = log_file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    // Get configuration from environment
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/memo".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    // Connect to database
    info!("Connecting to database...");
    let db = Database::connect_with_config(&database_url, PoolConfig::from_env()).await?;
    info!("Database connected");

    // Run pending database migrations on startup
    info!("Running database migrations...");
    db.migrate().await?;
    info!("Database migrations complete");
    memo_db::log_pool_metrics(&db.pool);

    // Summaries are optional; without a key the endpoint reports the gap
    let generator: Option<Arc<dyn GenerationBackend>> = match GeminiBackend::from_env() {
        Ok(backend) => Some(Arc::new(backend)),
        Err(e) => {
            warn!(error = %e, "Summaries disabled");
            None
        }
    };

    let state = AppState {
        memos: Arc::new(db.memos.clone()),
        generator,
    };

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

// =============================================================================
// HEALTH CHECK
// =============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

#[derive(Debug)]
enum ApiError {
    Internal(String),
    NotFound(String),
    BadRequest(String),
    Conflict(String),
}

impl From<memo_core::Error> for ApiError {
    fn from(err: memo_core::Error) -> Self {
        match err {
            memo_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            memo_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            memo_core::Error::Conflict(msg) => ApiError::Conflict(msg),
            memo_core::Error::Database(sqlx_err) => {
                let msg = sqlx_err.to_string();
                if msg.contains("duplicate key") || msg.contains("unique constraint") {
                    return ApiError::Conflict(msg);
                }
                ApiError::Internal(msg)
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// JSON body extractor whose rejections use the `{"error": ...}` envelope.
#[derive(Debug)]
struct ApiJson<T>(T);

#[axum::async_trait]
impl<T> FromRequest<AppState> for ApiJson<T>
where
    T: serde::de::DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memo_core::mock::{MockCall, MockMemoRepository};
    use memo_core::{Memo, MemoFields};
    use memo_inference::mock::MockGenerationBackend;
    use serde_json::{json, Value};

    fn fields(title: &str, category: &str, tags: &[&str]) -> MemoFields {
        MemoFields {
            title: title.to_string(),
            content: format!("{} body", title),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Serve the full router on an ephemeral port; returns the base URL.
    async fn spawn_test_server(
        repo: MockMemoRepository,
        generator: Option<MockGenerationBackend>,
    ) -> String {
        let state = AppState {
            memos: Arc::new(repo),
            generator: generator.map(|g| Arc::new(g) as Arc<dyn GenerationBackend>),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_api_error_mapping() {
        use memo_core::Error;
        assert!(matches!(
            ApiError::from(Error::NotFound("x".into())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(Error::InvalidInput("x".into())),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(Error::Conflict("x".into())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(Error::Inference("x".into())),
            ApiError::Internal(_)
        ));
    }

    #[tokio::test]
    async fn test_health() {
        let base = spawn_test_server(MockMemoRepository::new(), None).await;
        let body: Value = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_create_then_get_memo() {
        let repo = MockMemoRepository::new();
        let base = spawn_test_server(repo.clone(), None).await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/api/memos", base))
            .json(&fields("Plan", "work", &["q3"]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
        let created: Memo = resp.json().await.unwrap();
        assert_eq!(created.title, "Plan");

        let resp = client
            .get(format!("{}/api/memos/{}", base, created.id))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let fetched: Memo = resp.json().await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_blank_title_is_400() {
        let repo = MockMemoRepository::new();
        let base = spawn_test_server(repo.clone(), None).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/memos", base))
            .json(&fields("  ", "work", &[]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "title is required");
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_memo_is_404() {
        let base = spawn_test_server(MockMemoRepository::new(), None).await;
        let client = reqwest::Client::new();

        let resp = client
            .get(format!("{}/api/memos/nope", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);

        let resp = client
            .put(format!("{}/api/memos/nope", base))
            .json(&fields("T", "work", &[]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);

        let resp = client
            .delete(format!("{}/api/memos/nope", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_update_and_delete_memo() {
        let repo = MockMemoRepository::new();
        repo.seed("m1", fields("Old", "work", &[]));
        let base = spawn_test_server(repo.clone(), None).await;
        let client = reqwest::Client::new();

        let resp = client
            .put(format!("{}/api/memos/m1", base))
            .json(&fields("New", "idea", &["x"]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let updated: Memo = resp.json().await.unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.category, "idea");

        let resp = client
            .delete(format!("{}/api/memos/m1", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 204);
        assert!(repo.memos().is_empty());
    }

    #[tokio::test]
    async fn test_list_prefers_search_over_category() {
        let repo = MockMemoRepository::new();
        repo.seed("1", fields("Groceries", "personal", &["shopping"]));
        repo.seed("2", fields("Standup", "work", &[]));
        let base = spawn_test_server(repo.clone(), None).await;

        let memos: Vec<Memo> = reqwest::get(format!("{}/api/memos?q=SHOP&category=work", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(memos.len(), 1);
        assert_eq!(memos[0].id, "1");
        assert_eq!(repo.calls(), vec![MockCall::Search("SHOP".to_string())]);
    }

    #[tokio::test]
    async fn test_list_by_category_defaults_to_all() {
        let repo = MockMemoRepository::new();
        repo.seed("1", fields("A", "personal", &[]));
        repo.seed("2", fields("B", "work", &[]));
        let base = spawn_test_server(repo.clone(), None).await;

        let all: Vec<Memo> = reqwest::get(format!("{}/api/memos", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
        // Newest first
        assert_eq!(all[0].id, "2");

        let work: Vec<Memo> = reqwest::get(format!("{}/api/memos?category=work", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].id, "2");
    }

    #[tokio::test]
    async fn test_stats_and_clear() {
        let repo = MockMemoRepository::new();
        repo.seed("1", fields("A", "work", &[]));
        repo.seed("2", fields("B", "work", &[]));
        repo.seed("3", fields("C", "idea", &[]));
        let base = spawn_test_server(repo.clone(), None).await;
        let client = reqwest::Client::new();

        let stats: Value = client
            .get(format!("{}/api/memos/stats", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(stats, json!({"total": 3, "byCategory": {"idea": 1, "work": 2}}));

        let cleared: Value = client
            .delete(format!("{}/api/memos", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(cleared["deleted"], 3);
        assert!(repo.memos().is_empty());
    }

    #[tokio::test]
    async fn test_summarize_stores_summary_on_memo() {
        let repo = MockMemoRepository::new();
        repo.seed("m1", fields("Long", "study", &[]));
        let generator = MockGenerationBackend::new().with_fixed_response(" Short. ");
        let base = spawn_test_server(repo.clone(), Some(generator.clone())).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/summarize", base))
            .json(&json!({"content": "a long memo", "memoId": "m1"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({"summary": "Short.", "success": true}));
        assert_eq!(repo.memos()[0].ai_summary.as_deref(), Some("Short."));
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_summarize_returns_summary_when_storing_fails() {
        let repo = MockMemoRepository::new().fail_summary_for("m1", "write failed");
        repo.seed("m1", fields("Long", "study", &[]));
        let generator = MockGenerationBackend::new().with_fixed_response("Short.");
        let base = spawn_test_server(repo.clone(), Some(generator)).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/summarize", base))
            .json(&json!({"content": "a long memo", "memoId": "m1"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["summary"], "Short.");
        assert_eq!(repo.memos()[0].ai_summary, None);
    }

    #[tokio::test]
    async fn test_summarize_errors() {
        let client = reqwest::Client::new();

        // Blank content
        let base = spawn_test_server(
            MockMemoRepository::new(),
            Some(MockGenerationBackend::new()),
        )
        .await;
        let resp = client
            .post(format!("{}/api/summarize", base))
            .json(&json!({"content": "   "}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);

        // No backend configured
        let base = spawn_test_server(MockMemoRepository::new(), None).await;
        let resp = client
            .post(format!("{}/api/summarize", base))
            .json(&json!({"content": "text"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 500);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Gemini API key is not configured");

        // Generation failure
        let base = spawn_test_server(
            MockMemoRepository::new(),
            Some(MockGenerationBackend::new().with_failure("quota exceeded")),
        )
        .await;
        let resp = client
            .post(format!("{}/api/summarize", base))
            .json(&json!({"content": "text"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 500);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "quota exceeded");
    }

    #[tokio::test]
    async fn test_import_creates_valid_records_only() {
        let repo = MockMemoRepository::new();
        let base = spawn_test_server(repo.clone(), None).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/memos/import", base))
            .json(&json!({
                "memos": [
                    {"id": "1", "title": "A", "content": "a", "category": "work", "tags": []},
                    {"id": "2", "title": "B", "content": "b", "category": "idea"},
                    {"id": "3", "title": "C", "content": "c", "category": "idea", "tags": ["t"]}
                ]
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            json!({"success": true, "importedCount": 2, "errors": []})
        );
        assert!(repo
            .calls()
            .iter()
            .all(|call| matches!(call, MockCall::Create(_))));
    }

    #[tokio::test]
    async fn test_import_reports_per_record_failures() {
        let repo = MockMemoRepository::new().fail_create_for_title("B", "B rejected");
        let base = spawn_test_server(repo.clone(), None).await;

        let body: Value = reqwest::Client::new()
            .post(format!("{}/api/memos/import", base))
            .json(&json!({
                "memos": [
                    {"title": "A", "content": "a", "category": "work", "tags": []},
                    {"title": "B", "content": "b", "category": "work", "tags": []}
                ]
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(
            body,
            json!({"success": false, "importedCount": 1, "errors": ["B rejected"]})
        );
    }

    #[tokio::test]
    async fn test_import_rejects_bad_bodies() {
        let base = spawn_test_server(MockMemoRepository::new(), None).await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/api/memos/import", base))
            .json(&json!({"memos": "nope"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "A memos array is required");

        let resp = client
            .post(format!("{}/api/memos/import", base))
            .json(&json!({"memos": [{"title": 1}]}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "No valid memos to import");
    }

    #[tokio::test]
    async fn test_malformed_json_bodies_use_error_envelope() {
        let repo = MockMemoRepository::new();
        repo.seed("1", fields("Seeded", "work", &[]));
        let base = spawn_test_server(repo, Some(MockGenerationBackend::new())).await;
        let client = reqwest::Client::new();

        for (method, path) in [
            (reqwest::Method::POST, "/api/memos"),
            (reqwest::Method::PUT, "/api/memos/1"),
            (reqwest::Method::POST, "/api/memos/import"),
            (reqwest::Method::POST, "/api/summarize"),
        ] {
            let resp = client
                .request(method, format!("{}{}", base, path))
                .header("content-type", "application/json")
                .body("{not json")
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), 400, "{}", path);
            let body: Value = resp.json().await.unwrap();
            assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()), "{}", path);
        }

        // Well-formed JSON of the wrong shape is rejected the same way
        let resp = client
            .post(format!("{}/api/memos", base))
            .json(&json!({"title": 5}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert!(body["error"].is_string());

        let resp = client
            .post(format!("{}/api/summarize", base))
            .body("{}")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert!(body["error"].is_string());
    }

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for expected in [
            "/api/memos",
            "/api/memos/{id}",
            "/api/memos/stats",
            "/api/memos/import",
            "/api/summarize",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {}", expected);
        }
    }
}
