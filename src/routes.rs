use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, State},
    http::Request,
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::landing_page::LANDING_PAGE;
use crate::state::AppState;
use crate::translate::{self, DetectionResult, TranslationResult, SUPPORTED_LANGUAGES};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_page))
        .route("/translate/:lang_pair/:text", get(translate_text))
        .route("/detect-language/:text", get(detect_language))
        // Service info
        .route("/api/health", get(health_check))
        .route("/api/languages", get(list_languages))
}

/// Full application: routes, state and the HTTP layers
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

// Path segments are percent-decoded by the extractor; that is the only decoding pass.
async fn translate_text(
    State(state): State<AppState>,
    params: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<TranslationResult>, ServiceError> {
    let Path((lang_pair, text)) = params.map_err(|e| {
        warn!("Undecodable translate path: {}", e);
        ServiceError::InvalidFormat
    })?;

    let result = translate::translate(state.llm.as_ref(), &lang_pair, &text).await?;
    Ok(Json(result))
}

async fn detect_language(
    State(state): State<AppState>,
    params: Result<Path<String>, PathRejection>,
) -> Result<Json<DetectionResult>, ServiceError> {
    let Path(text) = params.map_err(|e| {
        warn!("Undecodable detect-language path: {}", e);
        ServiceError::MissingText
    })?;

    let result = translate::detect_language(state.llm.as_ref(), &text).await?;
    Ok(Json(result))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "llm_provider": state.llm.provider_name(),
    }))
}

async fn list_languages() -> Json<Value> {
    let languages: Vec<Value> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| json!({ "code": code, "name": name }))
        .collect();
    Json(json!(languages))
}
