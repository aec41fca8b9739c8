// Numerology Engine - Web Server
// REST API with Axum: validates requests, picks the reference date, calls the core

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use numerology_engine::{
    calculate_compatibility, calculate_profile, telemetry, BirthInput, CompatibilityInput,
    InputError, ReferenceDate, Settings,
};

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

fn invalid_input(err: InputError) -> Response {
    warn!("Rejected request: {}", err);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::error(err.to_string())),
    )
        .into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok(serde_json::json!({
        "status": "OK",
        "version": numerology_engine::VERSION,
    })))
}

/// POST /api/numerology/profile - Full profile for one person
async fn numerology_profile(Json(input): Json<BirthInput>) -> Response {
    if let Err(err) = input.validate() {
        return invalid_input(err);
    }

    let reference = ReferenceDate::with_defaults(
        input.current_year,
        input.current_month,
        input.current_day,
        ReferenceDate::today_utc(),
    );

    info!(name = %input.full_name, "calculating numerology profile");
    let profile = calculate_profile(
        &input.full_name,
        input.birth_day,
        input.birth_month,
        input.birth_year,
        reference,
    );

    (StatusCode::OK, Json(ApiResponse::ok(profile))).into_response()
}

/// POST /api/numerology/compatibility - Compare two people
async fn numerology_compatibility(Json(input): Json<CompatibilityInput>) -> Response {
    if let Err(err) = input.validate() {
        return invalid_input(err);
    }

    info!(
        person1 = %input.person1_name,
        person2 = %input.person2_name,
        "calculating numerology compatibility"
    );
    let result = calculate_compatibility(
        &input.person1_name,
        input.person1_day,
        input.person1_month,
        input.person1_year,
        &input.person2_name,
        input.person2_day,
        input.person2_month,
        input.person2_year,
        ReferenceDate::today_utc(),
    );

    (StatusCode::OK, Json(ApiResponse::ok(result))).into_response()
}

fn cors_layer(settings: &Settings) -> CorsLayer {
    if settings.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

fn app(settings: &Settings) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/numerology/profile", post(numerology_profile))
        .route("/numerology/compatibility", post(numerology_compatibility));

    Router::new().nest("/api", api_routes).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(settings)),
    )
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env().context("Failed to read settings")?;
    telemetry::init(&settings.log_level);

    let addr = format!("0.0.0.0:{}", settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Numerology server running on http://{}", addr);
    info!("  POST /api/numerology/profile");
    info!("  POST /api/numerology/compatibility");

    axum::serve(listener, app(&settings))
        .await
        .context("Server error")?;

    Ok(())
}
