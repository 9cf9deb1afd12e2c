use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use polyread::Config;
use polyread::translation::{
    GoogleTranslateProvider, TranslationError, TranslationProvider, TranslationSession,
};
use polyread::weather::{WeatherClient, WeatherData};

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
    pub source_lang: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub source: String,
}

#[derive(Deserialize)]
pub struct WeatherQuery {
    pub city: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn TranslationProvider>,
    pub weather: Arc<WeatherClient>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().expect("valid directive")),
        )
        .init();

    let config = Config::from_env();
    let translator = GoogleTranslateProvider::new()
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;
    let weather =
        WeatherClient::new().map_err(|e| format!("Failed to initialize weather client: {}", e))?;

    let state = AppState {
        translator: Arc::new(translator),
        weather: Arc::new(weather),
    };

    info!("Starting polyread web server");

    let app = Router::new()
        .route("/api/translate", post(translate))
        .route("/api/weather", get(weather_by_city))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.api_host).await?;
    info!("Server running at http://{}", config.api_host);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        target = %request.target_lang,
        chars = request.text.chars().count(),
        "translate request"
    );

    // One session per request: the session owns per-call state, the provider
    // behind it is shared.
    let mut session = TranslationSession::new(Arc::clone(&state.translator));
    session
        .translate(
            &request.text,
            &request.target_lang,
            request.source_lang.as_deref(),
        )
        .await;

    if let Some(error) = session.error() {
        let status = if error == TranslationError::EmptyInput.to_string() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        return Err((
            status,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        ));
    }

    Ok(Json(TranslateResponse {
        translated_text: session.translated_text().to_string(),
        source: request.text,
    }))
}

async fn weather_by_city(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherData>, (StatusCode, Json<ErrorResponse>)> {
    info!(city = %query.city, "weather request");

    state
        .weather
        .fetch_by_city(&query.city)
        .await
        .map(Json)
        .map_err(|e| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })
}
