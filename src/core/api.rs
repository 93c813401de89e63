//! HTTP API for Emotion Reflection
//!
//! Endpoints:
//! - GET / - Health check
//! - POST /analyze-emotion - Analyze text
//! - GET /emotions - Supported labels

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderValue,
    response::Json,
    routing::{get, post},
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::core::{lexicon, EmotionAnalyzer};
use crate::error::AnalysisError;
use crate::types::{Emotion, EmotionReading};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address
    pub addr: String,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
    /// Fixed seed for reproducible analysis; entropy when absent
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8000".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            seed: None,
        }
    }
}

/// App state
pub struct AppState {
    pub analyzer: EmotionAnalyzer,
    pub seed: Option<u64>,
    /// Requests served so far; offsets the seed so each request draws differently
    pub request_count: AtomicU64,
}

impl AppState {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            analyzer: EmotionAnalyzer::new(),
            seed,
            request_count: AtomicU64::new(0),
        }
    }

    /// Fresh generator for one request
    fn request_rng(&self) -> StdRng {
        let n = self.request_count.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(n)),
            None => StdRng::from_entropy(),
        }
    }
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}

/// Supported emotions response
#[derive(Debug, Serialize)]
pub struct EmotionsResponse {
    pub emotions: Vec<Emotion>,
    pub total_count: usize,
}

/// Create the API router
pub fn create_router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState::new(config.seed));

    Router::new()
        .route("/", get(health))
        .route("/analyze-emotion", post(analyze_emotion))
        .route("/emotions", get(list_emotions))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
}

/// CORS restricted to the configured origins, credentials allowed
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Emotion Reflection API is running".to_string(),
        status: "healthy".to_string(),
    })
}

/// Analyze emotion in the posted text
async fn analyze_emotion(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<EmotionReading>, AnalysisError> {
    let Json(req) = payload.map_err(|e| AnalysisError::InvalidBody(e.body_text()))?;

    let mut rng = state.request_rng();
    match state.analyzer.analyze_with(&req.text, &mut rng) {
        Ok(reading) => {
            info!(emotion = %reading.emotion, confidence = reading.confidence, "analyzed text");
            Ok(Json(reading))
        }
        Err(e) => {
            warn!(error = %e, "analysis rejected");
            Err(e)
        }
    }
}

/// Supported emotion labels
async fn list_emotions() -> Json<EmotionsResponse> {
    let emotions = lexicon::labels();
    Json(EmotionsResponse {
        total_count: emotions.len(),
        emotions,
    })
}

/// Run the API server
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(&config);
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(addr = %config.addr, origins = ?config.allowed_origins, seeded = config.seed.is_some(), "Emotion Reflection API listening");
    info!("  GET  /                - Health check");
    info!("  POST /analyze-emotion - Analyze text");
    info!("  GET  /emotions        - Supported emotions");
    axum::serve(listener, router).await?;
    Ok(())
}
