//! WattWise Web Server
//!
//! Axum-based REST API for the WattWise energy price dashboard. The browser
//! frontend (served from `--static-dir`) consumes four endpoints:
//!
//! - `GET /api/series` - chart-ready weekly price points
//! - `GET /api/windows` - cheapest/most expensive appliance run windows
//! - `GET /api/analysis` - AI-generated narrative price summary
//! - `GET /api/health` - provider and analyzer status
//!
//! The price series is fetched once at startup and held immutable for the
//! process lifetime. A fetch failure does not prevent startup; the data
//! endpoints degrade to an explicit error state instead. The narrative
//! analysis only ever runs against a valid series and is requested once per
//! series; its failures never block the chart or the calculator.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::sync::OnceCell;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{error, info, warn};

use wattwise_core::{AnalysisClient, PriceClient, PriceSeries};

mod handlers;

/// User-visible message when the price fetch failed; the underlying error is
/// logged, not exposed.
pub(crate) const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch energy data. Please try again later.";

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
///
/// Built once at startup; everything in it is immutable afterwards. The
/// series and the analysis client are injected rather than read from
/// globals, so tests can swap in fixed data and mock backends.
pub struct AppState {
    /// The validated weekly series, absent when the startup fetch failed
    pub series: Option<PriceSeries>,
    /// User-visible fetch failure message, present when `series` is absent
    pub fetch_error: Option<String>,
    /// Name of the price source that produced (or failed to produce) the series
    pub price_source: &'static str,
    /// Narrative analysis backend; `None` when unconfigured
    pub analysis: Option<AnalysisClient>,
    /// Cached narrative summary, computed at most once per series
    analysis_cache: OnceCell<String>,
}

impl AppState {
    /// Build state from a completed fetch attempt
    pub fn new(
        fetch: wattwise_core::Result<PriceSeries>,
        price_source: &'static str,
        analysis: Option<AnalysisClient>,
    ) -> Self {
        let (series, fetch_error) = match fetch {
            Ok(series) => (Some(series), None),
            Err(e) => {
                warn!(error = %e, source = price_source, "Price series fetch failed");
                (None, Some(FETCH_ERROR_MESSAGE.to_string()))
            }
        };

        Self {
            series,
            fetch_error,
            price_source,
            analysis,
            analysis_cache: OnceCell::new(),
        }
    }

    /// The series, or the upstream-fetch error every data endpoint reports
    pub(crate) fn series(&self) -> Result<&PriceSeries, AppError> {
        self.series.as_ref().ok_or_else(|| {
            AppError::bad_gateway(
                self.fetch_error
                    .as_deref()
                    .unwrap_or(FETCH_ERROR_MESSAGE),
            )
        })
    }

    /// The narrative summary for the current series, computed on first use
    ///
    /// Success is cached (the analysis is requested once per series);
    /// failures are not, so a later request may succeed.
    pub(crate) async fn narrative(
        &self,
        client: &AnalysisClient,
        series: &PriceSeries,
    ) -> wattwise_core::Result<&str> {
        self.analysis_cache
            .get_or_try_init(|| async { client.analyze(series).await })
            .await
            .map(String::as_str)
    }

    /// Kick the analysis off in the background once a valid series exists
    ///
    /// The dashboard's analysis panel then finds a warm cache. If the server
    /// shuts down first, the result is simply discarded.
    pub(crate) async fn warm_analysis(&self) {
        let (Some(series), Some(client)) = (self.series.as_ref(), self.analysis.as_ref()) else {
            return;
        };

        match self.narrative(client, series).await {
            Ok(_) => info!("Narrative analysis ready"),
            Err(e) => warn!(error = %e, "Narrative analysis warm-up failed; will retry on request"),
        }
    }
}

/// Create the application router
pub fn create_router(
    state: Arc<AppState>,
    static_dir: Option<&str>,
    config: &ServerConfig,
) -> Router {
    let api_routes = Router::new()
        .route("/series", get(handlers::get_series))
        .route("/windows", get(handlers::get_windows))
        .route("/analysis", get(handlers::get_analysis))
        .route("/health", get(handlers::get_health));

    // Build CORS layer: restrictive default, explicit origins on request
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    // Serve the browser frontend if a directory was provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Fetch the series once, then start the server
pub async fn serve(
    prices: PriceClient,
    analysis: Option<AnalysisClient>,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    check_analysis_connection(analysis.as_ref()).await;

    info!(source = prices.source(), "Fetching weekly price series");
    let fetch = prices.fetch_weekly_series().await;
    if let Ok(ref series) = fetch {
        info!(
            samples = series.len(),
            from = %series.first().timestamp,
            to = %series.last().timestamp,
            "Price series ready"
        );
    }

    let state = Arc::new(AppState::new(fetch, prices.source(), analysis));

    // The analysis request is only issued once a valid series exists; the
    // spawned task is fire-and-forget.
    if state.series.is_some() && state.analysis.is_some() {
        let warm = state.clone();
        tokio::spawn(async move { warm.warm_analysis().await });
    }

    let app = create_router(state, static_dir, &config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Check and log analysis backend status
async fn check_analysis_connection(analysis: Option<&AnalysisClient>) {
    match analysis {
        Some(client) => {
            if client.health_check().await {
                info!("✅ Analysis backend connected (model: {})", client.model());
            } else {
                warn!(
                    "⚠️  Analysis backend configured but not responding (model: {})",
                    client.model()
                );
            }
        }
        None => {
            info!("ℹ️  Analysis backend not configured (set GEMINI_API_KEY to enable AI analysis)");
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    /// An upstream collaborator failed (price generator, analysis service)
    pub fn bad_gateway(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// A feature is unconfigured; not transient, nothing to retry
    pub fn unavailable(msg: &str) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
