use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
pub mod utils {
    pub mod email_template;
    pub mod mailer;
}

use config::AppConfig;
use handlers::contact_handlers;
use utils::mailer::Mailer;

pub struct AppState {
    pub config: AppConfig,
    pub mailer: Arc<dyn Mailer>,
}

async fn health_check() -> &'static str {
    "OK"
}

/// Builds the full router: API routes, optional frontend bundle, tracing and CORS.
pub fn app(state: Arc<AppState>) -> Router {
    let frontend_dir = state.config.frontend_dir.clone();

    let mut app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::send_contact_email));

    if let Some(dir) = frontend_dir {
        // client side routes (/impressum, /datenschutz) are answered with the SPA entry point
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
    .layer(
        CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_origin(Any)
            .allow_headers([axum::http::header::CONTENT_TYPE])
            .expose_headers([axum::http::header::CONTENT_TYPE]),
    )
    .with_state(state)
}
