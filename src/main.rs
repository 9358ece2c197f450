//! SSR host: renders the Leptos app, serves the WASM bundle under `/pkg`,
//! and answers `/healthz`.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use pollgen_web::app::{App, shell};
use pollgen_web::config::{AppConfig, FIREBASE_API_KEY_VAR};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(api_base_url = %config.api_base_url, identity_base_url = %config.identity_base_url, "client config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "client config invalid, using defaults");
            AppConfig::default()
        }
    };
    if !config.has_identity_key() {
        tracing::warn!(var = FIREBASE_API_KEY_VAR, "identity api key not set, sign-in will fail");
    }

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let app = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), config.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "pollgen-web listening");
    axum::serve(listener, app).await.expect("server failed");
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
