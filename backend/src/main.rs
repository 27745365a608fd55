use std::net::SocketAddr;

use axum::body::Body;
use axum::http::header::HeaderName;
use axum::http::{header, HeaderValue, Method, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info};

mod logging;
mod proxy;
mod relay;

#[derive(Clone)]
pub struct AppState {
    pub relay: relay::RelayClient,
}

pub async fn health_check() -> impl IntoResponse {
    Response::builder().status(200).body(Body::from("OK")).unwrap()
}

// SPA entry point; also the fallback so client-side routes survive a reload
async fn serve_frontend_index(
) -> Result<(StatusCode, [(HeaderName, &'static str); 2], Vec<u8>), (StatusCode, &'static str)> {
    let path = if std::path::Path::new("../frontend/dist/index.html").exists() {
        "../frontend/dist/index.html"
    } else {
        "frontend/dist/index.html"
    };

    match tokio::fs::read(path).await {
        Ok(data) => Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/html"),
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            ],
            data,
        )),
        Err(e) => {
            error!("Error reading index.html: {} (attempted path: {})", e, path);
            Err((StatusCode::NOT_FOUND, "Not Found"))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::setup();
    dotenvy::from_path(".env").ok();

    let state = AppState {
        relay: relay::RelayClient::from_env(),
    };
    info!("relaying /api/proxy requests to {}", state.relay.base_url());

    let cors = CorsLayer::new()
        .allow_origin(vec![
            "http://127.0.0.1:8080".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
            Method::DELETE,
        ])
        .allow_headers(vec![HeaderName::from_static("content-type")]);

    let dist_path = if std::path::Path::new("../frontend/dist").exists() {
        "../frontend/dist"
    } else {
        "frontend/dist"
    };

    let app = Router::new()
        .route("/api/health_check", get(health_check))
        .nest("/api/proxy", proxy::create_router())
        .nest_service("/dist", ServeDir::new(dist_path))
        .route("/", get(serve_frontend_index))
        .fallback(serve_frontend_index)
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
