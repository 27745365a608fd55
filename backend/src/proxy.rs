use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::relay::ApiError;
use crate::AppState;

/// Generic pass-through to the external backend: whatever follows
/// `/api/proxy/` becomes the backend path, with the method, body and
/// content-type relayed as-is.
pub fn create_router() -> Router<AppState> {
    Router::new().route(
        "/*path",
        get(proxy_get)
            .post(proxy_post)
            .put(proxy_put)
            .delete(proxy_delete),
    )
}

fn inbound_content_type(headers: &HeaderMap) -> &str {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
}

fn relay_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::OK)
}

async fn proxy_get(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state
        .relay
        .forward(reqwest::Method::GET, &path, None, None)
        .await
        .map_err(|err| {
            tracing::error!(
                "[proxy] GET {} error: status {} - {}",
                path,
                err.status,
                err.message
            );
            err
        })?;

    tracing::info!("[proxy] forwarding GET {} -> status {}", path, response.status);
    Ok((relay_status(response.status), Json(response.data)))
}

async fn proxy_post(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("[proxy] POST -> {}", path);
    let response = state
        .relay
        .forward(
            reqwest::Method::POST,
            &path,
            Some(inbound_content_type(&headers)),
            Some(body),
        )
        .await
        .map_err(|err| {
            tracing::error!(
                "[proxy] POST {} error: status {} - {}",
                path,
                err.status,
                err.message
            );
            err
        })?;

    tracing::info!("[proxy] forwarding POST {} -> status {}", path, response.status);
    Ok((relay_status(response.status), Json(response.data)))
}

async fn proxy_put(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("[proxy] PUT -> {}", path);
    let response = state
        .relay
        .forward(
            reqwest::Method::PUT,
            &path,
            Some(inbound_content_type(&headers)),
            Some(body),
        )
        .await
        .map_err(|err| {
            tracing::error!(
                "[proxy] PUT {} error: status {} - {}",
                path,
                err.status,
                err.message
            );
            err
        })?;

    tracing::info!("[proxy] forwarding PUT {} -> status {}", path, response.status);
    Ok((relay_status(response.status), Json(response.data)))
}

async fn proxy_delete(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("[proxy] DELETE -> {}", path);
    let response = state
        .relay
        .forward(reqwest::Method::DELETE, &path, None, None)
        .await
        .map_err(|err| {
            tracing::error!(
                "[proxy] DELETE {} error: status {} - {}",
                path,
                err.status,
                err.message
            );
            err
        })?;

    tracing::info!(
        "[proxy] forwarding DELETE {} -> status {}",
        path,
        response.status
    );
    Ok((relay_status(response.status), Json(response.data)))
}
