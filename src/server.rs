//! Development mock of the REST backend, served from [`InMemoryService`].

use crate::errors::ApiError;
use crate::models::{Product, User};
use crate::services::{AdminService, InMemoryService};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        warn!(error = %self, status = status.as_u16(), "request failed");
        (
            status,
            Json(json!({ "status": "error", "message": self.to_string() })),
        )
            .into_response()
    }
}

type HandlerResult<T> = Result<T, ApiError>;

pub fn router(service: InMemoryService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
        .route("/categories", get(list_categories))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_products(State(service): State<InMemoryService>) -> HandlerResult<impl IntoResponse> {
    Ok(Json(service.list_products()?))
}

async fn create_product(
    State(service): State<InMemoryService>,
    Json(product): Json<Product>,
) -> HandlerResult<impl IntoResponse> {
    let created = service.create_product(product)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_product(
    State(service): State<InMemoryService>,
    Path(id): Path<String>,
    Json(product): Json<Product>,
) -> HandlerResult<impl IntoResponse> {
    Ok(Json(service.update_product(&id, product)?))
}

async fn delete_product(
    State(service): State<InMemoryService>,
    Path(id): Path<String>,
) -> HandlerResult<impl IntoResponse> {
    service.delete_product(&id)?;
    Ok(Json(json!({})))
}

async fn list_users(State(service): State<InMemoryService>) -> HandlerResult<impl IntoResponse> {
    Ok(Json(service.list_users()?))
}

async fn create_user(
    State(service): State<InMemoryService>,
    Json(user): Json<User>,
) -> HandlerResult<impl IntoResponse> {
    let created = service.create_user(user)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_user(
    State(service): State<InMemoryService>,
    Path(id): Path<String>,
    Json(user): Json<User>,
) -> HandlerResult<impl IntoResponse> {
    Ok(Json(service.update_user(&id, user)?))
}

async fn delete_user(
    State(service): State<InMemoryService>,
    Path(id): Path<String>,
) -> HandlerResult<impl IntoResponse> {
    service.delete_user(&id)?;
    Ok(Json(json!({})))
}

async fn list_categories(
    State(service): State<InMemoryService>,
) -> HandlerResult<impl IntoResponse> {
    Ok(Json(service.list_categories()?))
}
