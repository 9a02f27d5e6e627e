// SPDX-FileCopyrightText: 2026 tagboard contributors
// SPDX-License-Identifier: MIT

//! HTTP wiring demo for the tagboard services.
//!
//! Maps a small REST surface onto [`PostService`] and [`ProductService`];
//! the services themselves know nothing about HTTP.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use sqlx::PgPool;
use tagboard::{
    ServiceError,
    config::DatabaseConfig,
    dto::{CreatePostRequest, CreateProductRequest, PageRequest, UpdatePostRequest,
        UpdateProductRequest},
    service::{PostService, ProductService},
};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
struct AppState {
    posts: Arc<PostService<PgPool, PgPool>>,
    products: Arc<ProductService<PgPool>>,
}

// ============================================================================
// Error Mapping
// ============================================================================

struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            err if err.is_not_found() => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

// ============================================================================
// Post Handlers
// ============================================================================

async fn list_posts(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.posts.get_posts(page).await?))
}

async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.posts.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.posts.get_detail(id).await?))
}

#[derive(Deserialize)]
struct UpdatePostBody {
    title: String,
    #[serde(default)]
    content: String,
}

async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePostBody>,
) -> Result<impl IntoResponse, ApiError> {
    let request = UpdatePostRequest {
        post_id: id,
        title: body.title,
        content: body.content,
    };
    Ok(Json(state.posts.modify(request).await?))
}

async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.posts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Product Handlers
// ============================================================================

async fn list_products(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.products.list(page).await?))
}

async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.products.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.products.get(id).await?))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.products.modify(id, request).await?))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.products.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Router Setup
// ============================================================================

fn app(state: AppState) -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).patch(update_post).delete(delete_post),
        )
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .with_state(state)
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "board_api=debug,tagboard=debug".into()),
        )
        .init();

    let pool = DatabaseConfig::from_env()
        .connect()
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState {
        posts: Arc::new(PostService::new(pool.clone(), pool.clone())),
        products: Arc::new(ProductService::new(pool)),
    };

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    tracing::info!("Listening on http://localhost:3000");
    axum::serve(listener, app(state)).await.unwrap();
}
